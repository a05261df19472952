//! Damage multipliers.
//!
//! Multipliers are percentages expressed as fractions (`0.10` = +10%).
//! Within a layer they accumulate additively and are applied exactly once,
//! after all additive stat merging, as `field *= 1 + multiplier`.

use crate::field::DamageField;
use crate::numeric::{zero_if_null, StatValue};
use crate::stats::StatVector;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

/// Multipliers for the four damage categories.
///
/// # Examples
///
/// ```rust
/// use buildscore::{DamageMultipliers, StatVector};
///
/// let mut stats = StatVector { all_dmg: 60.0, ..StatVector::ZERO };
/// let multipliers = DamageMultipliers { all_dmg: 0.1, ..Default::default() }
///     + DamageMultipliers { all_dmg: 0.1, ..Default::default() };
///
/// multipliers.apply_to(&mut stats);
/// assert!((stats.all_dmg - 72.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct DamageMultipliers {
    /// Fractional bonus to all-damage.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub all_dmg: StatValue,
    /// Fractional bonus to skill damage.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub skill_dmg: StatValue,
    /// Fractional bonus to smite damage.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub smite_dmg: StatValue,
    /// Fractional bonus to combo damage.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub combo_dmg: StatValue,
}

impl DamageMultipliers {
    /// No multipliers.
    pub const NONE: DamageMultipliers = DamageMultipliers {
        all_dmg: 0.0,
        skill_dmg: 0.0,
        smite_dmg: 0.0,
        combo_dmg: 0.0,
    };

    /// The multiplier for one damage category.
    pub fn get(&self, damage: DamageField) -> StatValue {
        match damage {
            DamageField::All => self.all_dmg,
            DamageField::Skill => self.skill_dmg,
            DamageField::Smite => self.smite_dmg,
            DamageField::Combo => self.combo_dmg,
        }
    }

    /// The scale factor `1 + multiplier` for one damage category.
    pub fn factor(&self, damage: DamageField) -> StatValue {
        1.0 + self.get(damage)
    }

    /// Scale the four damage fields of `stats` in place.
    ///
    /// Negative base values are scaled like any other value.
    pub fn apply_to(&self, stats: &mut StatVector) {
        for damage in DamageField::ALL {
            *stats.get_mut(damage.stat_field()) *= self.factor(damage);
        }
    }
}

impl Add for DamageMultipliers {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            all_dmg: self.all_dmg + other.all_dmg,
            skill_dmg: self.skill_dmg + other.skill_dmg,
            smite_dmg: self.smite_dmg + other.smite_dmg,
            combo_dmg: self.combo_dmg + other.combo_dmg,
        }
    }
}

impl AddAssign for DamageMultipliers {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::StatField;

    #[test]
    fn test_apply_leaves_non_damage_fields() {
        let mut stats = StatVector::from_fn(|_| 10.0);
        let multipliers = DamageMultipliers {
            all_dmg: 0.5,
            skill_dmg: 1.0,
            smite_dmg: 0.0,
            combo_dmg: 0.25,
        };
        multipliers.apply_to(&mut stats);

        assert_eq!(stats.attack, 10.0);
        assert_eq!(stats.na, 10.0);
        assert_eq!(stats.ca, 10.0);
        assert_eq!(stats.all_dmg, 15.0);
        assert_eq!(stats.skill_dmg, 20.0);
        assert_eq!(stats.smite_dmg, 10.0);
        assert_eq!(stats.combo_dmg, 12.5);
    }

    #[test]
    fn test_multipliers_sum_not_compound() {
        let a = DamageMultipliers { skill_dmg: 0.2, ..Default::default() };
        let mut total = DamageMultipliers::NONE;
        total += a;
        total += a;

        let mut stats = StatVector::ZERO.with(StatField::SkillDamage, 100.0);
        total.apply_to(&mut stats);
        assert!((stats.skill_dmg - 140.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_base_is_scaled() {
        let mut stats = StatVector::ZERO.with(StatField::SmiteDamage, -4.0);
        DamageMultipliers { smite_dmg: 0.5, ..Default::default() }.apply_to(&mut stats);
        assert_eq!(stats.smite_dmg, -6.0);
    }

    #[test]
    fn test_partial_multipliers_deserialize() {
        let m: DamageMultipliers = serde_json::from_str(r#"{"combo_dmg": 0.05}"#).unwrap();
        assert_eq!(m.combo_dmg, 0.05);
        assert_eq!(m.all_dmg, 0.0);
    }

    #[test]
    fn test_null_multiplier_is_zero() {
        let m: DamageMultipliers =
            serde_json::from_str(r#"{"all_dmg": null, "skill_dmg": 0.1}"#).unwrap();
        assert_eq!(m.all_dmg, 0.0);
        assert_eq!(m.skill_dmg, 0.1);
    }
}
