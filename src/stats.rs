//! Stat vectors and weight scales.
//!
//! `StatVector` is the unit of accumulation used by every layer. All nine
//! fields are always present; sources that only define some of them
//! deserialize with the rest set to zero and unknown keys ignored.
//!
//! `StatWeights` has the same shape but every field is required, since a
//! role's scale with an implicit zero weight is a data error.

use crate::field::StatField;
use crate::numeric::{zero_if_null, StatValue};
use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub, SubAssign};

/// A fixed nine-field stat record.
///
/// # Examples
///
/// ```rust
/// use buildscore::{StatField, StatVector};
///
/// let vip = StatVector::ZERO.with(StatField::Attack, 5.0);
/// let civ = StatVector::ZERO
///     .with(StatField::Attack, 3.0)
///     .with(StatField::SkillDamage, 2.0);
///
/// let combined = vip + civ;
/// assert_eq!(combined.attack, 8.0);
/// assert_eq!(combined.skill_dmg, 2.0);
/// assert_eq!(combined.get(StatField::Defense), 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StatVector {
    /// Attack bonus.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub attack: StatValue,
    /// Defense bonus.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub defense: StatValue,
    /// Health bonus.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub health: StatValue,
    /// All-damage bonus.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub all_dmg: StatValue,
    /// Normal-attack damage bonus.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub na: StatValue,
    /// Counter-attack damage bonus.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub ca: StatValue,
    /// Skill damage bonus.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub skill_dmg: StatValue,
    /// Smite damage bonus.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub smite_dmg: StatValue,
    /// Combo damage bonus.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub combo_dmg: StatValue,
}

impl StatVector {
    /// The zero vector. Missing bonus sources are represented by this value.
    pub const ZERO: StatVector = StatVector {
        attack: 0.0,
        defense: 0.0,
        health: 0.0,
        all_dmg: 0.0,
        na: 0.0,
        ca: 0.0,
        skill_dmg: 0.0,
        smite_dmg: 0.0,
        combo_dmg: 0.0,
    };

    /// Read a single field.
    pub fn get(&self, field: StatField) -> StatValue {
        match field {
            StatField::Attack => self.attack,
            StatField::Defense => self.defense,
            StatField::Health => self.health,
            StatField::AllDamage => self.all_dmg,
            StatField::NormalAttack => self.na,
            StatField::CounterAttack => self.ca,
            StatField::SkillDamage => self.skill_dmg,
            StatField::SmiteDamage => self.smite_dmg,
            StatField::ComboDamage => self.combo_dmg,
        }
    }

    /// Mutable access to a single field.
    pub fn get_mut(&mut self, field: StatField) -> &mut StatValue {
        match field {
            StatField::Attack => &mut self.attack,
            StatField::Defense => &mut self.defense,
            StatField::Health => &mut self.health,
            StatField::AllDamage => &mut self.all_dmg,
            StatField::NormalAttack => &mut self.na,
            StatField::CounterAttack => &mut self.ca,
            StatField::SkillDamage => &mut self.skill_dmg,
            StatField::SmiteDamage => &mut self.smite_dmg,
            StatField::ComboDamage => &mut self.combo_dmg,
        }
    }

    /// Overwrite a single field.
    pub fn set(&mut self, field: StatField, value: StatValue) {
        *self.get_mut(field) = value;
    }

    /// Return a copy with one field replaced.
    pub fn with(mut self, field: StatField, value: StatValue) -> Self {
        self.set(field, value);
        self
    }

    /// Build a vector by evaluating `f` for each field.
    ///
    /// ```rust
    /// use buildscore::{StatField, StatVector};
    ///
    /// let ones = StatVector::from_fn(|_| 1.0);
    /// assert_eq!(ones.combo_dmg, 1.0);
    ///
    /// let only_damage = StatVector::from_fn(|f| if f.is_damage() { 2.0 } else { 0.0 });
    /// assert_eq!(only_damage.attack, 0.0);
    /// assert_eq!(only_damage.smite_dmg, 2.0);
    /// ```
    pub fn from_fn(mut f: impl FnMut(StatField) -> StatValue) -> Self {
        let mut out = StatVector::ZERO;
        for field in StatField::ALL {
            out.set(field, f(field));
        }
        out
    }

    /// Iterate over `(field, value)` pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (StatField, StatValue)> + '_ {
        StatField::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

impl Add for StatVector {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        StatVector::from_fn(|field| self.get(field) + other.get(field))
    }
}

impl AddAssign for StatVector {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}

impl Sub for StatVector {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        StatVector::from_fn(|field| self.get(field) - other.get(field))
    }
}

impl SubAssign for StatVector {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}

impl Sum for StatVector {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(StatVector::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a StatVector> for StatVector {
    fn sum<I: Iterator<Item = &'a StatVector>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

/// A per-field weight scale used to turn a `StatVector` into a score.
///
/// Unlike `StatVector`, every field is required when deserializing.
///
/// # Examples
///
/// ```rust
/// use buildscore::{StatField, StatWeights};
///
/// let scale = StatWeights::uniform(0.0).with(StatField::Attack, 1.0);
/// assert_eq!(scale.weight(StatField::Attack), 1.0);
/// assert_eq!(scale.weight(StatField::Health), 0.0);
///
/// let partial = serde_json::from_str::<StatWeights>(r#"{"attack": 1.0}"#);
/// assert!(partial.is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StatWeights {
    /// Weight for `attack`.
    pub attack: StatValue,
    /// Weight for `defense`.
    pub defense: StatValue,
    /// Weight for `health`.
    pub health: StatValue,
    /// Weight for `all_dmg`.
    pub all_dmg: StatValue,
    /// Weight for `na`.
    pub na: StatValue,
    /// Weight for `ca`.
    pub ca: StatValue,
    /// Weight for `skill_dmg`.
    pub skill_dmg: StatValue,
    /// Weight for `smite_dmg`.
    pub smite_dmg: StatValue,
    /// Weight for `combo_dmg`.
    pub combo_dmg: StatValue,
}

impl StatWeights {
    /// A scale with the same weight on every field.
    pub fn uniform(weight: StatValue) -> Self {
        Self {
            attack: weight,
            defense: weight,
            health: weight,
            all_dmg: weight,
            na: weight,
            ca: weight,
            skill_dmg: weight,
            smite_dmg: weight,
            combo_dmg: weight,
        }
    }

    /// The weight for a single field.
    pub fn weight(&self, field: StatField) -> StatValue {
        match field {
            StatField::Attack => self.attack,
            StatField::Defense => self.defense,
            StatField::Health => self.health,
            StatField::AllDamage => self.all_dmg,
            StatField::NormalAttack => self.na,
            StatField::CounterAttack => self.ca,
            StatField::SkillDamage => self.skill_dmg,
            StatField::SmiteDamage => self.smite_dmg,
            StatField::ComboDamage => self.combo_dmg,
        }
    }

    /// Mutable access to a single weight.
    pub fn get_mut(&mut self, field: StatField) -> &mut StatValue {
        match field {
            StatField::Attack => &mut self.attack,
            StatField::Defense => &mut self.defense,
            StatField::Health => &mut self.health,
            StatField::AllDamage => &mut self.all_dmg,
            StatField::NormalAttack => &mut self.na,
            StatField::CounterAttack => &mut self.ca,
            StatField::SkillDamage => &mut self.skill_dmg,
            StatField::SmiteDamage => &mut self.smite_dmg,
            StatField::ComboDamage => &mut self.combo_dmg,
        }
    }

    /// Return a copy with one weight replaced.
    pub fn with(mut self, field: StatField, weight: StatValue) -> Self {
        *self.get_mut(field) = weight;
        self
    }
}
