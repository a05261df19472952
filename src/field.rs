//! Stat field identifiers.
//!
//! Every stat vector has exactly nine named fields. `StatField` enumerates
//! them in a fixed order and carries their wire names, so all accumulation
//! goes through the same explicit field list instead of arbitrary keys.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the nine fields of a [`StatVector`](crate::stats::StatVector).
///
/// # Examples
///
/// ```rust
/// use buildscore::StatField;
///
/// assert_eq!(StatField::ALL.len(), 9);
/// assert_eq!(StatField::SkillDamage.as_str(), "skill_dmg");
/// assert!(StatField::SmiteDamage.is_damage());
/// assert!(!StatField::NormalAttack.is_damage());
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StatField {
    #[serde(rename = "attack")]
    Attack,
    #[serde(rename = "defense")]
    Defense,
    #[serde(rename = "health")]
    Health,
    #[serde(rename = "all_dmg")]
    AllDamage,
    #[serde(rename = "na")]
    NormalAttack,
    #[serde(rename = "ca")]
    CounterAttack,
    #[serde(rename = "skill_dmg")]
    SkillDamage,
    #[serde(rename = "smite_dmg")]
    SmiteDamage,
    #[serde(rename = "combo_dmg")]
    ComboDamage,
}

impl StatField {
    /// All fields in canonical order.
    pub const ALL: [StatField; 9] = [
        StatField::Attack,
        StatField::Defense,
        StatField::Health,
        StatField::AllDamage,
        StatField::NormalAttack,
        StatField::CounterAttack,
        StatField::SkillDamage,
        StatField::SmiteDamage,
        StatField::ComboDamage,
    ];

    /// The wire name of this field.
    pub fn as_str(self) -> &'static str {
        match self {
            StatField::Attack => "attack",
            StatField::Defense => "defense",
            StatField::Health => "health",
            StatField::AllDamage => "all_dmg",
            StatField::NormalAttack => "na",
            StatField::CounterAttack => "ca",
            StatField::SkillDamage => "skill_dmg",
            StatField::SmiteDamage => "smite_dmg",
            StatField::ComboDamage => "combo_dmg",
        }
    }

    /// The damage category this field belongs to, if any.
    ///
    /// Only damage-category fields are affected by damage multipliers.
    pub fn damage(self) -> Option<DamageField> {
        match self {
            StatField::AllDamage => Some(DamageField::All),
            StatField::SkillDamage => Some(DamageField::Skill),
            StatField::SmiteDamage => Some(DamageField::Smite),
            StatField::ComboDamage => Some(DamageField::Combo),
            _ => None,
        }
    }

    /// Whether this field is a damage-category field.
    pub fn is_damage(self) -> bool {
        self.damage().is_some()
    }
}

impl fmt::Display for StatField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four damage categories that can carry a multiplier.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DamageField {
    #[serde(rename = "all_dmg")]
    All,
    #[serde(rename = "skill_dmg")]
    Skill,
    #[serde(rename = "smite_dmg")]
    Smite,
    #[serde(rename = "combo_dmg")]
    Combo,
}

impl DamageField {
    /// All damage categories in canonical order.
    pub const ALL: [DamageField; 4] = [
        DamageField::All,
        DamageField::Skill,
        DamageField::Smite,
        DamageField::Combo,
    ];

    /// The stat field this damage category multiplies.
    pub fn stat_field(self) -> StatField {
        match self {
            DamageField::All => StatField::AllDamage,
            DamageField::Skill => StatField::SkillDamage,
            DamageField::Smite => StatField::SmiteDamage,
            DamageField::Combo => StatField::ComboDamage,
        }
    }
}

impl fmt::Display for DamageField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.stat_field().as_str())
    }
}
