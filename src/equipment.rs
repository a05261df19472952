//! Equipment pieces and iconic levels.

use crate::error::ScoreError;
use crate::multiplier::DamageMultipliers;
use crate::stats::StatVector;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Equipment slot.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum EquipmentSlot {
    Weapon,
    Helm,
    Chest,
    Gloves,
    Pants,
    Boots,
    Accessory,
}

/// Discrete upgrade tier of an equipment piece.
///
/// Labels are normalized when parsed: `"V"`, `"v"` and `"Iconic V"` are all
/// the same level. Serialization always uses the bare numeral.
///
/// # Examples
///
/// ```rust
/// use buildscore::IconicLevel;
///
/// let plain: IconicLevel = "V".parse().unwrap();
/// let prefixed: IconicLevel = "Iconic V".parse().unwrap();
/// assert_eq!(plain, prefixed);
/// assert!(plain.is_max());
/// assert_eq!(prefixed.to_string(), "V");
///
/// assert!("VI".parse::<IconicLevel>().is_err());
/// ```
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum IconicLevel {
    I,
    II,
    III,
    IV,
    V,
}

impl IconicLevel {
    /// The highest iconic level. Only this tier grants damage multipliers.
    pub const MAX: IconicLevel = IconicLevel::V;

    /// Whether this is the maximum tier.
    pub fn is_max(self) -> bool {
        self == Self::MAX
    }

    /// The canonical label.
    pub fn as_str(self) -> &'static str {
        match self {
            IconicLevel::I => "I",
            IconicLevel::II => "II",
            IconicLevel::III => "III",
            IconicLevel::IV => "IV",
            IconicLevel::V => "V",
        }
    }
}

impl FromStr for IconicLevel {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let numeral = match trimmed.get(..6) {
            Some(prefix) if prefix.eq_ignore_ascii_case("iconic") => trimmed[6..].trim_start(),
            _ => trimmed,
        };
        match numeral.to_ascii_uppercase().as_str() {
            "I" => Ok(IconicLevel::I),
            "II" => Ok(IconicLevel::II),
            "III" => Ok(IconicLevel::III),
            "IV" => Ok(IconicLevel::IV),
            "V" => Ok(IconicLevel::V),
            _ => Err(ScoreError::InvalidIconicLevel(s.to_string())),
        }
    }
}

impl fmt::Display for IconicLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for IconicLevel {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.as_str().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IconicLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// An equipped piece with its level's stats already looked up.
///
/// # Examples
///
/// ```rust
/// use buildscore::{DamageMultipliers, EquipmentPiece, EquipmentSlot, IconicLevel, StatVector};
///
/// let boost = DamageMultipliers { skill_dmg: 0.05, ..Default::default() };
/// let piece = EquipmentPiece::new(EquipmentSlot::Weapon, IconicLevel::IV, StatVector::ZERO)
///     .with_multipliers(boost)
///     .in_set("Dragon's Breath");
///
/// // Below the maximum tier the multipliers do not apply.
/// assert_eq!(piece.active_multipliers(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentPiece {
    /// Slot the piece occupies.
    pub slot: EquipmentSlot,
    /// Iconic level the stats were taken from.
    pub iconic_level: IconicLevel,
    /// Stats at that level.
    #[serde(default)]
    pub stats: StatVector,
    /// Multipliers, only effective at the maximum level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multipliers: Option<DamageMultipliers>,
    /// Set the piece belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
}

impl EquipmentPiece {
    /// Create a piece with no multipliers and no set.
    pub fn new(slot: EquipmentSlot, iconic_level: IconicLevel, stats: StatVector) -> Self {
        Self {
            slot,
            iconic_level,
            stats,
            multipliers: None,
            set_name: None,
        }
    }

    /// Attach damage multipliers.
    pub fn with_multipliers(mut self, multipliers: DamageMultipliers) -> Self {
        self.multipliers = Some(multipliers);
        self
    }

    /// Tag the piece as a member of a named set.
    pub fn in_set(mut self, set_name: impl Into<String>) -> Self {
        self.set_name = Some(set_name.into());
        self
    }

    /// The multipliers this piece contributes, if it is at the maximum tier.
    pub fn active_multipliers(&self) -> Option<DamageMultipliers> {
        if self.iconic_level.is_max() {
            self.multipliers
        } else {
            None
        }
    }
}
