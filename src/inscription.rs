//! Formation, inscription and armament records used by layer 3.

use crate::multiplier::DamageMultipliers;
use crate::numeric::{zero_if_null, StatValue};
use crate::role::RoleType;
use crate::stats::StatVector;
use serde::{Deserialize, Serialize};

/// Where an inscription's bonus applies.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InscriptionScope {
    /// Applies to every role.
    #[default]
    Global,
    /// Applies only to rally roles.
    Rally,
    /// Applies only to garrison roles.
    Garrison,
}

impl InscriptionScope {
    /// Whether a bonus with this scope applies to the given role type.
    pub fn applies_to(self, role_type: RoleType) -> bool {
        match self {
            InscriptionScope::Global => true,
            InscriptionScope::Rally => role_type == RoleType::Rally,
            InscriptionScope::Garrison => role_type == RoleType::Garrison,
        }
    }
}

/// Inscription rarity.
///
/// A build selection lists inscriptions per rarity; an inscription whose
/// recorded rarity differs from the list it was selected from is skipped.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Rarity {
    Common,
    Rare,
    Special,
}

/// A resolved inscription.
///
/// `stats` are added, `negative_effects` are subtracted field by field and
/// `multipliers` accumulate into the layer's multiplier total.
///
/// # Examples
///
/// ```rust
/// use buildscore::{Inscription, InscriptionScope, RoleType, StatField, StatVector};
///
/// let inscription = Inscription::new("Bulwark", StatVector::ZERO.with(StatField::Defense, 2.0))
///     .with_negative_effects(StatVector::ZERO.with(StatField::Attack, 1.0))
///     .scoped(InscriptionScope::Garrison);
///
/// assert_eq!(inscription.net_stats().defense, 2.0);
/// assert_eq!(inscription.net_stats().attack, -1.0);
/// assert!(!inscription.scope.applies_to(RoleType::Rally));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inscription {
    /// Unique inscription identifier.
    pub inscription_id: String,
    /// Rarity, if recorded. Unrecorded rarity matches every list.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rarity: Option<Rarity>,
    /// Role types the inscription applies to.
    #[serde(default)]
    pub scope: InscriptionScope,
    /// Stats added to layer 3.
    #[serde(default)]
    pub stats: StatVector,
    /// Stats subtracted from layer 3.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub negative_effects: Option<StatVector>,
    /// Multipliers added to the layer 3 total.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multipliers: Option<DamageMultipliers>,
}

impl Inscription {
    /// Create a global inscription with only positive stats.
    pub fn new(inscription_id: impl Into<String>, stats: StatVector) -> Self {
        Self {
            inscription_id: inscription_id.into(),
            rarity: None,
            scope: InscriptionScope::Global,
            stats,
            negative_effects: None,
            multipliers: None,
        }
    }

    /// Record the inscription's rarity.
    pub fn with_rarity(mut self, rarity: Rarity) -> Self {
        self.rarity = Some(rarity);
        self
    }

    /// Set the stats this inscription subtracts.
    pub fn with_negative_effects(mut self, negative_effects: StatVector) -> Self {
        self.negative_effects = Some(negative_effects);
        self
    }

    /// Attach damage multipliers.
    pub fn with_multipliers(mut self, multipliers: DamageMultipliers) -> Self {
        self.multipliers = Some(multipliers);
        self
    }

    /// Restrict the inscription to rally or garrison roles.
    pub fn scoped(mut self, scope: InscriptionScope) -> Self {
        self.scope = scope;
        self
    }

    /// Whether this inscription may be selected from the `rarity` list.
    pub fn is_rarity(&self, rarity: Rarity) -> bool {
        self.rarity.map_or(true, |r| r == rarity)
    }

    /// Positive stats minus negative effects.
    pub fn net_stats(&self) -> StatVector {
        self.stats - self.negative_effects.unwrap_or(StatVector::ZERO)
    }
}

/// A formation's bonus, keyed by formation name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormationBonus {
    /// Formation name.
    pub name: String,
    /// Stats the formation adds to layer 3.
    #[serde(default)]
    pub stats: StatVector,
}

impl FormationBonus {
    /// Create a formation bonus.
    pub fn new(name: impl Into<String>, stats: StatVector) -> Self {
        Self {
            name: name.into(),
            stats,
        }
    }
}

/// Manually entered armament attributes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ArmamentAttributes {
    /// Attack bonus.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub attack: StatValue,
    /// Defense bonus.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub defense: StatValue,
    /// Health bonus.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub health: StatValue,
    /// All-damage bonus, scaled by the layer 3 `all_dmg` multiplier.
    #[serde(default, deserialize_with = "zero_if_null")]
    pub all_dmg: StatValue,
}

impl ArmamentAttributes {
    /// The attributes as a stat vector; all other fields are zero.
    pub fn to_stats(self) -> StatVector {
        StatVector {
            attack: self.attack,
            defense: self.defense,
            health: self.health,
            all_dmg: self.all_dmg,
            ..StatVector::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_matching() {
        assert!(InscriptionScope::Global.applies_to(RoleType::Rally));
        assert!(InscriptionScope::Global.applies_to(RoleType::Garrison));
        assert!(InscriptionScope::Rally.applies_to(RoleType::Rally));
        assert!(!InscriptionScope::Rally.applies_to(RoleType::Garrison));
        assert!(InscriptionScope::Garrison.applies_to(RoleType::Garrison));
    }

    #[test]
    fn test_inscription_defaults_from_json() {
        let i: Inscription =
            serde_json::from_str(r#"{"inscription_id": "rage", "stats": {"skill_dmg": 3}}"#)
                .unwrap();
        assert_eq!(i.scope, InscriptionScope::Global);
        assert_eq!(i.stats.skill_dmg, 3.0);
        assert!(i.negative_effects.is_none());
        assert_eq!(i.net_stats(), i.stats);
    }

    #[test]
    fn test_armament_attributes_only_fill_four_fields() {
        let stats = ArmamentAttributes {
            attack: 1.0,
            defense: 2.0,
            health: 3.0,
            all_dmg: 4.0,
        }
        .to_stats();
        assert_eq!(stats.all_dmg, 4.0);
        assert_eq!(stats.skill_dmg, 0.0);
        assert_eq!(stats.na, 0.0);
    }

    #[test]
    fn test_rarity_matching() {
        let plain = Inscription::new("plain", StatVector::ZERO);
        assert!(plain.is_rarity(Rarity::Special));
        assert!(plain.is_rarity(Rarity::Common));

        let rare = plain.with_rarity(Rarity::Rare);
        assert!(rare.is_rarity(Rarity::Rare));
        assert!(!rare.is_rarity(Rarity::Special));
    }

    #[test]
    fn test_null_armament_fields_are_zero() {
        let armament: ArmamentAttributes =
            serde_json::from_str(r#"{"attack": 2, "all_dmg": null}"#).unwrap();
        assert_eq!(armament.attack, 2.0);
        assert_eq!(armament.all_dmg, 0.0);
    }
}
