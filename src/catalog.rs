//! Reference data and selection resolution.
//!
//! `ReferenceData` holds the static tables a build is resolved against:
//! roles, player profile bonuses, equipment, set bonuses, inscriptions and
//! formations. `ReferenceData::resolve` turns a raw `BuildSelection` of
//! identifiers and labels into the `BuildInputs` the engine consumes.
//!
//! Only a missing role is an error. Any other selection that cannot be
//! found is dropped with a warning and contributes nothing.

use crate::build::BuildInputs;
use crate::equipment::{EquipmentPiece, EquipmentSlot, IconicLevel};
use crate::error::ScoreError;
use crate::inscription::{ArmamentAttributes, FormationBonus, Inscription, Rarity};
use crate::layer::{FormationSources, PlayerBonuses};
use crate::multiplier::DamageMultipliers;
use crate::role::Role;
use crate::set_bonus::SetBonus;
use crate::stats::StatVector;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// VIP bonus for one VIP level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VipBonus {
    /// VIP level this row applies to.
    pub vip_level: u32,
    /// Bonus stats, stored inline in the row.
    #[serde(flatten)]
    pub stats: StatVector,
}

/// Bonus for one spending tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingTier {
    /// Tier name, e.g. `"Whale"`.
    pub tier_name: String,
    /// Bonus stats, stored inline in the row.
    #[serde(flatten)]
    pub stats: StatVector,
}

/// A bonus optionally scoped to a single role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleScopedBonus {
    /// Role this entry applies to; `None` applies to any role.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role_id: Option<String>,
    /// Bonus stats, stored inline in the entry.
    #[serde(flatten)]
    pub stats: StatVector,
}

/// A named bonus table with per-role entries (civilisations, city skins).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScopedBonusTable {
    /// Civilisation or city skin name.
    pub name: String,
    /// Entries keyed by role.
    #[serde(default)]
    pub bonuses_by_role: Vec<RoleScopedBonus>,
}

impl ScopedBonusTable {
    /// The bonus for `role_id`, or the unscoped bonus if there is none.
    pub fn bonus_for(&self, role_id: &str) -> Option<&StatVector> {
        self.bonuses_by_role
            .iter()
            .find(|b| b.role_id.as_deref() == Some(role_id))
            .or_else(|| self.bonuses_by_role.iter().find(|b| b.role_id.is_none()))
            .map(|b| &b.stats)
    }
}

/// Stats and multipliers of an equipment item at one iconic level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconicLevelStats {
    /// The iconic level.
    pub level: IconicLevel,
    /// Stats at this level.
    #[serde(default)]
    pub stats: StatVector,
    /// Multipliers at this level; only effective at the maximum level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multipliers: Option<DamageMultipliers>,
}

/// An equipment item definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentDefinition {
    /// Unique equipment identifier.
    pub equipment_id: String,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Slot the item occupies.
    #[serde(rename = "type")]
    pub slot: EquipmentSlot,
    /// Set the item belongs to, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_name: Option<String>,
    /// Per-level stats.
    #[serde(default)]
    pub iconic_levels: Vec<IconicLevelStats>,
}

impl EquipmentDefinition {
    /// Resolve this item at the given level into an equipped piece.
    pub fn at_level(&self, level: IconicLevel) -> Option<EquipmentPiece> {
        let entry = self.iconic_levels.iter().find(|l| l.level == level)?;
        Some(EquipmentPiece {
            slot: self.slot,
            iconic_level: level,
            stats: entry.stats,
            multipliers: entry.multipliers,
            set_name: self.set_name.clone(),
        })
    }
}

/// One equipment selection: an item identifier and a level label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentSelection {
    /// Identifier of the selected item.
    pub equipment_id: String,
    /// Either `"V"` or `"Iconic V"` style.
    pub iconic_level: String,
}

/// A raw build selection, as submitted by a player.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildSelection {
    /// Role to evaluate against. Must exist.
    pub role_id: String,
    /// VIP level.
    #[serde(default)]
    pub vip_level: Option<u32>,
    /// Civilisation name.
    #[serde(default)]
    pub civilisation: Option<String>,
    /// Spending tier name.
    #[serde(default)]
    pub spending_tier: Option<String>,
    /// City skin name.
    #[serde(default)]
    pub city_skin: Option<String>,
    /// Equipped items.
    #[serde(default)]
    pub equipment_pieces: Vec<EquipmentSelection>,
    /// Formation name.
    #[serde(default)]
    pub formation: Option<String>,
    /// Inscription identifiers chosen from the special list.
    #[serde(default)]
    pub special_inscriptions: Vec<String>,
    /// Inscription identifiers chosen from the rare list.
    #[serde(default)]
    pub rare_inscriptions: Vec<String>,
    /// Inscription identifiers chosen from the common list.
    #[serde(default)]
    pub common_inscriptions: Vec<String>,
    /// Manually entered armament attributes.
    #[serde(default)]
    pub armament_attributes: ArmamentAttributes,
}

/// Static reference tables.
///
/// # Examples
///
/// ```rust
/// use buildscore::{BuildSelection, ReferenceData, ScoreError};
///
/// let data = ReferenceData::from_json(r#"{
///     "roles": [{
///         "role_id": "ARCHER RALLY",
///         "troop_type": "ARCHER",
///         "role_type": "RALLY",
///         "scoring_scales": {"layer_1_2": {"attack":1,"defense":0,"health":0,"all_dmg":0,
///             "na":0,"ca":0,"skill_dmg":0,"smite_dmg":0,"combo_dmg":0}},
///         "highest_score_reference": 100
///     }],
///     "vip_bonuses": [{"vip_level": 15, "attack": 12}]
/// }"#).unwrap();
///
/// let selection = BuildSelection {
///     role_id: "ARCHER RALLY".into(),
///     vip_level: Some(15),
///     ..Default::default()
/// };
/// let inputs = data.resolve(&selection).unwrap();
/// assert_eq!(inputs.player.vip.attack, 12.0);
///
/// let missing = BuildSelection { role_id: "NOPE".into(), ..Default::default() };
/// assert!(matches!(data.resolve(&missing), Err(ScoreError::RoleNotFound(_))));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    /// Role definitions.
    #[serde(default)]
    pub roles: Vec<Role>,
    /// VIP bonus per level.
    #[serde(default)]
    pub vip_bonuses: Vec<VipBonus>,
    /// Spending tier bonuses.
    #[serde(default)]
    pub spending_tiers: Vec<SpendingTier>,
    /// Civilisation bonus tables.
    #[serde(default)]
    pub civilisations: Vec<ScopedBonusTable>,
    /// City skin bonus tables.
    #[serde(default)]
    pub city_skins: Vec<ScopedBonusTable>,
    /// Equipment definitions.
    #[serde(default)]
    pub equipment: Vec<EquipmentDefinition>,
    /// Set bonus definitions.
    #[serde(default)]
    pub set_bonuses: Vec<SetBonus>,
    /// Inscription definitions.
    #[serde(default)]
    pub inscriptions: Vec<Inscription>,
    /// Formation bonuses.
    #[serde(default)]
    pub formations: Vec<FormationBonus>,
}

impl ReferenceData {
    /// Decode reference data from JSON and validate every role.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::InvalidReferenceData` if the JSON is malformed
    /// and `ScoreError::InvalidRole` if any role breaks its invariants.
    pub fn from_json(json: &str) -> Result<Self, ScoreError> {
        let data: ReferenceData = serde_json::from_str(json)?;
        data.validate()?;
        debug!(
            "loaded reference data: {} roles, {} equipment, {} inscriptions",
            data.roles.len(),
            data.equipment.len(),
            data.inscriptions.len()
        );
        Ok(data)
    }

    /// Validate every role in the tables.
    pub fn validate(&self) -> Result<(), ScoreError> {
        self.roles.iter().try_for_each(Role::validate)
    }

    /// Add a role after validating it.
    pub fn add_role(&mut self, role: Role) -> Result<(), ScoreError> {
        role.validate()?;
        self.roles.push(role);
        Ok(())
    }

    /// Look up a role by identifier.
    pub fn role(&self, role_id: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.role_id == role_id)
    }

    /// Resolve a raw selection into engine inputs.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::RoleNotFound` if the role does not exist.
    /// Unknown equipment, levels, inscriptions, formations and bonus table
    /// entries are skipped.
    pub fn resolve(&self, selection: &BuildSelection) -> Result<BuildInputs, ScoreError> {
        let role = self
            .role(&selection.role_id)
            .ok_or_else(|| ScoreError::RoleNotFound(selection.role_id.clone()))?;

        Ok(BuildInputs {
            role: role.clone(),
            player: self.resolve_player(selection),
            equipment: self.resolve_equipment(&selection.equipment_pieces),
            set_bonuses: self.set_bonuses.clone(),
            formation: self.resolve_formation(selection),
        })
    }

    fn resolve_player(&self, selection: &BuildSelection) -> PlayerBonuses {
        let role_id = selection.role_id.as_str();

        let vip = selection
            .vip_level
            .and_then(|level| self.vip_bonuses.iter().find(|v| v.vip_level == level))
            .map(|v| v.stats);
        let spending = selection
            .spending_tier
            .as_deref()
            .and_then(|name| self.spending_tiers.iter().find(|t| t.tier_name == name))
            .map(|t| t.stats);
        let civilisation = selection
            .civilisation
            .as_deref()
            .and_then(|name| Self::scoped_bonus(&self.civilisations, name, role_id));
        let city_skin = selection
            .city_skin
            .as_deref()
            .and_then(|name| Self::scoped_bonus(&self.city_skins, name, role_id));

        PlayerBonuses {
            vip: vip.unwrap_or(StatVector::ZERO),
            civilisation: civilisation.unwrap_or(StatVector::ZERO),
            spending: spending.unwrap_or(StatVector::ZERO),
            city_skin: city_skin.unwrap_or(StatVector::ZERO),
        }
    }

    fn scoped_bonus(
        tables: &[ScopedBonusTable],
        name: &str,
        role_id: &str,
    ) -> Option<StatVector> {
        tables
            .iter()
            .find(|t| t.name == name)
            .and_then(|t| t.bonus_for(role_id))
            .copied()
    }

    fn resolve_equipment(&self, selections: &[EquipmentSelection]) -> Vec<EquipmentPiece> {
        selections
            .iter()
            .filter_map(|selection| {
                let Some(definition) = self
                    .equipment
                    .iter()
                    .find(|e| e.equipment_id == selection.equipment_id)
                else {
                    warn!("skipping unknown equipment {:?}", selection.equipment_id);
                    return None;
                };
                let level = match selection.iconic_level.parse::<IconicLevel>() {
                    Ok(level) => level,
                    Err(err) => {
                        warn!("skipping equipment {:?}: {}", selection.equipment_id, err);
                        return None;
                    }
                };
                let piece = definition.at_level(level);
                if piece.is_none() {
                    warn!(
                        "skipping equipment {:?}: no stats for level {}",
                        selection.equipment_id, level
                    );
                }
                piece
            })
            .collect()
    }

    fn resolve_formation<'a>(&self, selection: &'a BuildSelection) -> FormationSources {
        let formation = selection.formation.as_deref().and_then(|name| {
            let found = self.formations.iter().find(|f| f.name == name).cloned();
            if found.is_none() {
                warn!("unknown formation {:?}", name);
            }
            found
        });

        let tagged = |ids: &'a [String], rarity: Rarity| ids.iter().map(move |id| (id, rarity));
        let mut seen: Vec<&str> = Vec::new();
        let inscriptions = tagged(&selection.special_inscriptions[..], Rarity::Special)
            .chain(tagged(&selection.rare_inscriptions[..], Rarity::Rare))
            .chain(tagged(&selection.common_inscriptions[..], Rarity::Common))
            .filter_map(|(id, rarity)| {
                if seen.contains(&id.as_str()) {
                    return None;
                }
                seen.push(id.as_str());
                let Some(found) = self.inscriptions.iter().find(|i| &i.inscription_id == id) else {
                    warn!("skipping unknown inscription {:?}", id);
                    return None;
                };
                if !found.is_rarity(rarity) {
                    warn!("skipping inscription {:?}: not {:?}", id, rarity);
                    return None;
                }
                Some(found.clone())
            })
            .collect();

        FormationSources {
            formation,
            inscriptions,
            armament: selection.armament_attributes,
        }
    }
}
