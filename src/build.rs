//! Whole-build evaluation.
//!
//! Ties the three layers and the combiner together. Evaluation is a pure
//! function of its inputs: no I/O, no shared state, and the same inputs
//! always produce the same `BuildResult`.

use crate::combine::{combine, ScoreSummary};
use crate::equipment::EquipmentPiece;
use crate::layer::{
    aggregate_layer1, aggregate_layer2, aggregate_layer3, EquipmentLayerResult, FormationSources,
    LayerResult, PlayerBonuses,
};
use crate::role::Role;
use crate::set_bonus::SetBonus;
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// Fully resolved inputs for one build evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildInputs {
    /// Role the build is scored against.
    pub role: Role,
    /// Layer 1 sources.
    #[serde(default)]
    pub player: PlayerBonuses,
    /// Layer 2 equipped pieces.
    #[serde(default)]
    pub equipment: Vec<EquipmentPiece>,
    /// Set bonus definitions to check the pieces against.
    #[serde(default)]
    pub set_bonuses: Vec<SetBonus>,
    /// Layer 3 sources.
    #[serde(default)]
    pub formation: FormationSources,
}

impl BuildInputs {
    /// Inputs for a role with every source empty.
    pub fn new(role: Role) -> Self {
        Self {
            role,
            player: PlayerBonuses::default(),
            equipment: Vec::new(),
            set_bonuses: Vec::new(),
            formation: FormationSources::default(),
        }
    }
}

/// The scored result of a build.
///
/// Created once per evaluation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BuildResult {
    /// Identifier of the scored role.
    pub role_id: String,
    /// Player bonuses layer.
    pub layer_1: LayerResult,
    /// Equipment layer.
    pub layer_2: EquipmentLayerResult,
    /// Formation layer.
    pub layer_3: LayerResult,
    /// Total, percentage and tier.
    #[serde(flatten)]
    pub summary: ScoreSummary,
}

/// Evaluate a build.
///
/// # Examples
///
/// ```rust
/// use buildscore::{evaluate, BuildInputs, Role, RoleType, StatField, StatVector};
/// use buildscore::{StatWeights, Tier, TroopType};
///
/// let scale = StatWeights::uniform(0.0).with(StatField::Attack, 1.0);
/// let role = Role::new("CAV RALLY", TroopType::Cavalry, RoleType::Rally, scale, 500.0);
///
/// let mut inputs = BuildInputs::new(role);
/// inputs.player.vip = StatVector::ZERO.with(StatField::Attack, 50.0);
///
/// let result = evaluate(&inputs);
/// assert_eq!(result.layer_1.score, 50.0);
/// assert_eq!(result.summary.percentage_of_max, 10.0);
/// assert_eq!(result.summary.tier, Tier::C);
/// ```
pub fn evaluate(inputs: &BuildInputs) -> BuildResult {
    let role = &inputs.role;

    let layer_1 = aggregate_layer1(&inputs.player, role);
    trace!("layer 1 stats for {}: {:?}", role.role_id, layer_1.stats);
    debug!("layer 1 score for {}: {:.2}", role.role_id, layer_1.score);

    let layer_2 = aggregate_layer2(&inputs.equipment, &inputs.set_bonuses, role);
    trace!("layer 2 stats for {}: {:?}", role.role_id, layer_2.layer.stats);
    debug!(
        "layer 2 score for {}: {:.2} ({} pieces, {} active sets)",
        role.role_id,
        layer_2.layer.score,
        inputs.equipment.len(),
        layer_2.set_bonuses.len()
    );

    let layer_3 = aggregate_layer3(&inputs.formation, role);
    trace!("layer 3 stats for {}: {:?}", role.role_id, layer_3.stats);
    debug!("layer 3 score for {}: {:.2}", role.role_id, layer_3.score);

    let summary = combine(layer_1.score, layer_2.layer.score, layer_3.score, role);
    debug!(
        "build for {} scored {:.2} ({:.2}% of {}), tier {}",
        role.role_id,
        summary.total_score,
        summary.percentage_of_max,
        role.highest_score_reference,
        summary.tier
    );

    BuildResult {
        role_id: role.role_id.clone(),
        layer_1,
        layer_2,
        layer_3,
        summary,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::role::{RoleType, TroopType};
    use crate::stats::{StatVector, StatWeights};

    #[test]
    fn test_empty_build_scores_zero() {
        let role = Role::new(
            "LEADERSHIP GARRISON",
            TroopType::Leadership,
            RoleType::Garrison,
            StatWeights::uniform(1.0),
            100.0,
        );
        let result = evaluate(&BuildInputs::new(role));

        assert_eq!(result.layer_1.stats, StatVector::ZERO);
        assert_eq!(result.layer_2.layer.stats, StatVector::ZERO);
        assert_eq!(result.layer_3.stats, StatVector::ZERO);
        assert_eq!(result.summary.total_score, 0.0);
        assert_eq!(result.summary.tier, crate::tier::Tier::C);
    }

    #[test]
    fn test_result_serializes_wire_names() {
        let role = Role::new(
            "INF RALLY",
            TroopType::Infantry,
            RoleType::Rally,
            StatWeights::uniform(1.0),
            100.0,
        );
        let json = serde_json::to_value(evaluate(&BuildInputs::new(role))).unwrap();

        assert_eq!(json["role_id"], "INF RALLY");
        assert_eq!(json["tier"], "C");
        assert!(json.get("total_score").is_some());
        assert!(json.get("percentage_of_max").is_some());
        assert!(json["layer_1"].get("multipliers").is_none());
        assert!(json["layer_2"]["set_bonuses"].is_array());
        assert_eq!(json["layer_3"]["multipliers"]["combo_dmg"], 0.0);
        assert_eq!(json["layer_3"]["stats"].as_object().unwrap().len(), 9);
    }
}
