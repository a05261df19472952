//! The three bonus-aggregation layers.
//!
//! Each layer merges its own sources into a single [`StatVector`] and
//! scores it against the role's weight scale. The layers never read each
//! other's output, so they can be computed in any order.
//!
//! ```text
//! Layer 1: VIP + civilisation + spending + city skin   -> layer_1_2 scale
//! Layer 2: equipment + set bonuses, x multipliers      -> layer_1_2 scale
//! Layer 3: formation + inscriptions + armament, x mult -> layer_3 scale
//! ```

use crate::equipment::EquipmentPiece;
use crate::inscription::{ArmamentAttributes, FormationBonus, Inscription};
use crate::multiplier::DamageMultipliers;
use crate::numeric::StatValue;
use crate::role::Role;
use crate::scorer::weighted_score;
use crate::set_bonus::{resolve_set_bonuses, ActiveSetBonus, SetBonus};
use crate::stats::StatVector;
use serde::{Deserialize, Serialize};

/// Player profile bonus sources for layer 1.
///
/// A source that does not exist for the player is [`StatVector::ZERO`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerBonuses {
    /// VIP level bonus.
    #[serde(default)]
    pub vip: StatVector,
    /// Civilisation bonus for the role.
    #[serde(default)]
    pub civilisation: StatVector,
    /// Spending tier bonus.
    #[serde(default)]
    pub spending: StatVector,
    /// City skin bonus for the role.
    #[serde(default)]
    pub city_skin: StatVector,
}

/// Formation, inscription and armament sources for layer 3.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FormationSources {
    /// Selected formation, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formation: Option<FormationBonus>,
    /// Selected inscriptions, before scope filtering.
    #[serde(default)]
    pub inscriptions: Vec<Inscription>,
    /// Manually entered armament attributes.
    #[serde(default)]
    pub armament: ArmamentAttributes,
}

/// The merged stats and score of one layer.
///
/// `multipliers` is set for layers 2 and 3 and records the multipliers
/// that were already applied to `stats`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerResult {
    /// Merged stats with multipliers applied.
    pub stats: StatVector,
    /// Weighted score of `stats`.
    pub score: StatValue,
    /// Multiplier total applied to `stats`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multipliers: Option<DamageMultipliers>,
}

/// Layer 2 result together with the set bonuses that were applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquipmentLayerResult {
    /// Stats, score and multipliers.
    #[serde(flatten)]
    pub layer: LayerResult,
    /// Active set bonuses, sorted by set name.
    pub set_bonuses: Vec<ActiveSetBonus>,
}

/// Layer 1: player base stats.
///
/// The merge is asymmetric:
///
/// | field | sources |
/// |---|---|
/// | attack, defense, health, all_dmg | all four |
/// | na | civilisation |
/// | skill_dmg | civilisation + city skin |
/// | ca, smite_dmg, combo_dmg | none (always 0) |
///
/// Scored with `layer_1_2` and no multipliers.
///
/// # Examples
///
/// ```rust
/// use buildscore::{aggregate_layer1, PlayerBonuses, Role, RoleType, StatField};
/// use buildscore::{StatVector, StatWeights, TroopType};
///
/// let role = Role::new("ARCHER RALLY", TroopType::Archer, RoleType::Rally,
///     StatWeights::uniform(1.0), 500.0);
/// let sources = PlayerBonuses {
///     vip: StatVector::ZERO.with(StatField::SkillDamage, 5.0),
///     civilisation: StatVector::ZERO.with(StatField::SkillDamage, 5.0),
///     ..Default::default()
/// };
///
/// let result = aggregate_layer1(&sources, &role);
/// assert_eq!(result.stats.skill_dmg, 5.0);
/// assert_eq!(result.score, 5.0);
/// ```
pub fn aggregate_layer1(sources: &PlayerBonuses, role: &Role) -> LayerResult {
    let PlayerBonuses {
        vip,
        civilisation,
        spending,
        city_skin,
    } = sources;
    let all = [vip, civilisation, spending, city_skin];
    let sum = |get: fn(&StatVector) -> StatValue| all.iter().map(|&s| get(s)).sum::<StatValue>();

    let stats = StatVector {
        attack: sum(|s| s.attack),
        defense: sum(|s| s.defense),
        health: sum(|s| s.health),
        all_dmg: sum(|s| s.all_dmg),
        na: civilisation.na,
        ca: 0.0,
        skill_dmg: civilisation.skill_dmg + city_skin.skill_dmg,
        smite_dmg: 0.0,
        combo_dmg: 0.0,
    };

    let score = weighted_score(&stats, &role.scoring_scales.layer_1_2, None);
    LayerResult {
        stats,
        score,
        multipliers: None,
    }
}

/// Layer 2: equipment and set bonuses.
///
/// Piece stats and active set-bonus stats are summed first. Multipliers
/// from maximum-tier pieces are summed and then applied to the damage
/// fields exactly once, after all additive merging. Scored with
/// `layer_1_2`.
pub fn aggregate_layer2(
    pieces: &[EquipmentPiece],
    set_definitions: &[SetBonus],
    role: &Role,
) -> EquipmentLayerResult {
    let (piece_stats, multipliers) = pieces.iter().fold(
        (StatVector::ZERO, DamageMultipliers::NONE),
        |(stats, multipliers), piece| {
            (
                stats + piece.stats,
                multipliers + piece.active_multipliers().unwrap_or_default(),
            )
        },
    );

    let set_bonuses = resolve_set_bonuses(pieces, set_definitions);
    let mut stats = piece_stats + set_bonuses.iter().map(|b| b.stats).sum::<StatVector>();
    multipliers.apply_to(&mut stats);

    let score = weighted_score(&stats, &role.scoring_scales.layer_1_2, None);
    EquipmentLayerResult {
        layer: LayerResult {
            stats,
            score,
            multipliers: Some(multipliers),
        },
        set_bonuses,
    }
}

/// Layer 3: formation, inscriptions and armament attributes.
///
/// Inscriptions whose scope does not match the role type are skipped.
/// Each remaining inscription adds its stats, subtracts its negative
/// effects and adds its multipliers to a running total. Armament
/// attributes are added, then the multiplier total is applied once.
/// Scored with `layer_3`, falling back to `layer_1_2`.
pub fn aggregate_layer3(sources: &FormationSources, role: &Role) -> LayerResult {
    let seed = (
        sources
            .formation
            .as_ref()
            .map(|f| f.stats)
            .unwrap_or(StatVector::ZERO),
        DamageMultipliers::NONE,
    );

    let (inscribed, multipliers) = sources
        .inscriptions
        .iter()
        .filter(|inscription| inscription.scope.applies_to(role.role_type))
        .fold(seed, |(stats, multipliers), inscription| {
            (
                stats + inscription.net_stats(),
                multipliers + inscription.multipliers.unwrap_or_default(),
            )
        });

    let mut stats = inscribed + sources.armament.to_stats();
    multipliers.apply_to(&mut stats);

    let score = weighted_score(&stats, role.scoring_scales.layer_3_or_fallback(), None);
    LayerResult {
        stats,
        score,
        multipliers: Some(multipliers),
    }
}
