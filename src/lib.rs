//! # buildscore - Deterministic Commander Build Scoring
//!
//! A scoring engine for strategy-game commander builds that provides:
//! - **Deterministic** evaluation (same input → same output, no I/O)
//! - **Layered** aggregation of heterogeneous bonus sources
//! - **Role-specific** weighting and tier classification
//!
//! ## Core Concepts
//!
//! ### Scoring Pipeline
//!
//! ```text
//! [Layer 1: player]    ─┐
//! [Layer 2: equipment] ─┼→ [weighted score per layer] → [combine] → total, %, tier
//! [Layer 3: formation] ─┘
//! ```
//!
//! 1. Each layer merges its sources into a nine-field [`StatVector`]
//! 2. Damage multipliers are applied once, after all additive merging
//! 3. Each layer is scored against the role's [`StatWeights`]
//! 4. The three scores are summed and graded against the role's reference
//!
//! ### Key Features
//!
//! - **Set Bonuses**: only the highest attained level of each set applies
//! - **Iconic Levels**: only maximum-tier equipment grants multipliers
//! - **Scoped Inscriptions**: rally/garrison inscriptions apply to matching roles
//! - **Silent Defaults**: missing sources contribute zero instead of failing
//!
//! ## Example
//!
//! ```rust
//! use buildscore::*;
//!
//! let scale = StatWeights::uniform(0.0).with(StatField::Attack, 1.0);
//! let role = Role::new("INF RALLY", TroopType::Infantry, RoleType::Rally, scale, 500.0);
//!
//! let mut inputs = BuildInputs::new(role);
//! inputs.player.vip = StatVector::ZERO.with(StatField::Attack, 50.0);
//! inputs.equipment.push(EquipmentPiece::new(
//!     EquipmentSlot::Weapon,
//!     IconicLevel::V,
//!     StatVector::ZERO.with(StatField::Attack, 100.0),
//! ));
//! inputs.formation.armament.attack = 25.0;
//!
//! let result = evaluate(&inputs);
//! assert_eq!(result.summary.total_score, 175.0);
//! assert_eq!(result.summary.percentage_of_max, 35.0);
//! assert_eq!(result.summary.tier, Tier::C);
//! ```
//!
//! ## Modules
//!
//! - [`field`] - Stat field identifiers
//! - [`stats`] - Stat vectors and weight scales
//! - [`multiplier`] - Damage multipliers
//! - [`scorer`] - Weighted scoring
//! - [`set_bonus`] - Set bonus resolution
//! - [`layer`] - The three aggregation layers
//! - [`combine`] - Score combination
//! - [`build`] - Whole-build evaluation
//! - [`catalog`] - Reference data and selection resolution
//! - [`error`] - Error types

pub mod build;
pub mod catalog;
pub mod combine;
pub mod equipment;
pub mod error;
pub mod field;
pub mod inscription;
pub mod layer;
pub mod multiplier;
pub mod numeric;
pub mod role;
pub mod scorer;
pub mod set_bonus;
pub mod stats;
pub mod tier;

// Re-export main types for convenience
pub use build::{evaluate, BuildInputs, BuildResult};
pub use catalog::{BuildSelection, EquipmentSelection, ReferenceData};
pub use combine::{combine, ScoreSummary};
pub use error::ScoreError;
pub use field::{DamageField, StatField};
pub use numeric::StatValue;
pub use role::{Role, RoleType, ScoringScales, TierThresholds, TroopType};
pub use stats::{StatVector, StatWeights};
pub use tier::Tier;

// Re-export layer inputs and aggregators
pub use equipment::{EquipmentPiece, EquipmentSlot, IconicLevel};
pub use inscription::{ArmamentAttributes, FormationBonus, Inscription, InscriptionScope, Rarity};
pub use layer::{
    aggregate_layer1, aggregate_layer2, aggregate_layer3, EquipmentLayerResult, FormationSources,
    LayerResult, PlayerBonuses,
};
pub use multiplier::DamageMultipliers;
pub use scorer::weighted_score;
pub use set_bonus::{resolve_set_bonuses, ActiveSetBonus, SetBonus, SetBonusLevel};
