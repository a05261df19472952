//! Commander roles.
//!
//! A role identifies a troop type, role type and damage focus, and carries
//! the weight scales, reference score and tier thresholds used to grade a
//! build for that role. Roles are immutable reference data.

use crate::error::ScoreError;
use crate::numeric::StatValue;
use crate::stats::StatWeights;
use serde::{Deserialize, Serialize};

/// Troop type a role commands.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TroopType {
    Cavalry,
    Archer,
    Infantry,
    Leadership,
}

/// Whether a role leads rallies or defends garrisons.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RoleType {
    Rally,
    Garrison,
}

/// Weight scales for a role.
///
/// Layers 1 and 2 share `layer_1_2`. Layer 3 uses `layer_3` when present,
/// otherwise it falls back to `layer_1_2`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringScales {
    /// Scale shared by layers 1 and 2.
    pub layer_1_2: StatWeights,
    /// Optional dedicated layer 3 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_3: Option<StatWeights>,
}

impl ScoringScales {
    /// The scale used for layer 3 scoring.
    pub fn layer_3_or_fallback(&self) -> &StatWeights {
        self.layer_3.as_ref().unwrap_or(&self.layer_1_2)
    }
}

/// Tier thresholds, as percentages of the highest score reference.
///
/// Omitted thresholds default to `87.5 / 81 / 75 / 66`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierThresholds {
    /// Minimum percentage for S+.
    #[serde(default = "TierThresholds::default_s_plus")]
    pub s_plus: StatValue,
    /// Minimum percentage for S.
    #[serde(default = "TierThresholds::default_s")]
    pub s: StatValue,
    /// Minimum percentage for A.
    #[serde(default = "TierThresholds::default_a")]
    pub a: StatValue,
    /// Minimum percentage for B.
    #[serde(default = "TierThresholds::default_b")]
    pub b: StatValue,
}

impl TierThresholds {
    fn default_s_plus() -> StatValue {
        87.5
    }

    fn default_s() -> StatValue {
        81.0
    }

    fn default_a() -> StatValue {
        75.0
    }

    fn default_b() -> StatValue {
        66.0
    }

    /// Whether the thresholds are ordered `s_plus >= s >= a >= b`.
    pub fn is_ordered(&self) -> bool {
        self.s_plus >= self.s && self.s >= self.a && self.a >= self.b
    }
}

impl Default for TierThresholds {
    fn default() -> Self {
        Self {
            s_plus: Self::default_s_plus(),
            s: Self::default_s(),
            a: Self::default_a(),
            b: Self::default_b(),
        }
    }
}

/// A commander role definition.
///
/// # Examples
///
/// ```rust
/// use buildscore::{Role, RoleType, StatWeights, TroopType};
///
/// let role = Role::new(
///     "ARCHER RALLY - SKILL DMG",
///     TroopType::Archer,
///     RoleType::Rally,
///     StatWeights::uniform(1.0),
///     500.0,
/// );
/// assert!(role.validate().is_ok());
/// assert_eq!(role.tier_thresholds.s, 81.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    /// Identifier such as `"CAV GARRISON - DAVID"`.
    pub role_id: String,
    /// Troop type the role commands.
    pub troop_type: TroopType,
    /// Rally or garrison.
    pub role_type: RoleType,
    /// Free-form focus label, e.g. `"SKILL DMG"` or `"HYBRID"`.
    #[serde(default)]
    pub damage_focus: String,
    /// Weight scales for the three layers.
    pub scoring_scales: ScoringScales,
    /// Assumed maximum attainable score; the percentage denominator.
    pub highest_score_reference: StatValue,
    /// Tier thresholds for this role.
    #[serde(default)]
    pub tier_thresholds: TierThresholds,
}

impl Role {
    /// Create a role with a single scale for all layers and default thresholds.
    pub fn new(
        role_id: impl Into<String>,
        troop_type: TroopType,
        role_type: RoleType,
        scale: StatWeights,
        highest_score_reference: StatValue,
    ) -> Self {
        Self {
            role_id: role_id.into(),
            troop_type,
            role_type,
            damage_focus: String::new(),
            scoring_scales: ScoringScales {
                layer_1_2: scale,
                layer_3: None,
            },
            highest_score_reference,
            tier_thresholds: TierThresholds::default(),
        }
    }

    /// Use a distinct scale for layer 3.
    pub fn with_layer_3_scale(mut self, scale: StatWeights) -> Self {
        self.scoring_scales.layer_3 = Some(scale);
        self
    }

    /// Replace the tier thresholds.
    pub fn with_thresholds(mut self, thresholds: TierThresholds) -> Self {
        self.tier_thresholds = thresholds;
        self
    }

    /// Check the reference-data invariants for this role.
    ///
    /// The scoring engine does not call this; it is enforced where roles
    /// are loaded so that percentage computation never divides by zero.
    ///
    /// # Errors
    ///
    /// Returns `ScoreError::InvalidRole` if `highest_score_reference` is not
    /// a finite value greater than zero, or if the thresholds are unordered.
    pub fn validate(&self) -> Result<(), ScoreError> {
        let invalid = |reason: &str| ScoreError::InvalidRole {
            role_id: self.role_id.clone(),
            reason: reason.to_string(),
        };

        if !(self.highest_score_reference.is_finite() && self.highest_score_reference > 0.0) {
            return Err(invalid("highest_score_reference must be a finite value > 0"));
        }
        if !self.tier_thresholds.is_ordered() {
            return Err(invalid("tier thresholds must satisfy s_plus >= s >= a >= b"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::StatField;

    fn role() -> Role {
        Role::new(
            "INF GARRISON",
            TroopType::Infantry,
            RoleType::Garrison,
            StatWeights::uniform(1.0),
            100.0,
        )
    }

    #[test]
    fn test_layer_3_falls_back_to_layer_1_2() {
        let r = role();
        assert_eq!(r.scoring_scales.layer_3_or_fallback(), &StatWeights::uniform(1.0));

        let distinct = StatWeights::uniform(0.0).with(StatField::Health, 2.0);
        let r = r.with_layer_3_scale(distinct);
        assert_eq!(r.scoring_scales.layer_3_or_fallback(), &distinct);
    }

    #[test]
    fn test_validate_rejects_zero_reference() {
        let mut r = role();
        r.highest_score_reference = 0.0;
        assert!(matches!(r.validate(), Err(ScoreError::InvalidRole { .. })));

        r.highest_score_reference = f64::NAN;
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_unordered_thresholds() {
        let r = role().with_thresholds(TierThresholds {
            s_plus: 80.0,
            s: 81.0,
            a: 75.0,
            b: 66.0,
        });
        assert!(r.validate().is_err());
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let json = r#"{
            "role_id": "CAV RALLY - COMBO",
            "troop_type": "CAVALRY",
            "role_type": "RALLY",
            "scoring_scales": {
                "layer_1_2": {"attack":1,"defense":1,"health":1,"all_dmg":1,"na":1,"ca":1,
                              "skill_dmg":1,"smite_dmg":1,"combo_dmg":1}
            },
            "highest_score_reference": 250,
            "tier_thresholds": {"b": 60}
        }"#;
        let r: Role = serde_json::from_str(json).unwrap();
        assert_eq!(r.troop_type, TroopType::Cavalry);
        assert_eq!(r.role_type, RoleType::Rally);
        assert!(r.scoring_scales.layer_3.is_none());
        assert_eq!(r.tier_thresholds.s_plus, 87.5);
        assert_eq!(r.tier_thresholds.b, 60.0);
        assert!(r.validate().is_ok());
    }
}
