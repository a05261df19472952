//! Final score combination and tier classification.

use crate::numeric::{round_half_up, StatValue};
use crate::role::Role;
use crate::tier::Tier;
use serde::{Deserialize, Serialize};

/// Total score, percentage of reference and tier for a build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreSummary {
    /// Sum of the three layer scores, rounded to two decimals.
    pub total_score: StatValue,
    /// Tier classified from the unrounded percentage.
    pub tier: Tier,
    /// `total_score` as a percentage of the role reference, rounded to two decimals.
    pub percentage_of_max: StatValue,
}

/// Combine the three layer scores into a summary.
///
/// The total and the percentage of `role.highest_score_reference` are both
/// rounded half-up to two decimals. The tier is classified from the exact
/// percentage before rounding. Percentages above 100 are not clamped.
///
/// `highest_score_reference` is assumed to be positive; see
/// [`Role::validate`].
///
/// # Examples
///
/// ```rust
/// use buildscore::{combine, Role, RoleType, StatWeights, Tier, TroopType};
///
/// let role = Role::new("INF RALLY", TroopType::Infantry, RoleType::Rally,
///     StatWeights::uniform(1.0), 500.0);
///
/// let summary = combine(50.0, 100.0, 25.0, &role);
/// assert_eq!(summary.total_score, 175.0);
/// assert_eq!(summary.percentage_of_max, 35.0);
/// assert_eq!(summary.tier, Tier::C);
/// ```
pub fn combine(
    score1: StatValue,
    score2: StatValue,
    score3: StatValue,
    role: &Role,
) -> ScoreSummary {
    let total = score1 + score2 + score3;
    let percentage = 100.0 * total / role.highest_score_reference;

    ScoreSummary {
        total_score: round_half_up(total, 2),
        tier: Tier::classify(percentage, &role.tier_thresholds),
        percentage_of_max: round_half_up(percentage, 2),
    }
}
