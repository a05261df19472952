//! Weighted scoring.
//!
//! Turns a stat vector into a single scalar by taking the dot product
//! with a role's weight scale.

use crate::field::StatField;
use crate::multiplier::DamageMultipliers;
use crate::numeric::StatValue;
use crate::stats::{StatVector, StatWeights};

/// Score a stat vector against a weight scale.
///
/// For each of the nine fields the value is read from `stats`. If
/// `multipliers` is given and the field is a damage field, the value is
/// first scaled by `1 + multiplier` for its category. The (possibly
/// scaled) value is then multiplied by the field's weight and accumulated.
///
/// This never fails; a zero weight or zero value simply contributes nothing.
///
/// # Examples
///
/// ```rust
/// use buildscore::{weighted_score, DamageMultipliers, StatField, StatVector, StatWeights};
///
/// let stats = StatVector { attack: 10.0, all_dmg: 4.0, ..StatVector::ZERO };
/// let scale = StatWeights::uniform(0.0)
///     .with(StatField::Attack, 2.0)
///     .with(StatField::AllDamage, 1.0);
///
/// assert_eq!(weighted_score(&stats, &scale, None), 24.0);
///
/// let boost = DamageMultipliers { all_dmg: 0.5, ..Default::default() };
/// assert_eq!(weighted_score(&stats, &scale, Some(&boost)), 26.0);
/// ```
pub fn weighted_score(
    stats: &StatVector,
    scale: &StatWeights,
    multipliers: Option<&DamageMultipliers>,
) -> StatValue {
    StatField::ALL
        .iter()
        .fold(0.0, |score, &field| {
            let mut value = stats.get(field);
            if let (Some(multipliers), Some(damage)) = (multipliers, field.damage()) {
                value *= multipliers.factor(damage);
            }
            score + value * scale.weight(field)
        })
}
