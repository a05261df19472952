//! Numeric helpers for stat values.

use serde::{Deserialize, Deserializer};

/// Type alias for stat values, weights and scores.
pub type StatValue = f64;

/// Round a value to `places` decimal places, rounding halves upward.
///
/// Halves always round toward positive infinity (`2.345 -> 2.35`,
/// `-2.345 -> -2.34`), matching how scores are displayed elsewhere.
///
/// # Examples
///
/// ```rust
/// use buildscore::numeric::round_half_up;
///
/// assert_eq!(round_half_up(175.0, 2), 175.0);
/// assert_eq!(round_half_up(12.3449, 2), 12.34);
/// assert_eq!(round_half_up(0.125, 2), 0.13);
/// ```
pub fn round_half_up(value: StatValue, places: u32) -> StatValue {
    let factor = 10_f64.powi(places as i32);
    (value * factor + 0.5).floor() / factor
}

/// Deserialize a stat value, reading JSON `null` as zero.
///
/// Paired with `#[serde(default)]` so that absent and null fields behave
/// the same way.
pub fn zero_if_null<'de, D>(deserializer: D) -> Result<StatValue, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<StatValue>::deserialize(deserializer)?.unwrap_or(0.0))
}
