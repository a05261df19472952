//! Letter tiers.

use crate::numeric::StatValue;
use crate::role::TierThresholds;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The letter grade assigned to a build.
///
/// Serializes to exactly `"S+"`, `"S"`, `"A"`, `"B"` or `"C"`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    #[serde(rename = "S+")]
    SPlus,
    S,
    A,
    B,
    C,
}

impl Tier {
    /// Classify a percentage-of-reference against ordered thresholds.
    ///
    /// Thresholds are inclusive lower bounds checked from highest to lowest;
    /// the first one met wins. Anything below `b` (including NaN) is `C`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use buildscore::{Tier, TierThresholds};
    ///
    /// let thresholds = TierThresholds::default();
    /// assert_eq!(Tier::classify(90.0, &thresholds), Tier::SPlus);
    /// assert_eq!(Tier::classify(81.0, &thresholds), Tier::S);
    /// assert_eq!(Tier::classify(80.99, &thresholds), Tier::A);
    /// assert_eq!(Tier::classify(10.0, &thresholds), Tier::C);
    /// ```
    pub fn classify(percentage: StatValue, thresholds: &TierThresholds) -> Tier {
        if percentage >= thresholds.s_plus {
            Tier::SPlus
        } else if percentage >= thresholds.s {
            Tier::S
        } else if percentage >= thresholds.a {
            Tier::A
        } else if percentage >= thresholds.b {
            Tier::B
        } else {
            Tier::C
        }
    }

    /// The display label.
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::SPlus => "S+",
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn thresholds() -> TierThresholds {
        TierThresholds {
            s_plus: 87.5,
            s: 81.0,
            a: 75.0,
            b: 66.0,
        }
    }

    #[test]
    fn test_boundaries_are_inclusive() {
        let t = thresholds();
        assert_eq!(Tier::classify(87.5, &t), Tier::SPlus);
        assert_eq!(Tier::classify(81.0, &t), Tier::S);
        assert_eq!(Tier::classify(75.0, &t), Tier::A);
        assert_eq!(Tier::classify(66.0, &t), Tier::B);
        assert_eq!(Tier::classify(65.99, &t), Tier::C);
    }

    #[test]
    fn test_above_hundred_is_not_clamped() {
        assert_eq!(Tier::classify(250.0, &thresholds()), Tier::SPlus);
    }

    #[test]
    fn test_nan_is_c() {
        assert_eq!(Tier::classify(f64::NAN, &thresholds()), Tier::C);
    }

    #[test]
    fn test_serialized_labels() {
        let labels: Vec<String> = [Tier::SPlus, Tier::S, Tier::A, Tier::B, Tier::C]
            .iter()
            .map(|t| serde_json::to_string(t).unwrap())
            .collect();
        assert_eq!(labels, vec!["\"S+\"", "\"S\"", "\"A\"", "\"B\"", "\"C\""]);
        assert_eq!(Tier::SPlus.to_string(), "S+");
    }
}
