//! Error types for reference-data loading and build resolution.
//!
//! The scoring engine itself never fails; only the boundary that turns
//! raw selections into resolved records reports errors, all of which are
//! represented by the `ScoreError` enum.

use thiserror::Error;

/// Errors that can occur while loading reference data or resolving a build.
///
/// # Examples
///
/// ```rust
/// use buildscore::ScoreError;
///
/// let err = ScoreError::RoleNotFound(String::from("ARCHER RALLY - SKILL DMG"));
/// println!("{}", err); // "Role not found: ARCHER RALLY - SKILL DMG"
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoreError {
    /// The requested role identifier does not exist in the reference data.
    #[error("Role not found: {0}")]
    RoleNotFound(String),

    /// A role definition violates a reference-data invariant.
    ///
    /// Raised when the highest score reference is not strictly positive
    /// or when the tier thresholds are not ordered `s_plus >= s >= a >= b`.
    #[error("Invalid role {role_id}: {reason}")]
    InvalidRole { role_id: String, reason: String },

    /// An iconic level label could not be parsed.
    #[error("Invalid iconic level: {0:?}")]
    InvalidIconicLevel(String),

    /// Reference data could not be decoded.
    #[error("Invalid reference data: {0}")]
    InvalidReferenceData(String),
}

impl From<serde_json::Error> for ScoreError {
    fn from(err: serde_json::Error) -> Self {
        ScoreError::InvalidReferenceData(err.to_string())
    }
}
