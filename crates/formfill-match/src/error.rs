//! Error types for matching operations.

use formfill_model::ModelError;
use thiserror::Error;

/// Errors from matching operations.
///
/// Unresolved user keys are not an error; they are reported through
/// [`formfill_model::FieldMapping::unmatched_keys`]. The matcher fails only
/// on malformed input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    /// An input collection contained a malformed name.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ModelError),
    /// The fuzzy threshold was outside [0.0, 1.0].
    #[error("fuzzy threshold {0} is outside 0.0..=1.0")]
    InvalidThreshold(f64),
}
