#![deny(unsafe_code)]

//! Field matching engine for the form autofill core.
//!
//! Resolves user data keys against canonical PDF form field names using a
//! prioritized chain of strategies (exact, then case-insensitive, then
//! fuzzy), producing a one-to-one [`formfill_model::FieldMapping`] with a
//! confidence score per entry. A small JSON repository persists approved
//! mappings for reuse across runs.

pub mod engine;
pub mod error;
pub mod repository;
pub mod score;
pub mod strategy;
mod utils;

pub use engine::{
    ConfidenceLevel, ConfidenceThresholds, DEFAULT_FUZZY_THRESHOLD, FieldMatcher, MatchOptions,
};
pub use error::MatchError;
pub use repository::{MappingMetadata, MappingRepository, StoredMapping};
pub use score::similarity;
