#![deny(unsafe_code)]

//! Domain types for the form autofill core.
//!
//! This crate holds the vocabulary shared by the matching engine and the
//! reporting layer: validated field names, semantic categories, and the
//! mapping produced when user data keys are resolved against PDF form
//! fields.

pub mod category;
pub mod error;
pub mod field;
pub mod mapping;

pub use category::Category;
pub use error::{ModelError, Result};
pub use field::FieldName;
pub use mapping::{FieldMapping, FieldMatch, MatchStrategy};
