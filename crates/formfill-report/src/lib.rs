#![deny(unsafe_code)]

//! Field categorization for human-readable extraction reports.
//!
//! Assigns each form field name a coarse semantic [`Category`] via an
//! ordered keyword rule table, and groups field lists by category for the
//! extract-required-info display path. Categorization is advisory only; it
//! never affects which fields get filled.
//!
//! [`Category`]: formfill_model::Category

pub mod breakdown;
pub mod rules;

pub use breakdown::CategoryBreakdown;
pub use rules::categorize;
