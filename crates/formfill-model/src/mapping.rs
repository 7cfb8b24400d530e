//! Types describing a resolved user-key to form-field mapping.
//!
//! A [`FieldMapping`] is the output of one matching run: one entry per user
//! key that found a form field, plus the keys that found nothing. It is
//! owned by the caller once returned and carries no reference back into the
//! matcher.

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// The strategy that produced a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MatchStrategy {
    /// Byte-for-byte equality.
    Exact,
    /// Trimmed, lowercased equality.
    CaseInsensitive,
    /// Normalized edit-distance similarity above a threshold.
    Fuzzy,
}

impl MatchStrategy {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::CaseInsensitive => "case-insensitive",
            Self::Fuzzy => "fuzzy",
        }
    }
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single resolved user-key to form-field assignment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMatch {
    /// Key from the user's data file.
    pub user_key: String,
    /// Canonical form field the key resolved to.
    pub form_field: String,
    /// Confidence score in [0.0, 1.0]; 1.0 is reserved for exact matches.
    pub confidence: f64,
    /// Strategy that produced this assignment.
    pub strategy: MatchStrategy,
}

/// Result of resolving user keys against a set of form fields.
///
/// Invariants upheld by the matcher: each user key appears at most once in
/// `matches`, each form field is claimed by at most one entry, and every
/// input key lands in exactly one of `matches` or `unmatched_keys`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldMapping {
    /// Resolved assignments, in the order the user keys were visited.
    pub matches: Vec<FieldMatch>,
    /// User keys no strategy could resolve, in input order.
    pub unmatched_keys: Vec<String>,
}

impl FieldMapping {
    /// Looks up the match for a user key, if one was made.
    #[must_use]
    pub fn get(&self, user_key: &str) -> Option<&FieldMatch> {
        self.matches.iter().find(|m| m.user_key == user_key)
    }

    /// Returns true if the form field was claimed by some user key.
    #[must_use]
    pub fn claims(&self, form_field: &str) -> bool {
        self.matches.iter().any(|m| m.form_field == form_field)
    }

    /// Number of resolved assignments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Lowest confidence among the matches, if any.
    #[must_use]
    pub fn min_confidence(&self) -> Option<f64> {
        self.matches
            .iter()
            .map(|m| m.confidence)
            .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Highest confidence among the matches, if any.
    #[must_use]
    pub fn max_confidence(&self) -> Option<f64> {
        self.matches
            .iter()
            .map(|m| m.confidence)
            .max_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
    }

    /// Mean confidence among the matches, if any.
    #[must_use]
    pub fn mean_confidence(&self) -> Option<f64> {
        if self.matches.is_empty() {
            return None;
        }
        let sum: f64 = self.matches.iter().map(|m| m.confidence).sum();
        Some(sum / self.matches.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FieldMapping {
        FieldMapping {
            matches: vec![
                FieldMatch {
                    user_key: "email".to_string(),
                    form_field: "email".to_string(),
                    confidence: 1.0,
                    strategy: MatchStrategy::Exact,
                },
                FieldMatch {
                    user_key: "frist_name".to_string(),
                    form_field: "first_name".to_string(),
                    confidence: 0.8,
                    strategy: MatchStrategy::Fuzzy,
                },
            ],
            unmatched_keys: vec!["shoe_size".to_string()],
        }
    }

    #[test]
    fn lookup_and_claims() {
        let mapping = sample();
        assert_eq!(mapping.get("email").unwrap().form_field, "email");
        assert!(mapping.get("shoe_size").is_none());
        assert!(mapping.claims("first_name"));
        assert!(!mapping.claims("last_name"));
    }

    #[test]
    fn confidence_summaries() {
        let mapping = sample();
        assert_eq!(mapping.min_confidence(), Some(0.8));
        assert_eq!(mapping.max_confidence(), Some(1.0));
        assert_eq!(mapping.mean_confidence(), Some(0.9));
        assert_eq!(FieldMapping::default().mean_confidence(), None);
    }

    #[test]
    fn strategy_names_are_stable() {
        assert_eq!(MatchStrategy::Exact.as_str(), "exact");
        assert_eq!(MatchStrategy::CaseInsensitive.as_str(), "case-insensitive");
        assert_eq!(MatchStrategy::Fuzzy.as_str(), "fuzzy");
    }
}
