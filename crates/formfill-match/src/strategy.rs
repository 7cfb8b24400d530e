//! The individual matching strategy passes.
//!
//! Each pass is a pure function over one still-unmatched user key and the
//! pool of still-unclaimed form fields; the engine threads the shrinking
//! pool through the passes explicitly. The pool is a `BTreeSet`, so where
//! several fields qualify equally the byte-wise lexicographically smallest
//! one is found first and wins.

use std::collections::BTreeSet;

use formfill_model::MatchStrategy;

use crate::score::similarity;
use crate::utils::casefold;

/// Confidence recorded for a byte-for-byte match.
pub const EXACT_CONFIDENCE: f64 = 1.0;
/// Confidence recorded for a trimmed, lowercased match.
pub const CASE_INSENSITIVE_CONFIDENCE: f64 = 0.95;
/// Fuzzy confidences are capped here so confidence never increases along
/// the strategy chain (exact >= case-insensitive >= fuzzy).
pub const FUZZY_CONFIDENCE_CAP: f64 = CASE_INSENSITIVE_CONFIDENCE;

/// Attempts to match one user key against the unclaimed pool.
///
/// Returns the claimed form field and its confidence, or `None` if the
/// strategy found nothing acceptable.
pub(crate) fn find_match(
    strategy: MatchStrategy,
    user_key: &str,
    pool: &BTreeSet<String>,
    fuzzy_threshold: f64,
) -> Option<(String, f64)> {
    match strategy {
        MatchStrategy::Exact => pool
            .get(user_key)
            .map(|field| (field.clone(), EXACT_CONFIDENCE)),
        MatchStrategy::CaseInsensitive => {
            let folded = casefold(user_key);
            pool.iter()
                .find(|field| casefold(field) == folded)
                .map(|field| (field.clone(), CASE_INSENSITIVE_CONFIDENCE))
        }
        MatchStrategy::Fuzzy => {
            let mut best: Option<(&String, f64)> = None;
            for field in pool {
                let score = similarity(user_key, field);
                // Strict comparison: ties keep the earlier (smaller) field.
                if best.is_none_or(|(_, s)| score > s) {
                    best = Some((field, score));
                }
            }
            let (field, score) = best?;
            if score >= fuzzy_threshold {
                Some((field.clone(), score.min(FUZZY_CONFIDENCE_CAP)))
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool(fields: &[&str]) -> BTreeSet<String> {
        fields.iter().map(|f| (*f).to_string()).collect()
    }

    #[test]
    fn exact_requires_byte_equality() {
        let fields = pool(&["Name", "name"]);
        let (field, confidence) =
            find_match(MatchStrategy::Exact, "name", &fields, 0.8).unwrap();
        assert_eq!(field, "name");
        assert_eq!(confidence, EXACT_CONFIDENCE);
        assert!(find_match(MatchStrategy::Exact, "NAME", &fields, 0.8).is_none());
    }

    #[test]
    fn case_insensitive_prefers_lexicographically_smaller_field() {
        let fields = pool(&["NAME", "Name"]);
        let (field, confidence) =
            find_match(MatchStrategy::CaseInsensitive, "name", &fields, 0.8).unwrap();
        assert_eq!(field, "NAME");
        assert_eq!(confidence, CASE_INSENSITIVE_CONFIDENCE);
    }

    #[test]
    fn fuzzy_respects_threshold() {
        let fields = pool(&["first_name"]);
        assert!(find_match(MatchStrategy::Fuzzy, "frist_name", &fields, 0.8).is_some());
        assert!(find_match(MatchStrategy::Fuzzy, "frist_name", &fields, 0.99).is_none());
    }

    #[test]
    fn fuzzy_ties_keep_smaller_field() {
        let fields = pool(&["name_b", "name_a"]);
        let (field, _) = find_match(MatchStrategy::Fuzzy, "name_1", &fields, 0.5).unwrap();
        assert_eq!(field, "name_a");
    }

    #[test]
    fn fuzzy_confidence_is_capped() {
        // Equal after normalization, so the raw score is 1.0.
        let fields = pool(&["First Name"]);
        let (_, confidence) =
            find_match(MatchStrategy::Fuzzy, "first_name", &fields, 0.8).unwrap();
        assert_eq!(confidence, FUZZY_CONFIDENCE_CAP);
    }
}
