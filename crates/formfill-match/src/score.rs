//! Fuzzy similarity scoring for the matching engine.
//!
//! The fuzzy strategy scores pairs with normalized Levenshtein similarity
//! over separator-normalized text, via rapidfuzz. Scores live on a [0, 1]
//! scale where 1.0 means the normalized forms are identical.

use rapidfuzz::distance::levenshtein;

use crate::utils::normalize_text;

/// Normalized Levenshtein similarity between two names.
///
/// Both inputs are normalized (lowercased, separators collapsed to spaces)
/// before the edit distance is taken, so `frist_name` vs `first_name`
/// scores 0.8 and `First-Name` vs `first_name` scores 1.0.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize_text(a);
    let b = normalize_text(b);
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }
    let dist = levenshtein::distance(a.chars(), b.chars());
    // One division keeps simple ratios like 8/10 exactly representable, so
    // a score of 0.8 clears a threshold of 0.8.
    (max_len.saturating_sub(dist)) as f64 / max_len as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_names_score_one() {
        assert_eq!(similarity("first_name", "first_name"), 1.0);
        assert_eq!(similarity("First-Name", "first_name"), 1.0);
    }

    #[test]
    fn transposed_typo_scores_exactly_point_eight() {
        // Two single-character edits over ten characters.
        let score = similarity("frist_name", "first_name");
        assert!(score >= 0.8, "got {score}");
        assert!(score < 0.81, "got {score}");
    }

    #[test]
    fn unrelated_names_score_low() {
        assert!(similarity("email", "zip_code") < 0.4);
    }
}
