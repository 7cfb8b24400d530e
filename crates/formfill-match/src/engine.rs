//! Matching engine implementation.

use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use formfill_model::{FieldMapping, FieldMatch, FieldName, MatchStrategy};

use crate::error::MatchError;
use crate::strategy::find_match;

/// Default minimum similarity for the fuzzy strategy.
pub const DEFAULT_FUZZY_THRESHOLD: f64 = 0.8;

/// Options controlling a matching run.
#[derive(Debug, Clone)]
pub struct MatchOptions {
    /// Minimum similarity score for the fuzzy strategy, in [0.0, 1.0].
    pub fuzzy_threshold: f64,
    /// Strategies to try, in priority order.
    pub strategies: Vec<MatchStrategy>,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
            strategies: vec![
                MatchStrategy::Exact,
                MatchStrategy::CaseInsensitive,
                MatchStrategy::Fuzzy,
            ],
        }
    }
}

/// Engine resolving user data keys to canonical form field names.
///
/// The engine walks an ordered list of strategies of increasing looseness.
/// Within each strategy, still-unmatched user keys are visited in the
/// caller's order and claim form fields first-come, first-claimed; a claimed
/// field is removed from the pool for all later keys and strategies. The
/// result is deterministic for identical inputs.
///
/// # Example
///
/// ```
/// use formfill_match::FieldMatcher;
///
/// let matcher = FieldMatcher::with_defaults();
/// let mapping = matcher
///     .resolve(
///         &["frist_name".to_string()],
///         &["first_name".to_string(), "last_name".to_string()],
///     )
///     .unwrap();
/// assert_eq!(mapping.get("frist_name").unwrap().form_field, "first_name");
/// ```
#[derive(Debug, Clone)]
pub struct FieldMatcher {
    options: MatchOptions,
}

impl FieldMatcher {
    /// Creates a matcher with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidThreshold`] if the fuzzy threshold is
    /// outside [0.0, 1.0].
    pub fn new(options: MatchOptions) -> Result<Self, MatchError> {
        if !(0.0..=1.0).contains(&options.fuzzy_threshold) {
            return Err(MatchError::InvalidThreshold(options.fuzzy_threshold));
        }
        Ok(Self { options })
    }

    /// Creates a matcher with the default strategy chain and threshold.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            options: MatchOptions::default(),
        }
    }

    /// The options this matcher was built with.
    #[must_use]
    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Resolves user keys against form fields.
    ///
    /// Each successfully resolved key yields one [`FieldMatch`]; keys no
    /// strategy could place land in
    /// [`unmatched_keys`](FieldMapping::unmatched_keys) in input order.
    /// Duplicate user keys collapse to their first occurrence, and each
    /// form field is claimed at most once. Empty inputs yield an empty
    /// mapping.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::InvalidInput`] if any key or field name is
    /// empty, whitespace-only, or contains NUL bytes.
    pub fn resolve(
        &self,
        user_keys: &[String],
        form_fields: &[String],
    ) -> Result<FieldMapping, MatchError> {
        let keys = validate_keys(user_keys)?;
        let mut pool = validate_pool(form_fields)?;

        let mut matches: Vec<FieldMatch> = Vec::new();
        let mut matched_keys: BTreeSet<&str> = BTreeSet::new();

        for &strategy in &self.options.strategies {
            for key in &keys {
                if matched_keys.contains(key.as_str()) {
                    continue;
                }
                if let Some((field, confidence)) =
                    find_match(strategy, key, &pool, self.options.fuzzy_threshold)
                {
                    pool.remove(&field);
                    matched_keys.insert(key);
                    matches.push(FieldMatch {
                        user_key: key.clone(),
                        form_field: field,
                        confidence,
                        strategy,
                    });
                }
            }
        }

        let unmatched_keys: Vec<String> = keys
            .iter()
            .filter(|k| !matched_keys.contains(k.as_str()))
            .cloned()
            .collect();

        debug!(
            matched = matches.len(),
            unmatched = unmatched_keys.len(),
            "field matching complete"
        );

        Ok(FieldMapping {
            matches,
            unmatched_keys,
        })
    }
}

/// Validates user keys and collapses duplicates to their first occurrence.
fn validate_keys(user_keys: &[String]) -> Result<Vec<String>, MatchError> {
    let mut seen = BTreeSet::new();
    let mut keys = Vec::with_capacity(user_keys.len());
    for raw in user_keys {
        let key = FieldName::new(raw.clone())?.into_string();
        if seen.insert(key.clone()) {
            keys.push(key);
        }
    }
    Ok(keys)
}

/// Validates form fields into the unclaimed pool.
fn validate_pool(form_fields: &[String]) -> Result<BTreeSet<String>, MatchError> {
    let mut pool = BTreeSet::new();
    for raw in form_fields {
        pool.insert(FieldName::new(raw.clone())?.into_string());
    }
    Ok(pool)
}

/// Confidence level categories for reviewing a mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ConfidenceLevel {
    /// Uncertain; needs manual verification.
    Low,
    /// Reasonable; should be reviewed.
    Medium,
    /// Near-certain; typically correct as-is.
    High,
}

impl ConfidenceLevel {
    /// Human-readable description of the level.
    #[must_use]
    pub fn description(&self) -> &'static str {
        match self {
            Self::High => "high confidence - likely correct",
            Self::Medium => "medium confidence - should review",
            Self::Low => "low confidence - needs verification",
        }
    }
}

/// Boundaries between confidence levels when reviewing a mapping.
///
/// Matches below `low` fall outside every level; `low` to `medium` is
/// [`ConfidenceLevel::Low`], `medium` to `high` is
/// [`ConfidenceLevel::Medium`], and at or above `high` is
/// [`ConfidenceLevel::High`].
#[derive(Debug, Clone, Copy)]
pub struct ConfidenceThresholds {
    /// Minimum confidence for high-quality matches (default: 0.95).
    pub high: f64,
    /// Minimum confidence for medium-quality matches (default: 0.80).
    pub medium: f64,
    /// Minimum confidence to count at all (default: 0.60).
    pub low: f64,
}

impl Default for ConfidenceThresholds {
    fn default() -> Self {
        Self {
            high: 0.95,
            medium: 0.80,
            low: 0.60,
        }
    }
}

impl ConfidenceThresholds {
    /// Strict boundaries for high-stakes forms.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            high: 0.98,
            medium: 0.90,
            low: 0.75,
        }
    }

    /// Relaxed boundaries for exploratory filling.
    #[must_use]
    pub fn relaxed() -> Self {
        Self {
            high: 0.90,
            medium: 0.70,
            low: 0.50,
        }
    }

    /// Categorizes a confidence score, or `None` below the low threshold.
    #[must_use]
    pub fn categorize(&self, confidence: f64) -> Option<ConfidenceLevel> {
        if confidence >= self.high {
            Some(ConfidenceLevel::High)
        } else if confidence >= self.medium {
            Some(ConfidenceLevel::Medium)
        } else if confidence >= self.low {
            Some(ConfidenceLevel::Low)
        } else {
            None
        }
    }

    /// Counts the matches in a mapping at each confidence level.
    #[must_use]
    pub fn count_by_level(&self, mapping: &FieldMapping) -> BTreeMap<ConfidenceLevel, usize> {
        let mut counts = BTreeMap::new();
        for m in &mapping.matches {
            if let Some(level) = self.categorize(m.confidence) {
                *counts.entry(level).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Groups a mapping's matches by confidence level.
    #[must_use]
    pub fn group_by_level<'a>(
        &self,
        mapping: &'a FieldMapping,
    ) -> BTreeMap<ConfidenceLevel, Vec<&'a FieldMatch>> {
        let mut groups: BTreeMap<ConfidenceLevel, Vec<&FieldMatch>> = BTreeMap::new();
        for m in &mapping.matches {
            if let Some(level) = self.categorize(m.confidence) {
                groups.entry(level).or_default().push(m);
            }
        }
        groups
    }

    /// Matches at or above the given level.
    #[must_use]
    pub fn filter_by_level<'a>(
        &self,
        mapping: &'a FieldMapping,
        min_level: ConfidenceLevel,
    ) -> Vec<&'a FieldMatch> {
        mapping
            .matches
            .iter()
            .filter(|m| {
                self.categorize(m.confidence)
                    .is_some_and(|level| level >= min_level)
            })
            .collect()
    }

    /// True if the mapping is non-empty and every match is high confidence.
    #[must_use]
    pub fn all_high_confidence(&self, mapping: &FieldMapping) -> bool {
        !mapping.matches.is_empty()
            && mapping
                .matches
                .iter()
                .all(|m| self.categorize(m.confidence) == Some(ConfidenceLevel::High))
    }
}
