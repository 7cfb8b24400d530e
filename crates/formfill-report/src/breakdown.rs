//! Grouping of field names by category for review display.

use std::collections::BTreeMap;

use serde::Serialize;

use formfill_model::Category;

use crate::rules::categorize;

/// Field names grouped by semantic category.
///
/// Built once per extraction run from the form's field list; input order is
/// preserved within each group so the report reads in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    groups: BTreeMap<Category, Vec<String>>,
}

impl CategoryBreakdown {
    /// Categorizes every field name in the iterator.
    pub fn from_fields<I, S>(fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut groups: BTreeMap<Category, Vec<String>> = BTreeMap::new();
        for field in fields {
            let field = field.into();
            groups.entry(categorize(&field)).or_default().push(field);
        }
        Self { groups }
    }

    /// Field names in a category, in input order.
    #[must_use]
    pub fn fields_for(&self, category: Category) -> &[String] {
        self.groups.get(&category).map_or(&[], Vec::as_slice)
    }

    /// Number of fields in a category.
    #[must_use]
    pub fn count(&self, category: Category) -> usize {
        self.fields_for(category).len()
    }

    /// Total number of fields across all categories.
    #[must_use]
    pub fn total(&self) -> usize {
        self.groups.values().map(Vec::len).sum()
    }

    /// Categories that have at least one field, with their field lists.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        self.groups
            .iter()
            .map(|(category, fields)| (*category, fields.as_slice()))
    }
}
