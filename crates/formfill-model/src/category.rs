use std::fmt;

use serde::{Deserialize, Serialize};

/// Coarse semantic grouping assigned to a field name for reporting.
///
/// Every field name maps to exactly one category; names no rule recognizes
/// fall back to [`Category::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Identity fields: names, birth dates, SSN, gender.
    Personal,
    /// Postal fields: street, city, state, zip, country.
    Address,
    /// Reachability fields: phone, email, fax.
    Contact,
    /// Money fields: income, bank accounts, tax.
    Financial,
    /// Work fields: employer, occupation, profession.
    Employment,
    /// Legal fields: licenses, citizenship, signatures.
    Legal,
    /// Anything no rule recognizes.
    Other,
}

impl Category {
    /// All categories in rule-evaluation order, `Other` last.
    pub const ALL: [Self; 7] = [
        Self::Employment,
        Self::Financial,
        Self::Contact,
        Self::Address,
        Self::Legal,
        Self::Personal,
        Self::Other,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Address => "address",
            Self::Contact => "contact",
            Self::Financial => "financial",
            Self::Employment => "employment",
            Self::Legal => "legal",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
