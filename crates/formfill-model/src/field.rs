use std::fmt;

use crate::ModelError;

/// A canonical form field or user data key name.
///
/// The stored value is kept byte-for-byte as supplied: matching strategies
/// normalize case and separators internally but never rewrite the canonical
/// name, and exact matching compares verbatim. Construction rejects names
/// that are empty, whitespace-only, or contain NUL bytes.
#[derive(
    Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FieldName(String);

impl FieldName {
    pub fn new(value: impl Into<String>) -> Result<Self, ModelError> {
        let value = value.into();
        if value.trim().is_empty() || value.contains('\0') {
            return Err(ModelError::InvalidFieldName(value));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_ordinary_names() {
        let name = FieldName::new("First Name").unwrap();
        assert_eq!(name.as_str(), "First Name");
    }

    #[test]
    fn preserves_surrounding_whitespace() {
        let name = FieldName::new(" padded ").unwrap();
        assert_eq!(name.as_str(), " padded ");
    }

    #[test]
    fn rejects_empty_and_whitespace_only() {
        assert!(FieldName::new("").is_err());
        assert!(FieldName::new("   ").is_err());
    }

    #[test]
    fn rejects_nul_bytes() {
        assert!(FieldName::new("bad\0name").is_err());
    }
}
