//! Text normalization helpers shared by the matching strategies.

/// Lowercases, trims, and collapses separators to single spaces.
///
/// Used for comparison only; canonical names are never rewritten.
pub(crate) fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercased, trimmed form used by the case-insensitive strategy.
pub(crate) fn casefold(raw: &str) -> String {
    raw.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_collapses_separators() {
        assert_eq!(normalize_text("First_Name"), "first name");
        assert_eq!(normalize_text("  home.address-line/1  "), "home address line 1");
    }

    #[test]
    fn casefold_keeps_interior_separators() {
        assert_eq!(casefold("  First_Name "), "first_name");
    }
}
