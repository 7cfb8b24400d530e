//! Ordered keyword rules mapping field names to categories.

use formfill_model::Category;

/// The rule table, evaluated top to bottom; the first keyword hit wins.
///
/// Ordering is a contract, not an implementation detail: specific
/// categories come before generic ones so that a generic keyword never
/// absorbs a specific field. `employer_name` must hit the Employment rule
/// before the Personal rule's `name` keyword can see it.
const RULES: &[(Category, &[&str])] = &[
    (
        Category::Employment,
        &["employer", "occupation", "job", "work", "profession"],
    ),
    (
        Category::Financial,
        &["income", "salary", "bank", "account", "tax", "revenue", "wealth"],
    ),
    (
        Category::Contact,
        &["phone", "email", "mobile", "tel", "contact", "fax"],
    ),
    (
        Category::Address,
        &["address", "street", "city", "state", "zip", "postal", "country"],
    ),
    (
        Category::Legal,
        &["legal", "court", "license", "citizenship", "signature", "witness"],
    ),
    (
        Category::Personal,
        &["name", "birth", "ssn", "social security", "age", "gender", "sex"],
    ),
];

/// Assigns a category to a field name.
///
/// Total and pure: every name gets exactly one category, falling back to
/// [`Category::Other`] when no keyword matches. Keywords are matched as
/// substrings of the lowercased, separator-normalized name, so
/// `Social_Security_No` hits the `social security` keyword.
#[must_use]
pub fn categorize(field_name: &str) -> Category {
    let normalized = normalize(field_name);
    for (category, keywords) in RULES {
        if keywords.iter().any(|kw| normalized.contains(kw)) {
            return *category;
        }
    }
    Category::Other
}

fn normalize(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn specific_rules_win_over_generic_ones() {
        // "employer_name" contains the Personal keyword "name"; the
        // Employment rule must still win.
        assert_eq!(categorize("employer_name"), Category::Employment);
        assert_eq!(categorize("work_address"), Category::Employment);
        assert_eq!(categorize("bank_contact"), Category::Financial);
    }

    #[test]
    fn personal_fields() {
        assert_eq!(categorize("full_name"), Category::Personal);
        assert_eq!(categorize("Date of Birth"), Category::Personal);
        assert_eq!(categorize("Social_Security_No"), Category::Personal);
        assert_eq!(categorize("gender"), Category::Personal);
    }

    #[test]
    fn address_fields() {
        assert_eq!(categorize("street_address"), Category::Address);
        assert_eq!(categorize("ZIP"), Category::Address);
        assert_eq!(categorize("country_of_residence"), Category::Address);
    }

    #[test]
    fn contact_fields() {
        assert_eq!(categorize("home_phone"), Category::Contact);
        assert_eq!(categorize("Email Address"), Category::Contact);
        assert_eq!(categorize("fax_number"), Category::Contact);
    }

    #[test]
    fn financial_fields() {
        assert_eq!(categorize("annual_income"), Category::Financial);
        assert_eq!(categorize("tax_id"), Category::Financial);
    }

    #[test]
    fn legal_fields() {
        assert_eq!(categorize("citizenship"), Category::Legal);
        assert_eq!(categorize("signature_date"), Category::Legal);
        assert_eq!(categorize("driver_license_no"), Category::Legal);
    }

    #[test]
    fn unknown_fields_fall_back_to_other() {
        assert_eq!(categorize("xyz_random"), Category::Other);
        assert_eq!(categorize(""), Category::Other);
        assert_eq!(categorize("field_42"), Category::Other);
    }

    #[test]
    fn matching_is_case_and_separator_insensitive() {
        assert_eq!(categorize("EMPLOYER-NAME"), Category::Employment);
        assert_eq!(categorize("e.mail"), Category::Other);
        assert_eq!(categorize("Mobile.Number"), Category::Contact);
    }
}
