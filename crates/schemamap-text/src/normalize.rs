//! Text normalization and identifier segmentation.
//!
//! Two families of helpers live here. [`normalize`] reduces arbitrary text to
//! lowercase alphanumeric words for comparison and indexing. The `split_*`
//! functions break technical identifiers into word fragments without touching
//! their case, so a later capitalization pass can keep acronym runs intact.

/// Reduce text to lowercase alphanumeric words separated by single spaces.
///
/// Every character outside `[A-Za-z0-9]` and whitespace becomes a space,
/// the result is lowercased, and whitespace runs collapse to single spaces.
/// Empty input yields an empty string. Idempotent: normalizing an already
/// normalized string is a no-op.
pub fn normalize(text: &str) -> String {
    let mut scrubbed = String::with_capacity(text.len());
    for ch in text.chars() {
        if ch.is_ascii_alphanumeric() || ch.is_whitespace() {
            scrubbed.push(ch);
        } else {
            scrubbed.push(' ');
        }
    }
    scrubbed
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split a mixed-capitalization identifier into space-separated fragments.
///
/// A boundary is inserted between a lowercase letter and a following
/// uppercase letter (`customerID` -> `customer ID`) and between an uppercase
/// letter and a following uppercase-then-lowercase pair (`XMLParser` ->
/// `XML Parser`). Acronym runs stay together otherwise, digits never create a
/// boundary, and case is preserved.
pub fn split_camel_case(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut segmented = String::with_capacity(text.len() + 4);
    for (i, &ch) in chars.iter().enumerate() {
        if i > 0 && ch.is_ascii_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|c| c.is_ascii_lowercase());
            if prev.is_ascii_lowercase() || (prev.is_ascii_uppercase() && next_is_lower) {
                segmented.push(' ');
            }
        }
        segmented.push(ch);
    }
    segmented.trim().to_string()
}

/// Split an underscore-separated identifier, then apply the capitalization
/// split so mixed forms (`user_profileID`) segment fully.
pub fn split_snake_case(text: &str) -> String {
    split_camel_case(&text.replace('_', " "))
}

/// Uppercase the first letter of every word, leaving the remaining letters
/// untouched so acronym runs survive (`ID` stays `ID`, never `Id`).
pub fn capitalize_words(text: &str) -> String {
    text.split_whitespace()
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize_first(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn normalize_strips_punctuation() {
        assert_eq!(normalize("Customer-Orders (2024)!"), "customer orders 2024");
    }

    #[test]
    fn normalize_collapses_whitespace() {
        assert_eq!(normalize("  a \t b \n c  "), "a b c");
    }

    #[test]
    fn normalize_handles_empty_input() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize("  \t "), "");
        assert_eq!(normalize("$%^&"), "");
    }

    #[test]
    fn camel_split_inserts_boundary_before_uppercase() {
        assert_eq!(split_camel_case("customerID"), "customer ID");
        assert_eq!(split_camel_case("OrderDate"), "Order Date");
    }

    #[test]
    fn camel_split_keeps_acronym_runs() {
        assert_eq!(split_camel_case("XMLParser"), "XML Parser");
        assert_eq!(split_camel_case("parseHTTPResponse"), "parse HTTP Response");
        assert_eq!(split_camel_case("ABC"), "ABC");
    }

    #[test]
    fn camel_split_ignores_digits() {
        assert_eq!(split_camel_case("Customer2ID"), "Customer2ID");
        assert_eq!(split_camel_case("Address1"), "Address1");
    }

    #[test]
    fn snake_split_handles_mixed_forms() {
        assert_eq!(split_snake_case("user_profile_settings"), "user profile settings");
        assert_eq!(split_snake_case("user_profileID"), "user profile ID");
        assert_eq!(split_snake_case("tbl_Customer_Orders"), "tbl Customer Orders");
    }

    #[test]
    fn snake_split_trims_dangling_underscores() {
        assert_eq!(split_snake_case("_id_"), "id");
    }

    #[test]
    fn capitalize_preserves_word_tails() {
        assert_eq!(capitalize_words("customer ID"), "Customer ID");
        assert_eq!(capitalize_words("user profile settings"), "User Profile Settings");
        assert_eq!(capitalize_words(""), "");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(raw in ".*") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once);
        }

        #[test]
        fn normalize_output_is_lowercase_alphanumeric(raw in ".*") {
            let normalized = normalize(&raw);
            prop_assert!(
                normalized
                    .chars()
                    .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == ' ')
            );
            prop_assert!(!normalized.contains("  "));
        }
    }
}
