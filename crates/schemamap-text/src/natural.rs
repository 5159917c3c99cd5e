//! Natural-name derivation for technical identifiers.

use crate::normalize::{capitalize_words, split_camel_case, split_snake_case};

/// Prefixes stripped from table and column names before segmentation.
const PREFIXES: &[&str] = &["tbl_", "tb_", "table_", "dbo."];

/// Suffixes stripped from table and column names before segmentation.
const SUFFIXES: &[&str] = &["_id", "_key", "_ref", "_tbl", "_table"];

/// Derive a human-readable name from a technical identifier.
///
/// Strips at most one known prefix and one known suffix (skipping a strip
/// that would leave nothing behind), segments on underscores or
/// capitalization boundaries, and capitalizes the first letter of each word
/// while preserving the rest, so acronyms like `ID` survive.
///
/// `tbl_Customer_Orders` becomes `Customer Orders`, `CustomerID` becomes
/// `Customer ID`, `user_profile_settings` becomes `User Profile Settings`.
pub fn natural_name(technical_name: &str) -> String {
    if technical_name.is_empty() {
        return String::new();
    }
    let stripped = strip_suffix(strip_prefix(technical_name));
    let segmented = if stripped.contains('_') {
        split_snake_case(stripped)
    } else {
        split_camel_case(stripped)
    };
    capitalize_words(&segmented)
}

fn strip_prefix(value: &str) -> &str {
    for prefix in PREFIXES {
        if starts_with_ignore_case(value, prefix) {
            let remainder = &value[prefix.len()..];
            if !remainder.trim().is_empty() {
                return remainder;
            }
            break;
        }
    }
    value
}

fn strip_suffix(value: &str) -> &str {
    for suffix in SUFFIXES {
        if ends_with_ignore_case(value, suffix) {
            let remainder = &value[..value.len() - suffix.len()];
            if !remainder.trim().is_empty() {
                return remainder;
            }
            break;
        }
    }
    value
}

// The affix tables are pure ASCII, so a byte-wise comparison is safe and the
// matched length is always a valid char boundary in `value`.
fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= prefix.len() && bytes[..prefix.len()].eq_ignore_ascii_case(prefix.as_bytes())
}

fn ends_with_ignore_case(value: &str, suffix: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() >= suffix.len()
        && bytes[bytes.len() - suffix.len()..].eq_ignore_ascii_case(suffix.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_table_prefixes() {
        assert_eq!(natural_name("tbl_Customer_Orders"), "Customer Orders");
        assert_eq!(natural_name("TBL_ORDERS"), "ORDERS");
        assert_eq!(natural_name("dbo.Customers"), "Customers");
        assert_eq!(natural_name("table_users"), "Users");
    }

    #[test]
    fn strips_key_suffixes() {
        assert_eq!(natural_name("customer_id"), "Customer");
        assert_eq!(natural_name("order_ref"), "Order");
        assert_eq!(natural_name("lookup_tbl"), "Lookup");
    }

    #[test]
    fn strips_at_most_one_prefix_and_one_suffix() {
        // `tbl_` matches first, and the second prefix stays put.
        assert_eq!(natural_name("tbl_tb_data"), "Tb Data");
        assert_eq!(natural_name("parent_id_key"), "Parent Id");
    }

    #[test]
    fn skips_strip_when_nothing_would_remain() {
        assert_eq!(natural_name("tbl_"), "Tbl");
        assert_eq!(natural_name("_id"), "Id");
        assert_eq!(natural_name("dbo."), "Dbo.");
    }

    #[test]
    fn segments_capitalization_boundaries() {
        assert_eq!(natural_name("CustomerID"), "Customer ID");
        assert_eq!(natural_name("OrderDate"), "Order Date");
        assert_eq!(natural_name("IsActive"), "Is Active");
        assert_eq!(natural_name("UnitPrice"), "Unit Price");
    }

    #[test]
    fn segments_underscore_identifiers() {
        assert_eq!(natural_name("user_profile_settings"), "User Profile Settings");
        assert_eq!(natural_name("first_name"), "First Name");
    }

    #[test]
    fn handles_degenerate_input() {
        assert_eq!(natural_name(""), "");
        assert_eq!(natural_name("x"), "X");
        assert_eq!(natural_name("___"), "");
    }
}
