//! One-line human descriptions for tables and columns.

use crate::natural::natural_name;

/// Data-type hints appended to column descriptions. First matching pattern
/// set wins; the match is a case-insensitive substring test on the raw
/// declared type.
const TYPE_HINTS: &[(&[&str], &str)] = &[
    (&["int", "numeric", "decimal"], " (number)"),
    (&["varchar", "text"], " (text)"),
    (&["date", "time"], " (date/time)"),
    (&["bit", "bool"], " (yes/no)"),
];

/// Bracketed reading hint for a declared data type, if one applies.
pub fn type_hint(data_type: &str) -> Option<&'static str> {
    let lowered = data_type.to_lowercase();
    TYPE_HINTS
        .iter()
        .find(|(patterns, _)| patterns.iter().any(|pattern| lowered.contains(pattern)))
        .map(|(_, hint)| *hint)
}

/// Describe a column in context: its natural name, the owning table when it
/// adds information, and a data-type hint when the type matches a known
/// family. `UnitPrice` (decimal) on `Products` reads
/// `Unit Price from Products (number)`.
pub fn field_description(table_name: &str, column_name: &str, data_type: Option<&str>) -> String {
    let mut description = natural_name(column_name);
    let table_natural = natural_name(table_name);
    if !table_natural.is_empty() && !table_natural.eq_ignore_ascii_case(&description) {
        description.push_str(" from ");
        description.push_str(&table_natural);
    }
    if let Some(data_type) = data_type
        && let Some(hint) = type_hint(data_type)
    {
        description.push_str(hint);
    }
    description
}

/// Describe a table as a whole.
pub fn table_description(table_name: &str) -> String {
    format!("Data from the {} table", natural_name(table_name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hints_follow_rule_order() {
        assert_eq!(type_hint("int"), Some(" (number)"));
        assert_eq!(type_hint("decimal(10, 2)"), Some(" (number)"));
        assert_eq!(type_hint("BIGINT"), Some(" (number)"));
        assert_eq!(type_hint("varchar(100)"), Some(" (text)"));
        assert_eq!(type_hint("timestamptz"), Some(" (date/time)"));
        assert_eq!(type_hint("bool"), Some(" (yes/no)"));
        assert_eq!(type_hint("bytea"), None);
    }

    #[test]
    fn describes_column_with_table_and_type() {
        assert_eq!(
            field_description("Products", "UnitPrice", Some("decimal")),
            "Unit Price from Products (number)"
        );
        assert_eq!(
            field_description("dbo.Customers", "CustomerID", Some("int")),
            "Customer ID from Customers (number)"
        );
    }

    #[test]
    fn omits_table_when_names_coincide() {
        assert_eq!(field_description("Status", "status", None), "Status");
    }

    #[test]
    fn omits_hint_for_unknown_types() {
        assert_eq!(field_description("Orders", "Notes", Some("json")), "Notes from Orders");
        assert_eq!(field_description("Orders", "Notes", None), "Notes from Orders");
    }

    #[test]
    fn describes_tables_with_fixed_sentence() {
        assert_eq!(table_description("tbl_Customer_Orders"), "Data from the Customer Orders table");
        assert_eq!(table_description("Products"), "Data from the Products table");
    }
}
