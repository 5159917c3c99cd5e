//! Rule-based column classification and example-phrase generation.
//!
//! Both functions test the column's raw name (lowercased) and declared type
//! against fixed ordered pattern tables. Key flags outrank every name or
//! type pattern, so a primary key named `CreatedDate` is an identifier, not
//! a datetime.

use schemamap_model::{Category, ColumnDescriptor};
use schemamap_text::{natural_name, synonyms_for};

const DATETIME_NAME_HINTS: &[&str] = &["date", "time", "created", "modified", "updated"];
const DATETIME_TYPE_HINTS: &[&str] = &["date", "time", "timestamp"];
const NUMERIC_TYPE_HINTS: &[&str] = &["int", "decimal", "numeric", "float", "money"];
const MONEY_NAME_HINTS: &[&str] = &["price", "cost", "amount", "value", "total"];
const QUANTITY_NAME_HINTS: &[&str] = &["quantity", "count", "number"];
const BOOLEAN_TYPE_HINTS: &[&str] = &["bit", "bool"];
const TEXT_TYPE_HINTS: &[&str] = &["varchar", "text", "char"];

/// Name rules applied within the text type family, first match wins.
const TEXT_NAME_RULES: &[(&[&str], Category)] = &[
    (&["email", "mail"], Category::Email),
    (&["phone", "telephone", "mobile"], Category::Phone),
    (&["address", "street", "city", "state", "zip"], Category::Address),
    (&["name", "title", "label"], Category::Name),
    (&["description", "notes", "comment"], Category::Description),
];

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}

/// Assign the single category a column belongs to.
pub fn categorize(column: &ColumnDescriptor) -> Category {
    if column.is_primary_key {
        return Category::Identifier;
    }
    if column.is_foreign_key {
        return Category::Reference;
    }

    let name = column.name.to_lowercase();
    let data_type = column.data_type.to_lowercase();

    if contains_any(&name, DATETIME_NAME_HINTS) || contains_any(&data_type, DATETIME_TYPE_HINTS) {
        return Category::Datetime;
    }
    if contains_any(&data_type, NUMERIC_TYPE_HINTS) {
        if contains_any(&name, MONEY_NAME_HINTS) {
            return Category::Money;
        }
        if contains_any(&name, QUANTITY_NAME_HINTS) {
            return Category::Quantity;
        }
        return Category::Numeric;
    }
    if contains_any(&data_type, BOOLEAN_TYPE_HINTS)
        || name.starts_with("is_")
        || name.starts_with("has_")
        || name.contains("active")
        || name.contains("enabled")
    {
        return Category::Boolean;
    }
    if contains_any(&data_type, TEXT_TYPE_HINTS) {
        for (patterns, category) in TEXT_NAME_RULES {
            if contains_any(&name, patterns) {
                return *category;
            }
        }
        return Category::Text;
    }
    Category::General
}

/// Cap on generated example phrases per column.
const MAX_EXAMPLES: usize = 10;

/// Produce example query phrasings for a column: three fixed openers, one
/// block keyed off the column's role, and up to three synonym variants.
pub fn example_phrases(column: &ColumnDescriptor) -> Vec<String> {
    let natural = natural_name(&column.name);
    let name = column.name.to_lowercase();

    let mut phrases = vec![
        format!("show me {natural}"),
        format!("what is the {natural}"),
        format!("find {natural}"),
    ];

    if column.is_primary_key {
        phrases.push(format!("find by {natural}"));
        phrases.push(format!("get record with {natural}"));
        phrases.push(format!("lookup {natural}"));
    } else if name.contains("date") || name.contains("time") {
        phrases.push(format!("when was {natural}"));
        phrases.push(format!("show {natural} after"));
        phrases.push(format!("filter by {natural}"));
    } else if contains_any(&name, MONEY_NAME_HINTS) {
        phrases.push(format!("how much is {natural}"));
        phrases.push(format!("total {natural}"));
        phrases.push(format!("average {natural}"));
        phrases.push(format!("{natural} greater than"));
        phrases.push(format!("{natural} less than"));
    } else if contains_any(&name, QUANTITY_NAME_HINTS) {
        phrases.push(format!("how many {natural}"));
        phrases.push(format!("count of {natural}"));
        phrases.push(format!("sum of {natural}"));
    } else if name.contains("name") || name.contains("title") {
        phrases.push(format!("find by {natural}"));
        phrases.push(format!("search {natural}"));
        phrases.push(format!("{natural} contains"));
        phrases.push(format!("{natural} starts with"));
    } else if contains_any(&name, &["status", "state", "type", "category"]) {
        phrases.push(format!("where {natural} is"));
        phrases.push(format!("filter by {natural}"));
        phrases.push(format!("group by {natural}"));
    }

    for synonym in synonyms_for(&column.name)
        .iter()
        .filter(|synonym| *synonym != &column.name)
        .take(3)
    {
        phrases.push(format!("show me {synonym}"));
    }

    phrases.truncate(MAX_EXAMPLES);
    phrases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(name: &str, data_type: &str) -> ColumnDescriptor {
        ColumnDescriptor {
            name: name.to_string(),
            data_type: data_type.to_string(),
            max_length: None,
            is_nullable: true,
            default_value: None,
            is_primary_key: false,
            is_foreign_key: false,
            referenced_table: None,
            referenced_column: None,
        }
    }

    #[test]
    fn key_flags_outrank_name_patterns() {
        let mut created = column("CreatedDate", "datetime");
        created.is_primary_key = true;
        assert_eq!(categorize(&created), Category::Identifier);

        let mut parent = column("ParentDate", "datetime");
        parent.is_foreign_key = true;
        assert_eq!(categorize(&parent), Category::Reference);
    }

    #[test]
    fn datetime_matches_name_or_type() {
        assert_eq!(categorize(&column("OrderDate", "varchar")), Category::Datetime);
        assert_eq!(categorize(&column("logged_at", "timestamptz")), Category::Datetime);
    }

    #[test]
    fn numeric_family_splits_on_name() {
        assert_eq!(categorize(&column("UnitPrice", "decimal(10,2)")), Category::Money);
        assert_eq!(categorize(&column("Quantity", "int")), Category::Quantity);
        assert_eq!(categorize(&column("Weight", "float")), Category::Numeric);
    }

    #[test]
    fn boolean_matches_type_prefix_or_activity_words() {
        assert_eq!(categorize(&column("IsActive", "bit")), Category::Boolean);
        assert_eq!(categorize(&column("is_admin", "varchar")), Category::Boolean);
        assert_eq!(categorize(&column("has_license", "char(1)")), Category::Boolean);
        assert_eq!(categorize(&column("active", "varchar")), Category::Boolean);
        // A numeric declared type outranks the name prefix.
        assert_eq!(categorize(&column("has_license", "int2")), Category::Numeric);
        // `contains` was deliberately narrowed to `starts_with` for the
        // `is_`/`has_` tests, so embedded fragments no longer match.
        assert_eq!(categorize(&column("analysis_run", "varchar")), Category::Text);
    }

    #[test]
    fn text_family_splits_on_name_rules() {
        assert_eq!(categorize(&column("ContactEmail", "varchar(255)")), Category::Email);
        assert_eq!(categorize(&column("MobileNumber", "varchar(20)")), Category::Phone);
        assert_eq!(categorize(&column("StreetAddress", "text")), Category::Address);
        assert_eq!(categorize(&column("CustomerName", "varchar(100)")), Category::Name);
        assert_eq!(categorize(&column("Notes", "text")), Category::Description);
        assert_eq!(categorize(&column("Sku", "char(8)")), Category::Text);
    }

    #[test]
    fn unmatched_columns_are_general() {
        assert_eq!(categorize(&column("payload", "bytea")), Category::General);
    }

    #[test]
    fn openers_always_lead_the_examples() {
        let phrases = example_phrases(&column("UnitPrice", "decimal"));
        assert_eq!(phrases[0], "show me Unit Price");
        assert_eq!(phrases[1], "what is the Unit Price");
        assert_eq!(phrases[2], "find Unit Price");
        assert!(phrases.contains(&"how much is Unit Price".to_string()));
        assert!(phrases.contains(&"Unit Price greater than".to_string()));
        assert!(phrases.len() <= 10);
    }

    #[test]
    fn primary_key_block_wins_over_name_blocks() {
        let mut created = column("CreatedDate", "datetime");
        created.is_primary_key = true;
        let phrases = example_phrases(&created);
        assert!(phrases.contains(&"get record with Created Date".to_string()));
        assert!(!phrases.contains(&"when was Created Date".to_string()));
    }

    #[test]
    fn synonym_phrases_skip_the_name_itself() {
        let phrases = example_phrases(&column("status", "varchar"));
        assert!(phrases.contains(&"show me condition".to_string()));
        assert!(phrases.contains(&"show me state".to_string()));
        assert!(!phrases.contains(&"show me status".to_string()));
    }

    #[test]
    fn examples_cap_at_ten() {
        // Money block (5 phrases) plus openers and synonyms overflows the cap.
        let phrases = example_phrases(&column("UnitPrice", "decimal"));
        assert_eq!(phrases.len(), 10);
        assert_eq!(phrases[8], "show me amount");
        assert_eq!(phrases[9], "show me cost");
        assert!(!phrases.contains(&"show me value".to_string()));
    }
}
