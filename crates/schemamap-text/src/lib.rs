pub mod describe;
pub mod natural;
pub mod normalize;
pub mod similarity;
pub mod synonyms;
pub mod terms;

pub use describe::{field_description, table_description, type_hint};
pub use natural::natural_name;
pub use normalize::{capitalize_words, normalize, split_camel_case, split_snake_case};
pub use similarity::similarity;
pub use synonyms::synonyms_for;
pub use terms::{meaningful_words, search_terms};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_name_fixtures() {
        assert_eq!(natural_name("tbl_Customer_Orders"), "Customer Orders");
        assert_eq!(natural_name("CustomerID"), "Customer ID");
        assert_eq!(natural_name("OrderDate"), "Order Date");
        assert_eq!(natural_name("IsActive"), "Is Active");
        assert_eq!(natural_name("user_profile_settings"), "User Profile Settings");
    }

    #[test]
    fn derivation_chain_holds_together() {
        let terms = search_terms("tbl_Customer_Orders");
        assert_eq!(terms[0], "tbl_Customer_Orders");
        assert!(terms.contains(&"Customer Orders".to_string()));
        assert!(terms.contains(&"purchase".to_string()));
        assert_eq!(
            field_description("tbl_Customer_Orders", "OrderDate", Some("datetime")),
            "Order Date from Customer Orders (date/time)"
        );
    }
}
