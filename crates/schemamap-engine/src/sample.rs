//! Fixed demonstration schema, fed through the real pipeline so the sample
//! document always matches current derivation behavior.

use schemamap_model::{
    ClientProfile, ColumnDescriptor, DatabaseMapping, ForeignKey, Result, TableDescriptor,
};

use crate::assemble::build_database_mapping;

/// Profile stamped into the sample document.
pub fn sample_profile() -> ClientProfile {
    ClientProfile {
        key: "sample_client".to_string(),
        name: "Sample Client".to_string(),
        database: "SampleDB".to_string(),
    }
}

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

fn primary_key(name: &str, data_type: &str) -> ColumnDescriptor {
    ColumnDescriptor {
        is_nullable: false,
        is_primary_key: true,
        ..column(name, data_type)
    }
}

fn varchar(name: &str, max_length: i32) -> ColumnDescriptor {
    ColumnDescriptor {
        max_length: Some(max_length),
        ..column(name, "varchar")
    }
}

/// Three-table retail schema exercising every classifier family: keys,
/// references, dates, money, quantities, booleans, and the text categories.
pub fn sample_tables() -> Vec<TableDescriptor> {
    let customers = TableDescriptor {
        schema: "dbo".to_string(),
        name: "Customers".to_string(),
        columns: vec![
            primary_key("CustomerID", "int"),
            ColumnDescriptor {
                is_nullable: false,
                ..varchar("CustomerName", 100)
            },
            varchar("ContactEmail", 255),
            varchar("ContactPhone", 20),
            varchar("StreetAddress", 200),
            ColumnDescriptor {
                default_value: Some("1".to_string()),
                ..column("IsActive", "bit")
            },
            ColumnDescriptor {
                default_value: Some("getdate()".to_string()),
                ..column("CreatedDate", "datetime")
            },
        ],
        primary_keys: vec!["CustomerID".to_string()],
        foreign_keys: vec![],
        row_count: Some(1000),
    };

    let orders = TableDescriptor {
        schema: "dbo".to_string(),
        name: "Orders".to_string(),
        columns: vec![
            primary_key("OrderID", "int"),
            ColumnDescriptor {
                is_nullable: false,
                is_foreign_key: true,
                referenced_table: Some("Customers".to_string()),
                referenced_column: Some("CustomerID".to_string()),
                ..column("CustomerID", "int")
            },
            column("OrderDate", "datetime"),
            column("TotalAmount", "decimal(12,2)"),
            column("Quantity", "int"),
            column("Notes", "text"),
        ],
        primary_keys: vec!["OrderID".to_string()],
        foreign_keys: vec![ForeignKey {
            column: "CustomerID".to_string(),
            referenced_table: "Customers".to_string(),
            referenced_column: "CustomerID".to_string(),
        }],
        row_count: Some(5400),
    };

    let products = TableDescriptor {
        schema: "dbo".to_string(),
        name: "Products".to_string(),
        columns: vec![
            primary_key("ProductID", "int"),
            ColumnDescriptor {
                is_nullable: false,
                ..varchar("ProductName", 150)
            },
            column("UnitPrice", "decimal(10,2)"),
            column("Weight", "float"),
            ColumnDescriptor {
                max_length: Some(12),
                ..column("Sku", "char")
            },
            column("Picture", "image"),
        ],
        primary_keys: vec!["ProductID".to_string()],
        foreign_keys: vec![],
        row_count: Some(320),
    };

    vec![customers, orders, products]
}

/// Build the full sample mapping document.
pub fn sample_mapping() -> Result<DatabaseMapping> {
    build_database_mapping(&sample_profile(), &sample_tables())
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemamap_model::Category;

    #[test]
    fn sample_tables_are_well_formed() {
        for table in sample_tables() {
            table.validate().expect("sample descriptor");
        }
    }

    #[test]
    fn sample_covers_every_category() {
        let mapping = sample_mapping().expect("sample mapping");
        let mut seen: Vec<Category> = mapping
            .tables
            .values()
            .flat_map(|table| table.columns.values().map(|field| field.category))
            .collect();
        seen.sort();
        seen.dedup();
        assert_eq!(
            seen.len(),
            14,
            "expected all categories, saw {seen:?}"
        );
    }

    #[test]
    fn sample_counts_match_schema() {
        let mapping = sample_mapping().expect("sample mapping");
        assert_eq!(mapping.client_info.client_key, "sample_client");
        assert_eq!(mapping.client_info.database, "SampleDB");
        assert_eq!(mapping.client_info.total_tables, 3);
        assert_eq!(mapping.client_info.total_columns, 19);
    }
}
