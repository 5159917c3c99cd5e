//! Mapping assembly: turns extracted table descriptors into the full
//! mapping document, one derived structure per table and column plus the
//! global search index.

use chrono::Utc;
use indexmap::IndexMap;
use tracing::debug;

use schemamap_model::{
    ClientInfo, ClientProfile, ColumnDescriptor, DatabaseMapping, FieldMapping, FieldMetadata,
    GeneratorInfo, MappingError, Result, SearchIndex, TableDescriptor, TableMapping, TableSummary,
};
use schemamap_text::{
    field_description, natural_name, search_terms, synonyms_for, table_description,
};

use crate::classify::{categorize, example_phrases};

/// Format tag stamped into every mapping document.
const FORMAT_VERSION: &str = "1.0";

/// Derive the full mapping entry for one column of `table`.
pub fn build_field_mapping(table: &TableDescriptor, column: &ColumnDescriptor) -> FieldMapping {
    FieldMapping {
        technical_name: column.name.clone(),
        natural_name: natural_name(&column.name),
        description: field_description(&table.name, &column.name, Some(&column.data_type)),
        data_type: column.data_type.clone(),
        search_terms: search_terms(&column.name),
        synonyms: synonyms_for(&column.name).into_iter().collect(),
        category: categorize(column),
        examples: example_phrases(column),
        metadata: FieldMetadata {
            max_length: column.max_length,
            is_nullable: column.is_nullable,
            default_value: column.default_value.clone(),
            is_primary_key: column.is_primary_key,
            is_foreign_key: column.is_foreign_key,
            referenced_table: column.referenced_table.clone(),
            referenced_column: column.referenced_column.clone(),
        },
    }
}

/// Derive the mapping entry for one table, columns in declaration order.
pub fn build_table_mapping(table: &TableDescriptor) -> TableMapping {
    let mut columns = IndexMap::with_capacity(table.columns.len());
    for column in &table.columns {
        columns.insert(column.name.clone(), build_field_mapping(table, column));
    }
    TableMapping {
        technical_name: table.path(),
        natural_name: natural_name(&table.name),
        description: table_description(&table.name),
        search_terms: search_terms(&table.name),
        synonyms: synonyms_for(&table.name).into_iter().collect(),
        columns,
        primary_keys: table.primary_keys.clone(),
        foreign_keys: table.foreign_keys.clone(),
        row_count: table.row_count,
        metadata: TableSummary {
            schema: table.schema.clone(),
            table_name: table.name.clone(),
            column_count: table.columns.len(),
            has_primary_key: !table.primary_keys.is_empty(),
            has_foreign_keys: !table.foreign_keys.is_empty(),
        },
    }
}

/// Build the global term index. Each table contributes its own search terms
/// under its `schema.table` path before its columns contribute theirs under
/// `schema.table.column` paths, so table paths take the earlier bucket
/// positions when a term is shared.
pub fn build_search_index(tables: &[TableDescriptor]) -> SearchIndex {
    let mut index = SearchIndex::new();
    for table in tables {
        let table_path = table.path();
        for term in search_terms(&table.name) {
            index.insert(&term, &table_path);
        }
        for column in &table.columns {
            let column_path = table.column_path(&column.name);
            for term in search_terms(&column.name) {
                index.insert(&term, &column_path);
            }
        }
    }
    index
}

/// Assemble the complete mapping document for one client.
///
/// Fails with [`MappingError::EmptySchema`] when no tables were extracted;
/// batch callers treat that as a per-client warning, not a fatal error.
pub fn build_database_mapping(
    profile: &ClientProfile,
    tables: &[TableDescriptor],
) -> Result<DatabaseMapping> {
    if tables.is_empty() {
        return Err(MappingError::EmptySchema {
            client: profile.key.clone(),
        });
    }

    let mut table_mappings = IndexMap::with_capacity(tables.len());
    let mut total_columns = 0;
    for table in tables {
        total_columns += table.columns.len();
        debug!(table = %table.path(), columns = table.columns.len(), "mapping table");
        table_mappings.insert(table.path(), build_table_mapping(table));
    }

    let now = Utc::now();
    Ok(DatabaseMapping {
        client_info: ClientInfo {
            client_key: profile.key.clone(),
            client_name: profile.name.clone(),
            database: profile.database.clone(),
            generation_date: now,
            total_tables: tables.len(),
            total_columns,
        },
        tables: table_mappings,
        search_index: build_search_index(tables),
        metadata: GeneratorInfo {
            version: FORMAT_VERSION.to_string(),
            generator: format!("schemamap {}", env!("CARGO_PKG_VERSION")),
            schema_extraction_date: now,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemamap_model::Category;

    fn profile() -> ClientProfile {
        ClientProfile {
            key: "acme".to_string(),
            name: "Acme Corp".to_string(),
            database: "acme_erp".to_string(),
        }
    }

    fn orders_table() -> TableDescriptor {
        TableDescriptor {
            schema: "dbo".to_string(),
            name: "tbl_Customer_Orders".to_string(),
            columns: vec![
                ColumnDescriptor {
                    name: "OrderID".to_string(),
                    data_type: "int".to_string(),
                    max_length: None,
                    is_nullable: false,
                    default_value: None,
                    is_primary_key: true,
                    is_foreign_key: false,
                    referenced_table: None,
                    referenced_column: None,
                },
                ColumnDescriptor {
                    name: "OrderDate".to_string(),
                    data_type: "datetime".to_string(),
                    max_length: None,
                    is_nullable: true,
                    default_value: Some("getdate()".to_string()),
                    is_primary_key: false,
                    is_foreign_key: false,
                    referenced_table: None,
                    referenced_column: None,
                },
            ],
            primary_keys: vec!["OrderID".to_string()],
            foreign_keys: vec![],
            row_count: Some(1200),
        }
    }

    #[test]
    fn field_mapping_carries_every_derived_part() {
        let table = orders_table();
        let field = build_field_mapping(&table, &table.columns[1]);
        assert_eq!(field.technical_name, "OrderDate");
        assert_eq!(field.natural_name, "Order Date");
        assert_eq!(field.description, "Order Date from Customer Orders (date/time)");
        assert_eq!(field.category, Category::Datetime);
        assert_eq!(field.search_terms[0], "OrderDate");
        assert!(field.synonyms.contains(&"timestamp".to_string()));
        assert_eq!(field.examples[0], "show me Order Date");
        assert_eq!(field.metadata.default_value.as_deref(), Some("getdate()"));
    }

    #[test]
    fn table_mapping_summarizes_structure() {
        let mapping = build_table_mapping(&orders_table());
        assert_eq!(mapping.technical_name, "dbo.tbl_Customer_Orders");
        assert_eq!(mapping.natural_name, "Customer Orders");
        assert_eq!(mapping.description, "Data from the Customer Orders table");
        assert_eq!(mapping.columns.len(), 2);
        assert_eq!(mapping.row_count, Some(1200));
        assert!(mapping.metadata.has_primary_key);
        assert!(!mapping.metadata.has_foreign_keys);
        let column_names: Vec<&String> = mapping.columns.keys().collect();
        assert_eq!(column_names, ["OrderID", "OrderDate"]);
    }

    #[test]
    fn index_places_table_paths_before_column_paths() {
        let index = build_search_index(&[orders_table()]);
        // "purchase" is a synonym of the table's "orders" and of the
        // columns' "order", so all three paths share the bucket.
        let bucket = index.lookup("purchase").expect("purchase bucket");
        assert_eq!(bucket[0], "dbo.tbl_Customer_Orders");
        assert!(bucket.contains(&"dbo.tbl_Customer_Orders.OrderID".to_string()));
        assert!(bucket.contains(&"dbo.tbl_Customer_Orders.OrderDate".to_string()));
        // "order" itself is a word of the column names only.
        let order = index.lookup("order").expect("order bucket");
        assert_eq!(order[0], "dbo.tbl_Customer_Orders.OrderID");
        assert!(!order.iter().any(|path| path == "dbo.tbl_Customer_Orders"));
    }

    #[test]
    fn empty_extraction_is_an_error() {
        let err = build_database_mapping(&profile(), &[]).expect_err("no tables");
        assert!(matches!(err, MappingError::EmptySchema { client } if client == "acme"));
    }

    #[test]
    fn document_counts_tables_and_columns() {
        let mapping = build_database_mapping(&profile(), &[orders_table()]).expect("mapping");
        assert_eq!(mapping.client_info.client_key, "acme");
        assert_eq!(mapping.client_info.total_tables, 1);
        assert_eq!(mapping.client_info.total_columns, 2);
        assert_eq!(mapping.metadata.version, "1.0");
        assert!(mapping.metadata.generator.starts_with("schemamap "));
        assert!(mapping.table("dbo.tbl_Customer_Orders").is_some());
    }
}
