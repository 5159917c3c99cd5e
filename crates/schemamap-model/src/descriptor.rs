use serde::{Deserialize, Serialize};

use crate::error::{MappingError, Result};

/// One column as read from the source schema catalog.
///
/// Descriptors are immutable once extraction finishes. Foreign-key fields are
/// back-filled from the separately fetched key edges before the descriptor
/// leaves the extraction layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub name: String,
    /// Raw declared type string (`int`, `varchar(100)`, `timestamptz`).
    pub data_type: String,
    pub max_length: Option<i32>,
    pub is_nullable: bool,
    pub default_value: Option<String>,
    #[serde(default)]
    pub is_primary_key: bool,
    #[serde(default)]
    pub is_foreign_key: bool,
    #[serde(default)]
    pub referenced_table: Option<String>,
    #[serde(default)]
    pub referenced_column: Option<String>,
}

/// A foreign-key edge from one column to its referenced table and column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    pub column: String,
    pub referenced_table: String,
    pub referenced_column: String,
}

/// One table as read from the source schema catalog, columns in declaration
/// order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDescriptor {
    pub schema: String,
    pub name: String,
    pub columns: Vec<ColumnDescriptor>,
    /// Primary-key column names; must be a subset of `columns`.
    pub primary_keys: Vec<String>,
    pub foreign_keys: Vec<ForeignKey>,
    /// Estimated row count, when the catalog offers one.
    pub row_count: Option<i64>,
}

impl TableDescriptor {
    /// Path of the table inside the catalog, `schema.table`.
    pub fn path(&self) -> String {
        format!("{}.{}", self.schema, self.name)
    }

    /// Path of one of this table's columns, `schema.table.column`.
    pub fn column_path(&self, column: &str) -> String {
        format!("{}.{}.{}", self.schema, self.name, column)
    }

    /// Check the structural invariants: every primary key names a column, and
    /// every foreign-key flagged column carries a referenced table and column.
    pub fn validate(&self) -> Result<()> {
        for key in &self.primary_keys {
            if !self.columns.iter().any(|column| column.name == *key) {
                return Err(MappingError::invalid_descriptor(
                    self.path(),
                    format!("primary key {key} is not a column"),
                ));
            }
        }
        for column in &self.columns {
            if column.is_foreign_key
                && (column.referenced_table.is_none() || column.referenced_column.is_none())
            {
                return Err(MappingError::invalid_descriptor(
                    self.path(),
                    format!("foreign key column {} has no referenced target", column.name),
                ));
            }
        }
        Ok(())
    }
}
