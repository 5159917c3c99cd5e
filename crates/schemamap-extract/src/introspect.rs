#![deny(unsafe_code)]

//! Live schema introspection against the PostgreSQL catalog.

use postgres::{Client, NoTls};
use tracing::{debug, warn};

use schemamap_model::{ColumnDescriptor, ForeignKey, TableDescriptor};

use crate::config::ClientConfig;
use crate::error::{ExtractError, Result};

const LIST_TABLES_SQL: &str = "\
SELECT table_schema, table_name
FROM information_schema.tables
WHERE table_type = 'BASE TABLE'
  AND table_schema NOT IN ('pg_catalog', 'information_schema')
ORDER BY table_schema, table_name";

const LIST_TABLES_IN_SCHEMA_SQL: &str = "\
SELECT table_schema, table_name
FROM information_schema.tables
WHERE table_type = 'BASE TABLE'
  AND table_schema = $1
ORDER BY table_name";

const COLUMNS_SQL: &str = "\
SELECT c.column_name,
       c.udt_name,
       c.character_maximum_length,
       c.is_nullable,
       c.column_default,
       (pk.column_name IS NOT NULL) AS is_primary_key
FROM information_schema.columns c
LEFT JOIN (
    SELECT kcu.column_name
    FROM information_schema.table_constraints tc
    JOIN information_schema.key_column_usage kcu
      ON kcu.constraint_name = tc.constraint_name
     AND kcu.table_schema = tc.table_schema
    WHERE tc.constraint_type = 'PRIMARY KEY'
      AND tc.table_schema = $1
      AND tc.table_name = $2
) pk ON pk.column_name = c.column_name
WHERE c.table_schema = $1
  AND c.table_name = $2
ORDER BY c.ordinal_position";

const FOREIGN_KEYS_SQL: &str = "\
SELECT kcu.column_name,
       ccu.table_name AS referenced_table,
       ccu.column_name AS referenced_column
FROM information_schema.table_constraints tc
JOIN information_schema.key_column_usage kcu
  ON kcu.constraint_name = tc.constraint_name
 AND kcu.table_schema = tc.table_schema
JOIN information_schema.constraint_column_usage ccu
  ON ccu.constraint_name = tc.constraint_name
 AND ccu.table_schema = tc.table_schema
WHERE tc.constraint_type = 'FOREIGN KEY'
  AND tc.table_schema = $1
  AND tc.table_name = $2
ORDER BY kcu.ordinal_position";

const ROW_ESTIMATE_SQL: &str = "\
SELECT c.reltuples
FROM pg_class c
JOIN pg_namespace n ON n.oid = c.relnamespace
WHERE n.nspname = $1
  AND c.relname = $2";

/// Owns one catalog connection and turns its contents into descriptors.
pub struct SchemaExtractor {
    client: Client,
}

impl SchemaExtractor {
    /// Connect to one client database.
    pub fn connect(key: &str, config: &ClientConfig) -> Result<Self> {
        let client = config
            .pg_config(key)
            .connect(NoTls)
            .map_err(|e| ExtractError::Connect {
                client: key.to_string(),
                source: e,
            })?;
        debug!(client = %key, host = %config.host, database = %config.database, "connected");
        Ok(Self { client })
    }

    /// Wrap an already-open connection.
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }

    /// Base tables as (schema, name) pairs, optionally restricted to one
    /// schema, ordered by schema then name. Catalog schemas are excluded.
    pub fn list_tables(&mut self, schema: Option<&str>) -> Result<Vec<(String, String)>> {
        let rows = match schema {
            Some(schema) => self.client.query(LIST_TABLES_IN_SCHEMA_SQL, &[&schema]),
            None => self.client.query(LIST_TABLES_SQL, &[]),
        }
        .map_err(|e| ExtractError::query("list tables", e))?;
        Ok(rows
            .iter()
            .map(|row| (row.get("table_schema"), row.get("table_name")))
            .collect())
    }

    /// Columns of one table in declaration order, with primary-key
    /// membership resolved. Foreign-key flags are back-filled separately.
    pub fn table_columns(&mut self, schema: &str, table: &str) -> Result<Vec<ColumnDescriptor>> {
        let rows = self
            .client
            .query(COLUMNS_SQL, &[&schema, &table])
            .map_err(|e| ExtractError::query(format!("columns of {schema}.{table}"), e))?;

        let mut columns = Vec::with_capacity(rows.len());
        for row in rows {
            let is_nullable: String = row.get("is_nullable");
            columns.push(ColumnDescriptor {
                name: row.get("column_name"),
                data_type: row.get("udt_name"),
                max_length: row.get("character_maximum_length"),
                is_nullable: is_nullable == "YES",
                default_value: row.get("column_default"),
                is_primary_key: row.get("is_primary_key"),
                is_foreign_key: false,
                referenced_table: None,
                referenced_column: None,
            });
        }
        Ok(columns)
    }

    /// Outgoing foreign-key edges of one table.
    pub fn foreign_keys(&mut self, schema: &str, table: &str) -> Result<Vec<ForeignKey>> {
        let rows = self
            .client
            .query(FOREIGN_KEYS_SQL, &[&schema, &table])
            .map_err(|e| ExtractError::query(format!("foreign keys of {schema}.{table}"), e))?;
        Ok(rows
            .iter()
            .map(|row| ForeignKey {
                column: row.get("column_name"),
                referenced_table: row.get("referenced_table"),
                referenced_column: row.get("referenced_column"),
            })
            .collect())
    }

    /// Planner row estimate from `pg_class.reltuples`. Negative values mean
    /// the table was never analyzed and map to `None`.
    pub fn row_estimate(&mut self, schema: &str, table: &str) -> Result<Option<i64>> {
        let row = self
            .client
            .query_opt(ROW_ESTIMATE_SQL, &[&schema, &table])
            .map_err(|e| ExtractError::query(format!("row estimate of {schema}.{table}"), e))?;
        Ok(row.and_then(|row| {
            let reltuples: f32 = row.get("reltuples");
            (reltuples >= 0.0).then_some(reltuples as i64)
        }))
    }

    /// Extract every visible table into a validated descriptor. A table
    /// whose catalog queries fail is logged and skipped; the rest of the
    /// schema still extracts.
    pub fn extract_schema(&mut self, schema: Option<&str>) -> Result<Vec<TableDescriptor>> {
        let names = self.list_tables(schema)?;
        let mut tables = Vec::with_capacity(names.len());
        for (schema, name) in names {
            match self.extract_table(&schema, &name) {
                Ok(table) => {
                    debug!(table = %table.path(), columns = table.columns.len(), "extracted");
                    tables.push(table);
                }
                Err(error) => {
                    warn!(schema = %schema, table = %name, %error, "skipping table");
                }
            }
        }
        Ok(tables)
    }

    fn extract_table(&mut self, schema: &str, name: &str) -> Result<TableDescriptor> {
        let mut columns = self.table_columns(schema, name)?;
        let foreign_keys = self.foreign_keys(schema, name)?;
        backfill_foreign_keys(&mut columns, &foreign_keys);
        let primary_keys = columns
            .iter()
            .filter(|column| column.is_primary_key)
            .map(|column| column.name.clone())
            .collect();

        let table = TableDescriptor {
            schema: schema.to_string(),
            name: name.to_string(),
            columns,
            primary_keys,
            foreign_keys,
            row_count: self.row_estimate(schema, name)?,
        };
        table.validate().map_err(|e| ExtractError::Descriptor {
            table: table.path(),
            source: e,
        })?;
        Ok(table)
    }
}

/// Mark the columns that participate in foreign keys. Kept separate from
/// the catalog queries so it can be exercised without a live database.
pub fn backfill_foreign_keys(columns: &mut [ColumnDescriptor], foreign_keys: &[ForeignKey]) {
    for fk in foreign_keys {
        if let Some(column) = columns.iter_mut().find(|column| column.name == fk.column) {
            column.is_foreign_key = true;
            column.referenced_table = Some(fk.referenced_table.clone());
            column.referenced_column = Some(fk.referenced_column.clone());
        }
    }
}
