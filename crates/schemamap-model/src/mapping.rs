use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::descriptor::ForeignKey;

/// Identity of the client a mapping document is generated for.
///
/// Passed explicitly into the builder; there is no process-wide client
/// registry behind it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientProfile {
    pub key: String,
    pub name: String,
    pub database: String,
}

/// Header block of a mapping document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientInfo {
    pub client_key: String,
    pub client_name: String,
    pub database: String,
    pub generation_date: DateTime<Utc>,
    pub total_tables: usize,
    pub total_columns: usize,
}

/// Pass-through column metadata copied from the source descriptor.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub max_length: Option<i32>,
    pub is_nullable: bool,
    pub default_value: Option<String>,
    pub is_primary_key: bool,
    pub is_foreign_key: bool,
    pub referenced_table: Option<String>,
    pub referenced_column: Option<String>,
}

/// Derived mapping for one column: the natural-language rendering of a
/// [`crate::ColumnDescriptor`] plus its search surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMapping {
    pub technical_name: String,
    pub natural_name: String,
    pub description: String,
    pub data_type: String,
    pub search_terms: Vec<String>,
    pub synonyms: Vec<String>,
    pub category: Category,
    pub examples: Vec<String>,
    pub metadata: FieldMetadata,
}

/// Summary block of one table mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSummary {
    pub schema: String,
    pub table_name: String,
    pub column_count: usize,
    pub has_primary_key: bool,
    pub has_foreign_keys: bool,
}

/// Derived mapping for one table. Column entries keep declaration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableMapping {
    /// Full table path, `schema.table`.
    pub technical_name: String,
    pub natural_name: String,
    pub description: String,
    pub search_terms: Vec<String>,
    pub synonyms: Vec<String>,
    pub columns: IndexMap<String, FieldMapping>,
    pub primary_keys: Vec<String>,
    pub foreign_keys: Vec<ForeignKey>,
    pub row_count: Option<i64>,
    pub metadata: TableSummary,
}

/// Index from lowercase search term to the element paths the term describes.
///
/// Buckets are duplicate-free and keep insertion order: the first writer of a
/// path fixes its position. Terms are stored lowercased; both read operations
/// lowercase their argument before matching.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SearchIndex {
    entries: IndexMap<String, Vec<String>>,
}

impl SearchIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `path` under the lowercased `term` unless already present.
    pub fn insert(&mut self, term: &str, path: &str) {
        let bucket = self.entries.entry(term.to_lowercase()).or_default();
        if !bucket.iter().any(|existing| existing == path) {
            bucket.push(path.to_string());
        }
    }

    /// Paths registered under exactly this term.
    pub fn lookup(&self, term: &str) -> Option<&[String]> {
        self.entries.get(&term.to_lowercase()).map(Vec::as_slice)
    }

    /// Paths registered under any term that contains the query as a
    /// substring or is contained by it. Loose by intent, mirroring the
    /// synonym table's matching rule; duplicates collapse in first-seen
    /// order.
    pub fn find(&self, query: &str) -> Vec<String> {
        let query = query.to_lowercase();
        if query.is_empty() {
            return Vec::new();
        }
        let mut paths = Vec::new();
        for (term, bucket) in &self.entries {
            if term.contains(&query) || query.contains(term.as_str()) {
                for path in bucket {
                    if !paths.iter().any(|existing| existing == path) {
                        paths.push(path.clone());
                    }
                }
            }
        }
        paths
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Terms with their path buckets, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(term, paths)| (term.as_str(), paths.as_slice()))
    }
}

/// Generator provenance stamped into every document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratorInfo {
    /// Document format version.
    pub version: String,
    /// Generator name and package version.
    pub generator: String,
    pub schema_extraction_date: DateTime<Utc>,
}

/// Terminal mapping artifact for one client database. Written once; never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseMapping {
    pub client_info: ClientInfo,
    /// Table mappings keyed by `schema.table`, in extraction order.
    pub tables: IndexMap<String, TableMapping>,
    pub search_index: SearchIndex,
    pub metadata: GeneratorInfo,
}

impl DatabaseMapping {
    /// Table mapping for a `schema.table` path.
    pub fn table(&self, path: &str) -> Option<&TableMapping> {
        self.tables.get(path)
    }

    /// Paths registered under exactly this search term.
    pub fn lookup(&self, term: &str) -> Option<&[String]> {
        self.search_index.lookup(term)
    }
}
