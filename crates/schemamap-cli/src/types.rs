use std::path::PathBuf;

/// Outcome of generating one mapping document.
#[derive(Debug)]
pub struct MappingReport {
    pub client_key: String,
    pub client_name: String,
    pub database: String,
    pub output_path: PathBuf,
    pub table_count: usize,
    pub column_count: usize,
    pub term_count: usize,
    pub tables: Vec<TableReport>,
}

#[derive(Debug)]
pub struct TableReport {
    pub path: String,
    pub natural_name: String,
    pub column_count: usize,
    pub identifier_count: usize,
    pub reference_count: usize,
    pub row_count: Option<i64>,
}

/// Outcome of a batch run over every configured client.
#[derive(Debug)]
pub struct BatchOutcome {
    pub generated: Vec<MappingReport>,
    /// Client key and rendered error for each failed client.
    pub failures: Vec<(String, String)>,
}

/// Derived artifacts for one identifier, as shown by the terms command.
#[derive(Debug)]
pub struct TermsReport {
    pub identifier: String,
    pub natural_name: String,
    pub description: Option<String>,
    pub search_terms: Vec<String>,
    pub synonyms: Vec<String>,
    /// Terms paired with similarity scores, best match first.
    pub ranked: Option<Vec<(String, f64)>>,
}

#[derive(Debug)]
pub struct ClientRow {
    pub key: String,
    pub client_name: String,
    pub database: String,
    pub host: String,
    pub port: u16,
    pub schema: Option<String>,
}
