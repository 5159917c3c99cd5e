//! Mapping document persistence.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use schemamap_model::DatabaseMapping;

/// Output file for one client's mapping document.
pub fn mapping_path(output_dir: &Path, client_key: &str) -> PathBuf {
    output_dir.join(format!("{client_key}_table_mapping.json"))
}

/// Write a mapping document as pretty-printed JSON, creating parent
/// directories as needed.
///
/// The document is serialized straight from the mapping structs so table,
/// column, and search-index entries keep their insertion order on disk.
pub fn write_mapping(path: &Path, mapping: &DatabaseMapping) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("create output directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(mapping).context("serialize mapping document")?;
    fs::write(path, json).with_context(|| format!("write mapping {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use schemamap_engine::sample_mapping;

    use super::*;

    #[test]
    fn mapping_path_appends_document_suffix() {
        let path = mapping_path(Path::new("mappings"), "acme");
        assert_eq!(path, Path::new("mappings/acme_table_mapping.json"));
    }

    #[test]
    fn write_mapping_creates_parent_directories() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mapping = sample_mapping().expect("sample mapping");
        let path = mapping_path(
            &dir.path().join("nested").join("deeper"),
            &mapping.client_info.client_key,
        );
        write_mapping(&path, &mapping).expect("write mapping");

        let written = fs::read_to_string(&path).expect("read back");
        let document: serde_json::Value = serde_json::from_str(&written).expect("valid json");
        assert_eq!(document["client_info"]["client_key"], "sample_client");
        assert!(document["tables"]["dbo.Customers"].is_object());
        assert!(document["search_index"]["customers"].is_array());
    }

    #[test]
    fn written_document_keeps_column_declaration_order() {
        let dir = tempfile::tempdir().expect("tempdir");
        let mapping = sample_mapping().expect("sample mapping");
        let path = mapping_path(dir.path(), &mapping.client_info.client_key);
        write_mapping(&path, &mapping).expect("write mapping");

        let written = fs::read_to_string(&path).expect("read back");
        let customer_id = written.find("\"CustomerID\"").expect("first column");
        let created_date = written.find("\"CreatedDate\"").expect("last column");
        assert!(customer_id < created_date);
    }
}
