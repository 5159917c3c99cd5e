use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use schemamap_cli::persist::{mapping_path, write_mapping};
use schemamap_engine::{build_database_mapping, sample_mapping};
use schemamap_extract::{ClientRegistry, SchemaExtractor};
use schemamap_model::{Category, DatabaseMapping, TableMapping};
use schemamap_text::{natural_name, search_terms, similarity, synonyms_for, type_hint};

use crate::cli::{ClientsArgs, GenerateAllArgs, GenerateArgs, SampleArgs, TermsArgs};
use crate::types::{BatchOutcome, ClientRow, MappingReport, TableReport, TermsReport};

pub fn run_generate(args: &GenerateArgs) -> Result<MappingReport> {
    let registry = ClientRegistry::load(args.config.as_deref()).context("load client registry")?;
    generate_client(
        &registry,
        &args.client,
        args.schema.as_deref(),
        &args.output_dir,
    )
}

pub fn run_generate_all(args: &GenerateAllArgs) -> Result<BatchOutcome> {
    let registry = ClientRegistry::load(args.config.as_deref()).context("load client registry")?;
    if registry.is_empty() {
        bail!("no clients configured in registry");
    }
    let total = registry.len();
    let mut generated = Vec::new();
    let mut failures = Vec::new();
    for key in registry.client_keys() {
        let span = info_span!("generate", client = %key);
        let result = span.in_scope(|| {
            generate_client(&registry, key, args.schema.as_deref(), &args.output_dir)
        });
        match result {
            Ok(report) => generated.push(report),
            Err(error) => {
                warn!(client = %key, error = %error, "client mapping failed");
                failures.push((key.to_string(), format!("{error:#}")));
            }
        }
    }
    info!(
        "generated mappings for {} of {} clients",
        generated.len(),
        total
    );
    Ok(BatchOutcome {
        generated,
        failures,
    })
}

pub fn run_sample(args: &SampleArgs) -> Result<MappingReport> {
    let mapping = sample_mapping()?;
    let output_path = mapping_path(&args.output_dir, &mapping.client_info.client_key);
    write_mapping(&output_path, &mapping)?;
    info!(
        tables = mapping.tables.len(),
        terms = mapping.search_index.len(),
        output = %output_path.display(),
        "sample mapping generated"
    );
    Ok(report_from_mapping(&mapping, output_path))
}

pub fn run_terms(args: &TermsArgs) -> Result<TermsReport> {
    let identifier = args.identifier.trim();
    if identifier.is_empty() {
        bail!("identifier is empty");
    }
    let natural = natural_name(identifier);
    let terms = search_terms(identifier);
    let synonyms: Vec<String> = synonyms_for(identifier).into_iter().collect();
    let description = args.data_type.as_deref().map(|data_type| {
        match type_hint(data_type) {
            Some(hint) => format!("{natural}{hint}"),
            None => natural.clone(),
        }
    });
    let ranked = args
        .match_query
        .as_deref()
        .map(|query| rank_terms(&terms, query));
    Ok(TermsReport {
        identifier: identifier.to_string(),
        natural_name: natural,
        description,
        search_terms: terms,
        synonyms,
        ranked,
    })
}

pub fn run_clients(args: &ClientsArgs) -> Result<Vec<ClientRow>> {
    let registry = ClientRegistry::load(args.config.as_deref()).context("load client registry")?;
    let rows = registry
        .iter()
        .map(|(key, config)| ClientRow {
            key: key.to_string(),
            client_name: config.client_name.clone(),
            database: config.database.clone(),
            host: config.host.clone(),
            port: config.port,
            schema: config.schema.clone(),
        })
        .collect();
    Ok(rows)
}

/// Extract one client's schema, build its mapping document, and write it.
fn generate_client(
    registry: &ClientRegistry,
    key: &str,
    schema: Option<&str>,
    output_dir: &Path,
) -> Result<MappingReport> {
    let start = Instant::now();
    let config = registry.client(key)?;
    let profile = registry.profile(key)?;
    let schema = schema.or_else(|| config.schema.as_deref());

    let mut extractor = SchemaExtractor::connect(key, config)?;
    let tables = extractor.extract_schema(schema)?;
    let mapping = build_database_mapping(&profile, &tables)?;

    let output_path = mapping_path(output_dir, key);
    write_mapping(&output_path, &mapping)?;
    info!(
        client = %key,
        tables = mapping.tables.len(),
        columns = mapping.client_info.total_columns,
        terms = mapping.search_index.len(),
        duration_ms = start.elapsed().as_millis(),
        output = %output_path.display(),
        "mapping generated"
    );
    Ok(report_from_mapping(&mapping, output_path))
}

fn report_from_mapping(mapping: &DatabaseMapping, output_path: PathBuf) -> MappingReport {
    let tables = mapping
        .tables
        .values()
        .map(|table| TableReport {
            path: table.technical_name.clone(),
            natural_name: table.natural_name.clone(),
            column_count: table.columns.len(),
            identifier_count: category_count(table, Category::Identifier),
            reference_count: category_count(table, Category::Reference),
            row_count: table.row_count,
        })
        .collect();
    MappingReport {
        client_key: mapping.client_info.client_key.clone(),
        client_name: mapping.client_info.client_name.clone(),
        database: mapping.client_info.database.clone(),
        output_path,
        table_count: mapping.client_info.total_tables,
        column_count: mapping.client_info.total_columns,
        term_count: mapping.search_index.len(),
        tables,
    }
}

fn category_count(table: &TableMapping, category: Category) -> usize {
    table
        .columns
        .values()
        .filter(|field| field.category == category)
        .count()
}

/// Pair every term with its similarity to `query`, best match first. Ties
/// keep derivation order.
fn rank_terms(terms: &[String], query: &str) -> Vec<(String, f64)> {
    let mut ranked: Vec<(String, f64)> = terms
        .iter()
        .map(|term| (term.clone(), similarity(term, query)))
        .collect();
    ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_terms_puts_closest_match_first() {
        let terms = search_terms("CustomerID");
        let ranked = rank_terms(&terms, "customer id");
        assert_eq!(ranked[0].0, "Customer ID");
        assert!(ranked[0].1 > 0.999);
        assert_eq!(ranked[1].0, "CustomerID");
        assert!(ranked[1].1 > 0.9);
    }

    #[test]
    fn terms_report_includes_type_hint() {
        let args = TermsArgs {
            identifier: "UnitPrice".to_string(),
            data_type: Some("decimal(10,2)".to_string()),
            match_query: None,
        };
        let report = run_terms(&args).expect("terms report");
        assert_eq!(report.natural_name, "Unit Price");
        assert_eq!(report.description.as_deref(), Some("Unit Price (number)"));
        assert!(report.ranked.is_none());
        assert!(report.search_terms.contains(&"price".to_string()));
    }

    #[test]
    fn terms_report_rejects_blank_identifier() {
        let args = TermsArgs {
            identifier: "   ".to_string(),
            data_type: None,
            match_query: None,
        };
        assert!(run_terms(&args).is_err());
    }

    #[test]
    fn sample_report_counts_the_demo_schema() {
        let mapping = sample_mapping().expect("sample mapping");
        let report = report_from_mapping(&mapping, PathBuf::from("out.json"));
        assert_eq!(report.client_key, "sample_client");
        assert_eq!(report.table_count, 3);
        assert_eq!(report.tables.len(), 3);
        let customers = &report.tables[0];
        assert_eq!(customers.path, "dbo.Customers");
        assert_eq!(customers.identifier_count, 1);
        let orders = &report.tables[1];
        assert_eq!(orders.reference_count, 1);
        assert_eq!(orders.row_count, Some(5400));
    }
}
