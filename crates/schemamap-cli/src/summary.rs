//! Human-readable tables for command output, printed to stdout.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::{BatchOutcome, ClientRow, MappingReport, TermsReport};

pub fn print_mapping_summary(report: &MappingReport) {
    println!("Client: {} ({})", report.client_name, report.client_key);
    println!("Database: {}", report.database);
    println!("Output: {}", report.output_path.display());
    println!("Search terms: {}", report.term_count);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Natural Name"),
        header_cell("Columns"),
        header_cell("Identifiers"),
        header_cell("References"),
        header_cell("Rows"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 2..=5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for entry in &report.tables {
        table.add_row(vec![
            path_cell(&entry.path),
            Cell::new(&entry.natural_name),
            Cell::new(entry.column_count),
            count_cell(entry.identifier_count),
            count_cell(entry.reference_count),
            row_count_cell(entry.row_count),
        ]);
    }
    table.add_row(vec![
        total_cell("TOTAL"),
        total_cell(format!("{} tables", report.table_count)),
        Cell::new(report.column_count).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
}

pub fn print_batch_summary(outcome: &BatchOutcome) {
    let total = outcome.generated.len() + outcome.failures.len();
    println!(
        "Generated {} of {} client mappings",
        outcome.generated.len(),
        total
    );
    if !outcome.generated.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Client"),
            header_cell("Database"),
            header_cell("Tables"),
            header_cell("Columns"),
            header_cell("Terms"),
            header_cell("Output"),
        ]);
        apply_summary_table_style(&mut table);
        for index in 2..=4 {
            align_column(&mut table, index, CellAlignment::Right);
        }
        for report in &outcome.generated {
            table.add_row(vec![
                path_cell(&report.client_key),
                Cell::new(&report.database),
                Cell::new(report.table_count),
                Cell::new(report.column_count),
                Cell::new(report.term_count),
                Cell::new(report.output_path.display()),
            ]);
        }
        println!("{table}");
    }
    if !outcome.failures.is_empty() {
        eprintln!("Failures:");
        for (client, error) in &outcome.failures {
            eprintln!("- {client}: {error}");
        }
    }
}

pub fn print_terms(report: &TermsReport) {
    println!("Identifier: {}", report.identifier);
    println!("Natural name: {}", report.natural_name);
    if let Some(description) = &report.description {
        println!("Description: {description}");
    }
    if report.synonyms.len() > 1 {
        println!("Synonyms: {}", report.synonyms.join(", "));
    }
    let mut table = Table::new();
    match &report.ranked {
        Some(ranked) => {
            table.set_header(vec![header_cell("Search Term"), header_cell("Match")]);
            apply_listing_table_style(&mut table);
            align_column(&mut table, 1, CellAlignment::Right);
            for (term, score) in ranked {
                table.add_row(vec![Cell::new(term), score_cell(*score)]);
            }
        }
        None => {
            table.set_header(vec![header_cell("Search Term")]);
            apply_listing_table_style(&mut table);
            for term in &report.search_terms {
                table.add_row(vec![Cell::new(term)]);
            }
        }
    }
    println!("{table}");
}

pub fn print_clients(rows: &[ClientRow]) {
    if rows.is_empty() {
        println!("no clients configured");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Key"),
        header_cell("Client"),
        header_cell("Database"),
        header_cell("Host"),
        header_cell("Port"),
        header_cell("Schema"),
    ]);
    apply_listing_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            path_cell(&row.key),
            Cell::new(&row.client_name),
            Cell::new(&row.database),
            Cell::new(&row.host),
            Cell::new(row.port),
            match &row.schema {
                Some(schema) => Cell::new(schema),
                None => dim_cell("-"),
            },
        ]);
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_listing_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn path_cell(path: &str) -> Cell {
    Cell::new(path).fg(Color::Blue).add_attribute(Attribute::Bold)
}

fn total_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn row_count_cell(count: Option<i64>) -> Cell {
    match count {
        Some(value) => Cell::new(value),
        None => dim_cell("-"),
    }
}

fn score_cell(score: f64) -> Cell {
    let label = format!("{score:.2}");
    if score >= 0.8 {
        Cell::new(label)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else if score >= 0.5 {
        Cell::new(label).fg(Color::Yellow)
    } else {
        dim_cell(label)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
