//! CLI argument definitions for the mapping generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "schemamap",
    version,
    about = "Generate natural-language mapping documents from database schemas",
    long_about = "Generate natural-language mapping documents from relational database schemas.\n\n\
                  Extracts table and column metadata from PostgreSQL, derives natural names,\n\
                  descriptions, search terms, synonyms, and example phrases, and writes one\n\
                  JSON mapping document per client."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the mapping document for one configured client.
    Generate(GenerateArgs),

    /// Generate mapping documents for every configured client.
    GenerateAll(GenerateAllArgs),

    /// Generate a mapping document for the built-in demo schema.
    Sample(SampleArgs),

    /// Show the terms derived from a single table or column identifier.
    Terms(TermsArgs),

    /// List the clients configured in the registry.
    Clients(ClientsArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Client key from the registry.
    #[arg(value_name = "CLIENT")]
    pub client: String,

    /// Path to the client registry (default: $SCHEMAMAP_CLIENTS or clients.toml).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Restrict extraction to one schema (default: the client's configured schema).
    #[arg(long = "schema", value_name = "NAME")]
    pub schema: Option<String>,

    /// Directory for generated mapping files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "mappings")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct GenerateAllArgs {
    /// Path to the client registry (default: $SCHEMAMAP_CLIENTS or clients.toml).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Restrict extraction to one schema for every client.
    #[arg(long = "schema", value_name = "NAME")]
    pub schema: Option<String>,

    /// Directory for generated mapping files.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "mappings")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Directory for the generated mapping file.
    #[arg(long = "output-dir", value_name = "DIR", default_value = "mappings")]
    pub output_dir: PathBuf,
}

#[derive(Parser)]
pub struct TermsArgs {
    /// Table or column identifier to derive terms for.
    #[arg(value_name = "IDENTIFIER")]
    pub identifier: String,

    /// SQL data type used for the description hint (e.g. varchar, int).
    #[arg(long = "type", value_name = "TYPE")]
    pub data_type: Option<String>,

    /// Rank the derived terms against this query phrase.
    #[arg(long = "match", value_name = "QUERY")]
    pub match_query: Option<String>,
}

#[derive(Parser)]
pub struct ClientsArgs {
    /// Path to the client registry (default: $SCHEMAMAP_CLIENTS or clients.toml).
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
