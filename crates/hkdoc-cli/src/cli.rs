//! CLI argument definitions for the support-table generator.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use hkdoc_model::Category;

#[derive(Parser)]
#[command(
    name = "hkdoc",
    version,
    about = "Generate HealthKit sample-type support tables",
    long_about = "Reconcile the HealthKit sample mapping against the catalog of known\n\
                  sample types and render Markdown support tables, one per category,\n\
                  plus a summary document."
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

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

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
    /// Generate the support-table documents.
    Generate(GenerateArgs),

    /// List the canonical sample-type catalog and check it for defects.
    Catalog(CatalogArgs),
}

#[derive(Parser, Default)]
pub struct GenerateArgs {
    /// TOML configuration file (defaults are used for missing keys).
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Sample mapping JSON (overrides the configured path).
    #[arg(long = "mapping", value_name = "PATH")]
    pub mapping: Option<PathBuf>,

    /// Output directory for generated documents (overrides the configured directory).
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Render and report without writing any file.
    #[arg(long = "dry-run", conflicts_with = "check")]
    pub dry_run: bool,

    /// Compare rendered documents with the files on disk and fail if they differ.
    ///
    /// Nothing is written. Useful in CI to detect a mapping change that was
    /// committed without regenerating the tables.
    #[arg(long = "check")]
    pub check: bool,
}

#[derive(Parser, Default)]
pub struct CatalogArgs {
    /// Only list this category (quantity, correlation, category or clinical).
    #[arg(long = "category", value_name = "CATEGORY")]
    pub category: Option<Category>,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
