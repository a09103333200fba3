//! CLI command definitions and argument parsing.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Docket CLI - Analyze legal text and audit analysis provenance.
#[derive(Debug, Parser)]
#[command(name = "docket")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true, default_value = "summary")]
    pub format: OutputFormat,

    /// Directory for provenance logs
    #[arg(long, global = true, default_value = "logs/provenance")]
    pub ledger_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable summary
    Summary,
    /// Full report as JSON
    Json,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Analyze legal text from a file or stdin
    Analyze(AnalyzeArgs),

    /// Verify the integrity of a provenance log
    Verify(VerifyArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// File to analyze; reads stdin when omitted
    pub file: Option<PathBuf>,

    /// Legal context or jurisdiction label recorded with the analysis
    #[arg(short, long)]
    pub context: Option<String>,

    /// Operator name recorded on every provenance entry
    #[arg(long, env = "DOCKET_OPERATOR")]
    pub operator: Option<String>,
}

/// Arguments for the verify command.
#[derive(Debug, Parser)]
pub struct VerifyArgs {
    /// Master log to verify; defaults to the one under the ledger directory
    pub log: Option<PathBuf>,
}
