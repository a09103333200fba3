//! Docket CLI - command-line interface for the legal-situation analyzer.
//!
//! The `docket` binary exposes two commands: `analyze` runs the full
//! analysis pipeline over a file or stdin, and `verify` re-checks the
//! integrity hashes of a persisted provenance log.

#![warn(missing_docs)]

mod cli;
mod commands;
mod output;

pub use cli::{AnalyzeArgs, Cli, Command, OutputFormat, VerifyArgs};
pub use commands::{execute_analyze, execute_verify};
pub use output::{render_integrity, render_report};
