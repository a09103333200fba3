//! Analyzer error types.

use std::time::Duration;

use docket_ledger::LedgerError;
use docket_patterns::PatternError;
use thiserror::Error;

/// Errors from analysis orchestration
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// A pattern table failed to compile during construction
    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),

    /// An analysis stage failed
    #[error("{stage} stage failed: {message}")]
    Stage {
        /// Name of the failed stage
        stage: &'static str,
        /// What went wrong
        message: String,
    },

    /// The analysis exceeded its configured deadline
    #[error("analysis exceeded deadline of {deadline:?}")]
    Timeout {
        /// The configured deadline
        deadline: Duration,
    },

    /// The remedy provider failed
    #[error("remedy provider error: {0}")]
    Remedy(#[from] RemedyError),

    /// The provenance ledger rejected an entry
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    /// Report serialization failed
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from a remedy provider
#[derive(Debug, Error)]
pub enum RemedyError {
    /// No template with the requested name exists
    #[error("unknown template: {0}")]
    UnknownTemplate(String),

    /// The provider could not produce a remedy
    #[error("remedy unavailable: {0}")]
    Unavailable(String),
}
