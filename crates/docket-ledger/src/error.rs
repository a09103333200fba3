//! Ledger error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced by the provenance ledger
#[derive(Error, Debug)]
pub enum LedgerError {
    /// An entry failed field validation before being recorded
    #[error("invalid provenance entry: {0}")]
    Validation(String),

    /// The ledger configuration is unusable
    #[error("invalid ledger configuration: {0}")]
    Config(String),

    /// A filesystem operation failed
    #[error("ledger I/O failure at {path}: {source}")]
    Io {
        /// Path involved in the failed operation
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// An entry could not be serialized
    #[error("ledger serialization failure: {0}")]
    Serialization(#[from] serde_json::Error),
}
