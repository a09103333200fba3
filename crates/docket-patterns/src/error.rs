//! Error types for the pattern library

use thiserror::Error;

/// Errors raised while building or validating pattern tables
#[derive(Error, Debug)]
pub enum PatternError {
    /// A built-in pattern table is empty
    #[error("Pattern table '{0}' is empty")]
    EmptyTable(&'static str),

    /// A category has neither keywords nor phrases
    #[error("Pattern category '{0}' has no patterns")]
    EmptyCategory(&'static str),

    /// A regex pattern failed to compile
    #[error("Invalid pattern '{pattern}' in category '{category}': {source}")]
    InvalidPattern {
        /// Category the pattern belongs to
        category: &'static str,
        /// The offending pattern source
        pattern: &'static str,
        /// Underlying regex error
        source: regex::Error,
    },
}
