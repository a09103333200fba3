//! Docket Analyzer
//!
//! Orchestration crate: runs situation classification, clause
//! segmentation, contradiction detection, and alignment scoring over one
//! input text, synthesizes a remedy plan, and assembles everything into
//! an [`docket_domain::AnalysisReport`].
//!
//! # Key Concepts
//!
//! - **Stages**: each stage is an independent component sharing one
//!   compiled pattern library; the analyzer wires them together and
//!   records every stage in the provenance ledger.
//! - **Remedy provider**: remedy synthesis sits behind the
//!   [`RemedyProvider`] trait so callers can substitute their own source
//!   of strategies and templates. A failed provider never suppresses the
//!   rest of the report.

#![warn(missing_docs)]

mod analyzer;
mod error;
mod recommendations;
mod remedy;

pub use analyzer::Analyzer;
pub use error::{AnalyzerError, RemedyError};
pub use remedy::{RemedyProvider, TemplateRemedies};
