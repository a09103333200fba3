//! Docket Domain Layer
//!
//! This crate contains the core data model for Docket's legal situation
//! analysis pipeline. It defines the structured records that flow between
//! the analysis stages and out to consumers.
//!
//! ## Key Concepts
//!
//! - **Clause**: one segmented unit of source text, with byte offsets
//! - **SituationRecord**: classification of a real-world legal scenario
//! - **ContradictionPair**: two statements flagged as mutually inconsistent
//! - **AlignmentMetrics**: composite scoring of assertive vs. submissive language
//! - **AnalysisReport**: the combined result of one analysis run
//!
//! ## Architecture
//!
//! This crate holds plain data only:
//! - No analysis logic; the scoring crates produce these values
//! - Everything is serde-serializable for the consuming I/O layer
//! - Records are immutable once produced by their stage

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alignment;
pub mod clause;
pub mod contradiction;
pub mod report;
pub mod situation;

// Re-exports for convenience
pub use alignment::{
    AlignmentMetrics, RemedyAlignment, ServileFlag, SovereignIndicator, SovereigntyLevel,
};
pub use clause::Clause;
pub use contradiction::ContradictionPair;
pub use report::{AnalysisReport, RecommendationSet, RemedyPlan};
pub use situation::{
    EntitySet, Jurisdiction, JurisdictionKind, SituationRecord, SituationType, Urgency,
    UrgencyLevel,
};
