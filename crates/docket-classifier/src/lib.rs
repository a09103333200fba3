//! Docket Situation Classifier
//!
//! Interprets a free-text description of a legal situation and produces a
//! structured [`SituationRecord`](docket_domain::SituationRecord):
//! situation type, jurisdiction, entities, urgency, key facts, and
//! suggested framing.
//!
//! # Key Concepts
//!
//! - **Type scoring**: each situation category earns 1 point per keyword
//!   occurrence and 3 per phrase occurrence in the normalized text. The
//!   highest nonzero score wins; ties resolve to the lexicographically
//!   first category name, and an all-zero score yields `general`.
//! - **Normalization**: matching runs over a lowercased,
//!   whitespace-collapsed copy of the input with common abbreviations
//!   expanded (`dept` -> `department`, `v.` -> `versus`, ...). Entity
//!   extraction runs over the raw text, where capitalization is signal.
//!
//! Classification never fails on strange input; an empty or unmatched
//! description produces a neutral `general` record.

#![warn(missing_docs)]

mod classifier;
mod entities;
mod knowledge;

pub use classifier::SituationClassifier;
