//! Docket Provenance Ledger
//!
//! Hash-verified audit logging for every analysis action. Each session
//! owns an append-only sequence of [`ProvenanceEntry`] records; every
//! entry is stamped with a truncated SHA-256 integrity hash over its
//! canonical JSON form, so tampering with a recorded field is detectable
//! via [`ProvenanceLedger::verify_integrity`].
//!
//! # Key Concepts
//!
//! - **Session**: one ledger instance covers one analysis session,
//!   identified by a UUID. Entries are kept in memory for querying and
//!   persisted as they are written.
//! - **Persistence**: entries append to a master JSONL log shared across
//!   sessions and to a per-session JSON document. Persistence is
//!   best-effort; a failed write is logged and never fails the analysis.
//! - **Operation tracking**: [`ProvenanceLedger::track_operation`] wraps
//!   a closure with paired start and complete/error entries.

#![warn(missing_docs)]

mod config;
mod entry;
mod error;
mod ledger;

pub use config::LedgerConfig;
pub use entry::{content_hash, ProvenanceEntry};
pub use error::LedgerError;
pub use ledger::{
    read_master_log, verify_entries, Action, CorruptedEntry, IntegrityReport, ProvenanceLedger,
    SessionSummary,
};
