//! Provenance entry and integrity hashing.
//!
//! Every entry carries a truncated SHA-256 hash of its own canonical JSON
//! form (sorted keys, `entry_hash` absent), so any later mutation of a
//! recorded field is detectable.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use sha2::{Digest, Sha256};

/// Number of hex characters kept from the SHA-256 digest
const HASH_LEN: usize = 16;

/// Truncated SHA-256 hash of arbitrary content
pub fn content_hash(content: &str) -> String {
    let digest = Sha256::digest(content.as_bytes());
    let mut hex = format!("{digest:x}");
    hex.truncate(HASH_LEN);
    hex
}

/// A single provenance record.
///
/// Optional context fields stay `None` when the caller has nothing to
/// record; they still participate in the integrity hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProvenanceEntry {
    /// Unique entry identifier (UUID v4)
    pub entry_id: String,

    /// Unix timestamp (seconds) when the entry was recorded
    pub timestamp: u64,

    /// Session this entry belongs to
    pub session_id: String,

    /// Agent or component that performed the action
    pub agent_name: String,

    /// Human operator, when one is involved
    pub human_operator: Option<String>,

    /// System version string at record time
    pub system_version: String,

    /// Action category (analysis, operation_start, decision, ...)
    pub action_type: String,

    /// Human-readable description of the action
    pub action_description: String,

    /// Truncated hash of the action input, when provided
    pub input_hash: Option<String>,

    /// Truncated hash of the action output, when provided
    pub output_hash: Option<String>,

    /// Path of a related document
    pub document_path: Option<String>,

    /// Legal context or jurisdiction label
    pub legal_context: Option<String>,

    /// Sovereignty alignment score attached to the action (0-1)
    pub sovereignty_score: Option<f64>,

    /// Confidence in the action (0-1)
    pub confidence_level: Option<f64>,

    /// Parent entry for hierarchical operation tracking
    pub parent_entry_id: Option<String>,

    /// Related entry identifiers
    pub related_entries: Vec<String>,

    /// Integrity hash over all other fields
    pub entry_hash: Option<String>,
}

impl ProvenanceEntry {
    /// Compute the integrity hash over the canonical JSON form of this
    /// entry with `entry_hash` removed.
    pub fn compute_hash(&self) -> Result<String, serde_json::Error> {
        let mut value = serde_json::to_value(self)?;
        if let Value::Object(map) = &mut value {
            map.remove("entry_hash");
        }
        Ok(content_hash(&serde_json::to_string(&value)?))
    }

    /// Whether the stored hash matches the recomputed one
    pub fn verify(&self) -> bool {
        match (&self.entry_hash, self.compute_hash()) {
            (Some(stored), Ok(computed)) => *stored == computed,
            _ => false,
        }
    }
}
