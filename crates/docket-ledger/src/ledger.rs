//! Session-scoped provenance ledger with best-effort persistence.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde_json::{json, Value};
use tracing::{debug, error, info};
use uuid::Uuid;

use crate::config::LedgerConfig;
use crate::entry::{content_hash, ProvenanceEntry};
use crate::error::LedgerError;

/// A pending action to record, built up with optional context.
///
/// # Examples
///
/// ```no_run
/// use docket_ledger::{Action, LedgerConfig, ProvenanceLedger};
///
/// let ledger = ProvenanceLedger::new(LedgerConfig::default()).unwrap();
/// let entry_id = ledger
///     .log_action(
///         Action::new("analysis", "scored a traffic citation", "Analyzer")
///             .sovereignty_score(0.85)
///             .confidence(1.0),
///     )
///     .unwrap();
/// assert!(!entry_id.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Action {
    action_type: String,
    description: String,
    agent: String,
    input: Option<String>,
    output: Option<String>,
    document_path: Option<String>,
    legal_context: Option<String>,
    sovereignty_score: Option<f64>,
    confidence_level: Option<f64>,
    parent_entry_id: Option<String>,
    related_entries: Vec<String>,
}

impl Action {
    /// Start building an action record
    pub fn new(
        action_type: impl Into<String>,
        description: impl Into<String>,
        agent: impl Into<String>,
    ) -> Self {
        Self {
            action_type: action_type.into(),
            description: description.into(),
            agent: agent.into(),
            ..Self::default()
        }
    }

    /// Attach input content; only its hash is recorded
    pub fn input(mut self, content: &str) -> Self {
        self.input = Some(content_hash(content));
        self
    }

    /// Attach output content; only its hash is recorded
    pub fn output(mut self, content: &str) -> Self {
        self.output = Some(content_hash(content));
        self
    }

    /// Record the path of a related document
    pub fn document_path(mut self, path: impl Into<String>) -> Self {
        self.document_path = Some(path.into());
        self
    }

    /// Record a legal context or jurisdiction label
    pub fn legal_context(mut self, context: impl Into<String>) -> Self {
        self.legal_context = Some(context.into());
        self
    }

    /// Attach a sovereignty alignment score (0-1)
    pub fn sovereignty_score(mut self, score: f64) -> Self {
        self.sovereignty_score = Some(score);
        self
    }

    /// Attach a confidence level (0-1)
    pub fn confidence(mut self, level: f64) -> Self {
        self.confidence_level = Some(level);
        self
    }

    /// Link this action under a parent entry
    pub fn parent(mut self, entry_id: impl Into<String>) -> Self {
        self.parent_entry_id = Some(entry_id.into());
        self
    }

    /// Link related entries
    pub fn related(mut self, entry_ids: Vec<String>) -> Self {
        self.related_entries = entry_ids;
        self
    }

    fn validate(&self) -> Result<(), LedgerError> {
        if self.action_type.trim().is_empty() {
            return Err(LedgerError::Validation("action_type is empty".into()));
        }
        if self.description.trim().is_empty() {
            return Err(LedgerError::Validation(
                "action_description is empty".into(),
            ));
        }
        if self.agent.trim().is_empty() {
            return Err(LedgerError::Validation("agent_name is empty".into()));
        }
        for (name, value) in [
            ("sovereignty_score", self.sovereignty_score),
            ("confidence_level", self.confidence_level),
        ] {
            if let Some(v) = value {
                if !(0.0..=1.0).contains(&v) {
                    return Err(LedgerError::Validation(format!(
                        "{name} {v} outside [0, 1]"
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Summary of a ledger session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    /// Session identifier
    pub session_id: String,

    /// Unix timestamp (seconds) when the session started
    pub start_time: u64,

    /// Number of recorded entries
    pub entry_count: usize,

    /// Distinct agent names, sorted
    pub agents: Vec<String>,

    /// Distinct action types, sorted
    pub action_types: Vec<String>,

    /// Mean of all attached sovereignty scores, when any exist
    pub average_sovereignty_score: Option<f64>,
}

/// One entry whose stored hash no longer matches its content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorruptedEntry {
    /// Identifier of the corrupted entry
    pub entry_id: String,

    /// Hash recorded at log time
    pub stored_hash: String,

    /// Hash recomputed over the current content
    pub calculated_hash: String,
}

/// Result of verifying every entry hash in the session
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IntegrityReport {
    /// Number of entries examined
    pub total_entries: usize,

    /// Entries whose hash verified
    pub verified_entries: usize,

    /// Entries whose hash did not verify
    pub corrupted_entries: Vec<CorruptedEntry>,

    /// Entries recorded without a hash
    pub missing_hashes: Vec<String>,

    /// verified / total as a percentage; 100 for an empty ledger
    pub integrity_percentage: f64,
}

/// Hash-verified, session-scoped audit log of analysis actions.
///
/// Appending is guarded by a mutex so analysis stages can share one
/// ledger. Persistence is best-effort: a failed write is reported through
/// the log and never aborts the analysis that produced the entry.
pub struct ProvenanceLedger {
    config: LedgerConfig,
    session_id: String,
    session_start: u64,
    session_file: PathBuf,
    master_log: PathBuf,
    entries: Mutex<Vec<ProvenanceEntry>>,
}

impl ProvenanceLedger {
    /// Open a new ledger session under the configured directory.
    ///
    /// Creates the directory and writes the session header document;
    /// an unwritable directory fails construction.
    pub fn new(config: LedgerConfig) -> Result<Self, LedgerError> {
        config.validate()?;

        let session_id = Uuid::new_v4().to_string();
        let session_start = unix_now();

        fs::create_dir_all(&config.directory).map_err(|source| LedgerError::Io {
            path: config.directory.clone(),
            source,
        })?;

        let session_file = config
            .directory
            .join(format!("session_{}.json", &session_id[..8]));
        let master_log = config.directory.join(&config.master_log_name);

        let header = json!({
            "session_id": session_id,
            "start_time": session_start,
            "system_version": config.system_version,
            "provenance_version": "1.0",
            "entries": [],
        });
        fs::write(&session_file, serde_json::to_string_pretty(&header)?).map_err(|source| {
            LedgerError::Io {
                path: session_file.clone(),
                source,
            }
        })?;

        info!(session = %&session_id[..8], "provenance session opened");

        Ok(Self {
            config,
            session_id,
            session_start,
            session_file,
            master_log,
            entries: Mutex::new(Vec::new()),
        })
    }

    /// The session identifier for this ledger
    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    /// Record an action and return its entry id.
    ///
    /// Fails on invalid fields; persistence failures are logged and do
    /// not fail the call.
    pub fn log_action(&self, action: Action) -> Result<String, LedgerError> {
        action.validate()?;

        let mut entry = ProvenanceEntry {
            entry_id: Uuid::new_v4().to_string(),
            timestamp: unix_now(),
            session_id: self.session_id.clone(),
            agent_name: action.agent,
            human_operator: self.config.human_operator.clone(),
            system_version: self.config.system_version.clone(),
            action_type: action.action_type,
            action_description: action.description,
            input_hash: action.input,
            output_hash: action.output,
            document_path: action.document_path,
            legal_context: action.legal_context,
            sovereignty_score: action.sovereignty_score,
            confidence_level: action.confidence_level,
            parent_entry_id: action.parent_entry_id,
            related_entries: action.related_entries,
            entry_hash: None,
        };
        entry.entry_hash = Some(entry.compute_hash()?);
        let entry_id = entry.entry_id.clone();

        // Persist inside the critical section so the session document's
        // read-modify-write and the master-log append stay in entry order
        // under concurrent logging.
        let mut entries = self.lock();
        self.persist(&entry);
        debug!(
            entry = %&entry_id[..8],
            action = %entry.action_type,
            "provenance entry recorded"
        );
        entries.push(entry);
        Ok(entry_id)
    }

    /// Run a closure bracketed by start/complete/error entries.
    ///
    /// The completion entry carries confidence 1.0, the error entry 0.0
    /// with the error text in its description. Exactly one of the two is
    /// written. Ledger write problems never mask the closure's result.
    pub fn track_operation<T, E>(
        &self,
        operation: &str,
        agent: &str,
        f: impl FnOnce() -> Result<T, E>,
    ) -> Result<T, E>
    where
        E: std::fmt::Display,
    {
        let started = Instant::now();
        let parent = self
            .log_action(Action::new(
                "operation_start",
                format!("Started operation: {operation}"),
                agent,
            ))
            .map_err(|e| error!(%operation, error = %e, "failed to record operation start"))
            .ok();

        let finish = |action: Action| {
            let action = match &parent {
                Some(id) => action.parent(id.clone()),
                None => action,
            };
            if let Err(e) = self.log_action(action) {
                error!(%operation, error = %e, "failed to record operation outcome");
            }
        };

        match f() {
            Ok(value) => {
                finish(
                    Action::new(
                        "operation_complete",
                        format!(
                            "Completed operation: {operation} (duration: {:.2}s)",
                            started.elapsed().as_secs_f64()
                        ),
                        agent,
                    )
                    .confidence(1.0),
                );
                Ok(value)
            }
            Err(e) => {
                finish(
                    Action::new(
                        "operation_error",
                        format!(
                            "Failed operation: {operation} - {e} (duration: {:.2}s)",
                            started.elapsed().as_secs_f64()
                        ),
                        agent,
                    )
                    .confidence(0.0),
                );
                Err(e)
            }
        }
    }

    /// Look up an entry by id
    pub fn entry(&self, entry_id: &str) -> Option<ProvenanceEntry> {
        self.lock().iter().find(|e| e.entry_id == entry_id).cloned()
    }

    /// All entries recorded by one agent, in log order
    pub fn entries_by_agent(&self, agent_name: &str) -> Vec<ProvenanceEntry> {
        self.lock()
            .iter()
            .filter(|e| e.agent_name == agent_name)
            .cloned()
            .collect()
    }

    /// All entries of one action type, in log order
    pub fn entries_by_type(&self, action_type: &str) -> Vec<ProvenanceEntry> {
        self.lock()
            .iter()
            .filter(|e| e.action_type == action_type)
            .cloned()
            .collect()
    }

    /// Number of entries recorded in this session
    pub fn entry_count(&self) -> usize {
        self.lock().len()
    }

    /// Summarize the session so far
    pub fn session_summary(&self) -> SessionSummary {
        let entries = self.lock();

        let mut agents: Vec<String> = entries.iter().map(|e| e.agent_name.clone()).collect();
        agents.sort_unstable();
        agents.dedup();

        let mut action_types: Vec<String> =
            entries.iter().map(|e| e.action_type.clone()).collect();
        action_types.sort_unstable();
        action_types.dedup();

        let scores: Vec<f64> = entries.iter().filter_map(|e| e.sovereignty_score).collect();
        let average_sovereignty_score = if scores.is_empty() {
            None
        } else {
            Some(scores.iter().sum::<f64>() / scores.len() as f64)
        };

        SessionSummary {
            session_id: self.session_id.clone(),
            start_time: self.session_start,
            entry_count: entries.len(),
            agents,
            action_types,
            average_sovereignty_score,
        }
    }

    /// Recompute every entry hash and report mismatches
    pub fn verify_integrity(&self) -> IntegrityReport {
        verify_entries(&self.lock())
    }

    /// Close the session: record a closing entry and write the final
    /// summary and integrity check into the session document.
    ///
    /// Best-effort like all persistence; failures are logged.
    pub fn close_session(&self) {
        if let Err(e) = self.log_action(Action::new(
            "session_close",
            "Provenance session closed",
            "ProvenanceLedger",
        )) {
            error!(error = %e, "failed to record session close");
        }

        let summary = self.session_summary();
        let integrity = self.verify_integrity();

        if let Err(e) = self.finalize_session_file(&summary, &integrity) {
            error!(error = %e, "failed to finalize session file");
        }
        info!(
            session = %&self.session_id[..8],
            entries = summary.entry_count,
            "provenance session closed"
        );
    }

    fn finalize_session_file(
        &self,
        summary: &SessionSummary,
        integrity: &IntegrityReport,
    ) -> Result<(), LedgerError> {
        let mut document = self.read_session_file()?;
        if let Value::Object(map) = &mut document {
            map.insert("end_time".to_string(), json!(unix_now()));
            map.insert("final_summary".to_string(), serde_json::to_value(summary)?);
            map.insert(
                "integrity_check".to_string(),
                serde_json::to_value(integrity)?,
            );
            map.insert("status".to_string(), json!("closed"));
        }
        self.write_session_file(&document)
    }

    // Append to the master JSONL log and the session document. Failures
    // are logged, never propagated.
    fn persist(&self, entry: &ProvenanceEntry) {
        if let Err(e) = self.append_master_log(entry) {
            error!(error = %e, "failed to append master provenance log");
        }
        if let Err(e) = self.append_session_file(entry) {
            error!(error = %e, "failed to update session file");
        }
    }

    fn append_master_log(&self, entry: &ProvenanceEntry) -> Result<(), LedgerError> {
        let mut line = serde_json::to_string(entry)?;
        line.push('\n');
        let mut file = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.master_log)
            .map_err(|source| LedgerError::Io {
                path: self.master_log.clone(),
                source,
            })?;
        file.write_all(line.as_bytes()).map_err(|source| LedgerError::Io {
            path: self.master_log.clone(),
            source,
        })
    }

    fn append_session_file(&self, entry: &ProvenanceEntry) -> Result<(), LedgerError> {
        let mut document = self.read_session_file()?;
        if let Value::Object(map) = &mut document {
            if let Some(Value::Array(entries)) = map.get_mut("entries") {
                entries.push(serde_json::to_value(entry)?);
            }
            map.insert("last_updated".to_string(), json!(unix_now()));
        }
        self.write_session_file(&document)
    }

    fn read_session_file(&self) -> Result<Value, LedgerError> {
        let content =
            fs::read_to_string(&self.session_file).map_err(|source| LedgerError::Io {
                path: self.session_file.clone(),
                source,
            })?;
        Ok(serde_json::from_str(&content)?)
    }

    fn write_session_file(&self, document: &Value) -> Result<(), LedgerError> {
        fs::write(&self.session_file, serde_json::to_string_pretty(document)?).map_err(
            |source| LedgerError::Io {
                path: self.session_file.clone(),
                source,
            },
        )
    }

    fn lock(&self) -> MutexGuard<'_, Vec<ProvenanceEntry>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

/// Recompute hashes for a slice of entries and report mismatches.
///
/// Used for the in-memory session via
/// [`ProvenanceLedger::verify_integrity`] and for persisted logs read
/// back with [`read_master_log`].
pub fn verify_entries(entries: &[ProvenanceEntry]) -> IntegrityReport {
    let mut report = IntegrityReport {
        total_entries: entries.len(),
        verified_entries: 0,
        corrupted_entries: Vec::new(),
        missing_hashes: Vec::new(),
        integrity_percentage: 100.0,
    };

    for entry in entries {
        let Some(stored) = &entry.entry_hash else {
            report.missing_hashes.push(entry.entry_id.clone());
            continue;
        };
        let calculated = entry.compute_hash().unwrap_or_default();
        if *stored == calculated {
            report.verified_entries += 1;
        } else {
            report.corrupted_entries.push(CorruptedEntry {
                entry_id: entry.entry_id.clone(),
                stored_hash: stored.clone(),
                calculated_hash: calculated,
            });
        }
    }

    if report.total_entries > 0 {
        report.integrity_percentage =
            report.verified_entries as f64 / report.total_entries as f64 * 100.0;
    }
    report
}

/// Read every entry from a master JSONL log, in file order
pub fn read_master_log(path: &Path) -> Result<Vec<ProvenanceEntry>, LedgerError> {
    let content = fs::read_to_string(path).map_err(|source| LedgerError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).map_err(LedgerError::from))
        .collect()
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
