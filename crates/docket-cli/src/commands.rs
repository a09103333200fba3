//! Command execution.

use std::fs;
use std::io::Read;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;

use docket_analyzer::Analyzer;
use docket_ledger::{read_master_log, verify_entries, LedgerConfig, ProvenanceLedger};

use crate::cli::{AnalyzeArgs, OutputFormat, VerifyArgs};
use crate::output;

/// Run the analyze command
pub fn execute_analyze(
    args: AnalyzeArgs,
    ledger_dir: PathBuf,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let text = match &args.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    let config = LedgerConfig {
        directory: ledger_dir,
        human_operator: args.operator,
        ..LedgerConfig::default()
    };
    let ledger = Arc::new(ProvenanceLedger::new(config).context("failed to open ledger")?);
    let analyzer = Analyzer::new(Arc::clone(&ledger)).context("failed to build analyzer")?;

    let report = analyzer.analyze(&text, args.context.as_deref())?;
    ledger.close_session();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Summary => print!("{}", output::render_report(&report)),
    }
    Ok(())
}

/// Run the verify command
pub fn execute_verify(
    args: VerifyArgs,
    ledger_dir: PathBuf,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let log = args
        .log
        .unwrap_or_else(|| ledger_dir.join(LedgerConfig::default().master_log_name));
    let entries = read_master_log(&log)
        .with_context(|| format!("failed to read {}", log.display()))?;
    let report = verify_entries(&entries);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Summary => print!("{}", output::render_integrity(&report)),
    }

    if !report.corrupted_entries.is_empty() || !report.missing_hashes.is_empty() {
        anyhow::bail!("provenance log failed integrity verification");
    }
    Ok(())
}
