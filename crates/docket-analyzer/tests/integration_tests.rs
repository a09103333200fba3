//! End-to-end tests running every analysis stage through the ledger.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tempfile::TempDir;

use docket_analyzer::{Analyzer, AnalyzerError, RemedyError, RemedyProvider};
use docket_domain::{RemedyPlan, SituationType, SovereigntyLevel, UrgencyLevel};
use docket_ledger::{read_master_log, verify_entries, LedgerConfig, ProvenanceLedger};

fn test_analyzer() -> (TempDir, Analyzer) {
    let dir = TempDir::new().unwrap();
    let config = LedgerConfig {
        directory: dir.path().join("provenance"),
        ..LedgerConfig::default()
    };
    let ledger = Arc::new(ProvenanceLedger::new(config).unwrap());
    let analyzer = Analyzer::new(ledger).unwrap();
    (dir, analyzer)
}

#[test]
fn test_contradictory_document_is_flagged() {
    let (_dir, analyzer) = test_analyzer();
    let report = analyzer
        .analyze(
            "The defendant shall appear. The defendant shall not appear.",
            None,
        )
        .unwrap();

    assert!(!report.contradictions.is_empty());
    let pair = &report.contradictions[0];
    assert!(pair.statement1.contains("shall appear"));
    assert!(pair.statement2.contains("shall not appear"));
    assert!((pair.confidence - 0.8).abs() < 1e-9);
}

#[test]
fn test_assertive_text_scores_high_alignment() {
    let (_dir, analyzer) = test_analyzer();
    let report = analyzer
        .analyze(
            "I do not consent to jurisdiction and reserve all rights.",
            None,
        )
        .unwrap();

    assert!(matches!(
        report.alignment.sovereignty_level,
        SovereigntyLevel::Sovereign | SovereigntyLevel::Transitional
    ));
    assert!(report.alignment.autonomy_score > 0.5);
}

#[test]
fn test_traffic_stop_flows_through_every_stage() {
    let (_dir, analyzer) = test_analyzer();
    let report = analyzer
        .analyze(
            "Officer Smith pulled me over for speeding on Highway 101.",
            Some("state"),
        )
        .unwrap();

    assert_eq!(report.situation.situation_type, SituationType::TrafficStop);
    assert_eq!(report.clauses.len(), 1);
    assert!(report.contradictions.is_empty());

    let remedy = report.remedy.unwrap();
    assert!(remedy
        .templates
        .contains(&"notice_of_lawful_travel".to_string()));

    assert!(report
        .recommendations
        .immediate_actions
        .contains(&"Document all details of the encounter".to_string()));
    assert_eq!(report.session_id, analyzer.ledger().session_id());
}

#[test]
fn test_analysis_is_idempotent() {
    let (_dir, analyzer) = test_analyzer();
    let text = "The Department of Revenue demands a fee of $150 due within 30 days.";

    let first = analyzer.analyze(text, None).unwrap();
    let second = analyzer.analyze(text, None).unwrap();

    assert_eq!(first.situation, second.situation);
    assert_eq!(first.clauses, second.clauses);
    assert_eq!(first.contradictions, second.contradictions);
    assert_eq!(first.alignment, second.alignment);
    assert_eq!(first.recommendations, second.recommendations);
}

#[test]
fn test_blank_input_produces_neutral_report() {
    let (_dir, analyzer) = test_analyzer();
    let report = analyzer.analyze("   ", None).unwrap();

    assert_eq!(report.situation.situation_type, SituationType::General);
    assert!(report.clauses.is_empty());
    assert!(report.contradictions.is_empty());
    assert_eq!(report.alignment.overall_score, 0.5);
    assert_eq!(report.alignment.improvement_suggestions.len(), 1);
}

#[test]
fn test_every_stage_is_recorded_in_the_ledger() {
    let (_dir, analyzer) = test_analyzer();
    analyzer
        .analyze("Officer Smith issued a citation for speeding.", None)
        .unwrap();

    let ledger = analyzer.ledger();
    assert_eq!(ledger.entries_by_type("operation_start").len(), 5);
    assert_eq!(ledger.entries_by_type("operation_complete").len(), 5);
    assert!(ledger.entries_by_type("operation_error").is_empty());
    assert_eq!(ledger.entries_by_type("input").len(), 1);
    assert_eq!(ledger.entries_by_type("analysis").len(), 1);

    let report = ledger.verify_integrity();
    assert_eq!(report.integrity_percentage, 100.0);
}

#[test]
fn test_persisted_log_verifies_until_tampered() {
    let dir = TempDir::new().unwrap();
    let config = LedgerConfig {
        directory: dir.path().join("provenance"),
        ..LedgerConfig::default()
    };
    let master_log = config.directory.join(&config.master_log_name);
    let ledger = Arc::new(ProvenanceLedger::new(config).unwrap());
    let analyzer = Analyzer::new(ledger).unwrap();
    analyzer.analyze("I reserve all rights.", None).unwrap();

    let mut entries = read_master_log(&master_log).unwrap();
    assert!(entries.iter().all(|e| e.verify()));

    entries[0].action_description = "tampered".to_string();
    let report = verify_entries(&entries);
    assert_eq!(report.corrupted_entries.len(), 1);
    assert!(report.integrity_percentage < 100.0);
}

struct FailingRemedies;

impl RemedyProvider for FailingRemedies {
    fn remedy_for(&self, _: SituationType) -> Result<RemedyPlan, RemedyError> {
        Err(RemedyError::Unavailable("remedy corpus offline".to_string()))
    }

    fn generate_document(
        &self,
        template: &str,
        _: &HashMap<String, String>,
    ) -> Result<String, RemedyError> {
        Err(RemedyError::UnknownTemplate(template.to_string()))
    }
}

#[test]
fn test_failed_remedy_provider_does_not_suppress_report() {
    let dir = TempDir::new().unwrap();
    let config = LedgerConfig {
        directory: dir.path().join("provenance"),
        ..LedgerConfig::default()
    };
    let ledger = Arc::new(ProvenanceLedger::new(config).unwrap());
    let analyzer = Analyzer::new(ledger).unwrap().with_remedies(FailingRemedies);

    let report = analyzer
        .analyze("Officer Smith pulled me over for speeding.", None)
        .unwrap();

    assert!(report.remedy.is_none());
    assert_eq!(report.situation.situation_type, SituationType::TrafficStop);
    assert!(!report.recommendations.is_empty());

    let errors = analyzer.ledger().entries_by_type("operation_error");
    assert_eq!(errors.len(), 1);
    assert!(errors[0].action_description.contains("remedy corpus offline"));
}

#[test]
fn test_zero_deadline_times_out() {
    let (_dir, analyzer) = test_analyzer();
    let analyzer = analyzer.with_deadline(Duration::ZERO);

    let result = analyzer.analyze("Appear before the court.", None);
    assert!(matches!(result, Err(AnalyzerError::Timeout { .. })));
}

#[test]
fn test_urgent_deadline_text_raises_urgency() {
    let (_dir, analyzer) = test_analyzer();
    let report = analyzer
        .analyze(
            "You must respond immediately; the deadline is within 10 days.",
            None,
        )
        .unwrap();

    assert_eq!(report.situation.urgency.level, UrgencyLevel::High);
    assert!(report
        .recommendations
        .immediate_actions
        .contains(&"URGENT: Time-sensitive situation detected".to_string()));
}

#[test]
fn test_generate_document_is_ledgered() {
    let (_dir, analyzer) = test_analyzer();
    let mut vars = HashMap::new();
    vars.insert("name".to_string(), "Jordan Doe".to_string());

    let document = analyzer
        .generate_document("notice_of_lawful_travel", &vars)
        .unwrap();
    assert!(document.contains("Jordan Doe"));

    let result = analyzer.generate_document("writ_of_nothing", &vars);
    assert!(matches!(result, Err(AnalyzerError::Remedy(_))));

    let ledger = analyzer.ledger();
    assert_eq!(ledger.entries_by_type("operation_complete").len(), 1);
    assert_eq!(ledger.entries_by_type("operation_error").len(), 1);
}
