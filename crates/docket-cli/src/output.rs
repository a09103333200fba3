//! Plain-text rendering of analysis reports and integrity checks.

use std::fmt::Write;

use docket_domain::AnalysisReport;
use docket_ledger::IntegrityReport;

const BANNER: &str = "============================================================";

/// Render a human-readable summary of an analysis report
pub fn render_report(report: &AnalysisReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "DOCKET ANALYSIS SUMMARY");
    let _ = writeln!(out, "{BANNER}");
    let _ = writeln!(out, "Session: {}", report.session_id);
    let _ = writeln!(out, "Situation: {}", report.situation.situation_type);
    let _ = writeln!(
        out,
        "Jurisdiction: {} (confidence {:.2})",
        report.situation.jurisdiction.primary, report.situation.jurisdiction.confidence
    );
    let _ = writeln!(out, "Urgency: {}", report.situation.urgency.level.as_str());
    if let Some(timeline) = &report.situation.urgency.timeline {
        let _ = writeln!(out, "Timeline: {timeline}");
    }

    let _ = writeln!(out, "\nClauses: {}", report.clauses.len());
    let _ = writeln!(out, "Contradictions: {}", report.contradictions.len());
    for pair in &report.contradictions {
        let _ = writeln!(out, "  - \"{}\" vs \"{}\"", pair.statement1, pair.statement2);
    }

    let _ = writeln!(
        out,
        "\nSovereignty: {} (overall {:.2})",
        report.alignment.sovereignty_level, report.alignment.overall_score
    );
    let _ = writeln!(
        out,
        "  language {:.2} | remedy {:.2} | autonomy {:.2}",
        report.alignment.language_score,
        report.alignment.remedy_score,
        report.alignment.autonomy_score
    );

    if let Some(remedy) = &report.remedy {
        let _ = writeln!(out, "\nRemedy: {}", remedy.description);
        for strategy in &remedy.strategies {
            let _ = writeln!(out, "  - {strategy}");
        }
        if !remedy.templates.is_empty() {
            let _ = writeln!(out, "  Templates: {}", remedy.templates.join(", "));
        }
    }

    let recs = &report.recommendations;
    for (title, items) in [
        ("Immediate actions", &recs.immediate_actions),
        ("Short-term actions", &recs.short_term_actions),
        ("Long-term actions", &recs.long_term_actions),
        ("Warnings", &recs.warnings),
        ("Opportunities", &recs.opportunities),
        ("Sovereignty improvements", &recs.sovereignty_improvements),
    ] {
        if items.is_empty() {
            continue;
        }
        let _ = writeln!(out, "\n{title}:");
        for item in items {
            let _ = writeln!(out, "  - {item}");
        }
    }

    out
}

/// Render a human-readable integrity report
pub fn render_integrity(report: &IntegrityReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Entries: {}", report.total_entries);
    let _ = writeln!(out, "Verified: {}", report.verified_entries);
    let _ = writeln!(out, "Integrity: {:.1}%", report.integrity_percentage);
    for corrupted in &report.corrupted_entries {
        let _ = writeln!(
            out,
            "CORRUPTED {}: stored {} != calculated {}",
            corrupted.entry_id, corrupted.stored_hash, corrupted.calculated_hash
        );
    }
    for entry_id in &report.missing_hashes {
        let _ = writeln!(out, "MISSING HASH {entry_id}");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_domain::{
        AlignmentMetrics, RecommendationSet, RemedyAlignment, RemedyPlan, SituationRecord,
        SovereigntyLevel,
    };

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            session_id: "s-1".to_string(),
            timestamp: 1_700_000_000,
            situation: SituationRecord::general(),
            clauses: Vec::new(),
            contradictions: Vec::new(),
            alignment: AlignmentMetrics {
                overall_score: 0.85,
                language_score: 1.0,
                remedy_score: 0.5,
                autonomy_score: 1.0,
                servile_flags: Vec::new(),
                sovereign_indicators: Vec::new(),
                remedy_alignment: RemedyAlignment::default(),
                improvement_suggestions: Vec::new(),
                sovereignty_level: SovereigntyLevel::Sovereign,
            },
            remedy: Some(RemedyPlan {
                description: "Reserve all rights".to_string(),
                strategies: vec!["Demand proof of all claims".to_string()],
                templates: vec!["affidavit_of_truth".to_string()],
            }),
            recommendations: RecommendationSet {
                opportunities: vec!["favorable terms".to_string()],
                ..RecommendationSet::default()
            },
        }
    }

    #[test]
    fn test_report_summary_mentions_key_sections() {
        let text = render_report(&sample_report());
        assert!(text.contains("DOCKET ANALYSIS SUMMARY"));
        assert!(text.contains("Situation: general"));
        assert!(text.contains("Sovereignty: Sovereign (overall 0.85)"));
        assert!(text.contains("Remedy: Reserve all rights"));
        assert!(text.contains("Opportunities:"));
        assert!(text.contains("  - favorable terms"));
    }

    #[test]
    fn test_missing_remedy_is_omitted() {
        let mut report = sample_report();
        report.remedy = None;
        let text = render_report(&report);
        assert!(!text.contains("Remedy:"));
    }

    #[test]
    fn test_integrity_rendering() {
        let report = IntegrityReport {
            total_entries: 3,
            verified_entries: 2,
            corrupted_entries: vec![docket_ledger::CorruptedEntry {
                entry_id: "e-2".to_string(),
                stored_hash: "aaaa".to_string(),
                calculated_hash: "bbbb".to_string(),
            }],
            missing_hashes: Vec::new(),
            integrity_percentage: 66.7,
        };
        let text = render_integrity(&report);
        assert!(text.contains("Integrity: 66.7%"));
        assert!(text.contains("CORRUPTED e-2"));
    }
}
