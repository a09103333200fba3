//! Analysis orchestration - runs every stage over one input text and
//! assembles the combined report.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use tracing::{info, warn};

use docket_alignment::AlignmentScorer;
use docket_classifier::SituationClassifier;
use docket_contradictions::ContradictionDetector;
use docket_domain::AnalysisReport;
use docket_ledger::{Action, ProvenanceLedger};
use docket_patterns::PatternLibrary;
use docket_segmenter::TextSegmenter;

use crate::error::AnalyzerError;
use crate::recommendations::build_recommendations;
use crate::remedy::{RemedyProvider, TemplateRemedies};

/// Orchestrates classification, segmentation, contradiction detection,
/// alignment scoring, and remedy synthesis over one input text.
///
/// Every stage is recorded in the provenance ledger, bracketed by
/// start/complete entries. One analyzer serves one ledger session;
/// repeated calls to [`Analyzer::analyze`] append to the same session.
pub struct Analyzer {
    classifier: SituationClassifier,
    segmenter: TextSegmenter,
    detector: ContradictionDetector,
    scorer: AlignmentScorer,
    remedies: Box<dyn RemedyProvider>,
    ledger: Arc<ProvenanceLedger>,
    deadline: Option<Duration>,
}

impl Analyzer {
    /// Build an analyzer with the built-in pattern library and the
    /// template-backed remedy provider.
    pub fn new(ledger: Arc<ProvenanceLedger>) -> Result<Self, AnalyzerError> {
        let library = Arc::new(PatternLibrary::new()?);
        Ok(Self {
            classifier: SituationClassifier::new(Arc::clone(&library))?,
            segmenter: TextSegmenter::new(),
            detector: ContradictionDetector::new(Arc::clone(&library)),
            scorer: AlignmentScorer::new(library),
            remedies: Box::new(TemplateRemedies::new()),
            ledger,
            deadline: None,
        })
    }

    /// Replace the remedy provider
    pub fn with_remedies(mut self, remedies: impl RemedyProvider + 'static) -> Self {
        self.remedies = Box::new(remedies);
        self
    }

    /// Set a wall-clock deadline for each analysis run.
    ///
    /// The deadline is checked between stages; a stage that is already
    /// running is never interrupted.
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// The ledger this analyzer records to
    pub fn ledger(&self) -> &ProvenanceLedger {
        &self.ledger
    }

    /// Run every analysis stage over `text` and assemble the report.
    ///
    /// `context` is an optional jurisdiction or matter label recorded
    /// with the input entry. A failed remedy provider is logged and the
    /// report carries `remedy: None`; every other stage failure aborts
    /// the run.
    pub fn analyze(
        &self,
        text: &str,
        context: Option<&str>,
    ) -> Result<AnalysisReport, AnalyzerError> {
        let started = Instant::now();

        let mut input = Action::new("input", "Received text for analysis", "Analyzer").input(text);
        if let Some(context) = context {
            input = input.legal_context(context);
        }
        self.ledger.log_action(input)?;

        let situation = self
            .ledger
            .track_operation("situation_classification", "SituationClassifier", || {
                Ok::<_, AnalyzerError>(self.classifier.classify(text))
            })?;
        self.check_deadline(started)?;

        let clauses = self
            .ledger
            .track_operation("text_segmentation", "TextSegmenter", || {
                Ok::<_, AnalyzerError>(self.segmenter.segment(text))
            })?;
        self.check_deadline(started)?;

        let contradictions = self
            .ledger
            .track_operation("contradiction_detection", "ContradictionDetector", || {
                Ok::<_, AnalyzerError>(self.detector.detect(&clauses))
            })?;
        self.check_deadline(started)?;

        let alignment = self
            .ledger
            .track_operation("alignment_scoring", "AlignmentScorer", || {
                Ok::<_, AnalyzerError>(self.scorer.score(text))
            })?;
        self.check_deadline(started)?;

        // The remedy stage is best-effort: a failed provider leaves the
        // rest of the report intact.
        let remedy = self
            .ledger
            .track_operation("remedy_synthesis", "RemedyProvider", || {
                self.remedies
                    .remedy_for(situation.situation_type)
                    .map_err(AnalyzerError::from)
            })
            .map_err(|e| warn!(error = %e, "remedy provider failed; omitting remedy"))
            .ok();

        let recommendations = build_recommendations(&situation, &contradictions, &alignment);

        let report = AnalysisReport {
            session_id: self.ledger.session_id().to_string(),
            timestamp: unix_now(),
            situation,
            clauses,
            contradictions,
            alignment,
            remedy,
            recommendations,
        };

        self.ledger.log_action(
            Action::new("analysis", "Assembled analysis report", "Analyzer")
                .input(text)
                .output(&serde_json::to_string(&report)?)
                .sovereignty_score(report.alignment.overall_score)
                .confidence(1.0),
        )?;

        info!(
            situation = %report.situation.situation_type,
            contradictions = report.contradictions.len(),
            level = %report.alignment.sovereignty_level,
            "analysis complete"
        );
        Ok(report)
    }

    /// Render a remedy document template, recording the generation in
    /// the ledger.
    pub fn generate_document(
        &self,
        template: &str,
        variables: &HashMap<String, String>,
    ) -> Result<String, AnalyzerError> {
        self.ledger
            .track_operation("document_generation", "RemedyProvider", || {
                self.remedies
                    .generate_document(template, variables)
                    .map_err(AnalyzerError::from)
            })
    }

    fn check_deadline(&self, started: Instant) -> Result<(), AnalyzerError> {
        match self.deadline {
            Some(deadline) if started.elapsed() > deadline => {
                Err(AnalyzerError::Timeout { deadline })
            }
            _ => Ok(()),
        }
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
