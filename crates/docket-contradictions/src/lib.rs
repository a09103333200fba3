//! Docket Contradiction Detector
//!
//! Finds conflicting legal language, both within a single clause
//! (antagonistic term pairs such as "notwithstanding" + "subject to") and
//! across clause pairs (opposite-term tables such as mandatory vs.
//! permissive obligation language).
//!
//! Detection is keyword-driven and deterministic. Every flagged pair
//! carries the byte spans the segmenter assigned to the clauses involved,
//! so locations stay unambiguous even when a clause repeats verbatim.
//!
//! Positive terms are matched in affirmed position only: "shall not
//! appear" satisfies the negative obligation set, never the positive one.

#![warn(missing_docs)]

use std::sync::Arc;

use docket_domain::{Clause, ContradictionPair};
use docket_patterns::{contains_term, contains_term_affirmed, PatternLibrary};
use tracing::debug;

/// Confidence assigned to every keyword-pattern contradiction
const PATTERN_CONFIDENCE: f64 = 0.8;

/// Detects contradictory language within and across clauses.
#[derive(Clone)]
pub struct ContradictionDetector {
    library: Arc<PatternLibrary>,
}

impl ContradictionDetector {
    /// Create a detector over the shared pattern library
    pub fn new(library: Arc<PatternLibrary>) -> Self {
        Self { library }
    }

    /// Detect contradictions in an ordered sequence of clauses.
    ///
    /// Intra-clause findings come first, then cross-clause findings for
    /// every pair `i < j`, preserving discovery order. Findings are not
    /// deduplicated against each other.
    pub fn detect(&self, clauses: &[Clause]) -> Vec<ContradictionPair> {
        let lowered: Vec<String> = clauses.iter().map(|c| c.text.to_lowercase()).collect();
        let mut contradictions = Vec::new();

        for (clause, text) in clauses.iter().zip(&lowered) {
            self.check_intra_clause(clause, text, &mut contradictions);
        }

        for i in 0..clauses.len() {
            for j in (i + 1)..clauses.len() {
                if let Some(description) = self.opposing_description(&lowered[i], &lowered[j]) {
                    contradictions.push(ContradictionPair {
                        statement1: clauses[i].text.clone(),
                        statement2: clauses[j].text.clone(),
                        confidence: PATTERN_CONFIDENCE,
                        explanation: format!(
                            "These clauses appear to contradict each other: {description}"
                        ),
                        location1: clauses[i].span(),
                        location2: clauses[j].span(),
                    });
                }
            }
        }

        debug!(count = contradictions.len(), "contradiction detection done");
        contradictions
    }

    fn check_intra_clause(
        &self,
        clause: &Clause,
        lowered: &str,
        contradictions: &mut Vec<ContradictionPair>,
    ) {
        for pair in self.library.antagonistic_pairs() {
            let first = pair
                .first
                .iter()
                .any(|term| contains_term_affirmed(lowered, term));
            let second = pair
                .second
                .iter()
                .any(|term| contains_term_affirmed(lowered, term));
            if first && second {
                contradictions.push(ContradictionPair {
                    statement1: clause.text.clone(),
                    statement2: clause.text.clone(),
                    confidence: PATTERN_CONFIDENCE,
                    explanation: pair.description.to_string(),
                    location1: clause.span(),
                    location2: clause.span(),
                });
            }
        }
    }

    // First matching opposite-term row wins; at most one cross-clause
    // finding per clause pair, matching in either direction.
    fn opposing_description(&self, first: &str, second: &str) -> Option<&'static str> {
        for terms in self.library.opposite_terms() {
            let positive_in = |text: &str| {
                terms
                    .positive
                    .iter()
                    .any(|term| contains_term_affirmed(text, term))
            };
            let negative_in =
                |text: &str| terms.negative.iter().any(|term| contains_term(text, term));

            if (positive_in(first) && negative_in(second))
                || (positive_in(second) && negative_in(first))
            {
                return Some(terms.description);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docket_segmenter::TextSegmenter;

    fn detector() -> ContradictionDetector {
        ContradictionDetector::new(Arc::new(PatternLibrary::new().unwrap()))
    }

    fn clauses_of(text: &str) -> Vec<Clause> {
        TextSegmenter::new().segment(text)
    }

    #[test]
    fn test_shall_versus_shall_not_across_clauses() {
        let text = "The defendant shall appear. The defendant shall not appear.";
        let clauses = clauses_of(text);
        let found = detector().detect(&clauses);

        assert_eq!(found.len(), 1);
        let pair = &found[0];
        assert_eq!(pair.statement1, "The defendant shall appear");
        assert_eq!(pair.statement2, "The defendant shall not appear.");
        assert!((pair.confidence - 0.8).abs() < 1e-9);
        assert!(!pair.is_intra_clause());
        assert_eq!(&text[pair.location1.0..pair.location1.1], pair.statement1);
        assert_eq!(&text[pair.location2.0..pair.location2.1], pair.statement2);
    }

    #[test]
    fn test_notwithstanding_subject_to_in_one_clause() {
        let clauses = clauses_of(
            "Notwithstanding the foregoing, this agreement is subject to board approval.",
        );
        let found = detector().detect(&clauses);
        assert_eq!(found.len(), 1);
        assert!(found[0].is_intra_clause());
        assert!(found[0].explanation.contains("notwithstanding"));
    }

    #[test]
    fn test_shall_may_mix_in_one_clause() {
        let clauses = clauses_of("The contractor shall complete the work and may subcontract.");
        let found = detector().detect(&clauses);
        assert_eq!(found.len(), 1);
        assert!(found[0].explanation.contains("mandatory"));
    }

    #[test]
    fn test_negated_permission_is_not_a_conflict() {
        // "not permitted" must not also satisfy the permission set
        let clauses = clauses_of("Smoking is not permitted on the premises.");
        assert!(detector().detect(&clauses).is_empty());
    }

    #[test]
    fn test_reversed_direction_is_detected() {
        let clauses = clauses_of("Filing is optional. Filing is required.");
        let found = detector().detect(&clauses);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].statement1, "Filing is optional");
    }

    #[test]
    fn test_one_finding_per_clause_pair() {
        // Both the permission row and the temporal row would match; only
        // the first matching row is reported for the pair.
        let clauses = clauses_of("Entry is permitted before noon. Entry is prohibited after noon.");
        let found = detector().detect(&clauses);
        assert_eq!(found.len(), 1);
        assert!(found[0].explanation.contains("permission"));
    }

    #[test]
    fn test_repeated_clause_locations_differ() {
        let text = "You must file today. You must not file today. You must file today.";
        let clauses = clauses_of(text);
        let found = detector().detect(&clauses);

        // pairs (0,1) and (1,2) contradict; (0,2) agree
        assert_eq!(found.len(), 2);
        assert_ne!(found[0].location1, found[1].location2);
        for pair in &found {
            assert_eq!(&text[pair.location1.0..pair.location1.1], pair.statement1);
        }
    }

    #[test]
    fn test_no_clauses_no_findings() {
        assert!(detector().detect(&[]).is_empty());
        let clauses = clauses_of("The parties agree to cooperate in good faith.");
        assert!(detector().detect(&clauses).is_empty());
    }
}
