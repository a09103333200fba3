//! Prioritized recommendations assembled from the analysis stages.

use docket_domain::{
    AlignmentMetrics, ContradictionPair, JurisdictionKind, RecommendationSet, SituationRecord,
    SituationType, SovereigntyLevel, UrgencyLevel,
};

/// Overall score below this threshold triggers a critical language review
const CRITICAL_SCORE: f64 = 0.4;

/// Suggestions surfaced for transitional language
const TRANSITIONAL_SUGGESTION_CAP: usize = 3;

pub(crate) fn build_recommendations(
    situation: &SituationRecord,
    contradictions: &[ContradictionPair],
    alignment: &AlignmentMetrics,
) -> RecommendationSet {
    let mut set = RecommendationSet::default();

    match alignment.sovereignty_level {
        SovereigntyLevel::Servile => {
            set.warnings
                .push("SOVEREIGNTY WARNING: Language contains servile patterns".to_string());
            set.sovereignty_improvements
                .extend(alignment.improvement_suggestions.iter().cloned());
        }
        SovereigntyLevel::Transitional => {
            set.opportunities.push(
                "SOVEREIGNTY OPPORTUNITY: Language shows transitional sovereignty - can be improved"
                    .to_string(),
            );
            set.sovereignty_improvements.extend(
                alignment
                    .improvement_suggestions
                    .iter()
                    .take(TRANSITIONAL_SUGGESTION_CAP)
                    .cloned(),
            );
        }
        SovereigntyLevel::Sovereign => {
            set.opportunities
                .push("SOVEREIGNTY STRENGTH: Language demonstrates sovereign principles".to_string());
        }
    }

    if alignment.overall_score < CRITICAL_SCORE {
        set.immediate_actions.push(
            "CRITICAL: Review language for servile patterns and replace with sovereign alternatives"
                .to_string(),
        );
    }

    if situation.urgency.level == UrgencyLevel::High {
        set.immediate_actions.extend([
            "URGENT: Time-sensitive situation detected".to_string(),
            "Review all deadlines and timelines immediately".to_string(),
            "Consider emergency legal consultation".to_string(),
        ]);
    }

    if !contradictions.is_empty() {
        set.short_term_actions
            .push("Challenge contradictory provisions in documents".to_string());
    }

    if let Some((immediate, short_term, long_term)) = situation_actions(situation.situation_type) {
        set.immediate_actions
            .extend(immediate.iter().map(|s| s.to_string()));
        set.short_term_actions
            .extend(short_term.iter().map(|s| s.to_string()));
        set.long_term_actions
            .extend(long_term.iter().map(|s| s.to_string()));
    }

    if situation.jurisdiction.primary == JurisdictionKind::Commercial {
        set.opportunities
            .push("Commercial jurisdiction may provide UCC protections".to_string());
    }

    set
}

type ActionTable = (&'static [&'static str], &'static [&'static str], &'static [&'static str]);

// Immediate / short-term / long-term actions per situation type. Types
// without an entry fall back to the generic buckets above.
fn situation_actions(situation_type: SituationType) -> Option<ActionTable> {
    match situation_type {
        SituationType::TrafficStop => Some((
            &[
                "Document all details of the encounter",
                "Preserve any evidence",
            ],
            &[
                "Review citation for errors",
                "Research applicable traffic laws",
            ],
            &[
                "Consider challenging jurisdiction",
                "File administrative remedy if applicable",
            ],
        )),
        SituationType::FeeDemand => Some((
            &[
                "Do not pay without challenging authority",
                "Request fee schedule",
            ],
            &[
                "Challenge lawful authority for fee",
                "Demand due process hearing",
            ],
            &[
                "File administrative appeal",
                "Consider legal action if rights violated",
            ],
        )),
        SituationType::CourtSummons => Some((
            &["Calculate response deadline", "Preserve all rights"],
            &[
                "File appropriate response",
                "Challenge jurisdiction if applicable",
            ],
            &[
                "Prepare defense strategy",
                "Consider counterclaims if applicable",
            ],
        )),
        _ => None,
    }
}
