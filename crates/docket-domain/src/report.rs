//! Report module - the combined output of one analysis run

use crate::alignment::AlignmentMetrics;
use crate::clause::Clause;
use crate::contradiction::ContradictionPair;
use crate::situation::SituationRecord;
use serde::{Deserialize, Serialize};

/// Prioritized recommendations assembled from all analysis stages
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecommendationSet {
    /// Actions to take right away
    pub immediate_actions: Vec<String>,

    /// Actions for the coming days or weeks
    pub short_term_actions: Vec<String>,

    /// Longer-horizon strategy items
    pub long_term_actions: Vec<String>,

    /// Risk warnings surfaced by the analysis
    pub warnings: Vec<String>,

    /// Favorable elements worth preserving or pursuing
    pub opportunities: Vec<String>,

    /// Language-improvement suggestions from the alignment scorer
    pub sovereignty_improvements: Vec<String>,
}

impl RecommendationSet {
    /// Total number of recommendation items across all buckets
    pub fn len(&self) -> usize {
        self.immediate_actions.len()
            + self.short_term_actions.len()
            + self.long_term_actions.len()
            + self.warnings.len()
            + self.opportunities.len()
            + self.sovereignty_improvements.len()
    }

    /// Whether every bucket is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Remedy recommendation supplied by the external remedy collaborator
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RemedyPlan {
    /// Short description of the recommended remedy approach
    pub description: String,

    /// Recommended legal strategies, in priority order
    pub strategies: Vec<String>,

    /// Names of document templates applicable to the situation
    pub templates: Vec<String>,
}

/// The complete, JSON-serializable result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Ledger session this analysis was recorded under
    pub session_id: String,

    /// Unix timestamp (seconds) when the analysis completed
    pub timestamp: u64,

    /// Situation classification and extraction
    pub situation: SituationRecord,

    /// Segmented clauses the detector ran over
    pub clauses: Vec<Clause>,

    /// Flagged contradictions, in discovery order
    pub contradictions: Vec<ContradictionPair>,

    /// Composite alignment scoring
    pub alignment: AlignmentMetrics,

    /// Remedy recommendation; absent when the collaborator failed
    pub remedy: Option<RemedyPlan>,

    /// Prioritized recommendations
    pub recommendations: RecommendationSet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recommendation_set_len() {
        let mut set = RecommendationSet::default();
        assert!(set.is_empty());

        set.immediate_actions.push("Document the encounter".to_string());
        set.warnings.push("Deadline approaching".to_string());
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }
}
