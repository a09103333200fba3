//! Contradiction module - pairs of mutually inconsistent statements

use serde::{Deserialize, Serialize};

/// Two statements flagged as contradictory.
///
/// Zero or more pairs are produced per analysis, in discovery order. The
/// detector makes no deduplication guarantee: the same underlying conflict
/// may be reported by both the intra-clause and the cross-clause strategy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContradictionPair {
    /// First statement (or the single clause, for intra-clause conflicts)
    pub statement1: String,

    /// Second statement
    pub statement2: String,

    /// Detection confidence (0.0-1.0); fixed at 0.8 for pattern matches
    pub confidence: f64,

    /// Human-readable description of the conflict
    pub explanation: String,

    /// Byte span of the first statement within the source text
    pub location1: (usize, usize),

    /// Byte span of the second statement within the source text
    pub location2: (usize, usize),
}

impl ContradictionPair {
    /// Whether both statements refer to the same clause span
    pub fn is_intra_clause(&self) -> bool {
        self.location1 == self.location2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intra_clause_detection() {
        let pair = ContradictionPair {
            statement1: "The party shall and may comply.".to_string(),
            statement2: "The party shall and may comply.".to_string(),
            confidence: 0.8,
            explanation: "mixed mandatory and permissive language".to_string(),
            location1: (0, 31),
            location2: (0, 31),
        };
        assert!(pair.is_intra_clause());
    }

    #[test]
    fn test_cross_clause_pair() {
        let pair = ContradictionPair {
            statement1: "The defendant shall appear.".to_string(),
            statement2: "The defendant shall not appear.".to_string(),
            confidence: 0.8,
            explanation: "conflicting obligation".to_string(),
            location1: (0, 27),
            location2: (28, 59),
        };
        assert!(!pair.is_intra_clause());
    }
}
