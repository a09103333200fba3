//! Clause module - one segmented unit of source text

use serde::{Deserialize, Serialize};

/// A contiguous span of source text bounded by sentence-ending punctuation.
///
/// Clauses are produced by the segmenter with protected abbreviations
/// restored, and are immutable once created. The byte offsets refer to the
/// trimmed span within the original input, so downstream stages never have
/// to re-search the full text to locate a clause.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    /// The clause text, trimmed of surrounding whitespace
    pub text: String,

    /// Byte offset of the first character within the source text
    pub start_offset: usize,

    /// Byte offset one past the last character within the source text
    pub end_offset: usize,
}

impl Clause {
    /// Create a new clause
    pub fn new(text: impl Into<String>, start_offset: usize, end_offset: usize) -> Self {
        Self {
            text: text.into(),
            start_offset,
            end_offset,
        }
    }

    /// Length of the clause text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Whether the clause text is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// The clause location as a (start, end) byte span
    pub fn span(&self) -> (usize, usize) {
        (self.start_offset, self.end_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_span() {
        let clause = Clause::new("The party shall comply.", 10, 33);
        assert_eq!(clause.span(), (10, 33));
        assert_eq!(clause.len(), 23);
        assert!(!clause.is_empty());
    }

    #[test]
    fn test_clause_serialization() {
        let clause = Clause::new("Test clause.", 0, 12);
        let json = serde_json::to_string(&clause).unwrap();
        let parsed: Clause = serde_json::from_str(&json).unwrap();
        assert_eq!(clause, parsed);
    }
}
