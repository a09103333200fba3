//! Docket Text Segmenter
//!
//! Turns raw text into an ordered sequence of clauses bounded by sentence
//! punctuation, without splitting on known legal abbreviations such as
//! "U.S.C." or "Inc.". Segmentation is a pure function of its input.
//!
//! Each produced [`Clause`] carries the byte offsets of its trimmed span
//! within the source text, so downstream stages (notably contradiction
//! location reporting) never re-search the full text for a clause, which
//! would be ambiguous when a clause repeats verbatim.

#![warn(missing_docs)]

use docket_domain::Clause;

/// Legal abbreviations whose trailing period must not end a clause.
///
/// Matching is case-sensitive; these are conventional spellings.
const PROTECTED_ABBREVIATIONS: &[&str] = &[
    "U.S.", "U.S.C.", "C.F.R.", "Fed.", "Reg.", "Inc.", "Corp.", "Ltd.", "Co.", "vs.", "v.",
];

/// Splits raw text into clauses at sentence-terminator runs.
#[derive(Debug, Clone)]
pub struct TextSegmenter {
    abbreviations: Vec<&'static str>,
}

impl Default for TextSegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl TextSegmenter {
    /// Create a segmenter with the built-in abbreviation list
    pub fn new() -> Self {
        Self {
            abbreviations: PROTECTED_ABBREVIATIONS.to_vec(),
        }
    }

    /// Segment text into an ordered sequence of clauses.
    ///
    /// Splits on runs of `.`, `!`, `?` followed by whitespace, excluding the
    /// terminator run from the clause text. Text with no terminal
    /// punctuation yields one clause equal to the trimmed input; blank text
    /// yields nothing.
    pub fn segment(&self, text: &str) -> Vec<Clause> {
        let mut clauses = Vec::new();
        let bytes = text.as_bytes();
        let len = bytes.len();

        let mut clause_start = 0;
        let mut i = 0;
        while i < len {
            if !is_terminator(bytes[i]) {
                i += 1;
                continue;
            }

            let run_start = i;
            while i < len && is_terminator(bytes[i]) {
                i += 1;
            }

            // A split needs trailing whitespace; a lone period ending a
            // protected abbreviation never splits.
            let followed_by_space = i < len && bytes[i].is_ascii_whitespace();
            if !followed_by_space || self.is_protected(text, run_start, i) {
                continue;
            }

            push_trimmed(&mut clauses, text, clause_start, run_start);
            while i < len && bytes[i].is_ascii_whitespace() {
                i += 1;
            }
            clause_start = i;
        }

        push_trimmed(&mut clauses, text, clause_start, len);
        clauses
    }

    fn is_protected(&self, text: &str, run_start: usize, run_end: usize) -> bool {
        if run_end - run_start != 1 || text.as_bytes()[run_start] != b'.' {
            return false;
        }
        let head = &text[..run_end];
        self.abbreviations.iter().any(|abbrev| {
            head.ends_with(abbrev) && {
                let before = head.len() - abbrev.len();
                before == 0 || !text.as_bytes()[before - 1].is_ascii_alphanumeric()
            }
        })
    }
}

fn is_terminator(byte: u8) -> bool {
    matches!(byte, b'.' | b'!' | b'?')
}

fn push_trimmed(clauses: &mut Vec<Clause>, text: &str, start: usize, end: usize) {
    let raw = &text[start..end];
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    let leading = raw.len() - raw.trim_start().len();
    let clause_start = start + leading;
    let clause_end = clause_start + trimmed.len();
    clauses.push(Clause::new(trimmed, clause_start, clause_end));
}
