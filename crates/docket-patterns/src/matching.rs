//! Boundary-aware term matching over lowercased text.
//!
//! Plain substring tests flag "may" inside "mayor" and "due" inside
//! "due process"; the scoring stages instead require that a term occurrence
//! is delimited by non-alphanumeric bytes on both sides.

fn occurrence_starts(text: &str, term: &str) -> Vec<usize> {
    if term.is_empty() {
        return Vec::new();
    }
    text.match_indices(term)
        .filter(|(start, _)| {
            let bytes = text.as_bytes();
            let before_ok = *start == 0 || !bytes[start - 1].is_ascii_alphanumeric();
            let end = start + term.len();
            let after_ok = end == bytes.len() || !bytes[end].is_ascii_alphanumeric();
            before_ok && after_ok
        })
        .map(|(start, _)| start)
        .collect()
}

/// Whether `term` occurs in `text` delimited by token boundaries.
///
/// Both arguments are expected to already be lowercase.
pub fn contains_term(text: &str, term: &str) -> bool {
    !occurrence_starts(text, term).is_empty()
}

/// Number of boundary-delimited occurrences of `term` in `text`
pub fn count_term(text: &str, term: &str) -> usize {
    occurrence_starts(text, term).len()
}

/// Whether `term` occurs in `text` in an affirmed position: at least one
/// boundary-delimited occurrence that is neither preceded by "not " nor
/// followed by " not".
///
/// Used when matching positive terms from an opposite-term table, so that
/// "shall not appear" does not also count as an affirmative "shall".
pub fn contains_term_affirmed(text: &str, term: &str) -> bool {
    occurrence_starts(text, term).iter().any(|&start| {
        let negated_before = text[..start].ends_with("not ");
        let negated_after = text[start + term.len()..].starts_with(" not");
        !negated_before && !negated_after
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_term_respects_boundaries() {
        assert!(contains_term("the mayor may object", "may"));
        assert!(!contains_term("the mayor objects", "may"));
        assert!(contains_term("payment is due", "due"));
        assert!(contains_term("u.s. code applies", "u.s."));
    }

    #[test]
    fn test_count_term_counts_occurrences() {
        assert_eq!(count_term("stop at the stop sign", "stop"), 2);
        assert_eq!(count_term("stopped at the crossing", "stop"), 0);
        assert_eq!(count_term("pulled over and pulled over", "pulled over"), 2);
    }

    #[test]
    fn test_affirmed_rejects_negated_occurrences() {
        assert!(contains_term_affirmed("the defendant shall appear", "shall"));
        assert!(!contains_term_affirmed("the defendant shall not appear", "shall"));
        assert!(!contains_term_affirmed("payment is not required", "required"));
        // A separate affirmed occurrence still counts
        assert!(contains_term_affirmed(
            "shall appear but shall not speak",
            "shall"
        ));
    }
}
