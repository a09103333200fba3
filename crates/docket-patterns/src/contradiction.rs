//! Contradiction term tables

/// Two term sets that conflict when both appear in a single clause
#[derive(Debug, Clone)]
pub struct AntagonisticPair {
    /// First term set
    pub first: &'static [&'static str],

    /// Second term set
    pub second: &'static [&'static str],

    /// Description attached to flagged clauses
    pub description: &'static str,
}

/// Positive/negative term sets tested across clause pairs.
///
/// A clause pair contradicts when one clause matches the positive set and
/// the other matches the negative set, in either direction.
#[derive(Debug, Clone)]
pub struct OppositeTerms {
    /// Affirmative terms
    pub positive: &'static [&'static str],

    /// Negating or opposite terms
    pub negative: &'static [&'static str],

    /// Description attached to flagged pairs
    pub description: &'static str,
}

pub(crate) fn antagonistic_pairs() -> Vec<AntagonisticPair> {
    vec![
        AntagonisticPair {
            first: &["notwithstanding"],
            second: &["subject to"],
            description: "Clause contains both \"notwithstanding\" and \"subject to\" which may create conflicting obligations",
        },
        AntagonisticPair {
            first: &["shall"],
            second: &["may"],
            description: "Clause mixes mandatory (\"shall\") and permissive (\"may\") language",
        },
        AntagonisticPair {
            first: &["prohibited", "forbidden", "not permitted"],
            second: &["permitted", "allowed", "authorized"],
            description: "Clause contains conflicting prohibition and permission language",
        },
    ]
}

pub(crate) fn opposite_terms() -> Vec<OppositeTerms> {
    vec![
        OppositeTerms {
            positive: &["required", "mandatory", "shall", "must"],
            negative: &["optional", "may", "not required", "shall not", "must not"],
            description: "conflicting obligation levels",
        },
        OppositeTerms {
            positive: &["permitted", "allowed", "authorized"],
            negative: &["prohibited", "forbidden", "not allowed", "not authorized"],
            description: "conflicting permission and prohibition",
        },
        OppositeTerms {
            positive: &["include", "includes"],
            negative: &["exclude", "excludes", "does not include"],
            description: "conflicting inclusion and exclusion",
        },
        OppositeTerms {
            positive: &["before", "prior to"],
            negative: &["after", "following", "subsequent to"],
            description: "conflicting temporal ordering",
        },
    ]
}
