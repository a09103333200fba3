//! Situation-type, jurisdiction, and urgency keyword tables

use crate::error::PatternError;
use docket_domain::{JurisdictionKind, SituationType};
use regex::{Regex, RegexBuilder};

/// Keyword and phrase sets for one situation category.
///
/// Keywords score 1 point per occurrence; multi-word phrases score 3.
#[derive(Debug, Clone)]
pub struct SituationPattern {
    /// The situation type this category classifies
    pub category: SituationType,

    /// Single keywords, matched as substrings of the normalized text
    pub keywords: &'static [&'static str],

    /// Multi-word phrases, weighted higher than keywords
    pub phrases: &'static [&'static str],
}

/// Indicator terms for one jurisdictional bucket
#[derive(Debug, Clone)]
pub struct JurisdictionPattern {
    /// The jurisdiction bucket
    pub kind: JurisdictionKind,

    /// Indicator terms, matched as substrings of the normalized text
    pub indicators: &'static [&'static str],
}

/// Urgency keyword buckets
#[derive(Debug, Clone)]
pub struct UrgencyPatterns {
    /// Indicators that force the level to high
    pub high: &'static [&'static str],

    /// Indicators consistent with the default medium level
    pub medium: &'static [&'static str],

    /// Indicators that drop the level to low when no high indicator is seen
    pub low: &'static [&'static str],

    /// First-match regexes for timeline extraction; capture group 1 is the
    /// timeline phrase
    pub timeline: Vec<Regex>,
}

// Categories are listed in lexicographic order by category name; the
// classifier keeps the first maximum, so this order decides ties.
pub(crate) fn situation_patterns() -> Vec<SituationPattern> {
    vec![
        SituationPattern {
            category: SituationType::AdministrativeAction,
            keywords: &[
                "agency",
                "department",
                "administrative",
                "regulation",
                "compliance",
                "enforcement",
                "investigation",
                "audit",
                "inspection",
                "permit",
            ],
            phrases: &[
                "administrative action",
                "regulatory compliance",
                "agency investigation",
                "permit application",
                "inspection notice",
                "compliance order",
            ],
        },
        SituationPattern {
            category: SituationType::ContractDispute,
            keywords: &[
                "contract",
                "agreement",
                "breach",
                "default",
                "terms",
                "conditions",
                "obligation",
                "performance",
                "consideration",
                "party",
                "dispute",
            ],
            phrases: &[
                "breach of contract",
                "contract dispute",
                "terms and conditions",
                "failure to perform",
                "contract violation",
                "agreement terms",
            ],
        },
        SituationPattern {
            category: SituationType::CourtSummons,
            keywords: &[
                "court",
                "summons",
                "complaint",
                "lawsuit",
                "litigation",
                "hearing",
                "appearance",
                "defendant",
                "plaintiff",
                "case",
                "docket",
                "judge",
            ],
            phrases: &[
                "court appearance",
                "legal proceeding",
                "civil action",
                "court order",
                "summons and complaint",
                "hearing date",
                "case number",
            ],
        },
        SituationPattern {
            category: SituationType::FeeDemand,
            keywords: &[
                "fee",
                "fine",
                "penalty",
                "charge",
                "payment",
                "bill",
                "invoice",
                "assessment",
                "tax",
                "levy",
                "collection",
                "demand",
                "notice",
            ],
            phrases: &[
                "payment due",
                "fee schedule",
                "penalty assessment",
                "collection notice",
                "final demand",
                "administrative fee",
                "processing charge",
            ],
        },
        SituationPattern {
            category: SituationType::PropertyDispute,
            keywords: &[
                "property",
                "real estate",
                "land",
                "title",
                "deed",
                "ownership",
                "boundary",
                "easement",
                "lien",
                "mortgage",
                "foreclosure",
            ],
            phrases: &[
                "property dispute",
                "title issue",
                "boundary dispute",
                "property rights",
                "real estate matter",
                "land ownership",
                "property claim",
            ],
        },
        SituationPattern {
            category: SituationType::TrafficStop,
            keywords: &[
                "traffic",
                "driving",
                "vehicle",
                "license",
                "registration",
                "insurance",
                "speeding",
                "violation",
                "citation",
                "ticket",
                "officer",
                "police",
                "patrol",
                "stop",
                "pulled over",
            ],
            phrases: &[
                "pulled over",
                "traffic stop",
                "speeding ticket",
                "license and registration",
                "proof of insurance",
                "vehicle inspection",
                "moving violation",
            ],
        },
    ]
}

// Lexicographic bucket order, same reasoning as the situation table.
pub(crate) fn jurisdiction_patterns() -> Vec<JurisdictionPattern> {
    vec![
        JurisdictionPattern {
            kind: JurisdictionKind::Commercial,
            indicators: &[
                "commercial",
                "business",
                "trade",
                "commerce",
                "ucc",
                "contract",
                "agreement",
                "transaction",
                "sale",
                "purchase",
            ],
        },
        JurisdictionPattern {
            kind: JurisdictionKind::Federal,
            indicators: &[
                "federal",
                "united states",
                "u.s.",
                "irs",
                "fbi",
                "dea",
                "atf",
                "customs",
                "immigration",
                "social security",
                "medicare",
            ],
        },
        JurisdictionPattern {
            kind: JurisdictionKind::Local,
            indicators: &[
                "city",
                "county",
                "municipal",
                "town",
                "village",
                "parish",
                "local",
                "mayor",
                "council",
                "commissioner",
            ],
        },
        JurisdictionPattern {
            kind: JurisdictionKind::State,
            indicators: &[
                "state",
                "commonwealth",
                "dmv",
                "department of",
                "state police",
                "state court",
                "state agency",
                "governor",
                "legislature",
            ],
        },
    ]
}

pub(crate) fn urgency_patterns() -> Result<UrgencyPatterns, PatternError> {
    const TIMELINE_SOURCES: &[&str] = &[
        r"(?:within|by|before)\s+(\d+\s+(?:days?|weeks?|months?))",
        r"(?:due|deadline).*?(\d{1,2}/\d{1,2}/\d{2,4})",
    ];

    let mut timeline = Vec::with_capacity(TIMELINE_SOURCES.len());
    for source in TIMELINE_SOURCES {
        let regex = RegexBuilder::new(source)
            .case_insensitive(true)
            .build()
            .map_err(|e| PatternError::InvalidPattern {
                category: "urgency_timeline",
                pattern: source,
                source: e,
            })?;
        timeline.push(regex);
    }

    Ok(UrgencyPatterns {
        high: &[
            "immediate",
            "urgent",
            "emergency",
            "deadline",
            "final notice",
            "court date",
        ],
        medium: &["soon", "within", "by", "before", "due"],
        low: &["when convenient", "at your earliest", "please"],
        timeline,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_patterns() {
        for pattern in situation_patterns() {
            assert!(
                !pattern.keywords.is_empty() && !pattern.phrases.is_empty(),
                "category {} is missing patterns",
                pattern.category
            );
        }
    }

    #[test]
    fn test_urgency_buckets_nonempty() {
        let urgency = urgency_patterns().unwrap();
        assert!(!urgency.high.is_empty());
        assert!(!urgency.medium.is_empty());
        assert!(!urgency.low.is_empty());
        assert!(!urgency.timeline.is_empty());
    }

    #[test]
    fn test_timeline_captures_phrase() {
        let urgency = urgency_patterns().unwrap();
        let caps = urgency.timeline[0]
            .captures("You must respond within 30 days of receipt.")
            .unwrap();
        assert_eq!(&caps[1], "30 days");
    }
}
