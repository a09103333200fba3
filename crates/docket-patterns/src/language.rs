//! Servile, sovereign, remedy, and autonomy language pattern tables

use crate::error::PatternError;
use regex::{Regex, RegexBuilder};

/// One weighted language category with compiled regex patterns
#[derive(Debug)]
pub struct LanguageCategory {
    /// Category name (e.g. "dependency_language")
    pub name: &'static str,

    /// Severity (servile) or strength (sovereign) weight
    pub weight: f64,

    /// Guidance string attached to every match in this category
    pub guidance: &'static str,

    /// Compiled, case-insensitive patterns
    pub regexes: Vec<Regex>,
}

impl LanguageCategory {
    fn build(
        name: &'static str,
        weight: f64,
        guidance: &'static str,
        sources: &'static [&'static str],
    ) -> Result<Self, PatternError> {
        let mut regexes = Vec::with_capacity(sources.len());
        for source in sources {
            let regex = RegexBuilder::new(source)
                .case_insensitive(true)
                .build()
                .map_err(|e| PatternError::InvalidPattern {
                    category: name,
                    pattern: source,
                    source: e,
                })?;
            regexes.push(regex);
        }
        Ok(Self {
            name,
            weight,
            guidance,
            regexes,
        })
    }

    /// Total number of matches across all patterns in this category
    pub fn count_matches(&self, text: &str) -> usize {
        self.regexes.iter().map(|r| r.find_iter(text).count()).sum()
    }
}

/// Lawful and unlawful remedy pattern sets
#[derive(Debug)]
pub struct RemedyPatterns {
    /// Patterns indicating lawful-remedy focus
    pub lawful: Vec<Regex>,

    /// Patterns indicating unlawful (punitive) remedy focus
    pub unlawful: Vec<Regex>,
}

fn compile_set(
    category: &'static str,
    sources: &'static [&'static str],
) -> Result<Vec<Regex>, PatternError> {
    sources
        .iter()
        .map(|source| {
            RegexBuilder::new(source)
                .case_insensitive(true)
                .build()
                .map_err(|e| PatternError::InvalidPattern {
                    category,
                    pattern: source,
                    source: e,
                })
        })
        .collect()
}

pub(crate) fn servile_categories() -> Result<Vec<LanguageCategory>, PatternError> {
    Ok(vec![
        LanguageCategory::build(
            "submission_language",
            0.3,
            "Replace submissive language with assertive statements of rights and standing",
            &[
                r"\bplease\b.*\b(help|assist|allow|permit)\b",
                r"\bi\s+(humbly|respectfully)\s+(request|ask|beg)\b",
                r"\bif\s+it\s+pleases?\s+(the\s+)?(court|your\s+honor)\b",
                r"\bwith\s+all\s+due\s+respect\b",
                r"\bi\s+am\s+(just|only|merely)\s+a\b",
                r"\bi\s+don'?t\s+understand\s+(the\s+)?law\b",
            ],
        )?,
        LanguageCategory::build(
            "dependency_language",
            0.4,
            "Assert your authority rather than seeking permission",
            &[
                r"\bneed\s+(your\s+)?(permission|approval|authorization)\b",
                r"\bcan\s+(you|i)\s+please\b",
                r"\bwould\s+(you|it)\s+be\s+possible\b",
                r"\bi\s+hope\s+(you|the\s+court)\s+will\b",
                r"\bif\s+(you|the\s+court)\s+(would|could|might)\b",
            ],
        )?,
        LanguageCategory::build(
            "victim_language",
            0.5,
            "Focus on lawful remedy rather than personal circumstances",
            &[
                r"\bi\s+can'?t\s+(afford|pay|handle)\b",
                r"\bi\s+don'?t\s+have\s+(money|resources|means)\b",
                r"\bi\s+am\s+(poor|indigent|unable)\b",
                r"\bthis\s+is\s+(unfair|unjust)\s+to\s+me\b",
                r"\bwhy\s+is\s+this\s+happening\s+to\s+me\b",
            ],
        )?,
        LanguageCategory::build(
            "corporate_fiction_acceptance",
            0.6,
            "Clarify your standing as a living man/woman, not a legal fiction",
            &[
                r"\bmy\s+(social\s+security\s+number|ssn)\s+is\b",
                r"\bi\s+am\s+a\s+(us\s+)?(citizen|resident)\b",
                r"\bunder\s+penalty\s+of\s+perjury\b",
                r"\bi\s+(understand|acknowledge)\s+that\s+i\s+am\s+required\b",
                r"\bi\s+consent\s+to\s+(jurisdiction|this\s+court)\b",
            ],
        )?,
    ])
}

pub(crate) fn sovereign_categories() -> Result<Vec<LanguageCategory>, PatternError> {
    Ok(vec![
        LanguageCategory::build(
            "lawful_standing",
            0.4,
            "Properly establishes standing as a living being with inherent rights",
            &[
                r"\bi\s+am\s+a\s+(living\s+)?(man|woman)\b",
                r"\bacting\s+in\s+my\s+private\s+capacity\b",
                r"\bnot\s+acting\s+as\s+(agent|representative|trustee)\b",
                r"\bby\s+special\s+appearance\s+only\b",
                r"\breserv(e|ing)\s+all\s+(rights|claims)\b",
            ],
        )?,
        LanguageCategory::build(
            "authority_challenges",
            0.5,
            "Appropriately challenges presumed authority and jurisdiction",
            &[
                r"\bwhat\s+is\s+(your\s+)?authority\s+for\b",
                r"\bprove\s+(your\s+)?(jurisdiction|authority|standing)\b",
                r"\bshow\s+me\s+the\s+(law|statute|regulation)\b",
                r"\bwhere\s+is\s+the\s+(injured\s+party|victim)\b",
                r"\bwhat\s+is\s+the\s+nature\s+of\s+the\s+(claim|complaint)\b",
            ],
        )?,
        LanguageCategory::build(
            "constitutional_assertions",
            0.4,
            "Invokes constitutional protections and guarantees",
            &[
                r"\bconstitutional\s+(right|protection|guarantee)\b",
                r"\bfourth\s+amendment\s+(right|protection)\b",
                r"\bfifth\s+amendment\s+(right|protection)\b",
                r"\bdue\s+process\s+(right|violation|requirement)\b",
                r"\bequal\s+protection\s+(under\s+)?law\b",
            ],
        )?,
        LanguageCategory::build(
            "commercial_awareness",
            0.3,
            "Demonstrates understanding of commercial vs. lawful distinctions",
            &[
                r"\bthis\s+appears\s+to\s+be\s+a\s+commercial\s+(matter|transaction)\b",
                r"\bi\s+do\s+not\s+consent\s+to\s+(commercial\s+)?jurisdiction\b",
                r"\bno\s+contract\s+(exists|was\s+formed)\b",
                r"\bwhere\s+is\s+the\s+(consideration|meeting\s+of\s+minds)\b",
                r"\bucc\s+(article\s+)?\d+\s+(applies|governs)\b",
            ],
        )?,
        LanguageCategory::build(
            "remedy_focused",
            0.5,
            "Focuses on lawful remedy rather than punishment or penalties",
            &[
                r"\bi\s+(demand|require|claim)\s+(lawful\s+)?remedy\b",
                r"\bmake\s+me\s+whole\b",
                r"\bcompensation\s+for\s+(damages|harm|injury)\b",
                r"\brestitution\s+(is\s+)?(required|demanded)\b",
                r"\bspecific\s+performance\s+(is\s+)?(required|demanded)\b",
            ],
        )?,
    ])
}

pub(crate) fn remedy_patterns() -> Result<RemedyPatterns, PatternError> {
    Ok(RemedyPatterns {
        lawful: compile_set(
            "lawful_remedy_indicators",
            &[
                r"\bspecific\s+performance\b",
                r"\brestitution\b",
                r"\bmake\s+whole\b",
                r"\bcompensation\s+for\s+(actual\s+)?(damages|harm)\b",
                r"\binjunctive\s+relief\b",
            ],
        )?,
        unlawful: compile_set(
            "unlawful_remedy_indicators",
            &[
                r"\bpunitive\s+damages\b",
                r"\bpunishment\b",
                r"\bfines?\s+and\s+penalties\b",
                r"\bimprisonment\b",
                r"\bincarceration\b",
            ],
        )?,
    })
}

pub(crate) fn self_determination_category() -> Result<LanguageCategory, PatternError> {
    LanguageCategory::build(
        "self_determination",
        1.0,
        "Emphasizes autonomous decision-making",
        &[
            r"\bi\s+(choose|elect|decide)\s+to\b",
            r"\bby\s+my\s+own\s+(choice|decision|will)\b",
            r"\bacting\s+under\s+my\s+own\s+authority\b",
            r"\bself[\-\s]?determining\b",
            r"\bautonomous\s+(action|decision|choice)\b",
        ],
    )
}

pub(crate) fn non_consent_category() -> Result<LanguageCategory, PatternError> {
    // Weighted at 0.8 relative to self-determination in the autonomy ratio
    LanguageCategory::build(
        "non_consent",
        0.8,
        "Withholds consent explicitly",
        &[
            r"\bi\s+do\s+not\s+consent\b",
            r"\bwithout\s+my\s+consent\b",
            r"\bno\s+consent\s+(given|granted|implied)\b",
            r"\bunder\s+duress\b",
            r"\bcoercion\s+(is\s+)?present\b",
        ],
    )
}
