//! Alignment module - composite scoring of assertive vs. submissive language

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative alignment level derived from the overall score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SovereigntyLevel {
    /// Overall score >= 0.75
    Sovereign,

    /// Overall score >= 0.5
    Transitional,

    /// Overall score < 0.5
    Servile,
}

impl SovereigntyLevel {
    /// Derive the level from an overall score
    pub fn from_score(score: f64) -> Self {
        if score >= 0.75 {
            SovereigntyLevel::Sovereign
        } else if score >= 0.5 {
            SovereigntyLevel::Transitional
        } else {
            SovereigntyLevel::Servile
        }
    }

    /// Get the level name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SovereigntyLevel::Sovereign => "Sovereign",
            SovereigntyLevel::Transitional => "Transitional",
            SovereigntyLevel::Servile => "Servile",
        }
    }
}

impl fmt::Display for SovereigntyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One servile-language match found in the text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServileFlag {
    /// Pattern category that fired (e.g. "dependency_language")
    pub category: String,

    /// The matched text
    pub matched: String,

    /// Byte span of the match
    pub span: (usize, usize),

    /// Per-category severity weight
    pub severity: f64,

    /// Guidance for replacing the flagged language
    pub suggestion: String,
}

/// One sovereign-language match found in the text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SovereignIndicator {
    /// Pattern category that fired (e.g. "authority_challenges")
    pub category: String,

    /// The matched text
    pub matched: String,

    /// Byte span of the match
    pub span: (usize, usize),

    /// Per-category strength weight
    pub strength: f64,

    /// Why this language counts toward the score
    pub explanation: String,
}

/// Lawful vs. unlawful remedy language breakdown
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemedyAlignment {
    /// Ratio of lawful matches to all remedy matches; 0.5 when none
    pub score: f64,

    /// Matched lawful-remedy phrases
    pub lawful_indicators: Vec<String>,

    /// Matched unlawful-remedy phrases
    pub unlawful_indicators: Vec<String>,

    /// One-line qualitative summary of the ratio
    pub analysis: String,
}

impl Default for RemedyAlignment {
    fn default() -> Self {
        Self {
            score: 0.5,
            lawful_indicators: Vec::new(),
            unlawful_indicators: Vec::new(),
            analysis: String::new(),
        }
    }
}

/// Composite alignment scoring for a text.
///
/// All scores are on a 0-1 scale. The overall score is the weighted
/// combination 0.4*language + 0.3*remedy + 0.3*autonomy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlignmentMetrics {
    /// Weighted composite of the three component scores
    pub overall_score: f64,

    /// Servile-penalty / sovereign-bonus language density score
    pub language_score: f64,

    /// Lawful vs. unlawful remedy language ratio
    pub remedy_score: f64,

    /// Self-determination vs. dependency language ratio
    pub autonomy_score: f64,

    /// Every servile-language match
    pub servile_flags: Vec<ServileFlag>,

    /// Every sovereign-language match
    pub sovereign_indicators: Vec<SovereignIndicator>,

    /// Remedy language breakdown
    pub remedy_alignment: RemedyAlignment,

    /// Top improvement suggestions (at most 5)
    pub improvement_suggestions: Vec<String>,

    /// Qualitative level derived from the overall score
    pub sovereignty_level: SovereigntyLevel,
}
