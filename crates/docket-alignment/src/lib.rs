//! Docket Alignment Scorer
//!
//! Scores text for sovereignty alignment: how assertive, remedy-focused,
//! and autonomous the language is, versus submissive, punitive, or
//! dependent phrasing.
//!
//! # Scoring model
//!
//! Three component scores on a 0-1 scale combine into the overall score:
//!
//! - **language**: starts neutral at 0.5, penalized by the summed severity
//!   of servile matches and boosted by the summed strength of sovereign
//!   matches, both normalized by text length (per 100 bytes, floor 1).
//! - **remedy**: lawful matches over all remedy matches; 0.5 when no
//!   remedy language appears.
//! - **autonomy**: weighted self-determination and non-consent matches
//!   against double-weighted dependency matches; 0.5 when neither appears.
//!
//! `overall = 0.4*language + 0.3*remedy + 0.3*autonomy`, mapped to a
//! [`SovereigntyLevel`] at the 0.75 and 0.5 thresholds.

#![warn(missing_docs)]

use std::sync::Arc;

use docket_domain::{
    AlignmentMetrics, RemedyAlignment, ServileFlag, SovereignIndicator, SovereigntyLevel,
};
use docket_patterns::{LanguageCategory, PatternLibrary};
use tracing::debug;

const LANGUAGE_WEIGHT: f64 = 0.4;
const REMEDY_WEIGHT: f64 = 0.3;
const AUTONOMY_WEIGHT: f64 = 0.3;

/// Scores text for sovereignty alignment.
#[derive(Clone)]
pub struct AlignmentScorer {
    library: Arc<PatternLibrary>,
}

impl AlignmentScorer {
    /// Create a scorer over the shared pattern library
    pub fn new(library: Arc<PatternLibrary>) -> Self {
        Self { library }
    }

    /// Score a text. Blank input yields neutral 0.5 scores and a single
    /// "no text" suggestion.
    pub fn score(&self, text: &str) -> AlignmentMetrics {
        if text.trim().is_empty() {
            return AlignmentMetrics {
                overall_score: 0.5,
                language_score: 0.5,
                remedy_score: 0.5,
                autonomy_score: 0.5,
                servile_flags: Vec::new(),
                sovereign_indicators: Vec::new(),
                remedy_alignment: RemedyAlignment::default(),
                improvement_suggestions: vec!["No text provided for analysis".to_string()],
                sovereignty_level: SovereigntyLevel::from_score(0.5),
            };
        }

        let servile_flags = self.detect_servile(text);
        let sovereign_indicators = self.detect_sovereign(text);
        let remedy_alignment = self.analyze_remedy(text);
        let autonomy_score = self.autonomy_score(text);
        let language_score = language_score(&servile_flags, &sovereign_indicators, text.len());
        let remedy_score = remedy_alignment.score;

        let overall_score = language_score * LANGUAGE_WEIGHT
            + remedy_score * REMEDY_WEIGHT
            + autonomy_score * AUTONOMY_WEIGHT;

        let improvement_suggestions = self.suggestions(
            &servile_flags,
            &sovereign_indicators,
            remedy_score,
            autonomy_score,
        );

        debug!(
            overall = overall_score,
            language = language_score,
            remedy = remedy_score,
            autonomy = autonomy_score,
            "alignment scored"
        );

        AlignmentMetrics {
            overall_score,
            language_score,
            remedy_score,
            autonomy_score,
            servile_flags,
            sovereign_indicators,
            remedy_alignment,
            improvement_suggestions,
            sovereignty_level: SovereigntyLevel::from_score(overall_score),
        }
    }

    fn detect_servile(&self, text: &str) -> Vec<ServileFlag> {
        let mut flags = Vec::new();
        for category in self.library.servile() {
            for regex in &category.regexes {
                for m in regex.find_iter(text) {
                    flags.push(ServileFlag {
                        category: category.name.to_string(),
                        matched: m.as_str().to_string(),
                        span: (m.start(), m.end()),
                        severity: category.weight,
                        suggestion: category.guidance.to_string(),
                    });
                }
            }
        }
        flags
    }

    fn detect_sovereign(&self, text: &str) -> Vec<SovereignIndicator> {
        let mut indicators = Vec::new();
        for category in self.library.sovereign() {
            for regex in &category.regexes {
                for m in regex.find_iter(text) {
                    indicators.push(SovereignIndicator {
                        category: category.name.to_string(),
                        matched: m.as_str().to_string(),
                        span: (m.start(), m.end()),
                        strength: category.weight,
                        explanation: category.guidance.to_string(),
                    });
                }
            }
        }
        indicators
    }

    fn analyze_remedy(&self, text: &str) -> RemedyAlignment {
        let patterns = self.library.remedy();
        let lawful_indicators: Vec<String> = patterns
            .lawful
            .iter()
            .flat_map(|r| r.find_iter(text).map(|m| m.as_str().to_string()))
            .collect();
        let unlawful_indicators: Vec<String> = patterns
            .unlawful
            .iter()
            .flat_map(|r| r.find_iter(text).map(|m| m.as_str().to_string()))
            .collect();

        let lawful = lawful_indicators.len();
        let unlawful = unlawful_indicators.len();
        let score = if lawful + unlawful == 0 {
            0.5
        } else {
            lawful as f64 / (lawful + unlawful) as f64
        };

        RemedyAlignment {
            score,
            analysis: remedy_analysis(score, lawful, unlawful),
            lawful_indicators,
            unlawful_indicators,
        }
    }

    // Weighted self-determination and non-consent matches against
    // double-weighted dependency matches. Neutral 0.5 when neither side
    // has any match.
    fn autonomy_score(&self, text: &str) -> f64 {
        let weighted = |category: &LanguageCategory| {
            category.count_matches(text) as f64 * category.weight
        };
        let autonomy = weighted(self.library.self_determination())
            + weighted(self.library.non_consent());
        let dependency = self
            .library
            .dependency_language()
            .map_or(0.0, |c| c.count_matches(text) as f64);

        if autonomy + dependency == 0.0 {
            return 0.5;
        }
        (autonomy / (autonomy + dependency * 2.0)).min(1.0)
    }

    fn suggestions(
        &self,
        servile_flags: &[ServileFlag],
        sovereign_indicators: &[SovereignIndicator],
        remedy_score: f64,
        autonomy_score: f64,
    ) -> Vec<String> {
        let mut suggestions = Vec::new();

        // One suggestion per distinct servile category, in library order
        for category in self.library.servile() {
            if servile_flags.iter().any(|f| f.category == category.name) {
                suggestions.push(servile_suggestion(category.name).to_string());
            }
        }

        if sovereign_indicators.len() < 3 {
            suggestions.push(
                "Include more sovereign language patterns (authority challenges, constitutional assertions)"
                    .to_string(),
            );
        }
        if remedy_score < 0.6 {
            suggestions.push(
                "Focus on lawful remedies (restitution, specific performance) rather than punitive measures"
                    .to_string(),
            );
        }
        if autonomy_score < 0.6 {
            suggestions.push("Emphasize self-determination and autonomous decision-making".to_string());
        }
        if suggestions.is_empty() {
            suggestions
                .push("Consider incorporating more sovereign principles and lawful remedy focus".to_string());
        }

        suggestions.truncate(5);
        suggestions
    }
}

fn language_score(flags: &[ServileFlag], indicators: &[SovereignIndicator], len: usize) -> f64 {
    let normalizer = (len as f64 / 100.0).max(1.0);
    let penalty: f64 = flags.iter().map(|f| f.severity).sum::<f64>() / normalizer;
    let bonus: f64 = indicators.iter().map(|i| i.strength).sum::<f64>() / normalizer;
    (0.5 - penalty + bonus).clamp(0.0, 1.0)
}

fn remedy_analysis(score: f64, lawful: usize, unlawful: usize) -> String {
    let verdict = if score >= 0.8 {
        "Strong lawful remedy focus"
    } else if score >= 0.6 {
        "Good remedy alignment"
    } else if score >= 0.4 {
        "Mixed remedy approach"
    } else {
        "Concerning unlawful remedy focus"
    };
    format!("{verdict} ({lawful} lawful indicators, {unlawful} unlawful)")
}

fn servile_suggestion(category: &str) -> &'static str {
    match category {
        "submission_language" => {
            "Replace submissive phrases with assertive statements of rights and standing"
        }
        "dependency_language" => "Assert your inherent authority rather than seeking permission",
        "victim_language" => "Focus on lawful remedy and rights rather than personal circumstances",
        "corporate_fiction_acceptance" => {
            "Clarify your standing as a living being, not a corporate fiction"
        }
        _ => "Consider more sovereign language alternatives",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scorer() -> AlignmentScorer {
        AlignmentScorer::new(Arc::new(PatternLibrary::new().unwrap()))
    }

    #[test]
    fn test_blank_input_is_neutral_with_one_suggestion() {
        for text in ["", "   ", "\n\t"] {
            let metrics = scorer().score(text);
            assert_eq!(metrics.overall_score, 0.5);
            assert_eq!(metrics.language_score, 0.5);
            assert_eq!(metrics.remedy_score, 0.5);
            assert_eq!(metrics.autonomy_score, 0.5);
            assert_eq!(
                metrics.improvement_suggestions,
                vec!["No text provided for analysis".to_string()]
            );
            assert_eq!(metrics.sovereignty_level, SovereigntyLevel::Transitional);
        }
    }

    #[test]
    fn test_sovereign_text_scores_sovereign() {
        let metrics =
            scorer().score("I do not consent to jurisdiction and reserve all rights.");

        assert_eq!(metrics.sovereign_indicators.len(), 2);
        assert!(metrics.servile_flags.is_empty());
        assert_eq!(metrics.language_score, 1.0);
        assert_eq!(metrics.remedy_score, 0.5);
        assert_eq!(metrics.autonomy_score, 1.0);
        assert!((metrics.overall_score - 0.85).abs() < 1e-9);
        assert_eq!(metrics.sovereignty_level, SovereigntyLevel::Sovereign);
    }

    #[test]
    fn test_servile_text_scores_servile() {
        let metrics = scorer()
            .score("Please help me, I can't afford to pay this fine, I need your permission.");

        let categories: Vec<&str> = metrics
            .servile_flags
            .iter()
            .map(|f| f.category.as_str())
            .collect();
        assert!(categories.contains(&"submission_language"));
        assert!(categories.contains(&"victim_language"));
        assert!(categories.contains(&"dependency_language"));

        assert_eq!(metrics.language_score, 0.0);
        assert_eq!(metrics.autonomy_score, 0.0);
        assert_eq!(metrics.sovereignty_level, SovereigntyLevel::Servile);
        // three servile categories + sovereign + remedy + autonomy, capped
        assert_eq!(metrics.improvement_suggestions.len(), 5);
    }

    #[test]
    fn test_flag_spans_point_into_source() {
        let text = "I humbly request relief because I can't afford the fee.";
        let metrics = scorer().score(text);
        assert!(!metrics.servile_flags.is_empty());
        for flag in &metrics.servile_flags {
            assert_eq!(&text[flag.span.0..flag.span.1], flag.matched);
        }
    }

    #[test]
    fn test_remedy_ratio() {
        let metrics = scorer()
            .score("I demand restitution and specific performance, not punitive damages.");
        assert_eq!(metrics.remedy_alignment.lawful_indicators.len(), 2);
        assert_eq!(metrics.remedy_alignment.unlawful_indicators.len(), 1);
        assert!((metrics.remedy_score - 2.0 / 3.0).abs() < 1e-9);
        assert!(metrics.remedy_alignment.analysis.contains("2 lawful"));
    }

    #[test]
    fn test_neutral_text_is_transitional() {
        let metrics = scorer().score("The weather was pleasant on the drive home.");
        assert_eq!(metrics.language_score, 0.5);
        assert_eq!(metrics.remedy_score, 0.5);
        assert_eq!(metrics.autonomy_score, 0.5);
        assert_eq!(metrics.sovereignty_level, SovereigntyLevel::Transitional);
        assert_eq!(metrics.improvement_suggestions.len(), 3);
    }

    #[test]
    fn test_long_text_normalizes_density() {
        let padding = "The agreement describes the schedule in plain terms. ".repeat(20);
        let text = format!("{padding}I do not consent to jurisdiction.");
        let metrics = scorer().score(&text);
        // the single sovereign match is diluted by length
        assert!(metrics.language_score > 0.5);
        assert!(metrics.language_score < 0.6);
    }

    #[test]
    fn test_scoring_is_deterministic() {
        let text = "I reserve all rights and demand lawful remedy.";
        assert_eq!(scorer().score(text), scorer().score(text));
    }
}
