//! Situation classification over the normalized text.

use std::sync::Arc;

use docket_domain::{
    Jurisdiction, JurisdictionKind, SituationRecord, SituationType, Urgency, UrgencyLevel,
};
use docket_patterns::{contains_term, count_term, PatternError, PatternLibrary};
use regex::Regex;
use tracing::debug;

/// Abbreviation expansions applied during normalization
const ABBREVIATIONS: &[(&str, &str)] = &[
    (r"\bdept\b", "department"),
    (r"\bgov\b", "government"),
    (r"\badmin\b", "administrative"),
    (r"\breg\b", "regulation"),
    (r"\bsec\b", "section"),
    (r"\bvs\b\.?", "versus"),
    (r"\bv\.", "versus"),
];

/// Classifies a situation description into a [`SituationRecord`].
///
/// Construction compiles the entity and key-fact regex sets; an invalid
/// built-in pattern fails construction, classification itself is total.
pub struct SituationClassifier {
    library: Arc<PatternLibrary>,
    entities: crate::entities::EntityExtractor,
    facts: crate::knowledge::FactPatterns,
    whitespace: Regex,
    abbreviations: Vec<(Regex, &'static str)>,
}

impl SituationClassifier {
    /// Create a classifier over the shared pattern library
    pub fn new(library: Arc<PatternLibrary>) -> Result<Self, PatternError> {
        let whitespace = Regex::new(r"\s+").map_err(|e| PatternError::InvalidPattern {
            category: "normalization",
            pattern: r"\s+",
            source: e,
        })?;
        let mut abbreviations = Vec::with_capacity(ABBREVIATIONS.len());
        for (source, replacement) in ABBREVIATIONS {
            let regex = Regex::new(source).map_err(|e| PatternError::InvalidPattern {
                category: "normalization",
                pattern: source,
                source: e,
            })?;
            abbreviations.push((regex, *replacement));
        }
        Ok(Self {
            library,
            entities: crate::entities::EntityExtractor::build()?,
            facts: crate::knowledge::FactPatterns::build()?,
            whitespace,
            abbreviations,
        })
    }

    /// Classify a situation description.
    ///
    /// Never fails: blank or unrecognized input yields a neutral `general`
    /// record.
    pub fn classify(&self, text: &str) -> SituationRecord {
        if text.trim().is_empty() {
            return SituationRecord::general();
        }

        let normalized = self.normalize(text);
        let situation_type = self.identify_type(&normalized);
        let jurisdiction = self.determine_jurisdiction(&normalized);
        let urgency = self.assess_urgency(&normalized);

        debug!(
            situation_type = situation_type.as_str(),
            jurisdiction = jurisdiction.primary.as_str(),
            urgency = urgency.level.as_str(),
            "classified situation"
        );

        SituationRecord {
            situation_type,
            entities: self.entities.extract(text),
            key_facts: self.facts.extract(text, situation_type),
            legal_framework: crate::knowledge::legal_framework(situation_type, jurisdiction.primary),
            potential_issues: crate::knowledge::potential_issues(&normalized),
            required_actions: crate::knowledge::required_actions(situation_type, urgency.level),
            jurisdiction,
            urgency,
        }
    }

    /// Lowercase, collapse whitespace, and expand common abbreviations
    fn normalize(&self, text: &str) -> String {
        let lowered = text.to_lowercase();
        let mut normalized = self
            .whitespace
            .replace_all(lowered.trim(), " ")
            .into_owned();
        for (regex, replacement) in &self.abbreviations {
            normalized = regex.replace_all(&normalized, *replacement).into_owned();
        }
        normalized
    }

    // Highest nonzero score wins; the situation table is sorted by category
    // name and only a strictly greater score displaces the current best, so
    // ties resolve lexicographically.
    fn identify_type(&self, normalized: &str) -> SituationType {
        let mut best: Option<(SituationType, usize)> = None;
        for pattern in self.library.situations() {
            let mut score = 0;
            for keyword in pattern.keywords {
                score += count_term(normalized, keyword);
            }
            for phrase in pattern.phrases {
                score += 3 * count_term(normalized, phrase);
            }
            if score > 0 && best.is_none_or(|(_, top)| score > top) {
                best = Some((pattern.category, score));
            }
        }
        best.map_or(SituationType::General, |(category, _)| category)
    }

    fn determine_jurisdiction(&self, normalized: &str) -> Jurisdiction {
        let mut jurisdiction = Jurisdiction::default();
        let mut scores: Vec<(JurisdictionKind, usize)> = Vec::new();

        for bucket in self.library.jurisdictions() {
            let mut score = 0;
            for indicator in bucket.indicators {
                if contains_term(normalized, indicator) {
                    score += 1;
                    jurisdiction
                        .indicators
                        .push(format!("{}: {}", bucket.kind, indicator));
                }
            }
            scores.push((bucket.kind, score));
        }

        let mut best: Option<(JurisdictionKind, usize)> = None;
        for &(kind, score) in &scores {
            if score > 0 && best.is_none_or(|(_, top)| score > top) {
                best = Some((kind, score));
            }
        }
        if let Some((kind, score)) = best {
            jurisdiction.primary = kind;
            jurisdiction.confidence = (score as f64 / 5.0).min(1.0);
            jurisdiction.secondary = scores
                .iter()
                .filter(|&&(k, s)| k != kind && s > 0)
                .map(|&(k, _)| k)
                .collect();
        }
        jurisdiction
    }

    fn assess_urgency(&self, normalized: &str) -> Urgency {
        let mut urgency = Urgency::default();
        let patterns = self.library.urgency();

        for indicator in patterns.high {
            if contains_term(normalized, indicator) {
                urgency.indicators.push(indicator.to_string());
                urgency.level = UrgencyLevel::High;
            }
        }
        for indicator in patterns.medium {
            if contains_term(normalized, indicator) {
                urgency.indicators.push(indicator.to_string());
            }
        }
        for indicator in patterns.low {
            if contains_term(normalized, indicator) {
                urgency.indicators.push(indicator.to_string());
                if urgency.level != UrgencyLevel::High {
                    urgency.level = UrgencyLevel::Low;
                }
            }
        }

        for regex in &patterns.timeline {
            if let Some(caps) = regex.captures(normalized) {
                urgency.timeline = caps.get(1).map(|m| m.as_str().to_string());
                break;
            }
        }
        urgency
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> SituationClassifier {
        let library = Arc::new(PatternLibrary::new().unwrap());
        SituationClassifier::new(library).unwrap()
    }

    #[test]
    fn test_traffic_stop_scenario() {
        let record =
            classifier().classify("Officer Smith pulled me over for speeding on Highway 101.");
        assert_eq!(record.situation_type, SituationType::TrafficStop);
        assert!(record.entities.people.iter().any(|p| p == "Officer Smith"));
        assert!(record
            .required_actions
            .contains(&"Document the encounter".to_string()));
    }

    #[test]
    fn test_fee_demand_scenario() {
        let record = classifier().classify(
            "The Department of Motor Vehicles sent a notice demanding a $150 administrative fee \
             for late registration renewal.",
        );
        assert_eq!(record.situation_type, SituationType::FeeDemand);
        assert_eq!(record.jurisdiction.primary, JurisdictionKind::State);
        assert!(record.legal_framework.contains(&"State law".to_string()));
        assert!(record
            .required_actions
            .contains(&"Challenge fee authority".to_string()));
        assert_eq!(record.entities.amounts, vec!["$150"]);
    }

    #[test]
    fn test_empty_input_yields_general_record() {
        let record = classifier().classify("   ");
        assert_eq!(record.situation_type, SituationType::General);
        assert_eq!(record.jurisdiction.primary, JurisdictionKind::Unknown);
        assert_eq!(record.urgency.level, UrgencyLevel::Medium);
        assert!(record.entities.is_empty());
    }

    #[test]
    fn test_unmatched_text_yields_general_with_framework() {
        let record = classifier().classify("The weather was pleasant yesterday afternoon.");
        assert_eq!(record.situation_type, SituationType::General);
        assert_eq!(record.legal_framework, vec!["General law".to_string()]);
    }

    #[test]
    fn test_tie_breaks_to_first_category_name() {
        // One administrative keyword and one contract keyword score 1-1;
        // administrative_action sorts first.
        let record = classifier().classify("the agency agreement");
        assert_eq!(record.situation_type, SituationType::AdministrativeAction);
    }

    #[test]
    fn test_normalization_expands_abbreviations() {
        let record = classifier().classify("Contact the dept about the audit");
        assert_eq!(record.situation_type, SituationType::AdministrativeAction);
    }

    #[test]
    fn test_high_urgency_outranks_low() {
        let record = classifier().classify("Please respond, this is urgent.");
        assert_eq!(record.urgency.level, UrgencyLevel::High);
        assert_eq!(
            record.required_actions[0],
            "URGENT: Immediate action required"
        );
    }

    #[test]
    fn test_low_urgency_without_high_indicator() {
        let record = classifier().classify("Reply at your earliest convenience, please.");
        assert_eq!(record.urgency.level, UrgencyLevel::Low);
    }

    #[test]
    fn test_timeline_extraction() {
        let record = classifier().classify("You must respond within 30 days of this notice.");
        assert_eq!(record.urgency.timeline.as_deref(), Some("30 days"));
        assert!(record.urgency.indicators.contains(&"within".to_string()));
    }

    #[test]
    fn test_tied_jurisdictions_break_lexicographically() {
        let record = classifier().classify("The state DMV and the county council sent letters.");
        // local and state both score 2; local sorts first
        assert_eq!(record.jurisdiction.primary, JurisdictionKind::Local);
        assert_eq!(record.jurisdiction.secondary, vec![JurisdictionKind::State]);
        assert!((record.jurisdiction.confidence - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let classifier = classifier();
        let text = "I received a summons from Superior Court in case CV-2024-0123.";
        assert_eq!(classifier.classify(text), classifier.classify(text));
    }
}
