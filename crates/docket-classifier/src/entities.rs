//! Regex-based entity extraction.
//!
//! Each bucket is an independent pass over the raw (non-normalized) text;
//! results are not deduplicated across buckets.

use docket_domain::EntitySet;
use docket_patterns::PatternError;
use regex::Regex;

pub(crate) struct EntityExtractor {
    people: Vec<Regex>,
    organizations: Vec<Regex>,
    dates: Vec<Regex>,
    amounts: Vec<Regex>,
    identifiers: Vec<Regex>,
}

fn compile_set(
    category: &'static str,
    sources: &'static [&'static str],
) -> Result<Vec<Regex>, PatternError> {
    sources
        .iter()
        .map(|source| {
            Regex::new(source).map_err(|e| PatternError::InvalidPattern {
                category,
                pattern: source,
                source: e,
            })
        })
        .collect()
}

impl EntityExtractor {
    pub(crate) fn build() -> Result<Self, PatternError> {
        Ok(Self {
            people: compile_set(
                "entity_people",
                &[
                    r"\b[A-Z][a-z]+ [A-Z][a-z]+\b",
                    r"\b(?i:officer|judge|attorney|mr|ms|mrs)\.?\s+[A-Z][a-z]+\b",
                ],
            )?,
            organizations: compile_set(
                "entity_organizations",
                &[
                    r"\b[A-Z][a-z]*\s+(?i:department|agency|bureau|office|court|police)\b",
                    r"\b(?i:department|agency|bureau|office|court|police)\s+of\s+[A-Z][a-z]+\b",
                ],
            )?,
            dates: compile_set(
                "entity_dates",
                &[
                    r"\b\d{1,2}/\d{1,2}/\d{2,4}\b",
                    r"\b\d{1,2}-\d{1,2}-\d{2,4}\b",
                    r"(?i)\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2},?\s+\d{4}\b",
                ],
            )?,
            amounts: compile_set(
                "entity_amounts",
                &[
                    r"\$\d+(?:,\d{3})*(?:\.\d{2})?",
                    r"(?i)\b\d+(?:,\d{3})*(?:\.\d{2})?\s+dollars?\b",
                ],
            )?,
            identifiers: compile_set(
                "entity_identifiers",
                &[
                    r"(?i)\b(?:case|citation|ticket|docket)\s*#?\s*[A-Z0-9-]+\b",
                    r"\b[A-Z]{2,}\d{4,}\b",
                ],
            )?,
        })
    }

    pub(crate) fn extract(&self, text: &str) -> EntitySet {
        EntitySet {
            people: collect(&self.people, text),
            organizations: collect(&self.organizations, text),
            dates: collect(&self.dates, text),
            amounts: collect(&self.amounts, text),
            identifiers: collect(&self.identifiers, text),
        }
    }
}

fn collect(regexes: &[Regex], text: &str) -> Vec<String> {
    regexes
        .iter()
        .flat_map(|regex| regex.find_iter(text).map(|m| m.as_str().to_string()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_people_and_identifiers() {
        let extractor = EntityExtractor::build().unwrap();
        let entities = extractor.extract(
            "Officer Smith issued citation #TR-2024-001 to John Doe on 3/15/2024 for $150.00.",
        );
        assert!(entities.people.iter().any(|p| p == "Officer Smith"));
        assert!(entities.people.iter().any(|p| p == "John Doe"));
        assert!(entities
            .identifiers
            .iter()
            .any(|i| i.contains("TR-2024-001")));
        assert_eq!(entities.dates, vec!["3/15/2024"]);
        assert_eq!(entities.amounts, vec!["$150.00"]);
    }

    #[test]
    fn test_extracts_organizations() {
        let extractor = EntityExtractor::build().unwrap();
        let entities = extractor.extract("A letter from the Department of Revenue arrived.");
        assert!(entities
            .organizations
            .iter()
            .any(|o| o.contains("Department of Revenue")));
    }

    #[test]
    fn test_empty_text_extracts_nothing() {
        let extractor = EntityExtractor::build().unwrap();
        assert!(extractor.extract("").is_empty());
    }
}
