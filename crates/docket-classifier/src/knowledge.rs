//! Situation knowledge tables: key facts, frameworks, issues, actions.

use docket_domain::{JurisdictionKind, SituationType, UrgencyLevel};
use docket_patterns::{contains_term, PatternError};
use regex::{Regex, RegexBuilder};

/// Issue-indicator terms checked against the normalized text
const ISSUE_INDICATORS: &[(&str, &str)] = &[
    ("waiver", "Potential rights waiver"),
    ("consent", "Consent issues"),
    ("jurisdiction", "Jurisdictional questions"),
    ("authority", "Authority challenges"),
    ("due process", "Due process concerns"),
    ("notice", "Notice requirements"),
    ("deadline", "Time-sensitive requirements"),
    ("penalty", "Penalty provisions"),
    ("default", "Default consequences"),
];

/// Key-fact regex sets, selected by situation type.
///
/// Capture group 1 of each pattern is the extracted fact.
pub(crate) struct FactPatterns {
    traffic: Vec<Regex>,
    fee: Vec<Regex>,
    general: Vec<Regex>,
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

impl FactPatterns {
    pub(crate) fn build() -> Result<Self, PatternError> {
        Ok(Self {
            traffic: compile_set(
                "facts_traffic_stop",
                &[
                    r"(?:speed|speeding).*?(\d+\s*mph)",
                    r"(?:location|where|at).*?([A-Z][a-z]+\s+(?:street|road|avenue|highway))",
                    r"(?:time|when).*?(\d{1,2}:\d{2}(?:\s*[ap]m)?)",
                ],
            )?,
            fee: compile_set(
                "facts_fee_demand",
                &[
                    r"(?:amount|fee|fine).*?(\$\d+(?:,\d{3})*(?:\.\d{2})?)",
                    r"(?:due|deadline).*?(\d{1,2}/\d{1,2}/\d{2,4})",
                    r"(?:account|reference).*?([A-Z0-9-]+)",
                ],
            )?,
            general: compile_set(
                "facts_general",
                &[
                    r"(?:date|when).*?(\d{1,2}/\d{1,2}/\d{2,4})",
                    r"(?:amount|cost|fee).*?(\$\d+(?:,\d{3})*(?:\.\d{2})?)",
                ],
            )?,
        })
    }

    /// Extract key facts for the classified situation type
    pub(crate) fn extract(&self, text: &str, situation_type: SituationType) -> Vec<String> {
        let set = match situation_type {
            SituationType::TrafficStop => &self.traffic,
            SituationType::FeeDemand => &self.fee,
            _ => &self.general,
        };
        set.iter()
            .flat_map(|regex| {
                regex
                    .captures_iter(text)
                    .filter_map(|caps| caps.get(1).map(|m| m.as_str().to_string()))
            })
            .collect()
    }
}

/// Applicable legal frameworks for a type/jurisdiction combination
pub(crate) fn legal_framework(
    situation_type: SituationType,
    jurisdiction: JurisdictionKind,
) -> Vec<String> {
    let base: &[&str] = match situation_type {
        SituationType::TrafficStop => {
            &["Constitutional law", "Administrative law", "Traffic regulations"]
        }
        SituationType::FeeDemand => &["Administrative law", "Due process", "Collection procedures"],
        SituationType::CourtSummons => {
            &["Civil procedure", "Constitutional law", "Jurisdictional law"]
        }
        SituationType::ContractDispute => &["Contract law", "UCC", "Commercial law"],
        SituationType::AdministrativeAction => {
            &["Administrative law", "Regulatory compliance", "Due process"]
        }
        SituationType::PropertyDispute => &["Property law", "Real estate law", "Title law"],
        SituationType::General => &["General law"],
    };

    let mut frameworks: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    match jurisdiction {
        JurisdictionKind::Federal => frameworks.push("Federal law".to_string()),
        JurisdictionKind::State => frameworks.push("State law".to_string()),
        JurisdictionKind::Local => frameworks.push("Local ordinances".to_string()),
        JurisdictionKind::Commercial | JurisdictionKind::Unknown => {}
    }
    frameworks
}

/// Red flags found by indicator terms in the normalized text
pub(crate) fn potential_issues(normalized: &str) -> Vec<String> {
    ISSUE_INDICATORS
        .iter()
        .filter(|(term, _)| contains_term(normalized, term))
        .map(|(_, issue)| issue.to_string())
        .collect()
}

/// Suggested immediate actions for the situation type and urgency
pub(crate) fn required_actions(
    situation_type: SituationType,
    urgency: UrgencyLevel,
) -> Vec<String> {
    let base: &[&str] = match situation_type {
        SituationType::TrafficStop => &[
            "Document the encounter",
            "Preserve evidence",
            "Review citation for errors",
            "Consider challenging jurisdiction",
        ],
        SituationType::FeeDemand => &[
            "Challenge fee authority",
            "Request fee schedule",
            "Demand due process hearing",
            "Preserve payment deadline",
        ],
        SituationType::CourtSummons => &[
            "File timely response",
            "Challenge jurisdiction if applicable",
            "Demand bill of particulars",
            "Preserve all rights",
        ],
        SituationType::ContractDispute => &[
            "Review contract terms",
            "Document breach if applicable",
            "Preserve evidence",
            "Consider mediation",
        ],
        _ => &["Seek legal counsel", "Document situation"],
    };

    let mut actions: Vec<String> = base.iter().map(|s| s.to_string()).collect();
    if urgency == UrgencyLevel::High {
        actions.insert(0, "URGENT: Immediate action required".to_string());
        actions.push("Consider emergency legal assistance".to_string());
    }
    actions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_traffic_facts_capture_speed() {
        let patterns = FactPatterns::build().unwrap();
        let facts = patterns.extract(
            "When I was stopped for speeding 75 mph in a 65 mph zone it was 3:45 pm.",
            SituationType::TrafficStop,
        );
        assert!(facts.iter().any(|f| f == "75 mph"));
        assert!(facts.iter().any(|f| f == "3:45 pm"));
    }

    #[test]
    fn test_framework_adds_jurisdiction_layer() {
        let frameworks = legal_framework(SituationType::FeeDemand, JurisdictionKind::State);
        assert!(frameworks.contains(&"Administrative law".to_string()));
        assert!(frameworks.contains(&"State law".to_string()));

        let unknown = legal_framework(SituationType::General, JurisdictionKind::Unknown);
        assert_eq!(unknown, vec!["General law".to_string()]);
    }

    #[test]
    fn test_potential_issues_match_indicator_terms() {
        let issues = potential_issues("the notice claims authority over this matter");
        assert!(issues.contains(&"Notice requirements".to_string()));
        assert!(issues.contains(&"Authority challenges".to_string()));
        assert!(!issues.contains(&"Consent issues".to_string()));
    }

    #[test]
    fn test_high_urgency_prepends_urgent_action() {
        let actions = required_actions(SituationType::CourtSummons, UrgencyLevel::High);
        assert_eq!(actions[0], "URGENT: Immediate action required");
        assert!(actions.contains(&"File timely response".to_string()));
        assert!(actions.contains(&"Consider emergency legal assistance".to_string()));
    }
}
