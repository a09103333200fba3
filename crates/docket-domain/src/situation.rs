//! Situation module - structured classification of a legal scenario

use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse classification of a real-world legal scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SituationType {
    /// Traffic stop, citation, or vehicle-related encounter
    TrafficStop,

    /// Demand for a fee, fine, or other payment
    FeeDemand,

    /// Court summons, complaint, or litigation notice
    CourtSummons,

    /// Contract or agreement dispute
    ContractDispute,

    /// Regulatory or agency enforcement action
    AdministrativeAction,

    /// Real property, title, or boundary dispute
    PropertyDispute,

    /// No category scored above zero
    General,
}

impl SituationType {
    /// Get the situation type name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            SituationType::TrafficStop => "traffic_stop",
            SituationType::FeeDemand => "fee_demand",
            SituationType::CourtSummons => "court_summons",
            SituationType::ContractDispute => "contract_dispute",
            SituationType::AdministrativeAction => "administrative_action",
            SituationType::PropertyDispute => "property_dispute",
            SituationType::General => "general",
        }
    }

    /// Parse a situation type from a string
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "traffic_stop" => Some(SituationType::TrafficStop),
            "fee_demand" => Some(SituationType::FeeDemand),
            "court_summons" => Some(SituationType::CourtSummons),
            "contract_dispute" => Some(SituationType::ContractDispute),
            "administrative_action" => Some(SituationType::AdministrativeAction),
            "property_dispute" => Some(SituationType::PropertyDispute),
            "general" => Some(SituationType::General),
            _ => None,
        }
    }
}

impl fmt::Display for SituationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Jurisdictional bucket a situation falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JurisdictionKind {
    /// Commercial or contractual context
    Commercial,

    /// Federal agencies and federal law
    Federal,

    /// City, county, or municipal context
    Local,

    /// State agencies and state law
    State,

    /// No jurisdictional indicator matched
    Unknown,
}

impl JurisdictionKind {
    /// Get the jurisdiction name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            JurisdictionKind::Commercial => "commercial",
            JurisdictionKind::Federal => "federal",
            JurisdictionKind::Local => "local",
            JurisdictionKind::State => "state",
            JurisdictionKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for JurisdictionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Inferred jurisdiction for a situation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Jurisdiction {
    /// Highest-scoring jurisdictional bucket, or `Unknown` if none matched
    pub primary: JurisdictionKind,

    /// Other buckets that matched at least one indicator
    pub secondary: Vec<JurisdictionKind>,

    /// Which indicators matched, as "bucket: indicator" strings
    pub indicators: Vec<String>,

    /// Normalized confidence in the primary bucket (0.0-1.0)
    pub confidence: f64,
}

impl Default for Jurisdiction {
    fn default() -> Self {
        Self {
            primary: JurisdictionKind::Unknown,
            secondary: Vec::new(),
            indicators: Vec::new(),
            confidence: 0.0,
        }
    }
}

/// Coarse entities extracted from the situation text.
///
/// Extraction is regex-based and the buckets are independent passes over
/// the text; results are not deduplicated against each other.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitySet {
    /// Person-name matches (e.g. "Officer Smith")
    pub people: Vec<String>,

    /// Organization matches (e.g. "Department of Revenue")
    pub organizations: Vec<String>,

    /// Date matches in numeric or month-name form
    pub dates: Vec<String>,

    /// Dollar amounts
    pub amounts: Vec<String>,

    /// Case, citation, and docket identifiers
    pub identifiers: Vec<String>,
}

impl EntitySet {
    /// Whether no entities were extracted at all
    pub fn is_empty(&self) -> bool {
        self.people.is_empty()
            && self.organizations.is_empty()
            && self.dates.is_empty()
            && self.amounts.is_empty()
            && self.identifiers.is_empty()
    }
}

/// Urgency level of a situation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UrgencyLevel {
    /// Deadline or emergency language present
    High,

    /// Default when no indicator dominates
    Medium,

    /// Only relaxed-timing language present
    Low,
}

impl UrgencyLevel {
    /// Get the urgency level as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::High => "high",
            UrgencyLevel::Medium => "medium",
            UrgencyLevel::Low => "low",
        }
    }
}

/// Urgency assessment for a situation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Urgency {
    /// The assessed level; defaults to medium
    pub level: UrgencyLevel,

    /// Which urgency keywords matched
    pub indicators: Vec<String>,

    /// First extracted timeline phrase, e.g. "30 days"
    pub timeline: Option<String>,
}

impl Default for Urgency {
    fn default() -> Self {
        Self {
            level: UrgencyLevel::Medium,
            indicators: Vec::new(),
            timeline: None,
        }
    }
}

/// Structured interpretation of a legal situation.
///
/// Created once per analysis by the classifier and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SituationRecord {
    /// Classified situation type
    #[serde(rename = "type")]
    pub situation_type: SituationType,

    /// Inferred jurisdiction
    pub jurisdiction: Jurisdiction,

    /// Extracted entities
    pub entities: EntitySet,

    /// Urgency assessment
    pub urgency: Urgency,

    /// Key factual elements pulled from the text
    pub key_facts: Vec<String>,

    /// Applicable legal frameworks for the type/jurisdiction combination
    pub legal_framework: Vec<String>,

    /// Potential legal issues or red flags
    pub potential_issues: Vec<String>,

    /// Suggested immediate actions for the situation type and urgency
    pub required_actions: Vec<String>,
}

impl SituationRecord {
    /// A neutral record for empty or unparsable input
    pub fn general() -> Self {
        Self {
            situation_type: SituationType::General,
            jurisdiction: Jurisdiction::default(),
            entities: EntitySet::default(),
            urgency: Urgency::default(),
            key_facts: Vec::new(),
            legal_framework: Vec::new(),
            potential_issues: Vec::new(),
            required_actions: Vec::new(),
        }
    }
}
