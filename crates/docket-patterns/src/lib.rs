//! Docket Pattern Library
//!
//! Immutable registries of keyword, phrase, and regex pattern sets used by
//! every scoring stage. Each registry is a declarative table of
//! `category -> (patterns, weight)` iterated in a fixed lexicographic order
//! so that classification tie-breaks are deterministic.
//!
//! The library is constructed once and passed by reference into each
//! analysis component; there is no process-wide singleton.
//!
//! # Examples
//!
//! ```
//! use docket_patterns::PatternLibrary;
//!
//! let library = PatternLibrary::new().expect("built-in patterns are valid");
//! assert!(!library.situations().is_empty());
//! ```

#![warn(missing_docs)]

mod contradiction;
mod error;
mod language;
mod matching;
mod situation;

pub use contradiction::{AntagonisticPair, OppositeTerms};
pub use error::PatternError;
pub use language::{LanguageCategory, RemedyPatterns};
pub use matching::{contains_term, contains_term_affirmed, count_term};
pub use situation::{JurisdictionPattern, SituationPattern, UrgencyPatterns};

/// The full set of pattern registries used by the analysis stages.
///
/// Regex categories are compiled at construction; an invalid or empty
/// built-in table is a configuration defect and fails construction.
#[derive(Debug)]
pub struct PatternLibrary {
    situations: Vec<SituationPattern>,
    jurisdictions: Vec<JurisdictionPattern>,
    urgency: UrgencyPatterns,
    servile: Vec<LanguageCategory>,
    sovereign: Vec<LanguageCategory>,
    remedy: RemedyPatterns,
    self_determination: LanguageCategory,
    non_consent: LanguageCategory,
    antagonistic_pairs: Vec<AntagonisticPair>,
    opposite_terms: Vec<OppositeTerms>,
}

impl PatternLibrary {
    /// Build the library from the built-in pattern tables
    pub fn new() -> Result<Self, PatternError> {
        let library = Self {
            situations: situation::situation_patterns(),
            jurisdictions: situation::jurisdiction_patterns(),
            urgency: situation::urgency_patterns()?,
            servile: language::servile_categories()?,
            sovereign: language::sovereign_categories()?,
            remedy: language::remedy_patterns()?,
            self_determination: language::self_determination_category()?,
            non_consent: language::non_consent_category()?,
            antagonistic_pairs: contradiction::antagonistic_pairs(),
            opposite_terms: contradiction::opposite_terms(),
        };
        library.validate()?;
        Ok(library)
    }

    fn validate(&self) -> Result<(), PatternError> {
        if self.situations.is_empty() {
            return Err(PatternError::EmptyTable("situations"));
        }
        if self.jurisdictions.is_empty() {
            return Err(PatternError::EmptyTable("jurisdictions"));
        }
        if self.servile.is_empty() || self.sovereign.is_empty() {
            return Err(PatternError::EmptyTable("language categories"));
        }
        if self.antagonistic_pairs.is_empty() || self.opposite_terms.is_empty() {
            return Err(PatternError::EmptyTable("contradiction tables"));
        }
        for pattern in &self.situations {
            if pattern.keywords.is_empty() && pattern.phrases.is_empty() {
                return Err(PatternError::EmptyCategory(pattern.category.as_str()));
            }
        }
        Ok(())
    }

    /// Situation-type categories, in lexicographic category order
    pub fn situations(&self) -> &[SituationPattern] {
        &self.situations
    }

    /// Jurisdiction indicator buckets, in lexicographic bucket order
    pub fn jurisdictions(&self) -> &[JurisdictionPattern] {
        &self.jurisdictions
    }

    /// Urgency keyword buckets
    pub fn urgency(&self) -> &UrgencyPatterns {
        &self.urgency
    }

    /// Servile language categories with severity weights
    pub fn servile(&self) -> &[LanguageCategory] {
        &self.servile
    }

    /// Sovereign language categories with strength weights
    pub fn sovereign(&self) -> &[LanguageCategory] {
        &self.sovereign
    }

    /// Lawful/unlawful remedy pattern sets
    pub fn remedy(&self) -> &RemedyPatterns {
        &self.remedy
    }

    /// Self-determination language category
    pub fn self_determination(&self) -> &LanguageCategory {
        &self.self_determination
    }

    /// Non-consent language category
    pub fn non_consent(&self) -> &LanguageCategory {
        &self.non_consent
    }

    /// The servile dependency-language category, used as the autonomy
    /// denominator
    pub fn dependency_language(&self) -> Option<&LanguageCategory> {
        self.servile.iter().find(|c| c.name == "dependency_language")
    }

    /// Term pairs that conflict within a single clause
    pub fn antagonistic_pairs(&self) -> &[AntagonisticPair] {
        &self.antagonistic_pairs
    }

    /// Positive/negative term sets tested across clause pairs
    pub fn opposite_terms(&self) -> &[OppositeTerms] {
        &self.opposite_terms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_builds() {
        let library = PatternLibrary::new().unwrap();
        assert_eq!(library.situations().len(), 6);
        assert_eq!(library.jurisdictions().len(), 4);
        assert_eq!(library.servile().len(), 4);
        assert_eq!(library.sovereign().len(), 5);
    }

    #[test]
    fn test_situation_categories_are_sorted() {
        let library = PatternLibrary::new().unwrap();
        let names: Vec<&str> = library
            .situations()
            .iter()
            .map(|p| p.category.as_str())
            .collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted, "tie-break order must be lexicographic");
    }

    #[test]
    fn test_jurisdiction_buckets_are_sorted() {
        let library = PatternLibrary::new().unwrap();
        let names: Vec<&str> = library
            .jurisdictions()
            .iter()
            .map(|p| p.kind.as_str())
            .collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }

    #[test]
    fn test_dependency_language_category_exists() {
        let library = PatternLibrary::new().unwrap();
        assert!(library.dependency_language().is_some());
    }
}
