//! Remedy synthesis - lawful strategies and document templates per
//! situation type.
//!
//! [`RemedyProvider`] is the seam for external remedy sources;
//! [`TemplateRemedies`] is the built-in implementation backed by static
//! strategy and template tables.

use std::collections::HashMap;

use docket_domain::{RemedyPlan, SituationType};

use crate::error::RemedyError;

/// Source of remedy plans and generated documents.
///
/// Implementations must be deterministic for a given situation type so
/// repeated analyses of the same input produce the same report.
pub trait RemedyProvider: Send + Sync {
    /// Produce a remedy plan for the classified situation type
    fn remedy_for(&self, situation_type: SituationType) -> Result<RemedyPlan, RemedyError>;

    /// Render a named template, substituting `[NAME]` placeholders with
    /// the corresponding variable values (keys are upper-cased)
    fn generate_document(
        &self,
        template: &str,
        variables: &HashMap<String, String>,
    ) -> Result<String, RemedyError>;
}

const NOTICE_OF_LAWFUL_TRAVEL: &str = "\
NOTICE OF LAWFUL TRAVEL

To: [OFFICER]
From: [NAME], a living man/woman
Date: [DATE]

NOTICE TO AGENT IS NOTICE TO PRINCIPAL
NOTICE TO PRINCIPAL IS NOTICE TO AGENT

I hereby provide notice that I am exercising my fundamental right to \
travel upon the public roads in my private conveyance. I do not consent \
to any commercial presumptions or statutory jurisdiction over my person \
or property without proper due process and lawful authority.

Respectfully submitted,
[NAME], sui juris";

const NOTICE_OF_FEE_CHALLENGE: &str = "\
NOTICE OF FEE SCHEDULE CHALLENGE

To: [AGENCY]
From: [NAME]
Date: [DATE]

I hereby challenge the lawful authority for the demanded fee and request:

1. Proof of lawful authority to impose said fee
2. Copy of the fee schedule with proper authorization
3. Due process hearing regarding this matter

I reserve all rights and waive none.

[NAME]";

const AFFIDAVIT_OF_TRUTH: &str = "\
AFFIDAVIT OF TRUTH

State of [STATE]
County of [COUNTY]

I, [NAME], being of sound mind and lawful age, do hereby affirm under \
penalty of perjury that the following facts are true and correct:

[FACTS]

Further affiant sayeth naught.

[NAME], affiant
Date: [DATE]";

/// Built-in remedy provider backed by static strategy and template
/// tables.
#[derive(Debug, Clone, Default)]
pub struct TemplateRemedies;

impl TemplateRemedies {
    /// Create the default template-backed provider
    pub fn new() -> Self {
        Self
    }

    /// Names of every template this provider can render
    pub fn available_templates(&self) -> Vec<&'static str> {
        TEMPLATES.iter().map(|(name, _)| *name).collect()
    }
}

const TEMPLATES: &[(&str, &str)] = &[
    ("affidavit_of_truth", AFFIDAVIT_OF_TRUTH),
    ("notice_of_fee_challenge", NOTICE_OF_FEE_CHALLENGE),
    ("notice_of_lawful_travel", NOTICE_OF_LAWFUL_TRAVEL),
];

impl RemedyProvider for TemplateRemedies {
    fn remedy_for(&self, situation_type: SituationType) -> Result<RemedyPlan, RemedyError> {
        let plan = match situation_type {
            SituationType::TrafficStop => RemedyPlan {
                description: "Challenge commercial presumptions and assert the right to travel"
                    .to_string(),
                strategies: to_strings(&[
                    "Challenge commercial presumptions",
                    "Assert constitutional right to travel",
                    "Demand due process before any penalties",
                ]),
                templates: to_strings(&["notice_of_lawful_travel", "affidavit_of_truth"]),
            },
            SituationType::FeeDemand => RemedyPlan {
                description: "Challenge the lawful authority behind the demanded fee".to_string(),
                strategies: to_strings(&[
                    "Challenge authority to impose fee",
                    "Demand proof of harm or damage",
                    "Assert due process rights",
                ]),
                templates: to_strings(&["notice_of_fee_challenge"]),
            },
            SituationType::ContractDispute => RemedyPlan {
                description: "Contest contract formation and enforceability".to_string(),
                strategies: to_strings(&[
                    "Challenge contract formation",
                    "Assert lack of consideration",
                    "Claim unconscionability",
                    "Demand specific performance or damages",
                ]),
                templates: to_strings(&["affidavit_of_truth"]),
            },
            SituationType::CourtSummons => RemedyPlan {
                description: "Appear specially and put the plaintiff to proof".to_string(),
                strategies: to_strings(&[
                    "Appear specially to challenge jurisdiction",
                    "Demand proof of standing by plaintiff",
                    "Challenge service of process if defective",
                    "Assert all constitutional rights",
                ]),
                templates: to_strings(&["affidavit_of_truth"]),
            },
            SituationType::AdministrativeAction
            | SituationType::PropertyDispute
            | SituationType::General => RemedyPlan {
                description: "Examine the legal relationship and reserve all rights".to_string(),
                strategies: to_strings(&[
                    "Challenge assumptions and presumptions",
                    "Demand proof of all claims",
                    "Assert due process rights",
                    "Reserve all rights and remedies",
                ]),
                templates: to_strings(&["affidavit_of_truth"]),
            },
        };
        Ok(plan)
    }

    fn generate_document(
        &self,
        template: &str,
        variables: &HashMap<String, String>,
    ) -> Result<String, RemedyError> {
        let content = TEMPLATES
            .iter()
            .find(|(name, _)| *name == template)
            .map(|(_, content)| *content)
            .ok_or_else(|| RemedyError::UnknownTemplate(template.to_string()))?;

        // Unreplaced placeholders stay in the output so the caller can
        // see what is still missing.
        let mut document = content.to_string();
        for (name, value) in variables {
            let placeholder = format!("[{}]", name.to_uppercase());
            document = document.replace(&placeholder, value);
        }
        Ok(document)
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
