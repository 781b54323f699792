//! Describes the verification pipeline and each check it runs.

use serde::Serialize;

use crate::workflows::verification::ScoringConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProcessStep {
    pub order: u8,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckGroup {
    Website,
    Email,
    Description,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckDescriptor {
    pub key: &'static str,
    pub title: &'static str,
    pub group: CheckGroup,
    pub description: &'static str,
    /// How the check moves the trust score under the active rubric.
    pub score_effect: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CheckCatalog {
    pub steps: Vec<ProcessStep>,
    pub checks: Vec<CheckDescriptor>,
}

const STEPS: [(&str, &str); 6] = [
    (
        "Submit Job Details",
        "Enter the company name, job/internship link, recruiter email, and paste the job description.",
    ),
    (
        "Website Analysis",
        "We check if the website is secure (HTTPS), verify domain age, and scan for suspicious patterns.",
    ),
    (
        "Email Verification",
        "We detect if the recruiter uses free email providers and verify if the email matches the company.",
    ),
    (
        "Description Scan",
        "The job description is scanned for red flags like 'pay fees', 'urgent joining', etc.",
    ),
    (
        "Model Prediction",
        "A prediction band is derived from the combined checks.",
    ),
    (
        "Trust Score",
        "Receive a 0-100 score with detailed breakdown of all verification checks.",
    ),
];

impl CheckCatalog {
    pub fn from_config(config: &ScoringConfig) -> Self {
        let steps = STEPS
            .iter()
            .zip(1u8..)
            .map(|(&(title, description), order)| ProcessStep {
                order,
                title,
                description,
            })
            .collect();

        let checks = vec![
            CheckDescriptor {
                key: "ssl_security",
                title: "SSL Security",
                group: CheckGroup::Website,
                description: "Checks if the job posting URL uses secure HTTPS protocol",
                score_effect: format!("{:+} when the link uses HTTPS", config.https_bonus),
            },
            CheckDescriptor {
                key: "domain_age",
                title: "Domain Age",
                group: CheckGroup::Website,
                description: "Verifies how old the website domain is - newer domains are riskier",
                score_effect: format!(
                    "{:+} for established job boards and official domains",
                    config.known_domain_bonus
                ),
            },
            CheckDescriptor {
                key: "suspicious_patterns",
                title: "Suspicious Patterns",
                group: CheckGroup::Website,
                description: "Scans URL for known scam patterns and blacklisted domains",
                score_effect: format!(
                    "flagged when the final score is {} or lower",
                    config.caution_threshold
                ),
            },
            CheckDescriptor {
                key: "email_provider",
                title: "Email Provider Check",
                group: CheckGroup::Email,
                description:
                    "Detects if recruiter uses free email like Gmail instead of company email",
                score_effect: format!(
                    "{:+} for free providers ({})",
                    -config.free_email_penalty,
                    config.free_email_providers.join(", ")
                ),
            },
            CheckDescriptor {
                key: "company_match",
                title: "Company Match",
                group: CheckGroup::Email,
                description: "Verifies if the email domain matches the company name",
                score_effect: format!(
                    "{:+} when the domain matches the company",
                    config.company_match_bonus
                ),
            },
            CheckDescriptor {
                key: "red_flags",
                title: "Red Flag Detection",
                group: CheckGroup::Description,
                description:
                    "Scans for phrases like 'pay fees', 'limited seats', 'guaranteed placement'",
                score_effect: format!(
                    "{:+} per phrase found ({} phrases tracked)",
                    -config.suspicious_phrase_penalty,
                    config.suspicious_phrases.len()
                ),
            },
        ];

        Self { steps, checks }
    }
}

impl Default for CheckCatalog {
    fn default() -> Self {
        Self::from_config(&ScoringConfig::default())
    }
}
