use serde::{Deserialize, Serialize};

/// Rubric configuration describing the trust-score weights and word lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub base_score: i16,
    pub https_bonus: i16,
    pub known_domain_bonus: i16,
    pub free_email_penalty: i16,
    pub company_match_bonus: i16,
    pub suspicious_phrase_penalty: i16,
    pub image_evidence_bonus: i16,
    pub suspicious_image_penalty: i16,
    /// Fewer checks than this forces the score into `limited_evidence_range`.
    pub minimum_checks_for_full_range: usize,
    pub limited_evidence_range: (i16, i16),
    /// Jitter is drawn from `[jitter_low, jitter_low + jitter_span)`.
    pub jitter_low: i16,
    pub jitter_span: u16,
    pub safe_threshold: u8,
    pub caution_threshold: u8,
    pub suspicious_image_probability: f64,
    pub suspicious_phrases: Vec<String>,
    pub free_email_providers: Vec<String>,
    pub known_job_boards: Vec<String>,
    pub trusted_domain_suffixes: Vec<String>,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 50,
            https_bonus: 10,
            known_domain_bonus: 15,
            free_email_penalty: 15,
            company_match_bonus: 15,
            suspicious_phrase_penalty: 10,
            image_evidence_bonus: 5,
            suspicious_image_penalty: 20,
            minimum_checks_for_full_range: 2,
            limited_evidence_range: (30, 70),
            jitter_low: -5,
            jitter_span: 10,
            safe_threshold: 70,
            caution_threshold: 40,
            suspicious_image_probability: 0.3,
            suspicious_phrases: strings(&[
                "pay fees",
                "limited seats",
                "urgent joining",
                "immediate hiring",
                "100% placement",
                "no experience required",
                "work from home guaranteed",
                "registration fee",
                "security deposit",
            ]),
            free_email_providers: strings(&[
                "gmail.com",
                "yahoo.com",
                "hotmail.com",
                "outlook.com",
                "protonmail.com",
            ]),
            known_job_boards: strings(&[
                "linkedin.com",
                "indeed.com",
                "naukri.com",
                "glassdoor.com",
            ]),
            trusted_domain_suffixes: strings(&[".gov.in", ".edu"]),
        }
    }
}

impl ScoringConfig {
    /// Same rubric without jitter, so identical postings always score identically.
    pub fn without_jitter() -> Self {
        Self {
            jitter_low: 0,
            jitter_span: 0,
            ..Self::default()
        }
    }
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
