use super::config::ScoringConfig;
use super::rules::ScoreSignals;
use serde::{Deserialize, Serialize};

/// Overall band a trust score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustVerdict {
    Safe,
    Caution,
    Risky,
}

impl TrustVerdict {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "Safe Job",
            Self::Caution => "Proceed with Caution",
            Self::Risky => "High Risk - Likely Fake",
        }
    }

    pub const fn short_label(self) -> &'static str {
        match self {
            Self::Safe => "Safe",
            Self::Caution => "Caution",
            Self::Risky => "Risky",
        }
    }

    pub const fn advisory(self) -> &'static str {
        match self {
            Self::Safe => "This job posting appears to be legitimate. Always verify directly with the company.",
            Self::Caution => "Some concerns were found. Proceed with caution and verify details independently.",
            Self::Risky => "Multiple red flags detected. We strongly advise against proceeding with this job.",
        }
    }
}

/// Map a score onto its verdict band using the configured thresholds.
pub fn verdict_for(score: u8, config: &ScoringConfig) -> TrustVerdict {
    if score >= config.safe_threshold {
        TrustVerdict::Safe
    } else if score >= config.caution_threshold {
        TrustVerdict::Caution
    } else {
        TrustVerdict::Risky
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckSeverity {
    Success,
    Warning,
    Danger,
}

/// Outcome of a single displayed check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    pub passed: bool,
    pub message: String,
    pub severity: CheckSeverity,
}

impl CheckResult {
    fn new(passed: bool, message: impl Into<String>, failure: CheckSeverity) -> Self {
        Self {
            passed,
            message: message.into(),
            severity: if passed {
                CheckSeverity::Success
            } else {
                failure
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebsiteChecks {
    pub is_secure: CheckResult,
    pub is_established: CheckResult,
    pub is_suspicious: CheckResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailChecks {
    pub is_free_email: CheckResult,
    pub matches_company: CheckResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DescriptionRisk {
    Low,
    Medium,
    High,
}

impl DescriptionRisk {
    pub fn from_flag_count(count: usize) -> Self {
        match count {
            0 => Self::Low,
            1 | 2 => Self::Medium,
            _ => Self::High,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescriptionChecks {
    pub flags: Vec<String>,
    pub risk_level: DescriptionRisk,
}

/// Simulated OCR pass over uploaded screenshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAnalysis {
    pub text_extracted: bool,
    pub suspicious_content: bool,
    pub confidence: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PredictionLabel {
    Safe,
    Uncertain,
    Risky,
}

impl PredictionLabel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Safe => "SAFE",
            Self::Uncertain => "UNCERTAIN",
            Self::Risky => "RISKY",
        }
    }
}

impl From<TrustVerdict> for PredictionLabel {
    fn from(verdict: TrustVerdict) -> Self {
        match verdict {
            TrustVerdict::Safe => Self::Safe,
            TrustVerdict::Caution => Self::Uncertain,
            TrustVerdict::Risky => Self::Risky,
        }
    }
}

/// Placeholder prediction. It restates the score band; no model is consulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelPrediction {
    pub confidence: u8,
    pub prediction: PredictionLabel,
}

pub(crate) fn website_checks(
    signals: &ScoreSignals,
    score: u8,
    config: &ScoringConfig,
) -> Option<WebsiteChecks> {
    let website = signals.website.as_ref()?;
    let not_suspicious = score > config.caution_threshold;

    Some(WebsiteChecks {
        is_secure: CheckResult::new(
            website.https,
            if website.https {
                "Website uses secure HTTPS connection"
            } else {
                "Website does not use secure HTTPS"
            },
            CheckSeverity::Danger,
        ),
        is_established: CheckResult::new(
            website.known_domain,
            if website.known_domain {
                "Domain is from a reputable job platform"
            } else {
                "Domain age could not be verified"
            },
            CheckSeverity::Warning,
        ),
        is_suspicious: CheckResult::new(
            not_suspicious,
            if not_suspicious {
                "No suspicious patterns detected in URL"
            } else {
                "URL contains potentially suspicious patterns"
            },
            CheckSeverity::Danger,
        ),
    })
}

pub(crate) fn email_checks(signals: &ScoreSignals) -> Option<EmailChecks> {
    let email = signals.email.as_ref()?;

    let is_free_email = if email.free_provider {
        CheckResult::new(
            false,
            format!("Using free email provider ({})", email.domain),
            CheckSeverity::Warning,
        )
    } else {
        CheckResult::new(true, "Using professional email domain", CheckSeverity::Warning)
    };

    let matches_company = CheckResult::new(
        email.matches_company,
        if email.matches_company {
            "Email domain matches company name"
        } else {
            "Email domain doesn't match company"
        },
        CheckSeverity::Warning,
    );

    Some(EmailChecks {
        is_free_email,
        matches_company,
    })
}

pub(crate) fn description_checks(signals: &ScoreSignals) -> Option<DescriptionChecks> {
    signals.description_flags.as_ref().map(|flags| DescriptionChecks {
        risk_level: DescriptionRisk::from_flag_count(flags.len()),
        flags: flags.clone(),
    })
}
