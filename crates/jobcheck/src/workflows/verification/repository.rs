use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{JobPosting, VerificationId};
use super::evaluation::{
    DescriptionChecks, EmailChecks, ImageAnalysis, ModelPrediction, ScoreComponent, ScoreSheet,
    TrustVerdict, WebsiteChecks,
};

/// Repository record holding the normalized posting and its score sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationRecord {
    pub verification_id: VerificationId,
    pub posting: JobPosting,
    pub sheet: ScoreSheet,
    pub verified_at: DateTime<Utc>,
}

impl VerificationRecord {
    pub fn outcome_view(&self) -> VerificationOutcome {
        let sheet = self.sheet.clone();
        VerificationOutcome {
            verification_id: self.verification_id.clone(),
            company_name: self.posting.company_name.clone(),
            score: sheet.score,
            verdict: sheet.verdict,
            verdict_label: sheet.verdict.label(),
            advisory: sheet.verdict.advisory(),
            website_checks: sheet.website_checks,
            email_checks: sheet.email_checks,
            description_checks: sheet.description_checks,
            image_analysis: sheet.image_analysis,
            images_analyzed: sheet.images_analyzed,
            model_prediction: sheet.model_prediction,
            components: sheet.components,
            verified_at: self.verified_at,
        }
    }

    pub fn summary(&self) -> VerificationSummary {
        VerificationSummary {
            verification_id: self.verification_id.clone(),
            company_name: self.posting.company_name.clone(),
            score: self.sheet.score,
            verdict: self.sheet.verdict,
            verified_at: self.verified_at,
        }
    }
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait VerificationRepository: Send + Sync {
    fn insert(&self, record: VerificationRecord) -> Result<VerificationRecord, RepositoryError>;
    fn fetch(&self, id: &VerificationId) -> Result<Option<VerificationRecord>, RepositoryError>;
    /// Most recent records first.
    fn recent(&self, limit: usize) -> Result<Vec<VerificationSummary>, RepositoryError>;
    fn tally(&self) -> Result<VerdictTally, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

/// Verification counts per verdict band.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerdictTally {
    pub safe: u64,
    pub caution: u64,
    pub risky: u64,
}

impl VerdictTally {
    pub fn record(&mut self, verdict: TrustVerdict) {
        match verdict {
            TrustVerdict::Safe => self.safe += 1,
            TrustVerdict::Caution => self.caution += 1,
            TrustVerdict::Risky => self.risky += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.safe + self.caution + self.risky
    }
}

/// Compact listing entry for dashboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationSummary {
    pub verification_id: VerificationId,
    pub company_name: String,
    pub score: u8,
    pub verdict: TrustVerdict,
    pub verified_at: DateTime<Utc>,
}

/// Public response body for a completed verification.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationOutcome {
    pub verification_id: VerificationId,
    pub company_name: String,
    pub score: u8,
    pub verdict: TrustVerdict,
    pub verdict_label: &'static str,
    pub advisory: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website_checks: Option<WebsiteChecks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_checks: Option<EmailChecks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_checks: Option<DescriptionChecks>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_analysis: Option<ImageAnalysis>,
    pub images_analyzed: usize,
    pub model_prediction: ModelPrediction,
    pub components: Vec<ScoreComponent>,
    pub verified_at: DateTime<Utc>,
}
