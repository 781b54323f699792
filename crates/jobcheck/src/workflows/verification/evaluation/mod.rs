mod config;
mod policy;
pub(crate) mod rules;

pub use config::ScoringConfig;
pub use policy::{
    verdict_for, CheckResult, CheckSeverity, DescriptionChecks, DescriptionRisk, EmailChecks,
    ImageAnalysis, ModelPrediction, PredictionLabel, TrustVerdict, WebsiteChecks,
};

use super::domain::JobPosting;
use super::noise::NoiseSource;
use serde::{Deserialize, Serialize};

/// Stateless evaluator that applies the rubric configuration to a posting.
#[derive(Debug, Clone, Default)]
pub struct ScoringEngine {
    config: ScoringConfig,
}

impl ScoringEngine {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    /// Score a posting. All randomness is drawn from `noise`, so a fixed
    /// source makes this a pure function of the posting.
    pub fn score(&self, posting: &JobPosting, noise: &mut dyn NoiseSource) -> ScoreSheet {
        let (components, score, signals) = rules::score_posting(posting, &self.config, noise);
        let verdict = verdict_for(score, &self.config);

        let model_prediction = ModelPrediction {
            confidence: noise.next_in(75, 20) as u8,
            prediction: PredictionLabel::from(verdict),
        };

        ScoreSheet {
            score,
            verdict,
            website_checks: policy::website_checks(&signals, score, &self.config),
            email_checks: policy::email_checks(&signals),
            description_checks: policy::description_checks(&signals),
            image_analysis: signals.image_analysis,
            images_analyzed: posting.images.len(),
            checks_performed: signals.checks_performed,
            model_prediction,
            components,
        }
    }
}

/// Inputs that moved the score, kept for transparent audits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrustSignal {
    SecureConnection,
    KnownDomain,
    FreeEmailProvider,
    CompanyEmailMatch,
    SuspiciousPhrases,
    ImageEvidence,
    SuspiciousImage,
    LimitedEvidence,
    Jitter,
    ScoreBounds,
}

/// Discrete contribution to a trust score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub signal: TrustSignal,
    pub delta: i16,
    pub notes: String,
}

/// Evaluation output: the score, its band, and every check shown to the user.
///
/// Check groups are `None` when the matching input was not supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreSheet {
    pub score: u8,
    pub verdict: TrustVerdict,
    pub website_checks: Option<WebsiteChecks>,
    pub email_checks: Option<EmailChecks>,
    pub description_checks: Option<DescriptionChecks>,
    pub image_analysis: Option<ImageAnalysis>,
    pub images_analyzed: usize,
    pub checks_performed: usize,
    pub model_prediction: ModelPrediction,
    pub components: Vec<ScoreComponent>,
}
