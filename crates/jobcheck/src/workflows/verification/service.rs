use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use chrono::Utc;
use tracing::{debug, info};

use super::domain::{JobSubmission, VerificationId};
use super::evaluation::{ScoringConfig, ScoringEngine};
use super::guard::{SubmissionViolation, VerificationGuard};
use super::noise::NoiseSource;
use super::repository::{
    RepositoryError, VerdictTally, VerificationRecord, VerificationRepository,
    VerificationSummary,
};

/// Service composing the submission guard, scoring engine, and repository.
pub struct VerificationService<R> {
    guard: Arc<VerificationGuard>,
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
    noise: Mutex<Box<dyn NoiseSource>>,
}

static VERIFICATION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_verification_id() -> VerificationId {
    let id = VERIFICATION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    VerificationId(format!("ver-{id:06}"))
}

impl<R> VerificationService<R>
where
    R: VerificationRepository + 'static,
{
    pub fn new(repository: Arc<R>, config: ScoringConfig, noise: Box<dyn NoiseSource>) -> Self {
        Self::with_guard(VerificationGuard::default(), repository, config, noise)
    }

    pub fn with_guard(
        guard: VerificationGuard,
        repository: Arc<R>,
        config: ScoringConfig,
        noise: Box<dyn NoiseSource>,
    ) -> Self {
        Self {
            guard: Arc::new(guard),
            repository,
            engine: Arc::new(ScoringEngine::new(config)),
            noise: Mutex::new(noise),
        }
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Validate, score, and persist a submission.
    pub fn verify(
        &self,
        submission: JobSubmission,
    ) -> Result<VerificationRecord, VerificationServiceError> {
        let posting = self.guard.posting_from_submission(submission)?;

        let sheet = {
            let mut noise = self.noise.lock().unwrap_or_else(PoisonError::into_inner);
            self.engine.score(&posting, noise.as_mut())
        };
        debug!(
            company = %posting.company_name,
            checks = sheet.checks_performed,
            components = sheet.components.len(),
            "posting scored"
        );

        let record = VerificationRecord {
            verification_id: next_verification_id(),
            posting,
            sheet,
            verified_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            verification_id = %stored.verification_id.0,
            score = stored.sheet.score,
            verdict = stored.sheet.verdict.short_label(),
            "verification completed"
        );
        Ok(stored)
    }

    /// Fetch a previously completed verification.
    pub fn get(
        &self,
        verification_id: &VerificationId,
    ) -> Result<VerificationRecord, VerificationServiceError> {
        let record = self
            .repository
            .fetch(verification_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(
        &self,
        limit: usize,
    ) -> Result<Vec<VerificationSummary>, VerificationServiceError> {
        Ok(self.repository.recent(limit)?)
    }

    pub fn tally(&self) -> Result<VerdictTally, VerificationServiceError> {
        Ok(self.repository.tally()?)
    }
}

/// Error raised by the verification service.
#[derive(Debug, thiserror::Error)]
pub enum VerificationServiceError {
    #[error(transparent)]
    Submission(#[from] SubmissionViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
