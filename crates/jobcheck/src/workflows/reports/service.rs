use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};

use super::domain::{ReportId, ReportStatus, ReportSubmission};
use super::intake::{IntakeViolation, ReportIntakeGuard};
use super::repository::{
    ModerationQueue, ModerationTicket, ReportRecord, ReportRepository, ReportSummary,
};
use crate::workflows::verification::repository::RepositoryError;

/// Service composing the intake guard, report storage, and the moderation hook.
pub struct ReportService<R, Q> {
    guard: Arc<ReportIntakeGuard>,
    repository: Arc<R>,
    queue: Arc<Q>,
}

static REPORT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_report_id() -> ReportId {
    let id = REPORT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ReportId(format!("rep-{id:06}"))
}

impl<R, Q> ReportService<R, Q>
where
    R: ReportRepository + 'static,
    Q: ModerationQueue + 'static,
{
    pub fn new(repository: Arc<R>, queue: Arc<Q>) -> Self {
        Self::with_guard(ReportIntakeGuard::default(), repository, queue)
    }

    pub fn with_guard(guard: ReportIntakeGuard, repository: Arc<R>, queue: Arc<Q>) -> Self {
        Self {
            guard: Arc::new(guard),
            repository,
            queue,
        }
    }

    /// File a report and hand it to moderation.
    ///
    /// A moderation outage does not fail the submission; the report stays
    /// `received` so it can be picked up later.
    pub fn submit(
        &self,
        submission: ReportSubmission,
    ) -> Result<ReportRecord, ReportServiceError> {
        let report = self.guard.report_from_submission(submission)?;
        let record = ReportRecord {
            report_id: next_report_id(),
            report,
            status: ReportStatus::Received,
            submitted_at: Utc::now(),
        };

        let mut stored = self.repository.insert(record)?;

        match self.queue.publish(ModerationTicket::from(&stored)) {
            Ok(()) => {
                stored.status = ReportStatus::UnderReview;
                self.repository.update(stored.clone())?;
            }
            Err(err) => {
                warn!(report_id = %stored.report_id.0, error = %err, "moderation hand-off failed");
            }
        }

        info!(
            report_id = %stored.report_id.0,
            company = %stored.report.company_name,
            attachments = stored.report.attachments.len(),
            status = stored.status.label(),
            "scam report filed"
        );
        Ok(stored)
    }

    pub fn get(&self, report_id: &ReportId) -> Result<ReportRecord, ReportServiceError> {
        let record = self
            .repository
            .fetch(report_id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn recent(&self, limit: usize) -> Result<Vec<ReportSummary>, ReportServiceError> {
        Ok(self.repository.recent(limit)?)
    }

    pub fn count(&self) -> Result<u64, ReportServiceError> {
        Ok(self.repository.count()?)
    }
}

/// Error raised by the report service.
#[derive(Debug, thiserror::Error)]
pub enum ReportServiceError {
    #[error(transparent)]
    Intake(#[from] IntakeViolation),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
