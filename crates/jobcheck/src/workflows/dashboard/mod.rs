//! Dashboard read model: seeded sample figures merged with live activity.

pub mod seed;
mod summary;
pub mod views;

use chrono::{DateTime, Utc};

use crate::workflows::reports::{
    ModerationQueue, ReportRepository, ReportService, ReportServiceError,
};
use crate::workflows::verification::{
    VerificationRepository, VerificationService, VerificationServiceError,
};

pub use seed::{DashboardBaseline, SeedActivity, SeedReport, SeedVerification, SAFETY_TIPS};
pub use summary::{
    format_count, relative_age_label, RECENT_VERIFICATION_LIMIT, REPORTED_COMPANY_LIMIT,
};
pub use views::{
    ActivitySource, DashboardSummary, RecentVerificationView, ReportedCompanyView, StatCard,
    TrendDirection,
};

/// Live reports considered when grouping the "recently reported" panel.
const LIVE_REPORT_WINDOW: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error(transparent)]
    Verification(#[from] VerificationServiceError),
    #[error(transparent)]
    Reports(#[from] ReportServiceError),
}

/// Pull live activity from both services and build the summary.
pub fn collect_summary<V, R, Q>(
    verifications: &VerificationService<V>,
    reports: &ReportService<R, Q>,
    baseline: &DashboardBaseline,
    seed: &SeedActivity,
    now: DateTime<Utc>,
) -> Result<DashboardSummary, DashboardError>
where
    V: VerificationRepository + 'static,
    R: ReportRepository + 'static,
    Q: ModerationQueue + 'static,
{
    let live_verifications = verifications.recent(RECENT_VERIFICATION_LIMIT)?;
    let tally = verifications.tally()?;
    let live_reports = reports.recent(LIVE_REPORT_WINDOW)?;

    Ok(DashboardSummary::build(
        baseline,
        seed,
        verifications.engine().config(),
        &live_verifications,
        &live_reports,
        tally,
        now,
    ))
}
