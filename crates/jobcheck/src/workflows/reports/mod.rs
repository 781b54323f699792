//! Scam report intake and moderation hand-off.

pub mod domain;
pub mod intake;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    Attachment, AttachmentDescriptor, ReportId, ReportStatus, ReportSubmission, ScamReport,
};
pub use intake::{IntakePolicy, IntakeViolation, ReportIntakeGuard};
pub use repository::{
    ModerationError, ModerationQueue, ModerationTicket, ReportReceipt, ReportRecord,
    ReportRepository, ReportSummary, ACKNOWLEDGEMENT,
};
pub use router::report_router;
pub use service::{ReportService, ReportServiceError};
