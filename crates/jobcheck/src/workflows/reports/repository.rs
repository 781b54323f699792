use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{ReportId, ReportStatus, ScamReport};
use crate::workflows::verification::repository::RepositoryError;

pub const ACKNOWLEDGEMENT: &str = "Our team will review your report within 24-48 hours.";

/// Repository record for a filed report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRecord {
    pub report_id: ReportId,
    pub report: ScamReport,
    pub status: ReportStatus,
    pub submitted_at: DateTime<Utc>,
}

impl ReportRecord {
    pub fn receipt(&self) -> ReportReceipt {
        ReportReceipt {
            report_id: self.report_id.clone(),
            company_name: self.report.company_name.clone(),
            status: self.status,
            status_label: self.status.label(),
            acknowledgement: ACKNOWLEDGEMENT,
            attachments: self.report.attachments.len(),
            submitted_at: self.submitted_at,
        }
    }

    pub fn summary(&self) -> ReportSummary {
        ReportSummary {
            report_id: self.report_id.clone(),
            company_name: self.report.company_name.clone(),
            company_key: self.report.company_key.clone(),
            reason: self.report.reason(),
            submitted_at: self.submitted_at,
        }
    }
}

pub trait ReportRepository: Send + Sync {
    fn insert(&self, record: ReportRecord) -> Result<ReportRecord, RepositoryError>;
    fn update(&self, record: ReportRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError>;
    /// Most recent reports first.
    fn recent(&self, limit: usize) -> Result<Vec<ReportSummary>, RepositoryError>;
    fn count(&self) -> Result<u64, RepositoryError>;
}

/// Outbound hook handing reports to human moderators.
pub trait ModerationQueue: Send + Sync {
    fn publish(&self, ticket: ModerationTicket) -> Result<(), ModerationError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModerationTicket {
    pub report_id: ReportId,
    pub company_name: String,
    pub company_key: String,
    pub reason: String,
    pub job_link: Option<String>,
    pub attachment_count: usize,
    pub submitted_at: DateTime<Utc>,
}

impl From<&ReportRecord> for ModerationTicket {
    fn from(record: &ReportRecord) -> Self {
        Self {
            report_id: record.report_id.clone(),
            company_name: record.report.company_name.clone(),
            company_key: record.report.company_key.clone(),
            reason: record.report.reason(),
            job_link: record.report.job_link.clone(),
            attachment_count: record.report.attachments.len(),
            submitted_at: record.submitted_at,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ModerationError {
    #[error("moderation queue unavailable: {0}")]
    Transport(String),
}

/// Response body acknowledging a filed report.
#[derive(Debug, Clone, Serialize)]
pub struct ReportReceipt {
    pub report_id: ReportId,
    pub company_name: String,
    pub status: ReportStatus,
    pub status_label: &'static str,
    pub acknowledgement: &'static str,
    pub attachments: usize,
    pub submitted_at: DateTime<Utc>,
}

/// Compact listing entry feeding the "recently reported" panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    pub report_id: ReportId,
    pub company_name: String,
    pub company_key: String,
    pub reason: String,
    pub submitted_at: DateTime<Utc>,
}
