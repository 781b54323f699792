use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::reports::domain::{AttachmentDescriptor, ReportId, ReportSubmission};
use crate::workflows::reports::repository::{
    ModerationError, ModerationQueue, ModerationTicket, ReportRecord, ReportRepository,
    ReportSummary,
};
use crate::workflows::reports::service::ReportService;
use crate::workflows::verification::repository::RepositoryError;

pub(super) fn fee_scam_report() -> ReportSubmission {
    ReportSubmission {
        company_name: "QuickHire Tech".to_string(),
        job_link: Some("https://quickhire-jobs.xyz/apply".to_string()),
        description: "Asked for registration fees\nThey wanted Rs 1500 before the interview."
            .to_string(),
        attachments: vec![proof("payment-request.png", 180_000)],
        additional_info: Some("Recruiter used a gmail address.".to_string()),
    }
}

pub(super) fn proof(name: &str, size_bytes: u64) -> AttachmentDescriptor {
    AttachmentDescriptor {
        file_name: name.to_string(),
        size_bytes,
    }
}

pub(super) fn build_service() -> (
    ReportService<MemoryReports, RecordingQueue>,
    Arc<MemoryReports>,
    Arc<RecordingQueue>,
) {
    let repository = Arc::new(MemoryReports::default());
    let queue = Arc::new(RecordingQueue::default());
    let service = ReportService::new(repository.clone(), queue.clone());
    (service, repository, queue)
}

#[derive(Default)]
pub(super) struct MemoryReports {
    pub(super) records: Mutex<Vec<ReportRecord>>,
}

impl ReportRepository for MemoryReports {
    fn insert(&self, record: ReportRecord) -> Result<ReportRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.report_id == record.report_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn update(&self, record: ReportRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        let existing = guard
            .iter_mut()
            .find(|existing| existing.report_id == record.report_id)
            .ok_or(RepositoryError::NotFound)?;
        *existing = record;
        Ok(())
    }

    fn fetch(&self, id: &ReportId) -> Result<Option<ReportRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.iter().find(|record| &record.report_id == id).cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<ReportSummary>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .take(limit)
            .map(ReportRecord::summary)
            .collect())
    }

    fn count(&self) -> Result<u64, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.len() as u64)
    }
}

#[derive(Default)]
pub(super) struct RecordingQueue {
    pub(super) tickets: Mutex<Vec<ModerationTicket>>,
}

impl ModerationQueue for RecordingQueue {
    fn publish(&self, ticket: ModerationTicket) -> Result<(), ModerationError> {
        self.tickets
            .lock()
            .expect("queue mutex poisoned")
            .push(ticket);
        Ok(())
    }
}

pub(super) struct OfflineQueue;

impl ModerationQueue for OfflineQueue {
    fn publish(&self, _ticket: ModerationTicket) -> Result<(), ModerationError> {
        Err(ModerationError::Transport("queue offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
