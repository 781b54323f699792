use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::verification::domain::{
    EvidenceImage, JobPosting, JobSubmission, VerificationId,
};
use crate::workflows::verification::guard::VerificationGuard;
use crate::workflows::verification::noise::FixedNoise;
use crate::workflows::verification::repository::{
    RepositoryError, VerdictTally, VerificationRecord, VerificationRepository,
    VerificationSummary,
};
use crate::workflows::verification::{
    verification_router, ScoringConfig, VerificationRouteState, VerificationService,
};

pub(super) fn legit_submission() -> JobSubmission {
    JobSubmission {
        company_name: "Infosys".to_string(),
        job_link: Some("https://www.linkedin.com/jobs/view/3812345".to_string()),
        recruiter_email: Some("campus.hiring@infosys.com".to_string()),
        job_description: Some(
            "Graduate engineer trainee. Structured interview process with two technical rounds."
                .to_string(),
        ),
        images: Vec::new(),
    }
}

pub(super) fn scam_submission() -> JobSubmission {
    JobSubmission {
        company_name: "QuickHire Tech".to_string(),
        job_link: Some("http://quickhire-jobs.xyz/apply".to_string()),
        recruiter_email: Some("quickhire.hr@gmail.com".to_string()),
        job_description: Some(
            "IMMEDIATE HIRING! Pay fees of Rs 2000 as registration fee to confirm your slot."
                .to_string(),
        ),
        images: Vec::new(),
    }
}

pub(super) fn company_only(name: &str) -> JobSubmission {
    JobSubmission {
        company_name: name.to_string(),
        ..JobSubmission::default()
    }
}

pub(super) fn screenshot() -> EvidenceImage {
    EvidenceImage {
        file_name: "offer-letter.png".to_string(),
        size_bytes: 240_000,
    }
}

pub(super) fn posting(submission: JobSubmission) -> JobPosting {
    VerificationGuard::default()
        .posting_from_submission(submission)
        .expect("fixture submission is valid")
}

pub(super) fn build_service() -> (VerificationService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    let service = VerificationService::new(
        repository.clone(),
        ScoringConfig::default(),
        Box::new(FixedNoise::neutral()),
    );
    (service, repository)
}

pub(super) fn router_with_service(service: VerificationService<MemoryRepository>) -> axum::Router {
    verification_router(VerificationRouteState::new(Arc::new(service), None))
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<Vec<VerificationRecord>>>,
}

impl VerificationRepository for MemoryRepository {
    fn insert(&self, record: VerificationRecord) -> Result<VerificationRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard
            .iter()
            .any(|existing| existing.verification_id == record.verification_id)
        {
            return Err(RepositoryError::Conflict);
        }
        guard.push(record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &VerificationId) -> Result<Option<VerificationRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .find(|record| &record.verification_id == id)
            .cloned())
    }

    fn recent(&self, limit: usize) -> Result<Vec<VerificationSummary>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard
            .iter()
            .rev()
            .take(limit)
            .map(VerificationRecord::summary)
            .collect())
    }

    fn tally(&self) -> Result<VerdictTally, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut tally = VerdictTally::default();
        for record in guard.iter() {
            tally.record(record.sheet.verdict);
        }
        Ok(tally)
    }
}

pub(super) struct ConflictRepository;

impl VerificationRepository for ConflictRepository {
    fn insert(&self, _record: VerificationRecord) -> Result<VerificationRecord, RepositoryError> {
        Err(RepositoryError::Conflict)
    }

    fn fetch(&self, _id: &VerificationId) -> Result<Option<VerificationRecord>, RepositoryError> {
        Ok(None)
    }

    fn recent(&self, _limit: usize) -> Result<Vec<VerificationSummary>, RepositoryError> {
        Ok(Vec::new())
    }

    fn tally(&self) -> Result<VerdictTally, RepositoryError> {
        Ok(VerdictTally::default())
    }
}

pub(super) struct UnavailableRepository;

impl VerificationRepository for UnavailableRepository {
    fn insert(&self, _record: VerificationRecord) -> Result<VerificationRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &VerificationId) -> Result<Option<VerificationRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn recent(&self, _limit: usize) -> Result<Vec<VerificationSummary>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn tally(&self) -> Result<VerdictTally, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
