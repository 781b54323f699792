//! End-to-end checks for job verification through the public service facade and router.

mod common {
    use std::sync::{Arc, Mutex};

    use jobcheck::workflows::verification::{
        FixedNoise, JobSubmission, NoiseSource, RepositoryError, ScoringConfig, VerdictTally,
        VerificationId, VerificationRecord, VerificationRepository, VerificationService,
        VerificationSummary,
    };

    #[derive(Default)]
    pub(super) struct InMemoryVerifications {
        records: Mutex<Vec<VerificationRecord>>,
    }

    impl VerificationRepository for InMemoryVerifications {
        fn insert(
            &self,
            record: VerificationRecord,
        ) -> Result<VerificationRecord, RepositoryError> {
            let mut guard = self.records.lock().expect("repository mutex poisoned");
            guard.push(record.clone());
            Ok(record)
        }

        fn fetch(
            &self,
            id: &VerificationId,
        ) -> Result<Option<VerificationRecord>, RepositoryError> {
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

    pub(super) fn service_with(
        noise: Box<dyn NoiseSource>,
    ) -> Arc<VerificationService<InMemoryVerifications>> {
        Arc::new(VerificationService::new(
            Arc::new(InMemoryVerifications::default()),
            ScoringConfig::default(),
            noise,
        ))
    }

    pub(super) fn neutral_service() -> Arc<VerificationService<InMemoryVerifications>> {
        service_with(Box::new(FixedNoise::neutral()))
    }

    pub(super) fn campus_drive() -> JobSubmission {
        JobSubmission {
            company_name: "Tata Consultancy Services".to_string(),
            job_link: Some("https://in.indeed.com/viewjob?jk=4411".to_string()),
            recruiter_email: Some("talent@tcs.com".to_string()),
            job_description: Some(
                "Assistant system engineer, campus hiring 2025 batch. Aptitude test then interview."
                    .to_string(),
            ),
            images: Vec::new(),
        }
    }

    pub(super) fn deposit_scam() -> JobSubmission {
        JobSubmission {
            company_name: "Dream Jobs Inc".to_string(),
            job_link: Some("http://dream-jobs-offer.in/apply".to_string()),
            recruiter_email: Some("dreamjobs.hr@yahoo.com".to_string()),
            job_description: Some(
                "Work from home guaranteed! Limited seats. Pay a security deposit to block your seat."
                    .to_string(),
            ),
            images: Vec::new(),
        }
    }
}

use axum::http::StatusCode;
use common::*;
use jobcheck::workflows::verification::{
    verification_router, SeededNoise, SubmissionViolation, TrustSignal, TrustVerdict,
    VerificationRouteState, VerificationServiceError,
};
use tower::ServiceExt;

#[test]
fn campus_posting_on_a_known_board_is_safe() {
    let service = neutral_service();
    let record = service.verify(campus_drive()).expect("verification succeeds");

    // Indeed subdomain (+10 https, +15 known), no company match ("tcs" vs slug), clean text.
    assert_eq!(record.sheet.score, 75);
    assert_eq!(record.sheet.verdict, TrustVerdict::Safe);
    assert!(record
        .sheet
        .components
        .iter()
        .any(|component| component.signal == TrustSignal::KnownDomain));

    let email = record.sheet.email_checks.expect("email checked");
    assert!(email.is_free_email.passed);
    assert!(!email.matches_company.passed);
}

#[test]
fn deposit_scam_is_flagged_as_high_risk() {
    let service = neutral_service();
    let record = service.verify(deposit_scam()).expect("verification succeeds");

    assert_eq!(record.sheet.verdict, TrustVerdict::Risky);
    let description = record.sheet.description_checks.expect("description scanned");
    assert_eq!(
        description.flags,
        vec![
            "limited seats",
            "work from home guaranteed",
            "security deposit"
        ]
    );
    assert_eq!(record.sheet.score, 5);
}

#[test]
fn seeded_services_reproduce_scores() {
    let first = service_with(Box::new(SeededNoise::new(2024)));
    let second = service_with(Box::new(SeededNoise::new(2024)));

    for submission in [campus_drive(), deposit_scam()] {
        let left = first.verify(submission.clone()).expect("first run");
        let right = second.verify(submission).expect("second run");
        assert_eq!(left.sheet.score, right.sheet.score);
        assert_eq!(left.sheet.model_prediction, right.sheet.model_prediction);
    }
}

#[test]
fn submissions_without_company_are_rejected() {
    let service = neutral_service();
    let mut submission = campus_drive();
    submission.company_name = String::new();

    assert!(matches!(
        service.verify(submission),
        Err(VerificationServiceError::Submission(
            SubmissionViolation::MissingCompanyName
        ))
    ));
}

#[tokio::test]
async fn router_round_trip_returns_stored_outcome() {
    let service = neutral_service();
    let router = verification_router(VerificationRouteState::new(service.clone(), None));

    let response = router
        .clone()
        .oneshot(
            axum::http::Request::post("/api/v1/verifications")
                .header(axum::http::header::CONTENT_TYPE, "application/json")
                .body(axum::body::Body::from(
                    serde_json::to_vec(&campus_drive()).expect("serializable"),
                ))
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("body readable");
    let payload: serde_json::Value = serde_json::from_slice(&body).expect("json body");
    let id = payload
        .get("verification_id")
        .and_then(serde_json::Value::as_str)
        .expect("id returned")
        .to_string();

    let lookup = router
        .oneshot(
            axum::http::Request::get(format!("/api/v1/verifications/{id}"))
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");
    assert_eq!(lookup.status(), StatusCode::OK);
    assert_eq!(service.tally().expect("tally").safe, 1);
}
