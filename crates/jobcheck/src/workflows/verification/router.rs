use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::{JobSubmission, VerificationId};
use super::repository::{RepositoryError, VerificationRepository};
use super::service::{VerificationService, VerificationServiceError};

/// Shared handler state: the service plus the simulated analysis latency.
pub struct VerificationRouteState<R> {
    pub(crate) service: Arc<VerificationService<R>>,
    pub(crate) analysis_delay: Option<Duration>,
}

impl<R> Clone for VerificationRouteState<R> {
    fn clone(&self) -> Self {
        Self {
            service: Arc::clone(&self.service),
            analysis_delay: self.analysis_delay,
        }
    }
}

impl<R> VerificationRouteState<R> {
    pub fn new(service: Arc<VerificationService<R>>, analysis_delay: Option<Duration>) -> Self {
        Self {
            service,
            analysis_delay,
        }
    }
}

/// Router builder exposing HTTP endpoints for job verification.
pub fn verification_router<R>(state: VerificationRouteState<R>) -> Router
where
    R: VerificationRepository + 'static,
{
    Router::new()
        .route("/api/v1/verifications", post(verify_handler::<R>))
        .route(
            "/api/v1/verifications/:verification_id",
            get(verification_handler::<R>),
        )
        .with_state(state)
}

pub(crate) async fn verify_handler<R>(
    State(state): State<VerificationRouteState<R>>,
    axum::Json(submission): axum::Json<JobSubmission>,
) -> Response
where
    R: VerificationRepository + 'static,
{
    if let Some(delay) = state.analysis_delay {
        tokio::time::sleep(delay).await;
    }

    match state.service.verify(submission) {
        Ok(record) => {
            let view = record.outcome_view();
            (StatusCode::CREATED, axum::Json(view)).into_response()
        }
        Err(VerificationServiceError::Submission(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(VerificationServiceError::Repository(RepositoryError::Conflict)) => {
            let payload = json!({
                "error": "verification already exists",
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            warn!(error = %other, "verification failed");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn verification_handler<R>(
    State(state): State<VerificationRouteState<R>>,
    Path(verification_id): Path<String>,
) -> Response
where
    R: VerificationRepository + 'static,
{
    let id = VerificationId(verification_id);
    match state.service.get(&id) {
        Ok(record) => {
            let view = record.outcome_view();
            (StatusCode::OK, axum::Json(view)).into_response()
        }
        Err(VerificationServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "verification_id": id.0,
                "error": "verification not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            warn!(error = %other, "verification lookup failed");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
