use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tracing::warn;

use super::domain::{ReportId, ReportSubmission};
use super::repository::{ModerationQueue, ReportRepository};
use super::service::{ReportService, ReportServiceError};
use crate::workflows::verification::repository::RepositoryError;

/// Router builder exposing HTTP endpoints for scam reports.
pub fn report_router<R, Q>(service: Arc<ReportService<R, Q>>) -> Router
where
    R: ReportRepository + 'static,
    Q: ModerationQueue + 'static,
{
    Router::new()
        .route("/api/v1/reports", post(submit_handler::<R, Q>))
        .route("/api/v1/reports/:report_id", get(report_handler::<R, Q>))
        .with_state(service)
}

pub(crate) async fn submit_handler<R, Q>(
    State(service): State<Arc<ReportService<R, Q>>>,
    axum::Json(submission): axum::Json<ReportSubmission>,
) -> Response
where
    R: ReportRepository + 'static,
    Q: ModerationQueue + 'static,
{
    match service.submit(submission) {
        Ok(record) => (StatusCode::ACCEPTED, axum::Json(record.receipt())).into_response(),
        Err(ReportServiceError::Intake(violation)) => {
            let payload = json!({
                "error": violation.to_string(),
            });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
        Err(other) => {
            warn!(error = %other, "report submission failed");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn report_handler<R, Q>(
    State(service): State<Arc<ReportService<R, Q>>>,
    Path(report_id): Path<String>,
) -> Response
where
    R: ReportRepository + 'static,
    Q: ModerationQueue + 'static,
{
    let id = ReportId(report_id);
    match service.get(&id) {
        Ok(record) => (StatusCode::OK, axum::Json(record.receipt())).into_response(),
        Err(ReportServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({
                "report_id": id.0,
                "error": "report not found",
            });
            (StatusCode::NOT_FOUND, axum::Json(payload)).into_response()
        }
        Err(other) => {
            warn!(error = %other, "report lookup failed");
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}
