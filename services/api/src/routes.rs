use crate::infra::{AppServices, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::Utc;
use jobcheck::error::AppError;
use jobcheck::workflows::catalog::CheckCatalog;
use jobcheck::workflows::dashboard::{
    collect_summary, DashboardBaseline, DashboardSummary, SeedActivity,
};
use jobcheck::workflows::reports::report_router;
use jobcheck::workflows::verification::{verification_router, VerificationRouteState};
use serde_json::json;
use std::time::Duration;

/// Workflow routers merged with the operational and read-model endpoints.
///
/// Handlers read `AppState` and `AppServices` from request extensions, so the
/// caller layers both onto the returned router.
pub(crate) fn with_workflow_routes(
    services: &AppServices,
    analysis_delay: Option<Duration>,
) -> axum::Router {
    let verification_state =
        VerificationRouteState::new(services.verifications.clone(), analysis_delay);

    verification_router(verification_state)
        .merge(report_router(services.reports.clone()))
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route("/api/v1/dashboard", axum::routing::get(dashboard_endpoint))
        .route("/api/v1/checks", axum::routing::get(checks_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn dashboard_endpoint(
    Extension(services): Extension<AppServices>,
) -> Result<Json<DashboardSummary>, AppError> {
    let summary = collect_summary(
        services.verifications.as_ref(),
        services.reports.as_ref(),
        &DashboardBaseline::default(),
        &SeedActivity::default(),
        Utc::now(),
    )?;
    Ok(Json(summary))
}

pub(crate) async fn checks_endpoint() -> Json<CheckCatalog> {
    Json(CheckCatalog::default())
}
