use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

use crate::workflows::verification::noise::FixedNoise;
use crate::workflows::verification::router::{verification_handler, verify_handler};
use crate::workflows::verification::{ScoringConfig, VerificationRouteState, VerificationService};

fn post_verification(body: &Value) -> axum::http::Request<axum::body::Body> {
    axum::http::Request::post("/api/v1/verifications")
        .header(axum::http::header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(body).expect("serializable"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn verify_route_returns_created_outcome() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let body = serde_json::to_value(legit_submission()).expect("serializable");
    let response = router
        .oneshot(post_verification(&body))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("score").and_then(Value::as_u64), Some(90));
    assert_eq!(payload.get("verdict").and_then(Value::as_str), Some("safe"));
    assert_eq!(
        payload.get("verdict_label").and_then(Value::as_str),
        Some("Safe Job")
    );
    assert!(payload.get("website_checks").is_some());
    assert!(payload.get("image_analysis").is_none());
}

#[tokio::test]
async fn verify_route_accepts_minimal_payloads() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(post_verification(
            &serde_json::json!({ "company_name": "FastHire Solutions" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::CREATED);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("verdict").and_then(Value::as_str), Some("caution"));
    assert!(payload.get("email_checks").is_none());
}

#[tokio::test]
async fn verify_handler_returns_unprocessable_for_violations() {
    let (service, _) = build_service();
    let state = VerificationRouteState::new(Arc::new(service), None);

    let response = verify_handler::<MemoryRepository>(
        State(state),
        axum::Json(company_only("")),
    )
    .await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("error").and_then(Value::as_str),
        Some("company name is required")
    );
}

#[tokio::test]
async fn verify_handler_maps_repository_failures() {
    let conflict = VerificationRouteState::new(
        Arc::new(VerificationService::new(
            Arc::new(ConflictRepository),
            ScoringConfig::default(),
            Box::new(FixedNoise::neutral()),
        )),
        None,
    );
    let response =
        verify_handler::<ConflictRepository>(State(conflict), axum::Json(legit_submission()))
            .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let offline = VerificationRouteState::new(
        Arc::new(VerificationService::new(
            Arc::new(UnavailableRepository),
            ScoringConfig::default(),
            Box::new(FixedNoise::neutral()),
        )),
        None,
    );
    let response =
        verify_handler::<UnavailableRepository>(State(offline), axum::Json(legit_submission()))
            .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn verification_handler_returns_stored_outcome() {
    let (service, _) = build_service();
    let service = Arc::new(service);
    let record = service.verify(scam_submission()).expect("verification succeeds");

    let response = verification_handler::<MemoryRepository>(
        State(VerificationRouteState::new(service, None)),
        axum::extract::Path(record.verification_id.0.clone()),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(
        payload.get("verification_id").and_then(Value::as_str),
        Some(record.verification_id.0.as_str())
    );
    assert_eq!(payload.get("verdict").and_then(Value::as_str), Some("risky"));
    let flags = payload
        .pointer("/description_checks/flags")
        .and_then(Value::as_array)
        .expect("flags listed");
    assert_eq!(flags.len(), 3);
}

#[tokio::test]
async fn verification_route_returns_not_found_for_unknown_ids() {
    let (service, _) = build_service();
    let router = router_with_service(service);

    let response = router
        .oneshot(
            axum::http::Request::get("/api/v1/verifications/ver-missing")
                .body(axum::body::Body::empty())
                .expect("request builds"),
        )
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn verify_handler_waits_for_configured_analysis_delay() {
    let (service, _) = build_service();
    let state = VerificationRouteState::new(Arc::new(service), Some(Duration::from_millis(25)));

    let started = std::time::Instant::now();
    let response =
        verify_handler::<MemoryRepository>(State(state), axum::Json(legit_submission())).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    assert!(started.elapsed() >= Duration::from_millis(25));
}
