use crate::cli::ServeArgs;
use crate::infra::{AppServices, AppState};
use crate::routes::with_workflow_routes;
use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use jobcheck::config::AppConfig;
use jobcheck::error::AppError;
use jobcheck::telemetry;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use tracing::info;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let services = AppServices::in_memory(config.scoring.seed);
    let app = with_workflow_routes(&services, config.scoring.analysis_delay())
        .layer(Extension(services))
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        seeded = config.scoring.seed.is_some(),
        analysis_delay_ms = config.scoring.analysis_delay_ms,
        "job verification service ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
