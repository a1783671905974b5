use crate::cli::ServeArgs;
use crate::infra::{http_dashboard_service, AppState};
use crate::routes::app;
use axum_prometheus::PrometheusMetricLayer;
use mit_dashboard::config::AppConfig;
use mit_dashboard::error::AppError;
use mit_dashboard::telemetry;
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
        dashboard_page: Arc::new(config.server.dashboard_page.clone()),
    };

    let service = http_dashboard_service(config.sources.clone());
    let app = app(service, app_state).layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(
        ?config.environment,
        %addr,
        candidates = %config.sources.candidates,
        jobs = %config.sources.jobs,
        "MIT dashboard API ready"
    );

    axum::serve(listener, app).await?;
    Ok(())
}
