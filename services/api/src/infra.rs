use metrics_exporter_prometheus::PrometheusHandle;
use mit_dashboard::config::SourceConfig;
use mit_dashboard::dashboard::{DashboardService, HttpCsvSource, TableLoader};
use std::path::PathBuf;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
    pub(crate) dashboard_page: Arc<PathBuf>,
}

/// Dashboard service reading both exports through a shared HTTP client.
pub(crate) fn http_dashboard_service(config: SourceConfig) -> Arc<DashboardService> {
    let source = Arc::new(HttpCsvSource::new(config.fetch_timeout));
    Arc::new(DashboardService::new(TableLoader::new(source, config)))
}
