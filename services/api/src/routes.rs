use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Extension, Json, Router};
use mit_dashboard::dashboard::{dashboard_router, DashboardService};
use serde_json::json;
use std::any::Any;
use std::sync::Arc;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tracing::{error, warn};

/// Dashboard API plus the operational endpoints, CORS and panic handling.
pub(crate) fn app(service: Arc<DashboardService>, state: AppState) -> Router {
    let router = dashboard_router(service)
        .route("/", get(dashboard_page))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .layer(Extension(state));

    with_edge_layers(router)
}

/// Panics become 500 JSON bodies; CORS wraps them so error responses still carry the headers.
fn with_edge_layers(router: Router) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AnyOrigin)
        .allow_methods(AnyOrigin)
        .allow_headers(AnyOrigin);

    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(cors)
}

pub(crate) async fn dashboard_page(Extension(state): Extension<AppState>) -> Response {
    let path = state.dashboard_page.as_path();
    match tokio::fs::read(path).await {
        Ok(bytes) => {
            let mime = mime_guess::from_path(path).first_or_text_plain();
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, mime.to_string())],
                bytes,
            )
                .into_response()
        }
        Err(err) => {
            warn!(path = %path.display(), error = %err, "dashboard page unavailable");
            let payload = json!({ "error": "Dashboard page not found" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
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

fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else {
        "unexpected failure".to_string()
    };

    error!(%message, "request handler panicked");
    let body = Json(json!({ "error": message }));
    (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use mit_dashboard::config::{SourceConfig, SourceLocation};
    use mit_dashboard::dashboard::{InMemoryCsvSource, TableLoader};
    use serde_json::Value;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::time::Duration;
    use tower::ServiceExt;

    const ROSTER: &str = "Training info\nMIT Name,Week,Status\nJane Doe,4,Training\n";

    fn state(page: PathBuf) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(false)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            dashboard_page: Arc::new(page),
        }
    }

    fn service() -> Arc<DashboardService> {
        let config = SourceConfig {
            candidates: SourceLocation::Url("https://sheets.test/roster.csv".to_string()),
            jobs: SourceLocation::Url("https://sheets.test/jobs.csv".to_string()),
            label: "Google Sheets".to_string(),
            fetch_timeout: Duration::from_secs(1),
        };
        let source = InMemoryCsvSource::default().with_export(config.candidates.clone(), ROSTER);
        Arc::new(DashboardService::new(TableLoader::new(
            Arc::new(source),
            config,
        )))
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder()
            .method("GET")
            .uri(uri)
            .header(header::ORIGIN, "http://dashboard.test")
            .body(Body::empty())
            .expect("request")
    }

    async fn read_json(response: Response) -> Value {
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        serde_json::from_slice(&body).expect("json")
    }

    #[tokio::test]
    async fn readiness_follows_flag() {
        let state = state(PathBuf::from("index.html"));
        let router = app(service(), state.clone());

        let response = router.clone().oneshot(get("/ready")).await.expect("dispatch");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        state.readiness.store(true, Ordering::Release);
        let response = router.oneshot(get("/ready")).await.expect("dispatch");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(read_json(response).await, json!({ "status": "ready" }));
    }

    #[tokio::test]
    async fn api_responses_allow_any_origin() {
        let router = app(service(), state(PathBuf::from("index.html")));
        let response = router
            .oneshot(get("/api/in-training-candidates"))
            .await
            .expect("dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );
        let payload = read_json(response).await;
        assert_eq!(payload[0]["name"], json!("Jane Doe"));
    }

    #[tokio::test]
    async fn dashboard_page_is_served_from_disk() {
        let page = PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static/index.html"));
        let router = app(service(), state(page));
        let response = router.oneshot(get("/")).await.expect("dispatch");

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok()),
            Some("text/html")
        );
        let body = to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("body");
        assert!(String::from_utf8_lossy(&body).contains("/api/dashboard-data"));
    }

    #[tokio::test]
    async fn missing_dashboard_page_is_not_found() {
        let router = app(service(), state(PathBuf::from("./does-not-exist.html")));
        let response = router.oneshot(get("/")).await.expect("dispatch");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(read_json(response).await.get("error").is_some());
    }

    async fn exploding_handler() -> &'static str {
        panic!("roster exploded")
    }

    #[tokio::test]
    async fn panicking_handler_returns_json_error_with_cors() {
        let routes = Router::new().route("/explode", axum::routing::get(exploding_handler));
        let router = with_edge_layers(routes);
        let response = router.oneshot(get("/explode")).await.expect("dispatch");

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response
                .headers()
                .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
                .and_then(|value| value.to_str().ok()),
            Some("*")
        );
        assert_eq!(read_json(response).await, json!({ "error": "roster exploded" }));
    }

    #[test]
    fn panics_become_json_errors() {
        let response = panic_response(Box::new("roster exploded"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let response = panic_response(Box::new(String::from("owned message")));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
