//! Site Server
//!
//! HTTP layer for the yacht club site, built with Axum.
//!
//! # Endpoints
//!
//! ## Warnings
//! - `GET /api/phuket-warnings` - Scraped warnings block (HTML)
//!
//! ## Weather (widget proxy)
//! - `GET /api/v1/weather/alerts` - Active weather alerts
//! - `GET /api/v1/weather/current` - UV index, sunrise and sunset
//! - `GET /api/v1/weather/marine` - Hourly sea temperature
//! - `GET /api/v1/weather/astronomy` - Moon phase, moonrise and moonset
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health` - Full health status
//!
//! ## Site
//! - `GET /` - Page shell, with a per-response script nonce
//! - Everything else is served from the built site directory, falling back
//!   to the page shell so fragment links on a reloaded page still land.
//!
//! Every response carries the configured `Content-Security-Policy` header.
//! The page shell extends its `script-src` with the nonce it was served with.
//!
//! # Example
//!
//! ```rust,ignore
//! use yachtclub::api::{serve, AppState};
//! use yachtclub::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load_default();
//!     let state = AppState::with_http(config.clone())?;
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use state::AppState;

use axum::{
    http::{header, HeaderValue},
    routing::{get, MethodRouter},
    Router,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    services::ServeDir,
    set_header::SetResponseHeaderLayer,
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the site router with all routes and middleware
pub fn build_router(state: AppState) -> ApiResult<Router> {
    let csp = HeaderValue::from_str(&state.config.security.content_security_policy)
        .map_err(|e| ApiError::Internal(format!("Invalid content security policy: {}", e)))?;
    let timeout = Duration::from_secs(state.config.server.request_timeout_secs);

    let api_routes = Router::new().route("/weather/:feed", get(routes::weather::weather_feed));

    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/", get(routes::health::full_health));

    let shared_state = Arc::new(state);

    let shell: MethodRouter = get(routes::site::index).with_state(Arc::clone(&shared_state));
    let site = ServeDir::new(PathBuf::from(&shared_state.config.server.static_dir)).fallback(shell);

    Ok(Router::new()
        .route("/", get(routes::site::index))
        .route("/index.html", get(routes::site::index))
        .route("/api/phuket-warnings", get(routes::warnings::phuket_warnings))
        .nest("/api/v1", api_routes)
        .nest("/health", health_routes)
        .fallback_service(site)
        .layer(TimeoutLayer::new(timeout))
        .layer(SetResponseHeaderLayer::if_not_present(
            header::CONTENT_SECURITY_POLICY,
            csp,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(shared_state))
}

/// Start the site server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), ApiError> {
    let router = build_router(state)?;

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Yacht club site listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ApiError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Site server shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::upstream::testing::StubFetcher;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::tempdir;
    use tower::util::ServiceExt;

    const WARNINGS_URL: &str = "https://warnings.test/phuket";

    fn create_test_app(stub: StubFetcher) -> (Router, tempfile::TempDir) {
        let dir = tempdir().unwrap();
        std::fs::write(
            dir.path().join("index.html"),
            "<html><body id=\"site\">yacht club</body></html>",
        )
        .unwrap();

        let mut config = Config::default();
        config.server.static_dir = dir.path().to_string_lossy().to_string();
        config.warnings.source_url = WARNINGS_URL.to_string();
        config.weather.openweather_url = "https://ow.test/data/2.5".to_string();
        config.weather.weatherapi_url = "https://wa.test/v1".to_string();

        let state = AppState::new(config, Arc::new(stub));
        (build_router(state).unwrap(), dir)
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn csp_of(response: &Response) -> Option<String> {
        response
            .headers()
            .get(header::CONTENT_SECURITY_POLICY)
            .map(|v| v.to_str().unwrap().to_string())
    }

    #[tokio::test]
    async fn test_warnings_found() {
        let (app, _dir) = create_test_app(StubFetcher::new().respond(
            WARNINGS_URL,
            200,
            r#"<html><div class="weatherWarnings">ALERT</div><div>other</div></html>"#,
        ));

        let response = get(app, "/api/phuket-warnings").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers()[header::CONTENT_TYPE]
            .to_str()
            .unwrap()
            .starts_with("text/html"));

        let body = body_text(response).await;
        assert!(body.contains("ALERT"));
        assert!(!body.contains("other"));
    }

    #[tokio::test]
    async fn test_warnings_absent() {
        let (app, _dir) = create_test_app(StubFetcher::new().respond(
            WARNINGS_URL,
            200,
            "<html><p>calm seas</p></html>",
        ));

        let response = get(app, "/api/phuket-warnings").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_text(response).await, "<p>No warnings found</p>");
    }

    #[tokio::test]
    async fn test_warnings_fetch_failure() {
        let (app, _dir) =
            create_test_app(StubFetcher::new().fail(WARNINGS_URL, "connection reset"));

        let response = get(app, "/api/phuket-warnings").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert!(csp_of(&response).is_some());
        assert_eq!(body_text(response).await, "Error fetching weather data");
    }

    #[tokio::test]
    async fn test_weather_passthrough() {
        let (app, _dir) = create_test_app(StubFetcher::new().respond(
            "https://ow.test/data/2.5/onecall",
            200,
            r#"{"current":{"uvi":7.2,"sunrise":1700000000,"sunset":1700043000}}"#,
        ));

        let response = get(app, "/api/v1/weather/current").await;
        assert_eq!(response.status(), StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(value["current"]["uvi"], 7.2);
    }

    #[tokio::test]
    async fn test_weather_upstream_404() {
        let (app, _dir) =
            create_test_app(StubFetcher::new().respond("https://wa.test/v1", 404, "{}"));

        let response = get(app, "/api/v1/weather/marine").await;
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[tokio::test]
    async fn test_weather_unknown_feed() {
        let (app, _dir) = create_test_app(StubFetcher::new());

        let response = get(app, "/api/v1/weather/tides").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_health_live() {
        let (app, _dir) = create_test_app(StubFetcher::new());

        let response = get(app, "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full() {
        let (app, _dir) = create_test_app(StubFetcher::new());

        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let value: serde_json::Value = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(value["site"], "ok");
        assert_eq!(value["status"], "degraded");
    }

    /// Nonce from `'nonce-…'` in a policy's script-src
    fn script_src_nonce(policy: &str) -> Option<String> {
        let script_src = policy
            .split(';')
            .map(str::trim)
            .find(|d| d.starts_with("script-src "))?;
        script_src
            .split_whitespace()
            .find_map(|s| s.strip_prefix("'nonce-")?.strip_suffix('\''))
            .map(str::to_string)
    }

    #[tokio::test]
    async fn test_site_index_with_csp() {
        let (app, _dir) = create_test_app(StubFetcher::new());

        let response = get(app, "/").await;
        assert_eq!(response.status(), StatusCode::OK);

        let policy = csp_of(&response).unwrap();
        let nonce = script_src_nonce(&policy).unwrap();
        let configured = Config::default().security.content_security_policy;
        assert_eq!(policy, routes::site::policy_with_nonce(&configured, &nonce));
        assert!(body_text(response).await.contains("yacht club"));
    }

    #[tokio::test]
    async fn test_site_bootstrap_script_allowed() {
        let (app, dir) = create_test_app(StubFetcher::new());
        std::fs::write(
            dir.path().join("index.html"),
            concat!(
                "<html><head>",
                "<script type=\"module\">import init, * as bindings from '/yachtclub-ui.js';",
                "init('/yachtclub-ui_bg.wasm');</script>",
                "</head><body></body></html>",
            ),
        )
        .unwrap();

        let first = get(app.clone(), "/").await;
        let policy = csp_of(&first).unwrap();
        let nonce = script_src_nonce(&policy).unwrap();
        let body = body_text(first).await;
        assert!(body.contains(&format!("<script nonce=\"{}\" type=\"module\">", nonce)));
        assert!(policy.contains("'wasm-unsafe-eval'"));

        // fresh nonce per response
        let second = get(app.clone(), "/index.html").await;
        let other = script_src_nonce(&csp_of(&second).unwrap()).unwrap();
        assert_ne!(nonce, other);
        assert!(body_text(second).await.contains(&format!("nonce=\"{}\"", other)));

        // other routes keep the configured policy
        let api = get(app, "/health/live").await;
        assert_eq!(
            csp_of(&api).unwrap(),
            Config::default().security.content_security_policy
        );
    }

    #[tokio::test]
    async fn test_site_fallback_to_index() {
        let (app, _dir) = create_test_app(StubFetcher::new());

        let response = get(app, "/gallery").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(script_src_nonce(&csp_of(&response).unwrap()).is_some());
        assert!(body_text(response).await.contains("yacht club"));
    }

    #[tokio::test]
    async fn test_site_static_asset() {
        let (app, dir) = create_test_app(StubFetcher::new());
        std::fs::write(dir.path().join("style.css"), "body { margin: 0; }").unwrap();

        let response = get(app, "/style.css").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            csp_of(&response).unwrap(),
            Config::default().security.content_security_policy
        );
        assert_eq!(body_text(response).await, "body { margin: 0; }");
    }

    #[tokio::test]
    async fn test_site_missing_shell() {
        let (app, dir) = create_test_app(StubFetcher::new());
        std::fs::remove_file(dir.path().join("index.html")).unwrap();

        let response = get(app, "/").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert!(csp_of(&response).is_some());
    }

    #[test]
    fn test_invalid_csp_rejected() {
        let mut config = Config::default();
        config.security.content_security_policy = "default-src\n'self'".to_string();

        let state = AppState::new(config, Arc::new(StubFetcher::new()));
        assert!(matches!(build_router(state), Err(ApiError::Internal(_))));
    }
}
