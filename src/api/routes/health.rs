//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health - Status with uptime and configuration summary

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::path::Path;
use std::sync::Arc;

use crate::api::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub started_at: DateTime<Utc>,
    pub version: String,
    /// Whether the built site directory exists
    pub site: String,
    /// Whether provider keys are configured
    pub weather_keys: String,
}

/// GET /health/live
///
/// Returns 200 if the process is alive, no dependency checks.
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health
pub async fn full_health(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let site_ok = Path::new(&state.config.server.static_dir).is_dir();
    let weather = &state.config.weather;
    let keys_ok = !weather.openweather_key.is_empty() && !weather.weatherapi_key.is_empty();

    // Widgets degrade to their fallback text, so missing pieces only degrade
    let status = if site_ok && keys_ok { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        uptime_seconds: state.uptime_seconds(),
        started_at: state.started_at,
        version: env!("CARGO_PKG_VERSION").to_string(),
        site: if site_ok { "ok" } else { "missing" }.to_string(),
        weather_keys: if keys_ok { "ok" } else { "missing" }.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
