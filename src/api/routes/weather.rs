//! Weather Routes
//!
//! Same-origin proxy for the dashboard widgets.
//!
//! - GET /api/v1/weather/alerts
//! - GET /api/v1/weather/current
//! - GET /api/v1/weather/marine
//! - GET /api/v1/weather/astronomy

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::error::{ApiError, ApiResult};
use crate::api::state::AppState;
use crate::weather::Feed;

/// GET /api/v1/weather/:feed
pub async fn weather_feed(
    State(state): State<Arc<AppState>>,
    Path(feed): Path<String>,
) -> ApiResult<Json<Value>> {
    let feed: Feed = feed.parse().map_err(ApiError::NotFound)?;
    let payload = state.weather.fetch(feed).await?;
    Ok(Json(payload))
}
