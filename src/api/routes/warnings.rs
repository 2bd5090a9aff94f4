//! Warnings Route
//!
//! - GET /api/phuket-warnings - Scraped `weatherWarnings` block as HTML
//!
//! This route answers in plain HTML/text rather than the JSON error body:
//! 200 with the fragment (or the "no warnings" paragraph), 500 when the page
//! cannot be fetched.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::api::state::AppState;
use crate::warnings::{self, FETCH_FAILED_TEXT};

/// GET /api/phuket-warnings
pub async fn phuket_warnings(State(state): State<Arc<AppState>>) -> Response {
    let source = &state.config.warnings.source_url;

    match warnings::scrape(state.fetcher.as_ref(), source).await {
        Ok(result) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/html; charset=utf-8")],
            result.into_html(),
        )
            .into_response(),
        Err(e) => {
            tracing::error!(source = %source, error = %e, "Failed to fetch weather warnings");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                FETCH_FAILED_TEXT,
            )
                .into_response()
        }
    }
}
