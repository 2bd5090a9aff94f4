//! HTTP API Client
//!
//! Widget data comes through the server's weather proxy, which holds the
//! provider keys and keeps every request within `connect-src 'self'`.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use std::fmt;

use crate::widgets::payloads::{Astronomy, Marine, OneCall};

/// Base path of the versioned API
pub const API_BASE: &str = "/api/v1";

/// Scraped warnings page, embedded in the dashboard frame
pub const WARNINGS_FRAME_SRC: &str = "/api/phuket-warnings";

/// Why a widget request produced no payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    Network(String),
    Status(u16),
    Parse(String),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Network(e) => write!(f, "Network error: {}", e),
            FetchError::Status(status) => write!(f, "HTTP error! status: {}", status),
            FetchError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

pub fn feed_url(feed: &str) -> String {
    format!("{}/weather/{}", API_BASE, feed)
}

async fn fetch_feed<T: DeserializeOwned>(feed: &str) -> Result<T, FetchError> {
    let response = Request::get(&feed_url(feed))
        .send()
        .await
        .map_err(|e| FetchError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| FetchError::Parse(e.to_string()))
}

/// Active alerts for the club's position
pub async fn fetch_alerts() -> Result<OneCall, FetchError> {
    fetch_feed("alerts").await
}

/// Current conditions: UV index, sunrise and sunset
pub async fn fetch_current() -> Result<OneCall, FetchError> {
    fetch_feed("current").await
}

/// Hourly marine forecast for today
pub async fn fetch_marine() -> Result<Marine, FetchError> {
    fetch_feed("marine").await
}

/// Moon phase, moonrise and moonset
pub async fn fetch_astronomy() -> Result<Astronomy, FetchError> {
    fetch_feed("astronomy").await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_url() {
        assert_eq!(feed_url("marine"), "/api/v1/weather/marine");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(FetchError::Status(404).to_string(), "HTTP error! status: 404");
    }
}
