//! Weather Provider Client
//!
//! Builds provider requests for the dashboard widgets and hands back the
//! provider JSON untouched. The page renders it; the server only holds the keys.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::config::WeatherConfig;
use crate::upstream::{Fetcher, UpstreamError};

/// Upstream feeds the widgets consume
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feed {
    /// OpenWeather one-call, alerts only
    Alerts,
    /// OpenWeather one-call, current conditions (UV index, sunrise, sunset)
    Current,
    /// WeatherAPI marine forecast (hourly water temperature)
    Marine,
    /// WeatherAPI astronomy (moon phase, moonrise, moonset)
    Astronomy,
}

impl Feed {
    pub const ALL: [Feed; 4] = [Feed::Alerts, Feed::Current, Feed::Marine, Feed::Astronomy];

    pub fn as_str(&self) -> &'static str {
        match self {
            Feed::Alerts => "alerts",
            Feed::Current => "current",
            Feed::Marine => "marine",
            Feed::Astronomy => "astronomy",
        }
    }
}

impl fmt::Display for Feed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Feed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Feed::ALL
            .into_iter()
            .find(|feed| feed.as_str() == s)
            .ok_or_else(|| format!("unknown weather feed: {}", s))
    }
}

/// Client for the two weather providers
pub struct WeatherClient {
    fetcher: Arc<dyn Fetcher>,
    config: WeatherConfig,
}

impl WeatherClient {
    pub fn new(fetcher: Arc<dyn Fetcher>, config: WeatherConfig) -> Self {
        Self { fetcher, config }
    }

    /// Provider URL and query for a feed
    pub fn request_for(&self, feed: Feed) -> (String, Vec<(&'static str, String)>) {
        let lat = self.config.latitude.to_string();
        let lon = self.config.longitude.to_string();

        match feed {
            Feed::Alerts | Feed::Current => {
                let exclude = if feed == Feed::Alerts {
                    "minutely,hourly,daily,current"
                } else {
                    "minutely,hourly,daily,alerts"
                };
                (
                    format!("{}/onecall", self.config.openweather_url.trim_end_matches('/')),
                    vec![
                        ("lat", lat),
                        ("lon", lon),
                        ("exclude", exclude.to_string()),
                        ("appid", self.config.openweather_key.clone()),
                    ],
                )
            }
            Feed::Marine => (
                format!("{}/marine.json", self.config.weatherapi_url.trim_end_matches('/')),
                vec![
                    ("key", self.config.weatherapi_key.clone()),
                    ("q", format!("{},{}", lat, lon)),
                    ("days", "1".to_string()),
                ],
            ),
            Feed::Astronomy => (
                format!(
                    "{}/astronomy.json",
                    self.config.weatherapi_url.trim_end_matches('/')
                ),
                vec![
                    ("key", self.config.weatherapi_key.clone()),
                    ("q", format!("{},{}", lat, lon)),
                ],
            ),
        }
    }

    /// Fetch a feed. Non-2xx statuses and non-JSON bodies are errors.
    pub async fn fetch(&self, feed: Feed) -> Result<Value, UpstreamError> {
        let (url, query) = self.request_for(feed);
        let response = self.fetcher.get(&url, &query).await?;

        if !response.is_success() {
            tracing::warn!(feed = %feed, status = response.status, "Weather provider error");
            return Err(UpstreamError::Status(response.status));
        }

        serde_json::from_str(&response.body).map_err(|e| UpstreamError::Body(e.to_string()))
    }
}
