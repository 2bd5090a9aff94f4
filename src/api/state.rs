//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks.

use chrono::{DateTime, Utc};
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::config::Config;
use crate::upstream::{Fetcher, HttpFetcher, UpstreamError};
use crate::weather::WeatherClient;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Full site configuration
    pub config: Arc<Config>,
    /// Outbound HTTP used by the warnings scraper
    pub fetcher: Arc<dyn Fetcher>,
    /// Weather providers behind the widget proxy
    pub weather: Arc<WeatherClient>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
    /// Wall-clock start time reported by /health
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create state around an existing fetcher
    pub fn new(config: Config, fetcher: Arc<dyn Fetcher>) -> Self {
        let weather = Arc::new(WeatherClient::new(
            Arc::clone(&fetcher),
            config.weather.clone(),
        ));

        Self {
            config: Arc::new(config),
            fetcher,
            weather,
            start_time: Instant::now(),
            started_at: Utc::now(),
        }
    }

    /// Create state with the production HTTP fetcher
    pub fn with_http(config: Config) -> Result<Self, UpstreamError> {
        let fetcher = HttpFetcher::new(Duration::from_millis(config.weather.timeout_ms))?;
        Ok(Self::new(config, Arc::new(fetcher)))
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
