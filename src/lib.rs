//! # Yacht Club
//!
//! Server side of the Phuket Yacht Club single-page site.
//!
//! The page itself (navigation, gallery, contact form, widgets, animated
//! background) is the Leptos app in `yachtclub-ui`. This crate serves it and
//! provides the endpoints it calls.
//!
//! ## Modules
//!
//! - [`api`]: Axum router, CSP header, static site serving
//! - [`warnings`]: Weather-warnings scraper
//! - [`weather`]: Weather provider client behind the widget proxy
//! - [`upstream`]: Outbound HTTP seam
//! - [`config`]: TOML + environment configuration
//! - [`telemetry`]: Tracing subscriber setup
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yachtclub::{serve, AppState, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env();
//!     let state = AppState::with_http(config.clone())?;
//!     serve(state, &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod telemetry;
pub mod upstream;
pub mod warnings;
pub mod weather;

pub use api::{build_router, serve, ApiError, ApiResult, AppState};

pub use config::{
    Config, ConfigError, LoggingConfig, SecurityConfig, ServerConfig, WarningsConfig,
    WeatherConfig,
};

pub use upstream::{Fetcher, HttpFetcher, UpstreamError, UpstreamResponse};

pub use warnings::{extract_warnings, scrape, Warnings};

pub use weather::{Feed, WeatherClient};
