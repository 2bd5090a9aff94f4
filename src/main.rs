//! Yacht Club Site Server
//!
//! Run with: cargo run --bin yachtclub -- --config config.toml
//!
//! Without `--config` the usual locations are searched
//! (`~/.config/yachtclub/config.toml`, `/etc/yachtclub/config.toml`,
//! `./config.toml`), then `YACHTCLUB_*` environment variables apply.
//! `RUST_LOG` overrides the configured log level.

use clap::Parser;
use std::path::PathBuf;

use yachtclub::config::Config;
use yachtclub::telemetry::init_tracing;
use yachtclub::{serve, AppState};

#[derive(Parser)]
#[command(name = "yachtclub")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Serve the Phuket Yacht Club site")]
struct Args {
    /// Config file (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Host to bind to (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    init_tracing(&config.logging);

    tracing::info!("Starting yacht club site server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Site directory: {}", config.server.static_dir);
    tracing::info!("Warnings source: {}", config.warnings.source_url);

    if config.weather.openweather_key.is_empty() || config.weather.weatherapi_key.is_empty() {
        tracing::warn!("Weather provider keys missing; dashboard widgets will show fallbacks");
    }

    let state = AppState::with_http(config.clone())?;
    serve(state, &config.server).await?;

    tracing::info!("Yacht club site server stopped");
    Ok(())
}
