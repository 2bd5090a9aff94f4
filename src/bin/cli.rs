//! Yacht Club CLI
//!
//! Command-line checks against the same upstreams the site uses:
//! - Scrape the weather warnings block
//! - Fetch a weather feed as the widget proxy would
//! - Generate a default config file

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use yachtclub::config::{generate_default_config, Config};
use yachtclub::upstream::HttpFetcher;
use yachtclub::warnings;
use yachtclub::weather::{Feed, WeatherClient};

#[derive(Parser)]
#[command(name = "yachtclub-cli")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Utilities for the Phuket Yacht Club site")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (TOML); defaults to the standard search path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scrape the weather warnings block and print it
    Warnings,

    /// Fetch a weather feed (alerts, current, marine, astronomy)
    Weather {
        /// Feed name
        feed: Feed,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };

    match cli.command {
        Commands::Warnings => {
            let fetcher = HttpFetcher::new(Duration::from_millis(config.weather.timeout_ms))?;
            match warnings::scrape(&fetcher, &config.warnings.source_url).await {
                Ok(result) => println!("{}", result.into_html()),
                Err(e) => {
                    eprintln!("{}: {}", warnings::FETCH_FAILED_TEXT, e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Weather { feed } => {
            let openweather = matches!(feed, Feed::Alerts | Feed::Current);
            if openweather && config.weather.openweather_key.is_empty() {
                eprintln!("Warning: no OpenWeather key configured (YACHTCLUB_OPENWEATHER_KEY)");
            }
            if !openweather && config.weather.weatherapi_key.is_empty() {
                eprintln!("Warning: no WeatherAPI key configured (YACHTCLUB_WEATHERAPI_KEY)");
            }

            let fetcher = HttpFetcher::new(Duration::from_millis(config.weather.timeout_ms))?;
            let client = WeatherClient::new(Arc::new(fetcher), config.weather.clone());

            match client.fetch(feed).await {
                Ok(payload) => println!("{}", serde_json::to_string_pretty(&payload)?),
                Err(e) => {
                    eprintln!("Failed to fetch {} feed: {}", feed, e);
                    std::process::exit(1);
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}
