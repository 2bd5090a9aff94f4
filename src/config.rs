//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub weather: WeatherConfig,

    #[serde(default)]
    pub warnings: WarningsConfig,

    #[serde(default)]
    pub security: SecurityConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Site server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built single-page site (index.html, wasm, images)
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_static_dir() -> String {
    "yachtclub-ui/dist".to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Weather provider configuration
///
/// Keys stay on the server; the page only talks to the same-origin proxy.
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherConfig {
    #[serde(default = "default_latitude")]
    pub latitude: f64,

    #[serde(default = "default_longitude")]
    pub longitude: f64,

    #[serde(default = "default_openweather_url")]
    pub openweather_url: String,

    #[serde(default)]
    pub openweather_key: String,

    #[serde(default = "default_weatherapi_url")]
    pub weatherapi_url: String,

    #[serde(default)]
    pub weatherapi_key: String,

    #[serde(default = "default_weather_timeout")]
    pub timeout_ms: u64,
}

fn default_latitude() -> f64 {
    7.8
}

fn default_longitude() -> f64 {
    98.34
}

fn default_openweather_url() -> String {
    "https://api.openweathermap.org/data/2.5".to_string()
}

fn default_weatherapi_url() -> String {
    "https://api.weatherapi.com/v1".to_string()
}

fn default_weather_timeout() -> u64 {
    10_000
}

impl Default for WeatherConfig {
    fn default() -> Self {
        Self {
            latitude: default_latitude(),
            longitude: default_longitude(),
            openweather_url: default_openweather_url(),
            openweather_key: String::new(),
            weatherapi_url: default_weatherapi_url(),
            weatherapi_key: String::new(),
            timeout_ms: default_weather_timeout(),
        }
    }
}

/// Weather warnings scraper configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WarningsConfig {
    #[serde(default = "default_warnings_url")]
    pub source_url: String,
}

fn default_warnings_url() -> String {
    "https://www.meteoblue.com/en/weather/warnings/phuket_thailand_1151254".to_string()
}

impl Default for WarningsConfig {
    fn default() -> Self {
        Self {
            source_url: default_warnings_url(),
        }
    }
}

/// Response header policy applied to every route
#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    #[serde(default = "default_csp")]
    pub content_security_policy: String,
}

fn default_csp() -> String {
    [
        "default-src 'self';",
        "script-src 'self' 'wasm-unsafe-eval';",
        "connect-src 'self' https://www.phuket.net;",
        "frame-src 'self';",
        "style-src 'self' 'unsafe-inline';",
    ]
    .join(" ")
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            content_security_policy: default_csp(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("yachtclub").join("config.toml")),
            Some(PathBuf::from("/etc/yachtclub/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup. Unparseable numbers are ignored.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(host) = lookup("YACHTCLUB_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("YACHTCLUB_PORT").and_then(|p| p.parse().ok()) {
            self.server.port = port;
        }
        if let Some(dir) = lookup("YACHTCLUB_STATIC_DIR") {
            self.server.static_dir = dir;
        }

        if let Some(key) = lookup("YACHTCLUB_OPENWEATHER_KEY") {
            self.weather.openweather_key = key;
        }
        if let Some(key) = lookup("YACHTCLUB_WEATHERAPI_KEY") {
            self.weather.weatherapi_key = key;
        }

        if let Some(url) = lookup("YACHTCLUB_WARNINGS_URL") {
            self.warnings.source_url = url;
        }

        if let Some(level) = lookup("YACHTCLUB_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("YACHTCLUB_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Phuket Yacht Club site configuration
#
# Environment variables override these settings:
# - YACHTCLUB_HOST
# - YACHTCLUB_PORT
# - YACHTCLUB_STATIC_DIR
# - YACHTCLUB_OPENWEATHER_KEY
# - YACHTCLUB_WEATHERAPI_KEY
# - YACHTCLUB_WARNINGS_URL
# - YACHTCLUB_LOG_LEVEL
# - YACHTCLUB_LOG_FORMAT

[server]
host = "0.0.0.0"
port = 8080

# Built site (trunk build output of yachtclub-ui)
static_dir = "yachtclub-ui/dist"

# Request timeout in seconds
request_timeout_secs = 30

[weather]
# Phuket
latitude = 7.8
longitude = 98.34

openweather_url = "https://api.openweathermap.org/data/2.5"
openweather_key = ""

weatherapi_url = "https://api.weatherapi.com/v1"
weatherapi_key = ""

# Upstream request timeout (ms)
timeout_ms = 10000

[warnings]
# Page scraped for the weatherWarnings block
source_url = "https://www.meteoblue.com/en/weather/warnings/phuket_thailand_1151254"

[security]
content_security_policy = "default-src 'self'; script-src 'self' 'wasm-unsafe-eval'; connect-src 'self' https://www.phuket.net; frame-src 'self'; style-src 'self' 'unsafe-inline';"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.addr(), "0.0.0.0:8080");
        assert_eq!(config.weather.latitude, 7.8);
        assert!(config
            .security
            .content_security_policy
            .contains("connect-src 'self' https://www.phuket.net;"));
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(
            config.security.content_security_policy,
            SecurityConfig::default().content_security_policy
        );
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server]\nport = 9000\n\n[weather]\nopenweather_key = \"abc\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.weather.openweather_key, "abc");
        assert_eq!(config.weather.longitude, 98.34);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[server\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/yachtclub.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("YACHTCLUB_PORT", "not-a-port"),
            ("YACHTCLUB_HOST", "127.0.0.1"),
            ("YACHTCLUB_WEATHERAPI_KEY", "wk"),
            ("YACHTCLUB_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.weather.weatherapi_key, "wk");
        assert_eq!(config.logging.format, "json");
    }
}
