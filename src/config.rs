//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::client::DEFAULT_API_BASE;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Chart-data API the dashboard reads from
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Static host serving the built dashboard
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory holding the built UI (`index.html` + assets)
    #[serde(default = "default_dist_dir")]
    pub dist_dir: PathBuf,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_dist_dir() -> PathBuf {
    PathBuf::from("chartboard-ui/dist")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            dist_dir: default_dist_dir(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
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

        Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
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

    /// Load from default locations or environment.
    ///
    /// Runs before logging is set up, so the outcome is returned as a
    /// [`LoadReport`] for the caller to log afterwards.
    pub fn load_default() -> (Self, LoadReport) {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("chartboard").join("config.toml")),
            Some(PathBuf::from("./chartboard.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file in `paths` that parses, falling back to
    /// defaults with environment overrides
    pub fn load_first(paths: &[PathBuf]) -> (Self, LoadReport) {
        let mut failures = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    let report = LoadReport {
                        source: ConfigSource::File(path.clone()),
                        failures,
                    };
                    return (config, report);
                }
                Err(e) => failures.push(e),
            }
        }

        let report = LoadReport {
            source: ConfigSource::Defaults,
            failures,
        };
        (Self::from_env(), report)
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any `CHARTBOARD_*` lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("CHARTBOARD_API_URL") {
            self.api.base_url = url;
        }

        if let Some(host) = lookup("CHARTBOARD_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("CHARTBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }
        if let Some(dir) = lookup("CHARTBOARD_DIST_DIR") {
            self.server.dist_dir = PathBuf::from(dir);
        }

        if let Some(level) = lookup("CHARTBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("CHARTBOARD_LOG_FORMAT") {
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

/// Where the active configuration came from
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigSource {
    File(PathBuf),
    Defaults,
}

/// Outcome of a config search
#[derive(Debug)]
pub struct LoadReport {
    pub source: ConfigSource,
    /// Files that existed but could not be loaded
    pub failures: Vec<ConfigError>,
}

impl LoadReport {
    /// Report for an explicitly chosen file
    pub fn file(path: &Path) -> Self {
        Self {
            source: ConfigSource::File(path.to_path_buf()),
            failures: Vec::new(),
        }
    }

    pub fn log(&self) {
        for failure in &self.failures {
            tracing::warn!("Skipping config: {}", failure);
        }
        match &self.source {
            ConfigSource::File(path) => tracing::info!("Loaded config from {:?}", path),
            ConfigSource::Defaults => {
                tracing::info!("Using default config with environment overrides")
            }
        }
    }
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Chartboard Configuration
#
# Environment variables override these settings:
# - CHARTBOARD_API_URL
# - CHARTBOARD_HOST
# - CHARTBOARD_PORT
# - CHARTBOARD_DIST_DIR
# - CHARTBOARD_LOG_LEVEL
# - CHARTBOARD_LOG_FORMAT

[api]
# Base origin of the chart-data API
base_url = "http://127.0.0.1:8000"

[server]
# Static host for the built dashboard
host = "127.0.0.1"
port = 3000

# Output directory of `trunk build` in chartboard-ui
dist_dir = "chartboard-ui/dist"

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
