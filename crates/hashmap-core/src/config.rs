//! Application configuration
//!
//! Configuration is layered with the `config` crate: built-in defaults, then
//! optional `config/default` and `config/{RUN_MODE}` files, then `HASHMAP__*`
//! environment variables (e.g. `HASHMAP__RATING_API__URL`).

use crate::AppResult;
use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;
use validator::{Validate, ValidationError};

/// Main application configuration
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct AppConfig {
    #[validate(nested)]
    pub server: ServerConfig,
    #[validate(nested)]
    pub rating_api: RatingApiConfig,
    #[validate(nested)]
    pub panel: PanelConfig,
}

/// HTTP server configuration
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct ServerConfig {
    /// Server host address
    #[serde(default = "default_host")]
    #[validate(length(min = 1))]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    #[validate(range(min = 1))]
    pub port: u16,

    /// Number of worker threads
    #[serde(default = "default_workers")]
    #[validate(range(min = 1))]
    pub workers: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9002
}

fn default_workers() -> usize {
    num_cpus::get()
}

/// Rating API client configuration
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct RatingApiConfig {
    /// Root URL of the rating API (without the `/v1` prefix)
    #[validate(url)]
    pub url: String,

    /// Token forwarded as `X-Auth-Token`
    #[serde(default)]
    pub auth_token: Option<String>,

    /// Request timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    #[validate(range(min = 1))]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    10_000
}

/// Panel routing configuration
#[derive(Debug, Deserialize, Clone, Validate)]
pub struct PanelConfig {
    /// Path prefix every panel route is mounted under
    #[serde(default = "default_base_path")]
    #[validate(custom(function = "validate_base_path"))]
    pub base_path: String,

    /// Comma separated list of allowed CORS origins
    #[serde(default = "default_cors_origins")]
    pub cors_origins: String,
}

fn default_base_path() -> String {
    "/admin/hashmap".to_string()
}

fn default_cors_origins() -> String {
    "http://localhost:3000,http://127.0.0.1:3000".to_string()
}

fn validate_base_path(path: &str) -> Result<(), ValidationError> {
    if path.is_empty() || (path.starts_with('/') && !path.ends_with('/')) {
        Ok(())
    } else {
        Err(ValidationError::new("base_path_format"))
    }
}

impl AppConfig {
    /// Load configuration from environment and optional config file
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = Config::builder()
            // Start with default values
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 9002)?
            .set_default("server.workers", num_cpus::get() as i64)?
            .set_default("rating_api.url", "http://127.0.0.1:8889")?
            .set_default("rating_api.timeout_ms", 10_000)?
            .set_default("panel.base_path", "/admin/hashmap")?
            // Load config file if exists
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Load from environment variables with HASHMAP_ prefix
            .add_source(
                Environment::with_prefix("HASHMAP")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    /// Load every layer and reject values the server cannot start with
    pub fn load_validated() -> AppResult<Self> {
        Self::load()?.validated()
    }

    /// Check field constraints, handing the config back when they hold
    pub fn validated(self) -> AppResult<Self> {
        self.validate()?;
        Ok(self)
    }

    /// Get the server bind address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Allowed CORS origins, trimmed
    pub fn cors_origins(&self) -> Vec<String> {
        self.panel
            .cors_origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect()
    }
}
