//! Configuration management for the contact book.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is read first if present.

use crate::error::{ConfigError, ConfigResult};
use crate::models::DEFAULT_MAX_LIMIT;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// Configuration for the contacts HTTP server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind (default: "0.0.0.0")
    pub host: String,

    /// Port to bind (default: 5000)
    pub port: u16,

    /// JSON data file; `None` keeps contacts in memory only
    pub data_file: Option<PathBuf>,

    /// Directory holding the prebuilt UI bundle (default: "dist")
    pub static_dir: PathBuf,

    /// Largest page size a list request may ask for (default: 100)
    pub max_page_limit: u64,

    /// Largest accepted request body in bytes (default: 100 KiB)
    pub max_body_bytes: usize,

    /// Log level (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `HOST`: Interface to bind (default: "0.0.0.0")
    /// - `PORT`: Port to bind (default: 5000)
    /// - `CONTACTS_DATA_FILE`: JSON file to persist contacts in (default: in-memory)
    /// - `STATIC_DIR`: UI bundle directory (default: "dist")
    /// - `MAX_PAGE_LIMIT`: Largest page size (default: 100)
    /// - `MAX_BODY_BYTES`: Largest request body (default: 102400)
    /// - `LOG_LEVEL`: Logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = Config::default();

        let host = env::var("HOST").unwrap_or(defaults.host);
        if host.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: "HOST".to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }

        let port = Self::parse_env("PORT", defaults.port)?;

        let data_file = env::var("CONTACTS_DATA_FILE")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let static_dir = env::var("STATIC_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.static_dir);

        let max_page_limit = Self::parse_env("MAX_PAGE_LIMIT", defaults.max_page_limit)?;
        if max_page_limit == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_PAGE_LIMIT".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let max_body_bytes = Self::parse_env("MAX_BODY_BYTES", defaults.max_body_bytes)?;
        if max_body_bytes == 0 {
            return Err(ConfigError::InvalidValue {
                var: "MAX_BODY_BYTES".to_string(),
                reason: "Must be at least 1".to_string(),
            });
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            host,
            port,
            data_file,
            static_dir,
            max_page_limit,
            max_body_bytes,
            log_level,
        })
    }

    /// Log filter for the server: `RUST_LOG` when set, else `log_level`.
    ///
    /// An unparsable level falls back to `info`.
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&self.log_level))
            .unwrap_or_else(|_| EnvFilter::new("info"))
    }

    /// Address string to bind the listener to.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Parse an environment variable with a default value.
    fn parse_env<T: std::str::FromStr>(var_name: &str, default: T) -> ConfigResult<T> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<T>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a positive number, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: "0.0.0.0".to_string(),
            port: 5000,
            data_file: None,
            static_dir: PathBuf::from("dist"),
            max_page_limit: DEFAULT_MAX_LIMIT,
            max_body_bytes: 100 * 1024,
            log_level: "info".to_string(),
        }
    }
}

/// Configuration for the contacts API client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the contacts server
    pub api_url: String,

    /// HTTP request timeout in seconds (default: 10)
    pub request_timeout: u64,
}

impl ClientConfig {
    /// Load client configuration from environment variables.
    ///
    /// - `CONTACTS_API_URL`: Server base URL (default: "http://127.0.0.1:5000")
    /// - `REQUEST_TIMEOUT`: HTTP timeout in seconds (default: 10)
    pub fn from_env() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();

        let defaults = ClientConfig::default();
        let api_url = env::var("CONTACTS_API_URL").unwrap_or(defaults.api_url);

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidValue {
                var: "CONTACTS_API_URL".to_string(),
                reason: "Must start with http:// or https://".to_string(),
            });
        }

        let request_timeout = Config::parse_env("REQUEST_TIMEOUT", defaults.request_timeout)?;

        Ok(ClientConfig {
            api_url,
            request_timeout,
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api_url: "http://127.0.0.1:5000".to_string(),
            request_timeout: 10,
        }
    }
}
