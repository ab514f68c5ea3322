//! Runtime configuration.
//!
//! Read from a TOML file; every field has a default, so an empty file (or
//! no file at all) yields a calculator pointed at a local service.
//!
//! ```toml
//! [service]
//! url = "http://127.0.0.1:5000/calculate"
//! timeout_ms = 10000
//!
//! [log]
//! filter = "keypad=debug"
//! ```

mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

pub const DEFAULT_SERVICE_URL: &str = "http://127.0.0.1:5000/calculate";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub service: ServiceConfig,
    pub log: LogConfig,
}

/// Where and how to reach the evaluation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    pub url: String,
    /// Per-request timeout. A timed out request counts as a network error.
    pub timeout_ms: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SERVICE_URL.to_string(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl ServiceConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

fn default_timeout_ms() -> u64 {
    10_000
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogConfig {
    /// `EnvFilter` directives, overridden by `RUST_LOG` when set.
    pub filter: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            filter: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = self.service.url.trim();
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "service.url must be an http(s) URL, got {url:?}"
            )));
        }
        if self.service.timeout_ms == 0 {
            return Err(ConfigError::Invalid(
                "service.timeout_ms must be greater than zero".to_string(),
            ));
        }
        if let Err(e) = EnvFilter::try_new(&self.log.filter) {
            return Err(ConfigError::Invalid(format!(
                "log.filter {:?} is not a valid filter: {e}",
                self.log.filter
            )));
        }
        Ok(())
    }
}
