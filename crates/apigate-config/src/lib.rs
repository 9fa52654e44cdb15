//! Configuration loading for the Apigate registry.
//!
//! Settings are read from an optional TOML file and overridden by
//! `APIGATE_`-prefixed environment variables. The registry core takes
//! no configuration itself; these values are consumed by the
//! embedding gateway when it wires a backend and the invalidation
//! poller.

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Error types for configuration operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl ConfigError {
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Connection settings for the authoritative registry store.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BackendConfig {
    /// Base URL of the document store.
    pub url: String,
    /// Connect timeout in milliseconds.
    pub connect_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:9200".to_string(),
            connect_timeout_ms: 5_000,
        }
    }
}

/// Cache behavior settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CacheConfig {
    /// Whether the gateway wraps the backend in the caching registry.
    pub enabled: bool,
    /// Interval at which the external poller checks the store for
    /// changes and triggers invalidation.
    pub poll_interval_ms: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            poll_interval_ms: 10_000,
        }
    }
}

/// Top-level registry configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    /// Authoritative store connection settings.
    pub backend: BackendConfig,
    /// Caching layer settings.
    pub cache: CacheConfig,
}

impl RegistryConfig {
    /// Loads configuration from an optional file, then applies
    /// environment overrides and validates the result.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_overrides(std::env::vars())?;
        config.validate()?;
        Ok(config)
    }

    /// Reads configuration from a TOML file. A missing file yields
    /// the defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!("Config file does not exist: {:?}", path);
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(path)?;
        Self::from_toml(&raw)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|e| ConfigError::parse(e.to_string()))
    }

    /// Applies `APIGATE_`-prefixed overrides from the given variable
    /// set. Unrelated variables are ignored.
    pub fn apply_overrides(
        &mut self,
        vars: impl IntoIterator<Item = (String, String)>,
    ) -> Result<()> {
        for (name, value) in vars {
            match name.as_str() {
                "APIGATE_BACKEND_URL" => self.backend.url = value,
                "APIGATE_BACKEND_CONNECT_TIMEOUT_MS" => {
                    self.backend.connect_timeout_ms = parse_u64(&name, &value)?;
                }
                "APIGATE_CACHE_ENABLED" => {
                    self.cache.enabled = parse_bool(&name, &value)?;
                }
                "APIGATE_CACHE_POLL_INTERVAL_MS" => {
                    self.cache.poll_interval_ms = parse_u64(&name, &value)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Checks invariants the rest of the system relies on.
    pub fn validate(&self) -> Result<()> {
        if self.backend.url.is_empty() {
            return Err(ConfigError::validation("backend.url must not be empty"));
        }
        if self.backend.connect_timeout_ms == 0 {
            return Err(ConfigError::validation(
                "backend.connect_timeout_ms must be positive",
            ));
        }
        if self.cache.enabled && self.cache.poll_interval_ms == 0 {
            return Err(ConfigError::validation(
                "cache.poll_interval_ms must be positive when caching is enabled",
            ));
        }
        Ok(())
    }
}

fn parse_u64(name: &str, value: &str) -> Result<u64> {
    value
        .parse()
        .map_err(|_| ConfigError::parse(format!("{name}: expected an integer, got {value:?}")))
}

fn parse_bool(name: &str, value: &str) -> Result<bool> {
    match value {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::parse(format!(
            "{name}: expected a boolean, got {value:?}"
        ))),
    }
}
