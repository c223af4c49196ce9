//! Pipeline configuration.
//!
//! Built once and handed to [`crate::Pipeline::new`]. Values come from a
//! TOML file, environment variables, or plain construction; anything not
//! given keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default clustering API root.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
/// Default per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable overriding [`PipelineConfig::api_base_url`].
pub const ENV_API_URL: &str = "FOOD_MAP_API_URL";
/// Environment variable overriding [`PipelineConfig::use_mock_data`].
pub const ENV_USE_MOCK: &str = "FOOD_MAP_USE_MOCK";
/// Environment variable overriding [`PipelineConfig::request_timeout_secs`].
pub const ENV_TIMEOUT_SECS: &str = "FOOD_MAP_TIMEOUT_SECS";

/// Errors from loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML or has wrongly typed keys.
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// A value was present but unusable.
    #[error("Invalid value for {key}: {message}")]
    Invalid {
        /// Offending key or variable.
        key: String,
        /// Description of the problem.
        message: String,
    },
}

/// Settings for a [`crate::Pipeline`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PipelineConfig {
    /// Clustering API root (e.g. `http://localhost:5000/api`).
    pub api_base_url: String,
    /// Skip the API entirely and use the embedded dataset.
    pub use_mock_data: bool,
    /// Per-request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            use_mock_data: false,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl PipelineConfig {
    /// Reads [`ENV_API_URL`], [`ENV_USE_MOCK`] and [`ENV_TIMEOUT_SECS`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the timeout is not a positive
    /// integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`Self::from_env`] but reads variables through `lookup`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] if the timeout is not a positive
    /// integer.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            config.api_base_url = url;
        }
        if let Some(flag) = lookup(ENV_USE_MOCK) {
            config.use_mock_data = flag == "true";
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.request_timeout_secs = parse_timeout(ENV_TIMEOUT_SECS, &raw)?;
        }

        Ok(config)
    }

    /// Parses a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the document is invalid or the timeout is
    /// zero.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        if config.request_timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "request_timeout_secs".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(config)
    }

    /// Reads and parses a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// The request timeout as a [`std::time::Duration`].
    #[must_use]
    pub const fn request_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.request_timeout_secs)
    }
}

fn parse_timeout(key: &str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(secs),
        _ => Err(ConfigError::Invalid {
            key: key.to_string(),
            message: format!("expected a positive number of seconds, got {raw:?}"),
        }),
    }
}
