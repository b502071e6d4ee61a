//! Client configuration.

use reqwest::Url;
use thiserror::Error;

/// Environment variable holding the store's base URL.
pub const API_URL_ENV: &str = "CATALOG_API_URL";

/// Base URL used when `CATALOG_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:4000";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API URL {value:?}: {reason}")]
    InvalidUrl { value: String, reason: String },
    #[error("unsupported API URL scheme {0:?} (expected http or https)")]
    UnsupportedScheme(String),
}

/// Where the remote product store lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    api_url: Url,
}

impl ClientConfig {
    pub fn new(api_url: &str) -> Result<Self, ConfigError> {
        let trimmed = api_url.trim().trim_end_matches('/');
        let url = Url::parse(trimmed).map_err(|e| ConfigError::InvalidUrl {
            value: api_url.to_string(),
            reason: e.to_string(),
        })?;

        match url.scheme() {
            "http" | "https" => Ok(Self { api_url: url }),
            other => Err(ConfigError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Read `CATALOG_API_URL`, falling back to `http://localhost:4000`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like `from_env`, with an explicit variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        match lookup(API_URL_ENV).filter(|v| !v.trim().is_empty()) {
            Some(value) => Self::new(&value),
            None => {
                tracing::debug!("{API_URL_ENV} not set; using {DEFAULT_API_URL}");
                Self::new(DEFAULT_API_URL)
            }
        }
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }
}
