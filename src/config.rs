//! Client configuration management
//!
//! This module handles loading and validating client configuration from TOML
//! files or environment variables.

use crate::error::Error;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default request timeout in seconds
const DEFAULT_REQUEST_TIMEOUT: u64 = 90;

/// Client configuration
///
/// Holds everything the [`crate::Client`] needs to reach the API: the base
/// URL, the API key, an optional organization ID, and the request timeout.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// API key (required)
    pub api_key: String,

    /// Base URL for API requests
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Organization ID (optional)
    #[serde(default)]
    pub organization_id: Option<String>,

    /// Request timeout in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_request_timeout() -> u64 {
    DEFAULT_REQUEST_TIMEOUT
}

impl ClientConfig {
    /// Create a configuration with the given API key and defaults for
    /// everything else
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: default_base_url(),
            organization_id: None,
            request_timeout: default_request_timeout(),
        }
    }

    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the file cannot be read or parsed, and
    /// [`Error::ApiKeyRequired`] if the API key field is empty.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read configuration file: {e}")))?;

        let config: ClientConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse TOML configuration: {e}")))?;

        if config.api_key.is_empty() {
            return Err(Error::ApiKeyRequired);
        }

        Ok(config)
    }

    /// Load configuration from the environment
    ///
    /// Reads `OPENAI_API_KEY`, `OPENAI_BASE_URL`, `OPENAI_ORGANIZATION`, and
    /// `OPENAI_REQUEST_TIMEOUT`, picking up a `.env` file when present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ApiKeyRequired`] if `OPENAI_API_KEY` is unset or
    /// empty, and [`Error::Config`] if the timeout does not parse.
    pub fn from_env() -> Result<Self, Error> {
        dotenv::dotenv().ok();

        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.is_empty())
            .ok_or(Error::ApiKeyRequired)?;

        let base_url =
            std::env::var("OPENAI_BASE_URL").unwrap_or_else(|_| default_base_url());

        let organization_id = std::env::var("OPENAI_ORGANIZATION")
            .ok()
            .filter(|org| !org.is_empty());

        let request_timeout = match std::env::var("OPENAI_REQUEST_TIMEOUT") {
            Ok(value) => value
                .parse::<u64>()
                .map_err(|e| Error::Config(format!("invalid OPENAI_REQUEST_TIMEOUT: {e}")))?,
            Err(_) => default_request_timeout(),
        };

        Ok(Self {
            api_key,
            base_url,
            organization_id,
            request_timeout,
        })
    }

    /// Validate API key format
    ///
    /// Checks that the API key is non-empty and carries the `sk-` prefix
    /// the API issues.
    pub fn validate_api_key(&self) -> bool {
        !self.api_key.is_empty() && self.api_key.starts_with("sk-")
    }
}
