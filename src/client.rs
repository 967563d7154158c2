//! OpenAI API client
//!
//! This module provides the async HTTP client shared by all endpoint
//! groups. It attaches authentication headers, classifies non-success
//! responses, and decodes JSON bodies into typed results.

use crate::config::ClientConfig;
use crate::error::Error;
use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, warn};

/// OpenAI async client
///
/// Each method is a single stateless round trip; the underlying
/// [`reqwest::Client`] is reused across calls.
#[derive(Debug)]
pub struct Client {
    http: reqwest::Client,
    config: ClientConfig,
}

impl Client {
    /// Create a new client with the given API key and default configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::ApiKeyRequired`] if the key is empty.
    pub fn new(api_key: impl Into<String>) -> Result<Self, Error> {
        Self::with_config(ClientConfig::new(api_key))
    }

    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns [`Error::ApiKeyRequired`] if the configured key is empty, or
    /// [`Error::Transport`] if the HTTP client cannot be built.
    pub fn with_config(config: ClientConfig) -> Result<Self, Error> {
        if config.api_key.is_empty() {
            return Err(Error::ApiKeyRequired);
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout))
            .build()
            .map_err(|e| Error::Transport(e.to_string()))?;

        Ok(Self { http, config })
    }

    /// The configuration this client was built with
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Build a request against `path` with auth and content headers applied
    pub(crate) fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);

        let mut builder = self
            .http
            .request(method, &url)
            .bearer_auth(&self.config.api_key)
            .header("Accept", "application/json");

        if let Some(org) = &self.config.organization_id {
            builder = builder.header("OpenAI-Organization", org);
        }

        builder
    }

    /// Send a request and decode the JSON response body
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] on connection failure, a
    /// status-classified error for non-2xx responses, and [`Error::Decode`]
    /// if the body does not match `T`.
    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, Error> {
        let response = self.dispatch(builder).await?;

        response
            .json()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }

    /// Send a request and return the raw response body as text
    pub(crate) async fn send_text(&self, builder: RequestBuilder) -> Result<String, Error> {
        let response = self.dispatch(builder).await?;

        response
            .text()
            .await
            .map_err(|e| Error::Decode(e.to_string()))
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<reqwest::Response, Error> {
        let response = builder
            .send()
            .await
            .map_err(|e| Error::Transport(e.to_string()))?;

        let status = response.status();
        debug!(status = status.as_u16(), "API response received");

        if !status.is_success() {
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            let classified_error = classify_api_error(&error_text);
            warn!(status = status.as_u16(), error = %classified_error, "API request failed");

            return Err(match status.as_u16() {
                401 => Error::Authentication(classified_error),
                429 => Error::RateLimit(classified_error),
                400 => Error::BadRequest(classified_error),
                _ => Error::Api {
                    status: status.as_u16(),
                    message: classified_error,
                },
            });
        }

        Ok(response)
    }
}

/// Classify API error bodies and rewrite well-known failure modes into
/// actionable messages
fn classify_api_error(error_detail: &str) -> String {
    let error_lower = error_detail.to_lowercase();

    // Region/country restrictions
    if error_lower.contains("unsupported_country_region_territory")
        || error_lower.contains("country, region, or territory not supported")
    {
        return "OpenAI API is not available in your region.".to_string();
    }

    // API key issues
    if error_lower.contains("invalid_api_key") || error_lower.contains("unauthorized") {
        return "Invalid API key. Please check your OPENAI_API_KEY configuration.".to_string();
    }

    // Rate limiting
    if error_lower.contains("rate_limit") || error_lower.contains("quota") {
        return "Rate limit exceeded. Please wait and try again, or upgrade your API plan."
            .to_string();
    }

    // Model not found
    if error_lower.contains("model")
        && (error_lower.contains("not found") || error_lower.contains("does not exist"))
    {
        return "Model not found. Please check the requested model identifier.".to_string();
    }

    // Billing issues
    if error_lower.contains("billing") || error_lower.contains("payment") {
        return "Billing issue. Please check your OpenAI account billing status.".to_string();
    }

    // Default: return original message
    error_detail.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_empty_api_key() {
        let err = Client::new("").unwrap_err();
        assert!(matches!(err, Error::ApiKeyRequired));

        let err = Client::with_config(ClientConfig::new("")).unwrap_err();
        assert!(matches!(err, Error::ApiKeyRequired));
    }

    #[test]
    fn test_new_accepts_api_key() {
        let client = Client::new("sk-test123").unwrap();
        assert_eq!(client.config().api_key, "sk-test123");
        assert_eq!(client.config().base_url, crate::config::DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_debug_formats() {
        let client = Client::new("sk-test123").unwrap();
        let rendered = format!("{client:?}");
        assert!(rendered.contains("ClientConfig"));
    }

    #[tokio::test]
    async fn test_unreachable_server_yields_transport_error() {
        let mut config = ClientConfig::new("sk-test123");
        config.base_url = "http://127.0.0.1:9".to_string();
        config.request_timeout = 5;

        let client = Client::with_config(config).unwrap();
        let err = client.list_files().await.unwrap_err();
        assert!(matches!(err, Error::Transport(_)));
    }

    #[test]
    fn test_classify_region_error() {
        let error = "unsupported_country_region_territory";
        let result = classify_api_error(error);
        assert!(result.contains("region"));
    }

    #[test]
    fn test_classify_auth_error() {
        let error = "invalid_api_key: The API key is invalid";
        let result = classify_api_error(error);
        assert!(result.contains("API key"));
    }

    #[test]
    fn test_classify_rate_limit_error() {
        let error = "rate_limit_exceeded: slow down";
        let result = classify_api_error(error);
        assert!(result.contains("Rate limit"));
    }

    #[test]
    fn test_classify_missing_model_error() {
        let error = "The model `gpt-9` does not exist";
        let result = classify_api_error(error);
        assert!(result.contains("Model not found"));
    }

    #[test]
    fn test_classify_billing_error() {
        let error = "billing hard limit has been reached";
        let result = classify_api_error(error);
        assert!(result.contains("Billing"));
    }

    #[test]
    fn test_classify_unknown_error_passes_through() {
        let error = "something else entirely";
        assert_eq!(classify_api_error(error), error);
    }
}
