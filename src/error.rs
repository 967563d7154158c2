//! Error types for API interactions
//!
//! All failures surface to the caller as a variant of [`Error`]; nothing is
//! retried or recovered internally.

/// Error types that can occur during OpenAI API interactions
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("API key is required")]
    ApiKeyRequired,

    #[error("invalid model `{0}`")]
    InvalidModel(String),

    #[error("no messages provided")]
    NoMessages,

    #[error("invalid role `{0}`: only `user`, `system` and `assistant` are supported")]
    InvalidRole(String),

    #[error("invalid temperature {0}: must be between 0 and 2")]
    InvalidTemperature(f32),

    #[error("invalid presence penalty {0}: must be between -2 and 2")]
    InvalidPresencePenalty(f32),

    #[error("invalid frequency penalty {0}: must be between -2 and 2")]
    InvalidFrequencyPenalty(f32),

    #[error("authentication failed: {0}")]
    Authentication(String),

    #[error("rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("configuration error: {0}")]
    Config(String),
}
