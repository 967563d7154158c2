//! Chat completion endpoint
//!
//! Requests are validated client-side before they are sent; invalid
//! parameters never reach the wire.

use crate::client::Client;
use crate::constants::{model, role};
use crate::error::Error;
use crate::models::chat::{ChatCompletionRequest, ChatMessage, ChatResponse};
use reqwest::Method;

impl Client {
    /// Send a chat completion request
    ///
    /// # Errors
    ///
    /// Returns a validation error if the request fails the client-side
    /// checks, or a transport/API/decode error from the round trip.
    pub async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatResponse, Error> {
        validate(request)?;

        let builder = self.request(Method::POST, "/chat/completions").json(request);
        self.send(builder).await
    }

    /// Send a single user message with the default model
    ///
    /// Convenience wrapper around [`Client::create_chat_completion`] for the
    /// common one-shot case.
    pub async fn send_message(&self, content: impl Into<String>) -> Result<ChatResponse, Error> {
        let request = ChatCompletionRequest::new(
            model::GPT_3_5_TURBO,
            vec![ChatMessage::user(content)],
        );

        self.create_chat_completion(&request).await
    }
}

/// Validate a chat completion request before sending
fn validate(request: &ChatCompletionRequest) -> Result<(), Error> {
    if request.messages.is_empty() {
        return Err(Error::NoMessages);
    }

    if !model::SUPPORTED.contains(&request.model.as_str()) {
        return Err(Error::InvalidModel(request.model.clone()));
    }

    for message in &request.messages {
        if !role::SUPPORTED.contains(&message.role.as_str()) {
            return Err(Error::InvalidRole(message.role.clone()));
        }
    }

    if let Some(temperature) = request.temperature {
        if !(0.0..=2.0).contains(&temperature) {
            return Err(Error::InvalidTemperature(temperature));
        }
    }

    if let Some(penalty) = request.presence_penalty {
        if !(-2.0..=2.0).contains(&penalty) {
            return Err(Error::InvalidPresencePenalty(penalty));
        }
    }

    if let Some(penalty) = request.frequency_penalty {
        if !(-2.0..=2.0).contains(&penalty) {
            return Err(Error::InvalidFrequencyPenalty(penalty));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> ChatCompletionRequest {
        ChatCompletionRequest::new(model::GPT_3_5_TURBO, vec![ChatMessage::user("Hello")])
    }

    #[test]
    fn test_valid_request_passes() {
        assert!(validate(&valid_request()).is_ok());
    }

    #[test]
    fn test_no_messages_rejected() {
        let request = ChatCompletionRequest::new(model::GPT_3_5_TURBO, vec![]);
        assert!(matches!(validate(&request), Err(Error::NoMessages)));
    }

    #[test]
    fn test_invalid_model_rejected() {
        let mut request = valid_request();
        request.model = "invalid-model".to_string();
        assert!(matches!(validate(&request), Err(Error::InvalidModel(_))));
    }

    #[test]
    fn test_invalid_role_rejected() {
        let request = ChatCompletionRequest::new(
            model::GPT_3_5_TURBO,
            vec![ChatMessage::new("invalid-role", "Hello")],
        );
        assert!(matches!(validate(&request), Err(Error::InvalidRole(_))));
    }

    #[test]
    fn test_all_supported_roles_pass() {
        let request = ChatCompletionRequest::new(
            model::GPT_3_5_TURBO,
            vec![
                ChatMessage::system("You are helpful"),
                ChatMessage::user("Hello"),
                ChatMessage::assistant("Hi there"),
            ],
        );
        assert!(validate(&request).is_ok());
    }

    #[test]
    fn test_temperature_boundaries() {
        let mut request = valid_request();

        request.temperature = Some(0.0);
        assert!(validate(&request).is_ok());

        request.temperature = Some(2.0);
        assert!(validate(&request).is_ok());

        request.temperature = Some(-0.5);
        assert!(matches!(
            validate(&request),
            Err(Error::InvalidTemperature(_))
        ));

        request.temperature = Some(2.1);
        assert!(matches!(
            validate(&request),
            Err(Error::InvalidTemperature(_))
        ));
    }

    #[test]
    fn test_presence_penalty_boundaries() {
        let mut request = valid_request();

        request.presence_penalty = Some(-2.0);
        assert!(validate(&request).is_ok());

        request.presence_penalty = Some(2.0);
        assert!(validate(&request).is_ok());

        request.presence_penalty = Some(-3.0);
        assert!(matches!(
            validate(&request),
            Err(Error::InvalidPresencePenalty(_))
        ));
    }

    #[test]
    fn test_frequency_penalty_boundaries() {
        let mut request = valid_request();

        request.frequency_penalty = Some(2.0);
        assert!(validate(&request).is_ok());

        request.frequency_penalty = Some(3.0);
        assert!(matches!(
            validate(&request),
            Err(Error::InvalidFrequencyPenalty(_))
        ));
    }

    #[test]
    fn test_unset_parameters_skip_range_checks() {
        // None means "server default", not zero
        assert!(validate(&valid_request()).is_ok());
    }
}
