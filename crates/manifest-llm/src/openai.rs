//! OpenAI-compatible Provider Implementation
//!
//! Talks to any chat-completions API with the OpenAI wire shape (OpenAI
//! itself, or local gateways exposing the same contract).
//!
//! # Features
//!
//! - Async HTTP communication
//! - Configurable endpoint, model, and API key
//! - Per-request temperature and max_tokens from the completion request
//! - Retry logic with exponential backoff
//! - Timeout handling

use crate::LlmError;
use manifest_domain::traits::{CompletionProvider, CompletionRequest};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// Default timeout for completion requests (60 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// OpenAI-compatible chat-completions provider
pub struct OpenAiProvider {
    endpoint: String,
    model: String,
    api_key: Option<String>,
    client: reqwest::Client,
    max_retries: u32,
}

#[derive(Serialize)]
struct ChatMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChatResponseMessage,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
    content: String,
}

impl OpenAiProvider {
    /// Create a new provider
    ///
    /// # Parameters
    ///
    /// - `endpoint`: API base URL (e.g. `https://api.openai.com`)
    /// - `model`: Model to use (e.g. `gpt-4o-mini`)
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("reqwest client construction cannot fail with static options");

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: None,
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Create a provider against the default endpoint
    pub fn default_endpoint(model: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, model)
    }

    /// Set the API key sent as a bearer token
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Generate a completion
    ///
    /// # Errors
    ///
    /// Returns an error if the service is unreachable, the model does not
    /// exist, or the response wire shape is invalid.
    pub async fn complete(&self, request: &CompletionRequest) -> Result<String, LlmError> {
        let url = format!("{}/v1/chat/completions", self.endpoint);

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![ChatMessage {
                role: "user",
                content: request.prompt.clone(),
            }],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        // Retry loop with exponential backoff
        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            let mut http_request = self.client.post(&url).json(&request_body);
            if let Some(api_key) = &self.api_key {
                http_request = http_request.bearer_auth(api_key);
            }

            match http_request.send().await {
                Ok(response) => {
                    if response.status().is_success() {
                        let parsed: ChatCompletionResponse =
                            response.json().await.map_err(|e| {
                                LlmError::InvalidResponse(format!(
                                    "Failed to parse response: {}",
                                    e
                                ))
                            })?;

                        return parsed
                            .choices
                            .into_iter()
                            .next()
                            .map(|choice| choice.message.content)
                            .ok_or_else(|| {
                                LlmError::InvalidResponse("Response had no choices".to_string())
                            });
                    } else if response.status() == reqwest::StatusCode::NOT_FOUND {
                        return Err(LlmError::ModelNotAvailable(self.model.clone()));
                    } else {
                        let status = response.status();
                        let error_text = response
                            .text()
                            .await
                            .unwrap_or_else(|_| "Unknown error".to_string());
                        last_error = Some(LlmError::Communication(format!(
                            "HTTP {}: {}",
                            status, error_text
                        )));
                    }
                }
                Err(e) => {
                    last_error = Some(LlmError::Communication(format!("Request failed: {}", e)));
                }
            }

            attempts += 1;
            if attempts < self.max_retries {
                // Exponential backoff: 1s, 2s, 4s, etc.
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl CompletionProvider for OpenAiProvider {
    type Error = LlmError;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        // Blocking wrapper for async function
        tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Other(format!("Runtime error: {}", e)))?
            .block_on(async { self.complete(request).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = OpenAiProvider::new("http://localhost:8080", "gpt-4o-mini");
        assert_eq!(provider.endpoint, "http://localhost:8080");
        assert_eq!(provider.model, "gpt-4o-mini");
        assert_eq!(provider.max_retries, DEFAULT_MAX_RETRIES);
        assert!(provider.api_key.is_none());
    }

    #[test]
    fn test_provider_builders() {
        let provider = OpenAiProvider::default_endpoint("gpt-4")
            .with_api_key("sk-test")
            .with_max_retries(5);
        assert_eq!(provider.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(provider.max_retries, 5);
        assert_eq!(provider.api_key.as_deref(), Some("sk-test"));
    }

    #[test]
    fn test_request_body_omits_unset_max_tokens() {
        let body = ChatCompletionRequest {
            model: "m".to_string(),
            messages: vec![],
            temperature: 0.0,
            max_tokens: None,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert!(json.get("max_tokens").is_none());
    }

    #[tokio::test]
    async fn test_error_handling_unreachable() {
        let provider = OpenAiProvider::new("http://localhost:1", "gpt-4o-mini").with_max_retries(1);

        let result = provider
            .complete(&CompletionRequest::new("test"))
            .await;
        assert!(matches!(result, Err(LlmError::Communication(_))));
    }
}
