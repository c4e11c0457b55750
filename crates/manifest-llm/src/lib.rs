//! Manifest LLM Provider Layer
//!
//! Implementations of the
//! [`CompletionProvider`](manifest_domain::traits::CompletionProvider) trait
//! from `manifest-domain`. Two call profiles exist upstream: free-form
//! answer generation (temperature 0.1, capped length) and strict-JSON
//! extraction (temperature 0); both go through the same trait.
//!
//! # Providers
//!
//! - `MockProvider`: Deterministic mock for testing
//! - `OpenAiProvider`: OpenAI-compatible chat-completions HTTP API
//!
//! # Examples
//!
//! ```
//! use manifest_llm::MockProvider;
//! use manifest_domain::traits::{CompletionProvider, CompletionRequest};
//!
//! let provider = MockProvider::new("The rate is $500 [Source 1].");
//! let request = CompletionRequest::new("question prompt").with_temperature(0.1);
//! assert_eq!(provider.complete(&request).unwrap(), "The rate is $500 [Source 1].");
//! ```

#![warn(missing_docs)]

pub mod openai;

use manifest_domain::traits::{CompletionProvider, CompletionRequest};
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::OpenAiProvider;

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from LLM
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock completion provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
/// Responses are keyed by prompt substring, since real prompts are long
/// assembled blocks; the first configured key found in the prompt wins, in
/// insertion order.
///
/// # Examples
///
/// ```
/// use manifest_llm::MockProvider;
/// use manifest_domain::traits::{CompletionProvider, CompletionRequest};
///
/// let mut provider = MockProvider::new("default answer");
/// provider.add_response("CARRIER_RC", r#"{"rate": 400}"#);
///
/// let request = CompletionRequest::new("Extract from this CARRIER_RC document");
/// assert_eq!(provider.complete(&request).unwrap(), r#"{"rate": 400}"#);
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<Vec<(String, String)>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response returned when the prompt contains `needle`
    pub fn add_response(&mut self, needle: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push((needle.into(), response.into()));
    }

    /// Configure an error for prompts containing `needle`
    pub fn add_error(&mut self, needle: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push((needle.into(), "ERROR".to_string()));
    }

    /// Get the number of completions requested so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Get a copy of every request seen so far, in order
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl CompletionProvider for MockProvider {
    type Error = LlmError;

    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error> {
        self.requests.lock().unwrap().push(request.clone());

        let responses = self.responses.lock().unwrap();
        for (needle, response) in responses.iter() {
            if request.prompt.contains(needle) {
                if response == "ERROR" {
                    return Err(LlmError::Other("Mock error".to_string()));
                }
                return Ok(response.clone());
            }
        }

        Ok(self.default_response.clone())
    }
}
