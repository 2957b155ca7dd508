//! Blackstone LLM Provider Layer
//!
//! Pluggable text-generation and embedding provider implementations.
//!
//! # Architecture
//!
//! This crate provides implementations of the `LlmProvider` and
//! `EmbeddingProvider` traits from `blackstone-domain`. The analysis layer
//! depends only on the traits; which backend answers is wiring.
//!
//! # Providers
//!
//! - `MockProvider`: deterministic mock for testing
//! - `OpenAiProvider` / `OpenAiEmbeddings`: OpenAI-compatible HTTP API
//!
//! # Examples
//!
//! ```
//! use blackstone_llm::MockProvider;
//! use blackstone_domain::traits::{CompletionOptions, LlmProvider};
//!
//! let provider = MockProvider::new("Hello from LLM!");
//! let result = provider
//!     .complete("system", "user prompt", &CompletionOptions::default())
//!     .unwrap();
//! assert_eq!(result, "Hello from LLM!");
//! ```

#![warn(missing_docs)]

pub mod openai;

use blackstone_domain::traits::{CompletionOptions, LlmProvider as LlmProviderTrait};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

pub use openai::{OpenAiEmbeddings, OpenAiProvider};

/// Errors that can occur during LLM operations
#[derive(Error, Debug)]
pub enum LlmError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Invalid response from the capability
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// Model not available
    #[error("Model not available: {0}")]
    ModelNotAvailable(String),

    /// Generic error
    #[error("LLM error: {0}")]
    Other(String),
}

/// Mock LLM provider for deterministic testing
///
/// Returns pre-configured responses without making any network calls.
///
/// # Examples
///
/// ```
/// use blackstone_llm::MockProvider;
/// use blackstone_domain::traits::{CompletionOptions, LlmProvider};
///
/// let mut provider = MockProvider::default();
/// provider.add_response("prompt1", "response1");
///
/// let opts = CompletionOptions::default();
/// assert_eq!(provider.complete("sys", "prompt1", &opts).unwrap(), "response1");
/// assert_eq!(
///     provider.complete("sys", "unknown", &opts).unwrap(),
///     "Default mock response"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: String,
    responses: Arc<Mutex<HashMap<String, String>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a new MockProvider with a fixed response for all prompts
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: response.into(),
            responses: Arc::new(Mutex::new(HashMap::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Add a specific response for a given user prompt
    pub fn add_response(&mut self, prompt: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), response.into());
    }

    /// Configure an error for a specific user prompt
    pub fn add_error(&mut self, prompt: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .insert(prompt.into(), "ERROR".to_string());
    }

    /// Get the number of times complete was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new("Default mock response")
    }
}

impl LlmProviderTrait for MockProvider {
    type Error = LlmError;

    fn complete(
        &self,
        _system: &str,
        user: &str,
        _options: &CompletionOptions,
    ) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(user) {
            if response == "ERROR" {
                return Err(LlmError::Other("Mock error".to_string()));
            }
            return Ok(response.clone());
        }

        Ok(self.default_response.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts() -> CompletionOptions {
        CompletionOptions::default()
    }

    #[test]
    fn test_mock_provider_default() {
        let provider = MockProvider::new("Test response");
        let result = provider.complete("sys", "any prompt", &opts());
        assert_eq!(result.unwrap(), "Test response");
    }

    #[test]
    fn test_mock_provider_specific_responses() {
        let mut provider = MockProvider::default();
        provider.add_response("hello", "world");
        provider.add_response("foo", "bar");

        assert_eq!(provider.complete("s", "hello", &opts()).unwrap(), "world");
        assert_eq!(provider.complete("s", "foo", &opts()).unwrap(), "bar");
        assert_eq!(
            provider.complete("s", "unknown", &opts()).unwrap(),
            "Default mock response"
        );
    }

    #[test]
    fn test_mock_provider_call_count() {
        let provider = MockProvider::new("test");

        assert_eq!(provider.call_count(), 0);
        provider.complete("s", "prompt1", &opts()).unwrap();
        provider.complete("s", "prompt2", &opts()).unwrap();
        assert_eq!(provider.call_count(), 2);
    }

    #[test]
    fn test_mock_provider_error() {
        let mut provider = MockProvider::default();
        provider.add_error("bad prompt");

        let result = provider.complete("s", "bad prompt", &opts());
        assert!(matches!(result.unwrap_err(), LlmError::Other(_)));
    }

    #[test]
    fn test_mock_provider_clone_shares_state() {
        let provider1 = MockProvider::new("test");
        let provider2 = provider1.clone();

        provider1.complete("s", "test", &opts()).unwrap();

        // Both share the same call count through the Arc
        assert_eq!(provider1.call_count(), 1);
        assert_eq!(provider2.call_count(), 1);
    }
}
