//! OpenAI-compatible provider implementation
//!
//! Talks to any endpoint that speaks the OpenAI chat-completions and
//! embeddings wire format. The rest of the system never sees this crate's
//! request/response shapes; it programs against the domain traits.
//!
//! # Features
//!
//! - Async HTTP with a hard request timeout
//! - Retry logic with exponential backoff
//! - Input cap for the embeddings endpoint

use crate::LlmError;
use blackstone_domain::traits::{CompletionOptions, EmbeddingProvider, LlmProvider as LlmProviderTrait};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "https://api.openai.com";

/// Default timeout for API requests (30 seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default number of retry attempts
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Character budget for embedding inputs
pub const EMBEDDING_CHAR_BUDGET: usize = 8_000;

/// Dimension of the remote embedding model
pub const EMBEDDING_DIMENSION: usize = 1536;

/// OpenAI-compatible chat-completions provider
pub struct OpenAiProvider {
    endpoint: String,
    model: String,
    api_key: String,
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
    max_tokens: u32,
    temperature: f32,
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
    /// - `model`: model name (e.g. `gpt-4o`)
    /// - `api_key`: bearer token
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("reqwest client configuration is valid");

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Create a provider against the default endpoint
    pub fn default_endpoint(model: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self::new(DEFAULT_ENDPOINT, model, api_key)
    }

    /// Set the maximum number of retry attempts
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Generate a completion from system and user role messages
    pub async fn complete(
        &self,
        system: &str,
        user: &str,
        options: &CompletionOptions,
    ) -> Result<String, LlmError> {
        let url = format!("{}/v1/chat/completions", self.endpoint);

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system.to_string(),
                },
                ChatMessage {
                    role: "user",
                    content: user.to_string(),
                },
            ],
            max_tokens: options.max_tokens,
            temperature: options.temperature,
        };

        let mut attempts = 0;
        let mut last_error = None;

        while attempts < self.max_retries {
            match self
                .client
                .post(&url)
                .bearer_auth(&self.api_key)
                .json(&request_body)
                .send()
                .await
            {
                Ok(response) => {
                    if response.status().is_success() {
                        match response.json::<ChatCompletionResponse>().await {
                            Ok(completion) => {
                                return completion
                                    .choices
                                    .into_iter()
                                    .next()
                                    .map(|c| c.message.content.trim().to_string())
                                    .ok_or_else(|| {
                                        LlmError::InvalidResponse("No choices returned".to_string())
                                    });
                            }
                            Err(e) => {
                                return Err(LlmError::InvalidResponse(format!(
                                    "Failed to parse response: {}",
                                    e
                                )));
                            }
                        }
                    } else if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
                        last_error = Some(LlmError::RateLimitExceeded);
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
                // Exponential backoff: 1s, 2s, 4s, ...
                let delay = Duration::from_secs(2u64.pow(attempts - 1));
                tokio::time::sleep(delay).await;
            }
        }

        Err(last_error
            .unwrap_or_else(|| LlmError::Communication("Max retries exceeded".to_string())))
    }
}

impl LlmProviderTrait for OpenAiProvider {
    type Error = LlmError;

    fn complete(
        &self,
        system: &str,
        user: &str,
        options: &CompletionOptions,
    ) -> Result<String, Self::Error> {
        // Blocking wrapper for the async implementation
        tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Other(format!("Runtime error: {}", e)))?
            .block_on(async { self.complete(system, user, options).await })
    }
}

/// OpenAI-compatible embeddings provider
///
/// The input is capped at [`EMBEDDING_CHAR_BUDGET`] characters before the
/// request is made. Failures surface as errors; callers that need the
/// pipeline to keep working wrap this in the store's fallback combinator.
pub struct OpenAiEmbeddings {
    endpoint: String,
    model: String,
    api_key: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct EmbeddingRequest {
    model: String,
    input: String,
}

#[derive(Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingData>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

impl OpenAiEmbeddings {
    /// Create a new embeddings provider
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("reqwest client configuration is valid");

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            client,
        }
    }

    /// Embed text via the remote capability
    pub async fn embed(&self, text: &str) -> Result<Vec<f32>, LlmError> {
        let url = format!("{}/v1/embeddings", self.endpoint);
        let input: String = text.chars().take(EMBEDDING_CHAR_BUDGET).collect();

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&EmbeddingRequest {
                model: self.model.clone(),
                input,
            })
            .send()
            .await
            .map_err(|e| LlmError::Communication(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(LlmError::Communication(format!(
                "HTTP {}",
                response.status()
            )));
        }

        let parsed: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| LlmError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        parsed
            .data
            .into_iter()
            .next()
            .map(|d| d.embedding)
            .ok_or_else(|| LlmError::InvalidResponse("No embedding returned".to_string()))
    }
}

impl EmbeddingProvider for OpenAiEmbeddings {
    type Error = LlmError;

    fn embed(&self, text: &str) -> Result<Vec<f32>, Self::Error> {
        tokio::runtime::Runtime::new()
            .map_err(|e| LlmError::Other(format!("Runtime error: {}", e)))?
            .block_on(async { self.embed(text).await })
    }

    fn dimension(&self) -> usize {
        EMBEDDING_DIMENSION
    }
}
