//! Trait definitions for external capabilities
//!
//! These traits define the boundaries between domain logic and
//! infrastructure. Implementations live in other crates (blackstone-llm,
//! blackstone-store); the core never depends on a concrete vendor API.

/// Sampling options for a text-generation request
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionOptions {
    /// Maximum output length in tokens
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,
}

impl Default for CompletionOptions {
    fn default() -> Self {
        Self {
            max_tokens: 500,
            temperature: 0.3,
        }
    }
}

/// Trait for text-generation capability
///
/// Implemented by the infrastructure layer (blackstone-llm)
pub trait LlmProvider {
    /// Error type for generation operations
    type Error;

    /// Generate text from a system role and a user role message
    fn complete(
        &self,
        system: &str,
        user: &str,
        options: &CompletionOptions,
    ) -> Result<String, Self::Error>;
}

/// Trait for text-embedding capability
///
/// Implemented by the infrastructure layer (blackstone-store provides the
/// deterministic synthetic model, blackstone-llm the remote one)
pub trait EmbeddingProvider {
    /// Error type for embedding operations
    type Error;

    /// Generate a fixed-length embedding vector for the given text
    fn embed(&self, text: &str) -> Result<Vec<f32>, Self::Error>;

    /// Get the dimension of embeddings produced by this provider
    fn dimension(&self) -> usize;
}
