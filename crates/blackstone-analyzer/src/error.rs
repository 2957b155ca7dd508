//! Error types for the analyzer

use thiserror::Error;

/// Errors that can occur during LLM-backed analysis
#[derive(Error, Debug)]
pub enum AnalyzerError {
    /// Capability (provider) error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Request exceeded the configured timeout
    #[error("Analysis timeout")]
    Timeout,

    /// Model output did not match the expected structured format
    #[error("Invalid response format: {0}")]
    InvalidFormat(String),

    /// Input validation failed (e.g. comparison with an empty document)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for AnalyzerError {
    fn from(e: serde_json::Error) -> Self {
        AnalyzerError::InvalidFormat(e.to_string())
    }
}
