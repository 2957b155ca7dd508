//! Error types for the engine

use thiserror::Error;

/// Errors that can occur at the pipeline boundary
#[derive(Error, Debug)]
pub enum EngineError {
    /// Document processing error (including unsupported file types)
    #[error("{0}")]
    Extractor(#[from] blackstone_extractor::ExtractorError),

    /// Storage error
    #[error("{0}")]
    Store(#[from] blackstone_store::StoreError),

    /// Unknown document id
    ///
    /// Surfaced to the caller as a not-found condition, never silently
    /// substituted with a default document.
    #[error("Document not found: {0}")]
    DocumentNotFound(String),
}
