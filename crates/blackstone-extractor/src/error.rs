//! Error types for the extractor

use thiserror::Error;

/// Errors that can occur during document processing
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// File extension is not one of the supported kinds
    ///
    /// Raised before any extraction is attempted; a client-facing
    /// validation error, unlike extraction failures which degrade softly.
    #[error("Unsupported file type: {0}. Only PDF and TXT files are supported.")]
    UnsupportedFileType(String),

    /// Invalid chunker parameters
    #[error("Invalid chunker configuration: {0}")]
    InvalidChunking(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
