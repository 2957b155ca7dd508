//! Configuration for document processing

use crate::chunking::{Chunker, DEFAULT_CHUNK_SIZE, DEFAULT_OVERLAP};
use crate::error::ExtractorError;
use serde::{Deserialize, Serialize};

/// Configuration for the document processing pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessorConfig {
    /// Chunk window size in characters
    pub chunk_size: usize,

    /// Overlap between consecutive chunks in characters
    pub overlap: usize,
}

impl ProcessorConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ExtractorError> {
        if self.overlap == 0 {
            return Err(ExtractorError::Config(
                "overlap must be greater than 0".to_string(),
            ));
        }
        if self.chunk_size <= self.overlap {
            return Err(ExtractorError::Config(format!(
                "chunk_size {} must be greater than overlap {}",
                self.chunk_size, self.overlap
            )));
        }
        Ok(())
    }

    /// Build a chunker from this configuration
    pub fn chunker(&self) -> Result<Chunker, ExtractorError> {
        Chunker::new(self.chunk_size, self.overlap)
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ExtractorError> {
        toml::from_str(toml_str)
            .map_err(|e| ExtractorError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, ExtractorError> {
        toml::to_string_pretty(self)
            .map_err(|e| ExtractorError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_OVERLAP,
        }
    }
}
