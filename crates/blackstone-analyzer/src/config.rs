//! Configuration for the analyzer

use crate::error::AnalyzerError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for LLM-backed analysis
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// Maximum input characters sent for summary / risk analysis
    pub max_input_chars: usize,

    /// Maximum input characters sent per document for comparison
    pub comparison_input_chars: usize,

    /// Maximum output tokens for summaries
    pub summary_max_tokens: u32,

    /// Sampling temperature for summaries
    pub summary_temperature: f32,

    /// Maximum output tokens for risk and comparison analysis
    pub analysis_max_tokens: u32,

    /// Sampling temperature for risk and comparison analysis
    pub analysis_temperature: f32,

    /// Maximum time for a single capability call (seconds)
    pub request_timeout_secs: u64,
}

impl AnalyzerConfig {
    /// Get the request timeout as a Duration
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), AnalyzerError> {
        if self.max_input_chars == 0 {
            return Err(AnalyzerError::Config(
                "max_input_chars must be greater than 0".to_string(),
            ));
        }
        if self.comparison_input_chars == 0 {
            return Err(AnalyzerError::Config(
                "comparison_input_chars must be greater than 0".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(AnalyzerError::Config(
                "request_timeout_secs must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, AnalyzerError> {
        toml::from_str(toml_str)
            .map_err(|e| AnalyzerError::Config(format!("Failed to parse TOML: {}", e)))
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, AnalyzerError> {
        toml::to_string_pretty(self)
            .map_err(|e| AnalyzerError::Config(format!("Failed to serialize to TOML: {}", e)))
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            max_input_chars: 4_000,
            comparison_input_chars: 2_000,
            summary_max_tokens: 500,
            summary_temperature: 0.3,
            analysis_max_tokens: 1_000,
            analysis_temperature: 0.2,
            request_timeout_secs: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AnalyzerConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_input_budget_rejected() {
        let mut config = AnalyzerConfig::default();
        config.max_input_chars = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let mut config = AnalyzerConfig::default();
        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = AnalyzerConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = AnalyzerConfig::from_toml(&toml_str).unwrap();

        assert_eq!(config.max_input_chars, parsed.max_input_chars);
        assert_eq!(config.request_timeout_secs, parsed.request_timeout_secs);
    }
}
