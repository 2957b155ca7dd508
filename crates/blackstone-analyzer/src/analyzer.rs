//! Core Analyzer implementation

use crate::config::AnalyzerConfig;
use crate::error::AnalyzerError;
use crate::parser::{parse_comparison_response, parse_risk_response};
use crate::prompt;
use crate::types::{ComparisonReport, RiskReport};
use blackstone_domain::traits::{CompletionOptions, LlmProvider};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info, warn};

/// LLM-backed analysis over an abstract text-generation capability
pub struct Analyzer<L>
where
    L: LlmProvider,
{
    provider: Arc<L>,
    config: AnalyzerConfig,
}

impl<L> Analyzer<L>
where
    L: LlmProvider + Send + Sync + 'static,
    L::Error: std::fmt::Display,
{
    /// Create a new Analyzer
    pub fn new(provider: L, config: AnalyzerConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Generate a plain-language summary of a legal document
    ///
    /// Never fails: empty input and capability failures both degrade to a
    /// user-visible message in the returned string.
    pub async fn summarize(&self, text: &str) -> String {
        if text.is_empty() {
            return "No text provided for summarization.".to_string();
        }

        let user = prompt::summary_prompt(text, self.config.max_input_chars);
        let options = CompletionOptions {
            max_tokens: self.config.summary_max_tokens,
            temperature: self.config.summary_temperature,
        };

        match self.call_llm(prompt::SUMMARY_SYSTEM, user, options).await {
            Ok(summary) => summary,
            Err(e) => {
                warn!("Error generating summary: {}", e);
                "Error generating summary. Please try again.".to_string()
            }
        }
    }

    /// Identify potential risks in a legal document
    ///
    /// The model is asked for a JSON risk array; the reply goes through a
    /// strict parse. Empty input yields an empty identified list.
    pub async fn identify_risks(&self, text: &str) -> RiskReport {
        if text.is_empty() {
            return RiskReport::Identified(Vec::new());
        }

        let user = prompt::risks_prompt(text, self.config.max_input_chars);
        let options = CompletionOptions {
            max_tokens: self.config.analysis_max_tokens,
            temperature: self.config.analysis_temperature,
        };

        let response = match self.call_llm(prompt::RISKS_SYSTEM, user, options).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Error identifying risks: {}", e);
                return RiskReport::Failed {
                    message: e.to_string(),
                };
            }
        };

        match parse_risk_response(&response) {
            Ok(risks) => {
                info!("Parsed {} risks from model output", risks.len());
                RiskReport::Identified(risks)
            }
            Err(e) => {
                warn!("Risk output not parseable: {}", e);
                RiskReport::Unparseable { raw: response }
            }
        }
    }

    /// Compare two legal documents
    ///
    /// Both inputs must be non-empty; that is the one hard validation
    /// error. Everything past validation degrades softly.
    pub async fn compare(&self, doc1: &str, doc2: &str) -> Result<ComparisonReport, AnalyzerError> {
        if doc1.is_empty() || doc2.is_empty() {
            return Err(AnalyzerError::InvalidInput(
                "Two documents are required for comparison".to_string(),
            ));
        }

        let user = prompt::comparison_prompt(doc1, doc2, self.config.comparison_input_chars);
        let options = CompletionOptions {
            max_tokens: self.config.analysis_max_tokens,
            temperature: self.config.analysis_temperature,
        };

        let response = match self.call_llm(prompt::COMPARISON_SYSTEM, user, options).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Error comparing documents: {}", e);
                return Ok(ComparisonReport::Failed {
                    message: e.to_string(),
                });
            }
        };

        match parse_comparison_response(&response) {
            Ok(value) => Ok(ComparisonReport::Structured(value)),
            Err(e) => {
                warn!("Comparison output not parseable: {}", e);
                Ok(ComparisonReport::Unparseable { raw: response })
            }
        }
    }

    /// Call the capability with the configured timeout
    async fn call_llm(
        &self,
        system: &'static str,
        user: String,
        options: CompletionOptions,
    ) -> Result<String, AnalyzerError> {
        let provider = Arc::clone(&self.provider);

        debug!("Prompt length: {} chars", user.len());

        // The provider trait is sync; run it on the blocking pool
        let call = tokio::task::spawn_blocking(move || {
            provider
                .complete(system, &user, &options)
                .map_err(|e| AnalyzerError::Llm(e.to_string()))
        });

        timeout(self.config.request_timeout(), call)
            .await
            .map_err(|_| AnalyzerError::Timeout)?
            .map_err(|e| AnalyzerError::Llm(format!("Task join error: {}", e)))?
    }
}
