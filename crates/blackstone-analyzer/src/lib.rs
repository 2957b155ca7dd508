//! Blackstone Analyzer
//!
//! LLM-backed document analysis: plain-language summaries, risk
//! identification, and document comparison.
//!
//! # Overview
//!
//! The analyzer programs against the `LlmProvider` trait; which backend
//! answers (a live API, a local server, a test mock) is wiring. Model
//! output that is expected to be structured goes through a strict parse:
//! markdown code fences are stripped, then the payload must deserialize as
//! the expected JSON shape. Anything else becomes a typed `Unparseable`
//! result - there is no substring scanning for brackets in free text.
//!
//! # Failure semantics
//!
//! No capability failure crashes the pipeline. Provider errors and request
//! timeouts degrade to placeholder results that are reported in the
//! returned payload.
//!
//! # Example Usage
//!
//! ```
//! use blackstone_analyzer::{Analyzer, AnalyzerConfig, RiskReport};
//! use blackstone_llm::MockProvider;
//!
//! # async fn example() {
//! let provider = MockProvider::new(r#"[{"description": "d", "severity": "High", "clause": "c"}]"#);
//! let analyzer = Analyzer::new(provider, AnalyzerConfig::default());
//!
//! match analyzer.identify_risks("Some contract text").await {
//!     RiskReport::Identified(risks) => assert_eq!(risks.len(), 1),
//!     _ => unreachable!(),
//! }
//! # }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod compare;
mod config;
mod error;
mod parser;
mod prompt;
mod types;

pub use analyzer::Analyzer;
pub use compare::{ClauseComparison, DocumentComparison, DocumentProfile};
pub use config::AnalyzerConfig;
pub use error::AnalyzerError;
pub use types::{ComparisonReport, LlmRisk, RiskReport};
