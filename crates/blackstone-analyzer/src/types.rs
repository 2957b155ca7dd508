//! Result types for LLM-backed analysis

use serde::{Deserialize, Serialize};

/// A risk as reported by the text-generation capability
///
/// Severity is carried verbatim: the model is asked for High/Medium/Low but
/// the wire value is not constrained, and a surprising label should reach
/// the caller rather than fail the parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LlmRisk {
    /// Short description of the risk
    pub description: String,

    /// Severity label as produced by the model
    pub severity: String,

    /// The clause or text that indicates the risk
    pub clause: String,
}

/// Outcome of LLM risk identification
#[derive(Debug, Clone, PartialEq)]
pub enum RiskReport {
    /// The model produced a parseable risk list
    Identified(Vec<LlmRisk>),

    /// The model replied, but not in the expected structured format
    Unparseable {
        /// Raw model output, for diagnostics
        raw: String,
    },

    /// The capability call itself failed (network, quota, timeout)
    Failed {
        /// Human-readable failure description
        message: String,
    },
}

/// Outcome of LLM document comparison
#[derive(Debug, Clone, PartialEq)]
pub enum ComparisonReport {
    /// The model produced a parseable JSON object
    Structured(serde_json::Value),

    /// The model replied, but not in the expected structured format
    Unparseable {
        /// Raw model output, for diagnostics
        raw: String,
    },

    /// The capability call itself failed (network, quota, timeout)
    Failed {
        /// Human-readable failure description
        message: String,
    },
}
