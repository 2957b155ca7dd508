//! Strict parsing of structured model output
//!
//! Models wrap JSON in markdown code fences often enough that stripping the
//! fence is part of the contract; beyond that the payload must deserialize
//! as the expected shape or the caller gets a typed failure. Bracket
//! scanning over free text is deliberately not implemented.

use crate::error::AnalyzerError;
use crate::types::LlmRisk;
use serde_json::Value;
use tracing::warn;

/// Parse a model response into a risk list
///
/// The response must be a JSON array; entries that fail to deserialize as a
/// risk object are skipped with a warning, matching the "salvage what is
/// well-formed" policy for structured model output.
pub fn parse_risk_response(response: &str) -> Result<Vec<LlmRisk>, AnalyzerError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| AnalyzerError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let entries = json
        .as_array()
        .ok_or_else(|| AnalyzerError::InvalidFormat("Expected JSON array".to_string()))?;

    let mut risks = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        match serde_json::from_value::<LlmRisk>(entry.clone()) {
            Ok(risk) => risks.push(risk),
            Err(e) => {
                warn!("Failed to parse risk entry {}: {}", idx, e);
            }
        }
    }

    Ok(risks)
}

/// Parse a model response into a comparison object
///
/// The response must be a JSON object; its fields are model-defined and
/// passed through as-is.
pub fn parse_comparison_response(response: &str) -> Result<Value, AnalyzerError> {
    let json_str = extract_json(response)?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| AnalyzerError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    if json.is_object() {
        Ok(json)
    } else {
        Err(AnalyzerError::InvalidFormat(
            "Expected JSON object".to_string(),
        ))
    }
}

/// Extract JSON from a response, handling markdown code blocks
fn extract_json(response: &str) -> Result<String, AnalyzerError> {
    let trimmed = response.trim();

    if trimmed.starts_with("```json") || trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return Err(AnalyzerError::InvalidFormat("Empty code block".to_string()));
        }

        // Skip first line (```json or ```) and last line (```)
        let json_lines = &lines[1..lines.len().saturating_sub(1)];
        Ok(json_lines.join("\n"))
    } else {
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_risk_array() {
        let response = r#"[
            {"description": "Broad indemnity", "severity": "High", "clause": "Section 8"},
            {"description": "Auto-renewal", "severity": "Low", "clause": "Section 2"}
        ]"#;

        let risks = parse_risk_response(response).unwrap();
        assert_eq!(risks.len(), 2);
        assert_eq!(risks[0].description, "Broad indemnity");
        assert_eq!(risks[1].severity, "Low");
    }

    #[test]
    fn test_parse_risks_with_markdown_fence() {
        let response = "```json\n[{\"description\": \"d\", \"severity\": \"Medium\", \"clause\": \"c\"}]\n```";

        let risks = parse_risk_response(response).unwrap();
        assert_eq!(risks.len(), 1);
        assert_eq!(risks[0].severity, "Medium");
    }

    #[test]
    fn test_parse_risks_skips_malformed_entries() {
        let response = r#"[
            {"description": "ok", "severity": "High", "clause": "c"},
            {"description": "missing fields"},
            {"description": "also ok", "severity": "Low", "clause": "c2"}
        ]"#;

        let risks = parse_risk_response(response).unwrap();
        assert_eq!(risks.len(), 2);
        assert_eq!(risks[0].description, "ok");
        assert_eq!(risks[1].description, "also ok");
    }

    #[test]
    fn test_parse_risks_rejects_free_text() {
        // Free text with an embedded array must NOT be salvaged by bracket
        // scanning; it is an invalid-format result
        let response = "Here are the risks I found: [1, 2] hope that helps!";
        assert!(parse_risk_response(response).is_err());
    }

    #[test]
    fn test_parse_risks_rejects_object() {
        let response = r#"{"description": "not an array"}"#;
        assert!(parse_risk_response(response).is_err());
    }

    #[test]
    fn test_parse_comparison_object() {
        let response = r#"{"obligations": "Doc 1 is stricter", "risk_allocation": "similar"}"#;

        let value = parse_comparison_response(response).unwrap();
        assert_eq!(value["obligations"], "Doc 1 is stricter");
    }

    #[test]
    fn test_parse_comparison_rejects_array() {
        assert!(parse_comparison_response("[1, 2, 3]").is_err());
    }

    #[test]
    fn test_parse_comparison_rejects_free_text() {
        assert!(parse_comparison_response("The documents differ in scope.").is_err());
    }

    #[test]
    fn test_extract_json_from_fence_without_language() {
        let response = "```\n{\"key\": \"value\"}\n```";
        let result = extract_json(response).unwrap();
        assert!(result.contains("key"));
    }
}
