//! Output formatting for the CLI.

use crate::error::Result;
use blackstone_analyzer::{ComparisonReport, DocumentComparison, RiskReport};
use blackstone_domain::{Risk, SearchHit, Severity};
use blackstone_engine::ProcessedDocument;
use colored::*;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    json: bool,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(json: bool, color_enabled: bool) -> Self {
        Self {
            json,
            color_enabled,
        }
    }

    /// Whether JSON output was requested.
    pub fn json(&self) -> bool {
        self.json
    }

    /// Format a processed document.
    pub fn format_processed(&self, processed: &ProcessedDocument) -> Result<String> {
        if self.json {
            return Ok(serde_json::to_string_pretty(processed)?);
        }

        let mut out = String::new();
        out.push_str(&self.colorize(&format!("── {} ──", processed.filename), "cyan"));
        out.push('\n');
        out.push_str(&format!("id: {}\n", processed.document_id));

        if processed.content_preview.is_empty() {
            out.push_str(&self.warning("No text could be extracted."));
            out.push('\n');
        }

        out.push_str(&format!(
            "parties: {}\ndates: {}\nmonetary values: {}\nlocations: {}\n",
            processed.entities.parties.join(", "),
            processed.entities.dates.join(", "),
            processed.entities.monetary_values.join(", "),
            processed.entities.locations.join(", "),
        ));

        if processed.clauses.is_empty() {
            out.push_str("clauses: none detected\n");
        } else {
            out.push_str("clauses:\n");
            for clause in &processed.clauses {
                out.push_str(&format!(
                    "  {} ({})\n",
                    clause.clause_type,
                    clause.previews.len()
                ));
                for preview in &clause.previews {
                    out.push_str(&format!("    {}\n", preview));
                }
            }
        }

        Ok(out)
    }

    /// Format a heuristic risk list.
    pub fn format_risks(&self, risks: &[Risk]) -> Result<String> {
        if self.json {
            let values: Vec<serde_json::Value> = risks
                .iter()
                .map(|r| {
                    serde_json::json!({
                        "severity": r.severity.as_str(),
                        "description": r.description,
                        "details": r.details,
                        "clause_type": r.clause_type.as_str(),
                    })
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&values)?);
        }

        if risks.is_empty() {
            return Ok(self.colorize("No risks identified.", "green"));
        }

        let mut out = String::new();
        for risk in risks {
            out.push_str(&format!(
                "{} {} [{}]\n    {}\n",
                self.severity_tag(risk.severity),
                risk.description,
                risk.clause_type,
                risk.details
            ));
        }
        Ok(out)
    }

    /// Format the outcome of LLM risk identification.
    pub fn format_llm_risks(&self, report: &RiskReport) -> Result<String> {
        if self.json {
            let value = match report {
                RiskReport::Identified(risks) => serde_json::json!({ "risks": risks }),
                RiskReport::Unparseable { raw } => serde_json::json!({ "unparseable": raw }),
                RiskReport::Failed { message } => serde_json::json!({ "error": message }),
            };
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        Ok(match report {
            RiskReport::Identified(risks) if risks.is_empty() => {
                self.colorize("Model identified no risks.", "green")
            }
            RiskReport::Identified(risks) => {
                let mut out = String::new();
                for risk in risks {
                    out.push_str(&format!(
                        "[{}] {}\n    {}\n",
                        risk.severity, risk.description, risk.clause
                    ));
                }
                out
            }
            RiskReport::Unparseable { raw } => format!(
                "{}\n{}",
                self.warning("Model output was not in the expected format; raw reply:"),
                raw
            ),
            RiskReport::Failed { message } => self.error(&format!("Risk analysis failed: {}", message)),
        })
    }

    /// Format search hits.
    pub fn format_hits(&self, hits: &[SearchHit]) -> Result<String> {
        if self.json {
            let values: Vec<serde_json::Value> = hits
                .iter()
                .map(|h| {
                    serde_json::json!({
                        "score": h.score,
                        "title": h.title,
                        "document_id": h.document_id.to_string(),
                        "chunk_index": h.chunk_index,
                        "clause_type": h.clause_type.map(|c| c.as_str()),
                        "content": h.content,
                    })
                })
                .collect();
            return Ok(serde_json::to_string_pretty(&values)?);
        }

        if hits.is_empty() {
            return Ok(self.colorize("No results found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Score", "Title", "Chunk", "Clause", "Content"]);

        for hit in hits {
            let content: String = hit.content.chars().take(60).collect();
            builder.push_record([
                &format!("{:.3}", hit.score),
                &hit.title,
                &hit.chunk_index.to_string(),
                hit.clause_type.map(|c| c.as_str()).unwrap_or("-"),
                &content,
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format a structural document comparison.
    pub fn format_comparison(&self, comparison: &DocumentComparison) -> Result<String> {
        if self.json {
            let clauses: Vec<serde_json::Value> = comparison
                .clauses
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "clause_type": c.clause_type.as_str(),
                        "doc1_count": c.doc1_count,
                        "doc2_count": c.doc2_count,
                    })
                })
                .collect();
            let value = serde_json::json!({
                "overview": {
                    "doc1_name": comparison.doc1_name,
                    "doc2_name": comparison.doc2_name,
                    "doc1_word_count": comparison.doc1_word_count,
                    "doc2_word_count": comparison.doc2_word_count,
                },
                "clauses": clauses,
                "risks": {
                    "doc1_risks": comparison.doc1_risks,
                    "doc2_risks": comparison.doc2_risks,
                    "doc1_high_risks": comparison.doc1_high_risks,
                    "doc2_high_risks": comparison.doc2_high_risks,
                },
                "entities": {
                    "doc1_entities": comparison.doc1_entities,
                    "doc2_entities": comparison.doc2_entities,
                },
            });
            return Ok(serde_json::to_string_pretty(&value)?);
        }

        let mut builder = Builder::default();
        builder.push_record(["", &comparison.doc1_name, &comparison.doc2_name]);
        builder.push_record([
            "words",
            &comparison.doc1_word_count.to_string(),
            &comparison.doc2_word_count.to_string(),
        ]);
        builder.push_record([
            "entities",
            &comparison.doc1_entities.to_string(),
            &comparison.doc2_entities.to_string(),
        ]);
        builder.push_record([
            "risks (high)",
            &format!("{} ({})", comparison.doc1_risks, comparison.doc1_high_risks),
            &format!("{} ({})", comparison.doc2_risks, comparison.doc2_high_risks),
        ]);

        for clause in &comparison.clauses {
            if clause.doc1_count == 0 && clause.doc2_count == 0 {
                continue;
            }
            builder.push_record([
                clause.clause_type.as_str(),
                &clause.doc1_count.to_string(),
                &clause.doc2_count.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format the outcome of an LLM comparison.
    pub fn format_llm_comparison(&self, report: &ComparisonReport) -> Result<String> {
        Ok(match report {
            ComparisonReport::Structured(value) => serde_json::to_string_pretty(value)?,
            ComparisonReport::Unparseable { raw } => format!(
                "{}\n{}",
                self.warning("Model output was not in the expected format; raw reply:"),
                raw
            ),
            ComparisonReport::Failed { message } => {
                self.error(&format!("Comparison failed: {}", message))
            }
        })
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Render a severity tag with its conventional color.
    fn severity_tag(&self, severity: Severity) -> String {
        let tag = format!("[{}]", severity);
        if !self.color_enabled {
            return tag;
        }
        match severity {
            Severity::High => tag.red().to_string(),
            Severity::Medium => tag.yellow().to_string(),
            Severity::Low => tag.blue().to_string(),
        }
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackstone_domain::{ClauseType, DocumentId};

    fn sample_risk() -> Risk {
        Risk {
            severity: Severity::High,
            description: "Non-compete clause may have enforceability issues".to_string(),
            details: "details".to_string(),
            clause_type: ClauseType::NonCompete,
        }
    }

    fn sample_hit() -> SearchHit {
        SearchHit {
            content: "Either party may terminate.".to_string(),
            document_id: DocumentId::new(),
            title: "contract.txt".to_string(),
            chunk_index: 0,
            clause_type: Some(ClauseType::Termination),
            score: 0.97,
        }
    }

    #[test]
    fn test_risks_json_format() {
        let formatter = Formatter::new(true, false);
        let output = formatter.format_risks(&[sample_risk()]).unwrap();
        assert!(output.contains("\"severity\": \"High\""));
        assert!(output.contains("non_compete"));
    }

    #[test]
    fn test_risks_human_format() {
        let formatter = Formatter::new(false, false);
        let output = formatter.format_risks(&[sample_risk()]).unwrap();
        assert!(output.contains("[High]"));
        assert!(output.contains("enforceability"));
    }

    #[test]
    fn test_empty_risks() {
        let formatter = Formatter::new(false, false);
        let output = formatter.format_risks(&[]).unwrap();
        assert!(output.contains("No risks identified"));
    }

    #[test]
    fn test_hits_table_format() {
        let formatter = Formatter::new(false, false);
        let output = formatter.format_hits(&[sample_hit()]).unwrap();
        assert!(output.contains("Score"));
        assert!(output.contains("contract.txt"));
        assert!(output.contains("termination"));
    }

    #[test]
    fn test_hits_empty() {
        let formatter = Formatter::new(false, false);
        let output = formatter.format_hits(&[]).unwrap();
        assert!(output.contains("No results found"));
    }

    #[test]
    fn test_llm_risks_unparseable() {
        let formatter = Formatter::new(false, false);
        let report = RiskReport::Unparseable {
            raw: "free text reply".to_string(),
        };
        let output = formatter.format_llm_risks(&report).unwrap();
        assert!(output.contains("free text reply"));
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(false, false);
        assert_eq!(formatter.success("done"), "✓ done");
    }
}
