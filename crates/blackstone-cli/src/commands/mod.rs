//! CLI command implementations.

mod analyze;
mod compare;
mod risks;
mod search;
mod summarize;

pub use analyze::execute_analyze;
pub use compare::execute_compare;
pub use risks::execute_risks;
pub use search::execute_search;
pub use summarize::execute_summarize;

use crate::cli::ProviderArgs;
use crate::error::Result;
use blackstone_analyzer::{Analyzer, AnalyzerConfig};
use blackstone_engine::{Engine, ProcessedDocument};
use blackstone_llm::OpenAiProvider;

/// Read a file and run it through document processing.
pub(crate) fn process_file(engine: &Engine, path: &str) -> Result<ProcessedDocument> {
    let bytes = std::fs::read(path)?;
    let filename = std::path::Path::new(path)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(path);
    Ok(engine.process_document(&bytes, filename)?)
}

/// Build an analyzer over the configured provider.
pub(crate) fn build_analyzer(provider: &ProviderArgs) -> Analyzer<OpenAiProvider> {
    let llm = OpenAiProvider::new(&provider.endpoint, &provider.model, &provider.api_key);
    Analyzer::new(llm, AnalyzerConfig::default())
}
