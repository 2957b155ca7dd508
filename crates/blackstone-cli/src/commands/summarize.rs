//! Summarize command - LLM plain-language summary.

use super::{build_analyzer, process_file};
use crate::cli::SummarizeArgs;
use crate::error::Result;
use crate::output::Formatter;
use blackstone_engine::Engine;
use blackstone_extractor::ProcessorConfig;

/// Execute the summarize command.
pub async fn execute_summarize(args: SummarizeArgs, formatter: &Formatter) -> Result<()> {
    let engine = Engine::new(ProcessorConfig::default())?;
    let processed = process_file(&engine, &args.file)?;
    let text = engine.document(processed.document_id)?.text;

    let analyzer = build_analyzer(&args.provider);
    let summary = analyzer.summarize(&text).await;

    if formatter.json() {
        println!("{}", serde_json::json!({ "summary": summary }));
    } else {
        println!("{}", summary);
    }

    Ok(())
}
