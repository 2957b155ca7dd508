//! Search command - index documents and query their chunks.

use super::process_file;
use crate::cli::SearchArgs;
use crate::error::Result;
use crate::output::Formatter;
use blackstone_engine::Engine;
use blackstone_extractor::ProcessorConfig;

/// Execute the search command.
pub async fn execute_search(args: SearchArgs, formatter: &Formatter) -> Result<()> {
    let engine = Engine::new(ProcessorConfig::default())?;

    for path in &args.files {
        let processed = process_file(&engine, path)?;
        engine.chunk_and_index(processed.document_id)?;
    }

    if !formatter.json() {
        println!(
            "{}",
            formatter.success(&format!("Indexed {} chunks", engine.indexed_chunks()))
        );
    }

    let hits = engine.search(&args.query, args.limit)?;
    println!("{}", formatter.format_hits(&hits)?);

    Ok(())
}
