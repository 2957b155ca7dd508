//! Analyze command - process documents and report their artifacts.

use super::process_file;
use crate::cli::AnalyzeArgs;
use crate::error::Result;
use crate::output::Formatter;
use blackstone_engine::Engine;
use blackstone_extractor::ProcessorConfig;

/// Execute the analyze command.
pub async fn execute_analyze(args: AnalyzeArgs, formatter: &Formatter) -> Result<()> {
    let engine = Engine::new(ProcessorConfig::default())?;

    for path in &args.files {
        let processed = process_file(&engine, path)?;
        println!("{}", formatter.format_processed(&processed)?);

        let risks = engine.assess_risks(processed.document_id)?;
        println!("{}", formatter.format_risks(&risks)?);
    }

    Ok(())
}
