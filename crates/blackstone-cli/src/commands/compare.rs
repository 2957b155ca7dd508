//! Compare command - structural (and optionally LLM) comparison.

use super::{build_analyzer, process_file};
use crate::cli::CompareArgs;
use crate::error::Result;
use crate::output::Formatter;
use blackstone_analyzer::{DocumentComparison, DocumentProfile};
use blackstone_engine::{DocumentEntry, Engine};
use blackstone_extractor::ProcessorConfig;

/// Execute the compare command.
pub async fn execute_compare(args: CompareArgs, formatter: &Formatter) -> Result<()> {
    let engine = Engine::new(ProcessorConfig::default())?;

    let first = process_file(&engine, &args.file1)?;
    let second = process_file(&engine, &args.file2)?;

    let entry1 = engine.entry(first.document_id)?;
    let entry2 = engine.entry(second.document_id)?;

    let comparison = DocumentComparison::between(&profile(&entry1), &profile(&entry2));
    println!("{}", formatter.format_comparison(&comparison)?);

    if args.llm {
        let analyzer = build_analyzer(&args.provider);
        let report = analyzer
            .compare(&entry1.document.text, &entry2.document.text)
            .await?;
        println!("{}", formatter.format_llm_comparison(&report)?);
    }

    Ok(())
}

fn profile(entry: &DocumentEntry) -> DocumentProfile {
    DocumentProfile {
        filename: entry.document.filename.clone(),
        text: entry.document.text.clone(),
        entities: entry.entities.clone(),
        clauses: entry.clauses.clone(),
    }
}
