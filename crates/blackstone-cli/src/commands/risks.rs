//! Risks command - heuristic (and optionally LLM) risk assessment.

use super::{build_analyzer, process_file};
use crate::cli::RisksArgs;
use crate::error::Result;
use crate::output::Formatter;
use blackstone_engine::Engine;
use blackstone_extractor::ProcessorConfig;

/// Execute the risks command.
pub async fn execute_risks(args: RisksArgs, formatter: &Formatter) -> Result<()> {
    let engine = Engine::new(ProcessorConfig::default())?;
    let processed = process_file(&engine, &args.file)?;

    let risks = engine.assess_risks(processed.document_id)?;
    println!("{}", formatter.format_risks(&risks)?);

    if args.llm {
        let analyzer = build_analyzer(&args.provider);
        let text = engine.document(processed.document_id)?.text;

        let report = analyzer.identify_risks(&text).await;
        println!("{}", formatter.format_llm_risks(&report)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ProviderArgs;
    use std::io::Write;

    #[tokio::test]
    async fn test_heuristic_risks_only() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        write!(file, "Employee signs a non-compete restraint of trade.").unwrap();

        let args = RisksArgs {
            file: file.path().to_string_lossy().to_string(),
            llm: false,
            provider: ProviderArgs {
                endpoint: "http://unused".to_string(),
                model: "unused".to_string(),
                api_key: String::new(),
            },
        };
        let formatter = Formatter::new(false, false);

        assert!(execute_risks(args, &formatter).await.is_ok());
    }
}
