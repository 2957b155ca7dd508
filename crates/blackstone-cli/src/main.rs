//! Blackstone CLI - Command-line interface for the legal-document analysis pipeline.

use blackstone_cli::commands;
use blackstone_cli::{Cli, Command, Formatter};
use clap::Parser;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> blackstone_cli::Result<()> {
    let cli = Cli::parse();

    let formatter = Formatter::new(cli.json, !cli.no_color);

    match cli.command {
        Command::Analyze(args) => commands::execute_analyze(args, &formatter).await?,
        Command::Search(args) => commands::execute_search(args, &formatter).await?,
        Command::Risks(args) => commands::execute_risks(args, &formatter).await?,
        Command::Summarize(args) => commands::execute_summarize(args, &formatter).await?,
        Command::Compare(args) => commands::execute_compare(args, &formatter).await?,
    }

    Ok(())
}
