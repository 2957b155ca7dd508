//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Blackstone CLI - Analyze legal documents from the command line.
#[derive(Debug, Parser)]
#[command(name = "blackstone")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Emit JSON instead of human-readable output
    #[arg(long, global = true)]
    pub json: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process documents: entities, clauses, and heuristic risks
    Analyze(AnalyzeArgs),

    /// Index documents and run a similarity search over their chunks
    Search(SearchArgs),

    /// Heuristic risk assessment for a document
    Risks(RisksArgs),

    /// LLM-generated plain-language summary of a document
    Summarize(SummarizeArgs),

    /// Compare two documents
    Compare(CompareArgs),
}

/// Arguments for the analyze command.
#[derive(Debug, Parser)]
pub struct AnalyzeArgs {
    /// Document files to process (.pdf or .txt)
    #[arg(required = true)]
    pub files: Vec<String>,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Search query text
    pub query: String,

    /// Document files to index (.pdf or .txt)
    #[arg(required = true)]
    pub files: Vec<String>,

    /// Maximum number of results
    #[arg(short, long, default_value = "5")]
    pub limit: usize,
}

/// Arguments for the risks command.
#[derive(Debug, Parser)]
pub struct RisksArgs {
    /// Document file to assess (.pdf or .txt)
    pub file: String,

    /// Also ask the language model for risks
    #[arg(long)]
    pub llm: bool,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Arguments for the summarize command.
#[derive(Debug, Parser)]
pub struct SummarizeArgs {
    /// Document file to summarize (.pdf or .txt)
    pub file: String,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Arguments for the compare command.
#[derive(Debug, Parser)]
pub struct CompareArgs {
    /// First document file (.pdf or .txt)
    pub file1: String,

    /// Second document file (.pdf or .txt)
    pub file2: String,

    /// Also ask the language model for a comparison
    #[arg(long)]
    pub llm: bool,

    #[command(flatten)]
    pub provider: ProviderArgs,
}

/// Text-generation capability connection options.
#[derive(Debug, Parser)]
pub struct ProviderArgs {
    /// API endpoint base URL
    #[arg(long, default_value = blackstone_llm::openai::DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Model name
    #[arg(long, default_value = "gpt-4o")]
    pub model: String,

    /// API key
    #[arg(long, env = "OPENAI_API_KEY", default_value = "", hide_env_values = true)]
    pub api_key: String,
}
