//! CLI command definitions and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manifest CLI - Q&A and structured extraction over logistics documents
#[derive(Debug, Parser)]
#[command(name = "manifest")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, global = true)]
    pub format: Option<CliFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format options
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum CliFormat {
    /// Human-readable text (default)
    Text,
    /// JSON format
    Json,
}

impl From<CliFormat> for crate::config::OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Text => Self::Text,
            CliFormat::Json => Self::Json,
        }
    }
}

/// CLI commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Ingest documents into the corpus
    Ingest(IngestArgs),

    /// Ask a question over the corpus
    Ask(AskArgs),

    /// Extract the structured shipment record for one reference id
    Extract(ExtractArgs),

    /// Clear the entire corpus
    Reset(ResetArgs),

    /// Show corpus status
    Status,
}

/// Arguments for the ingest command
#[derive(Debug, Parser)]
pub struct IngestArgs {
    /// Files to ingest (markdown/text directly; other formats go through
    /// the configured parse service)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

/// Arguments for the ask command
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// The question to answer
    pub question: String,

    /// Restrict retrieval to one document's reference id
    #[arg(short, long)]
    pub reference_id: Option<String>,
}

/// Arguments for the extract command
#[derive(Debug, Parser)]
pub struct ExtractArgs {
    /// Reference id of the shipment to extract
    pub reference_id: String,
}

/// Arguments for the reset command
#[derive(Debug, Parser)]
pub struct ResetArgs {
    /// Skip the confirmation prompt
    #[arg(long)]
    pub yes: bool,
}
