//! Error types for the CLI application

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI-specific errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Document ingestion error
    #[error("Ingest error: {0}")]
    Ingest(#[from] manifest_ingest::IngestError),

    /// Vector index error
    #[error("Index error: {0}")]
    Index(#[from] manifest_store::IndexError),

    /// Question-answering error
    #[error("Ask error: {0}")]
    Rag(#[from] manifest_rag::RagError),

    /// Structured extraction error
    #[error("Extract error: {0}")]
    Extractor(#[from] manifest_extractor::ExtractorError),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
