//! Error types for the RAG engine

use thiserror::Error;

/// Errors that can occur while answering a question
#[derive(Error, Debug)]
pub enum RagError {
    /// The question was empty or whitespace-only
    #[error("Question must not be empty")]
    EmptyQuestion,

    /// Vector index error
    #[error("Index error: {0}")]
    Index(String),

    /// Completion provider error
    #[error("Completion error: {0}")]
    Completion(String),

    /// The completion call exceeded its deadline
    #[error("Answer generation timed out")]
    Timeout,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
