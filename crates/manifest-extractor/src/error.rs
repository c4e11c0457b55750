//! Error types for structured extraction

use thiserror::Error;

/// Errors that can occur during extraction
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// Completion provider error
    #[error("Completion error: {0}")]
    Completion(String),

    /// The completion call exceeded its deadline
    #[error("Extraction timed out")]
    Timeout,

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
