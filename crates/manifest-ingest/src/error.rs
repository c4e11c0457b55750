//! Ingest error types

use thiserror::Error;

/// Errors that can occur while talking to the parsing service
#[derive(Error, Debug)]
pub enum IngestError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Parsing service returned an unusable response
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Parsing service returned no documents
    #[error("Parsing service returned no documents")]
    EmptyResult,
}
