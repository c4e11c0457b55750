//! Retrieval-augmented answering pipeline
//!
//! This crate combines the vector index, the completion service, and the
//! gatekeeper into the question-answering engine:
//!
//! 1. Build a metadata filter from the question's intent
//! 2. Query an oversized candidate pool and re-rank it for doc-type diversity
//! 3. Generate a grounded answer from the surviving chunks
//! 4. Score confidence and annotate the answer through the gatekeeper
//!
//! The engine is generic over [`CompletionProvider`] and [`VectorIndex`]
//! implementations, so tests run against deterministic mocks.
//!
//! [`CompletionProvider`]: manifest_domain::traits::CompletionProvider
//! [`VectorIndex`]: manifest_domain::traits::VectorIndex

#![warn(missing_docs)]

pub mod config;
pub mod engine;
pub mod error;
pub mod prompt;
pub mod retriever;

pub use config::RetrieverConfig;
pub use engine::RagEngine;
pub use error::RagError;
pub use retriever::{build_filter, diversify};
