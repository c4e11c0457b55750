//! Manifest Ingest Layer
//!
//! Turns parsed logistics documents into retrieval chunks. The pipeline is
//! markdown text in, ordered [`Chunk`](manifest_domain::Chunk) sequence out:
//!
//! 1. Extract the load reference id from the document header (five patterns,
//!    first match wins)
//! 2. Detect the document type from keyword cues (order-sensitive)
//! 3. Split on top-level `##` section headers, prefixing each section chunk
//!    with the header block for standalone retrieval context
//! 4. Classify each section against a fixed priority list of keyword rules
//!
//! The external PDF-to-markdown parsing service is consumed through the
//! [`DocumentParser`](manifest_domain::traits::DocumentParser) trait;
//! [`RestParser`] is the HTTP implementation and [`MockParser`] the
//! deterministic test double.

#![warn(missing_docs)]

pub mod chunker;
pub mod classify;
pub mod error;
pub mod parser;
pub mod reference;

pub use chunker::DocumentChunker;
pub use classify::{classify_section, detect_doc_type};
pub use error::IngestError;
pub use parser::{MockParser, RestParser};
pub use reference::extract_reference_id;
