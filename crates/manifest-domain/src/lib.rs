//! Manifest Domain Layer
//!
//! This crate contains the core data model for Manifest, a question-answering
//! and structured-extraction system over logistics documents (rate
//! confirmations, bills of lading). It defines the fundamental value objects
//! and the trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **Chunk**: The retrieval unit - one document section with typed metadata
//! - **DocType / SectionType**: Closed vocabularies describing where a chunk
//!   came from
//! - **RetrievedChunk**: A chunk plus a similarity-search distance
//! - **ExtractionRecord**: The fixed 11-field structured record extracted
//!   per document type, merged across types with priority rules
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture:
//! - Serialization primitives only (serde), no infrastructure dependencies
//! - Infrastructure implementations (vector index, LLM providers, document
//!   parsing) live in other crates behind the traits defined here

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod chunk;
pub mod doc_type;
pub mod record;
pub mod retrieval;
pub mod section;
pub mod traits;

// Re-exports for convenience
pub use chunk::{Chunk, ChunkMetadata, UNKNOWN_REFERENCE};
pub use doc_type::DocType;
pub use record::{ExtractionRecord, MergeMetadata, MergedRecord, RECORD_FIELDS};
pub use retrieval::{AskResponse, MetadataFilter, RetrievedChunk, SourceRef};
pub use section::SectionType;
