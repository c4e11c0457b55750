//! Chunk module - the retrieval unit

use crate::doc_type::DocType;
use crate::section::SectionType;
use serde::{Deserialize, Serialize};

/// Reference id recorded when no pattern matched the document header
pub const UNKNOWN_REFERENCE: &str = "UNKNOWN";

/// Typed metadata attached to every chunk
///
/// `reference_id` and `doc_type` are computed once per document and are
/// identical across all of its chunks; `chunk_id` is the ordinal within the
/// document and unique there. The external vector index only accepts
/// string-valued metadata, so this struct is flattened to strings at the
/// index-adapter boundary and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Load / BOL reference id, `"UNKNOWN"` when not detected
    pub reference_id: String,

    /// Document type, identical across all chunks of one document
    pub doc_type: DocType,

    /// Ordinal of this chunk within its document (header is 0)
    pub chunk_id: usize,

    /// Section classification
    pub section_type: SectionType,

    /// Whether the section text contains a markdown table delimiter
    pub has_table: bool,
}

/// A retrieval-addressable unit of document text
///
/// Created once per uploaded document at processing time and immutable
/// thereafter; removed only by an explicit corpus reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Section text, prefixed with the document header block for standalone
    /// retrieval context (except for the header chunk itself)
    pub content: String,

    /// Typed chunk metadata
    pub metadata: ChunkMetadata,
}

impl Chunk {
    /// Create a chunk from content and metadata
    pub fn new(content: impl Into<String>, metadata: ChunkMetadata) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }
}
