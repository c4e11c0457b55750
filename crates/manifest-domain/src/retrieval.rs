//! Retrieval value objects - query filters, scored results, answers

use crate::chunk::Chunk;
use crate::doc_type::DocType;
use crate::section::SectionType;
use serde::{Deserialize, Serialize};

/// Maximum snippet length carried in a [`SourceRef`]
const SNIPPET_LEN: usize = 200;

/// Equality filter applied to a vector-index query
///
/// Typed internally; the index adapter flattens the set fields to
/// string-equality pairs at its boundary. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetadataFilter {
    /// Restrict to chunks of one document
    pub reference_id: Option<String>,

    /// Restrict to one document type
    pub doc_type: Option<DocType>,
}

impl MetadataFilter {
    /// Filter restricted to a reference id
    pub fn for_reference(reference_id: impl Into<String>) -> Self {
        Self {
            reference_id: Some(reference_id.into()),
            doc_type: None,
        }
    }

    /// Restrict this filter to a document type
    pub fn with_doc_type(mut self, doc_type: DocType) -> Self {
        self.doc_type = Some(doc_type);
        self
    }

    /// Whether no restriction is set
    pub fn is_empty(&self) -> bool {
        self.reference_id.is_none() && self.doc_type.is_none()
    }
}

/// A chunk returned by a similarity query
///
/// `distance` is a dissimilarity score: non-negative, smaller is more
/// similar, with no fixed upper bound (empirically within [0, ~2.5] for the
/// embedding spaces we target).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedChunk {
    /// The retrieved chunk
    pub chunk: Chunk,

    /// Similarity-search distance (lower = closer)
    pub distance: f32,
}

impl RetrievedChunk {
    /// Shorthand for the chunk's document type
    pub fn doc_type(&self) -> DocType {
        self.chunk.metadata.doc_type
    }
}

/// A citation entry attached to an answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceRef {
    /// Leading excerpt of the chunk content
    pub snippet: String,

    /// Document type of the source chunk
    pub doc_type: DocType,

    /// Section classification of the source chunk
    pub section: SectionType,

    /// Retrieval distance, rounded to 3 decimals
    pub distance: f32,
}

impl SourceRef {
    /// Build a citation from a retrieved chunk, truncating the snippet
    pub fn from_result(result: &RetrievedChunk) -> Self {
        let content = &result.chunk.content;
        let snippet = if content.chars().count() > SNIPPET_LEN {
            let truncated: String = content.chars().take(SNIPPET_LEN).collect();
            format!("{}...", truncated)
        } else {
            content.clone()
        };

        Self {
            snippet,
            doc_type: result.chunk.metadata.doc_type,
            section: result.chunk.metadata.section_type,
            distance: (result.distance * 1000.0).round() / 1000.0,
        }
    }
}

/// The structured result of a question-answering request
///
/// Always returned, degrading to a "not found" answer with confidence 0.0
/// and no sources instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskResponse {
    /// Final answer text, possibly annotated by the guardrail gate
    pub answer: String,

    /// Confidence score in [0, 1], rounded to 2 decimals
    pub confidence: f64,

    /// Up to 3 source citations
    pub sources: Vec<SourceRef>,
}

impl AskResponse {
    /// The short-circuit response for empty or unusable retrieval
    pub fn not_found() -> Self {
        Self {
            answer: "Not found in document - no relevant content retrieved.".to_string(),
            confidence: 0.0,
            sources: Vec::new(),
        }
    }
}
