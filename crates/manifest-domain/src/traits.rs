//! Trait definitions for external interactions
//!
//! These traits define the boundaries between domain logic and the three
//! external collaborators: the vector index, the completion service, and the
//! document parsing service. Infrastructure implementations live in other
//! crates.

use crate::chunk::Chunk;
use crate::retrieval::{MetadataFilter, RetrievedChunk};

/// Trait for the vector index holding the chunk corpus
///
/// Implemented by the infrastructure layer (manifest-store). The index
/// exclusively owns persisted chunk storage; all other components only read
/// through `query`. External index services are string-typed at this
/// boundary, so implementations are responsible for flattening and reviving
/// chunk metadata.
pub trait VectorIndex {
    /// Error type for index operations
    type Error;

    /// Add chunks to the corpus, returning the number accepted
    fn add_chunks(&mut self, chunks: &[Chunk]) -> Result<usize, Self::Error>;

    /// Similarity-query the corpus, filtered by metadata equality
    ///
    /// Results are ordered by ascending distance, at most `top_k` of them.
    fn query(
        &self,
        text: &str,
        top_k: usize,
        filter: &MetadataFilter,
    ) -> Result<Vec<RetrievedChunk>, Self::Error>;

    /// Destructive corpus reset
    ///
    /// Not safe to run concurrently with active queries.
    fn clear(&mut self) -> Result<(), Self::Error>;

    /// Number of chunks in the corpus
    fn len(&self) -> usize;

    /// Whether the corpus is empty
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A single completion call to the LLM service
#[derive(Debug, Clone, PartialEq)]
pub struct CompletionRequest {
    /// The full prompt text
    pub prompt: String,

    /// Sampling temperature (0.0 for strict extraction, 0.1 for answers)
    pub temperature: f32,

    /// Optional completion length cap
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Create a request with temperature 0.0 and no length cap
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            temperature: 0.0,
            max_tokens: None,
        }
    }

    /// Set the sampling temperature
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Cap the completion length
    pub fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }
}

/// Trait for text-completion providers
///
/// Implemented by the infrastructure layer (manifest-llm). Two call sites
/// exist: free-form answer generation and strict-JSON extraction; both go
/// through `complete`.
pub trait CompletionProvider {
    /// Error type for completion operations
    type Error;

    /// Generate a completion for the given request
    fn complete(&self, request: &CompletionRequest) -> Result<String, Self::Error>;
}

/// Trait for the document parsing service
///
/// Converts uploaded file bytes into markdown text. One logical document per
/// call; multi-result responses are reduced to their first entry by the
/// implementation.
pub trait DocumentParser {
    /// Error type for parse operations
    type Error;

    /// Parse file bytes into markdown
    fn parse(&self, bytes: &[u8]) -> Result<String, Self::Error>;
}
