//! In-memory vector index with a string-typed metadata boundary

use crate::embedding::{cosine_similarity, EmbeddingError, EmbeddingModel};
use manifest_domain::traits::VectorIndex;
use manifest_domain::{
    Chunk, ChunkMetadata, DocType, MetadataFilter, RetrievedChunk, SectionType, UNKNOWN_REFERENCE,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, warn};
use uuid::Uuid;

/// Errors that can occur during index operations
#[derive(Error, Debug)]
pub enum IndexError {
    /// Embedding generation failed for the query text
    #[error("Embedding error: {0}")]
    Embedding(#[from] EmbeddingError),

    /// Snapshot file I/O failed
    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot (de)serialization failed
    #[error("Snapshot format error: {0}")]
    Format(#[from] serde_json::Error),
}

/// One stored chunk with its embedding and flattened metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
struct IndexEntry {
    id: String,
    content: String,
    metadata: HashMap<String, String>,
    embedding: Vec<f32>,
}

/// In-memory implementation of the vector-index contract
///
/// Stores (content, string metadata, embedding) entries and answers
/// similarity queries by brute-force cosine scan, which is plenty for a
/// corpus of a few logistics documents. Distance is `1 - cosine_similarity`
/// (0 = identical, 2 = opposite).
pub struct MemoryIndex<E: EmbeddingModel> {
    embedder: E,
    entries: Vec<IndexEntry>,
}

impl<E: EmbeddingModel> MemoryIndex<E> {
    /// Create an empty index over the given embedding model
    pub fn new(embedder: E) -> Self {
        Self {
            embedder,
            entries: Vec::new(),
        }
    }

    /// Load an index snapshot from disk
    ///
    /// Embeddings are stored in the snapshot, so the embedder is only used
    /// for subsequent queries and additions; it must be the same model that
    /// produced the snapshot.
    pub fn load<P: AsRef<Path>>(path: P, embedder: E) -> Result<Self, IndexError> {
        let json = std::fs::read_to_string(path)?;
        let entries: Vec<IndexEntry> = serde_json::from_str(&json)?;
        debug!(entries = entries.len(), "loaded index snapshot");
        Ok(Self { embedder, entries })
    }

    /// Persist the index to a JSON snapshot on disk
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), IndexError> {
        let json = serde_json::to_string(&self.entries)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

/// Flatten typed chunk metadata to the string-only pairs the external index
/// contract requires
fn flatten_metadata(metadata: &ChunkMetadata) -> HashMap<String, String> {
    let mut flat = HashMap::new();
    flat.insert("reference_id".to_string(), metadata.reference_id.clone());
    flat.insert("doc_type".to_string(), metadata.doc_type.as_str().to_string());
    flat.insert("chunk_id".to_string(), metadata.chunk_id.to_string());
    flat.insert(
        "section_type".to_string(),
        metadata.section_type.as_str().to_string(),
    );
    flat.insert("has_table".to_string(), metadata.has_table.to_string());
    flat
}

/// Revive typed metadata from stored string pairs
///
/// Missing or malformed values fall back to their neutral defaults rather
/// than failing, since stored metadata is outside the type system.
fn revive_metadata(flat: &HashMap<String, String>) -> ChunkMetadata {
    ChunkMetadata {
        reference_id: flat
            .get("reference_id")
            .cloned()
            .unwrap_or_else(|| UNKNOWN_REFERENCE.to_string()),
        doc_type: flat
            .get("doc_type")
            .map(|s| DocType::parse(s))
            .unwrap_or(DocType::Unknown),
        chunk_id: flat
            .get("chunk_id")
            .and_then(|s| s.parse().ok())
            .unwrap_or(0),
        section_type: flat
            .get("section_type")
            .map(|s| SectionType::parse(s))
            .unwrap_or(SectionType::General),
        has_table: flat
            .get("has_table")
            .map(|s| s == "true")
            .unwrap_or(false),
    }
}

/// Flatten a metadata filter to string equality pairs, dropping unset keys
fn flatten_filter(filter: &MetadataFilter) -> Vec<(&'static str, String)> {
    let mut pairs = Vec::new();
    if let Some(reference_id) = &filter.reference_id {
        pairs.push(("reference_id", reference_id.clone()));
    }
    if let Some(doc_type) = filter.doc_type {
        pairs.push(("doc_type", doc_type.as_str().to_string()));
    }
    pairs
}

impl<E: EmbeddingModel> VectorIndex for MemoryIndex<E> {
    type Error = IndexError;

    fn add_chunks(&mut self, chunks: &[Chunk]) -> Result<usize, Self::Error> {
        let mut accepted = 0;

        for chunk in chunks {
            let embedding = match self.embedder.embed(&chunk.content) {
                Ok(embedding) => embedding,
                Err(e) => {
                    // Content with no embeddable tokens (e.g. an empty
                    // header chunk) is skipped, not fatal.
                    warn!(chunk_id = chunk.metadata.chunk_id, error = %e, "skipping unembeddable chunk");
                    continue;
                }
            };

            self.entries.push(IndexEntry {
                id: Uuid::new_v4().to_string(),
                content: chunk.content.clone(),
                metadata: flatten_metadata(&chunk.metadata),
                embedding,
            });
            accepted += 1;
        }

        debug!(accepted, total = self.entries.len(), "added chunks to index");
        Ok(accepted)
    }

    fn query(
        &self,
        text: &str,
        top_k: usize,
        filter: &MetadataFilter,
    ) -> Result<Vec<RetrievedChunk>, Self::Error> {
        // A query with no embeddable tokens matches nothing rather than
        // failing; callers treat empty retrieval as not-found, not an error.
        let query_embedding = match self.embedder.embed(text) {
            Ok(embedding) => embedding,
            Err(e) => {
                warn!(error = %e, "query text not embeddable, returning no results");
                return Ok(Vec::new());
            }
        };
        let pairs = flatten_filter(filter);

        let mut results: Vec<RetrievedChunk> = self
            .entries
            .iter()
            .filter(|entry| {
                pairs
                    .iter()
                    .all(|(key, value)| entry.metadata.get(*key) == Some(value))
            })
            .map(|entry| RetrievedChunk {
                chunk: Chunk::new(entry.content.clone(), revive_metadata(&entry.metadata)),
                distance: 1.0 - cosine_similarity(&query_embedding, &entry.embedding),
            })
            .collect();

        results.sort_by(|a, b| a.distance.total_cmp(&b.distance));
        results.truncate(top_k);

        Ok(results)
    }

    fn clear(&mut self) -> Result<(), Self::Error> {
        self.entries.clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embedding::HashEmbedder;

    fn chunk(content: &str, reference_id: &str, doc_type: DocType, chunk_id: usize) -> Chunk {
        Chunk::new(
            content,
            ChunkMetadata {
                reference_id: reference_id.to_string(),
                doc_type,
                chunk_id,
                section_type: SectionType::General,
                has_table: false,
            },
        )
    }

    fn test_index() -> MemoryIndex<HashEmbedder> {
        MemoryIndex::new(HashEmbedder::new(256))
    }

    #[test]
    fn test_add_and_count() {
        let mut index = test_index();
        let chunks = vec![
            chunk("carrier pay is $400", "LD53657", DocType::CarrierRc, 0),
            chunk("customer rate is $500", "LD53657", DocType::ShipperRc, 0),
        ];

        assert_eq!(index.add_chunks(&chunks).unwrap(), 2);
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_unembeddable_chunk_not_accepted() {
        let mut index = test_index();
        let chunks = vec![
            chunk("", "LD53657", DocType::Bol, 0),
            chunk("consignee is Glassworks Inc", "LD53657", DocType::Bol, 1),
        ];

        assert_eq!(index.add_chunks(&chunks).unwrap(), 1);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_unembeddable_query_returns_no_results() {
        let mut index = test_index();
        index
            .add_chunks(&[chunk("carrier pay is $400", "LD53657", DocType::CarrierRc, 0)])
            .unwrap();

        let results = index.query("???", 5, &MetadataFilter::default()).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn test_query_orders_by_distance() {
        let mut index = test_index();
        index
            .add_chunks(&[
                chunk("carrier pay total four hundred", "LD1", DocType::CarrierRc, 0),
                chunk("completely unrelated marketing text", "LD1", DocType::Unknown, 1),
            ])
            .unwrap();

        let results = index
            .query("what is the carrier pay", 2, &MetadataFilter::default())
            .unwrap();

        assert_eq!(results.len(), 2);
        assert!(results[0].distance <= results[1].distance);
        assert!(results[0].chunk.content.contains("carrier pay"));
    }

    #[test]
    fn test_query_metadata_revived_typed() {
        let mut index = test_index();
        index
            .add_chunks(&[chunk("carrier pay", "LD53657", DocType::CarrierRc, 3)])
            .unwrap();

        let results = index
            .query("carrier pay", 1, &MetadataFilter::default())
            .unwrap();

        let metadata = &results[0].chunk.metadata;
        assert_eq!(metadata.reference_id, "LD53657");
        assert_eq!(metadata.doc_type, DocType::CarrierRc);
        assert_eq!(metadata.chunk_id, 3);
    }

    #[test]
    fn test_query_filters_by_reference_id() {
        let mut index = test_index();
        index
            .add_chunks(&[
                chunk("rate text one", "LD1", DocType::ShipperRc, 0),
                chunk("rate text two", "LD2", DocType::ShipperRc, 0),
            ])
            .unwrap();

        let results = index
            .query("rate text", 10, &MetadataFilter::for_reference("LD2"))
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].chunk.metadata.reference_id, "LD2");
    }

    #[test]
    fn test_query_filters_by_doc_type() {
        let mut index = test_index();
        index
            .add_chunks(&[
                chunk("rate five hundred", "LD1", DocType::ShipperRc, 0),
                chunk("rate four hundred", "LD1", DocType::CarrierRc, 1),
            ])
            .unwrap();

        let results = index
            .query(
                "rate",
                10,
                &MetadataFilter::default().with_doc_type(DocType::CarrierRc),
            )
            .unwrap();

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].chunk.metadata.doc_type, DocType::CarrierRc);
    }

    #[test]
    fn test_top_k_truncation() {
        let mut index = test_index();
        let chunks: Vec<Chunk> = (0..10)
            .map(|i| chunk(&format!("rate line {}", i), "LD1", DocType::ShipperRc, i))
            .collect();
        index.add_chunks(&chunks).unwrap();

        let results = index.query("rate", 3, &MetadataFilter::default()).unwrap();
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn test_clear_resets_corpus() {
        let mut index = test_index();
        index
            .add_chunks(&[chunk("some text", "LD1", DocType::Bol, 0)])
            .unwrap();
        assert!(!index.is_empty());

        index.clear().unwrap();
        assert!(index.is_empty());
    }

    #[test]
    fn test_snapshot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.json");

        let mut index = test_index();
        index
            .add_chunks(&[chunk("carrier pay is $400", "LD53657", DocType::CarrierRc, 0)])
            .unwrap();
        index.save(&path).unwrap();

        let restored = MemoryIndex::load(&path, HashEmbedder::new(256)).unwrap();
        assert_eq!(restored.len(), 1);

        let results = restored
            .query("carrier pay", 1, &MetadataFilter::default())
            .unwrap();
        assert_eq!(results[0].chunk.metadata.reference_id, "LD53657");
    }
}
