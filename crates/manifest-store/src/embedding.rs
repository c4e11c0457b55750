//! Embedding Model for Text Vectorization
//!
//! Queries and chunks are compared in embedding space; this module provides
//! the text-to-vector seam. [`HashEmbedder`] is a deterministic token-hash
//! bag-of-words model: no model files, no network, yet texts sharing tokens
//! land close enough for the pipeline, filters, and diversity selection to
//! be exercised end to end. Real embedding services plug in behind the same
//! trait.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use thiserror::Error;

/// Errors that can occur during embedding generation
#[derive(Error, Debug)]
pub enum EmbeddingError {
    /// Invalid input text
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Model inference error
    #[error("Model inference failed: {0}")]
    InferenceFailed(String),
}

/// Trait for embedding models
pub trait EmbeddingModel {
    /// Generate an embedding vector for the given text
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError>;

    /// Get the dimension of embeddings produced by this model
    fn dimension(&self) -> usize;
}

/// Deterministic token-hash embedding model
///
/// Lowercases the text, splits on non-alphanumeric characters, hashes each
/// token into a bucket, and L2-normalizes the bucket counts. Properties:
///
/// - **Deterministic**: same text always produces the same embedding
/// - **Normalized**: unit length, so cosine similarity is a dot product
/// - **Token overlap ≈ similarity**: texts sharing words score closer,
///   which is what retrieval tests need
#[derive(Debug, Clone)]
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    /// Create a new hash embedder with the given dimension
    pub fn new(dimension: usize) -> Self {
        Self { dimension }
    }

    fn bucket(&self, token: &str) -> usize {
        let mut hasher = DefaultHasher::new();
        token.hash(&mut hasher);
        (hasher.finish() % self.dimension as u64) as usize
    }
}

impl EmbeddingModel for HashEmbedder {
    fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let mut embedding = vec![0.0f32; self.dimension];

        let mut token_count = 0usize;
        for token in text
            .to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|t| !t.is_empty())
        {
            embedding[self.bucket(token)] += 1.0;
            token_count += 1;
        }

        if token_count == 0 {
            return Err(EmbeddingError::InvalidInput(
                "Text with no tokens cannot be embedded".to_string(),
            ));
        }

        let magnitude: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        for value in &mut embedding {
            *value /= magnitude;
        }

        Ok(embedding)
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// Calculate cosine similarity between two embedding vectors
///
/// Returns a value in [-1, 1]; 1.0 means identical direction, 0.0 means
/// orthogonal. Zero-magnitude inputs yield 0.0.
///
/// # Panics
///
/// Panics if vectors have different lengths.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    assert_eq!(a.len(), b.len(), "Vectors must have same length");

    let dot_product: f32 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let magnitude_a: f32 = a.iter().map(|x| x * x).sum::<f32>().sqrt();
    let magnitude_b: f32 = b.iter().map(|x| x * x).sum::<f32>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }

    dot_product / (magnitude_a * magnitude_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedding_deterministic() {
        let model = HashEmbedder::new(256);

        let text = "carrier pay for shipment LD53657";
        let embedding1 = model.embed(text).unwrap();
        let embedding2 = model.embed(text).unwrap();

        assert_eq!(embedding1, embedding2);
    }

    #[test]
    fn test_embedding_dimension() {
        let model = HashEmbedder::new(128);
        assert_eq!(model.embed("test").unwrap().len(), 128);
        assert_eq!(model.dimension(), 128);
    }

    #[test]
    fn test_embedding_normalized() {
        let model = HashEmbedder::new(256);
        let embedding = model.embed("pickup delivery rate breakdown").unwrap();

        let magnitude: f32 = embedding.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((magnitude - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_shared_tokens_score_closer() {
        let model = HashEmbedder::new(256);

        let anchor = model.embed("what is the carrier pay").unwrap();
        let related = model.embed("carrier pay is listed below").unwrap();
        let unrelated = model.embed("quarterly marketing projections").unwrap();

        let related_sim = cosine_similarity(&anchor, &related);
        let unrelated_sim = cosine_similarity(&anchor, &unrelated);
        assert!(
            related_sim > unrelated_sim,
            "token overlap should increase similarity ({} vs {})",
            related_sim,
            unrelated_sim
        );
    }

    #[test]
    fn test_empty_text_rejected() {
        let model = HashEmbedder::new(256);
        assert!(model.embed("").is_err());
        assert!(model.embed("  \n\t ").is_err());
    }

    #[test]
    fn test_cosine_similarity_bounds() {
        let vec1 = vec![1.0, 0.0, 0.0];
        let vec2 = vec![0.0, 1.0, 0.0];
        assert!((cosine_similarity(&vec1, &vec1) - 1.0).abs() < 0.0001);
        assert!(cosine_similarity(&vec1, &vec2).abs() < 0.0001);
        assert_eq!(cosine_similarity(&vec1, &[0.0, 0.0, 0.0]), 0.0);
    }
}
