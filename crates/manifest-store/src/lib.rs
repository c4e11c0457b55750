//! Manifest Storage Layer
//!
//! Implements the [`VectorIndex`](manifest_domain::traits::VectorIndex)
//! contract over an in-process index. The external index boundary is
//! string-typed: chunk metadata is flattened to string key/value pairs on the
//! way in and revived into the typed model on the way out, so the rest of
//! the system never touches stringly metadata.
//!
//! # Architecture
//!
//! - Brute-force cosine scan over a small corpus (a handful of logistics
//!   documents, tens of chunks)
//! - Pluggable embedding model; a deterministic token-hash embedder is
//!   included for tests and offline use
//! - JSON snapshot persistence so a CLI process can rebuild the index on
//!   startup
//!
//! # Examples
//!
//! ```
//! use manifest_store::{HashEmbedder, MemoryIndex};
//! use manifest_domain::traits::VectorIndex;
//! use manifest_domain::MetadataFilter;
//!
//! let mut index = MemoryIndex::new(HashEmbedder::new(256));
//! assert!(index.is_empty());
//! let results = index.query("carrier pay", 5, &MetadataFilter::default()).unwrap();
//! assert!(results.is_empty());
//! ```

#![warn(missing_docs)]

pub mod embedding;
pub mod index;

pub use embedding::{cosine_similarity, EmbeddingError, EmbeddingModel, HashEmbedder};
pub use index::{IndexError, MemoryIndex};
