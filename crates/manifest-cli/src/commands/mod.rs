//! Command implementations

pub mod ask;
pub mod extract;
pub mod ingest;
pub mod reset;
pub mod status;

pub use self::ask::execute_ask;
pub use self::extract::execute_extract;
pub use self::ingest::execute_ingest;
pub use self::reset::execute_reset;
pub use self::status::execute_status;

use crate::config::Config;
use crate::error::Result;
use manifest_llm::OpenAiProvider;
use manifest_store::{HashEmbedder, MemoryIndex};

/// Open the persisted index, or start an empty one
pub fn open_index(config: &Config) -> Result<MemoryIndex<HashEmbedder>> {
    let path = config.index_path()?;
    let embedder = HashEmbedder::new(config.embedding_dimension);

    if path.exists() {
        Ok(MemoryIndex::load(&path, embedder)?)
    } else {
        Ok(MemoryIndex::new(embedder))
    }
}

/// Persist the index snapshot
pub fn save_index(config: &Config, index: &MemoryIndex<HashEmbedder>) -> Result<()> {
    let path = config.index_path()?;
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    index.save(&path)?;
    Ok(())
}

/// Build the completion provider from config
pub fn build_provider(config: &Config) -> OpenAiProvider {
    let provider = OpenAiProvider::new(&config.llm.endpoint, &config.llm.model);
    match config.api_key() {
        Some(key) => provider.with_api_key(key),
        None => provider,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifest_domain::traits::VectorIndex;
    use manifest_domain::{Chunk, ChunkMetadata, DocType, SectionType};

    #[test]
    fn test_index_round_trips_through_configured_path() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            index_path: Some(dir.path().join("index.json")),
            ..Default::default()
        };

        // First open: nothing on disk yet, starts empty
        let mut index = open_index(&config).unwrap();
        assert!(index.is_empty());

        index
            .add_chunks(&[Chunk::new(
                "Carrier pay total $1,200",
                ChunkMetadata {
                    reference_id: "LD53657".to_string(),
                    doc_type: DocType::CarrierRc,
                    chunk_id: 1,
                    section_type: SectionType::Rates,
                    has_table: false,
                },
            )])
            .unwrap();
        save_index(&config, &index).unwrap();

        let reopened = open_index(&config).unwrap();
        assert_eq!(reopened.len(), 1);
    }
}
