//! Per-document-type extraction orchestration

use crate::config::ExtractorConfig;
use crate::error::ExtractorError;
use crate::merge::merge_extractions;
use crate::parser::parse_extraction_response;
use crate::prompt::build_extraction_prompt;
use manifest_domain::traits::{CompletionProvider, CompletionRequest};
use manifest_domain::{DocType, ExtractionRecord, MergedRecord, RetrievedChunk};
use std::sync::Arc;
use tokio::time::timeout;
use tracing::{debug, info};

/// The StructuredExtractor turns retrieved chunks into one merged record
pub struct StructuredExtractor<P>
where
    P: CompletionProvider,
{
    provider: Arc<P>,
    config: ExtractorConfig,
}

impl<P> StructuredExtractor<P>
where
    P: CompletionProvider + Send + Sync + 'static,
    P::Error: std::fmt::Display,
{
    /// Create a new extractor
    pub fn new(provider: P, config: ExtractorConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            config,
        }
    }

    /// Extract the 11-field schema from retrieved chunks
    ///
    /// Groups chunks by document type, extracts each group separately with a
    /// type-specific prompt, then merges the per-type records by source
    /// priority. Groups are processed sequentially; an unparsable response
    /// for one group degrades that group to an all-null record.
    pub async fn extract(
        &self,
        results: &[RetrievedChunk],
    ) -> Result<MergedRecord, ExtractorError> {
        let groups = group_by_doc_type(results);
        info!("Extracting from {} document-type groups", groups.len());

        let mut extractions: Vec<(DocType, ExtractionRecord)> = Vec::with_capacity(groups.len());
        for (doc_type, content) in groups {
            let record = self.extract_group(doc_type, &content).await?;
            extractions.push((doc_type, record));
        }

        Ok(merge_extractions(&extractions))
    }

    /// Extract one document-type group
    async fn extract_group(
        &self,
        doc_type: DocType,
        content: &str,
    ) -> Result<ExtractionRecord, ExtractorError> {
        let mut content = content;
        if content.len() > self.config.max_group_content_len {
            let mut cut = self.config.max_group_content_len;
            while !content.is_char_boundary(cut) {
                cut -= 1;
            }
            content = &content[..cut];
        }

        let prompt = build_extraction_prompt(content, doc_type);
        debug!(
            "Extraction prompt for {}: {} chars",
            doc_type,
            prompt.len()
        );

        let response = timeout(
            self.config.extraction_timeout(),
            self.call_provider(prompt),
        )
        .await
        .map_err(|_| ExtractorError::Timeout)??;

        Ok(parse_extraction_response(&response))
    }

    /// Call the completion provider with temperature 0
    async fn call_provider(&self, prompt: String) -> Result<String, ExtractorError> {
        let provider = Arc::clone(&self.provider);
        let request = CompletionRequest::new(prompt);

        // Call in a blocking context since CompletionProvider is not async
        tokio::task::spawn_blocking(move || {
            provider
                .complete(&request)
                .map_err(|e| ExtractorError::Completion(e.to_string()))
        })
        .await
        .map_err(|e| ExtractorError::Completion(format!("Task join error: {}", e)))?
    }
}

/// Group chunk contents by document type, groups ordered by first
/// appearance, contents joined with blank lines
fn group_by_doc_type(results: &[RetrievedChunk]) -> Vec<(DocType, String)> {
    let mut order: Vec<DocType> = Vec::new();
    let mut contents: Vec<Vec<&str>> = Vec::new();

    for result in results {
        let doc_type = result.doc_type();
        match order.iter().position(|t| *t == doc_type) {
            Some(idx) => contents[idx].push(&result.chunk.content),
            None => {
                order.push(doc_type);
                contents.push(vec![&result.chunk.content]);
            }
        }
    }

    order
        .into_iter()
        .zip(contents.into_iter().map(|parts| parts.join("\n\n")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifest_domain::{Chunk, ChunkMetadata, SectionType};
    use manifest_llm::MockProvider;

    fn result(content: &str, doc_type: DocType) -> RetrievedChunk {
        RetrievedChunk {
            chunk: Chunk::new(
                content,
                ChunkMetadata {
                    reference_id: "LD53657".to_string(),
                    doc_type,
                    chunk_id: 1,
                    section_type: SectionType::Rates,
                    has_table: true,
                },
            ),
            distance: 0.2,
        }
    }

    #[test]
    fn test_grouping_preserves_first_appearance_order() {
        let results = vec![
            result("carrier A", DocType::CarrierRc),
            result("shipper A", DocType::ShipperRc),
            result("carrier B", DocType::CarrierRc),
        ];

        let groups = group_by_doc_type(&results);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, DocType::CarrierRc);
        assert_eq!(groups[0].1, "carrier A\n\ncarrier B");
        assert_eq!(groups[1].0, DocType::ShipperRc);
    }

    #[tokio::test]
    async fn test_extract_merges_per_type_records() {
        let mut provider = MockProvider::new(r#"{"rate": null}"#);
        provider.add_response("SHIPPER_RC", r#"{"rate": 500, "shipment_id": "LD53657"}"#);
        provider.add_response("CARRIER_RC", r#"{"rate": 400, "carrier_name": "Swift"}"#);

        let extractor = StructuredExtractor::new(provider, ExtractorConfig::default());
        let results = vec![
            result("Customer Rate: $500", DocType::ShipperRc),
            result("Carrier Pay: $400", DocType::CarrierRc),
        ];

        let merged = extractor.extract(&results).await.unwrap();
        assert_eq!(merged.record.rate, Some(500.0));
        assert_eq!(merged.record.carrier_name.as_deref(), Some("Swift"));
        assert_eq!(merged.record.shipment_id.as_deref(), Some("LD53657"));
        assert_eq!(merged.metadata.margin, Some(100.0));
        assert_eq!(
            merged.metadata.sources,
            vec![DocType::ShipperRc, DocType::CarrierRc]
        );
    }

    #[tokio::test]
    async fn test_malformed_group_degrades_to_null() {
        let provider = MockProvider::new("no JSON here, sorry");
        let extractor = StructuredExtractor::new(provider, ExtractorConfig::default());

        let merged = extractor
            .extract(&[result("Freight charges", DocType::Bol)])
            .await
            .unwrap();

        assert!(merged.record.is_null());
        assert_eq!(merged.metadata.sources, vec![DocType::Bol]);
    }

    #[tokio::test]
    async fn test_no_chunks_yields_empty_merge() {
        let provider = MockProvider::new("{}");
        let extractor = StructuredExtractor::new(provider, ExtractorConfig::default());

        let merged = extractor.extract(&[]).await.unwrap();
        assert!(merged.record.is_null());
        assert!(merged.metadata.sources.is_empty());
        assert_eq!(extractor.provider.call_count(), 0);
    }

    #[tokio::test]
    async fn test_requests_use_temperature_zero() {
        let provider = MockProvider::new("{}");
        let extractor = StructuredExtractor::new(provider, ExtractorConfig::default());

        extractor
            .extract(&[result("Freight charges", DocType::Bol)])
            .await
            .unwrap();

        let requests = extractor.provider.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].temperature, 0.0);
        assert_eq!(requests[0].max_tokens, None);
    }
}
