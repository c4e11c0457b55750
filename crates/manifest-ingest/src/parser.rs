//! Parsing service clients
//!
//! The PDF-to-markdown conversion is an external service. [`RestParser`]
//! talks to it over HTTP; [`MockParser`] returns canned markdown for tests.

use crate::error::IngestError;
use manifest_domain::traits::DocumentParser;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

/// Default timeout for parse requests (document conversion is slow)
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Conversion instruction sent with every parse request
///
/// Logistics documents are table-heavy; the parse service is told to keep
/// tables and section headers intact so the chunker can split on them.
const PARSING_INSTRUCTION: &str = "This is a logistics document. Preserve all tables. \
Maintain headers for sections like Pickup, Delivery, Rate Breakdown.";

/// One parsed document in the service response
#[derive(Deserialize)]
struct ParsedDocument {
    text: String,
}

/// HTTP client for the external parsing service
///
/// POSTs the raw file bytes and receives a JSON array of parsed documents.
/// The service may return multiple logical documents per file; only the
/// first is used.
pub struct RestParser {
    endpoint: String,
    client: reqwest::Client,
}

impl RestParser {
    /// Create a parser client for the given service endpoint
    pub fn new(endpoint: impl Into<String>) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()
            .expect("reqwest client construction cannot fail with static options");

        Self {
            endpoint: endpoint.into(),
            client,
        }
    }

    /// Parse file bytes into markdown text
    pub async fn parse(&self, bytes: &[u8]) -> Result<String, IngestError> {
        let url = format!("{}/parse", self.endpoint);

        let response = self
            .client
            .post(&url)
            .query(&[
                ("result_type", "markdown"),
                ("parsing_instruction", PARSING_INSTRUCTION),
            ])
            .header(reqwest::header::CONTENT_TYPE, "application/octet-stream")
            .body(bytes.to_vec())
            .send()
            .await
            .map_err(|e| IngestError::Communication(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(IngestError::Communication(format!(
                "HTTP {}: {}",
                status, error_text
            )));
        }

        let documents: Vec<ParsedDocument> = response
            .json()
            .await
            .map_err(|e| IngestError::InvalidResponse(format!("Failed to parse response: {}", e)))?;

        debug!(documents = documents.len(), "parse service responded");

        // One logical document per call; a multi-result response is reduced
        // to its first entry.
        documents
            .into_iter()
            .next()
            .map(|d| d.text)
            .ok_or(IngestError::EmptyResult)
    }
}

impl DocumentParser for RestParser {
    type Error = IngestError;

    fn parse(&self, bytes: &[u8]) -> Result<String, Self::Error> {
        // Blocking wrapper for async function
        tokio::runtime::Runtime::new()
            .map_err(|e| IngestError::Communication(format!("Runtime error: {}", e)))?
            .block_on(async { self.parse(bytes).await })
    }
}

/// Mock parsing service for deterministic testing
///
/// Returns a fixed markdown text for every input.
#[derive(Debug, Clone)]
pub struct MockParser {
    markdown: String,
}

impl MockParser {
    /// Create a mock parser returning the given markdown
    pub fn new(markdown: impl Into<String>) -> Self {
        Self {
            markdown: markdown.into(),
        }
    }
}

impl DocumentParser for MockParser {
    type Error = IngestError;

    fn parse(&self, _bytes: &[u8]) -> Result<String, Self::Error> {
        Ok(self.markdown.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_parser_returns_fixed_markdown() {
        let parser = MockParser::new("# Doc\n## Pickup\nMonday");
        let result = DocumentParser::parse(&parser, b"ignored bytes").unwrap();
        assert_eq!(result, "# Doc\n## Pickup\nMonday");
    }

    #[test]
    fn test_rest_parser_creation() {
        let parser = RestParser::new("http://localhost:9000");
        assert_eq!(parser.endpoint, "http://localhost:9000");
    }

    #[tokio::test]
    async fn test_rest_parser_unreachable_endpoint() {
        let parser = RestParser::new("http://localhost:1");
        let result = parser.parse(b"%PDF-1.4").await;
        assert!(matches!(result, Err(IngestError::Communication(_))));
    }
}
