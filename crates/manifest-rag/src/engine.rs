//! The question-answering engine

use crate::config::RetrieverConfig;
use crate::error::RagError;
use crate::prompt::build_answer_prompt;
use crate::retriever::{build_filter, diversify};
use manifest_domain::traits::{CompletionProvider, CompletionRequest, VectorIndex};
use manifest_domain::{AskResponse, RetrievedChunk, SourceRef};
use manifest_gatekeeper::{calculate_confidence, Gatekeeper, GuardrailConfig};
use std::sync::{Arc, Mutex};
use tokio::time::timeout;
use tracing::{debug, info};

/// The RagEngine answers natural-language questions from the chunk corpus
pub struct RagEngine<P, V>
where
    P: CompletionProvider,
    V: VectorIndex,
{
    provider: Arc<P>,
    index: Arc<Mutex<V>>,
    gatekeeper: Gatekeeper,
    config: RetrieverConfig,
}

impl<P, V> RagEngine<P, V>
where
    P: CompletionProvider + Send + Sync + 'static,
    V: VectorIndex,
    P::Error: std::fmt::Display,
    V::Error: std::fmt::Display,
{
    /// Create a new engine with default guardrail thresholds
    pub fn new(provider: P, index: Arc<Mutex<V>>, config: RetrieverConfig) -> Self {
        Self {
            provider: Arc::new(provider),
            index,
            gatekeeper: Gatekeeper::new(GuardrailConfig::default()),
            config,
        }
    }

    /// Replace the gatekeeper configuration
    pub fn with_guardrails(mut self, guardrail_config: GuardrailConfig) -> Self {
        self.gatekeeper = Gatekeeper::new(guardrail_config);
        self
    }

    /// The completion provider behind this engine
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Answer a question, optionally scoped to one document
    ///
    /// Always produces a structured response; empty or unusable retrieval
    /// degrades to a "not found" response rather than an error. Only
    /// input-validation and external-service failures surface as errors.
    pub async fn ask(
        &self,
        question: &str,
        reference_id: Option<&str>,
    ) -> Result<AskResponse, RagError> {
        if question.trim().is_empty() {
            return Err(RagError::EmptyQuestion);
        }

        let filter = build_filter(question, reference_id);
        debug!(
            reference_id = ?filter.reference_id,
            doc_type = ?filter.doc_type,
            "Built retrieval filter"
        );

        let pool = {
            let index = self
                .index
                .lock()
                .map_err(|e| RagError::Index(e.to_string()))?;
            index
                .query(question, self.config.pool_size, &filter)
                .map_err(|e| RagError::Index(e.to_string()))?
        };

        let results = diversify(pool, self.config.target_results);
        info!(
            "Retrieved {} chunks after diversity re-ranking for question '{}'",
            results.len(),
            question
        );

        if !self.retrieval_succeeded(&results) {
            info!("Retrieval failed hard ceiling, returning not-found response");
            return Ok(AskResponse::not_found());
        }

        let prompt = build_answer_prompt(question, &results, reference_id);
        debug!("Prompt length: {} chars", prompt.len());

        let answer = timeout(self.config.completion_timeout(), self.call_provider(prompt))
            .await
            .map_err(|_| RagError::Timeout)??;

        let confidence = calculate_confidence(&results, &answer, self.gatekeeper.config());
        let final_answer = self.gatekeeper.annotate(&answer, confidence);

        let sources = results.iter().take(3).map(SourceRef::from_result).collect();

        Ok(AskResponse {
            answer: final_answer,
            confidence,
            sources,
        })
    }

    /// Hard retrieval gate: non-empty pool with best distance within the ceiling
    fn retrieval_succeeded(&self, results: &[RetrievedChunk]) -> bool {
        match results.first() {
            Some(best) => best.distance <= self.config.max_distance,
            None => false,
        }
    }

    /// Call the completion provider
    async fn call_provider(&self, prompt: String) -> Result<String, RagError> {
        let provider = Arc::clone(&self.provider);
        let request = CompletionRequest::new(prompt)
            .with_temperature(self.config.answer_temperature)
            .with_max_tokens(self.config.answer_max_tokens);

        // Call in a blocking context since CompletionProvider is not async
        tokio::task::spawn_blocking(move || {
            provider
                .complete(&request)
                .map_err(|e| RagError::Completion(e.to_string()))
        })
        .await
        .map_err(|e| RagError::Completion(format!("Task join error: {}", e)))?
    }
}
