//! Guardrail gate - annotation and pre-generation checks

use crate::config::GuardrailConfig;
use manifest_domain::RetrievedChunk;

/// The Gatekeeper annotates answers and vets retrievals against the
/// configured thresholds
pub struct Gatekeeper {
    config: GuardrailConfig,
}

impl Gatekeeper {
    /// Create a new Gatekeeper with the given configuration
    pub fn new(config: GuardrailConfig) -> Self {
        Self { config }
    }

    /// Create a Gatekeeper with default configuration
    pub fn default_config() -> Self {
        Self::new(GuardrailConfig::default())
    }

    /// The active configuration
    pub fn config(&self) -> &GuardrailConfig {
        &self.config
    }

    /// Annotate an answer according to its confidence
    ///
    /// - Below the low-confidence threshold: wrap in a warning banner that
    ///   carries the literal confidence value and a verification reminder;
    ///   the original answer text is preserved unchanged inside.
    /// - Below the verification threshold: append an inline note.
    /// - Otherwise: return the answer unmodified.
    pub fn annotate(&self, answer: &str, confidence: f64) -> String {
        if confidence < self.config.low_confidence_threshold {
            format!(
                "WARNING: LOW CONFIDENCE ({})\n\n{}\n\nPlease verify in the original document.",
                confidence, answer
            )
        } else if confidence < self.config.verification_threshold {
            format!(
                "{}\n\n(Confidence: {} - Recommend verification)",
                answer, confidence
            )
        } else {
            answer.to_string()
        }
    }

    /// Pre-generation check: is this retrieval good enough to spend a
    /// completion call on?
    ///
    /// Uses the strict `retrieval_threshold` (default 0.85), independent of
    /// the retriever's hard failure ceiling.
    pub fn retrieval_usable(&self, results: &[RetrievedChunk]) -> bool {
        match results.first() {
            Some(best) => best.distance < self.config.retrieval_threshold,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use manifest_domain::{Chunk, ChunkMetadata, DocType, SectionType};

    fn result_at(distance: f32) -> RetrievedChunk {
        RetrievedChunk {
            chunk: Chunk::new(
                "content",
                ChunkMetadata {
                    reference_id: "LD1".to_string(),
                    doc_type: DocType::Bol,
                    chunk_id: 0,
                    section_type: SectionType::General,
                    has_table: false,
                },
            ),
            distance,
        }
    }

    #[test]
    fn test_low_confidence_banner() {
        let gatekeeper = Gatekeeper::default_config();
        let annotated = gatekeeper.annotate("The rate is $500.", 0.35);

        assert!(annotated.contains("LOW CONFIDENCE"));
        assert!(annotated.contains("0.35"), "banner carries the literal confidence");
        assert!(
            annotated.contains("The rate is $500."),
            "original answer preserved as a substring"
        );
        assert!(annotated.to_lowercase().contains("verify"));
    }

    #[test]
    fn test_mid_confidence_inline_note() {
        let gatekeeper = Gatekeeper::default_config();
        let annotated = gatekeeper.annotate("The rate is $500.", 0.5);

        assert!(annotated.starts_with("The rate is $500."));
        assert!(annotated.contains("Confidence: 0.5"));
        assert!(!annotated.contains("LOW CONFIDENCE"));
    }

    #[test]
    fn test_high_confidence_unmodified() {
        let gatekeeper = Gatekeeper::default_config();
        assert_eq!(gatekeeper.annotate("The rate is $500.", 0.8), "The rate is $500.");
    }

    #[test]
    fn test_threshold_boundaries() {
        let gatekeeper = Gatekeeper::default_config();
        // Exactly at a threshold falls into the milder bucket
        assert!(!gatekeeper.annotate("answer", 0.4).contains("LOW CONFIDENCE"));
        assert_eq!(gatekeeper.annotate("answer", 0.65), "answer");
    }

    #[test]
    fn test_retrieval_usable() {
        let gatekeeper = Gatekeeper::default_config();
        assert!(gatekeeper.retrieval_usable(&[result_at(0.5)]));
        assert!(!gatekeeper.retrieval_usable(&[result_at(0.9)]));
        assert!(!gatekeeper.retrieval_usable(&[]));
    }

    #[test]
    fn test_retrieval_usable_checks_best_only() {
        let gatekeeper = Gatekeeper::default_config();
        // Trailing poor results are irrelevant, only the best matters
        assert!(gatekeeper.retrieval_usable(&[result_at(0.3), result_at(2.4)]));
    }
}
