//! Configuration for confidence scoring and guardrails

use serde::{Deserialize, Serialize};

/// Threshold configuration for the gatekeeper
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuardrailConfig {
    /// Below this confidence the answer gets a warning banner
    pub low_confidence_threshold: f64,

    /// Below this confidence the answer gets an inline verification note
    pub verification_threshold: f64,

    /// Maximum acceptable best-candidate distance for the pre-generation
    /// usability check (stricter than the retriever's hard ceiling)
    pub retrieval_threshold: f32,

    /// Distance normalization scale for the retrieval components of the
    /// confidence score
    pub distance_scale: f32,
}

impl Default for GuardrailConfig {
    fn default() -> Self {
        Self {
            low_confidence_threshold: 0.4,
            verification_threshold: 0.65,
            retrieval_threshold: 0.85,
            distance_scale: 2.5,
        }
    }
}

impl GuardrailConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if !(0.0..=1.0).contains(&self.low_confidence_threshold) {
            return Err("low_confidence_threshold must be in [0, 1]".to_string());
        }
        if !(0.0..=1.0).contains(&self.verification_threshold) {
            return Err("verification_threshold must be in [0, 1]".to_string());
        }
        if self.low_confidence_threshold > self.verification_threshold {
            return Err(
                "low_confidence_threshold cannot exceed verification_threshold".to_string(),
            );
        }
        if self.retrieval_threshold <= 0.0 {
            return Err("retrieval_threshold must be greater than 0".to_string());
        }
        if self.distance_scale <= 0.0 {
            return Err("distance_scale must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}
