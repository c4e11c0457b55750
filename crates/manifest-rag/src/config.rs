//! Configuration for the retriever and answer generator

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the RAG engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetrieverConfig {
    /// Oversized candidate pool size queried before diversity re-ranking
    pub pool_size: usize,

    /// Result count after diversity re-ranking
    pub target_results: usize,

    /// Hard distance ceiling: if the best candidate exceeds this, the
    /// retrieval failed and no generation is attempted
    pub max_distance: f32,

    /// Sampling temperature for answer generation
    pub answer_temperature: f32,

    /// Completion length cap for answers
    pub answer_max_tokens: u32,

    /// Maximum time for a single completion call (seconds)
    pub completion_timeout_secs: u64,
}

impl RetrieverConfig {
    /// Get the completion timeout as a Duration
    pub fn completion_timeout(&self) -> Duration {
        Duration::from_secs(self.completion_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.pool_size == 0 {
            return Err("pool_size must be greater than 0".to_string());
        }
        if self.target_results == 0 {
            return Err("target_results must be greater than 0".to_string());
        }
        if self.target_results > self.pool_size {
            return Err("target_results cannot exceed pool_size".to_string());
        }
        if self.max_distance <= 0.0 {
            return Err("max_distance must be positive".to_string());
        }
        if !(0.0..=2.0).contains(&self.answer_temperature) {
            return Err("answer_temperature must be in [0.0, 2.0]".to_string());
        }
        if self.completion_timeout_secs == 0 {
            return Err("completion_timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Load configuration from a TOML string
    pub fn from_toml(content: &str) -> Result<Self, String> {
        let config: Self =
            toml::from_str(content).map_err(|e| format!("Failed to parse config: {}", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize configuration to a TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize config: {}", e))
    }
}

impl Default for RetrieverConfig {
    fn default() -> Self {
        Self {
            pool_size: 15,
            target_results: 5,
            max_distance: 2.0,
            answer_temperature: 0.1,
            answer_max_tokens: 150,
            completion_timeout_secs: 60,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(RetrieverConfig::default().validate().is_ok());
    }

    #[test]
    fn test_target_exceeding_pool_rejected() {
        let config = RetrieverConfig {
            pool_size: 3,
            target_results: 5,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_round_trip() {
        let config = RetrieverConfig::default();
        let toml_str = config.to_toml().unwrap();
        let parsed = RetrieverConfig::from_toml(&toml_str).unwrap();
        assert_eq!(parsed.pool_size, config.pool_size);
        assert_eq!(parsed.max_distance, config.max_distance);
        assert_eq!(parsed.answer_max_tokens, config.answer_max_tokens);
    }

    #[test]
    fn test_zero_pool_rejected() {
        let config = RetrieverConfig {
            pool_size: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
