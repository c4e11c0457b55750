//! Configuration for the structured extractor

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the structured extractor
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// Maximum time for one per-type extraction call (seconds)
    pub extraction_timeout_secs: u64,

    /// Maximum concatenated group content length (characters); longer
    /// groups are truncated before prompting
    pub max_group_content_len: usize,
}

impl ExtractorConfig {
    /// Get the extraction timeout as a Duration
    pub fn extraction_timeout(&self) -> Duration {
        Duration::from_secs(self.extraction_timeout_secs)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.extraction_timeout_secs == 0 {
            return Err("extraction_timeout_secs must be greater than 0".to_string());
        }
        if self.max_group_content_len == 0 {
            return Err("max_group_content_len must be greater than 0".to_string());
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

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            extraction_timeout_secs: 120,
            max_group_content_len: 50_000,
        }
    }
}
