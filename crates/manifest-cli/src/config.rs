//! Configuration management for the CLI

use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// CLI configuration, persisted as TOML under `~/.manifest/`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Completion service settings
    #[serde(default)]
    pub llm: LlmSettings,

    /// Parse service endpoint for non-text documents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parse_endpoint: Option<String>,

    /// Index snapshot location; defaults to `~/.manifest/index.json`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index_path: Option<PathBuf>,

    /// Embedding dimension for the hash embedder
    #[serde(default = "default_embedding_dimension")]
    pub embedding_dimension: usize,

    /// Global settings
    #[serde(default)]
    pub settings: Settings,
}

/// Completion service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// API endpoint (OpenAI-compatible)
    pub endpoint: String,

    /// Model name
    pub model: String,

    /// Environment variable holding the API key
    pub api_key_env: String,
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://api.openai.com".to_string(),
            model: "gpt-4o-mini".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
        }
    }
}

/// Global CLI settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Enable colored output
    #[serde(default = "default_true")]
    pub color: bool,

    /// Default output format
    #[serde(default = "default_format")]
    pub format: OutputFormat,
}

/// Output format
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// JSON format
    Json,
}

fn default_true() -> bool {
    true
}

fn default_format() -> OutputFormat {
    OutputFormat::Text
}

fn default_embedding_dimension() -> usize {
    256
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            color: true,
            format: OutputFormat::Text,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            llm: LlmSettings::default(),
            parse_endpoint: None,
            index_path: None,
            embedding_dimension: default_embedding_dimension(),
            settings: Settings::default(),
        }
    }
}

impl Config {
    /// Get the configuration directory
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
        Ok(home.join(".manifest"))
    }

    /// Get the configuration file path
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load configuration from file or create default
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if path.exists() {
            let contents = fs::read_to_string(&path)?;
            let config: Config = toml::from_str(&contents)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| CliError::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(&path, contents)?;
        Ok(())
    }

    /// Resolve the index snapshot path
    pub fn index_path(&self) -> Result<PathBuf> {
        match &self.index_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::dir()?.join("index.json")),
        }
    }

    /// Read the API key from the configured environment variable
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.llm.api_key_env).ok()
    }
}
