//! Output formatting for the CLI

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use manifest_domain::{AskResponse, MergedRecord, RECORD_FIELDS};

/// Output formatter
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format an answer with confidence and sources
    pub fn format_answer(&self, response: &AskResponse) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(response)?),
            OutputFormat::Text => {
                let mut lines = Vec::new();
                lines.push(response.answer.clone());
                lines.push(String::new());
                lines.push(self.colorize(
                    &format!("Confidence: {:.2}", response.confidence),
                    "cyan",
                ));

                if !response.sources.is_empty() {
                    lines.push(self.colorize("Sources:", "cyan"));
                    for (i, source) in response.sources.iter().enumerate() {
                        lines.push(format!(
                            "  [{}] {} / {} (distance {:.3})",
                            i + 1,
                            source.doc_type,
                            source.section,
                            source.distance
                        ));
                    }
                }

                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a merged extraction record
    pub fn format_record(&self, merged: &MergedRecord) -> Result<String> {
        match self.format {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(merged)?),
            OutputFormat::Text => {
                let value = serde_json::to_value(merged)?;
                let mut lines = Vec::new();

                for field in RECORD_FIELDS {
                    let rendered = match &value[field] {
                        serde_json::Value::Null => self.colorize("null", "yellow"),
                        serde_json::Value::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    lines.push(format!("{:<18} {}", format!("{}:", field), rendered));
                }

                lines.push(String::new());
                let sources: Vec<String> = merged
                    .metadata
                    .sources
                    .iter()
                    .map(|t| t.to_string())
                    .collect();
                lines.push(format!("Sources: {}", sources.join(", ")));
                if let Some(margin) = merged.metadata.margin {
                    lines.push(self.colorize(&format!("Margin: {:.2}", margin), "green"));
                }

                Ok(lines.join("\n"))
            }
        }
    }

    /// Format a success message
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "green" => text.green().to_string(),
            "red" => text.red().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}
