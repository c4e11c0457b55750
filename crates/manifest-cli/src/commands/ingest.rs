//! Ingest command implementation

use crate::cli::IngestArgs;
use crate::commands::{open_index, save_index};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use manifest_domain::traits::VectorIndex;
use manifest_ingest::{DocumentChunker, RestParser};
use std::path::Path;

/// File extensions read directly as text, bypassing the parse service
const TEXT_EXTENSIONS: &[&str] = &["md", "markdown", "txt"];

/// Execute the ingest command
pub async fn execute_ingest(
    args: IngestArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    let mut index = open_index(config)?;
    let chunker = DocumentChunker::new();

    for file in &args.files {
        let markdown = read_document(file, config).await?;
        let chunks = chunker.process(&markdown);

        let reference_id = chunks
            .first()
            .map(|c| c.metadata.reference_id.clone())
            .unwrap_or_default();
        let doc_type = chunks
            .first()
            .map(|c| c.metadata.doc_type.to_string())
            .unwrap_or_default();

        let accepted = index.add_chunks(&chunks)?;
        println!(
            "{}",
            formatter.success(&format!(
                "{}: {} chunk(s) indexed (reference {}, type {})",
                file.display(),
                accepted,
                reference_id,
                doc_type
            ))
        );
    }

    save_index(config, &index)?;
    Ok(())
}

/// Read a document as markdown, going through the parse service for
/// non-text formats
async fn read_document(file: &Path, config: &Config) -> Result<String> {
    let is_text = file
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| TEXT_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false);

    if is_text {
        return Ok(std::fs::read_to_string(file)?);
    }

    let endpoint = config.parse_endpoint.as_ref().ok_or_else(|| {
        CliError::InvalidInput(format!(
            "{} is not a text file and no parse_endpoint is configured",
            file.display()
        ))
    })?;

    let bytes = std::fs::read(file)?;
    let parser = RestParser::new(endpoint);
    Ok(parser.parse(&bytes).await?)
}
