//! Status command implementation

use crate::commands::open_index;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use manifest_domain::traits::VectorIndex;

/// Execute the status command
pub async fn execute_status(config: &Config, formatter: &Formatter) -> Result<()> {
    let index = open_index(config)?;
    let path = config.index_path()?;

    println!("{}", formatter.info(&format!("Index: {}", path.display())));
    println!("Indexed chunks: {}", index.len());
    println!("Embedding dimension: {}", config.embedding_dimension);
    println!("Model: {} ({})", config.llm.model, config.llm.endpoint);
    match &config.parse_endpoint {
        Some(endpoint) => println!("Parse service: {}", endpoint),
        None => println!("Parse service: not configured (text files only)"),
    }

    Ok(())
}
