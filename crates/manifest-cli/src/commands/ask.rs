//! Ask command implementation

use crate::cli::AskArgs;
use crate::commands::{build_provider, open_index};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use manifest_rag::{RagEngine, RetrieverConfig};
use std::sync::{Arc, Mutex};

/// Execute the ask command
pub async fn execute_ask(args: AskArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let index = Arc::new(Mutex::new(open_index(config)?));
    let provider = build_provider(config);
    let engine = RagEngine::new(provider, index, RetrieverConfig::default());

    let response = engine
        .ask(&args.question, args.reference_id.as_deref())
        .await?;

    println!("{}", formatter.format_answer(&response)?);
    Ok(())
}
