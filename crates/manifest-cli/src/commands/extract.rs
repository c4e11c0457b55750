//! Extract command implementation

use crate::cli::ExtractArgs;
use crate::commands::{build_provider, open_index};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use manifest_domain::traits::VectorIndex;
use manifest_domain::MetadataFilter;
use manifest_extractor::{ExtractorConfig, StructuredExtractor};

/// Document-set pool size for extraction; generous because every chunk of
/// every document type under the reference id should contribute
const EXTRACTION_POOL: usize = 20;

/// Execute the extract command
pub async fn execute_extract(
    args: ExtractArgs,
    config: &Config,
    formatter: &Formatter,
) -> Result<()> {
    if args.reference_id.trim().is_empty() {
        return Err(CliError::InvalidInput("reference_id is required".into()));
    }

    let index = open_index(config)?;
    let filter = MetadataFilter::for_reference(&args.reference_id);
    let results = index.query(&args.reference_id, EXTRACTION_POOL, &filter)?;

    if results.is_empty() {
        println!(
            "{}",
            formatter.warning(&format!(
                "No documents found for reference_id: {}",
                args.reference_id
            ))
        );
        return Ok(());
    }

    let provider = build_provider(config);
    let extractor = StructuredExtractor::new(provider, ExtractorConfig::default());
    let merged = extractor.extract(&results).await?;

    println!("{}", formatter.format_record(&merged)?);
    Ok(())
}
