//! Reset command implementation

use crate::cli::ResetArgs;
use crate::commands::{open_index, save_index};
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use manifest_domain::traits::VectorIndex;
use std::io::{self, BufRead, Write};

/// Execute the reset command
pub async fn execute_reset(args: ResetArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let mut index = open_index(config)?;

    if index.is_empty() {
        println!("{}", formatter.info("Corpus is already empty"));
        return Ok(());
    }

    if !args.yes && !confirm(index.len())? {
        println!("{}", formatter.info("Reset cancelled"));
        return Ok(());
    }

    index.clear()?;
    save_index(config, &index)?;
    println!("{}", formatter.success("Corpus cleared"));
    Ok(())
}

fn confirm(chunk_count: usize) -> Result<bool> {
    print!(
        "This will permanently delete {} indexed chunk(s). Continue? [y/N] ",
        chunk_count
    );
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
}
