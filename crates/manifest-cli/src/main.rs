//! Manifest CLI - Q&A and structured extraction over logistics documents

use clap::Parser;
use manifest_cli::commands;
use manifest_cli::{Cli, Command, Config, Formatter};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> manifest_cli::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    let format = cli.format.map(Into::into).unwrap_or(config.settings.format);
    let color_enabled = !cli.no_color && config.settings.color;
    let formatter = Formatter::new(format, color_enabled);

    match cli.command {
        Command::Ingest(args) => commands::execute_ingest(args, &config, &formatter).await?,
        Command::Ask(args) => commands::execute_ask(args, &config, &formatter).await?,
        Command::Extract(args) => commands::execute_extract(args, &config, &formatter).await?,
        Command::Reset(args) => commands::execute_reset(args, &config, &formatter).await?,
        Command::Status => commands::execute_status(&config, &formatter).await?,
    }

    Ok(())
}
