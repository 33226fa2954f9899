//! Orbit CLI entry point.

use anyhow::{Context, Result};
use clap::Parser;

use orbit::cli::commands::{archive, serve, text};
use orbit::cli::{Cli, Commands};
use orbit::infrastructure::config::ConfigLoader;
use orbit::infrastructure::logging::{LogConfig, LoggerImpl};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    let json = cli.json;

    if let Err(err) = run(cli).await {
        orbit::cli::handle_error(err, json);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)?,
        None => ConfigLoader::load()?,
    };

    let _logger = LoggerImpl::init(&LogConfig::from(&config.logging))
        .context("Failed to initialize logging")?;

    match cli.command {
        Commands::Serve(args) => serve::execute(&args, config).await,
        Commands::Analyze(args) => text::analyze(&args, &config, cli.json),
        Commands::Rephrase(args) => text::rephrase(&args, cli.json),
        Commands::Grammar(args) => text::grammar(&args, cli.json),
        Commands::Summarize(args) => text::summarize(&args, cli.json),
        Commands::Transform(args) => text::transform(&args, cli.json),
        Commands::Save(args) => archive::save(&args, &config, cli.json).await,
        Commands::History(args) => archive::history(&args, &config, cli.json).await,
        Commands::Stats => archive::stats(&config, cli.json).await,
    }
}
