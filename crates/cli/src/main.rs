mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tac_core::{load_config, validate_config};

use cli::Cli;
use commands::OutputOptions;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    if let Err(e) = run().await {
        error!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<()> {
    // Logs go to stderr; stdout only carries the summary line
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(Some(path.as_path()))
            .with_context(|| format!("Failed to load config from {:?}", path))?,
        None => load_config(None).context("Failed to load config")?,
    };
    validate_config(&config).context("Configuration validation failed")?;

    info!(
        output_dir = %config.output_dir.display(),
        timeout = config.timeout,
        "Configuration loaded"
    );

    let export = commands::fetch(&cli.provider, &config).await?;

    let options = OutputOptions {
        dir: cli.output.clone().unwrap_or_else(|| config.output_dir.clone()),
        append: cli.append,
        timestamp: !cli.no_timestamp,
    };
    let (count, path) = commands::save(&export, &options)?;

    println!("Saved {} rows to {}", count, path.display());
    Ok(())
}
