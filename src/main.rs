use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use travelgems::{AppState, TravelGemsConfig, telemetry, web};

/// Hidden gems, artisans and AI itineraries for sustainable regional tourism
#[derive(Debug, Parser)]
#[command(name = "travelgems", version, about)]
struct Cli {
    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the listen port
    #[arg(long)]
    port: Option<u16>,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = TravelGemsConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    telemetry::init_tracing(&config.logging, cli.verbose)?;
    tracing::info!(
        version = travelgems::VERSION,
        ai_enabled = config.ai_enabled(),
        "Starting TravelGems"
    );

    let state = AppState::from_config(&config).context("Failed to initialise application state")?;
    web::run(&config.server, state).await
}
