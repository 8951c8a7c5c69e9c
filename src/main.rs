use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use wanderplan::cli::{Cli, Command};
use wanderplan::{GeminiClient, Planner, TravelPlanConfig, telemetry};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = TravelPlanConfig::load_from_path(cli.config.clone())
        .context("Failed to load configuration")?;
    telemetry::init(&config.logging, cli.verbose)?;

    if config.has_api_key() {
        info!("Using Gemini model {}", config.gemini.model);
    } else {
        warn!("No Gemini API key configured; itinerary generation will fail");
    }

    let generator = GeminiClient::new(&config.gemini)?;
    let planner = Planner::new(Arc::new(generator));

    let command = cli.command.unwrap_or(Command::Serve {
        host: None,
        port: None,
    });
    command.execute(&config, planner).await
}
