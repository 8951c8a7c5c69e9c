//! CLI command definitions and subcommands

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::api::AppState;
use crate::config::TravelPlanConfig;
use crate::document::{self, ItineraryDocument};
use crate::models::TripForm;
use crate::planner::{PlanOutcome, Planner};
use crate::web;

/// WanderPlan - AI travel itinerary planner
#[derive(Parser, Debug)]
#[command(
    name = "wanderplan",
    about = "AI travel itinerary planner with DOCX export",
    version
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute (defaults to `serve`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Serve the trip form and itinerary API over HTTP
    Serve {
        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Generate one itinerary and write it as a DOCX file
    Plan(PlanArgs),
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Departure city
    #[arg(long, default_value = "")]
    pub departure: String,

    /// Destination city
    #[arg(long, default_value = "")]
    pub destination: String,

    /// Number of days (1-30)
    #[arg(long, allow_negative_numbers = true)]
    pub days: Option<i64>,

    /// Interests, e.g. "adventure, culture, food"
    #[arg(long, default_value = "")]
    pub interests: String,

    /// Budget tier: Low, Medium or High
    #[arg(long, default_value = "")]
    pub budget: String,

    /// Where to write the document (defaults to a temporary file)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Print the outcome as JSON instead of text
    #[arg(long)]
    pub json: bool,
}

impl From<&PlanArgs> for TripForm {
    fn from(args: &PlanArgs) -> Self {
        TripForm {
            departure: args.departure.clone(),
            destination: args.destination.clone(),
            days: args.days,
            interests: args.interests.clone(),
            budget: args.budget.clone(),
        }
    }
}

impl Command {
    pub async fn execute(self, config: &TravelPlanConfig, planner: Planner) -> Result<()> {
        match self {
            Command::Serve { host, port } => {
                let host = host.unwrap_or_else(|| config.server.host.clone());
                let port = port.unwrap_or(config.server.port);
                web::run(&host, port, AppState { planner }).await
            }
            Command::Plan(args) => plan(&args, &planner).await,
        }
    }
}

async fn plan(args: &PlanArgs, planner: &Planner) -> Result<()> {
    let form = TripForm::from(args);
    let outcome = planner
        .plan(&form)
        .await
        .context("Failed to generate itinerary")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    let (request, itinerary) = match outcome {
        PlanOutcome::Generated { request, itinerary } => (request, itinerary),
        PlanOutcome::Incomplete { warning, .. } => {
            if !args.json {
                println!("Warning: {warning}");
            }
            return Ok(());
        }
    };

    let (path, file_name) = match &args.output {
        Some(path) => {
            ItineraryDocument::new(&itinerary, &request.departure, &request.destination)
                .write_to(path)?;
            (
                path.clone(),
                document::download_file_name(&request.departure, &request.destination),
            )
        }
        None => {
            let exported = document::export(&itinerary, &request.departure, &request.destination)?;
            (exported.path, exported.file_name)
        }
    };

    if !args.json {
        println!("Generated Travel Itinerary\n");
        println!("{itinerary}\n");
        println!("Saved {} to {}", file_name, path.display());
    }
    Ok(())
}
