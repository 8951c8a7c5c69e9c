//! `WanderPlan` - AI travel itinerary planning
//!
//! This library turns a five-field trip form into a generation prompt,
//! asks a text-generation service for an itinerary and exports the result
//! as a DOCX document.

pub mod api;
pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod generation;
pub mod models;
pub mod planner;
pub mod prompt;
pub mod telemetry;
pub mod web;

// Re-export core types for public API
pub use config::TravelPlanConfig;
pub use document::{DOCX_MIME_TYPE, ExportedDocument, ItineraryDocument};
pub use error::TravelPlanError;
pub use generation::{GeminiClient, ItineraryGenerator};
pub use models::{Budget, Itinerary, TripForm, TripRequest};
pub use planner::{PlanOutcome, Planner};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelPlanError>;
