//! Data models for the WanderPlan application
//!
//! This module contains the ephemeral domain models organized by concern:
//! - Trip: the raw form submission and the validated trip request
//! - Itinerary: the generated plan text

pub mod itinerary;
pub mod trip;

// Re-export all public types for convenient access
pub use itinerary::Itinerary;
pub use trip::{Budget, MAX_TRIP_DAYS, MIN_TRIP_DAYS, TripForm, TripRequest};
