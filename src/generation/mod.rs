//! Itinerary text generation
//!
//! The planner talks to the generation service through the
//! [`ItineraryGenerator`] trait; [`gemini::GeminiClient`] is the production
//! implementation.

use async_trait::async_trait;

use crate::Result;
use crate::models::Itinerary;

pub mod gemini;

pub use gemini::GeminiClient;

#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    /// Short provider name used in logs
    fn name(&self) -> &str;

    /// Send one prompt and return the full generated text
    async fn generate(&self, prompt: &str) -> Result<Itinerary>;
}
