//! Itinerary planning pipeline
//!
//! One interaction: validate the form, build the prompt, call the generator.
//! Nothing is retried and nothing is kept between interactions.

use std::sync::Arc;

use serde::Serialize;
use tracing::{info, instrument, warn};

use crate::Result;
use crate::generation::ItineraryGenerator;
use crate::models::{Itinerary, TripForm, TripRequest};
use crate::prompt::build_prompt;

/// Shown when any form field is empty
pub const INCOMPLETE_FORM_WARNING: &str =
    "Please fill in all the fields to generate the itinerary.";

/// Terminal outcome of one planning interaction
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum PlanOutcome {
    /// Some fields were empty; the generator was not called
    Incomplete {
        warning: String,
        missing: Vec<&'static str>,
    },
    Generated {
        request: TripRequest,
        itinerary: Itinerary,
    },
}

#[derive(Clone)]
pub struct Planner {
    generator: Arc<dyn ItineraryGenerator>,
}

impl Planner {
    pub fn new(generator: Arc<dyn ItineraryGenerator>) -> Self {
        Self { generator }
    }

    #[instrument(skip_all, fields(generator = self.generator.name()))]
    pub async fn plan(&self, form: &TripForm) -> Result<PlanOutcome> {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            warn!("Incomplete trip form, missing: {}", missing.join(", "));
            return Ok(PlanOutcome::Incomplete {
                warning: INCOMPLETE_FORM_WARNING.to_string(),
                missing,
            });
        }

        let request = form.to_request()?;
        info!(
            "Planning {} day trip from {} to {}",
            request.days, request.departure, request.destination
        );

        let prompt = build_prompt(&request);
        let itinerary = self.generator.generate(&prompt).await?;

        Ok(PlanOutcome::Generated { request, itinerary })
    }
}
