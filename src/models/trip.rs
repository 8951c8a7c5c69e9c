//! Trip form and validated trip request

use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::str::FromStr;

use crate::{Result, TravelPlanError};

/// Shortest trip the planner accepts, in days
pub const MIN_TRIP_DAYS: i64 = 1;
/// Longest trip the planner accepts, in days
pub const MAX_TRIP_DAYS: i64 = 30;

/// Spending preference, only ever used as prompt text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Budget {
    Low,
    Medium,
    High,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Low, Budget::Medium, Budget::High];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Budget::Low => "Low",
            Budget::Medium => "Medium",
            Budget::High => "High",
        }
    }
}

impl Display for Budget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Budget {
    type Err = TravelPlanError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Budget::ALL
            .into_iter()
            .find(|budget| budget.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                TravelPlanError::validation(format!(
                    "Unknown budget '{s}'. Must be one of: Low, Medium, High"
                ))
            })
    }
}

/// Raw submission of the trip form. Any field may be missing or blank.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TripForm {
    pub departure: String,
    pub destination: String,
    pub days: Option<i64>,
    pub interests: String,
    pub budget: String,
}

/// A complete trip request, alive for one interaction only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    pub departure: String,
    pub destination: String,
    pub days: u32,
    pub interests: String,
    pub budget: Budget,
}

impl TripForm {
    /// Names of the fields that are missing or contain only whitespace
    #[must_use]
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let text_fields = [
            ("departure", &self.departure),
            ("destination", &self.destination),
            ("interests", &self.interests),
            ("budget", &self.budget),
        ];

        let mut missing: Vec<&'static str> = text_fields
            .iter()
            .filter(|(_, value)| value.trim().is_empty())
            .map(|(name, _)| *name)
            .collect();

        if self.days.is_none() {
            missing.push("days");
        }
        missing
    }

    /// Whether every field has a value
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Turn the form into a trip request. Field values are kept verbatim.
    pub fn to_request(&self) -> Result<TripRequest> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(TravelPlanError::validation(format!(
                "Missing required fields: {}",
                missing.join(", ")
            )));
        }

        let days = self.days.unwrap_or_default();
        if !(MIN_TRIP_DAYS..=MAX_TRIP_DAYS).contains(&days) {
            return Err(TravelPlanError::validation(format!(
                "Days must be between {MIN_TRIP_DAYS} and {MAX_TRIP_DAYS}, got {days}"
            )));
        }

        Ok(TripRequest {
            departure: self.departure.clone(),
            destination: self.destination.clone(),
            days: u32::try_from(days)
                .map_err(|_| TravelPlanError::validation(format!("Invalid days: {days}")))?,
            interests: self.interests.clone(),
            budget: self.budget.parse()?,
        })
    }
}
