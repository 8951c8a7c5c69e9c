//! Prompt construction for itinerary generation

use crate::models::TripRequest;

/// Build the generation prompt for a trip request
#[must_use]
pub fn build_prompt(request: &TripRequest) -> String {
    format!(
        "You are a travel itinerary planner. Based on the information provided below:\n\
Departure: {}\n\
Destination: {}\n\
Days: {}\n\
Interests: {}\n\
Budget: {}\n\
Create a detailed travel itinerary that covers important activities, places to visit, and recommendations. \
Please ensure that the itinerary is well-balanced based on the budget and interests provided.\n",
        request.departure, request.destination, request.days, request.interests, request.budget
    )
}
