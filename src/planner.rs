//! Itinerary planning service
//!
//! Bridges a validated [`TripRequest`] to the completion client and turns
//! every failure into a user-visible [`ItineraryResult`]. Nothing past this
//! boundary ever sees an error type.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::llm::CompletionClient;
use crate::models::{ItineraryResult, TripRequest};
use crate::prompt;

/// Service for generating itineraries from validated trip requests
pub struct ItineraryPlanner {
    client: Arc<dyn CompletionClient>,
}

impl ItineraryPlanner {
    /// Create a planner around a completion client
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Generate an itinerary for the given request.
    ///
    /// Exactly one outbound completion call is made. Errors are converted
    /// to a failed [`ItineraryResult`] carrying a human-readable message;
    /// the user may resubmit, there are no automatic retries.
    pub async fn plan_trip(&self, request: &TripRequest) -> ItineraryResult {
        info!(
            destination = %request.destination,
            days = request.days,
            interests = %request.interests_label(),
            "Generating itinerary"
        );

        let system_prompt = prompt::system_prompt(request);

        match self.client.complete(&system_prompt, prompt::USER_PROMPT).await {
            Ok(text) => {
                debug!(
                    preview = %text.chars().take(100).collect::<String>(),
                    "Received itinerary"
                );
                ItineraryResult::ok(text)
            }
            Err(e) => {
                warn!(error = %e, "Itinerary generation failed");
                ItineraryResult::failed(e.user_message())
            }
        }
    }
}
