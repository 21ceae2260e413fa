//! JSON API surface for the web UI

use std::sync::Arc;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
};
use serde::{Deserialize, Serialize};

use crate::models::{self, ItineraryResult, TripRequest};
use crate::planner::ItineraryPlanner;

/// Trip submission as sent by the form: interests arrive as one
/// comma-separated text field.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiTripRequest {
    pub destination: String,
    pub days: u8,
    #[serde(default)]
    pub interests: String,
}

/// Generated itinerary payload returned to the UI.
///
/// Planner failures are reported in-band (`success = false`) so the page
/// can render the message inline and let the user resubmit.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiItinerary {
    pub success: bool,
    pub itinerary: String,
    pub error: Option<String>,
    /// Suggested name for the downloaded itinerary file
    pub file_name: String,
}

impl ApiItinerary {
    fn from_result(request: &TripRequest, result: ItineraryResult) -> Self {
        Self {
            success: result.success,
            itinerary: result.text,
            error: result.error,
            file_name: download_file_name(request),
        }
    }
}

/// `itinerary_<city>_<days>_days.txt`, lowercased with spaces replaced
fn download_file_name(request: &TripRequest) -> String {
    format!(
        "itinerary_{}_{}_days.txt",
        request.destination.to_lowercase().replace(' ', "_"),
        request.days
    )
}

pub fn router(planner: Arc<ItineraryPlanner>) -> Router {
    Router::new()
        .route("/plan", post(plan_trip))
        .route("/health", get(health))
        .with_state(planner)
}

async fn plan_trip(
    State(planner): State<Arc<ItineraryPlanner>>,
    Json(payload): Json<ApiTripRequest>,
) -> Result<Json<ApiItinerary>, (StatusCode, String)> {
    let interests = models::parse_interests(&payload.interests);
    let request = TripRequest::new(&payload.destination, payload.days, &interests)
        .map_err(|e| (StatusCode::UNPROCESSABLE_ENTITY, e.user_message()))?;

    let result = planner.plan_trip(&request).await;
    Ok(Json(ApiItinerary::from_result(&request, result)))
}

async fn health() -> StatusCode {
    StatusCode::OK
}
