//! Domain models for trip planning requests and results.

use serde::{Deserialize, Serialize};

use crate::{Result, TravelMaxError};

/// Minimum supported trip length in days
pub const MIN_TRIP_DAYS: u8 = 1;

/// Maximum supported trip length in days
pub const MAX_TRIP_DAYS: u8 = 10;

/// Label used in prompts when the user selected no interests
pub const GENERAL_INTERESTS: &str = "general";

/// A validated trip planning request.
///
/// Can only be constructed through [`TripRequest::new`], which enforces the
/// input constraints. Instances are discarded after the itinerary is
/// rendered; nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TripRequest {
    /// Destination city, trimmed and non-empty
    pub destination: String,
    /// Trip length in days, within `[MIN_TRIP_DAYS, MAX_TRIP_DAYS]`
    pub days: u8,
    /// Deduplicated interest tags; may be empty
    pub interests: Vec<String>,
}

impl TripRequest {
    /// Validate raw inputs into a `TripRequest`.
    ///
    /// The destination must be non-empty after trimming and the day count
    /// must fall within the supported range. Interests are trimmed and
    /// deduplicated; an empty selection is valid and treated as
    /// [`GENERAL_INTERESTS`] when the prompt is built.
    pub fn new<S: AsRef<str>>(destination: &str, days: u8, interests: &[S]) -> Result<Self> {
        let destination = destination.trim();
        if destination.is_empty() {
            return Err(TravelMaxError::validation("destination cannot be empty"));
        }

        if !(MIN_TRIP_DAYS..=MAX_TRIP_DAYS).contains(&days) {
            return Err(TravelMaxError::validation(format!(
                "trip length must be between {MIN_TRIP_DAYS} and {MAX_TRIP_DAYS} days, got {days}"
            )));
        }

        let mut seen = Vec::new();
        for interest in interests {
            let interest = interest.as_ref().trim();
            if !interest.is_empty() && !seen.iter().any(|s| s == interest) {
                seen.push(interest.to_string());
            }
        }

        Ok(Self {
            destination: destination.to_string(),
            days,
            interests: seen,
        })
    }

    /// Comma-separated interests for prompt embedding, or the general label
    #[must_use]
    pub fn interests_label(&self) -> String {
        if self.interests.is_empty() {
            GENERAL_INTERESTS.to_string()
        } else {
            self.interests.join(", ")
        }
    }
}

/// Split a comma-separated interests field into individual tags.
///
/// The web UI submits interests as free text ("art, food, museums");
/// empty segments are dropped here and deduplication happens in
/// [`TripRequest::new`].
#[must_use]
pub fn parse_interests(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

/// Outcome of a single itinerary generation, consumed once by the display
/// layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItineraryResult {
    /// Whether generation succeeded
    pub success: bool,
    /// Generated itinerary text; empty on failure
    pub text: String,
    /// Human-readable failure message
    pub error: Option<String>,
}

impl ItineraryResult {
    /// Successful generation with non-empty itinerary text
    #[must_use]
    pub fn ok<S: Into<String>>(text: S) -> Self {
        Self {
            success: true,
            text: text.into(),
            error: None,
        }
    }

    /// Failed generation with a user-visible message
    #[must_use]
    pub fn failed<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            text: String::new(),
            error: Some(message.into()),
        }
    }
}
