//! `TravelMAX` - AI-assisted trip itinerary planning
//!
//! This library provides the core functionality for collecting trip
//! parameters, building itinerary prompts, and requesting generated
//! day-by-day itineraries from the Groq completion API.

pub mod api;
pub mod config;
pub mod error;
pub mod llm;
pub mod models;
pub mod planner;
pub mod prompt;
pub mod web;

// Re-export core types for public API
pub use config::TravelMaxConfig;
pub use error::TravelMaxError;
pub use llm::{CompletionClient, GroqClient};
pub use models::{ItineraryResult, TripRequest};
pub use planner::ItineraryPlanner;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, TravelMaxError>;
