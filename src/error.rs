//! Error types and handling for the `TravelMAX` application

use thiserror::Error;

/// Main error type for the `TravelMAX` application
#[derive(Error, Debug)]
pub enum TravelMaxError {
    /// Configuration-related errors (missing or invalid credential)
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Completion API communication errors
    #[error("API error: {message}")]
    Api { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TravelMaxError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new API error
    pub fn api<S: Into<String>>(message: S) -> Self {
        Self::Api {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelMaxError::Config { message } => {
                format!("Configuration error: {message}")
            }
            TravelMaxError::Api { message } => {
                format!("Failed to generate itinerary: {message}. Please try again.")
            }
            TravelMaxError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TravelMaxError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
