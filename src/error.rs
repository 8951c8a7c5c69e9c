//! Error types and handling for the `WanderPlan` application

use thiserror::Error;

/// Main error type for the `WanderPlan` application
#[derive(Error, Debug)]
pub enum TravelPlanError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Failures talking to the text-generation service
    #[error("Generation error: {message}")]
    Generation { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Document rendering errors
    #[error("Document error: {message}")]
    Document { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl TravelPlanError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new generation error
    pub fn generation<S: Into<String>>(message: S) -> Self {
        Self::Generation {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new document error
    pub fn document<S: Into<String>>(message: S) -> Self {
        Self::Document {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TravelPlanError::Config { .. } => {
                "Configuration error. Please check your config file and API key.".to_string()
            }
            TravelPlanError::Generation { .. } => {
                "The itinerary could not be generated right now. Please try again later."
                    .to_string()
            }
            TravelPlanError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            TravelPlanError::Document { .. } => {
                "The itinerary document could not be created.".to_string()
            }
            TravelPlanError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}
