use reqwest::StatusCode;
use thiserror::Error;

/// Why a search could not produce a reading.
#[derive(Debug, Error)]
pub enum WidgetError {
    /// The endpoint answered with a non-success status.
    #[error("Weather request failed with status {status}: {body}")]
    Fetch { status: StatusCode, body: String },

    /// The endpoint answered, but with the not-found sentinel or no temperature.
    #[error("City not found or data unavailable: {city}")]
    DataUnavailable { city: String },

    #[error("Failed to reach weather endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse weather response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid weather endpoint '{0}'")]
    InvalidEndpoint(String),
}
