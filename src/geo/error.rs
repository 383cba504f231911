//! Errors raised while talking to the geography lookup service.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Subdivision code is empty or not URL-safe
    #[error("Invalid subdivision code '{0}'")]
    InvalidCode(String),

    /// Transport failure (connect, timeout, body read)
    #[error("Request to '{endpoint}' failed: {source}")]
    Request {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },

    /// Service answered with a non-success status
    #[error("Service returned {status} for '{endpoint}'")]
    Status { endpoint: String, status: u16 },

    /// Body was not the expected JSON array
    #[error("Failed to decode response from '{endpoint}': {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

impl GeoError {
    /// Short machine-readable kind for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            GeoError::Client(_) => "client",
            GeoError::InvalidCode(_) => "invalid_code",
            GeoError::Request { .. } => "request",
            GeoError::Status { .. } => "status",
            GeoError::Decode { .. } => "decode",
        }
    }
}
