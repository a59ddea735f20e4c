use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

/// Failures while getting the topic list.
///
/// Every variant ends the page load the same way: the primary mount point
/// shows the error notice and nothing else renders.
#[derive(Debug, ThisError)]
pub enum LoaderError {
    /// Document missing or answered with a non-success status.
    #[error("Resource Unavailable Error: {message} {location}")]
    ResourceUnavailable {
        message: String,
        status: Option<HttpStatusCode>,
        location: ErrorLocation,
    },

    /// Content is not a JSON list of topic records.
    #[error("Malformed Document Error: {message} {location}")]
    MalformedDocument {
        message: String,
        location: ErrorLocation,
    },

    /// Transport-level failure before any status was received.
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid Source Error: {message} {location}")]
    InvalidSource {
        message: String,
        location: ErrorLocation,
    },
}

impl LoaderError {
    /// Status code of a failed fetch, when there was one.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            LoaderError::ResourceUnavailable { status, .. } => *status,
            _ => None,
        }
    }
}

impl From<url::ParseError> for LoaderError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        LoaderError::InvalidSource {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for LoaderError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        LoaderError::Http {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for LoaderError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        LoaderError::MalformedDocument {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
