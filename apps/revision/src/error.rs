use common::ErrorLocation;

use revision_core::error::CoreError;

use thiserror::Error;

/// Errors raised by the host binary.
#[derive(Debug, Error)]
pub enum RevisionError {
    /// Error from this app (logger, directories)
    #[error("Revision Error: {message} {location}")]
    Revision {
        message: String,
        location: ErrorLocation,
    },

    /// Error from revision-core (config, loader, page)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
        #[source]
        source: CoreError,
    },

    /// Rendered page could not be written
    #[error("Output Error: {message} {location}")]
    Output {
        message: String,
        location: ErrorLocation,
    },

    /// Reading click events failed
    #[error("Session Error: {message} {location}")]
    Session {
        message: String,
        location: ErrorLocation,
    },
}

impl RevisionError {
    #[track_caller]
    pub fn core(message: impl Into<String>, source: impl Into<CoreError>) -> Self {
        RevisionError::Core {
            message: message.into(),
            location: ErrorLocation::from(std::panic::Location::caller()),
            source: source.into(),
        }
    }
}
