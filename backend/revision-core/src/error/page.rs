use common::ErrorLocation;
use models::ModelError;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum PageError {
    /// Click on a control that has no behavior attached, either because it
    /// does not exist or because wiring has not run yet.
    #[error("Unbound Control Error: {message} {location}")]
    UnboundControl {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unknown Card Error: {message} {location}")]
    UnknownCard {
        message: String,
        location: ErrorLocation,
    },

    /// The page actor is gone; no further clicks can be processed.
    #[error("Actor Stopped Error: {message} {location}")]
    ActorStopped {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}
