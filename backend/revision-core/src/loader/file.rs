use crate::error::loader::LoaderError;
use crate::loader::parse_topics;

use common::ErrorLocation;
use models::Topic;

use std::io::ErrorKind;
use std::panic::Location;
use std::path::Path;

/// Read a topic list from a local document.
pub async fn read_topics(path: &Path) -> Result<Vec<Topic>, LoaderError> {
    let contents = tokio::fs::read_to_string(path).await.map_err(|e| {
        let message = match e.kind() {
            ErrorKind::NotFound => format!("{} not found", path.display()),
            _ => format!("Failed to read {}: {e}", path.display()),
        };
        LoaderError::ResourceUnavailable {
            message,
            status: None,
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    parse_topics(&contents)
}
