use crate::error::loader::LoaderError;
use crate::loader::parse_topics;

use common::{ErrorLocation, HttpStatusCode};
use models::Topic;

use std::panic::Location;

use reqwest::Client;
use url::Url;

#[derive(Clone)]
pub struct DocumentClient {
    client: Client,
}

impl DocumentClient {
    pub fn new() -> Result<Self, LoaderError> {
        let client = Client::builder().build()?;
        Ok(Self { client })
    }

    /// GET the document and parse it.
    ///
    /// # Errors
    /// [`LoaderError::ResourceUnavailable`] for a non-success status,
    /// [`LoaderError::MalformedDocument`] for a body that is not a topic list.
    pub async fn fetch_topics(&self, url: &Url) -> Result<Vec<Topic>, LoaderError> {
        let response = self.client.get(url.clone()).send().await?;

        let status = HttpStatusCode::from(response.status().as_u16());
        if !status.is_success() {
            return Err(LoaderError::ResourceUnavailable {
                message: format!("HTTP error! status: {status}"),
                status: Some(status),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let body = response.text().await?;
        parse_topics(&body)
    }
}
