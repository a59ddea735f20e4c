//! Loading the content document and booting the page from it.
//!
//! The document is fetched once. Success renders cards and index, wires the
//! controls and marks `all` active. Failure replaces the primary mount point
//! with a single error notice; nothing else is rendered and nothing is
//! retried.

pub mod file;
pub mod http;

use crate::config::NavigationConfig;
use crate::error::CoreError;
use crate::error::loader::LoaderError;
use crate::page::RevisionPage;

use common::ErrorLocation;
use models::{ALL_SUBJECTS, NavBar, NavBarBuilder, Topic};

use std::collections::HashSet;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, error, info, warn};
use url::Url;

/// Where the content document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Http(Url),
}

impl DocumentSource {
    /// Interpret `raw` as an http(s) URL, or as a path relative to `base_dir`.
    #[track_caller]
    pub fn parse(raw: &str, base_dir: &Path) -> Result<Self, LoaderError> {
        let raw = raw.trim();

        if raw.is_empty() {
            return Err(LoaderError::InvalidSource {
                message: String::from("Document source cannot be empty"),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        if raw.starts_with("http://") || raw.starts_with("https://") {
            return Ok(DocumentSource::Http(Url::parse(raw)?));
        }

        Ok(DocumentSource::File(base_dir.join(raw)))
    }

    /// Short name shown to the user in the error notice, e.g. `data.json`.
    pub fn document_name(&self) -> String {
        match self {
            DocumentSource::File(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string()),
            DocumentSource::Http(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|segment| !segment.is_empty())
                .map(str::to_string)
                .unwrap_or_else(|| url.to_string()),
        }
    }
}

impl Display for DocumentSource {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            DocumentSource::File(path) => write!(formatter, "{}", path.display()),
            DocumentSource::Http(url) => write!(formatter, "{url}"),
        }
    }
}

/// User-facing text shown in place of the cards when loading fails.
pub fn error_notice(document_name: &str) -> String {
    format!(
        "Error loading content. Please check the `{document_name}` file name, path, and syntax (no comments allowed!)."
    )
}

/// Parse document contents as a list of topic records.
#[track_caller]
pub fn parse_topics(contents: &str) -> Result<Vec<Topic>, LoaderError> {
    Ok(serde_json::from_str(contents)?)
}

/// Fetch and parse the topic list. The only suspension point of a page load.
pub async fn load_topics(source: &DocumentSource) -> Result<Vec<Topic>, LoaderError> {
    debug!("Loading topics from {source}");

    let topics = match source {
        DocumentSource::File(path) => file::read_topics(path).await?,
        DocumentSource::Http(url) => http::DocumentClient::new()?.fetch_topics(url).await?,
    };

    info!("Loaded {} topics from {source}", topics.len());
    Ok(topics)
}

/// Load the document and build the page from it.
///
/// Load failures do not surface as `Err`: they produce a page whose primary
/// mount point holds the error notice. `Err` is only returned when the
/// navigation bar itself cannot be built.
pub async fn load_page(
    source: &DocumentSource,
    navigation: &NavigationConfig,
) -> Result<RevisionPage, CoreError> {
    match load_topics(source).await {
        Ok(topics) => {
            let mut page = RevisionPage::new(build_nav_bar(navigation, Some(topics.as_slice()))?);

            page.render_cards(&topics);
            page.render_index(&topics);
            page.wire();
            page.activate_default();

            Ok(page)
        }
        Err(e) => {
            error!("Error fetching flashcard data: {e}");

            let mut page = RevisionPage::new(build_nav_bar(navigation, None)?);
            page.show_error(error_notice(&source.document_name()));

            Ok(page)
        }
    }
}

/// Navigation bar from config, or one control per deck subject when the
/// config lists none.
pub fn build_nav_bar(
    navigation: &NavigationConfig,
    topics: Option<&[Topic]>,
) -> Result<NavBar, CoreError> {
    let builder = NavBarBuilder::default().with_all_label(navigation.all_label.clone());

    if !navigation.subjects.is_empty() {
        return Ok(builder
            .with_subjects(navigation.subjects.iter().cloned())
            .build()?);
    }

    let mut seen = HashSet::new();
    let mut subjects = Vec::new();
    for topic in topics.unwrap_or_default() {
        let subject = topic.subject.as_str();
        if subject.is_empty() || subject == ALL_SUBJECTS {
            warn!("Subject '{subject}' cannot have its own navigation control, skipping");
            continue;
        }
        if seen.insert(subject) {
            subjects.push(subject.to_string());
        }
    }

    Ok(builder.with_subjects(subjects).build()?)
}
