use crate::loader::SAMPLE_DOCUMENT;

use revision_core::error::LoaderError;
use revision_core::loader::{DocumentSource, load_topics};

use std::fs;

use tempfile::TempDir;

#[tokio::test]
async fn given_document_on_disk_when_loaded_then_returns_topics() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.json"), SAMPLE_DOCUMENT).unwrap();
    let source = DocumentSource::parse("data.json", dir.path()).unwrap();

    let topics = load_topics(&source).await.unwrap();

    assert_eq!(topics.len(), 3);
    assert_eq!(topics[2].subject, "Art");
}

#[tokio::test]
async fn given_missing_file_when_loaded_then_returns_resource_unavailable_without_status() {
    let dir = TempDir::new().unwrap();
    let source = DocumentSource::parse("nope.json", dir.path()).unwrap();

    let err = load_topics(&source).await.unwrap_err();

    assert!(matches!(err, LoaderError::ResourceUnavailable { .. }));
    assert_eq!(err.status(), None);
    assert!(err.to_string().contains("nope.json not found"));
}

#[tokio::test]
async fn given_empty_list_on_disk_when_loaded_then_returns_no_topics() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.json"), "[]").unwrap();
    let source = DocumentSource::parse("data.json", dir.path()).unwrap();

    assert!(load_topics(&source).await.unwrap().is_empty());
}
