use crate::loader::SAMPLE_DOCUMENT;

use revision_core::config::NavigationConfig;
use revision_core::loader::{DocumentSource, load_page};
use revision_core::page::MountContent;

use models::{ControlId, Filter, NavId};

use std::fs;

use tempfile::TempDir;
use url::Url;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// **VALUE**: End-to-end scenario: Math/Math/Art deck, default state, filter to Math.
///
/// **BUG THIS CATCHES**: Any step of load → render → index → wire → activate `all`
/// being skipped or run out of order.
#[tokio::test]
async fn given_sample_document_when_page_loaded_then_cards_index_and_nav_are_ready() {
    // GIVEN: The sample document on disk
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.json"), SAMPLE_DOCUMENT).unwrap();
    let source = DocumentSource::parse("data.json", dir.path()).unwrap();

    // WHEN: Loading the page
    let mut page = load_page(&source, &NavigationConfig::default())
        .await
        .unwrap();

    // THEN: 3 cards (2 Math, 1 Art), all visible, `all` active
    assert_eq!(page.cards().len(), 3);
    assert_eq!(
        page.cards().iter().filter(|c| c.subject() == "Math").count(),
        2
    );
    assert_eq!(page.visible_cards().count(), 3);
    assert_eq!(page.nav().active().map(|c| &c.target), Some(&Filter::All));

    // AND: The index reads "Math (2 topics)", "Art (1 topics)"
    let labels: Vec<String> = page.index().iter().map(|e| e.label()).collect();
    assert_eq!(labels, vec!["Math (2 topics)", "Art (1 topics)"]);

    // WHEN: Clicking the Math nav control
    page.dispatch(ControlId::Nav(NavId(1))).unwrap();

    // THEN: Art hidden, both Math cards shown
    let visible: Vec<&str> = page.visible_cards().map(|c| c.subject()).collect();
    assert_eq!(visible, vec!["Math", "Math"]);
}

/// **VALUE**: A 404 leaves the error notice and nothing else.
///
/// **BUG THIS CATCHES**: Partial rendering on failure, or wiring controls for a
/// page that has no cards.
#[tokio::test]
async fn given_not_found_document_when_page_loaded_then_only_error_notice_is_shown() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;
    let url = Url::parse(&format!("{}/data.json", server.uri())).unwrap();

    let page = load_page(&DocumentSource::Http(url), &NavigationConfig::default())
        .await
        .unwrap();

    match page.container() {
        MountContent::ErrorNotice(notice) => {
            assert!(notice.contains("`data.json`"));
            assert!(notice.contains("no comments allowed!"));
        }
        other => panic!("Expected error notice, got {other:?}"),
    }
    assert!(page.cards().is_empty());
    assert!(page.index().is_empty());
    assert!(!page.is_wired());
    assert!(page.nav().active().is_none());
}

#[tokio::test]
async fn given_malformed_document_when_page_loaded_then_only_error_notice_is_shown() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("data.json"), "[ // no\n ]").unwrap();
    let source = DocumentSource::parse("data.json", dir.path()).unwrap();

    let page = load_page(&source, &NavigationConfig::default())
        .await
        .unwrap();

    assert!(matches!(page.container(), MountContent::ErrorNotice(_)));
    assert_eq!(page.nav().controls().len(), 1, "Only the all control");
}
