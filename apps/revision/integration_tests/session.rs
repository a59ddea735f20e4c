use revision::session::{Session, SessionSummary};

use revision_core::config::NavigationConfig;
use revision_core::loader::{DocumentSource, load_page};
use revision_core::page::PageState;
use revision_core::render::html::RenderOptions;

use std::fs;

use tempfile::TempDir;

const SAMPLE_DOCUMENT: &str = r#"[
    {"subject": "Math", "question": "2+2?", "answer": "4"},
    {"subject": "Math", "question": "3+3?", "answer": "6"},
    {"subject": "Art", "question": "Primary colors?", "answer": "Red, blue, yellow"}
]"#;

async fn session_in(dir: &TempDir, document: &str) -> Session {
    fs::write(dir.path().join("data.json"), document).unwrap();
    let source = DocumentSource::parse("data.json", dir.path()).unwrap();
    let page = load_page(&source, &NavigationConfig::default())
        .await
        .unwrap();

    Session::new(
        PageState::spawn(page),
        dir.path().join("revision.html"),
        RenderOptions::default(),
    )
}

/// **VALUE**: The initial write is the post-load state of the page.
#[tokio::test]
async fn given_loaded_deck_when_page_written_then_file_has_all_cards_and_all_active() {
    let dir = TempDir::new().unwrap();
    let session = session_in(&dir, SAMPLE_DOCUMENT).await;

    session.write_page().await.unwrap();

    let html = fs::read_to_string(session.output()).unwrap();
    assert_eq!(html.matches(r#"class="flashcard""#).count(), 3);
    assert!(!html.contains("display: none;"));
    assert!(html.contains(r#"<button class="nav-btn active" data-filter="all""#));
}

/// **VALUE**: Clicks from the input stream drive the page and the file follows.
///
/// **BUG THIS CATCHES**: The page file not being rewritten after a click, or a bad
/// line aborting the whole session.
#[tokio::test]
async fn given_click_script_when_session_runs_then_clicks_apply_and_junk_is_skipped() {
    let dir = TempDir::new().unwrap();
    let session = session_in(&dir, SAMPLE_DOCUMENT).await;
    let script = b"toggle-0\n\nnav-1\nbogus\ntoggle-99\nquit\ntoggle-1\n" as &[u8];

    let summary = session.run(script).await.unwrap();

    assert_eq!(
        summary,
        SessionSummary {
            handled: 2,
            rejected: 2
        }
    );
    let html = fs::read_to_string(session.output()).unwrap();
    assert!(html.contains(">Hide Answer</button>"), "toggle-0 applied");
    assert_eq!(html.matches(">Hide Answer</button>").count(), 1, "toggle-1 after quit ignored");
    assert!(html.contains(r#"<button class="nav-btn active" data-filter="Math""#));
    assert!(html.contains(r#"data-subject="Art" style="display: none;">"#));
}

#[tokio::test]
async fn given_malformed_deck_when_session_runs_then_clicks_are_rejected_and_notice_stays() {
    let dir = TempDir::new().unwrap();
    let session = session_in(&dir, "{ not json").await;
    session.write_page().await.unwrap();

    let summary = session.run(b"toggle-0\nnav-0\n" as &[u8]).await.unwrap();

    assert_eq!(summary.handled, 0);
    assert_eq!(summary.rejected, 2);
    let html = fs::read_to_string(session.output()).unwrap();
    assert!(html.contains("Error loading content."));
    assert!(!html.contains("flashcard"));
}
