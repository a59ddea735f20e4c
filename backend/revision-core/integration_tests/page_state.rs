use revision_core::config::NavigationConfig;
use revision_core::loader::build_nav_bar;
use revision_core::page::{Outcome, PageState, RevisionPage};
use revision_core::render::html::RenderOptions;

use models::{AnswerState, CardId, ControlId, NavId, Topic};

use std::time::Duration;

fn booted_page() -> RevisionPage {
    let topics = vec![
        Topic::new("Math", "2+2?", "4"),
        Topic::new("Math", "3+3?", "6"),
        Topic::new("Art", "Primary colors?", "Red, blue, yellow"),
    ];
    let nav = build_nav_bar(&NavigationConfig::default(), Some(topics.as_slice())).unwrap();
    let mut page = RevisionPage::new(nav);
    page.render_cards(&topics);
    page.render_index(&topics);
    page.wire();
    page.activate_default();
    page
}

#[tokio::test]
async fn given_page_actor_when_toggle_clicked_then_snapshot_shows_answer() {
    let state = PageState::spawn(booted_page());

    let outcome = state.click(ControlId::Toggle(CardId(0))).await.unwrap();

    assert_eq!(
        outcome,
        Outcome::Toggled {
            card: CardId(0),
            answer: AnswerState::Shown
        }
    );
    let snapshot = state.snapshot().await;
    assert_eq!(snapshot.cards()[0].answer, AnswerState::Shown);
}

#[tokio::test]
async fn given_page_actor_when_unknown_control_clicked_then_error_is_returned_and_actor_survives() {
    let state = PageState::spawn(booted_page());

    assert!(state.click(ControlId::IndexLink(42)).await.is_err());
    assert!(state.click(ControlId::Nav(NavId(2))).await.is_ok());
}

/// **VALUE**: Concurrent clicks are applied one at a time.
///
/// **BUG THIS CATCHES**: Lost updates if two handlers read-modify-write the same
/// card concurrently; an even number of toggles must land back on hidden.
#[tokio::test]
async fn given_concurrent_toggles_when_processed_then_every_click_is_applied() {
    let state = PageState::spawn(booted_page());

    let clicks: Vec<_> = (0..10)
        .map(|_| {
            let state = state.clone();
            tokio::spawn(async move { state.click(ControlId::Toggle(CardId(2))).await })
        })
        .collect();

    let all_done = tokio::time::timeout(Duration::from_secs(2), async {
        for click in clicks {
            click.await.unwrap().unwrap();
        }
    })
    .await;

    assert!(all_done.is_ok(), "Clicks should complete without deadlock");
    assert_eq!(state.snapshot().await.cards()[2].answer, AnswerState::Hidden);
}

#[tokio::test]
async fn given_filtered_page_when_rendered_then_document_reflects_actor_state() {
    let state = PageState::spawn(booted_page());
    state.click(ControlId::IndexLink(1)).await.unwrap();

    let html = state.render(&RenderOptions::default()).await;

    assert!(html.contains(r#"<button class="nav-btn active" data-filter="Art""#));
    assert_eq!(html.matches(r#"style="display: none;""#).count(), 2);
}
