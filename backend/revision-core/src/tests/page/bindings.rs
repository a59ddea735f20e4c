use crate::page::{Action, Bindings, RevisionPage};
use crate::tests::page::booted_page;
use crate::tests::sample_topics;

use models::{CardId, ControlId, Filter, NavBarBuilder, NavId};

#[test]
fn given_booted_page_when_wired_then_every_control_is_bound() {
    let page = booted_page();
    let bindings = Bindings::bind(page.cards(), page.nav(), page.index());

    // 3 toggles + 3 nav controls + 2 index links
    assert_eq!(bindings.len(), 8);
    assert_eq!(
        bindings.action(&ControlId::Toggle(CardId(2))),
        Some(&Action::ToggleAnswer(CardId(2)))
    );
    assert_eq!(
        bindings.action(&ControlId::Nav(NavId(0))),
        Some(&Action::ApplyFilter(Filter::All))
    );
}

/// **VALUE**: An index link and its navigation control share one behavior.
///
/// **BUG THIS CATCHES**: A separate filter implementation for index links drifting
/// away from the navigation one.
#[test]
fn given_index_link_when_bound_then_action_equals_matching_nav_control_action() {
    let page = booted_page();
    let bindings = Bindings::bind(page.cards(), page.nav(), page.index());

    // index-1 is "Art", nav-2 is "Art"
    assert_eq!(
        bindings.action(&ControlId::IndexLink(1)),
        bindings.action(&ControlId::Nav(NavId(2)))
    );
}

/// **VALUE**: Rendering again drops bindings to the old cards.
///
/// **BUG THIS CATCHES**: Stale toggles pointing at cards that no longer exist after
/// a rerender, the re-binding bug of query-the-page wiring.
#[test]
fn given_wired_page_when_cards_rerendered_then_wiring_must_run_again() {
    let mut page = booted_page();
    assert!(page.is_wired());

    page.render_cards(&sample_topics()[..1]);

    assert!(!page.is_wired());
    assert!(page.dispatch(ControlId::Toggle(CardId(0))).is_err());

    page.wire();
    assert!(page.dispatch(ControlId::Toggle(CardId(0))).is_ok());
    assert!(page.dispatch(ControlId::Toggle(CardId(2))).is_err());
}

#[test]
fn given_unwired_page_when_nav_clicked_then_nothing_is_bound() {
    let mut page = RevisionPage::new(NavBarBuilder::default().build().unwrap());

    assert!(page.dispatch(ControlId::Nav(NavId(0))).is_err());
}
