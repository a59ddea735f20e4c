use crate::error::page::PageError;
use crate::page::{MountContent, Outcome};
use crate::tests::page::booted_page;

use models::{AnswerState, CardId, ControlId, Filter, NavId};

#[test]
fn given_booted_page_when_inspected_then_all_active_and_every_card_visible() {
    let page = booted_page();

    assert_eq!(page.filter(), &Filter::All);
    assert_eq!(page.nav().active().map(|c| c.id), Some(NavId(0)));
    assert_eq!(page.visible_cards().count(), 3);
    assert!(page.cards().iter().all(|c| c.answer == AnswerState::Hidden));
}

#[test]
fn given_toggle_control_when_clicked_then_outcome_reports_new_state() {
    let mut page = booted_page();

    let outcome = page.dispatch(ControlId::Toggle(CardId(1))).unwrap();

    assert_eq!(
        outcome,
        Outcome::Toggled {
            card: CardId(1),
            answer: AnswerState::Shown
        }
    );
    assert_eq!(page.cards()[1].answer, AnswerState::Shown);
}

#[test]
fn given_math_nav_when_clicked_then_art_card_hidden_and_only_math_nav_active() {
    let mut page = booted_page();

    let outcome = page.dispatch(ControlId::Nav(NavId(1))).unwrap();

    assert_eq!(
        outcome,
        Outcome::Filtered {
            filter: Filter::from("Math"),
            active: Some(NavId(1)),
            visible: 2
        }
    );
    let visible: Vec<&str> = page.visible_cards().map(|c| c.subject()).collect();
    assert_eq!(visible, vec!["Math", "Math"]);
    assert_eq!(page.nav().controls().iter().filter(|c| c.active).count(), 1);
}

/// **VALUE**: Clicking an index link looks exactly like clicking the nav button.
///
/// **BUG THIS CATCHES**: Index links that filter cards but forget to move the
/// active highlight, or vice versa.
#[test]
fn given_index_link_when_clicked_then_page_matches_nav_control_click() {
    let mut via_index = booted_page();
    let mut via_nav = booted_page();

    via_index.dispatch(ControlId::IndexLink(1)).unwrap();
    via_nav.dispatch(ControlId::Nav(NavId(2))).unwrap();

    assert_eq!(via_index.container(), via_nav.container());
    assert_eq!(via_index.nav(), via_nav.nav());
    assert_eq!(via_index.filter(), via_nav.filter());
}

#[test]
fn given_subject_without_nav_control_when_filtered_then_no_control_stays_active() {
    let mut page = booted_page();

    let active = page.apply_filter(&Filter::from("Chemistry"));

    assert_eq!(active, None);
    assert!(page.nav().active().is_none());
    assert_eq!(page.visible_cards().count(), 0);
}

#[test]
fn given_unknown_control_when_clicked_then_returns_unbound_control_error() {
    let mut page = booted_page();

    let result = page.dispatch(ControlId::Toggle(CardId(99)));

    assert!(matches!(result, Err(PageError::UnboundControl { .. })));
}

#[test]
fn given_error_page_when_toggling_then_returns_unknown_card_error() {
    let mut page = booted_page();
    page.show_error(String::from("broken"));

    assert!(matches!(page.container(), MountContent::ErrorNotice(_)));
    assert!(page.cards().is_empty());
    assert!(matches!(
        page.toggle_answer(CardId(0)),
        Err(PageError::UnknownCard { .. })
    ));
}
