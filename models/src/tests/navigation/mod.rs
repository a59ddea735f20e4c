mod builder;

use crate::{Filter, NavBarBuilder, NavId};

fn math_art_bar() -> crate::NavBar {
    NavBarBuilder::default()
        .with_subjects(["Math", "Art"])
        .build()
        .unwrap()
}

/// **VALUE**: Activation keeps the "at most one active control" invariant.
///
/// **BUG THIS CATCHES**: Forgetting to clear the previous control would leave two
/// buttons highlighted after switching subjects.
#[test]
fn given_active_control_when_other_filter_activated_then_only_new_control_is_active() {
    let mut bar = math_art_bar();
    bar.activate(&Filter::All);

    let activated = bar.activate(&Filter::Subject("Art".to_string()));

    assert_eq!(activated, Some(NavId(2)));
    assert_eq!(bar.controls().iter().filter(|c| c.active).count(), 1);
    assert_eq!(bar.active().map(|c| c.label.as_str()), Some("Art"));
}

#[test]
fn given_filter_without_control_when_activated_then_no_control_is_active() {
    let mut bar = math_art_bar();
    bar.activate(&Filter::All);

    let activated = bar.activate(&Filter::Subject("History".to_string()));

    assert_eq!(activated, None);
    assert!(bar.active().is_none());
}

#[test]
fn given_bar_when_looking_up_by_filter_then_finds_matching_control() {
    let bar = math_art_bar();

    assert_eq!(bar.find(&Filter::All).map(|c| c.id), Some(NavId(0)));
    assert_eq!(
        bar.find(&Filter::from("Math")).map(|c| c.id),
        Some(NavId(1))
    );
    assert!(bar.get(NavId(3)).is_none());
}
