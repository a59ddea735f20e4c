use crate::{Filter, ModelError, NavBarBuilder, NavId};

#[test]
fn given_no_subjects_when_built_then_bar_has_only_all_control() {
    let bar = NavBarBuilder::default().build().unwrap();

    assert_eq!(bar.controls().len(), 1);
    assert_eq!(bar.controls()[0].target, Filter::All);
    assert_eq!(bar.controls()[0].label, "All Subjects");
    assert!(bar.active().is_none(), "Nothing is active before load");
}

#[test]
fn given_subjects_when_built_then_all_comes_first_and_ids_are_positions() {
    let bar = NavBarBuilder::default()
        .with_all_label("Everything")
        .with_subject("Math")
        .with_subject("Art")
        .build()
        .unwrap();

    let labels: Vec<&str> = bar.controls().iter().map(|c| c.label.as_str()).collect();
    assert_eq!(labels, vec!["Everything", "Math", "Art"]);
    for (position, control) in bar.controls().iter().enumerate() {
        assert_eq!(control.id, NavId(position));
    }
}

/// **VALUE**: Invalid navigation config is rejected up front.
///
/// **BUG THIS CATCHES**: A subject literally named "all" would be indistinguishable
/// from the all-subjects sentinel in `data-filter` attributes.
#[test]
fn given_invalid_subjects_when_built_then_returns_validation_error() {
    let cases: Vec<Vec<&str>> = vec![vec![""], vec!["all"], vec!["Math", "Math"]];

    for subjects in cases {
        let result = NavBarBuilder::default().with_subjects(subjects.clone()).build();
        assert!(
            matches!(result, Err(ModelError::Validation { .. })),
            "{subjects:?} should be rejected"
        );
    }
}
