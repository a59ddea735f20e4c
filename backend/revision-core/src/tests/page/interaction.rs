use crate::page::interaction::{project_filter, toggle_answer};
use crate::render::render_cards;
use crate::tests::sample_topics;

use models::{AnswerState, Filter};

#[test]
fn given_hidden_answer_when_toggled_twice_then_back_to_hidden() {
    let mut cards = render_cards(&sample_topics());

    assert_eq!(toggle_answer(&mut cards[1]), AnswerState::Shown);
    assert_eq!(toggle_answer(&mut cards[1]), AnswerState::Hidden);
}

/// **VALUE**: Toggles are per card.
///
/// **BUG THIS CATCHES**: Toggling through a shared state (e.g. one flag for the
/// whole deck) would open every answer at once.
#[test]
fn given_deck_when_one_card_toggled_then_other_cards_unchanged() {
    let mut cards = render_cards(&sample_topics());

    toggle_answer(&mut cards[0]);

    assert_eq!(cards[0].answer, AnswerState::Shown);
    assert!(cards[1..].iter().all(|c| c.answer == AnswerState::Hidden));
}

#[test]
fn given_subject_filter_when_projected_then_only_matching_cards_visible() {
    let mut cards = render_cards(&sample_topics());

    let visible = project_filter(&mut cards, &Filter::from("Math"));

    assert_eq!(visible, 2);
    let visibility: Vec<bool> = cards.iter().map(|c| c.visible).collect();
    assert_eq!(visibility, vec![true, true, false]);
}

#[test]
fn given_unknown_subject_when_projected_then_every_card_hidden() {
    let mut cards = render_cards(&sample_topics());

    let visible = project_filter(&mut cards, &Filter::from("Chemistry"));

    assert_eq!(visible, 0);
    assert!(cards.iter().all(|c| !c.visible));
}

#[test]
fn given_all_filter_after_subject_filter_when_projected_then_every_card_visible() {
    let mut cards = render_cards(&sample_topics());
    project_filter(&mut cards, &Filter::from("Art"));

    let visible = project_filter(&mut cards, &Filter::All);

    assert_eq!(visible, cards.len());
}

/// **VALUE**: Filtering does not reset answers that were opened.
#[test]
fn given_open_answer_when_filtered_out_and_back_then_answer_still_shown() {
    let mut cards = render_cards(&sample_topics());
    toggle_answer(&mut cards[2]);

    project_filter(&mut cards, &Filter::from("Math"));
    project_filter(&mut cards, &Filter::All);

    assert_eq!(cards[2].answer, AnswerState::Shown);
}
