//! Click behaviors as pure functions over explicit card state.

use models::{AnswerState, Card, Filter};

/// Flip one card's answer between hidden and shown. Other cards are untouched.
pub fn toggle_answer(card: &mut Card) -> AnswerState {
    card.answer = card.answer.toggled();
    card.answer
}

/// Show the cards `filter` selects and hide the rest. Returns how many are visible.
///
/// Answer state is left alone: a card hidden by the filter keeps its answer
/// open or closed for when it comes back.
pub fn project_filter(cards: &mut [Card], filter: &Filter) -> usize {
    let mut visible = 0;
    for card in cards.iter_mut() {
        card.visible = filter.matches(card.subject());
        if card.visible {
            visible += 1;
        }
    }
    visible
}
