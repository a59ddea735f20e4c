use crate::render::render_cards;
use crate::tests::sample_topics;

use models::{AnswerState, CardId, Topic};

/// **VALUE**: N topics in, N cards out, same order, answers hidden.
///
/// **BUG THIS CATCHES**: Any sorting or grouping by subject would reorder the deck,
/// and the list order is the only display order there is.
#[test]
fn given_topic_list_when_rendered_then_one_hidden_card_per_topic_in_order() {
    let topics = sample_topics();

    let cards = render_cards(&topics);

    assert_eq!(cards.len(), topics.len());
    for (position, (card, topic)) in cards.iter().zip(&topics).enumerate() {
        assert_eq!(card.id, CardId(position));
        assert_eq!(&card.topic, topic);
        assert_eq!(card.answer, AnswerState::Hidden);
        assert!(card.visible);
    }
}

#[test]
fn given_empty_list_when_rendered_then_no_cards() {
    let topics: Vec<Topic> = Vec::new();

    assert!(render_cards(&topics).is_empty());
}
