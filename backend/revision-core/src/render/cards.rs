use models::{Card, CardId, Topic};

/// One card per topic, in list order, each with its answer hidden.
///
/// No sorting and no merging with earlier cards: the result replaces whatever
/// the mount point held before.
pub fn render_cards(topics: &[Topic]) -> Vec<Card> {
    topics
        .iter()
        .enumerate()
        .map(|(position, topic)| Card::new(CardId(position), topic.clone()))
        .collect()
}
