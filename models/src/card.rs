use crate::Topic;

use std::fmt::{Display, Formatter, Result as FormatResult};

const SHOW_ANSWER_LABEL: &str = "Show Answer";
const HIDE_ANSWER_LABEL: &str = "Hide Answer";

/// Position of a card in the rendered deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardId(pub usize);

impl Display for CardId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "{}", self.0)
    }
}

/// Visibility of a card's answer region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnswerState {
    #[default]
    Hidden,
    Shown,
}

impl AnswerState {
    pub fn toggled(self) -> Self {
        match self {
            AnswerState::Hidden => AnswerState::Shown,
            AnswerState::Shown => AnswerState::Hidden,
        }
    }

    pub fn is_hidden(self) -> bool {
        self == AnswerState::Hidden
    }

    /// Label of the toggle control for this state.
    pub fn button_label(self) -> &'static str {
        match self {
            AnswerState::Hidden => SHOW_ANSWER_LABEL,
            AnswerState::Shown => HIDE_ANSWER_LABEL,
        }
    }
}

/// One rendered flashcard.
///
/// `answer` flips on toggle clicks, `visible` is driven by the subject filter.
/// Nothing else about a card changes after rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub id: CardId,
    pub topic: Topic,
    pub answer: AnswerState,
    pub visible: bool,
}

impl Card {
    pub fn new(id: CardId, topic: Topic) -> Self {
        Self {
            id,
            topic,
            answer: AnswerState::Hidden,
            visible: true,
        }
    }

    pub fn subject(&self) -> &str {
        &self.topic.subject
    }
}
