//! Binding pass: attaches behavior to rendered controls by identity.

use models::{Card, CardId, ControlId, Filter, IndexEntry, NavBar};

use std::collections::HashMap;

/// What a click on a bound control does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    ToggleAnswer(CardId),
    /// Shared by navigation controls and index links.
    ApplyFilter(Filter),
}

#[derive(Debug, Clone, Default)]
pub struct Bindings {
    actions: HashMap<ControlId, Action>,
}

impl Bindings {
    /// Bind every toggle, navigation control and index link currently rendered.
    pub fn bind(cards: &[Card], nav: &NavBar, index: &[IndexEntry]) -> Self {
        let mut actions = HashMap::with_capacity(cards.len() + nav.controls().len() + index.len());

        for card in cards {
            actions.insert(ControlId::Toggle(card.id), Action::ToggleAnswer(card.id));
        }

        for control in nav.controls() {
            actions.insert(
                ControlId::Nav(control.id),
                Action::ApplyFilter(control.target.clone()),
            );
        }

        for (position, entry) in index.iter().enumerate() {
            actions.insert(
                ControlId::IndexLink(position),
                Action::ApplyFilter(Filter::from(entry.subject.as_str())),
            );
        }

        Self { actions }
    }

    pub fn action(&self, control: &ControlId) -> Option<&Action> {
        self.actions.get(control)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
