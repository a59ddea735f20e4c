//! The page model: mount points, navigation bar and the click state machines.
//!
//! Rendering and wiring are separate passes. [`RevisionPage::render_cards`]
//! and [`RevisionPage::render_index`] produce entities and drop any previous
//! bindings; [`RevisionPage::wire`] binds behavior to what is rendered at that
//! moment. Clicks go through [`RevisionPage::dispatch`].

pub mod bindings;
pub mod interaction;
pub mod state;

pub use bindings::{Action, Bindings};
pub use state::{PageCommand, PageState};

use crate::error::page::PageError;
use crate::render::{build_index, render_cards};

use common::ErrorLocation;
use models::{AnswerState, Card, CardId, ControlId, Filter, IndexEntry, NavBar, NavId, Topic};

use std::panic::Location;

use log::{debug, warn};

/// Contents of the primary mount point (`#revision-container`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MountContent {
    #[default]
    Empty,
    Cards(Vec<Card>),
    ErrorNotice(String),
}

/// Result of a dispatched click.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Toggled {
        card: CardId,
        answer: AnswerState,
    },
    Filtered {
        filter: Filter,
        active: Option<NavId>,
        visible: usize,
    },
}

#[derive(Debug, Clone, Default)]
pub struct RevisionPage {
    container: MountContent,
    index: Vec<IndexEntry>,
    nav: NavBar,
    filter: Filter,
    bindings: Bindings,
}

impl RevisionPage {
    pub fn new(nav: NavBar) -> Self {
        Self {
            nav,
            ..Self::default()
        }
    }

    // ============================================
    // RENDER PASSES
    // ============================================

    /// Replace the primary mount point with one card per topic.
    ///
    /// Bindings are dropped; call [`wire`](Self::wire) again afterwards.
    pub fn render_cards(&mut self, topics: &[Topic]) {
        self.container = MountContent::Cards(render_cards(topics));
        self.bindings = Bindings::default();
        debug!("Rendered {} cards", topics.len());
    }

    /// Replace the subject index.
    pub fn render_index(&mut self, topics: &[Topic]) {
        self.index = build_index(topics);
        self.bindings = Bindings::default();
        debug!("Rendered index with {} subjects", self.index.len());
    }

    /// Replace the primary mount point with the error notice.
    pub fn show_error(&mut self, notice: String) {
        self.container = MountContent::ErrorNotice(notice);
        self.bindings = Bindings::default();
    }

    /// Binding pass over the currently rendered controls.
    pub fn wire(&mut self) {
        self.bindings = Bindings::bind(self.cards(), &self.nav, &self.index);
        debug!("Wired {} controls", self.bindings.len());
    }

    /// State right after a successful load: `all` active, every card visible.
    pub fn activate_default(&mut self) {
        self.filter = Filter::All;
        self.nav.activate(&Filter::All);
    }

    // ============================================
    // INTERACTIONS
    // ============================================

    /// Run the behavior bound to `control`.
    ///
    /// # Errors
    /// [`PageError::UnboundControl`] when nothing is bound to `control`.
    #[track_caller]
    pub fn dispatch(&mut self, control: ControlId) -> Result<Outcome, PageError> {
        let action = self
            .bindings
            .action(&control)
            .cloned()
            .ok_or_else(|| PageError::UnboundControl {
                message: format!("No behavior bound to control {control}"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        match action {
            Action::ToggleAnswer(card) => {
                let answer = self.toggle_answer(card)?;
                Ok(Outcome::Toggled { card, answer })
            }
            Action::ApplyFilter(filter) => {
                let active = self.apply_filter(&filter);
                let visible = self.visible_cards().count();
                Ok(Outcome::Filtered {
                    filter,
                    active,
                    visible,
                })
            }
        }
    }

    /// Flip the answer of one card.
    #[track_caller]
    pub fn toggle_answer(&mut self, card: CardId) -> Result<AnswerState, PageError> {
        let target = match &mut self.container {
            MountContent::Cards(cards) => cards.get_mut(card.0),
            _ => None,
        }
        .ok_or_else(|| PageError::UnknownCard {
            message: format!("No card at position {card}"),
            location: ErrorLocation::from(Location::caller()),
        })?;

        Ok(interaction::toggle_answer(target))
    }

    /// Make `filter` the active subject.
    ///
    /// Every card is shown or hidden accordingly and the matching navigation
    /// control becomes the only active one. Returns that control, or `None`
    /// when the bar has no control for `filter`.
    pub fn apply_filter(&mut self, filter: &Filter) -> Option<NavId> {
        self.filter = filter.clone();

        let visible = match &mut self.container {
            MountContent::Cards(cards) => interaction::project_filter(cards, filter),
            _ => 0,
        };

        let active = self.nav.activate(filter);
        if active.is_none() {
            warn!("No navigation control for subject '{filter}'");
        }

        debug!("Filter '{filter}' shows {visible} cards");
        active
    }

    // ============================================
    // ACCESSORS
    // ============================================

    pub fn container(&self) -> &MountContent {
        &self.container
    }

    /// Rendered cards; empty when the mount point holds anything else.
    pub fn cards(&self) -> &[Card] {
        match &self.container {
            MountContent::Cards(cards) => cards,
            _ => &[],
        }
    }

    pub fn visible_cards(&self) -> impl Iterator<Item = &Card> {
        self.cards().iter().filter(|card| card.visible)
    }

    pub fn index(&self) -> &[IndexEntry] {
        &self.index
    }

    pub fn nav(&self) -> &NavBar {
        &self.nav
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn is_wired(&self) -> bool {
        !self.bindings.is_empty()
    }
}
