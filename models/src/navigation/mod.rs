//! Navigation controls: the fixed bar of subject buttons.
//!
//! The bar always starts with the `all` control. Exactly one control is
//! active after load; a filter with no matching control leaves none active.

pub mod builder;

use crate::Filter;

use std::fmt::{Display, Formatter, Result as FormatResult};

/// Position of a control in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NavId(pub usize);

impl Display for NavId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        write!(formatter, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavControl {
    pub id: NavId,
    pub target: Filter,
    pub label: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NavBar {
    controls: Vec<NavControl>,
}

impl NavBar {
    pub(crate) fn from_controls(controls: Vec<NavControl>) -> Self {
        Self { controls }
    }

    pub fn controls(&self) -> &[NavControl] {
        &self.controls
    }

    pub fn get(&self, id: NavId) -> Option<&NavControl> {
        self.controls.get(id.0)
    }

    /// Control whose target is `filter`, if the bar has one.
    pub fn find(&self, filter: &Filter) -> Option<&NavControl> {
        self.controls.iter().find(|c| &c.target == filter)
    }

    pub fn active(&self) -> Option<&NavControl> {
        self.controls.iter().find(|c| c.active)
    }

    /// Mark the control targeting `filter` active and every other one inactive.
    ///
    /// Returns the id of the newly active control, or `None` when no control
    /// targets `filter` (all controls end up inactive).
    pub fn activate(&mut self, filter: &Filter) -> Option<NavId> {
        let mut activated = None;
        for control in &mut self.controls {
            control.active = activated.is_none() && &control.target == filter;
            if control.active {
                activated = Some(control.id);
            }
        }
        activated
    }
}
