//! Identifiers of clickable controls.
//!
//! The HTML renderer writes these into `data-control` attributes and the host
//! session reads them back as click events, so `Display` and `FromStr` must
//! stay inverse to each other.

use crate::error::model_error::ModelError;
use crate::{CardId, ErrorLocation, NavId};

use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;
use std::str::FromStr;

const TOGGLE_PREFIX: &str = "toggle-";
const NAV_PREFIX: &str = "nav-";
const INDEX_PREFIX: &str = "index-";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlId {
    /// Answer toggle button of a card.
    Toggle(CardId),
    /// Navigation button.
    Nav(NavId),
    /// Subject index link, by position in the index.
    IndexLink(usize),
}

impl Display for ControlId {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> FormatResult {
        match self {
            ControlId::Toggle(card) => write!(formatter, "{TOGGLE_PREFIX}{}", card.0),
            ControlId::Nav(nav) => write!(formatter, "{NAV_PREFIX}{}", nav.0),
            ControlId::IndexLink(position) => write!(formatter, "{INDEX_PREFIX}{position}"),
        }
    }
}

impl FromStr for ControlId {
    type Err = ModelError;

    #[track_caller]
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let raw = raw.trim();

        let parse_position = |digits: &str| {
            digits.parse::<usize>().map_err(|e| ModelError::ControlId {
                message: format!("Invalid control position in '{raw}': {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
        };

        if let Some(digits) = raw.strip_prefix(TOGGLE_PREFIX) {
            return Ok(ControlId::Toggle(CardId(parse_position(digits)?)));
        }
        if let Some(digits) = raw.strip_prefix(NAV_PREFIX) {
            return Ok(ControlId::Nav(NavId(parse_position(digits)?)));
        }
        if let Some(digits) = raw.strip_prefix(INDEX_PREFIX) {
            return Ok(ControlId::IndexLink(parse_position(digits)?));
        }

        Err(ModelError::ControlId {
            message: format!("Unknown control kind: {raw}"),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
