//! Data model for the revision page.
//!
//! Plain data: topic records as they arrive from the content document, and
//! the entities the page is built from (cards, navigation controls, index
//! entries, control identifiers). State transitions live in `revision-core`.

pub mod card;
pub mod control;
pub mod error;
pub mod filter;
pub mod index_entry;
pub mod navigation;
pub mod topic;

#[cfg(test)]
mod tests;

pub use card::{AnswerState, Card, CardId};
pub use common::ErrorLocation;
pub use control::ControlId;
pub use error::model_error::ModelError;
pub use filter::{ALL_SUBJECTS, Filter};
pub use index_entry::IndexEntry;
pub use navigation::builder::NavBarBuilder;
pub use navigation::{NavBar, NavControl, NavId};
pub use topic::Topic;
