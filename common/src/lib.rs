//! Shared building blocks for the revision workspace.
//!
//! ## Architecture
//!
//! - **common** (this crate): error location tracking, HTTP status helpers
//! - **models**: topic, card, navigation and index data
//! - **revision-core**: loading, rendering and page interaction logic
//! - **revision**: host binary wiring everything together
//!
//! Nothing in here knows about flashcards.

pub mod error;
pub mod http_status;


pub use error::error_location::ErrorLocation;
pub use http_status::HttpStatusCode;
