//! Turning topic lists into page entities, and page entities into markup.

pub mod cards;
pub mod html;
pub mod index;

pub use cards::render_cards;
pub use index::build_index;
