pub mod config;
pub mod error;
pub mod loader;
pub mod page;
pub mod render;

#[cfg(test)]
mod tests;

/// Content document looked up when nothing else is configured.
pub const DEFAULT_DOCUMENT: &str = "data.json";
