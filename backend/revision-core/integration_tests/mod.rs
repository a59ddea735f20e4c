mod error;
mod loader;
mod page_state;
