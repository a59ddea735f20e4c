pub mod config;
pub mod loader;
pub mod page;

pub use config::ConfigError;
pub use loader::LoaderError;
pub use page::PageError;

use models::ModelError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Loader(#[from] LoaderError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Model(#[from] ModelError),
}
