//! Where the host looks for its config and writes its logs.
//!
//! Config directory lookup order:
//! 1. `REVISION_CONFIG_DIR` environment variable
//! 2. Platform config directory via `dirs` (`~/.config/revision` on Linux)
//! 3. The current working directory
//!
//! Logs go to `logging.directory` when configured (relative to the config
//! directory), otherwise to the platform local data directory.

use crate::error::RevisionError;

use common::ErrorLocation;

use std::env;
use std::fmt::{Display, Formatter, Result as FormatResult};
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::debug;

pub const CONFIG_DIR_ENV_VAR: &str = "REVISION_CONFIG_DIR";

const APP_DIR_NAME: &str = "revision";
const LOG_DIR_NAME: &str = "logs";

/// How the config directory was determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    EnvVar,
    PlatformDefault,
    CurrentDir,
}

impl Display for PathSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> FormatResult {
        match self {
            PathSource::EnvVar => write!(f, "{CONFIG_DIR_ENV_VAR}"),
            PathSource::PlatformDefault => write!(f, "platform default"),
            PathSource::CurrentDir => write!(f, "current directory"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigDir {
    pub path: PathBuf,
    pub source: PathSource,
}

/// Resolve the config directory.
///
/// # Errors
/// [`RevisionError::Revision`] when every lookup fails, including the
/// current directory.
pub fn detect_config_dir() -> Result<ConfigDir, RevisionError> {
    if let Ok(custom_dir) = env::var(CONFIG_DIR_ENV_VAR) {
        debug!("Using {CONFIG_DIR_ENV_VAR} override: {custom_dir}");
        return Ok(ConfigDir {
            path: PathBuf::from(custom_dir),
            source: PathSource::EnvVar,
        });
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join(APP_DIR_NAME);
        if path.is_dir() {
            return Ok(ConfigDir {
                path,
                source: PathSource::PlatformDefault,
            });
        }
        debug!("{} does not exist, using current directory", path.display());
    }

    let path = env::current_dir().map_err(|e| RevisionError::Revision {
        message: format!("Failed to determine config directory: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(ConfigDir {
        path,
        source: PathSource::CurrentDir,
    })
}

/// Resolve the log directory. Does not create it.
pub fn resolve_log_dir(configured: Option<&Path>, config_dir: &Path) -> PathBuf {
    match configured {
        Some(dir) if dir.is_absolute() => dir.to_path_buf(),
        Some(dir) => config_dir.join(dir),
        None => dirs::data_local_dir()
            .map(|dir| dir.join(APP_DIR_NAME).join(LOG_DIR_NAME))
            .unwrap_or_else(|| config_dir.join(LOG_DIR_NAME)),
    }
}

/// Resolve the output file against the config directory.
pub fn resolve_output_path(configured: &Path, config_dir: &Path) -> PathBuf {
    if configured.is_absolute() {
        configured.to_path_buf()
    } else {
        config_dir.join(configured)
    }
}
