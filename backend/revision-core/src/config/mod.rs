use crate::DEFAULT_DOCUMENT;
use crate::error::config::ConfigError;
use crate::error::loader::LoaderError;
use crate::loader::DocumentSource;
use crate::render::html::RenderOptions;

use common::ErrorLocation;
use models::ALL_SUBJECTS;

use std::env;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

const CONFIG_FILE_NAME: &str = "revision.toml";

/// Replaces `source.document` when set.
pub const DOCUMENT_ENV_VAR: &str = "REVISION_DOCUMENT";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path relative to `base_dir`, or an http(s) URL.
    #[serde(default = "default_document")]
    pub document: String,
    /// Directory relative paths resolve against. Defaults to the config directory.
    pub base_dir: Option<PathBuf>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            document: default_document(),
            base_dir: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,
    #[serde(default = "default_stylesheet")]
    pub stylesheet: String,
    #[serde(default = "default_title")]
    pub title: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            stylesheet: default_stylesheet(),
            title: default_title(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Escape topic text before inserting it into markup. Off by default:
    /// the content document is treated as trusted.
    #[serde(default)]
    pub escape_html: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavigationConfig {
    #[serde(default = "default_all_label")]
    pub all_label: String,
    /// Fixed subject buttons. Empty means one button per subject in the deck.
    #[serde(default)]
    pub subjects: Vec<String>,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            all_label: default_all_label(),
            subjects: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RevisionConfig {
    #[serde(default)]
    pub source: SourceConfig,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default)]
    pub render: RenderConfig,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

// ============================================
// DEFAULT FUNCTIONS
// ============================================

fn default_document() -> String {
    DEFAULT_DOCUMENT.to_string()
}
fn default_output_path() -> PathBuf {
    PathBuf::from("revision.html")
}
fn default_stylesheet() -> String {
    "style.css".to_string()
}
fn default_title() -> String {
    "Revision".to_string()
}
fn default_all_label() -> String {
    "All Subjects".to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl RevisionConfig {
    /// Load config from {config_dir}/revision.toml.
    ///
    /// A missing file yields defaults. A file that exists but does not parse or
    /// validate is an error. [`DOCUMENT_ENV_VAR`] is applied before validation.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        let mut config = if config_path.exists() {
            Self::load_from_path(&config_path)?
        } else {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            Self::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            location: ErrorLocation::from(Location::caller()),
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: RevisionConfig = toml::from_str(&contents).map_err(|e| {
            warn!("Failed to parse {}: {}", path.display(), e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
        })?;

        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Apply environment overrides on top of file values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(document) = env::var(DOCUMENT_ENV_VAR) {
            info!("Using {DOCUMENT_ENV_VAR} override: {document}");
            self.source.document = document;
        }
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.source.document.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "source.document cannot be empty".to_string(),
            });
        }

        if self.output.path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "output.path cannot be empty".to_string(),
            });
        }

        if self.navigation.all_label.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: "navigation.all_label cannot be empty".to_string(),
            });
        }

        for (position, subject) in self.navigation.subjects.iter().enumerate() {
            if subject.is_empty() || subject == ALL_SUBJECTS {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("Invalid navigation subject: '{subject}'"),
                });
            }

            if self.navigation.subjects[..position].contains(subject) {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("Duplicate navigation subject: '{subject}'"),
                });
            }
        }

        Ok(())
    }

    /// Where to read the content document from.
    ///
    /// Relative `base_dir` values resolve against `config_dir`.
    pub fn document_source(&self, config_dir: &Path) -> Result<DocumentSource, LoaderError> {
        let base_dir = match &self.source.base_dir {
            Some(dir) if dir.is_absolute() => dir.clone(),
            Some(dir) => config_dir.join(dir),
            None => config_dir.to_path_buf(),
        };

        DocumentSource::parse(&self.source.document, &base_dir)
    }

    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            escape_html: self.render.escape_html,
            stylesheet: self.output.stylesheet.clone(),
            title: self.output.title.clone(),
        }
    }
}
