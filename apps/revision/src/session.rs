//! Host event loop.
//!
//! Stands in for the browser: every input line is one click, named by the
//! control id the renderer wrote into `data-control`. Clicks are handed to
//! the page actor one after another and the page file is rewritten after
//! each handled click.

use crate::error::RevisionError;

use common::ErrorLocation;
use models::ControlId;
use revision_core::error::PageError;
use revision_core::page::PageState;
use revision_core::render::html::RenderOptions;

use std::panic::Location;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

/// Input line that ends the session.
pub const QUIT_COMMAND: &str = "quit";

/// Counts reported when a session ends.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub handled: usize,
    pub rejected: usize,
}

pub struct Session {
    state: PageState,
    output: PathBuf,
    options: RenderOptions,
}

impl Session {
    pub fn new(state: PageState, output: PathBuf, options: RenderOptions) -> Self {
        Self {
            state,
            output,
            options,
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Render the current page and write it to the output file.
    pub async fn write_page(&self) -> Result<(), RevisionError> {
        let html = self.state.render(&self.options).await;

        tokio::fs::write(&self.output, html)
            .await
            .map_err(|e| RevisionError::Output {
                message: format!("Failed to write {}: {e}", self.output.display()),
                location: ErrorLocation::from(Location::caller()),
            })?;

        debug!("Page written to {}", self.output.display());
        Ok(())
    }

    /// Process clicks from `input` until `quit` or end of input.
    ///
    /// Unknown or unbound controls are logged and skipped. Only I/O failures
    /// and a stopped page actor end the session with an error.
    pub async fn run<R>(&self, input: R) -> Result<SessionSummary, RevisionError>
    where
        R: AsyncBufRead + Unpin,
    {
        let mut summary = SessionSummary::default();
        let mut lines = input.lines();

        while let Some(line) = lines.next_line().await.map_err(|e| RevisionError::Session {
            message: format!("Failed to read click events: {e}"),
            location: ErrorLocation::from(Location::caller()),
        })? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if line == QUIT_COMMAND {
                info!("Quit requested");
                break;
            }

            let control = match line.parse::<ControlId>() {
                Ok(control) => control,
                Err(e) => {
                    warn!("Ignoring input '{line}': {e}");
                    summary.rejected += 1;
                    continue;
                }
            };

            match self.state.click(control).await {
                Ok(_) => {
                    summary.handled += 1;
                    self.write_page().await?;
                }
                Err(e @ PageError::ActorStopped { .. }) => {
                    return Err(RevisionError::core("Page actor stopped", e));
                }
                Err(e) => {
                    warn!("Click on {control} rejected: {e}");
                    summary.rejected += 1;
                }
            }
        }

        Ok(summary)
    }
}
