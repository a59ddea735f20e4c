//! Page state actor.
//!
//! Click handlers must run one at a time and to completion, like handlers on
//! a browser event loop. All mutations go through a single task that owns the
//! write side of the page; reads take a shared lock.

use crate::error::page::PageError;
use crate::page::{Outcome, RevisionPage};
use crate::render::html::{RenderOptions, render_document};

use common::ErrorLocation;
use models::ControlId;

use std::panic::Location;
use std::sync::Arc;

use log::{info, warn};
use tokio::sync::{RwLock, mpsc, oneshot};

const COMMAND_CHANNEL_CAPACITY: usize = 100;

/// Commands that mutate the page.
#[derive(Debug)]
pub enum PageCommand {
    /// A click on a rendered control.
    Click {
        control: ControlId,
        reply: oneshot::Sender<Result<Outcome, PageError>>,
    },
}

/// Shared handle to the page.
///
/// `Clone` is cheap; all clones talk to the same actor.
#[derive(Clone)]
pub struct PageState {
    command_tx: mpsc::Sender<PageCommand>,
    page: Arc<RwLock<RevisionPage>>,
}

impl PageState {
    /// Take ownership of a booted page and start its actor.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn spawn(page: RevisionPage) -> Self {
        let (command_tx, command_rx) = mpsc::channel(COMMAND_CHANNEL_CAPACITY);
        let page = Arc::new(RwLock::new(page));

        tokio::spawn(page_actor(command_rx, Arc::clone(&page)));

        Self { command_tx, page }
    }

    /// Deliver a click and wait for its handler to finish.
    #[track_caller]
    pub async fn click(&self, control: ControlId) -> Result<Outcome, PageError> {
        let location = ErrorLocation::from(Location::caller());
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(PageCommand::Click {
                control,
                reply: reply_tx,
            })
            .await
            .map_err(|e| PageError::ActorStopped {
                message: format!("Page actor is not accepting clicks: {e}"),
                location,
            })?;

        reply_rx.await.map_err(|e| PageError::ActorStopped {
            message: format!("Page actor dropped the reply: {e}"),
            location,
        })?
    }

    /// Copy of the current page.
    pub async fn snapshot(&self) -> RevisionPage {
        self.page.read().await.clone()
    }

    /// Render the current page as a document.
    pub async fn render(&self, options: &RenderOptions) -> String {
        render_document(&*self.page.read().await, options)
    }
}

async fn page_actor(mut command_rx: mpsc::Receiver<PageCommand>, page: Arc<RwLock<RevisionPage>>) {
    info!("Page actor started");

    while let Some(command) = command_rx.recv().await {
        match command {
            PageCommand::Click { control, reply } => {
                let result = page.write().await.dispatch(control);

                match &result {
                    Ok(outcome) => info!("{control}: {outcome:?}"),
                    Err(e) => warn!("{control}: {e}"),
                }

                if reply.send(result).is_err() {
                    warn!("Click on {control} finished after its sender went away");
                }
            }
        }
    }

    info!("Page actor stopped");
}
