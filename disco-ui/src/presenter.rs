//! Presenter: turns fetch results into display updates for the screen
//!
//! Runs wherever the interactor finishes its work. Updates travel to the UI
//! thread over a channel; the UI loop hands each one to
//! [`ArtistScreen::apply`](crate::screen::ArtistScreen::apply).

use crate::display_types::{AlbumDisplay, ErrorDisplay};
use crate::interactor::FetchTicket;
use crate::mapping::{albums_from_domain, error_from_fetch};
use disco_core::{Album, FetchError};
use tokio::sync::mpsc;
use tracing::debug;

/// Terminal result of one fetch, ready to render
#[derive(Clone, Debug, PartialEq)]
pub enum ViewUpdate {
    Albums {
        ticket: FetchTicket,
        albums: Vec<AlbumDisplay>,
    },
    Error {
        ticket: FetchTicket,
        error: ErrorDisplay,
    },
}

impl ViewUpdate {
    pub fn ticket(&self) -> FetchTicket {
        match self {
            ViewUpdate::Albums { ticket, .. } | ViewUpdate::Error { ticket, .. } => *ticket,
        }
    }
}

/// Receiving end drained by the UI loop
pub type ViewUpdates = mpsc::UnboundedReceiver<ViewUpdate>;

#[derive(Clone, Debug)]
pub struct ArtistPresenter {
    updates_tx: mpsc::UnboundedSender<ViewUpdate>,
}

impl ArtistPresenter {
    pub fn new(updates_tx: mpsc::UnboundedSender<ViewUpdate>) -> Self {
        Self { updates_tx }
    }

    /// Presenter plus the receiver its updates arrive on
    pub fn channel() -> (Self, ViewUpdates) {
        let (updates_tx, updates_rx) = mpsc::unbounded_channel();
        (Self::new(updates_tx), updates_rx)
    }

    pub fn present_albums(&self, ticket: FetchTicket, albums: &[Album]) {
        self.send(ViewUpdate::Albums {
            ticket,
            albums: albums_from_domain(albums),
        });
    }

    pub fn present_error(&self, ticket: FetchTicket, error: &FetchError) {
        self.send(ViewUpdate::Error {
            ticket,
            error: error_from_fetch(error),
        });
    }

    fn send(&self, update: ViewUpdate) {
        let ticket = update.ticket();
        if self.updates_tx.send(update).is_err() {
            debug!("Screen is gone, dropping update for {}", ticket);
        }
    }
}
