//! Artist albums screen
//!
//! Owns the screen state and drives it through its lifecycle:
//!
//! - `Idle`: no fetch outstanding, refresh indicator hidden
//! - `Loading`: a fetch intent was sent, indicator shown
//!
//! Every intent gets a fresh [`FetchTicket`] and a cancellation token that
//! is a child of the screen's lifetime token. Only the result for the most
//! recent ticket is applied; a new intent cancels the previous one, and
//! dismissing the screen cancels everything.

use crate::display_types::{AlbumDisplay, ErrorDisplay};
use crate::interactor::{ArtistViewOutput, FetchRequest, FetchTicket};
use crate::list::{ListDataSource, ListDelegate};
use crate::mapping::screen_title;
use crate::presenter::{ViewUpdate, ViewUpdates};
use crate::stores::ArtistAlbumsState;
use disco_core::Artist;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Rendering capabilities the screen drives
pub trait ScreenSurface {
    fn set_title(&mut self, title: &str);

    fn set_refreshing(&mut self, refreshing: bool);

    /// Re-read every row from `rows`
    fn reload_list(&mut self, rows: &dyn ListDataSource);

    /// Show a dismissible, non-blocking notice. Replaces any notice already shown.
    fn present_error(&mut self, error: &ErrorDisplay);

    fn dismiss_error(&mut self);
}

/// Results delivered to the screen, on the UI thread
pub trait ArtistViewInput {
    fn display_albums(&mut self, ticket: FetchTicket, albums: Vec<AlbumDisplay>);

    fn display_error(&mut self, ticket: FetchTicket, error: ErrorDisplay);
}

struct PendingFetch {
    ticket: FetchTicket,
    cancel: CancellationToken,
}

pub struct ArtistScreen<S: ScreenSurface> {
    artist: Artist,
    output: Box<dyn ArtistViewOutput>,
    surface: S,
    state: ArtistAlbumsState,
    last_ticket: u64,
    pending: Option<PendingFetch>,
    lifetime: CancellationToken,
}

impl<S: ScreenSurface> ArtistScreen<S> {
    pub fn new(artist: Artist, output: Box<dyn ArtistViewOutput>, surface: S) -> Self {
        Self {
            artist,
            output,
            surface,
            state: ArtistAlbumsState::default(),
            last_ticket: 0,
            pending: None,
            lifetime: CancellationToken::new(),
        }
    }

    /// Initial load: set the title and fetch
    pub fn on_appear(&mut self) -> Option<FetchTicket> {
        let title = screen_title(&self.artist);
        self.surface.set_title(&title);
        self.state.title = title;
        self.fetch_albums()
    }

    /// Pull-to-refresh. Always issues a new intent, even while loading.
    pub fn on_refresh_triggered(&mut self) -> Option<FetchTicket> {
        self.fetch_albums()
    }

    /// Send a fetch intent for the artist.
    ///
    /// Returns `None` without doing anything when the artist has no identity
    /// or the screen was dismissed.
    pub fn fetch_albums(&mut self) -> Option<FetchTicket> {
        if self.is_dismissed() {
            debug!("Screen dismissed, not fetching");
            return None;
        }
        let Some(artist_id) = self.artist.id.clone() else {
            info!("Artist has no id, nothing to load");
            return None;
        };

        if let Some(previous) = self.pending.take() {
            debug!("Superseding {}", previous.ticket);
            previous.cancel.cancel();
        }

        self.last_ticket += 1;
        let ticket = FetchTicket(self.last_ticket);
        let cancel = self.lifetime.child_token();
        self.pending = Some(PendingFetch {
            ticket,
            cancel: cancel.clone(),
        });
        self.set_loading(true);

        info!("Requesting albums for {} ({})", artist_id, ticket);
        self.output.fetch_albums(FetchRequest {
            artist_id,
            ticket,
            cancel,
        });
        Some(ticket)
    }

    /// Apply an update received from the presenter
    pub fn apply(&mut self, update: ViewUpdate) {
        match update {
            ViewUpdate::Albums { ticket, albums } => self.display_albums(ticket, albums),
            ViewUpdate::Error { ticket, error } => self.display_error(ticket, error),
        }
    }

    /// Apply every update already waiting on `updates`. Returns how many were applied.
    pub fn apply_pending(&mut self, updates: &mut ViewUpdates) -> usize {
        let mut applied = 0;
        while let Ok(update) = updates.try_recv() {
            self.apply(update);
            applied += 1;
        }
        applied
    }

    pub fn dismiss_error(&mut self) {
        if self.state.error.take().is_some() {
            self.surface.dismiss_error();
        }
    }

    /// The notice's retry action: hide it and fetch again
    pub fn retry_from_error(&mut self) -> Option<FetchTicket> {
        let offers_retry = self
            .state
            .error
            .as_ref()
            .is_some_and(|error| error.retry_label.is_some());
        if !offers_retry {
            return None;
        }
        self.dismiss_error();
        self.fetch_albums()
    }

    /// Tear the screen down. Outstanding fetches are cancelled and any
    /// result still in flight is ignored.
    pub fn dismiss(&mut self) {
        if self.is_dismissed() {
            return;
        }
        info!("Artist screen dismissed");
        self.lifetime.cancel();
        self.pending = None;
        self.set_loading(false);
    }

    pub fn is_dismissed(&self) -> bool {
        self.lifetime.is_cancelled()
    }

    pub fn is_refreshing(&self) -> bool {
        self.state.loading
    }

    pub fn pending_ticket(&self) -> Option<FetchTicket> {
        self.pending.as_ref().map(|p| p.ticket)
    }

    pub fn state(&self) -> &ArtistAlbumsState {
        &self.state
    }

    pub fn title(&self) -> &str {
        &self.state.title
    }

    pub fn artist(&self) -> &Artist {
        &self.artist
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Clear the pending fetch if `ticket` is the one it is waiting for
    fn accept(&mut self, ticket: FetchTicket) -> bool {
        if self.is_dismissed() {
            debug!("Screen dismissed, ignoring {}", ticket);
            return false;
        }
        if self.pending_ticket() != Some(ticket) {
            debug!("Discarding stale result for {}", ticket);
            return false;
        }
        self.pending = None;
        true
    }

    fn set_loading(&mut self, loading: bool) {
        if self.state.loading != loading {
            self.state.loading = loading;
            self.surface.set_refreshing(loading);
        }
    }
}

impl<S: ScreenSurface> ArtistViewInput for ArtistScreen<S> {
    fn display_albums(&mut self, ticket: FetchTicket, albums: Vec<AlbumDisplay>) {
        if !self.accept(ticket) {
            return;
        }
        info!("Displaying {} albums ({})", albums.len(), ticket);
        self.state.albums.replace(albums);
        self.surface.reload_list(&self.state.albums);
        self.set_loading(false);
    }

    fn display_error(&mut self, ticket: FetchTicket, error: ErrorDisplay) {
        if !self.accept(ticket) {
            return;
        }
        warn!("Showing error ({}): {}", ticket, error.message);
        self.set_loading(false);
        self.surface.present_error(&error);
        self.state.error = Some(error);
    }
}

impl<S: ScreenSurface> ListDataSource for ArtistScreen<S> {
    fn count(&self) -> usize {
        self.state.albums.count()
    }

    fn record_at(&self, index: usize) -> &AlbumDisplay {
        self.state.albums.record_at(index)
    }

    fn section_title(&self) -> &str {
        self.state.albums.section_title()
    }
}

impl<S: ScreenSurface> ListDelegate for ArtistScreen<S> {
    fn did_select_row(&mut self, index: usize) {
        // Album navigation does not exist yet
        debug!("Album row {} selected", index);
    }
}

impl<S: ScreenSurface> Drop for ArtistScreen<S> {
    fn drop(&mut self) {
        self.lifetime.cancel();
    }
}
