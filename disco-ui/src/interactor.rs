//! Interactor: performs album fetches on behalf of the screen

use crate::presenter::ArtistPresenter;
use disco_core::{AlbumSource, ArtistId};
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Sequence number of a fetch intent. Later intents have larger tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FetchTicket(pub u64);

impl fmt::Display for FetchTicket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "fetch #{}", self.0)
    }
}

/// One fetch intent issued by the screen
#[derive(Clone, Debug)]
pub struct FetchRequest {
    pub artist_id: ArtistId,
    pub ticket: FetchTicket,
    /// Cancelled when the request is superseded or the screen goes away
    pub cancel: CancellationToken,
}

/// Where the screen sends its fetch intents.
///
/// Returns immediately; the result comes back later as a
/// [`ViewUpdate`](crate::presenter::ViewUpdate) carrying the same ticket.
pub trait ArtistViewOutput {
    fn fetch_albums(&self, request: FetchRequest);
}

/// Fetches from an [`AlbumSource`] on the tokio runtime and reports through
/// an [`ArtistPresenter`].
///
/// A cancelled request delivers nothing.
pub struct ArtistInteractor {
    source: Arc<dyn AlbumSource>,
    presenter: ArtistPresenter,
    runtime: tokio::runtime::Handle,
}

impl ArtistInteractor {
    pub fn new(
        source: Arc<dyn AlbumSource>,
        presenter: ArtistPresenter,
        runtime: tokio::runtime::Handle,
    ) -> Self {
        Self {
            source,
            presenter,
            runtime,
        }
    }
}

impl ArtistViewOutput for ArtistInteractor {
    fn fetch_albums(&self, request: FetchRequest) {
        let source = self.source.clone();
        let presenter = self.presenter.clone();

        self.runtime.spawn(async move {
            let FetchRequest {
                artist_id,
                ticket,
                cancel,
            } = request;
            debug!("Fetching albums for {} ({})", artist_id, ticket);

            // A request superseded before it starts never reaches the source
            let result = tokio::select! {
                biased;
                _ = cancel.cancelled() => {
                    debug!("{} cancelled before the source answered", ticket);
                    return;
                }
                result = source.albums_for_artist(&artist_id) => result,
            };

            if cancel.is_cancelled() {
                debug!("{} cancelled, discarding result", ticket);
                return;
            }

            match result {
                Ok(albums) => {
                    info!("Fetched {} albums for {} ({})", albums.len(), artist_id, ticket);
                    presenter.present_albums(ticket, &albums);
                }
                Err(e) => {
                    warn!("Failed to fetch albums for {}: {}", artist_id, e);
                    presenter.present_error(ticket, &e);
                }
            }
        });
    }
}
