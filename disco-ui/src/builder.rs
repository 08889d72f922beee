//! Wires an artist screen to its collaborators

use crate::interactor::{ArtistInteractor, ArtistViewOutput};
use crate::presenter::{ArtistPresenter, ViewUpdates};
use crate::screen::{ArtistScreen, ScreenSurface};
use disco_core::{AlbumSource, Artist};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BuildError {
    #[error("No album source configured")]
    MissingSource,
    #[error("No tokio runtime available: {0}")]
    NoRuntime(#[from] tokio::runtime::TryCurrentError),
}

/// Builds an [`ArtistScreen`] backed by an [`ArtistInteractor`].
///
/// The runtime defaults to the one the builder is called from.
pub struct ArtistScreenBuilder {
    artist: Artist,
    source: Option<Arc<dyn AlbumSource>>,
    runtime: Option<tokio::runtime::Handle>,
}

impl ArtistScreenBuilder {
    pub fn new(artist: Artist) -> Self {
        Self {
            artist,
            source: None,
            runtime: None,
        }
    }

    pub fn source(mut self, source: Arc<dyn AlbumSource>) -> Self {
        self.source = Some(source);
        self
    }

    pub fn runtime(mut self, runtime: tokio::runtime::Handle) -> Self {
        self.runtime = Some(runtime);
        self
    }

    /// Build the screen. The returned receiver must be drained on the UI
    /// thread, passing each update to [`ArtistScreen::apply`].
    pub fn build<S: ScreenSurface>(
        self,
        surface: S,
    ) -> Result<(ArtistScreen<S>, ViewUpdates), BuildError> {
        let source = self.source.ok_or(BuildError::MissingSource)?;
        let runtime = match self.runtime {
            Some(runtime) => runtime,
            None => tokio::runtime::Handle::try_current()?,
        };

        let (presenter, updates) = ArtistPresenter::channel();
        let output: Box<dyn ArtistViewOutput> =
            Box::new(ArtistInteractor::new(source, presenter, runtime));
        Ok((ArtistScreen::new(self.artist, output, surface), updates))
    }
}
