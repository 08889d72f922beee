//! Boundary between the album screen and whatever fetches albums

use crate::error::FetchError;
use crate::model::{Album, ArtistId};
use async_trait::async_trait;

/// Produces the albums of an artist.
///
/// Implementations run off the UI thread. Album order is preserved all the
/// way to the rendered list.
#[async_trait]
pub trait AlbumSource: Send + Sync {
    async fn albums_for_artist(&self, artist_id: &ArtistId) -> Result<Vec<Album>, FetchError>;
}
