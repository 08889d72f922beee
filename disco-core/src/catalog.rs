//! In-memory album catalog, optionally loaded from YAML

use crate::error::{CatalogError, FetchError};
use crate::model::{Album, Artist, ArtistId};
use crate::source::AlbumSource;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// YAML catalog file structure
///
/// ```yaml
/// artists:
///   abc123:
///     name: Taylor Swift
///     albums:
///       - title: Red
///         image_url: https://example.com/red.jpg
/// failures:
///   offline-artist: Network unavailable
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    #[serde(default)]
    pub artists: HashMap<String, CatalogArtist>,
    /// Artist ids whose fetch fails, with the network message reported
    #[serde(default)]
    pub failures: HashMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogArtist {
    pub name: Option<String>,
    #[serde(default)]
    pub albums: Vec<Album>,
}

/// Album source answering from an in-memory catalog.
///
/// Unknown artists fail with [`FetchError::ArtistNotFound`]. An optional
/// delay stands in for network latency.
#[derive(Debug, Clone, Default)]
pub struct CatalogAlbumSource {
    artists: HashMap<String, CatalogArtist>,
    failures: HashMap<String, FetchError>,
    delay: Duration,
}

impl CatalogAlbumSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_file(file: CatalogFile) -> Self {
        let failures = file
            .failures
            .into_iter()
            .map(|(id, message)| {
                let error = if message.trim().is_empty() {
                    FetchError::Unavailable
                } else {
                    FetchError::Network(message)
                };
                (id, error)
            })
            .collect();
        Self {
            artists: file.artists,
            failures,
            delay: Duration::ZERO,
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_yaml::from_str(yaml)?;
        Ok(Self::from_file(file))
    }

    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        info!("Loading album catalog from {}", path.display());
        let yaml = std::fs::read_to_string(path)?;
        let source = Self::from_yaml_str(&yaml)?;
        info!("Catalog loaded with {} artists", source.artists.len());
        Ok(source)
    }

    pub fn with_artist(mut self, id: &str, name: Option<&str>, albums: Vec<Album>) -> Self {
        self.artists.insert(
            id.to_string(),
            CatalogArtist {
                name: name.map(|n| n.to_string()),
                albums,
            },
        );
        self
    }

    /// Make every fetch for `id` fail with `error`
    pub fn with_failure(mut self, id: &str, error: FetchError) -> Self {
        self.failures.insert(id.to_string(), error);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Look up an artist by id. Ids that only appear as failures still resolve.
    pub fn artist(&self, id: &str) -> Option<Artist> {
        if let Some(entry) = self.artists.get(id) {
            return Some(Artist::new(ArtistId::new(id), entry.name.clone()));
        }
        self.failures
            .contains_key(id)
            .then(|| Artist::new(ArtistId::new(id), None))
    }
}

#[async_trait]
impl AlbumSource for CatalogAlbumSource {
    async fn albums_for_artist(&self, artist_id: &ArtistId) -> Result<Vec<Album>, FetchError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if let Some(error) = self.failures.get(artist_id.as_str()) {
            debug!("Catalog failing fetch for {}: {}", artist_id, error);
            return Err(error.clone());
        }

        match self.artists.get(artist_id.as_str()) {
            Some(entry) => {
                debug!("Catalog returning {} albums for {}", entry.albums.len(), artist_id);
                Ok(entry.albums.clone())
            }
            None => Err(FetchError::ArtistNotFound(artist_id.to_string())),
        }
    }
}
