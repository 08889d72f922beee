//! Artist and album models as returned by album sources

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an artist in the external data source.
///
/// Never empty. Use [`ArtistId::new`], which rejects blank input, so a
/// fetch can never be issued for an artist that has no identity.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ArtistId(String);

impl ArtistId {
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            None
        } else {
            Some(Self(id))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ArtistId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Artist the album screen is opened for
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Artist {
    /// Identity in the data source. `None` means there is nothing to load.
    pub id: Option<ArtistId>,
    /// Display name, used as the screen title when present
    pub name: Option<String>,
}

impl Artist {
    pub fn new(id: Option<ArtistId>, name: Option<String>) -> Self {
        Self { id, name }
    }

    /// Artist with an identity and a name. A blank id yields an artist with no identity.
    pub fn named(id: &str, name: &str) -> Self {
        Self {
            id: ArtistId::new(id),
            name: Some(name.to_string()),
        }
    }
}

/// One album belonging to an artist
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Album {
    pub title: String,
    /// MusicBrainz id, when the source knows it
    #[serde(default)]
    pub mbid: Option<String>,
    /// Artwork location, when the source has one
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Album {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            mbid: None,
            image_url: None,
        }
    }

    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = Some(image_url.into());
        self
    }
}
