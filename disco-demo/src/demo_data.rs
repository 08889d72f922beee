//! Built-in catalog used when no catalog file is configured

use disco_core::{Album, CatalogAlbumSource, FetchError};

pub const DEMO_ARTIST_ID: &str = "abc123";

pub fn demo_catalog() -> CatalogAlbumSource {
    CatalogAlbumSource::new()
        .with_artist(
            DEMO_ARTIST_ID,
            Some("Taylor Swift"),
            vec![
                Album::new("Red").with_image_url("https://covers.example.com/red.jpg"),
                Album::new("1989").with_image_url("https://covers.example.com/1989.jpg"),
                Album::new("Folklore"),
                Album::new("Midnights").with_image_url(""),
            ],
        )
        .with_artist(
            "b2c3d4",
            Some("Radiohead"),
            vec![
                Album::new("OK Computer"),
                Album::new("Kid A"),
                Album::new("In Rainbows"),
            ],
        )
        .with_artist("quiet", None, Vec::new())
        .with_failure("offline", FetchError::Network("Network unavailable".into()))
        .with_failure("garbled", FetchError::Parse("expected album list".into()))
}
