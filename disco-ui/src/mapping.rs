//! Conversions from domain types to display types

use crate::display_types::{AlbumDisplay, ErrorDisplay};
use crate::strings;
use disco_core::{Album, Artist, FetchError};

pub fn album_from_domain(album: &Album) -> AlbumDisplay {
    // Sources report missing artwork as an empty string as often as not
    let image_url = album
        .image_url
        .as_ref()
        .filter(|url| !url.trim().is_empty())
        .cloned();

    AlbumDisplay {
        title: album.title.clone(),
        image_url,
    }
}

/// Maps every album, keeping order and count.
pub fn albums_from_domain(albums: &[Album]) -> Vec<AlbumDisplay> {
    albums.iter().map(album_from_domain).collect()
}

pub fn error_from_fetch(error: &FetchError) -> ErrorDisplay {
    let message = error
        .user_message()
        .unwrap_or_else(|| strings::GENERIC_ERROR_MESSAGE.to_string());
    let display = ErrorDisplay::new(message);
    if error.is_retryable() {
        display.with_retry()
    } else {
        display
    }
}

pub fn screen_title(artist: &Artist) -> String {
    artist
        .name
        .as_ref()
        .filter(|name| !name.trim().is_empty())
        .cloned()
        .unwrap_or_else(|| strings::ARTIST_SCREEN_TITLE.to_string())
}
