//! Artist albums screen state

use crate::display_types::ErrorDisplay;
use crate::list::AlbumList;

/// State for the artist albums screen
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArtistAlbumsState {
    /// Screen title, set when the screen appears
    pub title: String,
    /// Albums from the most recent successful fetch
    pub albums: AlbumList,
    /// Whether a fetch is outstanding (refresh indicator shown)
    pub loading: bool,
    /// Error notice currently shown, if any
    pub error: Option<ErrorDisplay>,
}
