//! User-facing strings for the artist screen

/// Screen title when the artist has no name
pub const ARTIST_SCREEN_TITLE: &str = "Artist";

/// Header of the single album section
pub const ALBUMS_SECTION_TITLE: &str = "Albums";

pub const ERROR_TITLE: &str = "Error";

/// Shown when a failure carries no message of its own
pub const GENERIC_ERROR_MESSAGE: &str = "Something went wrong. Pull to refresh to try again.";

pub const RETRY_LABEL: &str = "Retry";
