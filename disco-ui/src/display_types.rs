//! Display types for the artist screen
//!
//! Lightweight projections of domain data, holding only what the screen
//! renders. Built by the mapping layer, never by the screen itself.

use crate::strings;

/// Album display info
#[derive(Clone, Debug, PartialEq)]
pub struct AlbumDisplay {
    pub title: String,
    /// Artwork location. `None` means the renderer shows its placeholder.
    pub image_url: Option<String>,
}

impl AlbumDisplay {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            image_url: None,
        }
    }
}

/// What the dismissible error notice shows
#[derive(Clone, Debug, PartialEq)]
pub struct ErrorDisplay {
    pub title: String,
    pub message: String,
    /// Label of the retry action, when retrying makes sense
    pub retry_label: Option<String>,
}

impl ErrorDisplay {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            title: strings::ERROR_TITLE.to_string(),
            message: message.into(),
            retry_label: None,
        }
    }

    pub fn with_retry(mut self) -> Self {
        self.retry_label = Some(strings::RETRY_LABEL.to_string());
        self
    }
}
