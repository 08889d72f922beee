use thiserror::Error;

/// Why an album source could not produce albums
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("Failed to parse album data: {0}")]
    Parse(String),
    #[error("Artist not found: {0}")]
    ArtistNotFound(String),
    #[error("Albums are unavailable")]
    Unavailable,
}

impl FetchError {
    /// Message fit to show a user, if this failure carries one.
    ///
    /// Parse failures only carry technical detail, so they return `None`.
    pub fn user_message(&self) -> Option<String> {
        match self {
            FetchError::Network(message) if !message.trim().is_empty() => Some(message.clone()),
            FetchError::ArtistNotFound(_) => Some("This artist could not be found".to_string()),
            FetchError::Network(_) | FetchError::Parse(_) | FetchError::Unavailable => None,
        }
    }

    /// Whether asking again might succeed
    pub fn is_retryable(&self) -> bool {
        matches!(self, FetchError::Network(_) | FetchError::Unavailable)
    }
}

/// Catalog file errors
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid catalog: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_message_is_user_facing() {
        let err = FetchError::Network("Network unavailable".into());
        assert_eq!(err.user_message().as_deref(), Some("Network unavailable"));
        assert!(err.is_retryable());
    }

    #[test]
    fn test_blank_network_message_is_absent() {
        assert_eq!(FetchError::Network("  ".into()).user_message(), None);
    }

    #[test]
    fn test_parse_error_has_no_user_message() {
        let err = FetchError::Parse("expected array at line 1".into());
        assert_eq!(err.user_message(), None);
        assert!(!err.is_retryable());
    }
}
