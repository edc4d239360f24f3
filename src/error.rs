//! Error types shared by the fetcher, configuration and console layers

use thiserror::Error;

/// Result alias used across the library
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors raised while configuring or running a search
#[derive(Debug, Error)]
pub enum SearchError {
    /// A local precondition failed (blank query, non-positive count, ...)
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The search provider answered with a non-success status
    #[error("provider returned HTTP {status}: {message}")]
    Provider { status: u16, message: String },

    /// Required settings are missing or unusable
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("failed to parse provider response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Fieldless discriminant of [`SearchError`], for callers that only branch on the kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InvalidArgument,
    Provider,
    Configuration,
    Network,
    Parse,
    Io,
}

impl SearchError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::Provider { .. } => ErrorKind::Provider,
            Self::Configuration(_) => ErrorKind::Configuration,
            Self::Network(_) => ErrorKind::Network,
            Self::Parse(_) => ErrorKind::Parse,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_matches_variant() {
        assert_eq!(
            SearchError::invalid_argument("blank query").kind(),
            ErrorKind::InvalidArgument
        );
        assert_eq!(
            SearchError::configuration("missing key").kind(),
            ErrorKind::Configuration
        );
        let provider = SearchError::Provider {
            status: 403,
            message: "forbidden".to_string(),
        };
        assert_eq!(provider.kind(), ErrorKind::Provider);
    }

    #[test]
    fn test_display() {
        let err = SearchError::Provider {
            status: 429,
            message: "quota exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "provider returned HTTP 429: quota exceeded");
    }
}
