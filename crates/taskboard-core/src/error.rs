//! Error types for the Taskboard core library.

use thiserror::Error;

/// Result type alias using `CoreError`.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Core error types for Taskboard.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration loading or validation error.
    #[error("Configuration error: {message}")]
    Config {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Task text was empty after trimming.
    #[error("Task text cannot be empty")]
    EmptyTask,
}

impl CoreError {
    /// Create a new configuration error with a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            source: None,
        }
    }

    /// Create a new configuration error with source.
    pub fn config_with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Config {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }
}

/// Failure while fetching the post collection.
///
/// The UI does not distinguish between variants beyond the rendered message.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Failed to fetch data (HTTP {0})")]
    Status(u16),

    /// The response body was not a valid post array.
    #[error("Failed to parse data: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error() {
        let err = CoreError::config("page_size must be positive");
        assert!(err.to_string().contains("Configuration error"));
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn test_config_error_keeps_source() {
        use std::error::Error;

        let toml_err = toml::from_str::<toml::Table>("not = [valid").unwrap_err();
        let err = CoreError::config_with_source("bad config", toml_err);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_fetch_error_display() {
        assert_eq!(
            FetchError::Status(500).to_string(),
            "Failed to fetch data (HTTP 500)"
        );
        assert!(
            FetchError::Network("connection refused".to_string())
                .to_string()
                .contains("connection refused")
        );
    }

    #[test]
    fn test_fetch_error_from_serde() {
        let serde_err = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let err: FetchError = serde_err.into();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}
