//! Error types for fstop.

use thiserror::Error;

/// Result type alias using fstop's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for fstop operations.
///
/// Per-field interpretation failures (an unparseable date phrase, a span
/// with no gazetteer hit) are never surfaced through this type — they
/// degrade to absent filter fields. Errors here mean an upstream
/// collaborator or the surrounding plumbing failed.
#[derive(Error, Debug)]
pub enum Error {
    /// Entity recognition failed
    #[error("Recognition error: {0}")]
    Recognition(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_recognition() {
        let err = Error::Recognition("sidecar unreachable".to_string());
        assert_eq!(err.to_string(), "Recognition error: sidecar unreachable");
    }

    #[test]
    fn test_error_display_config() {
        let err = Error::Config("missing NER_BASE_URL".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing NER_BASE_URL");
    }

    #[test]
    fn test_error_display_invalid_input() {
        let err = Error::InvalidInput("empty query".to_string());
        assert_eq!(err.to_string(), "Invalid input: empty query");
    }

    #[test]
    fn test_from_serde_json_error() {
        let json_err = serde_json::from_str::<i32>("not a number");
        assert!(json_err.is_err());

        let err: Error = json_err.unwrap_err().into();
        match err {
            Error::Serialization(msg) => assert!(!msg.is_empty()),
            _ => panic!("Expected Serialization error"),
        }
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}

        assert_send::<Error>();
        assert_sync::<Error>();
    }

    #[test]
    fn test_result_type_ok() {
        fn get_result() -> Result<i32> {
            Ok(42)
        }
        assert_eq!(get_result().unwrap(), 42);
    }
}
