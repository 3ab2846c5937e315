//! Error types for quotesnap
//!
//! Errors are grouped by origin (transport, protocol status, decode, retry
//! exhaustion, branch aggregation) rather than by a taxonomy callers are
//! expected to branch on. Every provider failure is retried the same way, and
//! the orchestrator surfaces a single error per request.

use thiserror::Error;

/// Result type alias for quotesnap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for quotesnap
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure (connection, DNS, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx HTTP status received from an upstream service
    #[error("received non-success status code: {code}")]
    Status {
        /// The HTTP status code returned by the upstream service
        code: u16,
    },

    /// Quote response body could not be decoded as JSON
    #[error("quote decode error: {0}")]
    Json(#[from] serde_json::Error),

    /// Image response body could not be decoded as a JPEG raster
    #[error("image decode error: {0}")]
    Image(#[from] image::ImageError),

    /// A provider base URL could not be parsed
    #[error("invalid url: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// An operation failed on every attempt the retry policy allowed
    #[error("{operation} failed after {attempts} attempts: {source}")]
    RetryExhausted {
        /// Name of the operation that was retried
        operation: String,
        /// Total number of attempts made
        attempts: u32,
        /// The error returned by the final attempt
        #[source]
        source: Box<Error>,
    },

    /// The quote branch of a combined fetch failed
    #[error("error calling quote api: {0}")]
    QuoteApi(#[source] Box<Error>),

    /// The image branch of a combined fetch failed
    #[error("error calling image api: {0}")]
    ImageApi(#[source] Box<Error>),

    /// A spawned fetch task panicked or was aborted
    #[error("task join error: {0}")]
    TaskJoin(String),

    /// I/O error (binding the web listener, writing output)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_message_contains_code() {
        let err = Error::Status { code: 503 };
        assert_eq!(err.to_string(), "received non-success status code: 503");
    }

    #[test]
    fn retry_exhausted_message_names_operation_and_attempts() {
        let err = Error::RetryExhausted {
            operation: "quote fetch".to_string(),
            attempts: 4,
            source: Box::new(Error::Status { code: 500 }),
        };
        let msg = err.to_string();
        assert!(msg.contains("quote fetch"), "message was: {msg}");
        assert!(msg.contains("4 attempts"), "message was: {msg}");
        assert!(msg.contains("500"), "message was: {msg}");
    }

    #[test]
    fn branch_errors_chain_the_underlying_source() {
        use std::error::Error as _;

        let inner = Error::Status { code: 404 };
        let err = Error::ImageApi(Box::new(inner));
        assert!(err.to_string().starts_with("error calling image api"));
        assert!(err.source().is_some(), "branch error should chain a source");
    }
}
