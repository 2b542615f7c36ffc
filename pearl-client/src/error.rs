//! Client error types

use thiserror::Error;

/// Client error type
///
/// An absent dependency key is not an error: the owning resource stays
/// `Idle` and no request is made.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Request could not complete (DNS, connect, timeout)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Token missing or rejected by the backend
    #[error("authentication required")]
    Unauthorized,

    /// Any other non-2xx response
    #[error("HTTP {status}: {detail}")]
    Status {
        status: reqwest::StatusCode,
        detail: String,
    },

    /// Response body did not match the expected shape
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
