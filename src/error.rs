//! Error types for envelope-client.

use thiserror::Error;

/// Transport-level failures that escape the request pipeline.
///
/// Application-level failures (non-2xx responses) never appear here; they
/// are recovered into an [`ErrorResponse`](crate::ErrorResponse) inside the
/// returned [`ApiResult`](crate::ApiResult). This type covers everything
/// below the application protocol: the network, timeouts, cancellation, and
/// serialization of outgoing bodies.
#[derive(Debug, Error)]
pub enum Error {
    /// Network/HTTP error from the underlying transport.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request or body read timed out.
    #[error("Request timed out")]
    Timeout,

    /// The call was cancelled through its cancellation token.
    #[error("Request cancelled")]
    Cancelled,

    /// Failed to serialize an outgoing request body.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Map a transport error, splitting timeouts into their own variant.
    pub(crate) fn from_transport(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Error::Timeout
        } else {
            Error::Network(e)
        }
    }

    /// Returns true if the call was cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }

    /// Returns true if the call timed out.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        match self {
            Error::Timeout => true,
            Error::Network(e) => e.is_timeout(),
            _ => false,
        }
    }
}

/// Convenience type alias.
pub type Result<T> = std::result::Result<T, Error>;
