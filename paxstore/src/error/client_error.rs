//! Failures talking to the PAXSTORE host.

use thiserror::Error;

/// The request did not come back with a 2xx status.
#[derive(Debug, Error)]
pub enum ClientError {
    /// `reqwest` failed for a reason other than a timeout or refused
    /// connection, such as TLS or a malformed response.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The host answered with a non-2xx status. `message` holds the raw body
    /// so a business error can still be read out of it.
    #[error("HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// No response within the configured timeout.
    #[error("Request timeout after {duration_ms}ms")]
    Timeout { duration_ms: u64 },

    /// The host could not be reached.
    #[error("Connection failed: {0}")]
    Connection(String),
}

impl ClientError {
    /// Whether sending the same request again might succeed.
    ///
    /// Nothing in this crate retries; callers decide.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Timeout { .. } | Self::Connection(_) => true,
            Self::HttpStatus { status, .. } => matches!(status, 429 | 502..=504),
            Self::Request(_) => false,
        }
    }

    /// Returns the HTTP status for [`HttpStatus`](Self::HttpStatus).
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
