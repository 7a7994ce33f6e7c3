//! Top-level transport error type.

use super::{AuthError, ClientError, ConfigError, DecodeError};
use thiserror::Error;

/// Error returned when a call cannot produce an [`ApiResult`](crate::ApiResult).
///
/// ## Examples
///
/// ```rust,ignore
/// use paxstore_openapi::TransportError;
///
/// fn handle_error(err: TransportError) {
///     match err {
///         TransportError::Client(e) => eprintln!("Network error: {e}"),
///         TransportError::Decode(e) => eprintln!("Unreadable response: {e}"),
///         TransportError::Auth(e) => eprintln!("Auth failed: {e}"),
///         TransportError::Config(e) => eprintln!("Configuration error: {e}"),
///     }
/// }
/// ```
#[derive(Debug, Error)]
pub enum TransportError {
    /// HTTP client errors (network, timeout, non-success status).
    #[error(transparent)]
    Client(#[from] ClientError),

    /// Response body could not be decoded into the expected shape.
    #[error(transparent)]
    Decode(#[from] DecodeError),

    /// Authentication and authorization errors.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Client configuration or request template errors.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl TransportError {
    /// Returns the HTTP status code associated with this error, if any.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Client(e) => e.status_code(),
            Self::Auth(AuthError::AuthenticationFailed { .. }) => Some(401),
            Self::Auth(AuthError::InsufficientPermissions { .. }) => Some(403),
            _ => None,
        }
    }

    /// Whether sending the same request again might succeed.
    ///
    /// Only unreachable hosts and gateway or throttling statuses qualify.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Client(e) if e.is_retryable())
    }
}
