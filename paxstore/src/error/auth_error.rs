//! Authentication and authorization errors.

use thiserror::Error;

/// Errors related to API authentication.
///
/// Only raised when the server rejects a request without a structured
/// business error body; a decodable error body becomes an
/// [`ApiResult::ApiError`](crate::ApiResult::ApiError) instead.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Server rejected the signature or credentials.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Raw response body from the server.
        message: String,
    },

    /// The credentials are valid but not allowed to call this endpoint.
    #[error("Insufficient permissions: {operation}")]
    InsufficientPermissions {
        /// The endpoint id that was denied.
        operation: String,
    },
}
