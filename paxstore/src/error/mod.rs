//! Layered error types for the fatal failure channel.
//!
//! Validation failures and remote business errors are ordinary data carried
//! by [`ApiResult`](crate::envelope::ApiResult). Everything here is the other
//! channel: failures where no meaningful result exists.
//!
//! - [`TransportError`] - Top-level error returned by every API call
//! - [`ClientError`] - HTTP client and network errors
//! - [`DecodeError`] - Response bodies that cannot be decoded
//! - [`AuthError`] - Rejected credentials without a structured error body
//! - [`ConfigError`] - Client configuration and request template errors

mod auth_error;
mod client_error;
mod config_error;
mod decode_error;
mod transport_error;

pub use auth_error::AuthError;
pub use client_error::ClientError;
pub use config_error::ConfigError;
pub use decode_error::DecodeError;
pub use transport_error::TransportError;
