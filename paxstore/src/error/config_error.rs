//! Client configuration and request template errors.

use thiserror::Error;

/// Errors in client configuration or request construction.
///
/// These indicate programmer errors or a broken environment, never bad
/// caller input: caller input is checked by [`validation`](crate::validation).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// URL parsing failed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A required configuration field is missing or empty.
    #[error("Missing required field: {field}")]
    MissingField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// An environment variable holds a value that cannot be used.
    #[error("Invalid value for {variable}: {value}")]
    InvalidEnvValue {
        /// The environment variable name.
        variable: &'static str,
        /// The rejected value.
        value: String,
    },

    /// A URL template placeholder has no matching path parameter.
    #[error("Missing path parameter `{name}` for template {template}")]
    MissingPathParam {
        /// The placeholder name.
        name: &'static str,
        /// The template being expanded.
        template: &'static str,
    },

    /// The API secret was rejected as an HMAC key.
    #[error("Invalid signing key: {0}")]
    SigningKey(#[from] hmac::digest::InvalidLength),

    /// A request body could not be serialized.
    #[error("Failed to encode request body: {0}")]
    BodyEncoding(#[source] serde_json::Error),
}

impl ConfigError {
    /// Creates a missing field error.
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }
}
