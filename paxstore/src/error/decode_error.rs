//! Response decoding errors.

use thiserror::Error;

/// Errors while decoding a response body.
///
/// The request reached the server and came back, but the body does not match
/// the shape the endpoint expects.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The body is not valid JSON, or does not fit the expected shape.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The body is JSON but not an object carrying the envelope fields.
    #[error("Unexpected response shape: expected {expected}")]
    UnexpectedShape {
        /// Description of the expected shape.
        expected: &'static str,
    },

    /// Empty response body when content was expected.
    #[error("Empty response body")]
    EmptyBody,
}
