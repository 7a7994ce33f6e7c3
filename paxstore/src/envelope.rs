//! The typed result envelope returned by every API call.

use serde::{Deserialize, Serialize};

use crate::de::null_as_default;

/// Business code reported for a call rejected by pre-flight validation.
pub const VALIDATION_FAILED_CODE: i32 = 997;

/// Outcome of an API call that produced meaningful data.
///
/// Exactly one variant exists per call:
///
/// - [`ValidationFailed`](Self::ValidationFailed): arguments were rejected
///   locally and no request was sent.
/// - [`Success`](Self::Success): the request was sent and the response decoded.
/// - [`ApiError`](Self::ApiError): the request was sent and the server
///   reported a business failure such as a missing merchant.
///
/// Transport and decode failures are not envelopes; they are returned as
/// [`TransportError`](crate::TransportError).
///
/// ## Examples
///
/// ```rust,ignore
/// match api.get_merchant(42).await? {
///     ApiResult::Success { value } => println!("{}", value.name),
///     ApiResult::ApiError { code, message } => eprintln!("{code}: {message}"),
///     ApiResult::ValidationFailed { errors } => eprintln!("{errors:?}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiResult<T> {
    /// Caller arguments failed pre-flight checks. `errors` is never empty.
    ValidationFailed {
        /// One message per violated rule.
        errors: Vec<String>,
    },
    /// The call succeeded.
    Success {
        /// The decoded payload.
        value: T,
    },
    /// The server reported a business error.
    ApiError {
        /// The server's business code.
        code: i32,
        /// The server's message, empty if none was sent.
        message: String,
    },
}

impl<T> ApiResult<T> {
    /// Wraps validation messages, or returns `None` when there are none.
    ///
    /// This is the only constructor for `ValidationFailed`, which keeps the
    /// error list non-empty.
    pub fn from_validation(errors: Vec<String>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Self::ValidationFailed { errors })
        }
    }

    /// Returns `true` for [`Success`](Self::Success).
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    /// Returns the business code: 0 on success, the server's code for an API
    /// error, [`VALIDATION_FAILED_CODE`] for a validation failure.
    pub fn business_code(&self) -> i32 {
        match self {
            Self::ValidationFailed { .. } => VALIDATION_FAILED_CODE,
            Self::Success { .. } => 0,
            Self::ApiError { code, .. } => *code,
        }
    }

    /// Returns the validation messages, empty unless validation failed.
    pub fn validation_errors(&self) -> &[String] {
        match self {
            Self::ValidationFailed { errors } => errors,
            _ => &[],
        }
    }

    /// Converts into the success value, discarding failure details.
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success { value } => Some(value),
            _ => None,
        }
    }

    /// Maps the success value, leaving failures untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResult<U> {
        match self {
            Self::ValidationFailed { errors } => ApiResult::ValidationFailed { errors },
            Self::Success { value } => ApiResult::Success { value: f(value) },
            Self::ApiError { code, message } => ApiResult::ApiError { code, message },
        }
    }
}

/// One page of a paged search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", bound(deserialize = "T: Deserialize<'de>"))]
pub struct Page<T> {
    /// The 1-based page number.
    #[serde(default, deserialize_with = "null_as_default")]
    pub page_no: i32,
    /// The page size the server applied.
    #[serde(default, deserialize_with = "null_as_default")]
    pub limit: i32,
    /// Total number of matching records across all pages.
    #[serde(default, deserialize_with = "null_as_default")]
    pub total_count: i64,
    /// Whether another page follows.
    #[serde(default, deserialize_with = "null_as_default")]
    pub has_next: bool,
    /// The records on this page.
    #[serde(rename = "dataSet", default, deserialize_with = "null_as_default")]
    pub items: Vec<T>,
}
