//! Response format trait and the three envelope shapes.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::envelope::{ApiResult, Page};
use crate::error::DecodeError;

/// Trait for response decoding strategies.
///
/// A format encodes both the expected wire shape and the output type, so an
/// endpoint's return type is fixed at compile time.
///
/// ## Examples
///
/// ```rust
/// use paxstore_openapi::response::{EntityFormat, ResponseFormat};
/// use paxstore_openapi::ApiResult;
///
/// let result = EntityFormat::<u32>::parse(r#"{"businessCode":0,"data":7}"#).unwrap();
/// assert_eq!(result, ApiResult::Success { value: 7 });
/// ```
pub trait ResponseFormat: Send + Sync {
    /// The payload type carried by a successful result.
    type Output: Send + Sync;

    /// Decodes a response body.
    ///
    /// ## Errors
    ///
    /// Returns [`DecodeError`] if the body is not a JSON envelope or the
    /// success payload does not fit [`Self::Output`].
    fn parse(body: &str) -> Result<ApiResult<Self::Output>, DecodeError>;

    /// Describes the expected shape, for diagnostics.
    fn shape() -> &'static str;
}

/// Single-entity envelope: `{ "businessCode": 0, "data": { ... } }`.
#[derive(Debug, Clone, Copy)]
pub struct EntityFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned + Send + Sync> ResponseFormat for EntityFormat<T> {
    type Output = T;

    fn parse(body: &str) -> Result<ApiResult<T>, DecodeError> {
        let mut fields = match read_status(body, Self::shape())? {
            Status::Ok(fields) => fields,
            Status::Failed { code, message } => return Ok(ApiResult::ApiError { code, message }),
        };

        match fields.remove("data") {
            None | Some(Value::Null) => Err(DecodeError::UnexpectedShape {
                expected: Self::shape(),
            }),
            Some(data) => Ok(ApiResult::Success {
                value: serde_json::from_value(data)?,
            }),
        }
    }

    fn shape() -> &'static str {
        "single-entity envelope"
    }
}

/// Paged-list envelope carrying `pageNo`, `limit`, `totalCount`, `hasNext`
/// and `dataSet` beside the status marker.
#[derive(Debug, Clone, Copy)]
pub struct PageFormat<T>(PhantomData<T>);

impl<T: DeserializeOwned + Send + Sync> ResponseFormat for PageFormat<T> {
    type Output = Page<T>;

    fn parse(body: &str) -> Result<ApiResult<Page<T>>, DecodeError> {
        match read_status(body, Self::shape())? {
            Status::Ok(fields) => Ok(ApiResult::Success {
                value: serde_json::from_value(Value::Object(fields))?,
            }),
            Status::Failed { code, message } => Ok(ApiResult::ApiError { code, message }),
        }
    }

    fn shape() -> &'static str {
        "paged-list envelope"
    }
}

/// Acknowledgement envelope with no payload.
///
/// An empty body counts as success; the server answers state transitions
/// with `204 No Content`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyFormat;

impl ResponseFormat for EmptyFormat {
    type Output = ();

    fn parse(body: &str) -> Result<ApiResult<()>, DecodeError> {
        if body.trim().is_empty() {
            return Ok(ApiResult::Success { value: () });
        }

        match read_status(body, Self::shape())? {
            Status::Ok(_) => Ok(ApiResult::Success { value: () }),
            Status::Failed { code, message } => Ok(ApiResult::ApiError { code, message }),
        }
    }

    fn shape() -> &'static str {
        "empty envelope"
    }
}

/// Interprets the body of a non-success HTTP response.
///
/// Returns the `ApiError` envelope if the body is a JSON envelope with a
/// non-zero business code, and `None` for anything else.
pub(crate) fn business_error<T>(body: &str) -> Option<ApiResult<T>> {
    match read_status(body, "business error envelope") {
        Ok(Status::Failed { code, message }) => Some(ApiResult::ApiError { code, message }),
        _ => None,
    }
}

enum Status {
    Ok(Map<String, Value>),
    Failed { code: i32, message: String },
}

/// Reads the shared status marker. A missing or null `businessCode` is success.
fn read_status(body: &str, expected: &'static str) -> Result<Status, DecodeError> {
    if body.trim().is_empty() {
        return Err(DecodeError::EmptyBody);
    }

    let Value::Object(fields) = serde_json::from_str::<Value>(body)? else {
        return Err(DecodeError::UnexpectedShape { expected });
    };

    let code = match fields.get("businessCode") {
        None | Some(Value::Null) => 0,
        Some(value) => value
            .as_i64()
            .and_then(|code| i32::try_from(code).ok())
            .ok_or(DecodeError::UnexpectedShape { expected })?,
    };

    if code == 0 {
        return Ok(Status::Ok(fields));
    }

    let message = fields
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();
    Ok(Status::Failed { code, message })
}
