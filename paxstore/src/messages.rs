//! Human-readable messages for validation error keys.
//!
//! Validators refer to failures by a stable key (for example
//! `parameterMerchantIdInvalid`) so resource APIs can choose which wording a
//! check reports. Unknown keys resolve to the key itself.

use std::borrow::Cow;

pub const PARAMETER_PAGE_NO_INVALID: &str = "parameterPageNoInvalid";
pub const PARAMETER_PAGE_SIZE_INVALID: &str = "parameterPageSizeInvalid";
pub const PARAMETER_MERCHANT_ID_INVALID: &str = "parameterMerchantIdInvalid";
pub const MERCHANT_ID_INVALID: &str = "merchantIdInvalid";
pub const MERCHANT_CREATE_REQUEST_IS_NULL: &str = "merchantCreateRequestIsNull";
pub const MERCHANT_UPDATE_REQUEST_IS_NULL: &str = "merchantUpdateRequestIsNull";

/// Resolves an error key to its message.
///
/// ## Examples
///
/// ```rust
/// use paxstore_openapi::messages;
///
/// assert_eq!(messages::lookup("merchantIdInvalid"), "Merchant id is invalid");
/// assert_eq!(messages::lookup("someUnknownKey"), "someUnknownKey");
/// ```
pub fn lookup(key: &str) -> Cow<'static, str> {
    let message = match key {
        PARAMETER_PAGE_NO_INVALID => "Parameter pageNo must be greater than 0",
        PARAMETER_PAGE_SIZE_INVALID => "Parameter pageSize is out of range",
        PARAMETER_MERCHANT_ID_INVALID => "Parameter merchantId is invalid",
        MERCHANT_ID_INVALID => "Merchant id is invalid",
        MERCHANT_CREATE_REQUEST_IS_NULL => "Parameter merchantCreateRequest cannot be null",
        MERCHANT_UPDATE_REQUEST_IS_NULL => "Parameter merchantUpdateRequest cannot be null",
        other => return Cow::Owned(other.to_string()),
    };
    Cow::Borrowed(message)
}
