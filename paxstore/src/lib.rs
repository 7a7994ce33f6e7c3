//! Typed client for the PAXSTORE third-party system merchant API.
//!
//! The `paxstore_openapi` crate lets an application search, fetch, create,
//! update, activate, disable and delete merchants without hand-building
//! signed HTTP requests or JSON payloads.
//!
//! ## Features
//!
//! - **Pre-flight validation**: invalid arguments never reach the network;
//!   every violated rule is reported
//! - **Typed envelopes**: [`ApiResult`] separates validation failures, remote
//!   business errors and successes
//! - **Separate fatal channel**: network and decode failures are
//!   [`TransportError`], never an envelope
//! - **Signed transport**: [`ReqwestExecutor`] adds `sysKey`, `timestamp` and
//!   the HMAC-MD5 `signature` header to every request
//! - **Pluggable executor**: any [`HttpExecutor`] can stand in for the network
//!
//! ## Example
//!
//! ```rust,ignore
//! use paxstore_openapi::{ApiResult, ClientConfig, MerchantApi};
//!
//! let config = ClientConfig::new("https://api.whatspos.com/p-market-api", "KEY", "SECRET")?;
//! let merchants = MerchantApi::new(&config)?;
//!
//! if let ApiResult::Success { value } = merchants.get_merchant(42).await? {
//!     println!("{}", value.name);
//! }
//! ```

pub mod client;
pub mod config;
mod de;
pub mod endpoint;
pub mod envelope;
pub mod error;
pub mod merchant;
pub mod messages;
pub mod method;
pub mod request;
pub mod response;
pub mod signing;
pub mod validation;

// Re-exports for convenience
pub use client::{BaseApi, HttpExecutor, ReqwestExecutor};
pub use config::{ClientConfig, DEFAULT_MAX_PAGE_SIZE};
pub use endpoint::Endpoint;
pub use envelope::{ApiResult, Page, VALIDATION_FAILED_CODE};
pub use error::{AuthError, ClientError, ConfigError, DecodeError, TransportError};
pub use merchant::{
    Merchant, MerchantApi, MerchantCreateRequest, MerchantSearchOrderBy, MerchantStatus,
    MerchantUpdateRequest,
};
pub use method::RestMethod;
pub use request::{RequestBuilder, RequestDescriptor};
pub use response::ResponseFormat;
