//! Merchant management API.
//!
//! [`MerchantApi`] exposes the merchant endpoints of the third-party system
//! API. Each method checks its arguments, builds the request, sends it
//! through the shared [`BaseApi`] pipeline, and returns an [`ApiResult`].
//!
//! ## Examples
//!
//! ```rust,ignore
//! use paxstore_openapi::{ApiResult, ClientConfig, MerchantApi};
//! use paxstore_openapi::merchant::{MerchantSearchOrderBy, MerchantStatus};
//!
//! let merchants = MerchantApi::new(&ClientConfig::from_env()?)?;
//!
//! match merchants
//!     .search_merchants(1, 20, Some(MerchantSearchOrderBy::Name), None, MerchantStatus::Active)
//!     .await?
//! {
//!     ApiResult::Success { value } => println!("{} merchants", value.total_count),
//!     ApiResult::ApiError { code, message } => eprintln!("{code}: {message}"),
//!     ApiResult::ValidationFailed { errors } => eprintln!("{errors:?}"),
//! }
//! ```

mod types;

pub use types::{
    Merchant, MerchantCategory, MerchantCreateRequest, MerchantSearchOrderBy, MerchantStatus,
    MerchantUpdateRequest, SimpleReseller,
};

use tracing::instrument;

use crate::client::{BaseApi, HttpExecutor, ReqwestExecutor};
use crate::config::{ClientConfig, DEFAULT_MAX_PAGE_SIZE};
use crate::endpoint::Endpoint;
use crate::envelope::{ApiResult, Page};
use crate::error::TransportError;
use crate::messages;
use crate::method::RestMethod;
use crate::response::{EmptyFormat, EntityFormat, PageFormat};
use crate::validation;

const SEARCH_MERCHANTS: Endpoint =
    Endpoint::new("search_merchants", RestMethod::Get, "/v1/3rdsys/merchants");
const GET_MERCHANT: Endpoint = Endpoint::new(
    "get_merchant",
    RestMethod::Get,
    "/v1/3rdsys/merchants/{merchantId}",
);
const CREATE_MERCHANT: Endpoint =
    Endpoint::new("create_merchant", RestMethod::Post, "/v1/3rdsys/merchants");
const UPDATE_MERCHANT: Endpoint = Endpoint::new(
    "update_merchant",
    RestMethod::Put,
    "/v1/3rdsys/merchants/{merchantId}",
);
const ACTIVATE_MERCHANT: Endpoint = Endpoint::new(
    "activate_merchant",
    RestMethod::Put,
    "/v1/3rdsys/merchants/{merchantId}/active",
);
const DISABLE_MERCHANT: Endpoint = Endpoint::new(
    "disable_merchant",
    RestMethod::Put,
    "/v1/3rdsys/merchants/{merchantId}/disable",
);
const DELETE_MERCHANT: Endpoint = Endpoint::new(
    "delete_merchant",
    RestMethod::Delete,
    "/v1/3rdsys/merchants/{merchantId}",
);

const MERCHANT_ID: &str = "merchantId";
const PAGE_NO_PARAM: &str = "pageNo";
const PAGE_SIZE_PARAM: &str = "pageSize";
const ORDER_BY_PARAM: &str = "orderBy";
const NAME_PARAM: &str = "name";
const STATUS_PARAM: &str = "status";

/// Client for the merchant endpoints.
///
/// Holds no per-call state; one instance can serve concurrent callers as long
/// as its executor can.
#[derive(Debug)]
pub struct MerchantApi<E = ReqwestExecutor> {
    base: BaseApi<E>,
}

impl MerchantApi<ReqwestExecutor> {
    /// Creates a client that signs and sends requests with `reqwest`.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let executor = ReqwestExecutor::new(config)?;
        Ok(Self::with_max_page_size(executor, config.max_page_size()))
    }
}

impl<E: HttpExecutor> MerchantApi<E> {
    /// Creates a client over a custom executor with the default page size
    /// limit.
    pub fn with_executor(executor: E) -> Self {
        Self::with_max_page_size(executor, DEFAULT_MAX_PAGE_SIZE)
    }

    /// Creates a client over a custom executor with an explicit page size
    /// limit.
    pub fn with_max_page_size(executor: E, max_page_size: u32) -> Self {
        Self {
            base: BaseApi::new(executor, max_page_size),
        }
    }

    /// Returns the executor.
    pub fn executor(&self) -> &E {
        self.base.executor()
    }

    /// Searches merchants one page at a time.
    ///
    /// `order_by` of `None` sorts by name. A `name` of `None` and
    /// [`MerchantStatus::All`] apply no filter, and the matching query
    /// parameters are left out of the request.
    ///
    /// ## Errors
    ///
    /// Returns [`TransportError`] if the request fails or the response
    /// cannot be decoded.
    #[instrument(skip(self, name))]
    pub async fn search_merchants(
        &self,
        page_no: i32,
        page_size: i32,
        order_by: Option<MerchantSearchOrderBy>,
        name: Option<&str>,
        status: MerchantStatus,
    ) -> Result<ApiResult<Page<Merchant>>, TransportError> {
        let errors = validation::validate_page(page_no, page_size, self.base.max_page_size());
        let order_by = order_by.unwrap_or_default();

        self.base
            .call::<PageFormat<Merchant>, _>(SEARCH_MERCHANTS, errors, |builder| {
                Ok(builder
                    .query(PAGE_NO_PARAM, page_no)
                    .query(PAGE_SIZE_PARAM, page_size)
                    .query(ORDER_BY_PARAM, order_by.wire_name())
                    .query_opt(NAME_PARAM, name)
                    .query_opt(STATUS_PARAM, status.wire_code()))
            })
            .await
    }

    /// Fetches one merchant.
    ///
    /// ## Errors
    ///
    /// Returns [`TransportError`] if the request fails or the response
    /// cannot be decoded.
    #[instrument(skip(self))]
    pub async fn get_merchant(&self, merchant_id: i64) -> Result<ApiResult<Merchant>, TransportError> {
        let errors = validation::validate_id(merchant_id, messages::PARAMETER_MERCHANT_ID_INVALID);
        self.base
            .call::<EntityFormat<Merchant>, _>(GET_MERCHANT, errors, |builder| {
                Ok(builder.path_param(MERCHANT_ID, merchant_id))
            })
            .await
    }

    /// Creates a merchant.
    ///
    /// An absent request is reported as a validation failure rather than
    /// sent.
    ///
    /// ## Errors
    ///
    /// Returns [`TransportError`] if the request fails or the response
    /// cannot be decoded.
    #[instrument(skip_all)]
    pub async fn create_merchant(
        &self,
        request: Option<&MerchantCreateRequest>,
    ) -> Result<ApiResult<Merchant>, TransportError> {
        let errors = validation::validate_create(request, messages::MERCHANT_CREATE_REQUEST_IS_NULL);
        self.base
            .call::<EntityFormat<Merchant>, _>(CREATE_MERCHANT, errors, |builder| {
                builder.json_body(&request)
            })
            .await
    }

    /// Replaces a merchant's details.
    ///
    /// The id and the request are both checked, and every violation is
    /// reported.
    ///
    /// ## Errors
    ///
    /// Returns [`TransportError`] if the request fails or the response
    /// cannot be decoded.
    #[instrument(skip(self, request))]
    pub async fn update_merchant(
        &self,
        merchant_id: i64,
        request: Option<&MerchantUpdateRequest>,
    ) -> Result<ApiResult<Merchant>, TransportError> {
        let errors = validation::validate_update(
            merchant_id,
            request,
            messages::MERCHANT_ID_INVALID,
            messages::MERCHANT_UPDATE_REQUEST_IS_NULL,
        );
        self.base
            .call::<EntityFormat<Merchant>, _>(UPDATE_MERCHANT, errors, |builder| {
                builder.path_param(MERCHANT_ID, merchant_id).json_body(&request)
            })
            .await
    }

    /// Activates a merchant.
    ///
    /// ## Errors
    ///
    /// Returns [`TransportError`] if the request fails or the response
    /// cannot be decoded.
    #[instrument(skip(self))]
    pub async fn activate_merchant(&self, merchant_id: i64) -> Result<ApiResult<()>, TransportError> {
        self.acknowledge(ACTIVATE_MERCHANT, merchant_id).await
    }

    /// Disables a merchant.
    ///
    /// ## Errors
    ///
    /// Returns [`TransportError`] if the request fails or the response
    /// cannot be decoded.
    #[instrument(skip(self))]
    pub async fn disable_merchant(&self, merchant_id: i64) -> Result<ApiResult<()>, TransportError> {
        self.acknowledge(DISABLE_MERCHANT, merchant_id).await
    }

    /// Deletes a merchant.
    ///
    /// ## Errors
    ///
    /// Returns [`TransportError`] if the request fails or the response
    /// cannot be decoded.
    #[instrument(skip(self))]
    pub async fn delete_merchant(&self, merchant_id: i64) -> Result<ApiResult<()>, TransportError> {
        self.acknowledge(DELETE_MERCHANT, merchant_id).await
    }

    /// Id-only call whose response carries no payload.
    async fn acknowledge(
        &self,
        endpoint: Endpoint,
        merchant_id: i64,
    ) -> Result<ApiResult<()>, TransportError> {
        let errors = validation::validate_id(merchant_id, messages::PARAMETER_MERCHANT_ID_INVALID);
        self.base
            .call::<EmptyFormat, _>(endpoint, errors, |builder| {
                Ok(builder.path_param(MERCHANT_ID, merchant_id))
            })
            .await
    }
}
