//! The validate, build, execute, decode pipeline shared by resource APIs.

use tracing::{debug, warn};

use crate::client::executor::HttpExecutor;
use crate::endpoint::Endpoint;
use crate::envelope::ApiResult;
use crate::error::{AuthError, ClientError, ConfigError, TransportError};
use crate::request::{RequestBuilder, RequestDescriptor};
use crate::response::{ResponseFormat, business_error};

/// Shared request pipeline.
///
/// Resource APIs hold a `BaseApi` and route every endpoint method through
/// [`call`](Self::call). The pipeline keeps no state between calls.
#[derive(Debug)]
pub struct BaseApi<E> {
    executor: E,
    max_page_size: u32,
}

impl<E: HttpExecutor> BaseApi<E> {
    /// Creates a pipeline around an executor.
    pub fn new(executor: E, max_page_size: u32) -> Self {
        Self {
            executor,
            max_page_size,
        }
    }

    /// Returns the executor.
    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Returns the largest page size searches accept.
    pub fn max_page_size(&self) -> u32 {
        self.max_page_size
    }

    /// Runs one endpoint call.
    ///
    /// Non-empty `validation_errors` end the call with
    /// [`ApiResult::ValidationFailed`] before `build` runs or anything is
    /// sent. Otherwise `build` fills in the request, which is executed and
    /// decoded with `F`.
    ///
    /// ## Errors
    ///
    /// Returns [`TransportError`] when the request cannot be built or sent,
    /// or when the response cannot be decoded.
    pub async fn call<F, B>(
        &self,
        endpoint: Endpoint,
        validation_errors: Vec<String>,
        build: B,
    ) -> Result<ApiResult<F::Output>, TransportError>
    where
        F: ResponseFormat,
        B: FnOnce(RequestBuilder) -> Result<RequestBuilder, ConfigError>,
    {
        if let Some(failed) = ApiResult::from_validation(validation_errors) {
            debug!(
                endpoint = endpoint.id(),
                error_count = failed.validation_errors().len(),
                "Validation failed, request not sent"
            );
            return Ok(failed);
        }

        let request = build(RequestBuilder::new(endpoint))?.build()?;
        self.send::<F>(&request).await
    }

    /// Executes a built request and decodes the response with `F`.
    ///
    /// ## Errors
    ///
    /// Returns [`TransportError`] for transport failures, undecodable
    /// bodies, and error statuses without a business error body.
    pub async fn send<F: ResponseFormat>(
        &self,
        request: &RequestDescriptor,
    ) -> Result<ApiResult<F::Output>, TransportError> {
        let endpoint = request.endpoint().id();

        let outcome = match self.executor.execute(request).await {
            Ok(body) => F::parse(&body).map_err(TransportError::from),
            Err(TransportError::Client(ClientError::HttpStatus { status, message })) => {
                interpret_error_status(request, status, message)
            }
            Err(other) => Err(other),
        };

        let result = outcome.inspect_err(|error| {
            warn!(
                endpoint,
                shape = F::shape(),
                retryable = error.is_retryable(),
                error = %error,
                "Request failed"
            );
        })?;

        match &result {
            ApiResult::ApiError { code, message } => {
                warn!(endpoint, code, message = %message, "Remote business error");
            }
            _ => debug!(endpoint, "Request completed"),
        }

        Ok(result)
    }
}

/// Turns a non-2xx response into an envelope when its body is a business
/// error, and into the matching transport error otherwise.
fn interpret_error_status<T>(
    request: &RequestDescriptor,
    status: u16,
    body: String,
) -> Result<ApiResult<T>, TransportError> {
    if let Some(result) = business_error(&body) {
        return Ok(result);
    }

    match status {
        401 => Err(AuthError::AuthenticationFailed { message: body }.into()),
        403 => Err(AuthError::InsufficientPermissions {
            operation: request.endpoint().id().to_string(),
        }
        .into()),
        _ => Err(ClientError::HttpStatus {
            status,
            message: body,
        }
        .into()),
    }
}
