//! Request execution with tracing instrumentation.
//!
//! This module provides the [`HttpExecutor`] seam and [`ReqwestExecutor`],
//! its production implementation, which signs and sends a
//! [`RequestDescriptor`] and returns the raw response text.

use std::future::Future;
use std::sync::Arc;

use reqwest::header::CONTENT_TYPE;
use tracing::{Span, instrument};
use url::Url;

use crate::config::ClientConfig;
use crate::error::{ClientError, ConfigError, TransportError};
use crate::request::{JSON_CONTENT_TYPE, RequestDescriptor};
use crate::signing::{self, SIGNATURE_HEADER, SYS_KEY_PARAM, TIMESTAMP_PARAM};

/// Sends a request descriptor and returns the raw response text.
///
/// Implementations own transport concerns: connection handling, timeouts,
/// TLS and authentication. A 2xx response yields `Ok(body)`, even when the
/// body is empty. A non-2xx response must be reported as
/// [`ClientError::HttpStatus`] carrying the body, so the caller can still
/// read a structured business error out of it. At most one attempt is made
/// per call.
///
/// ## Implementation Requirements
///
/// Implementations must be `Send + Sync`; one executor serves every call a
/// resource API makes, possibly from several tasks at once.
///
/// ## Examples
///
/// ```rust,ignore
/// use paxstore_openapi::{HttpExecutor, RequestDescriptor, TransportError};
///
/// struct Canned(&'static str);
///
/// impl HttpExecutor for Canned {
///     async fn execute(&self, _request: &RequestDescriptor) -> Result<String, TransportError> {
///         Ok(self.0.to_string())
///     }
/// }
/// ```
pub trait HttpExecutor: Send + Sync {
    /// Sends one request.
    ///
    /// ## Errors
    ///
    /// Returns [`TransportError`] for network failures and non-2xx statuses.
    fn execute(
        &self,
        request: &RequestDescriptor,
    ) -> impl Future<Output = Result<String, TransportError>> + Send;
}

impl<E: HttpExecutor> HttpExecutor for Arc<E> {
    fn execute(
        &self,
        request: &RequestDescriptor,
    ) -> impl Future<Output = Result<String, TransportError>> + Send {
        (**self).execute(request)
    }
}

/// Signing HTTP executor built on `reqwest`.
///
/// The underlying `reqwest::Client` pools connections, so one executor
/// should be reused for the lifetime of the application.
///
/// ## Examples
///
/// ```rust,ignore
/// use paxstore_openapi::{ClientConfig, ReqwestExecutor};
///
/// let config = ClientConfig::new("https://api.whatspos.com/p-market-api", "KEY", "SECRET")?;
/// let executor = ReqwestExecutor::new(&config)?;
/// ```
#[derive(Debug)]
pub struct ReqwestExecutor {
    client: reqwest::Client,
    base_url: Url,
    api_key: String,
    api_secret: String,
    timeout_ms: u64,
}

impl ReqwestExecutor {
    /// Creates an executor from the client configuration.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .pool_max_idle_per_host(10)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            api_key: config.api_key().to_string(),
            api_secret: config.api_secret().to_string(),
            timeout_ms: u64::try_from(config.timeout().as_millis()).unwrap_or(u64::MAX),
        })
    }

    /// Returns the base URL requests are sent to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Appends a request path to the base URL, keeping any base path prefix.
    fn endpoint_url(&self, path: &str) -> Result<Url, ConfigError> {
        let base = self.base_url.as_str().trim_end_matches('/');
        Ok(Url::parse(&format!("{base}{path}"))?)
    }

    fn classify(&self, error: reqwest::Error) -> ClientError {
        if error.is_timeout() {
            ClientError::Timeout {
                duration_ms: self.timeout_ms,
            }
        } else if error.is_connect() {
            ClientError::Connection(error.to_string())
        } else {
            ClientError::Request(error)
        }
    }
}

impl HttpExecutor for ReqwestExecutor {
    /// Signs and sends the request.
    ///
    /// The endpoint's own query parameters come first, followed by `sysKey`
    /// and `timestamp`; the signature covers that exact query string plus
    /// the body.
    #[instrument(
        name = "api_request",
        skip(self, request),
        fields(
            api.endpoint = request.endpoint().id(),
            http.method = tracing::field::Empty,
            http.url = tracing::field::Empty,
            http.status_code = tracing::field::Empty,
            otel.kind = "client",
            otel.status_code = tracing::field::Empty,
        )
    )]
    async fn execute(&self, request: &RequestDescriptor) -> Result<String, TransportError> {
        Span::current().record("http.method", request.method().to_string().as_str());

        let timestamp = chrono::Utc::now().timestamp_millis().to_string();
        let query = signing::encode_query(
            request
                .query()
                .iter()
                .map(|(name, value)| (*name, value.as_str()))
                .chain([
                    (SYS_KEY_PARAM, self.api_key.as_str()),
                    (TIMESTAMP_PARAM, timestamp.as_str()),
                ]),
        );
        let signature = signing::sign(&query, request.body(), &self.api_secret)?;

        let mut url = self.endpoint_url(request.path())?;
        // Path only; the query carries the API key
        Span::current().record("http.url", url.as_str());
        url.set_query(Some(&query));

        let mut builder = self
            .client
            .request(request.method().to_reqwest(), url)
            .header(SIGNATURE_HEADER, signature);

        if let Some(body) = request.body() {
            builder = builder
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(body.to_string());
        }

        let response = builder.send().await.map_err(|e| self.classify(e))?;

        let status = response.status();
        Span::current().record("http.status_code", status.as_u16());

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| status.to_string());

            let otel_status = if status.is_server_error() {
                "ERROR"
            } else {
                "UNSET"
            };
            Span::current().record("otel.status_code", otel_status);

            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        Span::current().record("otel.status_code", "OK");

        let body = response.text().await.map_err(ClientError::Request)?;
        Ok(body)
    }
}
