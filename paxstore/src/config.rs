//! Client configuration.
//!
//! A [`ClientConfig`] is built once and handed to a resource API. It is never
//! shared through globals and never changes after the client is built.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Default upper bound for the `pageSize` of a search.
pub const DEFAULT_MAX_PAGE_SIZE: u32 = 1000;

/// Environment variable holding the API base URL.
pub const ENV_BASE_URL: &str = "PAXSTORE_BASE_URL";
/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "PAXSTORE_API_KEY";
/// Environment variable holding the API secret.
pub const ENV_API_SECRET: &str = "PAXSTORE_API_SECRET";
/// Optional environment variable overriding the timeout, in seconds.
pub const ENV_TIMEOUT_SECS: &str = "PAXSTORE_TIMEOUT_SECS";

/// Connection settings and credentials for the third-party system API.
///
/// ## Examples
///
/// ```rust
/// use std::time::Duration;
/// use paxstore_openapi::ClientConfig;
///
/// let config = ClientConfig::new("https://api.whatspos.com/p-market-api", "KEY", "SECRET")
///     .unwrap()
///     .with_timeout(Duration::from_secs(10))
///     .with_max_page_size(200);
///
/// assert_eq!(config.max_page_size(), 200);
/// assert!(!format!("{config:?}").contains("SECRET"));
/// ```
#[derive(Clone)]
pub struct ClientConfig {
    base_url: Url,
    api_key: String,
    api_secret: String,
    timeout: Duration,
    max_page_size: u32,
}

impl ClientConfig {
    /// Creates a configuration from a base URL and credentials.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::InvalidUrl`] if `base_url` does not parse, or
    /// [`ConfigError::MissingField`] if the key or secret is empty.
    pub fn new(
        base_url: &str,
        api_key: impl Into<String>,
        api_secret: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        let api_key = api_key.into();
        let api_secret = api_secret.into();

        if api_key.trim().is_empty() {
            return Err(ConfigError::missing_field("api_key"));
        }
        if api_secret.trim().is_empty() {
            return Err(ConfigError::missing_field("api_secret"));
        }

        Ok(Self {
            base_url: Url::parse(base_url)?,
            api_key,
            api_secret,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
        })
    }

    /// Reads the configuration from `PAXSTORE_*` environment variables.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingField`] naming the first unset variable,
    /// [`ConfigError::InvalidEnvValue`] for an unparsable timeout, or any
    /// error from [`ClientConfig::new`].
    pub fn from_env() -> Result<Self, ConfigError> {
        let base_url = read_env(ENV_BASE_URL)?;
        let api_key = read_env(ENV_API_KEY)?;
        let api_secret = read_env(ENV_API_SECRET)?;
        let config = Self::new(&base_url, api_key, api_secret)?;

        match std::env::var(ENV_TIMEOUT_SECS) {
            Ok(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidEnvValue {
                    variable: ENV_TIMEOUT_SECS,
                    value: raw.clone(),
                })?;
                Ok(config.with_timeout(Duration::from_secs(secs)))
            }
            Err(_) => Ok(config),
        }
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the largest page size a search may request.
    pub fn with_max_page_size(mut self, max_page_size: u32) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the API key.
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the API secret used to sign requests.
    pub fn api_secret(&self) -> &str {
        &self.api_secret
    }

    /// Returns the request timeout.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the largest accepted page size.
    pub fn max_page_size(&self) -> u32 {
        self.max_page_size
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key)
            .field("api_secret", &"<redacted>")
            .field("timeout", &self.timeout)
            .field("max_page_size", &self.max_page_size)
            .finish()
    }
}

fn read_env(variable: &'static str) -> Result<String, ConfigError> {
    std::env::var(variable).map_err(|_| ConfigError::missing_field(variable))
}
