//! Transport-agnostic request construction.
//!
//! [`RequestBuilder`] turns an [`Endpoint`] plus call arguments into a
//! [`RequestDescriptor`]: placeholders substituted, absent query values
//! dropped, and the body already encoded as JSON. Executors only ever see
//! descriptors.

use serde::Serialize;

use crate::endpoint::Endpoint;
use crate::error::ConfigError;
use crate::method::RestMethod;

/// Content type sent with every request body.
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=UTF-8";

/// A fully resolved request, ready for an [`HttpExecutor`](crate::client::HttpExecutor).
///
/// Descriptors are call-scoped values. Every placeholder of the endpoint's
/// template has been substituted by the time one exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    endpoint: Endpoint,
    path: String,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    body: Option<String>,
}

impl RequestDescriptor {
    /// Returns the endpoint this request was built from.
    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Returns the HTTP method.
    pub fn method(&self) -> RestMethod {
        self.endpoint.method()
    }

    /// Returns the unexpanded URL template.
    pub fn template(&self) -> &'static str {
        self.endpoint.template()
    }

    /// Returns the path with every placeholder substituted.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Returns the path parameters in the order they were supplied.
    pub fn path_params(&self) -> &[(&'static str, String)] {
        &self.path_params
    }

    /// Returns the query parameters in the order they were supplied.
    pub fn query(&self) -> &[(&'static str, String)] {
        &self.query
    }

    /// Looks up a single query parameter by name.
    pub fn query_value(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the encoded JSON body, if any.
    pub fn body(&self) -> Option<&str> {
        self.body.as_deref()
    }

    /// Returns the content type of the body, if there is one.
    pub fn content_type(&self) -> Option<&'static str> {
        self.body.as_ref().map(|_| JSON_CONTENT_TYPE)
    }
}

/// Builder for [`RequestDescriptor`].
///
/// ## Examples
///
/// ```rust
/// use paxstore_openapi::{Endpoint, RequestBuilder, RestMethod};
///
/// const GET_ITEM: Endpoint = Endpoint::new("get_item", RestMethod::Get, "/v1/items/{itemId}");
///
/// let request = RequestBuilder::new(GET_ITEM)
///     .path_param("itemId", 42)
///     .query_opt("filter", None::<&str>)
///     .build()
///     .unwrap();
///
/// assert_eq!(request.path(), "/v1/items/42");
/// assert!(request.query().is_empty());
/// ```
#[derive(Debug)]
pub struct RequestBuilder {
    endpoint: Endpoint,
    path_params: Vec<(&'static str, String)>,
    query: Vec<(&'static str, String)>,
    body: Option<String>,
}

impl RequestBuilder {
    /// Starts a request for the given endpoint.
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            path_params: Vec::new(),
            query: Vec::new(),
            body: None,
        }
    }

    /// Supplies the value for a `{name}` placeholder.
    ///
    /// Values are inserted verbatim; path parameters are numeric ids.
    pub fn path_param(mut self, name: &'static str, value: impl ToString) -> Self {
        self.path_params.push((name, value.to_string()));
        self
    }

    /// Adds a query parameter.
    pub fn query(mut self, name: &'static str, value: impl ToString) -> Self {
        self.query.push((name, value.to_string()));
        self
    }

    /// Adds a query parameter only when a value is present.
    ///
    /// `None` leaves the parameter out of the request entirely, so optional
    /// filters never constrain a search.
    pub fn query_opt<V: ToString>(self, name: &'static str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    /// Encodes `body` as the JSON request body.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::BodyEncoding`] if the payload cannot be
    /// serialized.
    pub fn json_body<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, ConfigError> {
        let encoded = serde_json::to_string(body).map_err(ConfigError::BodyEncoding)?;
        self.body = Some(encoded);
        Ok(self)
    }

    /// Substitutes placeholders and produces the descriptor.
    ///
    /// ## Errors
    ///
    /// Returns [`ConfigError::MissingPathParam`] if a placeholder in the
    /// template has no matching path parameter. Templates are constants, so
    /// this is always a programming error.
    pub fn build(self) -> Result<RequestDescriptor, ConfigError> {
        let template = self.endpoint.template();
        let mut path = template.to_string();

        for name in self.endpoint.placeholders() {
            let value = self
                .path_params
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| value.as_str())
                .ok_or(ConfigError::MissingPathParam { name, template })?;
            path = path.replace(&format!("{{{name}}}"), value);
        }

        Ok(RequestDescriptor {
            endpoint: self.endpoint,
            path,
            path_params: self.path_params,
            query: self.query,
            body: self.body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GET_MERCHANT: Endpoint = Endpoint::new(
        "get_merchant",
        RestMethod::Get,
        "/v1/3rdsys/merchants/{merchantId}",
    );
    const SEARCH: Endpoint = Endpoint::new("search", RestMethod::Get, "/v1/3rdsys/merchants");
    const CREATE: Endpoint = Endpoint::new("create", RestMethod::Post, "/v1/3rdsys/merchants");

    #[test]
    fn test_substitutes_placeholder() {
        let request = RequestBuilder::new(GET_MERCHANT)
            .path_param("merchantId", 42_i64)
            .build()
            .unwrap();

        assert_eq!(request.path(), "/v1/3rdsys/merchants/42");
        assert_eq!(request.template(), "/v1/3rdsys/merchants/{merchantId}");
        assert_eq!(request.method(), RestMethod::Get);
        assert_eq!(request.path_params(), &[("merchantId", "42".to_string())]);
    }

    #[test]
    fn test_missing_placeholder_is_config_error() {
        let err = RequestBuilder::new(GET_MERCHANT).build().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::MissingPathParam {
                name: "merchantId",
                ..
            }
        ));
    }

    #[test]
    fn test_absent_query_values_are_omitted() {
        let request = RequestBuilder::new(SEARCH)
            .query("pageNo", 1)
            .query_opt("name", None::<String>)
            .query_opt("status", Some("A"))
            .build()
            .unwrap();

        assert_eq!(
            request.query(),
            &[("pageNo", "1".to_string()), ("status", "A".to_string())]
        );
        assert_eq!(request.query_value("name"), None);
        assert_eq!(request.query_value("status"), Some("A"));
    }

    #[test]
    fn test_json_body_sets_content_type() {
        #[derive(Serialize)]
        struct Payload {
            name: &'static str,
        }

        let request = RequestBuilder::new(CREATE)
            .json_body(&Payload { name: "Shop" })
            .unwrap()
            .build()
            .unwrap();

        assert_eq!(request.body(), Some(r#"{"name":"Shop"}"#));
        assert_eq!(request.content_type(), Some(JSON_CONTENT_TYPE));
    }

    #[test]
    fn test_no_body_no_content_type() {
        let request = RequestBuilder::new(SEARCH).build().unwrap();
        assert_eq!(request.body(), None);
        assert_eq!(request.content_type(), None);
    }
}
