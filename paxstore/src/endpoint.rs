//! Endpoint definitions.
//!
//! An [`Endpoint`] pairs a stable identifier with an HTTP method and a URL
//! template. Templates may contain `{name}` placeholders that are filled in
//! by [`RequestBuilder`](crate::request::RequestBuilder) at call time.

use crate::method::RestMethod;

/// A REST endpoint of the third-party system API.
///
/// Endpoints are compile-time constants; each resource API declares the ones
/// it calls.
///
/// ## Examples
///
/// ```rust
/// use paxstore_openapi::{Endpoint, RestMethod};
///
/// const GET_THING: Endpoint = Endpoint::new("get_thing", RestMethod::Get, "/v1/things/{thingId}");
///
/// assert_eq!(GET_THING.placeholders(), vec!["thingId"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    id: &'static str,
    method: RestMethod,
    template: &'static str,
}

impl Endpoint {
    /// Creates a new endpoint definition.
    pub const fn new(id: &'static str, method: RestMethod, template: &'static str) -> Self {
        Self {
            id,
            method,
            template,
        }
    }

    /// Returns the endpoint's identifier, used in logs and error messages.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Returns the HTTP method for this endpoint.
    pub fn method(&self) -> RestMethod {
        self.method
    }

    /// Returns the URL template, placeholders included.
    pub fn template(&self) -> &'static str {
        self.template
    }

    /// Extracts placeholder names from the template.
    ///
    /// Returns names in the order they appear. An unterminated `{` ends the
    /// scan.
    pub fn placeholders(&self) -> Vec<&'static str> {
        let mut names = Vec::new();
        let mut rest = self.template;

        while let Some(open) = rest.find('{') {
            let after = &rest[open + 1..];
            let Some(close) = after.find('}') else {
                break;
            };
            let name = &after[..close];
            if !name.is_empty() {
                names.push(name);
            }
            rest = &after[close + 1..];
        }

        names
    }
}
