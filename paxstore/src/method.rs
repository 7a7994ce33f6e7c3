//! HTTP method types for the PAXSTORE REST endpoints.

use strum::{Display, EnumIter, EnumString};

/// HTTP methods used by the third-party system endpoints.
///
/// ## Examples
///
/// ```rust
/// use paxstore_openapi::RestMethod;
///
/// let parsed: RestMethod = "DELETE".parse().unwrap();
/// assert_eq!(parsed, RestMethod::Delete);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum RestMethod {
    /// HTTP GET - Retrieve a resource or a page of resources.
    Get,
    /// HTTP POST - Create a resource.
    Post,
    /// HTTP PUT - Replace a resource or trigger a state transition.
    Put,
    /// HTTP DELETE - Remove a resource.
    Delete,
}

impl RestMethod {
    /// Converts to the equivalent `reqwest::Method`.
    pub fn to_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl From<RestMethod> for reqwest::Method {
    fn from(method: RestMethod) -> Self {
        method.to_reqwest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_display() {
        assert_eq!(RestMethod::Get.to_string(), "GET");
        assert_eq!(RestMethod::Put.to_string(), "PUT");
        assert_eq!(RestMethod::Delete.to_string(), "DELETE");
    }

    #[test]
    fn test_parse() {
        assert_eq!("POST".parse::<RestMethod>().unwrap(), RestMethod::Post);
        assert!("PATCH".parse::<RestMethod>().is_err());
    }

    #[test]
    fn test_every_method_round_trips_through_display() {
        for method in RestMethod::iter() {
            assert_eq!(method.to_string().parse::<RestMethod>().unwrap(), method);
        }
    }

    #[test]
    fn test_to_reqwest() {
        assert_eq!(RestMethod::Put.to_reqwest(), reqwest::Method::PUT);
        assert_eq!(reqwest::Method::from(RestMethod::Delete), reqwest::Method::DELETE);
    }
}
