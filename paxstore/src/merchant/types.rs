//! Merchant records, request payloads and search enums.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use strum::EnumIter;
use validator::Validate;

use crate::de::null_as_default;

/// Merchant status filter for searches.
///
/// `All` applies no filter at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum MerchantStatus {
    #[default]
    All,
    Active,
    Inactive,
    Suspend,
}

impl MerchantStatus {
    /// Returns the wire code, or `None` for [`All`](Self::All).
    pub fn wire_code(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Active => Some("A"),
            Self::Inactive => Some("P"),
            Self::Suspend => Some("S"),
        }
    }

    /// Maps a wire code back to a status.
    ///
    /// ## Examples
    ///
    /// ```rust
    /// use paxstore_openapi::merchant::MerchantStatus;
    ///
    /// assert_eq!(MerchantStatus::from_wire_code("P"), Some(MerchantStatus::Inactive));
    /// assert_eq!(MerchantStatus::from_wire_code("X"), None);
    /// ```
    pub fn from_wire_code(code: &str) -> Option<Self> {
        match code {
            "A" => Some(Self::Active),
            "P" => Some(Self::Inactive),
            "S" => Some(Self::Suspend),
            _ => None,
        }
    }
}

/// Sort order for merchant searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, EnumIter)]
pub enum MerchantSearchOrderBy {
    #[default]
    Name,
    Contact,
    Phone,
}

impl MerchantSearchOrderBy {
    /// Returns the field name sent as `orderBy`.
    pub fn wire_name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Contact => "contact",
            Self::Phone => "phone",
        }
    }

    /// Parses a field name; anything unrecognized sorts by name.
    pub fn from_wire_name(name: &str) -> Self {
        match name {
            "contact" => Self::Contact,
            "phone" => Self::Phone,
            _ => Self::Name,
        }
    }
}

/// A merchant as returned by the API.
///
/// Fields the server omits or sends as `null` take their default; unknown
/// fields are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Merchant {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub reseller: Option<SimpleReseller>,
    pub country: Option<String>,
    pub postcode: Option<String>,
    pub address: Option<String>,
    pub contact: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// Raw status wire code; see [`Merchant::status`].
    #[serde(rename = "status")]
    pub status_code: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "merchantCategory", deserialize_with = "null_as_default")]
    pub merchant_categories: Vec<MerchantCategory>,
    #[serde(deserialize_with = "null_as_default")]
    pub entity_attribute_values: BTreeMap<String, String>,
}

impl Merchant {
    /// Returns the decoded status, if the server sent a known code.
    pub fn status(&self) -> Option<MerchantStatus> {
        self.status_code
            .as_deref()
            .and_then(MerchantStatus::from_wire_code)
    }
}

/// The reseller a merchant belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimpleReseller {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
}

/// A merchant category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MerchantCategory {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub remarks: Option<String>,
}

/// Payload for creating a merchant.
///
/// ## Examples
///
/// ```rust
/// use paxstore_openapi::merchant::MerchantCreateRequest;
/// use validator::Validate;
///
/// let request = MerchantCreateRequest::new("Corner Shop", "owner@example.com", "Acme", "Jo", "US");
/// assert!(request.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct MerchantCreateRequest {
    #[validate(
        required(message = "name is required"),
        length(min = 1, max = 64, message = "name must be 1 to 64 characters")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[validate(
        required(message = "email is required"),
        email(message = "email is not a valid address"),
        length(max = 255, message = "email must be at most 255 characters")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[validate(
        required(message = "resellerName is required"),
        length(min = 1, max = 64, message = "resellerName must be 1 to 64 characters")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reseller_name: Option<String>,
    #[validate(
        required(message = "contact is required"),
        length(min = 1, max = 64, message = "contact must be 1 to 64 characters")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    #[validate(
        required(message = "country is required"),
        length(min = 1, max = 64, message = "country must be 1 to 64 characters")
    )]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[validate(length(max = 32, message = "phone must be at most 32 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[validate(length(max = 16, message = "postcode must be at most 16 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode: Option<String>,
    #[validate(length(max = 255, message = "address must be at most 255 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[validate(length(max = 3000, message = "description must be at most 3000 characters"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Also create a user account for the merchant contact.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub create_user_flag: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub merchant_category_names: Vec<String>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub entity_attribute_values: BTreeMap<String, String>,
}

impl MerchantCreateRequest {
    /// Creates a request with every required field set.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        reseller_name: impl Into<String>,
        contact: impl Into<String>,
        country: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            reseller_name: Some(reseller_name.into()),
            contact: Some(contact.into()),
            country: Some(country.into()),
            ..Default::default()
        }
    }
}

/// Payload for updating a merchant.
///
/// An update replaces the whole record, so it carries the same fields and
/// rules as a create.
pub type MerchantUpdateRequest = MerchantCreateRequest;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::payload_errors;
    use strum::IntoEnumIterator;

    fn valid_request() -> MerchantCreateRequest {
        MerchantCreateRequest::new("Corner Shop", "owner@example.com", "Acme", "Jo", "US")
    }

    #[test]
    fn test_status_wire_codes_round_trip() {
        for status in MerchantStatus::iter() {
            match status.wire_code() {
                Some(code) => assert_eq!(MerchantStatus::from_wire_code(code), Some(status)),
                None => assert_eq!(status, MerchantStatus::All),
            }
        }
        assert_eq!(MerchantStatus::Active.wire_code(), Some("A"));
        assert_eq!(MerchantStatus::Inactive.wire_code(), Some("P"));
        assert_eq!(MerchantStatus::Suspend.wire_code(), Some("S"));
    }

    #[test]
    fn test_order_by_wire_names() {
        let names: Vec<_> = MerchantSearchOrderBy::iter()
            .map(MerchantSearchOrderBy::wire_name)
            .collect();
        assert_eq!(names, vec!["name", "contact", "phone"]);
        assert_eq!(MerchantSearchOrderBy::default().wire_name(), "name");
    }

    #[test]
    fn test_unknown_order_by_defaults_to_name() {
        assert_eq!(
            MerchantSearchOrderBy::from_wire_name("createdDate"),
            MerchantSearchOrderBy::Name
        );
        assert_eq!(
            MerchantSearchOrderBy::from_wire_name("phone"),
            MerchantSearchOrderBy::Phone
        );
    }

    #[test]
    fn test_merchant_deserializes_wire_fields() {
        let json = r#"{
            "id": 1000000218,
            "name": "Corner Shop",
            "reseller": {"id": 5, "name": "Acme"},
            "status": "S",
            "merchantCategory": [{"id": 3, "name": "Retail"}],
            "entityAttributeValues": {"storeCode": "42"},
            "unknownField": true
        }"#;

        let merchant: Merchant = serde_json::from_str(json).unwrap();
        assert_eq!(merchant.id, 1_000_000_218);
        assert_eq!(merchant.status(), Some(MerchantStatus::Suspend));
        assert_eq!(merchant.reseller.unwrap().name, "Acme");
        assert_eq!(merchant.merchant_categories[0].name, "Retail");
        assert_eq!(merchant.entity_attribute_values["storeCode"], "42");
        assert_eq!(merchant.email, None);
    }

    #[test]
    fn test_create_request_serializes_camel_case() {
        let mut request = valid_request();
        request.create_user_flag = Some(true);
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["resellerName"], "Acme");
        assert_eq!(json["createUserFlag"], true);
        assert!(json.get("phone").is_none());
        assert!(json.get("merchantCategoryNames").is_none());
    }

    #[test]
    fn test_valid_create_request_passes() {
        assert!(payload_errors(&valid_request()).is_empty());
    }

    #[test]
    fn test_create_request_reports_every_violation() {
        let request = MerchantCreateRequest {
            email: Some("nope".to_string()),
            phone: Some("1".repeat(40)),
            ..Default::default()
        };

        let errors = payload_errors(&request);
        for expected in [
            "name is required",
            "resellerName is required",
            "contact is required",
            "country is required",
            "email is not a valid address",
            "phone must be at most 32 characters",
        ] {
            assert!(errors.iter().any(|e| e == expected), "missing {expected:?} in {errors:?}");
        }
        assert_eq!(errors.len(), 6);
    }

    #[test]
    fn test_update_request_shares_create_rules() {
        let update = MerchantUpdateRequest {
            email: Some("nope".to_string()),
            ..valid_request()
        };
        assert_eq!(payload_errors(&update), vec!["email is not a valid address"]);
    }

    #[test]
    fn test_merchant_null_fields_take_defaults() {
        let json = r#"{
            "id": 42,
            "name": null,
            "reseller": {"id": null, "name": null},
            "merchantCategory": null,
            "entityAttributeValues": null,
            "status": null
        }"#;

        let merchant: Merchant = serde_json::from_str(json).unwrap();
        assert_eq!(merchant.id, 42);
        assert!(merchant.name.is_empty());
        assert_eq!(merchant.reseller, Some(SimpleReseller::default()));
        assert!(merchant.merchant_categories.is_empty());
        assert!(merchant.entity_attribute_values.is_empty());
        assert_eq!(merchant.status(), None);
    }
}
