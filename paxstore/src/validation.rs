//! Pre-flight validation of call arguments.
//!
//! Every check returns an ordered list of messages. An empty list is the only
//! success signal; nothing here performs I/O or fails in any other way.
//! Checks accumulate: each violated rule contributes its own message.

use validator::{Validate, ValidationErrors};

use crate::messages;

/// Checks that an identifier is positive.
///
/// `error_key` picks the message reported for a non-positive id.
pub fn validate_id(id: i64, error_key: &str) -> Vec<String> {
    let mut errors = Vec::new();
    if id <= 0 {
        errors.push(messages::lookup(error_key).into_owned());
    }
    errors
}

/// Checks page number and page size.
///
/// Page numbers start at 1; page sizes run from 1 to `max_page_size`.
///
/// ## Examples
///
/// ```rust
/// use paxstore_openapi::validation::validate_page;
///
/// assert!(validate_page(1, 20, 1000).is_empty());
/// assert_eq!(validate_page(0, 0, 1000).len(), 2);
/// ```
pub fn validate_page(page_no: i32, page_size: i32, max_page_size: u32) -> Vec<String> {
    let mut errors = Vec::new();
    if page_no < 1 {
        errors.push(messages::lookup(messages::PARAMETER_PAGE_NO_INVALID).into_owned());
    }
    if page_size < 1 || i64::from(page_size) > i64::from(max_page_size) {
        errors.push(messages::lookup(messages::PARAMETER_PAGE_SIZE_INVALID).into_owned());
    }
    errors
}

/// Checks a create payload.
///
/// An absent payload yields exactly one message (`null_key`); otherwise every
/// rule the payload violates is reported.
pub fn validate_create<P: Validate>(payload: Option<&P>, null_key: &str) -> Vec<String> {
    match payload {
        Some(payload) => payload_errors(payload),
        None => vec![messages::lookup(null_key).into_owned()],
    }
}

/// Checks the id and the payload of an update.
///
/// Both checks always run; id messages come first, payload messages after.
pub fn validate_update<P: Validate>(
    id: i64,
    payload: Option<&P>,
    id_key: &str,
    null_key: &str,
) -> Vec<String> {
    let mut errors = validate_id(id, id_key);
    errors.extend(validate_create(payload, null_key));
    errors
}

/// Runs a payload's rule set and flattens the violations into messages.
pub fn payload_errors<P: Validate>(payload: &P) -> Vec<String> {
    match payload.validate() {
        Ok(()) => Vec::new(),
        Err(errors) => flatten(&errors),
    }
}

/// Orders violations by field name, keeping rule order within a field.
fn flatten(errors: &ValidationErrors) -> Vec<String> {
    let mut fields: Vec<_> = errors
        .field_errors()
        .into_iter()
        .map(|(field, violations)| (field.to_string(), violations))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .flat_map(|(field, violations)| {
            violations.iter().map(move |violation| match &violation.message {
                Some(message) => message.to_string(),
                None => format!("{field} is invalid ({})", violation.code),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Validate)]
    struct Contact {
        #[validate(required(message = "name is required"), length(min = 1, message = "name cannot be empty"))]
        name: Option<String>,
        #[validate(email)]
        email: Option<String>,
    }

    fn contact(name: Option<&str>, email: Option<&str>) -> Contact {
        Contact {
            name: name.map(str::to_string),
            email: email.map(str::to_string),
        }
    }

    #[test]
    fn test_validate_id() {
        assert!(validate_id(1, messages::PARAMETER_MERCHANT_ID_INVALID).is_empty());
        for id in [0, -1, i64::MIN] {
            let errors = validate_id(id, messages::PARAMETER_MERCHANT_ID_INVALID);
            assert_eq!(errors, vec!["Parameter merchantId is invalid".to_string()]);
        }
    }

    #[test]
    fn test_validate_page_bounds() {
        assert!(validate_page(1, 1, 200).is_empty());
        assert!(validate_page(1, 200, 200).is_empty());
        assert_eq!(validate_page(0, 20, 200).len(), 1);
        assert_eq!(validate_page(1, 0, 200).len(), 1);
        assert_eq!(validate_page(1, 201, 200).len(), 1);
    }

    #[test]
    fn test_validate_page_accumulates() {
        let errors = validate_page(-3, 5000, 1000);
        assert_eq!(
            errors,
            vec![
                messages::lookup(messages::PARAMETER_PAGE_NO_INVALID).into_owned(),
                messages::lookup(messages::PARAMETER_PAGE_SIZE_INVALID).into_owned(),
            ]
        );
    }

    #[test]
    fn test_validate_create_absent_payload() {
        let errors = validate_create::<Contact>(None, messages::MERCHANT_CREATE_REQUEST_IS_NULL);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0], "Parameter merchantCreateRequest cannot be null");
    }

    #[test]
    fn test_validate_create_collects_every_violation() {
        let payload = contact(None, Some("not-an-email"));
        let errors = validate_create(Some(&payload), messages::MERCHANT_CREATE_REQUEST_IS_NULL);

        assert_eq!(errors.len(), 2);
        // email sorts before name
        assert_eq!(errors[0], "email is invalid (email)");
        assert_eq!(errors[1], "name is required");
    }

    #[test]
    fn test_validate_create_valid_payload() {
        let payload = contact(Some("Shop"), Some("owner@example.com"));
        assert!(validate_create(Some(&payload), messages::MERCHANT_CREATE_REQUEST_IS_NULL).is_empty());
    }

    #[test]
    fn test_validate_update_reports_both_checks() {
        let payload = contact(Some(""), None);
        let errors = validate_update(
            0,
            Some(&payload),
            messages::MERCHANT_ID_INVALID,
            messages::MERCHANT_UPDATE_REQUEST_IS_NULL,
        );

        assert_eq!(
            errors,
            vec!["Merchant id is invalid".to_string(), "name cannot be empty".to_string()]
        );
    }

    #[test]
    fn test_validate_update_absent_payload_and_bad_id() {
        let errors = validate_update::<Contact>(
            -7,
            None,
            messages::MERCHANT_ID_INVALID,
            messages::MERCHANT_UPDATE_REQUEST_IS_NULL,
        );
        assert_eq!(errors.len(), 2);
    }
}
