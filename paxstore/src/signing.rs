//! Request signing.
//!
//! The third-party system API authenticates each request by an HMAC-MD5 of
//! the encoded query string followed by the request body, keyed by the API
//! secret and sent upper-case hex in the `signature` header. The query string
//! always carries `sysKey` and `timestamp`.

use hmac::{Hmac, Mac};
use md5::Md5;

use crate::error::ConfigError;

/// Header carrying the request signature.
pub const SIGNATURE_HEADER: &str = "signature";
/// Query parameter carrying the API key.
pub const SYS_KEY_PARAM: &str = "sysKey";
/// Query parameter carrying the request time in epoch milliseconds.
pub const TIMESTAMP_PARAM: &str = "timestamp";

type HmacMd5 = Hmac<Md5>;

/// Encodes query pairs as `application/x-www-form-urlencoded`, in order.
///
/// The executor sends exactly this string, so the signed bytes and the sent
/// bytes are the same.
pub fn encode_query<'a, I>(pairs: I) -> String
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

/// Computes the `signature` header value for a request.
///
/// ## Errors
///
/// Returns [`ConfigError::SigningKey`] if the secret is rejected as a key.
///
/// ## Examples
///
/// ```rust
/// use paxstore_openapi::signing::sign;
///
/// let signature = sign("sysKey=KEY&timestamp=1", None, "SECRET").unwrap();
/// assert_eq!(signature.len(), 32);
/// assert_eq!(signature, signature.to_uppercase());
/// ```
pub fn sign(query: &str, body: Option<&str>, secret: &str) -> Result<String, ConfigError> {
    let mut mac = HmacMd5::new_from_slice(secret.as_bytes())?;
    mac.update(query.as_bytes());
    if let Some(body) = body {
        mac.update(body.as_bytes());
    }
    Ok(hex::encode_upper(mac.finalize().into_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hmac_md5_hex(key: &[u8], message: &[u8]) -> String {
        let mut mac = HmacMd5::new_from_slice(key).unwrap();
        mac.update(message);
        hex::encode(mac.finalize().into_bytes())
    }

    #[test]
    fn test_hmac_md5_rfc2104_vectors() {
        assert_eq!(
            hmac_md5_hex(&[0x0b; 16], b"Hi There"),
            "9294727a3638bb1c13f48ef8158bfc9d"
        );
        assert_eq!(
            hmac_md5_hex(b"Jefe", b"what do ya want for nothing?"),
            "750c783e6ab0b503eaa86e310a5db738"
        );
    }

    #[test]
    fn test_hmac_md5_long_key() {
        // RFC 2202 test case 6
        assert_eq!(
            hmac_md5_hex(
                &[0xaa; 80],
                b"Test Using Larger Than Block-Size Key - Hash Key First"
            ),
            "6b1ab7fe4bd7bf8f0b62e6ce61b9d0cd"
        );
    }

    #[test]
    fn test_sign_is_upper_hex_of_query_then_body() {
        let signature = sign("Hi There", None, "Jefe").unwrap();
        assert_eq!(signature, hmac_md5_hex(b"Jefe", b"Hi There").to_uppercase());

        let without = sign("sysKey=k&timestamp=1", None, "secret").unwrap();
        let with = sign("sysKey=k&timestamp=1", Some(r#"{"name":"Shop"}"#), "secret").unwrap();
        assert_ne!(without, with);
        assert_eq!(
            with,
            sign(r#"sysKey=k&timestamp=1{"name":"Shop"}"#, None, "secret").unwrap()
        );
    }

    #[test]
    fn test_encode_query_keeps_order_and_escapes() {
        let encoded = encode_query([("name", "Joe's Café"), ("pageNo", "1")]);
        assert_eq!(encoded, "name=Joe%27s+Caf%C3%A9&pageNo=1");
    }
}
