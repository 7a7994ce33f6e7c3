//! Serde helpers for response fields.

use serde::{Deserialize, Deserializer};

/// Deserializes an explicit `null` as the type's default.
///
/// Pair with `#[serde(default)]` so a missing field and a `null` field decode
/// the same way.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    <Option<T>>::deserialize(deserializer).map(Option::unwrap_or_default)
}
