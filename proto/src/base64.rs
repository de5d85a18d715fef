//! Serialize/deserialize bytes (`Vec<u8>`) type as a base64 string.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle_encoding::base64;

pub fn serialize<S, T>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    let encoded = String::from_utf8(base64::encode(value.as_ref())).map_err(serde::ser::Error::custom)?;
    encoded.serialize(serializer)
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let encoded = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
    base64::decode(encoded.as_bytes()).map_err(serde::de::Error::custom)
}
