use serde::de::Error as _;
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use subtle_encoding::{Encoding, Hex};

pub fn ser_hex_upper<S, T>(data: T, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: AsRef<[u8]>,
{
    let hex = Hex::upper_case()
        .encode_to_string(data)
        .map_err(S::Error::custom)?;
    hex.serialize(serializer)
}

pub fn deser_hex_upper<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<Vec<u8>>,
{
    let hex = String::deserialize(deserializer)?;
    let bytes = Hex::upper_case()
        .decode(hex.as_bytes())
        .map_err(D::Error::custom)?;
    Ok(bytes.into())
}

/// Byte strings encoded as standard base64, the way genesis documents carry
/// raw store keys and values.
pub mod base64 {
    use serde::de::Error as _;
    use serde::ser::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use subtle_encoding::base64;

    pub fn serialize<S, T>(data: T, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        T: AsRef<[u8]>,
    {
        let encoded = String::from_utf8(base64::encode(data)).map_err(S::Error::custom)?;
        encoded.serialize(serializer)
    }

    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        D: Deserializer<'de>,
        T: From<Vec<u8>>,
    {
        let encoded = String::deserialize(deserializer)?;
        let bytes = base64::decode(encoded.as_bytes()).map_err(D::Error::custom)?;
        Ok(bytes.into())
    }
}
