use ibc_genesis_proto::ibc::core::client::v1::{
    GenesisMetadata as RawGenesisMetadata,
    IdentifiedGenesisMetadata as RawIdentifiedGenesisMetadata,
};
use ibc_genesis_proto::Protobuf;
use serde_derive::{Deserialize, Serialize};

use crate::core::ics02_client::error::Error;
use crate::serializers::base64;

/// A raw key/value pair from a client's store, carried across genesis export
/// and import.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenesisMetadata {
    #[serde(with = "base64")]
    pub key: Vec<u8>,
    #[serde(with = "base64")]
    pub value: Vec<u8>,
}

impl GenesisMetadata {
    pub fn new(key: impl Into<Vec<u8>>, value: impl Into<Vec<u8>>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.key.is_empty() {
            return Err(Error::invalid_genesis_metadata(
                "metadata key cannot be empty".to_string(),
            ));
        }

        if self.value.is_empty() {
            return Err(Error::invalid_genesis_metadata(
                "metadata value cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifiedGenesisMetadata {
    pub client_id: String,
    pub client_metadata: Vec<GenesisMetadata>,
}

impl IdentifiedGenesisMetadata {
    pub fn new(client_id: impl Into<String>, client_metadata: Vec<GenesisMetadata>) -> Self {
        Self {
            client_id: client_id.into(),
            client_metadata,
        }
    }
}

impl Protobuf<RawGenesisMetadata> for GenesisMetadata {}

impl From<RawGenesisMetadata> for GenesisMetadata {
    fn from(raw: RawGenesisMetadata) -> Self {
        Self {
            key: raw.key,
            value: raw.value,
        }
    }
}

impl From<GenesisMetadata> for RawGenesisMetadata {
    fn from(value: GenesisMetadata) -> Self {
        Self {
            key: value.key,
            value: value.value,
        }
    }
}

impl Protobuf<RawIdentifiedGenesisMetadata> for IdentifiedGenesisMetadata {}

impl From<RawIdentifiedGenesisMetadata> for IdentifiedGenesisMetadata {
    fn from(raw: RawIdentifiedGenesisMetadata) -> Self {
        Self {
            client_id: raw.client_id,
            client_metadata: raw.client_metadata.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<IdentifiedGenesisMetadata> for RawIdentifiedGenesisMetadata {
    fn from(value: IdentifiedGenesisMetadata) -> Self {
        Self {
            client_id: value.client_id,
            client_metadata: value.client_metadata.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ics02_client::error::ErrorDetail;
    use test_log::test;

    #[test]
    fn metadata_validate() {
        struct Test {
            name: &'static str,
            metadata: GenesisMetadata,
            want_pass: bool,
        }

        let tests = vec![
            Test {
                name: "valid",
                metadata: GenesisMetadata::new("processedTime", "10"),
                want_pass: true,
            },
            Test {
                name: "empty key",
                metadata: GenesisMetadata::new("", "10"),
                want_pass: false,
            },
            Test {
                name: "empty value",
                metadata: GenesisMetadata::new("processedTime", ""),
                want_pass: false,
            },
        ];

        for test in tests {
            let res = test.metadata.validate();
            assert_eq!(
                res.is_ok(),
                test.want_pass,
                "metadata_validate: test '{}' failed: {:?}",
                test.name,
                res
            );

            if let Err(e) = res {
                assert!(matches!(e.detail(), ErrorDetail::InvalidGenesisMetadata(_)));
            }
        }
    }

    #[test]
    fn serde_uses_base64() {
        let metadata = GenesisMetadata::new("key", "value");
        let json = serde_json::to_string(&metadata).unwrap();
        assert_eq!(json, r#"{"key":"a2V5","value":"dmFsdWU="}"#);

        let back: GenesisMetadata = serde_json::from_str(&json).unwrap();
        assert_eq!(back, metadata);
    }
}
