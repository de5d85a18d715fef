use ibc_genesis_proto::google::protobuf::{Any, Timestamp as RawTimestamp};
use ibc_genesis_proto::ibc::core::commitment::v1::MerkleRoot;
use ibc_genesis_proto::ibc::lightclients::tendermint::v1::ConsensusState as RawConsensusState;
use ibc_genesis_proto::Protobuf;
use serde_derive::{Deserialize, Serialize};

use crate::clients::ics07_tendermint::error::Error;
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::consensus_state::ConsensusState as Ics02ConsensusState;
use crate::core::ics02_client::error::Error as Ics02Error;
use crate::serializers::{deser_hex_upper, ser_hex_upper};

pub const TENDERMINT_CONSENSUS_STATE_TYPE_URL: &str =
    "/ibc.lightclients.tendermint.v1.ConsensusState";

/// Length in bytes of the SHA-256 hash of a validator set.
pub const VALIDATORS_HASH_LEN: usize = 32;

/// Block time of a consensus state, as seconds and nanoseconds since the Unix epoch.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    pub seconds: i64,
    pub nanos: i32,
}

impl Timestamp {
    pub fn from_unix_seconds(seconds: i64) -> Self {
        Self { seconds, nanos: 0 }
    }
}

impl From<RawTimestamp> for Timestamp {
    fn from(raw: RawTimestamp) -> Self {
        Self {
            seconds: raw.seconds,
            nanos: raw.nanos,
        }
    }
}

impl From<Timestamp> for RawTimestamp {
    fn from(value: Timestamp) -> Self {
        Self {
            seconds: value.seconds,
            nanos: value.nanos,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusState {
    pub timestamp: Timestamp,
    #[serde(serialize_with = "ser_hex_upper", deserialize_with = "deser_hex_upper")]
    pub root: Vec<u8>,
    #[serde(serialize_with = "ser_hex_upper", deserialize_with = "deser_hex_upper")]
    pub next_validators_hash: Vec<u8>,
}

impl ConsensusState {
    pub fn new(root: Vec<u8>, timestamp: Timestamp, next_validators_hash: Vec<u8>) -> Self {
        Self {
            timestamp,
            root,
            next_validators_hash,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.root.is_empty() {
            return Err(Error::empty_commitment_root());
        }

        // An empty hash is accepted, any other length must be a SHA-256 digest.
        if !self.next_validators_hash.is_empty()
            && self.next_validators_hash.len() != VALIDATORS_HASH_LEN
        {
            return Err(Error::invalid_next_validators_hash(
                self.next_validators_hash.len(),
            ));
        }

        if self.timestamp.seconds <= 0 {
            return Err(Error::invalid_timestamp(format!(
                "timestamp must be a positive Unix time, got {} seconds",
                self.timestamp.seconds
            )));
        }

        Ok(())
    }
}

impl Ics02ConsensusState for ConsensusState {
    fn client_type(&self) -> ClientType {
        ClientType::Tendermint
    }

    fn validate_basic(&self) -> Result<(), Ics02Error> {
        self.validate().map_err(Into::into)
    }
}

impl Protobuf<RawConsensusState> for ConsensusState {}

impl TryFrom<RawConsensusState> for ConsensusState {
    type Error = Error;

    fn try_from(raw: RawConsensusState) -> Result<Self, Self::Error> {
        Ok(Self {
            timestamp: raw.timestamp.map(Timestamp::from).unwrap_or_default(),
            root: raw.root.map(|root| root.hash).unwrap_or_default(),
            next_validators_hash: raw.next_validators_hash,
        })
    }
}

impl From<ConsensusState> for RawConsensusState {
    fn from(value: ConsensusState) -> Self {
        Self {
            timestamp: Some(value.timestamp.into()),
            root: Some(MerkleRoot { hash: value.root }),
            next_validators_hash: value.next_validators_hash,
        }
    }
}

impl From<ConsensusState> for Any {
    fn from(consensus_state: ConsensusState) -> Self {
        Any {
            type_url: TENDERMINT_CONSENSUS_STATE_TYPE_URL.to_string(),
            value: Protobuf::<RawConsensusState>::encode_vec(&consensus_state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ics07_tendermint::error::ErrorDetail;
    use crate::test_utils::dummy_tm_consensus_state;
    use test_log::test;

    #[test]
    fn valid_consensus_state() {
        assert!(dummy_tm_consensus_state().validate().is_ok());
    }

    #[test]
    fn empty_root() {
        let cs = ConsensusState {
            root: vec![],
            ..dummy_tm_consensus_state()
        };

        assert!(matches!(
            cs.validate().unwrap_err().detail(),
            ErrorDetail::EmptyCommitmentRoot(_)
        ));
    }

    #[test]
    fn short_next_validators_hash() {
        let cs = ConsensusState {
            next_validators_hash: vec![0xab; 20],
            ..dummy_tm_consensus_state()
        };

        assert!(matches!(
            cs.validate().unwrap_err().detail(),
            ErrorDetail::InvalidNextValidatorsHash(_)
        ));
    }

    #[test]
    fn empty_next_validators_hash_is_accepted() {
        let cs = ConsensusState {
            next_validators_hash: vec![],
            ..dummy_tm_consensus_state()
        };

        assert!(cs.validate().is_ok());
    }

    #[test]
    fn timestamp_must_be_positive() {
        let cs = ConsensusState {
            timestamp: Timestamp::from_unix_seconds(0),
            ..dummy_tm_consensus_state()
        };

        assert!(matches!(
            cs.validate().unwrap_err().detail(),
            ErrorDetail::InvalidTimestamp(_)
        ));
    }

    #[test]
    fn serde_uses_hex_for_hashes() {
        let cs = dummy_tm_consensus_state();
        let json = serde_json::to_value(&cs).unwrap();
        assert_eq!(
            json["next_validators_hash"],
            serde_json::Value::String("AB".repeat(VALIDATORS_HASH_LEN))
        );

        let back: ConsensusState = serde_json::from_value(json).unwrap();
        assert_eq!(back, cs);
    }
}
