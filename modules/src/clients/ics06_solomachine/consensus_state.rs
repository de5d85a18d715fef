use ibc_genesis_proto::google::protobuf::Any;
use ibc_genesis_proto::ibc::lightclients::solomachine::v3::ConsensusState as RawConsensusState;
use ibc_genesis_proto::Protobuf;
use serde_derive::{Deserialize, Serialize};

use super::error::Error;
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::consensus_state::ConsensusState as Ics02ConsensusState;
use crate::core::ics02_client::error::Error as Ics02Error;

pub const SOLOMACHINE_CONSENSUS_STATE_TYPE_URL: &str =
    "/ibc.lightclients.solomachine.v3.ConsensusState";

/// The public key of a solo machine along with the diversifier that lets the
/// same key back several clients.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusState {
    /// Type-tagged public key, kept opaque since no signature is checked here.
    pub public_key: Option<Any>,
    pub diversifier: String,
    pub timestamp: u64,
}

impl ConsensusState {
    pub fn new(public_key: Any, diversifier: impl Into<String>, timestamp: u64) -> Self {
        Self {
            public_key: Some(public_key),
            diversifier: diversifier.into(),
            timestamp,
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.timestamp == 0 {
            return Err(Error::zero_timestamp());
        }

        if !self.diversifier.is_empty() && self.diversifier.trim().is_empty() {
            return Err(Error::blank_diversifier());
        }

        match &self.public_key {
            Some(key) if !key.type_url.is_empty() && !key.value.is_empty() => Ok(()),
            _ => Err(Error::missing_public_key()),
        }
    }
}

impl Ics02ConsensusState for ConsensusState {
    fn client_type(&self) -> ClientType {
        ClientType::Solomachine
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
            public_key: raw.public_key,
            diversifier: raw.diversifier,
            timestamp: raw.timestamp,
        })
    }
}

impl From<ConsensusState> for RawConsensusState {
    fn from(value: ConsensusState) -> Self {
        Self {
            public_key: value.public_key,
            diversifier: value.diversifier,
            timestamp: value.timestamp,
        }
    }
}

impl From<ConsensusState> for Any {
    fn from(consensus_state: ConsensusState) -> Self {
        Any {
            type_url: SOLOMACHINE_CONSENSUS_STATE_TYPE_URL.to_string(),
            value: Protobuf::<RawConsensusState>::encode_vec(&consensus_state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ics06_solomachine::error::ErrorDetail;
    use crate::test_utils::dummy_sm_consensus_state;
    use test_log::test;

    #[test]
    fn consensus_state_validate() {
        assert!(dummy_sm_consensus_state().validate().is_ok());

        let cs = ConsensusState {
            timestamp: 0,
            ..dummy_sm_consensus_state()
        };
        assert!(matches!(
            cs.validate().unwrap_err().detail(),
            ErrorDetail::ZeroTimestamp(_)
        ));

        let cs = ConsensusState {
            diversifier: "   ".to_string(),
            ..dummy_sm_consensus_state()
        };
        assert!(matches!(
            cs.validate().unwrap_err().detail(),
            ErrorDetail::BlankDiversifier(_)
        ));

        let cs = ConsensusState {
            public_key: None,
            ..dummy_sm_consensus_state()
        };
        assert!(matches!(
            cs.validate().unwrap_err().detail(),
            ErrorDetail::MissingPublicKey(_)
        ));
    }

    #[test]
    fn empty_diversifier_is_allowed() {
        let cs = ConsensusState {
            diversifier: String::new(),
            ..dummy_sm_consensus_state()
        };
        assert!(cs.validate().is_ok());
    }
}
