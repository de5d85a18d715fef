use core::fmt::Debug;

use ibc_genesis_proto::google::protobuf::Any;
use ibc_genesis_proto::ibc::lightclients::solomachine::v3::ConsensusState as RawSmConsensusState;
use ibc_genesis_proto::ibc::lightclients::tendermint::v1::ConsensusState as RawTmConsensusState;
use ibc_genesis_proto::Protobuf;
use serde_derive::{Deserialize, Serialize};

use crate::clients::ics06_solomachine::consensus_state::{
    ConsensusState as SmConsensusState, SOLOMACHINE_CONSENSUS_STATE_TYPE_URL,
};
use crate::clients::ics07_tendermint::consensus_state::{
    ConsensusState as TmConsensusState, TENDERMINT_CONSENSUS_STATE_TYPE_URL,
};
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::error::Error;

/// Capabilities the client registry relies on for every consensus state.
pub trait ConsensusState: Clone + Debug + Send + Sync {
    /// Type of client associated with this consensus state (eg. Tendermint)
    fn client_type(&self) -> ClientType;

    /// Stateless validation of the consensus state.
    fn validate_basic(&self) -> Result<(), Error>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnyConsensusState {
    Tendermint(TmConsensusState),
    Solomachine(SmConsensusState),
}

impl AnyConsensusState {
    pub fn type_url(&self) -> &'static str {
        match self {
            Self::Tendermint(_) => TENDERMINT_CONSENSUS_STATE_TYPE_URL,
            Self::Solomachine(_) => SOLOMACHINE_CONSENSUS_STATE_TYPE_URL,
        }
    }
}

impl ConsensusState for AnyConsensusState {
    fn client_type(&self) -> ClientType {
        match self {
            Self::Tendermint(cs_state) => cs_state.client_type(),
            Self::Solomachine(cs_state) => cs_state.client_type(),
        }
    }

    fn validate_basic(&self) -> Result<(), Error> {
        match self {
            Self::Tendermint(cs_state) => cs_state.validate_basic(),
            Self::Solomachine(cs_state) => cs_state.validate_basic(),
        }
    }
}

impl TryFrom<Any> for AnyConsensusState {
    type Error = Error;

    fn try_from(value: Any) -> Result<Self, Self::Error> {
        match value.type_url.as_str() {
            TENDERMINT_CONSENSUS_STATE_TYPE_URL => Ok(AnyConsensusState::Tendermint(
                Protobuf::<RawTmConsensusState>::decode_vec(&value.value)
                    .map_err(Error::decode_raw_consensus_state)?,
            )),

            SOLOMACHINE_CONSENSUS_STATE_TYPE_URL => Ok(AnyConsensusState::Solomachine(
                Protobuf::<RawSmConsensusState>::decode_vec(&value.value)
                    .map_err(Error::decode_raw_consensus_state)?,
            )),

            _ => Err(Error::unregistered_consensus_state_type(value.type_url)),
        }
    }
}

impl From<AnyConsensusState> for Any {
    fn from(value: AnyConsensusState) -> Self {
        match value {
            AnyConsensusState::Tendermint(value) => value.into(),
            AnyConsensusState::Solomachine(value) => value.into(),
        }
    }
}

impl From<TmConsensusState> for AnyConsensusState {
    fn from(cs: TmConsensusState) -> Self {
        Self::Tendermint(cs)
    }
}

impl From<SmConsensusState> for AnyConsensusState {
    fn from(cs: SmConsensusState) -> Self {
        Self::Solomachine(cs)
    }
}
