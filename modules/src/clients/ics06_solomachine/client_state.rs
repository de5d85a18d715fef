use ibc_genesis_proto::google::protobuf::Any;
use ibc_genesis_proto::ibc::lightclients::solomachine::v3::ClientState as RawClientState;
use ibc_genesis_proto::Protobuf;
use serde_derive::{Deserialize, Serialize};

use super::consensus_state::ConsensusState;
use super::error::Error;
use crate::core::ics02_client::client_state::ClientState as Ics02ClientState;
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::error::Error as Ics02Error;
use crate::core::ics02_client::height::Height;

pub const SOLOMACHINE_CLIENT_STATE_TYPE_URL: &str = "/ibc.lightclients.solomachine.v3.ClientState";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientState {
    pub sequence: u64,
    pub is_frozen: bool,
    pub consensus_state: Option<ConsensusState>,
}

impl ClientState {
    pub fn new(sequence: u64, consensus_state: ConsensusState) -> Self {
        Self {
            sequence,
            is_frozen: false,
            consensus_state: Some(consensus_state),
        }
    }

    pub fn validate_params(&self) -> Result<(), Error> {
        if self.sequence == 0 {
            return Err(Error::zero_sequence());
        }

        self.consensus_state
            .as_ref()
            .ok_or_else(Error::missing_consensus_state)?
            .validate()
    }
}

impl Ics02ClientState for ClientState {
    fn client_type(&self) -> ClientType {
        ClientType::Solomachine
    }

    /// Solo machines have a single revision, the height is the sequence.
    fn latest_height(&self) -> Height {
        Height::new(0, self.sequence)
    }

    fn validate(&self) -> Result<(), Ics02Error> {
        self.validate_params().map_err(Into::into)
    }
}

impl Protobuf<RawClientState> for ClientState {}

impl TryFrom<RawClientState> for ClientState {
    type Error = Error;

    fn try_from(raw: RawClientState) -> Result<Self, Self::Error> {
        Ok(Self {
            sequence: raw.sequence,
            is_frozen: raw.is_frozen,
            consensus_state: raw
                .consensus_state
                .map(ConsensusState::try_from)
                .transpose()?,
        })
    }
}

impl From<ClientState> for RawClientState {
    fn from(value: ClientState) -> Self {
        Self {
            sequence: value.sequence,
            is_frozen: value.is_frozen,
            consensus_state: value.consensus_state.map(Into::into),
        }
    }
}

impl From<ClientState> for Any {
    fn from(client_state: ClientState) -> Self {
        Any {
            type_url: SOLOMACHINE_CLIENT_STATE_TYPE_URL.to_string(),
            value: Protobuf::<RawClientState>::encode_vec(&client_state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::ics06_solomachine::error::ErrorDetail;
    use crate::test_utils::{dummy_sm_client_state, dummy_sm_consensus_state};
    use test_log::test;

    #[test]
    fn client_state_validate() {
        assert!(dummy_sm_client_state(1).validate_params().is_ok());

        let err = dummy_sm_client_state(0).validate_params().unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::ZeroSequence(_)));

        let cs = ClientState {
            consensus_state: None,
            ..dummy_sm_client_state(1)
        };
        let err = cs.validate_params().unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::MissingConsensusState(_)));

        let cs = ClientState::new(
            1,
            ConsensusState {
                timestamp: 0,
                ..dummy_sm_consensus_state()
            },
        );
        let err = cs.validate_params().unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::ZeroTimestamp(_)));
    }

    #[test]
    fn latest_height_is_sequence() {
        assert_eq!(dummy_sm_client_state(7).latest_height(), Height::new(0, 7));
    }
}
