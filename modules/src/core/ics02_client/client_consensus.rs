use core::cmp::Ordering;
use core::ops::Deref;

use ibc_genesis_proto::google::protobuf::Any;
use ibc_genesis_proto::ibc::core::client::v1::{
    ClientConsensusStates as RawClientConsensusStates,
    ConsensusStateWithHeight as RawConsensusStateWithHeight,
};
use ibc_genesis_proto::Protobuf;
use serde_derive::{Deserialize, Serialize};

use crate::core::ics02_client::consensus_state::AnyConsensusState;
use crate::core::ics02_client::error::Error;
use crate::core::ics02_client::height::Height;
use crate::core::ics02_client::registry::AnyUnpacker;
use crate::dynamic_typing::CachedAny;

/// A consensus state together with the height it was recorded at.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusStateWithHeight {
    pub height: Height,
    pub consensus_state: CachedAny<AnyConsensusState>,
}

impl ConsensusStateWithHeight {
    pub fn new(height: Height, consensus_state: AnyConsensusState) -> Self {
        Self {
            height,
            consensus_state: CachedAny::packed(consensus_state),
        }
    }

    pub fn from_any(height: Height, consensus_state: Any) -> Self {
        Self {
            height,
            consensus_state: CachedAny::new(consensus_state),
        }
    }

    pub fn unpack_interfaces<U>(&mut self, unpacker: &U) -> Result<(), Error>
    where
        U: AnyUnpacker + ?Sized,
    {
        self.consensus_state
            .unpack_with(|any| unpacker.unpack_consensus_state(any))
            .map(|_| ())
    }
}

/// The consensus state history of a single client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConsensusStates {
    pub client_id: String,
    pub consensus_states: Vec<ConsensusStateWithHeight>,
}

impl ClientConsensusStates {
    pub fn new(
        client_id: impl Into<String>,
        consensus_states: Vec<ConsensusStateWithHeight>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            consensus_states,
        }
    }

    pub fn unpack_interfaces<U>(&mut self, unpacker: &U) -> Result<(), Error>
    where
        U: AnyUnpacker + ?Sized,
    {
        self.consensus_states
            .iter_mut()
            .try_for_each(|cs| cs.unpack_interfaces(unpacker))
    }
}

/// Orders consensus state groups by client identifier, comparing bytes.
pub fn compare_client_id(a: &ClientConsensusStates, b: &ClientConsensusStates) -> Ordering {
    a.client_id.as_bytes().cmp(b.client_id.as_bytes())
}

/// Consensus state histories of all genesis clients.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientsConsensusStates(Vec<ClientConsensusStates>);

impl ClientsConsensusStates {
    pub fn new(states: Vec<ClientConsensusStates>) -> Self {
        Self(states)
    }

    /// Sorts the groups by client identifier. The sort is stable, so groups
    /// sharing an identifier keep their relative order.
    pub fn sort(&mut self) -> &mut Self {
        self.0.sort_by(compare_client_id);
        self
    }

    pub fn unpack_interfaces<U>(&mut self, unpacker: &U) -> Result<(), Error>
    where
        U: AnyUnpacker + ?Sized,
    {
        self.0
            .iter_mut()
            .try_for_each(|group| group.unpack_interfaces(unpacker))
    }

    pub fn into_vec(self) -> Vec<ClientConsensusStates> {
        self.0
    }
}

impl Deref for ClientsConsensusStates {
    type Target = [ClientConsensusStates];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<ClientConsensusStates>> for ClientsConsensusStates {
    fn from(states: Vec<ClientConsensusStates>) -> Self {
        Self(states)
    }
}

impl FromIterator<ClientConsensusStates> for ClientsConsensusStates {
    fn from_iter<I: IntoIterator<Item = ClientConsensusStates>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ClientsConsensusStates {
    type Item = ClientConsensusStates;
    type IntoIter = std::vec::IntoIter<ClientConsensusStates>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ClientsConsensusStates {
    type Item = &'a ClientConsensusStates;
    type IntoIter = core::slice::Iter<'a, ClientConsensusStates>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl Protobuf<RawConsensusStateWithHeight> for ConsensusStateWithHeight {}

impl TryFrom<RawConsensusStateWithHeight> for ConsensusStateWithHeight {
    type Error = Error;

    fn try_from(raw: RawConsensusStateWithHeight) -> Result<Self, Self::Error> {
        // The owning client is not known at this level.
        let height = raw
            .height
            .ok_or_else(|| Error::missing_raw_height(String::new()))?;
        let consensus_state = raw
            .consensus_state
            .ok_or_else(|| Error::missing_raw_consensus_state(String::new()))?;

        Ok(Self::from_any(height.into(), consensus_state))
    }
}

impl From<ConsensusStateWithHeight> for RawConsensusStateWithHeight {
    fn from(value: ConsensusStateWithHeight) -> Self {
        Self {
            height: Some(value.height.into()),
            consensus_state: Some(value.consensus_state.into()),
        }
    }
}

impl Protobuf<RawClientConsensusStates> for ClientConsensusStates {}

impl TryFrom<RawClientConsensusStates> for ClientConsensusStates {
    type Error = Error;

    fn try_from(raw: RawClientConsensusStates) -> Result<Self, Self::Error> {
        let client_id = raw.client_id;

        let consensus_states = raw
            .consensus_states
            .into_iter()
            .map(|cs| {
                let height = cs
                    .height
                    .ok_or_else(|| Error::missing_raw_height(client_id.clone()))?;
                let any = cs
                    .consensus_state
                    .ok_or_else(|| Error::missing_raw_consensus_state(client_id.clone()))?;

                Ok(ConsensusStateWithHeight::from_any(height.into(), any))
            })
            .collect::<Result<Vec<_>, Error>>()?;

        Ok(Self {
            client_id,
            consensus_states,
        })
    }
}

impl From<ClientConsensusStates> for RawClientConsensusStates {
    fn from(value: ClientConsensusStates) -> Self {
        Self {
            client_id: value.client_id,
            consensus_states: value
                .consensus_states
                .into_iter()
                .map(Into::into)
                .collect(),
        }
    }
}
