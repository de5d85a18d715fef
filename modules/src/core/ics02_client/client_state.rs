use core::fmt::Debug;

use ibc_genesis_proto::google::protobuf::Any;
use ibc_genesis_proto::ibc::core::client::v1::IdentifiedClientState as RawIdentifiedClientState;
use ibc_genesis_proto::ibc::lightclients::localhost::v2::ClientState as RawLocalhostClientState;
use ibc_genesis_proto::ibc::lightclients::solomachine::v3::ClientState as RawSmClientState;
use ibc_genesis_proto::ibc::lightclients::tendermint::v1::ClientState as RawTmClientState;
use ibc_genesis_proto::Protobuf;
use serde_derive::{Deserialize, Serialize};

use crate::clients::ics06_solomachine::client_state::{
    ClientState as SmClientState, SOLOMACHINE_CLIENT_STATE_TYPE_URL,
};
use crate::clients::ics07_tendermint::client_state::{
    ClientState as TmClientState, TENDERMINT_CLIENT_STATE_TYPE_URL,
};
use crate::clients::ics09_localhost::client_state::{
    ClientState as LocalhostClientState, LOCALHOST_CLIENT_STATE_TYPE_URL,
};
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::error::Error;
use crate::core::ics02_client::height::Height;
use crate::core::ics02_client::registry::AnyUnpacker;
use crate::dynamic_typing::CachedAny;

/// Capabilities the client registry relies on for every light client state.
pub trait ClientState: Clone + Debug + Send + Sync {
    /// Type of client associated with this state (eg. Tendermint)
    fn client_type(&self) -> ClientType;

    /// Latest height the client was updated to
    fn latest_height(&self) -> Height;

    /// Stateless validation of the client parameters.
    fn validate(&self) -> Result<(), Error>;
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AnyClientState {
    Tendermint(TmClientState),
    Solomachine(SmClientState),
    Localhost(LocalhostClientState),
}

impl AnyClientState {
    pub fn type_url(&self) -> &'static str {
        match self {
            Self::Tendermint(_) => TENDERMINT_CLIENT_STATE_TYPE_URL,
            Self::Solomachine(_) => SOLOMACHINE_CLIENT_STATE_TYPE_URL,
            Self::Localhost(_) => LOCALHOST_CLIENT_STATE_TYPE_URL,
        }
    }
}

impl ClientState for AnyClientState {
    fn client_type(&self) -> ClientType {
        match self {
            Self::Tendermint(state) => state.client_type(),
            Self::Solomachine(state) => state.client_type(),
            Self::Localhost(state) => state.client_type(),
        }
    }

    fn latest_height(&self) -> Height {
        match self {
            Self::Tendermint(state) => state.latest_height(),
            Self::Solomachine(state) => state.latest_height(),
            Self::Localhost(state) => state.latest_height(),
        }
    }

    fn validate(&self) -> Result<(), Error> {
        match self {
            Self::Tendermint(state) => state.validate(),
            Self::Solomachine(state) => state.validate(),
            Self::Localhost(state) => state.validate(),
        }
    }
}

impl TryFrom<Any> for AnyClientState {
    type Error = Error;

    fn try_from(raw: Any) -> Result<Self, Self::Error> {
        match raw.type_url.as_str() {
            TENDERMINT_CLIENT_STATE_TYPE_URL => Ok(AnyClientState::Tendermint(
                Protobuf::<RawTmClientState>::decode_vec(&raw.value)
                    .map_err(Error::decode_raw_client_state)?,
            )),

            SOLOMACHINE_CLIENT_STATE_TYPE_URL => Ok(AnyClientState::Solomachine(
                Protobuf::<RawSmClientState>::decode_vec(&raw.value)
                    .map_err(Error::decode_raw_client_state)?,
            )),

            LOCALHOST_CLIENT_STATE_TYPE_URL => Ok(AnyClientState::Localhost(
                Protobuf::<RawLocalhostClientState>::decode_vec(&raw.value)
                    .map_err(Error::decode_raw_client_state)?,
            )),

            _ => Err(Error::unregistered_client_state_type(raw.type_url)),
        }
    }
}

impl From<AnyClientState> for Any {
    fn from(value: AnyClientState) -> Self {
        match value {
            AnyClientState::Tendermint(value) => value.into(),
            AnyClientState::Solomachine(value) => value.into(),
            AnyClientState::Localhost(value) => value.into(),
        }
    }
}

impl From<TmClientState> for AnyClientState {
    fn from(cs: TmClientState) -> Self {
        Self::Tendermint(cs)
    }
}

impl From<SmClientState> for AnyClientState {
    fn from(cs: SmClientState) -> Self {
        Self::Solomachine(cs)
    }
}

impl From<LocalhostClientState> for AnyClientState {
    fn from(cs: LocalhostClientState) -> Self {
        Self::Localhost(cs)
    }
}

/// A client state paired with the identifier it is stored under.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentifiedClientState {
    pub client_id: String,
    pub client_state: CachedAny<AnyClientState>,
}

impl IdentifiedClientState {
    pub fn new(client_id: impl Into<String>, client_state: AnyClientState) -> Self {
        Self {
            client_id: client_id.into(),
            client_state: CachedAny::packed(client_state),
        }
    }

    /// Builds an entry whose payload still has to be unpacked.
    pub fn from_any(client_id: impl Into<String>, client_state: Any) -> Self {
        Self {
            client_id: client_id.into(),
            client_state: CachedAny::new(client_state),
        }
    }

    /// Resolves the client state payload through `unpacker`.
    pub fn unpack_interfaces<U>(&mut self, unpacker: &U) -> Result<(), Error>
    where
        U: AnyUnpacker + ?Sized,
    {
        self.client_state
            .unpack_with(|any| unpacker.unpack_client_state(any))
            .map(|_| ())
    }
}

impl Protobuf<RawIdentifiedClientState> for IdentifiedClientState {}

impl TryFrom<RawIdentifiedClientState> for IdentifiedClientState {
    type Error = Error;

    fn try_from(raw: RawIdentifiedClientState) -> Result<Self, Self::Error> {
        let client_state = raw
            .client_state
            .ok_or_else(|| Error::missing_raw_client_state(raw.client_id.clone()))?;

        Ok(Self::from_any(raw.client_id, client_state))
    }
}

impl From<IdentifiedClientState> for RawIdentifiedClientState {
    fn from(value: IdentifiedClientState) -> Self {
        RawIdentifiedClientState {
            client_id: value.client_id,
            client_state: Some(value.client_state.into()),
        }
    }
}
