use ibc_genesis_proto::google::protobuf::Any;
use ibc_genesis_proto::ibc::lightclients::localhost::v2::ClientState as RawClientState;
use ibc_genesis_proto::Protobuf;
use serde_derive::{Deserialize, Serialize};

use crate::core::ics02_client::client_state::ClientState as Ics02ClientState;
use crate::core::ics02_client::client_type::ClientType;
use crate::core::ics02_client::error::Error;
use crate::core::ics02_client::height::Height;

pub const LOCALHOST_CLIENT_STATE_TYPE_URL: &str = "/ibc.lightclients.localhost.v2.ClientState";

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientState {
    pub latest_height: Height,
}

impl ClientState {
    pub fn new(latest_height: Height) -> Self {
        Self { latest_height }
    }
}

impl Ics02ClientState for ClientState {
    fn client_type(&self) -> ClientType {
        ClientType::Localhost
    }

    fn latest_height(&self) -> Height {
        self.latest_height
    }

    fn validate(&self) -> Result<(), Error> {
        if self.latest_height.revision_height == 0 {
            return Err(Error::client_specific(format!(
                "local chain height {} cannot have a zero revision height",
                self.latest_height
            )));
        }

        Ok(())
    }
}

impl Protobuf<RawClientState> for ClientState {}

impl From<RawClientState> for ClientState {
    fn from(raw: RawClientState) -> Self {
        Self {
            latest_height: raw.latest_height.unwrap_or_default().into(),
        }
    }
}

impl From<ClientState> for RawClientState {
    fn from(value: ClientState) -> Self {
        Self {
            latest_height: Some(value.latest_height.into()),
        }
    }
}

impl From<ClientState> for Any {
    fn from(client_state: ClientState) -> Self {
        Any {
            type_url: LOCALHOST_CLIENT_STATE_TYPE_URL.to_string(),
            value: Protobuf::<RawClientState>::encode_vec(&client_state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn zero_revision_height_is_invalid() {
        assert!(ClientState::new(Height::new(1, 10)).validate().is_ok());
        assert!(ClientState::new(Height::new(1, 0)).validate().is_err());
    }
}
