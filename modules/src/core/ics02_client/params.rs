use std::collections::HashSet;

use ibc_genesis_proto::ibc::core::client::v1::Params as RawParams;
use ibc_genesis_proto::Protobuf;
use serde_derive::{Deserialize, Serialize};

use crate::core::ics02_client::error::Error;

/// Light client parameters of the client registry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Params {
    /// Client types which may be created and interacted with. A single
    /// [`Params::ALLOW_ALL_CLIENTS`] entry allows every client type.
    pub allowed_clients: Vec<String>,
}

impl Params {
    /// Wildcard allowing every client type.
    pub const ALLOW_ALL_CLIENTS: &'static str = "*";

    pub fn new<I, S>(allowed_clients: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_clients: allowed_clients.into_iter().map(Into::into).collect(),
        }
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.allowed_clients.len() > 1
            && self
                .allowed_clients
                .iter()
                .any(|client_type| client_type == Self::ALLOW_ALL_CLIENTS)
        {
            return Err(Error::invalid_params(format!(
                "allow list must have only one element because the allow all clients wildcard ({}) is present",
                Self::ALLOW_ALL_CLIENTS
            )));
        }

        let mut found = HashSet::with_capacity(self.allowed_clients.len());

        for (i, client_type) in self.allowed_clients.iter().enumerate() {
            if client_type.trim().is_empty() {
                return Err(Error::invalid_params(format!(
                    "client type {i} cannot be blank"
                )));
            }

            if !found.insert(client_type.as_str()) {
                return Err(Error::invalid_params(format!(
                    "duplicate client type: {client_type}"
                )));
            }
        }

        Ok(())
    }

    pub fn is_allowed_client(&self, client_type: &str) -> bool {
        match self.allowed_clients.as_slice() {
            [only] if only == Self::ALLOW_ALL_CLIENTS => true,
            allowed => allowed.iter().any(|allowed| allowed == client_type),
        }
    }
}

impl Default for Params {
    fn default() -> Self {
        Self::new([Self::ALLOW_ALL_CLIENTS])
    }
}

impl Protobuf<RawParams> for Params {}

impl From<RawParams> for Params {
    fn from(raw: RawParams) -> Self {
        Self {
            allowed_clients: raw.allowed_clients,
        }
    }
}

impl From<Params> for RawParams {
    fn from(value: Params) -> Self {
        Self {
            allowed_clients: value.allowed_clients,
        }
    }
}
