//! Genesis state of the client submodule and its consistency checks.

use core::str::FromStr;
use std::collections::HashMap;

use ibc_genesis_proto::ibc::core::client::v1::GenesisState as RawGenesisState;
use ibc_genesis_proto::Protobuf;
use serde_derive::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::ics02_client::client_consensus::{ClientConsensusStates, ClientsConsensusStates};
use crate::core::ics02_client::client_state::{ClientState, IdentifiedClientState};
use crate::core::ics02_client::client_type::{parse_client_identifier, validate_client_type};
use crate::core::ics02_client::consensus_state::ConsensusState;
use crate::core::ics02_client::error::Error;
use crate::core::ics02_client::metadata::IdentifiedGenesisMetadata;
use crate::core::ics02_client::params::Params;
use crate::core::ics02_client::registry::AnyUnpacker;
use crate::core::ics24_host::identifier::ClientId;

/// Bootstrap state of the client registry: the light clients a chain starts
/// with, their consensus state histories and store metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GenesisState {
    pub clients: Vec<IdentifiedClientState>,
    pub clients_consensus: ClientsConsensusStates,
    pub clients_metadata: Vec<IdentifiedGenesisMetadata>,
    pub params: Params,
    pub create_localhost: bool,
    /// Sequence the next created client identifier will use.
    pub next_client_sequence: u64,
}

impl GenesisState {
    pub fn new(
        clients: Vec<IdentifiedClientState>,
        clients_consensus: ClientsConsensusStates,
        clients_metadata: Vec<IdentifiedGenesisMetadata>,
        params: Params,
        create_localhost: bool,
        next_client_sequence: u64,
    ) -> Self {
        Self {
            clients,
            clients_consensus,
            clients_metadata,
            params,
            create_localhost,
            next_client_sequence,
        }
    }

    /// Resolves every client and consensus state payload through `unpacker`.
    ///
    /// Stops at the first payload that fails to resolve and returns that error
    /// as is.
    pub fn unpack_interfaces<U>(&mut self, unpacker: &U) -> Result<(), Error>
    where
        U: AnyUnpacker + ?Sized,
    {
        for client in self.clients.iter_mut() {
            client.unpack_interfaces(unpacker)?;
        }

        self.clients_consensus.unpack_interfaces(unpacker)
    }

    /// Checks that clients, consensus states, metadata, params and the next
    /// client sequence are consistent with one another.
    ///
    /// Payloads must have been resolved with [`Self::unpack_interfaces`]
    /// first; unresolved payloads are reported as invalid.
    pub fn validate(&self) -> Result<(), Error> {
        debug!(
            clients = self.clients.len(),
            consensus_groups = self.clients_consensus.len(),
            metadata_groups = self.clients_metadata.len(),
            "validating client genesis state"
        );

        // Must stay below the next sequence handed out for client identifiers.
        let mut max_sequence: u64 = 0;

        self.params.validate()?;

        let mut valid_clients: HashMap<&str, &'static str> = HashMap::new();

        for (i, client) in self.clients.iter().enumerate() {
            let client_id = ClientId::from_str(&client.client_id).map_err(|e| {
                Error::invalid_consensus(format!(
                    "state identifier {} index {}: {}",
                    client.client_id, i, e
                ))
            })?;

            let client_state = client.client_state.cached_value().ok_or_else(|| {
                Error::invalid_consensus(format!(
                    "invalid client state with ID {}",
                    client.client_id
                ))
            })?;

            let state_type = client_state.client_type().as_str();

            if !self.params.is_allowed_client(state_type) {
                return Err(Error::invalid_client_type(format!(
                    "client type {} not allowed by genesis params",
                    state_type
                )));
            }

            client_state.validate().map_err(|e| {
                Error::invalid_client_metadata(format!(
                    "invalid client {} index {}: {}",
                    client.client_id, i, e
                ))
            })?;

            let (client_type, sequence) = parse_client_identifier(client_id.as_str())?;

            if client_type != state_type {
                return Err(Error::invalid_client_type(format!(
                    "client state type {} does not equal client type in client identifier {}",
                    state_type, client_type
                )));
            }

            validate_client_type(&client_type)?;

            max_sequence = max_sequence.max(sequence);

            trace!(%client_id, client_type = state_type, sequence, "accepted genesis client");

            valid_clients.insert(client.client_id.as_str(), state_type);
        }

        for group in self.clients_consensus.iter() {
            self.validate_consensus_group(group, &valid_clients)?;
        }

        for group in self.clients_metadata.iter() {
            if !valid_clients.contains_key(group.client_id.as_str()) {
                return Err(Error::invalid_client_metadata(format!(
                    "metadata in genesis has a client id {} that does not map to a genesis client",
                    group.client_id
                )));
            }

            for (i, metadata) in group.client_metadata.iter().enumerate() {
                metadata.validate().map_err(|e| {
                    Error::invalid_client_metadata(format!(
                        "invalid client metadata {:?} clientID {} index {}: {}",
                        metadata, group.client_id, i, e
                    ))
                })?;
            }
        }

        // A zero maximum also covers identifiers like `07-tendermint-0`, so
        // the check is skipped rather than demanding a next sequence of 1.
        if max_sequence == 0 {
            if !self.clients.is_empty() {
                warn!(
                    next_client_sequence = self.next_client_sequence,
                    "maximum client identifier sequence is 0, skipping next client sequence check"
                );
            }
        } else if max_sequence >= self.next_client_sequence {
            return Err(Error::invalid_client_metadata(format!(
                "next client identifier sequence {} must be greater than the maximum sequence used in the provided client identifiers {}",
                self.next_client_sequence, max_sequence
            )));
        }

        debug!("client genesis state is valid");

        Ok(())
    }

    fn validate_consensus_group(
        &self,
        group: &ClientConsensusStates,
        valid_clients: &HashMap<&str, &'static str>,
    ) -> Result<(), Error> {
        let client_type = valid_clients
            .get(group.client_id.as_str())
            .copied()
            .ok_or_else(|| {
                Error::invalid_consensus(format!(
                    "consensus state in genesis has a client id {} that does not map to a genesis client",
                    group.client_id
                ))
            })?;

        for (i, entry) in group.consensus_states.iter().enumerate() {
            if entry.height.is_zero() {
                return Err(Error::invalid_consensus(format!(
                    "consensus state height cannot be zero (client {} index {})",
                    group.client_id, i
                )));
            }

            let consensus_state = entry.consensus_state.cached_value().ok_or_else(|| {
                Error::invalid_consensus(format!(
                    "invalid consensus state with client ID {} at height {}",
                    group.client_id, entry.height
                ))
            })?;

            consensus_state.validate_basic().map_err(|e| {
                Error::invalid_client_metadata(format!(
                    "invalid client consensus state clientID {} index {}: {}",
                    group.client_id, i, e
                ))
            })?;

            let cs_type = consensus_state.client_type().as_str();
            if cs_type != client_type {
                return Err(Error::invalid_consensus(format!(
                    "consensus state client type {} does not equal client state client type {}",
                    cs_type, client_type
                )));
            }
        }

        Ok(())
    }
}

impl Protobuf<RawGenesisState> for GenesisState {}

impl TryFrom<RawGenesisState> for GenesisState {
    type Error = Error;

    fn try_from(raw: RawGenesisState) -> Result<Self, Self::Error> {
        let clients = raw
            .clients
            .into_iter()
            .map(IdentifiedClientState::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let clients_consensus = raw
            .clients_consensus
            .into_iter()
            .map(ClientConsensusStates::try_from)
            .collect::<Result<ClientsConsensusStates, _>>()?;

        Ok(Self {
            clients,
            clients_consensus,
            clients_metadata: raw.clients_metadata.into_iter().map(Into::into).collect(),
            // An absent params message is an empty allowlist, not the default.
            params: raw
                .params
                .map(Params::from)
                .unwrap_or_else(|| Params::new(Vec::<String>::new())),
            create_localhost: raw.create_localhost,
            next_client_sequence: raw.next_client_sequence,
        })
    }
}

impl From<GenesisState> for RawGenesisState {
    fn from(value: GenesisState) -> Self {
        Self {
            clients: value.clients.into_iter().map(Into::into).collect(),
            clients_consensus: value
                .clients_consensus
                .into_iter()
                .map(Into::into)
                .collect(),
            clients_metadata: value.clients_metadata.into_iter().map(Into::into).collect(),
            params: Some(value.params.into()),
            create_localhost: value.create_localhost,
            next_client_sequence: value.next_client_sequence,
        }
    }
}
