//! Resolution of type-tagged client and consensus state payloads.

use std::collections::BTreeMap;

use ibc_genesis_proto::google::protobuf::Any;
use tracing::{debug, trace};

use crate::clients::ics06_solomachine::client_state::SOLOMACHINE_CLIENT_STATE_TYPE_URL;
use crate::clients::ics06_solomachine::consensus_state::SOLOMACHINE_CONSENSUS_STATE_TYPE_URL;
use crate::clients::ics07_tendermint::client_state::TENDERMINT_CLIENT_STATE_TYPE_URL;
use crate::clients::ics07_tendermint::consensus_state::TENDERMINT_CONSENSUS_STATE_TYPE_URL;
use crate::clients::ics09_localhost::client_state::LOCALHOST_CLIENT_STATE_TYPE_URL;
use crate::core::ics02_client::client_state::AnyClientState;
use crate::core::ics02_client::consensus_state::AnyConsensusState;
use crate::core::ics02_client::error::Error;

/// Turns opaque `Any` payloads into concrete client and consensus states.
pub trait AnyUnpacker {
    fn unpack_client_state(&self, any: &Any) -> Result<AnyClientState, Error>;

    fn unpack_consensus_state(&self, any: &Any) -> Result<AnyConsensusState, Error>;
}

pub type ClientStateDecoder = fn(Any) -> Result<AnyClientState, Error>;

pub type ConsensusStateDecoder = fn(Any) -> Result<AnyConsensusState, Error>;

/// Registry of the payload decoders known to this chain, keyed by type URL.
///
/// Only registered type URLs resolve; any other payload is rejected even if
/// [`AnyClientState`] would know how to decode it.
#[derive(Clone, Debug)]
pub struct ClientRegistry {
    client_states: BTreeMap<String, ClientStateDecoder>,
    consensus_states: BTreeMap<String, ConsensusStateDecoder>,
}

impl ClientRegistry {
    /// A registry that resolves nothing.
    pub fn empty() -> Self {
        Self {
            client_states: BTreeMap::new(),
            consensus_states: BTreeMap::new(),
        }
    }

    pub fn register_client_state(
        &mut self,
        type_url: impl Into<String>,
        decoder: ClientStateDecoder,
    ) -> &mut Self {
        self.client_states.insert(type_url.into(), decoder);
        self
    }

    pub fn register_consensus_state(
        &mut self,
        type_url: impl Into<String>,
        decoder: ConsensusStateDecoder,
    ) -> &mut Self {
        self.consensus_states.insert(type_url.into(), decoder);
        self
    }

    pub fn is_registered(&self, type_url: &str) -> bool {
        self.client_states.contains_key(type_url) || self.consensus_states.contains_key(type_url)
    }
}

impl Default for ClientRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();

        for type_url in [
            TENDERMINT_CLIENT_STATE_TYPE_URL,
            SOLOMACHINE_CLIENT_STATE_TYPE_URL,
            LOCALHOST_CLIENT_STATE_TYPE_URL,
        ] {
            registry.register_client_state(type_url, AnyClientState::try_from);
        }

        for type_url in [
            TENDERMINT_CONSENSUS_STATE_TYPE_URL,
            SOLOMACHINE_CONSENSUS_STATE_TYPE_URL,
        ] {
            registry.register_consensus_state(type_url, AnyConsensusState::try_from);
        }

        registry
    }
}

impl AnyUnpacker for ClientRegistry {
    fn unpack_client_state(&self, any: &Any) -> Result<AnyClientState, Error> {
        let decode = self
            .client_states
            .get(&any.type_url)
            .ok_or_else(|| Error::unregistered_client_state_type(any.type_url.clone()))?;

        trace!("resolving client state of type {}", any.type_url);

        decode(any.clone())
    }

    fn unpack_consensus_state(&self, any: &Any) -> Result<AnyConsensusState, Error> {
        let decode = self
            .consensus_states
            .get(&any.type_url)
            .ok_or_else(|| Error::unregistered_consensus_state_type(any.type_url.clone()))?;

        trace!("resolving consensus state of type {}", any.type_url);

        decode(any.clone()).map_err(|e| {
            debug!("failed to decode consensus state of type {}: {}", any.type_url, e);
            e
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ics02_client::error::ErrorDetail;
    use crate::test_utils::{dummy_sm_consensus_state, dummy_tm_client_state};
    use test_log::test;

    #[test]
    fn default_registry_resolves_builtin_types() {
        let registry = ClientRegistry::default();

        let client_state = AnyClientState::from(dummy_tm_client_state());
        let resolved = registry
            .unpack_client_state(&client_state.clone().into())
            .unwrap();
        assert_eq!(resolved, client_state);

        let consensus_state = AnyConsensusState::from(dummy_sm_consensus_state());
        let resolved = registry
            .unpack_consensus_state(&consensus_state.clone().into())
            .unwrap();
        assert_eq!(resolved, consensus_state);
    }

    #[test]
    fn unregistered_type_is_rejected() {
        let mut registry = ClientRegistry::empty();
        registry.register_consensus_state(
            TENDERMINT_CONSENSUS_STATE_TYPE_URL,
            AnyConsensusState::try_from,
        );

        assert!(!registry.is_registered(TENDERMINT_CLIENT_STATE_TYPE_URL));
        assert!(registry.is_registered(TENDERMINT_CONSENSUS_STATE_TYPE_URL));

        let any = AnyClientState::from(dummy_tm_client_state()).into();
        let err = registry.unpack_client_state(&any).unwrap_err();
        assert!(matches!(
            err.detail(),
            ErrorDetail::UnregisteredClientStateType(_)
        ));
    }

    #[test]
    fn client_state_url_is_not_resolved_as_consensus_state() {
        let registry = ClientRegistry::default();

        let any = AnyClientState::from(dummy_tm_client_state()).into();
        let err = registry.unpack_consensus_state(&any).unwrap_err();
        assert!(matches!(
            err.detail(),
            ErrorDetail::UnregisteredConsensusStateType(_)
        ));
    }
}
