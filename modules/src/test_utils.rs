use core::time::Duration;

use ibc_genesis_proto::google::protobuf::Any;

use crate::clients::ics06_solomachine::client_state::ClientState as SmClientState;
use crate::clients::ics06_solomachine::consensus_state::ConsensusState as SmConsensusState;
use crate::clients::ics07_tendermint::client_state::{AllowUpdate, ClientState as TmClientState};
use crate::clients::ics07_tendermint::consensus_state::{
    ConsensusState as TmConsensusState, Timestamp, VALIDATORS_HASH_LEN,
};
use crate::clients::ics07_tendermint::trust_threshold::TrustThreshold;
use crate::clients::ics09_localhost::client_state::ClientState as LocalhostClientState;
use crate::core::ics02_client::height::Height;

/// Type URL of the secp256k1 public key carried by dummy solo machine states.
pub const DUMMY_PUBLIC_KEY_TYPE_URL: &str = "/cosmos.crypto.secp256k1.PubKey";

pub fn dummy_tm_client_state() -> TmClientState {
    TmClientState::new(
        "testchain-1".to_string(),
        TrustThreshold::ONE_THIRD,
        Duration::from_secs(64000),
        Duration::from_secs(128000),
        Duration::from_secs(3),
        Height::new(1, 10),
        vec!["upgrade".to_string(), "upgradedIBCState".to_string()],
        AllowUpdate::default(),
    )
}

pub fn dummy_tm_consensus_state() -> TmConsensusState {
    TmConsensusState::new(
        b"root".to_vec(),
        Timestamp::from_unix_seconds(1_600_000_000),
        vec![0xab; VALIDATORS_HASH_LEN],
    )
}

pub fn dummy_public_key() -> Any {
    Any {
        type_url: DUMMY_PUBLIC_KEY_TYPE_URL.to_string(),
        value: vec![0x02; 33],
    }
}

pub fn dummy_sm_consensus_state() -> SmConsensusState {
    SmConsensusState::new(dummy_public_key(), "diversifier", 10)
}

pub fn dummy_sm_client_state(sequence: u64) -> SmClientState {
    SmClientState::new(sequence, dummy_sm_consensus_state())
}

pub fn dummy_localhost_client_state() -> LocalhostClientState {
    LocalhostClientState::new(Height::new(1, 10))
}
