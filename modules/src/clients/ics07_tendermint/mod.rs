//! ICS 07: Tendermint Client implements a client verification algorithm for blockchains which use
//! the Tendermint consensus algorithm.

pub mod client_state;
pub mod consensus_state;
pub mod error;
pub mod trust_threshold;

pub const TENDERMINT_CLIENT_TYPE: &str = "07-tendermint";
