//! Built-in light client payloads understood by the client registry.

pub mod ics06_solomachine;
pub mod ics07_tendermint;
pub mod ics09_localhost;
