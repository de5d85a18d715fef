//! ICS 02: Client implementation for verifying remote IBC-enabled chains.
//!
//! This crate only covers the genesis side of the client submodule: the
//! identifier grammar, payload resolution, and the consistency checks run on
//! the bootstrap state.

pub mod client_consensus;
pub mod client_state;
pub mod client_type;
pub mod consensus_state;
pub mod error;
pub mod genesis;
pub mod height;
pub mod metadata;
pub mod params;
pub mod registry;
