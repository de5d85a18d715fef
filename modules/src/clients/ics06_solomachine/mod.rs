//! ICS 06: Solo Machine Client implements a client verification algorithm for
//! a single signer (a phone, a browser, a laptop) that holds a public key.

pub mod client_state;
pub mod consensus_state;
pub mod error;

pub const SOLOMACHINE_CLIENT_TYPE: &str = "06-solomachine";
