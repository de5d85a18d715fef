//! ICS 24: Host defines the identifier requirements that a state machine
//! hosting an IBC-enabled chain must enforce.

pub mod error;
pub mod identifier;
pub mod validate;
