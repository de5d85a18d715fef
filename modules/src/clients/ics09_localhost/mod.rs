//! ICS 09: Loopback Client
//! Loopback client, designed to be used for interaction over the
//! IBC interface with modules present on the same ledger.

pub mod client_state;

pub const LOCALHOST_CLIENT_TYPE: &str = "09-localhost";

/// The localhost client is a singleton stored under its client type.
pub const LOCALHOST_CLIENT_ID: &str = LOCALHOST_CLIENT_TYPE;
