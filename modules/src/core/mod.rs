//! Core IBC host modules.

pub mod ics02_client;
pub mod ics24_host;
