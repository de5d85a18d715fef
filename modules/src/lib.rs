#![allow(clippy::large_enum_variant)]
#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

//! Genesis state of the IBC client submodule.
//!
//! - ICS 02: Client genesis types, payload resolution and validation
//! - ICS 06, 07, 09: structural checks for the built-in client states
//! - ICS 24: Host identifier requirements
//!
//! A genesis document is decoded (from JSON with [`document`] or from
//! protobuf), its client and consensus state payloads are resolved with
//! [`GenesisState::unpack_interfaces`], and the result is checked once with
//! [`GenesisState::validate`].

pub mod clients;
pub mod core;
pub mod document;
pub mod dynamic_typing;

mod serializers;

/// Re-export of ICS 002 Height domain type
pub type Height = crate::core::ics02_client::height::Height;

pub use crate::core::ics02_client::genesis::GenesisState;
pub use crate::core::ics02_client::registry::{AnyUnpacker, ClientRegistry};

#[cfg(any(test, feature = "mocks"))]
pub mod test_utils;
