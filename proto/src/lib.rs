//! Protobuf definitions for the IBC client genesis state.
//!
//! The `prost` modules below are laid out after the protobuf package names so
//! that the generated code can keep its `super::` references between packages.

#![deny(trivial_casts, trivial_numeric_casts, unused_import_braces)]
#![allow(clippy::large_enum_variant)]
#![forbid(unsafe_code)]

pub mod protobuf;

#[cfg(feature = "serde")]
pub mod base64;

pub use protobuf::Protobuf;

pub mod google {
    pub mod protobuf {
        include!("prost/google.protobuf.rs");

        pub use prost_types::{Duration, Timestamp};
    }
}

pub mod ibc {
    pub mod core {
        pub mod client {
            pub mod v1 {
                include!("prost/ibc.core.client.v1.rs");
            }
        }
        pub mod commitment {
            pub mod v1 {
                include!("prost/ibc.core.commitment.v1.rs");
            }
        }
    }
    pub mod lightclients {
        pub mod localhost {
            pub mod v2 {
                include!("prost/ibc.lightclients.localhost.v2.rs");
            }
        }
        pub mod solomachine {
            pub mod v3 {
                include!("prost/ibc.lightclients.solomachine.v3.rs");
            }
        }
        pub mod tendermint {
            pub mod v1 {
                include!("prost/ibc.lightclients.tendermint.v1.rs");
            }
        }
    }
}
