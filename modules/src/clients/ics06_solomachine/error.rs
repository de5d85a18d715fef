use flex_error::define_error;

use crate::core::ics02_client::error::Error as Ics02Error;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        ZeroSequence
            |_| { "sequence cannot be 0" },

        MissingConsensusState
            |_| { "consensus state cannot be nil" },

        ZeroTimestamp
            |_| { "timestamp cannot be 0" },

        BlankDiversifier
            |_| { "diversifier cannot contain only spaces" },

        MissingPublicKey
            |_| { "public key cannot be empty" },
    }
}

impl From<Error> for Ics02Error {
    fn from(e: Error) -> Self {
        Self::client_specific(e.to_string())
    }
}
