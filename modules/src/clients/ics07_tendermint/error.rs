use flex_error::define_error;

use crate::core::ics02_client::error::Error as Ics02Error;
use crate::core::ics02_client::height::Height;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        InvalidChainId
            { chain_id: String, reason: String }
            |e| { format_args!("invalid chain identifier {0}: {1}", e.chain_id, e.reason) },

        InvalidTrustThreshold
            { numerator: u64, denominator: u64 }
            |e| { format_args!("trust level {0}/{1} must be within [1/3, 1]", e.numerator, e.denominator) },

        InvalidTrustingPeriod
            { reason: String }
            |e| { format_args!("invalid trusting period: {}", e.reason) },

        InvalidUnbondingPeriod
            { reason: String }
            |e| { format_args!("invalid unbonding period: {}", e.reason) },

        InvalidMaxClockDrift
            |_| { "max clock drift must be greater than zero" },

        InvalidLatestHeight
            { height: Height }
            |e| { format_args!("tendermint client's latest height {} cannot be zero", e.height) },

        MismatchedRevision
            {
                height_revision: u64,
                chain_id: String,
                chain_id_revision: u64,
            }
            |e| {
                format_args!("latest height revision number {0} must match the revision number of chain-id {1}: {2}",
                    e.height_revision, e.chain_id, e.chain_id_revision)
            },

        InvalidUpgradePath
            { index: usize }
            |e| { format_args!("key in upgrade path at index {} cannot be empty", e.index) },

        InvalidTimestamp
            { reason: String }
            |e| { format_args!("invalid timestamp: {}", e.reason) },

        EmptyCommitmentRoot
            |_| { "root cannot be empty" },

        InvalidNextValidatorsHash
            { length: usize }
            |e| { format_args!("next validators hash must be empty or 32 bytes, got {}", e.length) },
    }
}

impl From<Error> for Ics02Error {
    fn from(e: Error) -> Self {
        Self::client_specific(e.to_string())
    }
}
