use flex_error::{define_error, TraceError};
use ibc_genesis_proto::protobuf::Error as ProtoError;

use crate::core::ics24_host::error::ValidationError;

define_error! {
    #[derive(Debug, PartialEq, Eq)]
    Error {
        InvalidConsensus
            { reason: String }
            | e | { format_args!("invalid consensus state: {}", e.reason) },

        InvalidClientType
            { reason: String }
            | e | { format_args!("invalid client type: {}", e.reason) },

        InvalidClientMetadata
            { reason: String }
            | e | { format_args!("invalid client metadata: {}", e.reason) },

        MalformedIdentifier
            {
                client_id: String,
                reason: String,
            }
            | e | { format_args!("malformed client identifier {0}: {1}", e.client_id, e.reason) },

        InvalidClientTypeFormat
            { client_type: String }
            [ ValidationError ]
            | e | { format_args!("client type {0} cannot produce valid client identifiers", e.client_type) },

        InvalidParams
            { reason: String }
            | e | { format_args!("invalid client params: {}", e.reason) },

        InvalidGenesisMetadata
            { reason: String }
            | e | { format_args!("invalid genesis metadata: {}", e.reason) },

        UnregisteredClientStateType
            { type_url: String }
            | e | { format_args!("no client state decoder registered for type {}", e.type_url) },

        UnregisteredConsensusStateType
            { type_url: String }
            | e | { format_args!("no consensus state decoder registered for type {}", e.type_url) },

        DecodeRawClientState
            [ TraceError<ProtoError> ]
            | _ | { "error decoding raw client state" },

        DecodeRawConsensusState
            [ TraceError<ProtoError> ]
            | _ | { "error decoding raw consensus state" },

        MissingRawClientState
            { client_id: String }
            | e | { format_args!("missing raw client state for client {}", e.client_id) },

        MissingRawConsensusState
            { client_id: String }
            | e | { format_args!("missing raw consensus state for client {}", e.client_id) },

        MissingRawHeight
            { client_id: String }
            | e | { format_args!("missing consensus state height for client {}", e.client_id) },

        UnknownClientType
            { client_type: String }
            | e | { format_args!("unknown client type: {0}", e.client_type) },

        ClientSpecific
            { description: String }
            | e | { format_args!("client specific error: {0}", e.description) },
    }
}
