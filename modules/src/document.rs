//! Reading and writing client genesis documents as JSON.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use flex_error::{define_error, TraceError};
use tracing::debug;

use crate::core::ics02_client::error::Error as Ics02Error;
use crate::core::ics02_client::genesis::GenesisState;
use crate::core::ics02_client::registry::AnyUnpacker;

define_error! {
    Error {
        Io
            [ TraceError<std::io::Error> ]
            | _ | { "I/O error on genesis document" },

        Decode
            [ TraceError<serde_json::Error> ]
            | _ | { "invalid genesis document" },

        Encode
            [ TraceError<serde_json::Error> ]
            | _ | { "failed to encode genesis document" },

        Genesis
            [ Ics02Error ]
            | _ | { "invalid client genesis state" },
    }
}

/// Parse a genesis document from its JSON text. Payloads are left unresolved.
pub fn from_json(json: &str) -> Result<GenesisState, Error> {
    serde_json::from_str(json).map_err(Error::decode)
}

/// Attempt to load and parse the JSON genesis document at `path`.
pub fn load(path: impl AsRef<Path>) -> Result<GenesisState, Error> {
    let json = fs::read_to_string(&path).map_err(Error::io)?;

    debug!("loaded genesis document from {}", path.as_ref().display());

    from_json(&json)
}

/// Load the document at `path`, resolve its payloads with `unpacker` and
/// validate the result.
pub fn load_validated<U>(path: impl AsRef<Path>, unpacker: &U) -> Result<GenesisState, Error>
where
    U: AnyUnpacker + ?Sized,
{
    let mut genesis = load(path)?;

    genesis
        .unpack_interfaces(unpacker)
        .map_err(Error::genesis)?;
    genesis.validate().map_err(Error::genesis)?;

    Ok(genesis)
}

/// Serialize the given `GenesisState` as JSON to the file at `path`.
///
/// Consensus state groups are written sorted by client identifier so that
/// exports are deterministic.
pub fn store(genesis: &GenesisState, path: impl AsRef<Path>) -> Result<(), Error> {
    let mut file = if path.as_ref().exists() {
        fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&path)
    } else {
        File::create(&path)
    }
    .map_err(Error::io)?;

    let mut genesis = genesis.clone();
    genesis.clients_consensus.sort();

    store_writer(&genesis, &mut file)?;

    debug!("stored genesis document at {}", path.as_ref().display());

    Ok(())
}

/// Serialize the given `GenesisState` as pretty JSON to the given writer.
pub fn store_writer(genesis: &GenesisState, mut writer: impl Write) -> Result<(), Error> {
    let json = serde_json::to_string_pretty(genesis).map_err(Error::encode)?;

    writeln!(writer, "{}", json).map_err(Error::io)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ics02_client::client_state::IdentifiedClientState;
    use crate::core::ics02_client::params::Params;
    use crate::test_utils::dummy_tm_client_state;
    use test_log::test;

    #[test]
    fn empty_document_uses_defaults() {
        let genesis = from_json("{}").unwrap();
        assert_eq!(genesis, GenesisState::default());
        assert_eq!(genesis.params, Params::default());
    }

    #[test]
    fn malformed_document_is_rejected() {
        let err = from_json(r#"{"clients": 3}"#).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::Decode(_)));
    }

    #[test]
    fn store_writer_then_parse() {
        let genesis = GenesisState {
            clients: vec![IdentifiedClientState::new(
                "07-tendermint-0",
                dummy_tm_client_state().into(),
            )],
            next_client_sequence: 1,
            ..GenesisState::default()
        };

        let mut buffer = Vec::new();
        store_writer(&genesis, &mut buffer).unwrap();

        let json = String::from_utf8(buffer).unwrap();
        assert!(json.contains("/ibc.lightclients.tendermint.v1.ClientState"));
        assert_eq!(from_json(&json).unwrap(), genesis);
    }
}
