use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use super::error::Error;
use crate::clients::ics06_solomachine::SOLOMACHINE_CLIENT_TYPE;
use crate::clients::ics07_tendermint::TENDERMINT_CLIENT_TYPE;
use crate::clients::ics09_localhost::{LOCALHOST_CLIENT_ID, LOCALHOST_CLIENT_TYPE};
use crate::core::ics24_host::identifier::ClientId;

/// Type of the light client algorithm
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClientType {
    Solomachine,
    Tendermint,
    Localhost,
}

impl ClientType {
    /// Yields the identifier of this client type as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Solomachine => SOLOMACHINE_CLIENT_TYPE,
            Self::Tendermint => TENDERMINT_CLIENT_TYPE,
            Self::Localhost => LOCALHOST_CLIENT_TYPE,
        }
    }
}

impl Display for ClientType {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ClientType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            SOLOMACHINE_CLIENT_TYPE => Ok(Self::Solomachine),
            TENDERMINT_CLIENT_TYPE => Ok(Self::Tendermint),
            LOCALHOST_CLIENT_TYPE => Ok(Self::Localhost),
            _ => Err(Error::unknown_client_type(s.to_string())),
        }
    }
}

/// Formats the client identifier generated for the `sequence`-th client of
/// type `client_type`.
pub fn format_client_identifier(client_type: &str, sequence: u64) -> String {
    format!("{client_type}-{sequence}")
}

/// Splits a client identifier of the form `{client-type}-{N}` into its client
/// type and sequence.
///
/// The localhost client identifier carries no sequence and parses to
/// `("09-localhost", 0)`.
pub fn parse_client_identifier(client_id: &str) -> Result<(String, u64), Error> {
    if client_id == LOCALHOST_CLIENT_ID {
        return Ok((LOCALHOST_CLIENT_TYPE.to_string(), 0));
    }

    let (client_type, sequence) = client_id.rsplit_once('-').ok_or_else(|| {
        Error::malformed_identifier(
            client_id.to_string(),
            "identifier does not contain delimiter `-`".to_string(),
        )
    })?;

    if client_type.trim().is_empty() {
        return Err(Error::malformed_identifier(
            client_id.to_string(),
            "client identifier must be in format `{client-type}-{N}` and client type cannot be blank"
                .to_string(),
        ));
    }

    // `u64::from_str` accepts a leading `+`, which is not part of the grammar
    if sequence.is_empty() || !sequence.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::malformed_identifier(
            client_id.to_string(),
            format!("identifier suffix {sequence} is not a valid number"),
        ));
    }

    let sequence = sequence.parse::<u64>().map_err(|e| {
        Error::malformed_identifier(
            client_id.to_string(),
            format!("identifier suffix {sequence} is not a valid number: {e}"),
        )
    })?;

    Ok((client_type.to_string(), sequence))
}

/// Checks that a client type is non-blank and that every identifier it can
/// generate, from sequence `0` up to `u64::MAX`, is a valid client identifier.
pub fn validate_client_type(client_type: &str) -> Result<(), Error> {
    if client_type.trim().is_empty() {
        return Err(Error::invalid_client_type(
            "client type cannot be blank".to_string(),
        ));
    }

    let smallest_possible_client_id = format_client_identifier(client_type, 0);
    let largest_possible_client_id = format_client_identifier(client_type, u64::MAX);

    ClientId::from_str(&smallest_possible_client_id)
        .and_then(|_| ClientId::from_str(&largest_possible_client_id))
        .map(|_| ())
        .map_err(|e| Error::invalid_client_type_format(client_type.to_string(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ics02_client::error::ErrorDetail;
    use test_log::test;

    #[test]
    fn parse_client_identifiers() {
        struct Test {
            name: &'static str,
            client_id: &'static str,
            expected: Option<(&'static str, u64)>,
        }

        let tests: Vec<Test> = vec![
            Test {
                name: "tendermint client",
                client_id: "07-tendermint-0",
                expected: Some(("07-tendermint", 0)),
            },
            Test {
                name: "large sequence",
                client_id: "06-solomachine-18446744073709551615",
                expected: Some(("06-solomachine", u64::MAX)),
            },
            Test {
                name: "dashes within the client type",
                client_id: "a-b-c-d-7",
                expected: Some(("a-b-c-d", 7)),
            },
            Test {
                name: "localhost",
                client_id: "09-localhost",
                expected: Some(("09-localhost", 0)),
            },
            Test {
                name: "missing delimiter",
                client_id: "tendermint0",
                expected: None,
            },
            Test {
                name: "blank client type",
                client_id: "   -1",
                expected: None,
            },
            Test {
                name: "non numeric suffix",
                client_id: "07-tendermint-abc",
                expected: None,
            },
            Test {
                name: "signed suffix",
                client_id: "07-tendermint-+1",
                expected: None,
            },
            Test {
                name: "trailing dash in client type",
                client_id: "07-tendermint--1",
                expected: Some(("07-tendermint-", 1)),
            },
            Test {
                name: "empty suffix",
                client_id: "07-tendermint-",
                expected: None,
            },
            Test {
                name: "overflowing suffix",
                client_id: "07-tendermint-18446744073709551616",
                expected: None,
            },
        ];

        for test in tests {
            let res = parse_client_identifier(test.client_id);

            match test.expected {
                Some((client_type, sequence)) => {
                    let (parsed_type, parsed_sequence) = res.unwrap_or_else(|e| {
                        panic!("{}: unexpected error {}", test.name, e);
                    });
                    assert_eq!(parsed_type, client_type, "{}", test.name);
                    assert_eq!(parsed_sequence, sequence, "{}", test.name);
                }
                None => {
                    let err = res.expect_err(test.name);
                    assert!(
                        matches!(err.detail(), ErrorDetail::MalformedIdentifier(_)),
                        "{}: unexpected error {}",
                        test.name,
                        err
                    );
                }
            }
        }
    }

    #[test]
    fn format_then_parse() {
        let id = format_client_identifier(ClientType::Tendermint.as_str(), 12);
        assert_eq!(id, "07-tendermint-12");
        assert_eq!(
            parse_client_identifier(&id).unwrap(),
            ("07-tendermint".to_string(), 12)
        );
    }

    #[test]
    fn validate_client_types() {
        assert!(validate_client_type("07-tendermint").is_ok());
        assert!(validate_client_type("06-solomachine").is_ok());

        let err = validate_client_type("  ").unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::InvalidClientType(_)));

        // "tm-0" is shorter than the minimum client identifier length
        let err = validate_client_type("tm").unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::InvalidClientTypeFormat(_)));

        // the largest identifier would exceed the maximum client identifier length
        let err = validate_client_type(&"a".repeat(44)).unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::InvalidClientTypeFormat(_)));

        let err = validate_client_type("07/tendermint").unwrap_err();
        assert!(matches!(err.detail(), ErrorDetail::InvalidClientTypeFormat(_)));
    }

    #[test]
    fn client_type_from_str() {
        for client_type in [
            ClientType::Solomachine,
            ClientType::Tendermint,
            ClientType::Localhost,
        ] {
            assert_eq!(
                ClientType::from_str(client_type.as_str()).unwrap(),
                client_type
            );
        }

        assert!(ClientType::from_str("9999-mock").is_err());
    }
}
