use core::fmt::{Display, Error as FmtError, Formatter};
use core::str::FromStr;

use serde_derive::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validate::validate_client_identifier;

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClientId(String);

impl ClientId {
    /// Builds a new client identifier. Client identifiers are deterministically formed from two
    /// elements: a prefix derived from the client type `client_type`, and a monotonically
    /// increasing `counter`; these are separated by a dash "-".
    ///
    /// ```
    /// # use ibc_client_genesis::core::ics24_host::identifier::ClientId;
    /// let tm_client_id = ClientId::new("07-tendermint", 0);
    /// assert!(tm_client_id.is_ok());
    /// tm_client_id.map(|id| { assert_eq!(id.as_str(), "07-tendermint-0") });
    /// ```
    pub fn new(client_type: &str, counter: u64) -> Result<Self, ValidationError> {
        let id = format!("{client_type}-{counter}");
        Self::from_str(id.as_str())
    }

    /// Get this identifier as a borrowed `&str`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// This implementation provides a `to_string` method.
impl Display for ClientId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClientId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate_client_identifier(s).map(|_| Self(s.to_string()))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn client_id_is_formed_from_type_and_counter() {
        let id = ClientId::new("07-tendermint", 42).unwrap();
        assert_eq!(id.as_str(), "07-tendermint-42");
    }

    #[test]
    fn client_id_rejects_short_type() {
        // "a-1" is shorter than the minimum client identifier length
        assert!(ClientId::new("a", 1).is_err());
    }
}
