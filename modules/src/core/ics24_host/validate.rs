use super::error::ValidationError as Error;

/// Path separator (ie. forward slash '/')
const PATH_SEPARATOR: char = '/';
const VALID_SPECIAL_CHARS: &str = "._+-#[]<>";

/// Default validator function for identifiers.
///
/// A valid identifier is non-blank, free of path separators, between `min` and `max`
/// characters long and only made of alphanumerics or one of `._+-#[]<>`.
pub fn validate_identifier(id: &str, min: usize, max: usize) -> Result<(), Error> {
    assert!(max >= min);

    // Check identifier is not empty
    if id.trim().is_empty() {
        return Err(Error::empty());
    }

    // Check identifier does not contain path separators
    if id.contains(PATH_SEPARATOR) {
        return Err(Error::contain_separator(id.to_string()));
    }

    // Check identifier length is between given min/max
    if id.len() < min || id.len() > max {
        return Err(Error::invalid_length(id.to_string(), id.len(), min, max));
    }

    // Check that the identifier comprises only valid characters:
    // - Alphanumeric
    // - `.`, `_`, `+`, `-`, `#`
    // - `[`, `]`, `<`, `>`
    if !id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || VALID_SPECIAL_CHARS.contains(c))
    {
        return Err(Error::invalid_character(id.to_string()));
    }

    // All good!
    Ok(())
}

/// Default validator function for Client identifiers.
///
/// A valid client identifier must be between 9-64 characters.
pub fn validate_client_identifier(id: &str) -> Result<(), Error> {
    validate_identifier(id, 9, 64)
}

#[cfg(test)]
mod tests {
    use super::super::error::ValidationErrorDetail as ErrorDetail;
    use super::*;
    use test_log::test;

    #[test]
    fn parse_invalid_client_id_min() {
        // invalid min client id
        let id = validate_client_identifier("client");
        assert!(id.is_err())
    }

    #[test]
    fn parse_client_id_max() {
        // invalid max client id (test string length is 65)
        let id = validate_client_identifier(
            "f0isrs5enif9e4td3r2jcbxoevhz6u1fthn4aforq7ams52jn5m48eiesfht9ckpn",
        );
        assert!(id.is_err())
    }

    #[test]
    fn parse_client_id_with_separator() {
        let id = validate_client_identifier("07-tendermint/0");
        assert!(matches!(
            id.unwrap_err().detail(),
            ErrorDetail::ContainSeparator(_)
        ))
    }

    #[test]
    fn parse_client_id_with_invalid_character() {
        let id = validate_client_identifier("07-tendermint-0!");
        assert!(matches!(
            id.unwrap_err().detail(),
            ErrorDetail::InvalidCharacter(_)
        ))
    }

    #[test]
    fn parse_blank_client_id() {
        let id = validate_client_identifier("   ");
        assert!(matches!(id.unwrap_err().detail(), ErrorDetail::Empty(_)))
    }

    #[test]
    fn parse_valid_client_ids() {
        for id in ["07-tendermint-0", "06-solomachine-12", "09-localhost", "08-wasm-[1]"] {
            assert!(validate_client_identifier(id).is_ok(), "{id} should be valid");
        }
    }
}
