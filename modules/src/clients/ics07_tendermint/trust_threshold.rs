//! IBC Domain type definition for [`TrustThreshold`]
//! represented as a fraction.

use core::fmt::{Display, Error as FmtError, Formatter};

use ibc_genesis_proto::ibc::lightclients::tendermint::v1::Fraction;
use ibc_genesis_proto::Protobuf;
use serde_derive::{Deserialize, Serialize};

use super::error::Error;

/// [`TrustThreshold`] defines the level of trust that a client has
/// towards a set of validators of a chain.
///
/// A trust threshold is represented as a fraction, i.e., a numerator and
/// and a denominator. Decoding accepts any fraction so that an out of range
/// value is reported by [`TrustThreshold::validate`] rather than by the decoder.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrustThreshold {
    numerator: u64,
    denominator: u64,
}

impl TrustThreshold {
    /// Constant for a trust threshold of 1/3.
    pub const ONE_THIRD: Self = Self {
        numerator: 1,
        denominator: 3,
    };

    /// Constant for a trust threshold of 2/3.
    pub const TWO_THIRDS: Self = Self {
        numerator: 2,
        denominator: 3,
    };

    pub fn new(numerator: u64, denominator: u64) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// The numerator of the fraction underlying this trust threshold.
    pub fn numerator(&self) -> u64 {
        self.numerator
    }

    /// The denominator of the fraction underlying this trust threshold.
    pub fn denominator(&self) -> u64 {
        self.denominator
    }

    /// The fraction must lie within `[1/3, 1]`.
    pub fn validate(&self) -> Result<(), Error> {
        if self.denominator == 0
            || self.numerator > self.denominator
            || u128::from(self.numerator) * 3 < u128::from(self.denominator)
        {
            return Err(Error::invalid_trust_threshold(
                self.numerator,
                self.denominator,
            ));
        }

        Ok(())
    }
}

impl Protobuf<Fraction> for TrustThreshold {}

impl From<TrustThreshold> for Fraction {
    fn from(t: TrustThreshold) -> Self {
        Self {
            numerator: t.numerator,
            denominator: t.denominator,
        }
    }
}

impl From<Fraction> for TrustThreshold {
    fn from(value: Fraction) -> Self {
        Self::new(value.numerator, value.denominator)
    }
}

impl Default for TrustThreshold {
    fn default() -> Self {
        Self::ONE_THIRD
    }
}

impl Display for TrustThreshold {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    #[test]
    fn trust_threshold_bounds() {
        assert!(TrustThreshold::ONE_THIRD.validate().is_ok());
        assert!(TrustThreshold::TWO_THIRDS.validate().is_ok());
        assert!(TrustThreshold::new(1, 1).validate().is_ok());

        assert!(TrustThreshold::new(1, 4).validate().is_err());
        assert!(TrustThreshold::new(4, 3).validate().is_err());
        assert!(TrustThreshold::new(0, 0).validate().is_err());
        assert!(TrustThreshold::new(u64::MAX, u64::MAX).validate().is_ok());
    }
}
