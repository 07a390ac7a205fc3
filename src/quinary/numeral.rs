//! Balanced quinary numerals of arbitrary length.
//!
//! A [`Numeral`] is always canonical: zero is the single digit `0`, and no
//! other numeral has a leading zero digit. Negative values carry no sign
//! character; their leading digit is negative.

use std::fmt;
use std::str::FromStr;
use serde::{Serialize, Deserialize};
use crate::quinary::Digit;
use crate::quinary::codec::{self, DecodeError};

/// A balanced quinary numeral.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Numeral {
    /// Digits stored from least significant (index 0) to most significant
    digits: Vec<Digit>,
}

impl Numeral {
    /// The numeral `0`.
    pub fn zero() -> Self {
        Self { digits: vec![Digit::Zero] }
    }

    /// Build a numeral from least-significant-first digits, dropping
    /// superfluous high zeros.
    pub(crate) fn from_lsb_digits(mut digits: Vec<Digit>) -> Self {
        while digits.len() > 1 && digits.last() == Some(&Digit::Zero) {
            digits.pop();
        }
        if digits.is_empty() {
            digits.push(Digit::Zero);
        }
        Self { digits }
    }

    /// Build a numeral from digits in reading order (most significant first).
    pub fn from_digits<I: IntoIterator<Item = Digit>>(digits: I) -> Self {
        let mut digits: Vec<Digit> = digits.into_iter().collect();
        digits.reverse();
        Self::from_lsb_digits(digits)
    }

    /// Create from a decimal integer. Every `i64` is representable.
    pub fn from_i64(value: i64) -> Self {
        Self { digits: codec::encode_digits(value) }
    }

    /// Convert to a decimal integer.
    ///
    /// # Errors
    /// Returns [`DecodeError::Overflow`] if the value is outside `i64`
    /// (for example the negation of `i64::MIN`, or a large sum).
    pub fn to_i64(&self) -> Result<i64, DecodeError> {
        codec::value_of(&self.digits)
    }

    /// Digits from least significant (index 0) to most significant.
    #[inline]
    pub fn digits(&self) -> &[Digit] {
        &self.digits
    }

    /// Digit at position `index` (0 = least significant); zero beyond the top.
    #[inline]
    pub fn get(&self, index: usize) -> Digit {
        self.digits.get(index).copied().unwrap_or(Digit::Zero)
    }

    /// Number of digits in the canonical text.
    #[inline]
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Always false: the shortest numeral is `0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.digits.is_empty()
    }

    /// Check if this numeral is zero.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|d| d.is_zero())
    }

    /// Sign of the value: -1, 0 or +1, read off the leading digit.
    pub fn signum(&self) -> i8 {
        self.digits.last().map_or(0, |d| d.to_i8().signum())
    }

    /// Negate every digit.
    pub fn neg(&self) -> Self {
        Self { digits: self.digits.iter().map(|d| d.neg()).collect() }
    }
}

impl Default for Numeral {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Debug for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Numeral({})", self)
    }
}

impl fmt::Display for Numeral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for digit in self.digits.iter().rev() {
            write!(f, "{}", digit)?;
        }
        Ok(())
    }
}

impl FromStr for Numeral {
    type Err = DecodeError;

    /// Parse text in the `=-012` alphabet. Leading zeros are dropped; the
    /// empty string is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(DecodeError::Empty);
        }
        codec::parse_digits(s).map(Self::from_lsb_digits)
    }
}

impl TryFrom<String> for Numeral {
    type Error = DecodeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Numeral> for String {
    fn from(numeral: Numeral) -> Self {
        numeral.to_string()
    }
}

impl From<i64> for Numeral {
    fn from(value: i64) -> Self {
        Numeral::from_i64(value)
    }
}

impl TryFrom<&Numeral> for i64 {
    type Error = DecodeError;

    fn try_from(numeral: &Numeral) -> Result<Self, Self::Error> {
        numeral.to_i64()
    }
}

impl std::ops::Neg for Numeral {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Numeral::neg(&self)
    }
}

impl std::ops::Neg for &Numeral {
    type Output = Numeral;

    fn neg(self) -> Self::Output {
        Numeral::neg(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        let zero = Numeral::zero();
        assert_eq!(zero.to_string(), "0");
        assert_eq!(zero.to_i64(), Ok(0));
        assert!(zero.is_zero());
        assert_eq!(zero.signum(), 0);
        assert_eq!(Numeral::from_i64(0), zero);
    }

    #[test]
    fn test_from_i64_matches_encode() {
        for n in [1747i64, -1747, 906, -37, i64::MIN, i64::MAX] {
            assert_eq!(Numeral::from_i64(n).to_string(), codec::encode(n));
            assert_eq!(Numeral::from(n).to_i64(), Ok(n));
        }
    }

    #[test]
    fn test_parse_canonicalises() {
        let parsed: Numeral = "0012".parse().unwrap();
        assert_eq!(parsed.to_string(), "12");
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed, Numeral::from_i64(7));

        let zeros: Numeral = "0000".parse().unwrap();
        assert_eq!(zeros, Numeral::zero());
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!("".parse::<Numeral>(), Err(DecodeError::Empty));
        assert_eq!(
            "1=x".parse::<Numeral>(),
            Err(DecodeError::InvalidDigit { ch: 'x', index: 2 })
        );
    }

    #[test]
    fn test_digits_are_lsb_first() {
        let n: Numeral = "1=-0-2".parse().unwrap();
        assert_eq!(n.get(0), Digit::Two);
        assert_eq!(n.get(5), Digit::One);
        assert_eq!(n.get(6), Digit::Zero);
        assert_eq!(n.digits().len(), 6);
    }

    #[test]
    fn test_from_digits_reading_order() {
        let n = Numeral::from_digits([Digit::Zero, Digit::One, Digit::Two]);
        assert_eq!(n.to_string(), "12");
    }

    #[test]
    fn test_signum_and_negation() {
        let n = Numeral::from_i64(-198);
        assert_eq!(n.signum(), -1);
        assert_eq!((-n.clone()).to_i64(), Ok(198));
        assert_eq!((-&n).signum(), 1);
        assert_eq!(-(-n.clone()), n);
    }

    #[test]
    fn test_negated_min_is_out_of_range() {
        let n = -Numeral::from_i64(i64::MIN);
        assert_eq!(n.to_i64(), Err(DecodeError::Overflow));
        assert_eq!(i64::try_from(&n), Err(DecodeError::Overflow));
    }

    #[test]
    fn test_serde_as_string() {
        let n = Numeral::from_i64(1747);
        let json = serde_json::to_string(&n).unwrap();
        assert_eq!(json, "\"1=-0-2\"");

        let back: Numeral = serde_json::from_str(&json).unwrap();
        assert_eq!(back, n);

        assert!(serde_json::from_str::<Numeral>("\"12a\"").is_err());
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Numeral::from_i64(7)), "Numeral(12)");
    }
}
