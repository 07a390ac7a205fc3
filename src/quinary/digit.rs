//! Single balanced quinary digit.
//!
//! A digit holds one of five values: -2, -1, 0, +1 or +2.
//! The textual alphabet is:
//! - `=` = -2
//! - `-` = -1
//! - `0`, `1`, `2` = 0, +1, +2

use std::fmt;
use serde::{Serialize, Deserialize};

/// A single balanced quinary digit.
///
/// The discriminant is the digit's numeric value, so ordering follows value.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(i8)]
pub enum Digit {
    /// Minus two (`=`)
    MinusTwo = -2,
    /// Minus one (`-`)
    MinusOne = -1,
    /// Zero (`0`)
    Zero = 0,
    /// Plus one (`1`)
    One = 1,
    /// Plus two (`2`)
    Two = 2,
}

impl Digit {
    /// All digit values in ascending order.
    pub const ALL: [Digit; 5] = [
        Digit::MinusTwo,
        Digit::MinusOne,
        Digit::Zero,
        Digit::One,
        Digit::Two,
    ];

    /// Parse a digit from its alphabet character.
    ///
    /// Returns `None` for any character outside `=-012`.
    #[inline]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '=' => Some(Digit::MinusTwo),
            '-' => Some(Digit::MinusOne),
            '0' => Some(Digit::Zero),
            '1' => Some(Digit::One),
            '2' => Some(Digit::Two),
            _ => None,
        }
    }

    /// The alphabet character for this digit.
    #[inline]
    pub const fn to_char(self) -> char {
        match self {
            Digit::MinusTwo => '=',
            Digit::MinusOne => '-',
            Digit::Zero => '0',
            Digit::One => '1',
            Digit::Two => '2',
        }
    }

    /// Create a digit from an integer value.
    ///
    /// # Panics
    /// Panics if value is not in {-2, -1, 0, 1, 2}.
    #[inline]
    pub fn from_i8(value: i8) -> Self {
        match value {
            -2 => Digit::MinusTwo,
            -1 => Digit::MinusOne,
            0 => Digit::Zero,
            1 => Digit::One,
            2 => Digit::Two,
            _ => panic!("Invalid balanced quinary digit value: {} (must be in -2..=2)", value),
        }
    }

    /// Convert to integer value.
    #[inline]
    pub const fn to_i8(self) -> i8 {
        self as i8
    }

    /// Negate the digit. Every digit's negation is again a digit.
    #[inline]
    pub const fn neg(self) -> Self {
        match self {
            Digit::MinusTwo => Digit::Two,
            Digit::MinusOne => Digit::One,
            Digit::Zero => Digit::Zero,
            Digit::One => Digit::MinusOne,
            Digit::Two => Digit::MinusTwo,
        }
    }

    /// Full adder: adds two digits and an incoming carry, returns (sum, carry_out).
    ///
    /// The carry is always in {-1, 0, +1}; the raw total lies in -5..=5.
    #[inline]
    pub fn full_add(self, other: Self, carry_in: Self) -> (Self, Self) {
        debug_assert!(carry_in.to_i8().abs() <= 1, "carry must be -1, 0 or +1");

        let total = self.to_i8() + other.to_i8() + carry_in.to_i8();
        let sum = (total + 2).rem_euclid(5) - 2;
        let carry = (total - sum) / 5;

        (Digit::from_i8(sum), Digit::from_i8(carry))
    }

    /// Returns true if this digit is zero.
    #[inline]
    pub const fn is_zero(self) -> bool {
        matches!(self, Digit::Zero)
    }

    /// Returns true if this digit is negative.
    #[inline]
    pub const fn is_negative(self) -> bool {
        matches!(self, Digit::MinusTwo | Digit::MinusOne)
    }
}

impl Default for Digit {
    fn default() -> Self {
        Digit::Zero
    }
}

impl fmt::Debug for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digit({})", self.to_i8())
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl std::ops::Neg for Digit {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Digit::neg(self)
    }
}

impl From<Digit> for i8 {
    fn from(digit: Digit) -> Self {
        digit.to_i8()
    }
}

impl From<Digit> for char {
    fn from(digit: Digit) -> Self {
        digit.to_char()
    }
}

impl TryFrom<char> for Digit {
    type Error = char;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        Digit::from_char(c).ok_or(c)
    }
}
