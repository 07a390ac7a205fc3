//! Conversion between `i64` and balanced quinary text.
//!
//! The two directions have different failure policies:
//! - [`decode`] accepts untrusted text and reports malformed input as a
//!   [`DecodeError`]; it never panics.
//! - [`negate`] expects a numeral that is already valid (for example one
//!   produced by [`encode`]) and panics on any other character.

use crate::quinary::Digit;
use thiserror::Error;

/// Encode an integer as a balanced quinary numeral.
///
/// Every `i64`, including `i64::MIN`, has a representation. Zero encodes as
/// `"0"`; no other result starts with `0`.
///
/// ```
/// assert_eq!(toolbelt::quinary::encode(1747), "1=-0-2");
/// assert_eq!(toolbelt::quinary::encode(-1747), "-2101=");
/// ```
pub fn encode(n: i64) -> String {
    render(&encode_digits(n))
}

/// Decode a balanced quinary numeral into an integer.
///
/// Digits are read with weight 5^position, position 0 being the rightmost
/// character. Superfluous leading zeros are accepted and the empty string
/// decodes to 0.
///
/// # Errors
/// - [`DecodeError::InvalidDigit`] for the first character (in reading
///   order) outside `=-012`, with its byte offset in `s`.
/// - [`DecodeError::Overflow`] if the value does not fit in an `i64`.
pub fn decode(s: &str) -> Result<i64, DecodeError> {
    let digits = parse_digits(s).map_err(|e| {
        tracing::debug!(input = s, error = %e, "rejected balanced quinary input");
        e
    })?;
    value_of(&digits)
}

/// Negate a balanced quinary numeral digit by digit.
///
/// Length and digit positions are preserved: `=` and `2` swap, `-` and `1`
/// swap, `0` stays.
///
/// # Panics
/// Panics if `s` contains a character outside `=-012`. Unlike [`decode`],
/// this function treats malformed input as a bug in the caller.
pub fn negate(s: &str) -> String {
    s.chars()
        .map(|c| match Digit::from_char(c) {
            Some(digit) => digit.neg().to_char(),
            None => panic!("invalid balanced quinary digit {:?}", c),
        })
        .collect()
}

/// Errors that can occur when reading balanced quinary text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid balanced quinary digit {ch:?} at index {index}")]
    InvalidDigit { ch: char, index: usize },

    #[error("empty balanced quinary numeral")]
    Empty,

    #[error("balanced quinary value does not fit in i64")]
    Overflow,
}

/// Balanced digits of `n`, least significant first, without superfluous
/// high zeros (zero itself is a single `Zero`).
pub(crate) fn encode_digits(n: i64) -> Vec<Digit> {
    if n == 0 {
        return vec![Digit::Zero];
    }

    // unsigned_abs keeps i64::MIN in range
    let mut magnitude = n.unsigned_abs();
    let mut slots: Vec<u8> = Vec::with_capacity(29);
    while magnitude > 0 {
        slots.push((magnitude % 5) as u8);
        magnitude /= 5;
    }
    // Spare slot for the final carry
    slots.push(0);

    let mut digits = Vec::with_capacity(slots.len());
    for i in 0..slots.len() {
        let (digit, carry) = match slots[i] {
            0 => (Digit::Zero, false),
            1 => (Digit::One, false),
            2 => (Digit::Two, false),
            3 => (Digit::MinusTwo, true),
            4 => (Digit::MinusOne, true),
            5 => (Digit::Zero, true),
            _ => unreachable!(),
        };
        digits.push(digit);
        if carry {
            // The spare slot holds at most 1, so the last slot never carries.
            slots[i + 1] += 1;
        }
    }

    if digits.len() > 1 && digits.last() == Some(&Digit::Zero) {
        digits.pop();
    }

    if n < 0 {
        for digit in &mut digits {
            *digit = digit.neg();
        }
    }
    digits
}

/// Validate `s` and return its digits least significant first.
pub(crate) fn parse_digits(s: &str) -> Result<Vec<Digit>, DecodeError> {
    let mut digits = s
        .char_indices()
        .map(|(index, ch)| Digit::from_char(ch).ok_or(DecodeError::InvalidDigit { ch, index }))
        .collect::<Result<Vec<_>, _>>()?;
    digits.reverse();
    Ok(digits)
}

/// Value of least-significant-first digits.
///
/// Accumulates in `i128` so any numeral whose value fits in `i64` is exact.
pub(crate) fn value_of(digits: &[Digit]) -> Result<i64, DecodeError> {
    let mut value: i128 = 0;
    let mut weight: Option<i128> = Some(1);

    for digit in digits {
        if !digit.is_zero() {
            let term = weight
                .and_then(|w| w.checked_mul(i128::from(digit.to_i8())))
                .ok_or(DecodeError::Overflow)?;
            value = value.checked_add(term).ok_or(DecodeError::Overflow)?;
        }
        weight = weight.and_then(|w| w.checked_mul(5));
    }

    i64::try_from(value).map_err(|_| DecodeError::Overflow)
}

/// Most-significant-first text of least-significant-first digits.
pub(crate) fn render(digits: &[Digit]) -> String {
    digits.iter().rev().map(|d| d.to_char()).collect()
}
