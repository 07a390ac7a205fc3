//! Arithmetic directly on balanced quinary numerals.
//!
//! Addition uses a ripple-carry adder over the digits, so results are exact
//! even when they leave the `i64` range.

use std::iter::Sum;
use std::ops::{Add, Sub};
use crate::quinary::{Digit, Numeral};

/// Add two numerals.
pub fn add(a: &Numeral, b: &Numeral) -> Numeral {
    let width = a.len().max(b.len());
    let mut digits = Vec::with_capacity(width + 1);
    let mut carry = Digit::Zero;

    for i in 0..width {
        let (sum, new_carry) = a.get(i).full_add(b.get(i), carry);
        digits.push(sum);
        carry = new_carry;
    }
    digits.push(carry);

    Numeral::from_lsb_digits(digits)
}

/// Subtract two numerals (a - b).
#[inline]
pub fn subtract(a: &Numeral, b: &Numeral) -> Numeral {
    add(a, &b.neg())
}

/// Sum any number of numerals. The empty sum is `0`.
pub fn sum<'a, I>(numerals: I) -> Numeral
where
    I: IntoIterator<Item = &'a Numeral>,
{
    numerals
        .into_iter()
        .fold(Numeral::zero(), |acc, n| add(&acc, n))
}

impl Add for Numeral {
    type Output = Numeral;

    fn add(self, rhs: Self) -> Self::Output {
        add(&self, &rhs)
    }
}

impl<'a> Add<&'a Numeral> for &'a Numeral {
    type Output = Numeral;

    fn add(self, rhs: &'a Numeral) -> Self::Output {
        add(self, rhs)
    }
}

impl Sub for Numeral {
    type Output = Numeral;

    fn sub(self, rhs: Self) -> Self::Output {
        subtract(&self, &rhs)
    }
}

impl<'a> Sub<&'a Numeral> for &'a Numeral {
    type Output = Numeral;

    fn sub(self, rhs: &'a Numeral) -> Self::Output {
        subtract(self, rhs)
    }
}

impl Sum for Numeral {
    fn sum<I: Iterator<Item = Numeral>>(iter: I) -> Self {
        iter.fold(Numeral::zero(), |acc, n| add(&acc, &n))
    }
}

impl<'a> Sum<&'a Numeral> for Numeral {
    fn sum<I: Iterator<Item = &'a Numeral>>(iter: I) -> Self {
        sum(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quinary::DecodeError;
    use proptest::prelude::*;

    fn n(value: i64) -> Numeral {
        Numeral::from_i64(value)
    }

    #[test]
    fn test_add_small() {
        assert_eq!(add(&n(1), &n(2)), n(3));
        assert_eq!(add(&n(2), &n(2)).to_string(), "1-");
        assert_eq!(add(&n(12), &n(13)), n(25));
        assert_eq!(add(&n(-7), &n(7)), Numeral::zero());
    }

    #[test]
    fn test_additive_inverse() {
        for value in [-1000i64, -1, 0, 1, 1000, i64::MAX, i64::MIN] {
            let a = n(value);
            let result = add(&a, &a.neg());
            assert!(result.is_zero(), "{} + -{} should be zero", value, value);
            assert_eq!(result.len(), 1);
        }
    }

    #[test]
    fn test_subtract() {
        assert_eq!(subtract(&n(906), &n(1747)), n(906 - 1747));
        assert_eq!(&n(10) - &n(3), n(7));
        assert_eq!(n(3) - n(10), n(-7));
    }

    #[test]
    fn test_sum_advent_example() {
        let lines = [
            "1=-0-2", "12111", "2=0=", "21", "2=01", "111", "20012",
            "112", "1=-1=", "1-12", "12", "1=", "122",
        ];
        let numerals: Vec<Numeral> = lines.iter().map(|s| s.parse().unwrap()).collect();
        let total = sum(&numerals);
        assert_eq!(total.to_string(), "2=-1=0");
        assert_eq!(total.to_i64(), Ok(4890));

        let owned: Numeral = numerals.iter().cloned().sum();
        assert_eq!(owned, total);
        let borrowed: Numeral = numerals.iter().sum();
        assert_eq!(borrowed, total);
    }

    #[test]
    fn test_empty_sum_is_zero() {
        assert_eq!(sum(std::iter::empty()), Numeral::zero());
    }

    #[test]
    fn test_sum_beyond_i64() {
        let big = n(i64::MAX) + n(i64::MAX);
        assert_eq!(big.to_i64(), Err(DecodeError::Overflow));
        assert_eq!(big - n(i64::MAX), n(i64::MAX));
    }

    proptest! {
        #[test]
        fn prop_add_matches_integer_sum(a in -(1i64 << 61)..(1i64 << 61), b in -(1i64 << 61)..(1i64 << 61)) {
            prop_assert_eq!(add(&n(a), &n(b)), n(a + b));
        }

        #[test]
        fn prop_add_commutes(a in any::<i64>(), b in any::<i64>()) {
            prop_assert_eq!(add(&n(a), &n(b)), add(&n(b), &n(a)));
        }
    }
}
