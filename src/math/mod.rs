//! Integer helpers and small-dimension point algebra.
//!
//! - [`abs`], [`sign`] - sign handling for signed integers
//! - [`gcd`], [`lcm`] - greatest common divisor / least common multiple of
//!   two or more integers
//! - [`Point2`], [`Point3`] - integer points in 2D and 3D space

mod point;

pub use point::{Point2, Point3};

use num_traits::{PrimInt, Signed};

/// Absolute value of `n`.
///
/// Overflows (panics in debug builds) for the minimum value of `T`.
#[inline]
pub fn abs<T: Signed>(n: T) -> T {
    n.abs()
}

/// Returns -1 if `n < 0`, 1 if `n > 0`, and 0 if `n == 0`.
#[inline]
pub fn sign<T: Signed>(n: T) -> T {
    n.signum()
}

// Euclid runs on `-|n|` for signed `T`: the negative half of the range holds
// every magnitude, including that of `T::min_value()`. Unsigned values pass
// through unchanged.
fn negative_magnitude<T: PrimInt>(n: T) -> T {
    if n > T::zero() && T::min_value() < T::zero() {
        T::zero() - n
    } else {
        n
    }
}

fn from_negative_magnitude<T: PrimInt>(n: T) -> T {
    if n < T::zero() {
        T::zero() - n
    } else {
        n
    }
}

fn gcd2<T: PrimInt>(a: T, b: T) -> T {
    let (mut a, mut b) = (negative_magnitude(a), negative_magnitude(b));
    let minus_one = T::zero().checked_sub(&T::one());
    while b != T::zero() {
        // MIN % -1 overflows; the remainder is 0
        let r = if Some(b) == minus_one { T::zero() } else { a % b };
        a = b;
        b = r;
    }
    a
}

fn lcm2<T: PrimInt>(a: T, b: T) -> T {
    if a == T::zero() || b == T::zero() {
        return T::zero();
    }
    let (a, b) = (negative_magnitude(a), negative_magnitude(b));
    a / gcd2(a, b) * b
}

/// Greatest common divisor of `a`, `b` and every element of `more`.
///
/// The result is never negative; `gcd(0, 0)` is 0. Negative arguments are
/// fine down to `T::min_value()`, but a result equal to its magnitude
/// (`gcd(i64::MIN, 0, &[])` is 2^63) does not fit in `T` and overflows the
/// same way `abs(T::min_value())` does.
///
/// ```
/// use toolbelt::math::gcd;
/// assert_eq!(gcd(12, 18, &[]), 6);
/// assert_eq!(gcd(12u32, 18, &[8]), 2);
/// assert_eq!(gcd(i64::MIN, 2, &[]), 2);
/// ```
pub fn gcd<T: PrimInt>(a: T, b: T, more: &[T]) -> T {
    from_negative_magnitude(more.iter().fold(gcd2(a, b), |g, &n| gcd2(g, n)))
}

/// Least common multiple of `a`, `b` and every element of `more`.
///
/// The result is never negative; any zero argument makes it 0. A result
/// larger than `T::max_value()` overflows; intermediate products are not
/// checked.
pub fn lcm<T: PrimInt>(a: T, b: T, more: &[T]) -> T {
    from_negative_magnitude(more.iter().fold(lcm2(a, b), |l, &n| lcm2(l, n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_abs_and_sign() {
        assert_eq!(abs(-5i32), 5);
        assert_eq!(abs(5i64), 5);
        assert_eq!(abs(0i8), 0);
        assert_eq!(sign(-42i64), -1);
        assert_eq!(sign(42i16), 1);
        assert_eq!(sign(0i32), 0);
    }

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18, &[]), 6);
        assert_eq!(gcd(18, 12, &[]), 6);
        assert_eq!(gcd(7u64, 13, &[]), 1);
        assert_eq!(gcd(0, 9, &[]), 9);
        assert_eq!(gcd(0, 0, &[]), 0);
        assert_eq!(gcd(48, 180, &[60, 36]), 12);
        assert_eq!(gcd(-12i32, 18, &[]), 6);
    }

    #[test]
    fn test_gcd_signed_minimum() {
        assert_eq!(gcd(i64::MIN, 2, &[]), 2);
        assert_eq!(gcd(2, i64::MIN, &[]), 2);
        assert_eq!(gcd(i64::MIN, -1, &[]), 1);
        assert_eq!(gcd(i64::MIN, i64::MIN / 2, &[]), 1 << 62);
        assert_eq!(gcd(i64::MIN, 0, &[6]), 2);
        assert_eq!(gcd(i8::MIN, 96, &[]), 32);
        assert_eq!(gcd(i32::MIN, i32::MAX, &[]), 1);
    }

    #[test]
    fn test_lcm() {
        assert_eq!(lcm(4, 6, &[]), 12);
        assert_eq!(lcm(3u64, 5, &[7]), 105);
        assert_eq!(lcm(2, 3, &[4, 5, 6]), 60);
        assert_eq!(lcm(0, 5, &[]), 0);
        assert_eq!(lcm(-4i64, 6, &[]), 12);
        assert_eq!(lcm(i64::MIN / 2, 2, &[]), 1 << 62);
        assert_eq!(lcm(i64::MIN / 4, -6, &[]), 3 << 61);
        assert_eq!(lcm(i8::MIN / 2, 2, &[0]), 0);
        // Typical cycle-alignment use
        assert_eq!(lcm(18_727u64, 14_363, &[20_569, 12_643]), 227_844_375_194_981);
    }
}
