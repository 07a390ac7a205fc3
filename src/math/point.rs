//! Integer points in 2D and 3D space.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use num_traits::{PrimInt, Signed};
use serde::{Serialize, Deserialize};

/// A point in 2D integer space.
///
/// Ordering is lexicographic: `x` first, then `y`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug, Serialize, Deserialize)]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

/// A point in 3D integer space.
///
/// Ordering is lexicographic: `x`, then `y`, then `z`.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Debug, Serialize, Deserialize)]
pub struct Point3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

// ============================================================================
// Point2 Implementation
// ============================================================================

impl<T: PrimInt> Point2<T> {
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Offset by a raw `[dx, dy]` pair, e.g. a direction delta.
    #[inline]
    pub fn add_coord(self, delta: [T; 2]) -> Self {
        Self::new(self.x + delta[0], self.y + delta[1])
    }

    /// The point as a `[x, y]` array.
    #[inline]
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }
}

impl<T: PrimInt + Signed> Point2<T> {
    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: Self) -> T {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }
}

impl<T: PrimInt> From<[T; 2]> for Point2<T> {
    fn from(coord: [T; 2]) -> Self {
        Self::new(coord[0], coord[1])
    }
}

impl<T: PrimInt> From<(T, T)> for Point2<T> {
    fn from((x, y): (T, T)) -> Self {
        Self::new(x, y)
    }
}

impl<T: PrimInt> Add for Point2<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: PrimInt> Sub for Point2<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: PrimInt> Mul<T> for Point2<T> {
    type Output = Self;

    fn mul(self, n: T) -> Self::Output {
        Self::new(self.x * n, self.y * n)
    }
}

/// Component-wise integer division (truncating).
impl<T: PrimInt> Div<T> for Point2<T> {
    type Output = Self;

    fn div(self, n: T) -> Self::Output {
        Self::new(self.x / n, self.y / n)
    }
}

impl<T: PrimInt + Signed> Neg for Point2<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y)
    }
}

impl<T: fmt::Display> fmt::Display for Point2<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ============================================================================
// Point3 Implementation
// ============================================================================

impl<T: PrimInt> Point3<T> {
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    #[inline]
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: PrimInt + Signed> Point3<T> {
    /// Manhattan (L1) distance to `other`.
    pub fn manhattan(self, other: Self) -> T {
        (self.x - other.x).abs() + (self.y - other.y).abs() + (self.z - other.z).abs()
    }
}

impl<T: PrimInt> From<[T; 3]> for Point3<T> {
    fn from(coord: [T; 3]) -> Self {
        Self::new(coord[0], coord[1], coord[2])
    }
}

impl<T: PrimInt> Add for Point3<T> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: PrimInt> Sub for Point3<T> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: PrimInt> Mul<T> for Point3<T> {
    type Output = Self;

    fn mul(self, n: T) -> Self::Output {
        Self::new(self.x * n, self.y * n, self.z * n)
    }
}

impl<T: PrimInt> Div<T> for Point3<T> {
    type Output = Self;

    fn div(self, n: T) -> Self::Output {
        Self::new(self.x / n, self.y / n, self.z / n)
    }
}

impl<T: PrimInt + Signed> Neg for Point3<T> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::new(-self.x, -self.y, -self.z)
    }
}

impl<T: fmt::Display> fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point2_arithmetic() {
        let p = Point2::new(3i64, -4);
        let q = Point2::from([1i64, 2]);

        assert_eq!(p + q, Point2::new(4, -2));
        assert_eq!(p - q, Point2::new(2, -6));
        assert_eq!(p * 3, Point2::new(9, -12));
        assert_eq!(p / 2, Point2::new(1, -2));
        assert_eq!(-p, Point2::new(-3, 4));
        assert_eq!(p.add_coord([-1, 1]), Point2::new(2, -3));
        assert_eq!(p.manhattan(q), 8);
    }

    #[test]
    fn test_point2_unsigned() {
        let p = Point2::new(3usize, 4);
        assert_eq!(p + Point2::from((1, 1)), Point2::new(4, 5));
        assert_eq!(p.to_array(), [3, 4]);
    }

    #[test]
    fn test_point2_ordering() {
        let mut points = vec![
            Point2::new(2, 1),
            Point2::new(1, 5),
            Point2::new(1, 2),
            Point2::new(0, 9),
        ];
        points.sort();
        assert_eq!(
            points,
            vec![Point2::new(0, 9), Point2::new(1, 2), Point2::new(1, 5), Point2::new(2, 1)]
        );
        assert!(Point2::new(1, 2) < Point2::new(1, 3));
        assert!(Point2::new(0, 9) < Point2::new(1, 0));
    }

    #[test]
    fn test_point3() {
        let p = Point3::from([1i32, 2, 3]);
        let q = Point3::new(4, 6, 8);
        assert_eq!(q - p, Point3::new(3, 4, 5));
        assert_eq!(p + q, Point3::new(5, 8, 11));
        assert_eq!(p * 2, Point3::new(2, 4, 6));
        assert_eq!(q / 2, Point3::new(2, 3, 4));
        assert_eq!(-p, Point3::new(-1, -2, -3));
        assert_eq!(p.manhattan(q), 12);
        assert_eq!(q.to_array(), [4, 6, 8]);
    }

    #[test]
    fn test_display_and_serde() {
        let p = Point2::new(-1i64, 7);
        assert_eq!(p.to_string(), "(-1, 7)");
        assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"x":-1,"y":7}"#);
        let back: Point3<i64> = serde_json::from_str(r#"{"x":1,"y":2,"z":3}"#).unwrap();
        assert_eq!(back, Point3::new(1, 2, 3));
    }
}
