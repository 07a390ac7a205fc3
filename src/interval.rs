//! Half-open integer intervals and interval merging.

use std::cmp::Ordering;
use std::fmt;
use serde::{Serialize, Deserialize};

/// A left-closed, right-open interval `[lower, upper)`.
///
/// Intervals order by `lower` first, then by `upper`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Debug, Serialize, Deserialize)]
pub struct Interval {
    pub lower: i64,
    pub upper: i64,
}

impl Interval {
    #[inline]
    pub const fn new(lower: i64, upper: i64) -> Self {
        Self { lower, upper }
    }

    /// Move both bounds by `offset`.
    #[inline]
    pub const fn shift(self, offset: i64) -> Self {
        Self::new(self.lower + offset, self.upper + offset)
    }

    /// Number of integers covered; 0 when `upper <= lower`.
    #[inline]
    pub fn len(&self) -> u64 {
        if self.upper > self.lower {
            self.upper.abs_diff(self.lower)
        } else {
            0
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.upper <= self.lower
    }

    #[inline]
    pub fn contains(&self, value: i64) -> bool {
        self.lower <= value && value < self.upper
    }
}

impl Ord for Interval {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lower
            .cmp(&other.lower)
            .then_with(|| self.upper.cmp(&other.upper))
    }
}

impl PartialOrd for Interval {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.lower, self.upper)
    }
}

impl From<(i64, i64)> for Interval {
    fn from((lower, upper): (i64, i64)) -> Self {
        Self::new(lower, upper)
    }
}

/// Sort `intervals` and merge the ones that overlap or touch.
///
/// Two neighbours merge when the first one's `upper` reaches the second's
/// `lower`, so `[1, 3)` and `[3, 5)` become `[1, 5)`. The output is sorted
/// and pairwise disjoint with gaps between consecutive intervals.
pub fn merge(mut intervals: Vec<Interval>) -> Vec<Interval> {
    if intervals.is_empty() {
        return intervals;
    }

    intervals.sort_unstable();
    let input_len = intervals.len();

    let mut result: Vec<Interval> = Vec::with_capacity(input_len);
    for interval in intervals {
        match result.last_mut() {
            Some(last) if last.upper >= interval.lower => {
                if last.upper < interval.upper {
                    last.upper = interval.upper;
                }
            }
            _ => result.push(interval),
        }
    }

    tracing::trace!(input = input_len, output = result.len(), "merged intervals");
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(lower: i64, upper: i64) -> Interval {
        Interval::new(lower, upper)
    }

    #[test]
    fn test_ordering() {
        assert!(iv(1, 5) < iv(2, 3));
        assert!(iv(1, 3) < iv(1, 5));
        assert_eq!(iv(1, 3).cmp(&iv(1, 3)), Ordering::Equal);
    }

    #[test]
    fn test_shift() {
        assert_eq!(iv(1, 5).shift(10), iv(11, 15));
        assert_eq!(iv(1, 5).shift(-3), iv(-2, 2));
    }

    #[test]
    fn test_len_and_contains() {
        let i = iv(-2, 3);
        assert_eq!(i.len(), 5);
        assert!(i.contains(-2));
        assert!(!i.contains(3));
        assert!(iv(4, 4).is_empty());
        assert_eq!(iv(5, 1).len(), 0);
        assert_eq!(iv(i64::MIN, i64::MAX).len(), u64::MAX);
    }

    #[test]
    fn test_merge_empty() {
        assert!(merge(Vec::new()).is_empty());
    }

    #[test]
    fn test_merge_overlapping_and_contiguous() {
        let merged = merge(vec![iv(8, 10), iv(1, 3), iv(2, 6), iv(6, 7), iv(15, 18)]);
        assert_eq!(merged, vec![iv(1, 7), iv(8, 10), iv(15, 18)]);
    }

    #[test]
    fn test_merge_contained() {
        let merged = merge(vec![iv(1, 10), iv(2, 3), iv(4, 5)]);
        assert_eq!(merged, vec![iv(1, 10)]);
    }

    #[test]
    fn test_merge_keeps_gaps() {
        let merged = merge(vec![iv(5, 6), iv(1, 2), iv(3, 4)]);
        assert_eq!(merged, vec![iv(1, 2), iv(3, 4), iv(5, 6)]);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&iv(1, 4)).unwrap();
        assert_eq!(json, r#"{"lower":1,"upper":4}"#);
    }
}
