//! Slice and map helpers.
//!
//! Nested vectors of any depth are built with [`nd_vec!`](crate::nd_vec)
//! or the fixed-arity [`vec2d`] / [`vec3d`]; deep copies are plain `clone()`.

use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Build a map from `items`, calling `f` on each element for its key and value.
///
/// When two elements produce the same key, the later one wins.
pub fn associative<I, K, V, F>(items: I, mut f: F) -> HashMap<K, V>
where
    I: IntoIterator,
    K: Eq + Hash,
    F: FnMut(I::Item) -> (K, V),
{
    let iter = items.into_iter();
    let mut map = HashMap::with_capacity(iter.size_hint().0);
    for item in iter {
        let (k, v) = f(item);
        map.insert(k, v);
    }
    map
}

/// Collect `items` into a visited set.
pub fn to_vis<I>(items: I) -> HashSet<I::Item>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    items.into_iter().collect()
}

/// Number of positions at which `l` and `r` differ, or `None` if their
/// lengths differ.
pub fn diff<T: PartialEq>(l: &[T], r: &[T]) -> Option<usize> {
    if l.len() != r.len() {
        return None;
    }
    Some(l.iter().zip(r).filter(|(a, b)| a != b).count())
}

/// Fold `items` into a single value, `f(acc, item)` per element.
pub fn reduce<I, R, F>(items: I, f: F, init: R) -> R
where
    I: IntoIterator,
    F: FnMut(R, I::Item) -> R,
{
    items.into_iter().fold(init, f)
}

/// Like [`reduce`], passing each element's index as the second argument.
pub fn reduce_index<I, R, F>(items: I, mut f: F, init: R) -> R
where
    I: IntoIterator,
    F: FnMut(R, usize, I::Item) -> R,
{
    items
        .into_iter()
        .enumerate()
        .fold(init, |acc, (i, item)| f(acc, i, item))
}

/// Fold over a map's entries. Iteration order is unspecified.
pub fn reduce_map<K, V, R, F>(map: &HashMap<K, V>, mut f: F, init: R) -> R
where
    F: FnMut(R, &K, &V) -> R,
{
    map.iter().fold(init, |acc, (k, v)| f(acc, k, v))
}

/// A `rows` x `cols` grid filled with `fill`.
pub fn vec2d<T: Clone>(rows: usize, cols: usize, fill: T) -> Vec<Vec<T>> {
    vec![vec![fill; cols]; rows]
}

/// An `a` x `b` x `c` cube filled with `fill`.
pub fn vec3d<T: Clone>(a: usize, b: usize, c: usize, fill: T) -> Vec<Vec<Vec<T>>> {
    vec![vec2d(b, c, fill); a]
}

/// Build a nested `Vec` with one level per dimension.
///
/// ```
/// let cube = toolbelt::nd_vec![0u8; 2, 3, 4];
/// assert_eq!(cube.len(), 2);
/// assert_eq!(cube[1][2].len(), 4);
/// ```
#[macro_export]
macro_rules! nd_vec {
    ($fill:expr; $dim:expr) => {
        vec![$fill; $dim]
    };
    ($fill:expr; $dim:expr, $($rest:expr),+) => {
        vec![$crate::nd_vec!($fill; $($rest),+); $dim]
    };
}
