//! Panic helpers for code where a failure is a bug, not an input error.

use std::fmt::Display;

/// Unwrap `result`, panicking with the error's message if there is one.
///
/// ```
/// let n: i64 = toolbelt::must("42".parse::<i64>());
/// assert_eq!(n, 42);
/// ```
#[track_caller]
pub fn must<T, E: Display>(result: Result<T, E>) -> T {
    match result {
        Ok(val) => val,
        Err(err) => panic!("{}", err),
    }
}

/// Panic with `msg` if `cond` is false.
#[track_caller]
pub fn assert_that(cond: bool, msg: &str) {
    if !cond {
        panic!("{}", msg);
    }
}
