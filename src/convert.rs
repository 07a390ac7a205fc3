//! Parse slices of strings into numbers.
//!
//! Every element is trimmed before parsing. The first element that fails
//! aborts the whole conversion.

use std::str::FromStr;
use thiserror::Error;

/// Errors that can occur when converting strings to numbers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error("cannot parse {text:?} at index {index} as {kind}: {message}")]
    Parse {
        index: usize,
        text: String,
        kind: &'static str,
        message: String,
    },
}

fn parse_all<T, S>(strs: &[S], kind: &'static str) -> Result<Vec<T>, ConvertError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    S: AsRef<str>,
{
    strs.iter()
        .enumerate()
        .map(|(index, s)| {
            let text = s.as_ref().trim();
            text.parse::<T>().map_err(|e| ConvertError::Parse {
                index,
                text: text.to_string(),
                kind,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Parse every element as a `u64`.
pub fn parse_u64s<S: AsRef<str>>(strs: &[S]) -> Result<Vec<u64>, ConvertError> {
    parse_all(strs, "u64")
}

/// Parse every element as an `i64`.
pub fn parse_i64s<S: AsRef<str>>(strs: &[S]) -> Result<Vec<i64>, ConvertError> {
    parse_all(strs, "i64")
}

/// Parse every element as an `f64`.
pub fn parse_f64s<S: AsRef<str>>(strs: &[S]) -> Result<Vec<f64>, ConvertError> {
    parse_all(strs, "f64")
}
