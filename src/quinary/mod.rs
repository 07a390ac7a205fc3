//! Balanced quinary number system.
//!
//! This module provides:
//! - [`Digit`] - A single balanced quinary digit (-2..=+2)
//! - [`Numeral`] - A canonical, arbitrary-length numeral
//! - [`encode`] / [`decode`] / [`negate`] - String-level codec for `i64`
//! - [`arith`] - Ripple-carry addition on numerals

mod digit;
mod numeral;
pub mod codec;
pub mod arith;

pub use digit::Digit;
pub use numeral::Numeral;
pub use codec::{encode, decode, negate, DecodeError};
pub use arith::{add, subtract, sum};
