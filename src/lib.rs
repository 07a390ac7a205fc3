//! # Toolbelt
//!
//! Small, independent helpers for puzzle-style and data-wrangling code.
//!
//! The centrepiece is a balanced quinary codec: base 5 with the digits
//! -2, -1, 0, +1, +2 written `=`, `-`, `0`, `1`, `2`. Negation is a
//! per-digit map, so numerals never carry a sign character.

pub mod quinary;
pub mod math;
pub mod interval;
pub mod direction;
pub mod collections;
pub mod convert;
pub mod lines;
pub mod must;

// Re-export commonly used types
pub use quinary::{Digit, Numeral, DecodeError};
pub use math::{Point2, Point3};
pub use interval::Interval;
pub use direction::Direction;
pub use must::{must, assert_that};
