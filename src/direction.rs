//! Compass directions on a 2D grid.
//!
//! Index `i` (row) grows South, index `j` (column) grows East, so North is
//! `[-1, 0]` and East is `[0, 1]`.

use std::fmt;
use std::ops::BitOr;
use serde::{Serialize, Deserialize};

/// A direction in 2D space, stored as a bit set of the four cardinal bits.
///
/// Diagonals are unions of two cardinals (`NE = N | E`); `C` is the empty
/// set (no movement).
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Direction(u8);

impl Direction {
    pub const C: Direction = Direction(0);
    pub const N: Direction = Direction(1);
    pub const E: Direction = Direction(1 << 1);
    pub const S: Direction = Direction(1 << 2);
    pub const W: Direction = Direction(1 << 3);
    pub const NE: Direction = Direction(Self::N.0 | Self::E.0);
    pub const SE: Direction = Direction(Self::S.0 | Self::E.0);
    pub const NW: Direction = Direction(Self::N.0 | Self::W.0);
    pub const SW: Direction = Direction(Self::S.0 | Self::W.0);

    /// The four cardinal directions, clockwise from North.
    pub const ALL4: [Direction; 4] = [Self::N, Self::E, Self::S, Self::W];

    /// The eight compass directions, clockwise from North.
    pub const ALL8: [Direction; 8] = [
        Self::N, Self::NE, Self::E, Self::SE, Self::S, Self::SW, Self::W, Self::NW,
    ];

    /// The raw bit set.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns true if every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Direction) -> bool {
        self.0 & other.0 == other.0
    }

    /// `[di, dj]` step for one of the eight compass directions.
    ///
    /// Returns `None` for `C` and for bit sets that are not a compass
    /// direction (such as `N | S`).
    pub const fn delta8(self) -> Option<[isize; 2]> {
        match self {
            Self::N => Some([-1, 0]),
            Self::NE => Some([-1, 1]),
            Self::E => Some([0, 1]),
            Self::SE => Some([1, 1]),
            Self::S => Some([1, 0]),
            Self::SW => Some([1, -1]),
            Self::W => Some([0, -1]),
            Self::NW => Some([-1, -1]),
            _ => None,
        }
    }

    /// `[di, dj]` step for a cardinal direction; `None` otherwise.
    pub const fn delta4(self) -> Option<[isize; 2]> {
        match self {
            Self::N | Self::E | Self::S | Self::W => self.delta8(),
            _ => None,
        }
    }

    /// The opposite compass direction.
    pub const fn opposite(self) -> Option<Direction> {
        match self {
            Self::N => Some(Self::S),
            Self::E => Some(Self::W),
            Self::S => Some(Self::N),
            Self::W => Some(Self::E),
            Self::NE => Some(Self::SW),
            Self::SE => Some(Self::NW),
            Self::NW => Some(Self::SE),
            Self::SW => Some(Self::NE),
            _ => None,
        }
    }

    /// Parse `U`, `D`, `L` or `R`.
    pub const fn from_udlr(byte: u8) -> Option<Direction> {
        match byte {
            b'U' => Some(Self::N),
            b'D' => Some(Self::S),
            b'L' => Some(Self::W),
            b'R' => Some(Self::E),
            _ => None,
        }
    }

    /// Apply this direction's step to `(i, j)`; `None` on leaving the
    /// non-negative quadrant or for non-compass directions.
    pub fn step(self, i: usize, j: usize) -> Option<(usize, usize)> {
        let [di, dj] = self.delta8()?;
        Some((i.checked_add_signed(di)?, j.checked_add_signed(dj)?))
    }
}

/// 3x3 neighbourhood deltas in row-major order, centre included:
/// NW, N, NE, W, C, E, SW, S, SE.
pub const DELTA9: [[isize; 2]; 9] = [
    [-1, -1], [-1, 0], [-1, 1],
    [0, -1], [0, 0], [0, 1],
    [1, -1], [1, 0], [1, 1],
];

impl BitOr for Direction {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Direction(self.0 | rhs.0)
    }
}

impl fmt::Debug for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match *self {
            Self::C => "C",
            Self::N => "N",
            Self::NE => "NE",
            Self::E => "E",
            Self::SE => "SE",
            Self::S => "S",
            Self::SW => "SW",
            Self::W => "W",
            Self::NW => "NW",
            _ => return write!(f, "Direction({:#06b})", self.0),
        };
        write!(f, "{}", name)
    }
}
