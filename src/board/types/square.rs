//! Square types and utilities.
//!
//! Squares use the 0x88 layout: the low nibble is the file and the high
//! nibble the rank. Any index with a bit of `0x88` set is off the board,
//! which lets ray walks detect the edge with a single mask.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Number of 0x88 indices (half of them are off-board).
pub const SQUARE_SLOTS: usize = 128;

/// A square index in 0x88 layout.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub u8);

impl Square {
    /// Off-board sentinel used where a square is required but absent.
    pub const NONE: Square = Square(0x80);

    /// Create a square without bounds checks; for constants and tests.
    #[inline]
    #[must_use]
    pub const fn at(file: u8, rank: u8) -> Self {
        Square((rank << 4) | file)
    }

    /// Get the file (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> u8 {
        self.0 & 0x07
    }

    /// Get the rank (0-7, where 0 = rank 1)
    #[inline]
    #[must_use]
    pub const fn rank(self) -> u8 {
        self.0 >> 4
    }

    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 & 0x88 == 0
    }

    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Step by a raw 0x88 delta. The result may be off-board.
    #[inline]
    #[must_use]
    pub const fn offset(self, delta: i8) -> Square {
        Square(self.0.wrapping_add(delta as u8))
    }

    /// Iterate over the 64 on-board squares in index order (a1, b1, ... h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..128).map(Square).filter(|sq| sq.is_on_board())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_on_board() {
            return write!(f, "--");
        }
        write!(f, "{}{}", (self.file() + b'a') as char, self.rank() + 1)
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = match bytes[0] {
            b'a'..=b'h' => bytes[0] - b'a',
            _ => return Err(invalid()),
        };
        let rank = match bytes[1] {
            b'1'..=b'8' => bytes[1] - b'1',
            _ => return Err(invalid()),
        };
        Ok(Square::at(file, rank))
    }
}
