//! Square types and the coordinate mapping.
//!
//! Pieces live only on the 32 dark squares, addressed by a 1..=32 index
//! (`SquareIdx`). The `Square` type names any (row, col) cell of the grid
//! and exists mainly for bounds arithmetic and rendering.

use std::fmt;

use once_cell::sync::Lazy;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// A cell of the 8x8 grid, represented as (row, col).
///
/// Only cells with an odd row+col sum are playable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, col)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row, col))
        } else {
            None
        }
    }

    /// Get the row (0-7)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7)
    #[inline]
    #[must_use]
    pub const fn col(self) -> usize {
        self.1
    }

    /// True for the 32 dark squares pieces can occupy
    #[inline]
    #[must_use]
    pub const fn is_playable(self) -> bool {
        (self.0 + self.1) % 2 == 1
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if col >= 8 {
            return Err(SquareError::ColOutOfBounds { col });
        }
        Ok(Square(row, col))
    }
}

/// Reverse lookup from grid coordinates to the playable-square index.
static SQUARE_INDEX: Lazy<[[Option<SquareIdx>; 8]; 8]> = Lazy::new(|| {
    let mut table = [[None; 8]; 8];
    for n in 1..=32u8 {
        let sq = SquareIdx(n).to_square();
        table[sq.row()][sq.col()] = Some(SquareIdx(n));
    }
    table
});

/// Index of a playable square, 1..=32, numbered row by row from the white
/// home rank. The only addressing scheme exposed to callers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SquareIdx(u8);

impl SquareIdx {
    pub(crate) const FIRST: SquareIdx = SquareIdx(1);

    /// Create an index with range checking
    #[must_use]
    pub fn new(n: u8) -> Option<Self> {
        if (1..=32).contains(&n) {
            Some(SquareIdx(n))
        } else {
            None
        }
    }

    /// Get the raw index value (1-32)
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// All 32 playable-square indices in order
    pub fn all() -> impl Iterator<Item = SquareIdx> {
        (1..=32).map(SquareIdx)
    }

    /// Grid coordinates of this square. Rows hold four playable squares
    /// each; the column offset alternates with row parity.
    #[must_use]
    pub const fn to_square(self) -> Square {
        let n = self.0 as usize - 1;
        let row = n / 4;
        let col = if row % 2 == 0 {
            n % 4 * 2 + 1
        } else {
            n % 4 * 2
        };
        Square(row, col)
    }

    /// Index of a playable square.
    ///
    /// # Panics
    ///
    /// Panics if `sq` is not playable. Callers converting untrusted
    /// coordinates should use [`SquareIdx::try_from_square`] instead.
    #[must_use]
    pub fn from_square(sq: Square) -> Self {
        match SQUARE_INDEX[sq.row()][sq.col()] {
            Some(idx) => idx,
            None => panic!("square {sq} is not playable"),
        }
    }

    /// Checked conversion from grid coordinates
    pub fn try_from_square(sq: Square) -> Result<Self, SquareError> {
        SQUARE_INDEX[sq.row()][sq.col()].ok_or(SquareError::NotPlayable {
            row: sq.row(),
            col: sq.col(),
        })
    }
}

impl fmt::Display for SquareIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<u8> for SquareIdx {
    type Error = SquareError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        SquareIdx::new(n).ok_or(SquareError::IndexOutOfRange { index: n })
    }
}
