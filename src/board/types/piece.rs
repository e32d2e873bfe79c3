//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Draughts piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Man,
    King,
}

impl Piece {
    /// Returns true for a crowned piece
    #[inline]
    #[must_use]
    pub const fn is_king(self) -> bool {
        matches!(self, Piece::King)
    }

    /// Magnitude of the square tag for this kind (man=1, king=2)
    #[inline]
    #[must_use]
    pub(crate) const fn tag(self) -> i8 {
        match self {
            Piece::Man => 1,
            Piece::King => 2,
        }
    }
}

/// The two sides.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Sign of this side's square tags (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub const fn sign(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Forward row direction for this side's men (+1 for White, -1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn forward(self) -> isize {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }

    /// Row on which this side's men are crowned (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn crown_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}
