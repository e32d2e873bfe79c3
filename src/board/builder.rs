//! Fluent builder for constructing positions.
//!
//! Lets tests and collaborators set up arbitrary positions piece by piece
//! instead of importing raw square arrays.
//!
//! # Example
//! ```
//! use draughts_engine::board::{BoardBuilder, Color, Piece, SquareIdx};
//!
//! let board = BoardBuilder::new()
//!     .piece(SquareIdx::new(1).unwrap(), Color::White, Piece::Man)
//!     .piece(SquareIdx::new(6).unwrap(), Color::Black, Piece::Man)
//!     .side_to_move(Color::White)
//!     .build();
//! // The jump over square 6 is mandatory, so it is the only legal move.
//! assert_eq!(board.legal_moves().len(), 1);
//! ```

use super::state::Cell;
use super::types::{Color, Piece, SquareIdx};
use super::Board;

/// A fluent builder for constructing `Board` positions.
#[derive(Clone, Debug)]
pub struct BoardBuilder {
    pieces: Vec<(SquareIdx, Color, Piece)>,
    side_to_move: Color,
}

impl Default for BoardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        BoardBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        for sq in SquareIdx::all() {
            match sq.get() {
                1..=12 => builder.pieces.push((sq, Color::White, Piece::Man)),
                21..=32 => builder.pieces.push((sq, Color::Black, Piece::Man)),
                _ => {}
            }
        }
        builder
    }

    /// Place a piece on a playable square, replacing any piece there.
    #[must_use]
    pub fn piece(mut self, square: SquareIdx, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: SquareIdx) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Build the board.
    #[must_use]
    pub fn build(self) -> Board {
        let mut board = Board::empty();
        for (square, color, piece) in self.pieces {
            board.set_cell(square, Cell::Occupied(color, piece));
        }
        board.turn = self.side_to_move;
        board
    }
}
