//! Board state, lifecycle, import/export and terminal classification.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::ImportError;
use super::types::{Color, MoveRecord, Piece, Square, SquareIdx};

/// Contents of one grid cell.
///
/// Light squares are fixed at initialization and never read by move logic;
/// the sentinel variant keeps them distinct from every piece value by
/// construction.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Cell {
    Light,
    Empty,
    Occupied(Color, Piece),
}

impl Cell {
    /// Integer tag used at the import/export boundary
    pub(crate) fn tag(self) -> i8 {
        match self {
            Cell::Empty => 0,
            Cell::Occupied(color, piece) => color.sign() * piece.tag(),
            Cell::Light => unreachable!("light squares are never exported"),
        }
    }

    /// Parse a boundary tag; light squares have no tag
    pub(crate) fn from_tag(tag: i8) -> Option<Cell> {
        match tag {
            0 => Some(Cell::Empty),
            1 => Some(Cell::Occupied(Color::White, Piece::Man)),
            2 => Some(Cell::Occupied(Color::White, Piece::King)),
            -1 => Some(Cell::Occupied(Color::Black, Piece::Man)),
            -2 => Some(Cell::Occupied(Color::Black, Piece::King)),
            _ => None,
        }
    }
}

/// Result of [`Board::terminal_status`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum GameStatus {
    /// Game continues with the given side to move
    Ongoing(Color),
    WhiteWins,
    BlackWins,
}

impl GameStatus {
    /// The winning side, if the game is over
    #[must_use]
    pub fn winner(self) -> Option<Color> {
        match self {
            GameStatus::Ongoing(_) => None,
            GameStatus::WhiteWins => Some(Color::White),
            GameStatus::BlackWins => Some(Color::Black),
        }
    }
}

/// A draughts position plus turn state and move history.
///
/// An exclusively owned value: every mutation goes through
/// [`Board::apply_move`] or the explicit [`Board::import_squares`]
/// overwrite. Not internally synchronized.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) grid: [[Cell; 8]; 8],
    pub(crate) turn: Color,
    /// Landing square of a jump that must be continued, if any.
    /// Set only when a further jump from that square exists.
    pub(crate) chain: Option<SquareIdx>,
    pub(crate) history: Vec<MoveRecord>,
}

impl Board {
    /// Starting position: 12 white men on squares 1-12, 12 black men on
    /// 21-32, white to move.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for sq in SquareIdx::all() {
            let side = match sq.get() {
                1..=12 => Color::White,
                21..=32 => Color::Black,
                _ => continue,
            };
            board.set_cell(sq, Cell::Occupied(side, Piece::Man));
        }
        board
    }

    /// Board with all playable squares empty
    pub(crate) fn empty() -> Self {
        let mut grid = [[Cell::Light; 8]; 8];
        for (row, cells) in grid.iter_mut().enumerate() {
            for (col, cell) in cells.iter_mut().enumerate() {
                if Square(row, col).is_playable() {
                    *cell = Cell::Empty;
                }
            }
        }
        Board {
            grid,
            turn: Color::White,
            chain: None,
            history: Vec::new(),
        }
    }

    #[inline]
    pub(crate) fn cell(&self, sq: SquareIdx) -> Cell {
        let coords = sq.to_square();
        self.grid[coords.row()][coords.col()]
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, sq: SquareIdx, cell: Cell) {
        let coords = sq.to_square();
        self.grid[coords.row()][coords.col()] = cell;
    }

    /// Piece on a playable square, if any
    #[must_use]
    pub fn piece_at(&self, sq: SquareIdx) -> Option<(Color, Piece)> {
        match self.cell(sq) {
            Cell::Occupied(color, piece) => Some((color, piece)),
            _ => None,
        }
    }

    /// True if the playable square holds no piece
    #[must_use]
    pub fn is_empty(&self, sq: SquareIdx) -> bool {
        self.cell(sq) == Cell::Empty
    }

    /// Side to move
    #[inline]
    #[must_use]
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// True while a forced multi-jump is in progress
    #[inline]
    #[must_use]
    pub fn in_chain(&self) -> bool {
        self.chain.is_some()
    }

    /// Square the next jump of a forced multi-jump must start from
    #[inline]
    #[must_use]
    pub fn chain_square(&self) -> Option<SquareIdx> {
        self.chain
    }

    /// Completed and in-progress move records, oldest first
    #[must_use]
    pub fn history(&self) -> &[MoveRecord] {
        &self.history
    }

    /// Total men plus kings for a side
    #[must_use]
    pub fn count_pieces(&self, side: Color) -> usize {
        SquareIdx::all()
            .filter(|&sq| matches!(self.piece_at(sq), Some((color, _)) if color == side))
            .count()
    }

    /// Square tags in index order 1..=32, for serialization by collaborators
    #[must_use]
    pub fn export_squares(&self) -> [i8; 32] {
        let mut values = [0i8; 32];
        for (slot, sq) in values.iter_mut().zip(SquareIdx::all()) {
            *slot = self.cell(sq).tag();
        }
        values
    }

    /// Overwrite all 32 playable squares in index order.
    ///
    /// The input is validated in full before any write, so an error leaves
    /// the board unmodified. Turn, chain state and history are untouched.
    pub fn import_squares(&mut self, values: &[i8]) -> Result<(), ImportError> {
        if values.len() != 32 {
            return Err(ImportError::LengthMismatch {
                found: values.len(),
            });
        }
        let mut cells = [Cell::Empty; 32];
        for (i, (&value, slot)) in values.iter().zip(cells.iter_mut()).enumerate() {
            *slot = Cell::from_tag(value).ok_or(ImportError::InvalidValue {
                index: i + 1,
                value,
            })?;
        }
        for (cell, sq) in cells.into_iter().zip(SquareIdx::all()) {
            self.set_cell(sq, cell);
        }
        Ok(())
    }

    /// Classify the position.
    ///
    /// A side with no pieces has lost; a side to move with no legal moves
    /// has lost (no draws). The no-moves rule is skipped while a jump chain
    /// is pending, though a pending chain always has a continuation by
    /// construction.
    #[must_use]
    pub fn terminal_status(&self) -> GameStatus {
        if self.count_pieces(Color::Black) == 0 {
            return GameStatus::WhiteWins;
        }
        if self.count_pieces(Color::White) == 0 {
            return GameStatus::BlackWins;
        }
        if self.chain.is_none() && self.legal_moves().is_empty() {
            return match self.turn {
                Color::White => GameStatus::BlackWins,
                Color::Black => GameStatus::WhiteWins,
            };
        }
        GameStatus::Ongoing(self.turn)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
