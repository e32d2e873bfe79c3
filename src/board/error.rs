//! Error types for board operations.

use std::fmt;

use super::types::SquareIdx;

/// Error type for rejected moves
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// The (from, to) pair is not in the current legal set.
    /// The board is left unmodified; callers should re-select.
    NotLegal { from: SquareIdx, to: SquareIdx },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::NotLegal { from, to } => {
                write!(f, "move {from} -> {to} is not legal in this position")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// Error type for square-array import failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportError {
    /// Input must have exactly 32 entries
    LengthMismatch { found: usize },
    /// Entry is not one of the square tags 0, +-1, +-2
    InvalidValue { index: usize, value: i8 },
}

impl fmt::Display for ImportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImportError::LengthMismatch { found } => {
                write!(f, "square import needs exactly 32 values, found {found}")
            }
            ImportError::InvalidValue { index, value } => {
                write!(f, "invalid square value {value} at index {index}")
            }
        }
    }
}

impl std::error::Error for ImportError {}

/// Error type for square conversion failures
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareError {
    /// Playable-square index out of range (must be 1-32)
    IndexOutOfRange { index: u8 },
    /// Row out of bounds (must be 0-7)
    RowOutOfBounds { row: usize },
    /// Column out of bounds (must be 0-7)
    ColOutOfBounds { col: usize },
    /// Coordinates name a light square, which has no index
    NotPlayable { row: usize, col: usize },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::IndexOutOfRange { index } => {
                write!(f, "square index {index} out of range (must be 1-32)")
            }
            SquareError::RowOutOfBounds { row } => {
                write!(f, "row {row} out of bounds (must be 0-7)")
            }
            SquareError::ColOutOfBounds { col } => {
                write!(f, "column {col} out of bounds (must be 0-7)")
            }
            SquareError::NotPlayable { row, col } => {
                write!(f, "square ({row}, {col}) is not playable")
            }
        }
    }
}

impl std::error::Error for SquareError {}
