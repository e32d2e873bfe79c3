//! Prelude module for convenient imports.
//!
//! Re-exports the most commonly used types.
//!
//! # Example
//! ```
//! use draughts_engine::board::prelude::*;
//! ```

pub use super::{
    Board, BoardBuilder, Color, GameStatus, ImportError, Move, MoveError, MoveKind, MoveList,
    MoveOutcome, MoveRecord, Piece, Square, SquareError, SquareIdx, TurnStatus,
};
