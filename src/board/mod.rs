//! Draughts board representation and game logic.
//!
//! Maintains the 8x8 grid, enumerates legal moves under mandatory-capture
//! rules (forced jumps, multi-jump chains, promotion on landing), applies
//! moves one hop at a time, and classifies terminal positions.
//!
//! # Example
//! ```
//! use draughts_engine::board::{Board, Color};
//!
//! let board = Board::new();
//! assert_eq!(board.turn(), Color::White);
//! // The opening position offers white seven steps and no jumps.
//! assert_eq!(board.legal_moves().len(), 7);
//! ```

mod apply;
mod builder;
mod error;
mod movegen;
pub mod prelude;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use apply::{MoveKind, MoveOutcome, TurnStatus};
pub use builder::BoardBuilder;
pub use error::{ImportError, MoveError, SquareError};
pub use state::{Board, GameStatus};
pub use types::{Color, Move, MoveList, MoveListIntoIter, MoveRecord, Piece, Square, SquareIdx};

pub(crate) use state::Cell;
