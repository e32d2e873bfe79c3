//! Core draughts types.
//!
//! - `Color` and `Piece` - sides and man/king piece kinds
//! - `Square` and `SquareIdx` - grid coordinates and the 1..=32 playable index
//! - `Move`, `MoveList` and `MoveRecord` - candidate moves and history entries

mod moves;
mod piece;
mod square;

pub use moves::{Move, MoveList, MoveListIntoIter, MoveRecord};
pub use piece::{Color, Piece};
pub use square::{Square, SquareIdx};
