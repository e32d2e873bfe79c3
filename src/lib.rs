pub mod board;
pub mod cli;

pub use board::{Board, BoardBuilder, Color, GameStatus, Move, MoveRecord, Piece, Square, SquareIdx};
