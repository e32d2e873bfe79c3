//! Terminal-state classification tests.

use super::sq;
use crate::board::{Board, BoardBuilder, Color, GameStatus, Piece};

#[test]
fn test_opening_position_is_ongoing() {
    let board = Board::new();
    assert_eq!(board.terminal_status(), GameStatus::Ongoing(Color::White));
    assert_eq!(board.terminal_status().winner(), None);
}

#[test]
fn test_capturing_the_last_piece_wins() {
    let mut board = BoardBuilder::new()
        .piece(sq(1), Color::White, Piece::Man)
        .piece(sq(6), Color::Black, Piece::Man)
        .build();

    board.apply_move(sq(1), sq(10)).unwrap();
    assert_eq!(board.terminal_status(), GameStatus::WhiteWins);
    assert_eq!(board.terminal_status().winner(), Some(Color::White));
}

#[test]
fn test_black_wins_by_capture() {
    let mut board = BoardBuilder::new()
        .piece(sq(32), Color::Black, Piece::Man)
        .piece(sq(27), Color::White, Piece::Man)
        .side_to_move(Color::Black)
        .build();

    board.apply_move(sq(32), sq(23)).unwrap();
    assert_eq!(board.terminal_status(), GameStatus::BlackWins);
}

#[test]
fn test_stuck_side_loses() {
    // Black's lone man on 29 has its step blocked by 25 and its jump
    // landing blocked by 22: no moves, so white wins.
    let board = BoardBuilder::new()
        .piece(sq(29), Color::Black, Piece::Man)
        .piece(sq(25), Color::White, Piece::Man)
        .piece(sq(22), Color::White, Piece::Man)
        .side_to_move(Color::Black)
        .build();

    assert!(board.legal_moves().is_empty());
    assert_eq!(board.terminal_status(), GameStatus::WhiteWins);
}

#[test]
fn test_stuck_white_loses() {
    let board = BoardBuilder::new()
        .piece(sq(4), Color::White, Piece::Man)
        .piece(sq(8), Color::Black, Piece::Man)
        .piece(sq(11), Color::Black, Piece::Man)
        .build();

    assert!(board.legal_moves().is_empty());
    assert_eq!(board.terminal_status(), GameStatus::BlackWins);
}

#[test]
fn test_blocked_side_not_on_move_is_not_a_loss() {
    // Same blocked shape, but with white to move the game is ongoing.
    let board = BoardBuilder::new()
        .piece(sq(29), Color::Black, Piece::Man)
        .piece(sq(25), Color::White, Piece::Man)
        .piece(sq(22), Color::White, Piece::Man)
        .side_to_move(Color::White)
        .build();

    assert_eq!(board.terminal_status(), GameStatus::Ongoing(Color::White));
}

#[test]
fn test_mid_chain_position_is_ongoing() {
    let mut board = BoardBuilder::new()
        .piece(sq(1), Color::White, Piece::Man)
        .piece(sq(6), Color::Black, Piece::Man)
        .piece(sq(15), Color::Black, Piece::Man)
        .build();

    board.apply_move(sq(1), sq(10)).unwrap();
    assert!(board.in_chain());
    assert_eq!(board.terminal_status(), GameStatus::Ongoing(Color::White));
}
