//! Move application tests: steps, jumps, chains and promotion.

use super::sq;
use crate::board::{
    Board, BoardBuilder, Color, Move, MoveError, MoveKind, MoveRecord, Piece, TurnStatus,
};

#[test]
fn test_step_moves_piece_and_passes_turn() {
    let mut board = Board::new();
    let outcome = board.apply_move(sq(9), sq(13)).unwrap();

    assert_eq!(outcome.kind, MoveKind::Step);
    assert_eq!(outcome.status, TurnStatus::TurnComplete);
    assert!(board.is_empty(sq(9)));
    assert_eq!(board.piece_at(sq(13)), Some((Color::White, Piece::Man)));
    assert_eq!(board.turn(), Color::Black);
    assert!(!board.in_chain());
    assert_eq!(
        board.history(),
        &[MoveRecord::Step {
            from: sq(9),
            to: sq(13),
        }]
    );
}

#[test]
fn test_illegal_move_leaves_board_unmodified() {
    let mut board = Board::new();
    let before = board.export_squares();

    let err = board.apply_move(sq(1), sq(10)).unwrap_err();
    assert_eq!(
        err,
        MoveError::NotLegal {
            from: sq(1),
            to: sq(10),
        }
    );
    assert_eq!(board.export_squares(), before);
    assert_eq!(board.turn(), Color::White);
    assert!(board.history().is_empty());
}

#[test]
fn test_jump_removes_captured_piece() {
    let mut board = BoardBuilder::new()
        .piece(sq(1), Color::White, Piece::Man)
        .piece(sq(6), Color::Black, Piece::Man)
        .build();

    let outcome = board.apply_move(sq(1), sq(10)).unwrap();
    assert_eq!(outcome.kind, MoveKind::Jump);
    assert_eq!(outcome.status, TurnStatus::TurnComplete);
    assert!(board.is_empty(sq(1)));
    assert!(board.is_empty(sq(6)));
    assert_eq!(board.piece_at(sq(10)), Some((Color::White, Piece::Man)));
    assert_eq!(board.count_pieces(Color::Black), 0);
    assert_eq!(board.count_pieces(Color::White), 1);
}

#[test]
fn test_double_jump_chain() {
    let mut board = BoardBuilder::new()
        .piece(sq(1), Color::White, Piece::Man)
        .piece(sq(6), Color::Black, Piece::Man)
        .piece(sq(15), Color::Black, Piece::Man)
        .build();

    let first = board.apply_move(sq(1), sq(10)).unwrap();
    assert_eq!(first.status, TurnStatus::MidChain);
    assert_eq!(board.turn(), Color::White);
    assert_eq!(board.chain_square(), Some(sq(10)));
    assert_eq!(
        board.history(),
        &[MoveRecord::Jump {
            from: sq(1),
            to: sq(10),
        }]
    );

    // Mid-chain, only the continuing piece may move.
    let moves = board.legal_moves();
    assert_eq!(moves.len(), 1);
    assert_eq!(moves[0], Move::Jump {
        from: sq(10),
        to: sq(19),
    });
    assert_eq!(
        board.apply_move(sq(10), sq(14)).unwrap_err(),
        MoveError::NotLegal {
            from: sq(10),
            to: sq(14),
        }
    );

    let second = board.apply_move(sq(10), sq(19)).unwrap();
    assert_eq!(second.status, TurnStatus::TurnComplete);
    assert_eq!(board.turn(), Color::Black);
    assert!(!board.in_chain());

    // One record for the whole chain, grown in place.
    assert_eq!(
        board.history(),
        &[MoveRecord::JumpChain {
            from: sq(1),
            landings: vec![sq(10), sq(19)],
        }]
    );
    assert_eq!(board.history()[0].to_string(), "1x10x19");
}

#[test]
fn test_man_continues_chain_backward() {
    let mut board = BoardBuilder::new()
        .piece(sq(1), Color::White, Piece::Man)
        .piece(sq(6), Color::Black, Piece::Man)
        .piece(sq(7), Color::Black, Piece::Man)
        .build();

    assert_eq!(
        board.apply_move(sq(1), sq(10)).unwrap().status,
        TurnStatus::MidChain
    );
    // The continuation jumps backward over 7, which a lone man could not.
    let outcome = board.apply_move(sq(10), sq(3)).unwrap();
    assert_eq!(outcome.status, TurnStatus::TurnComplete);
    assert_eq!(board.count_pieces(Color::Black), 0);
    assert_eq!(board.history()[0].to_string(), "1x10x3");
}

#[test]
fn test_man_promotes_on_back_rank() {
    let mut board = BoardBuilder::new()
        .piece(sq(25), Color::White, Piece::Man)
        .piece(sq(13), Color::Black, Piece::Man)
        .build();

    let outcome = board.apply_move(sq(25), sq(29)).unwrap();
    assert_eq!(outcome.status, TurnStatus::TurnComplete);
    assert_eq!(board.piece_at(sq(29)), Some((Color::White, Piece::King)));

    // The new king moves backward, which the man could not.
    let moves = board.moves_for(Color::White, None);
    assert!(moves.contains(Move::Step {
        from: sq(29),
        to: sq(25),
    }));
}

#[test]
fn test_promotion_suppresses_chaining() {
    // The jump 21x30 crowns on landing even though a further jump over 26
    // would exist; a king born this move may not continue.
    let mut board = BoardBuilder::new()
        .piece(sq(21), Color::White, Piece::Man)
        .piece(sq(25), Color::Black, Piece::Man)
        .piece(sq(26), Color::Black, Piece::Man)
        .build();

    let outcome = board.apply_move(sq(21), sq(30)).unwrap();
    assert_eq!(outcome.kind, MoveKind::Jump);
    assert_eq!(outcome.status, TurnStatus::TurnComplete);
    assert_eq!(board.piece_at(sq(30)), Some((Color::White, Piece::King)));
    assert_eq!(board.turn(), Color::Black);
    assert!(!board.in_chain());
    assert_eq!(board.count_pieces(Color::Black), 1);
    assert_eq!(board.history()[0].to_string(), "21x30");
}

#[test]
fn test_crowning_is_idempotent() {
    let mut board = BoardBuilder::new()
        .piece(sq(29), Color::White, Piece::Man)
        .piece(sq(2), Color::Black, Piece::Man)
        .build();

    assert_eq!(board.crown_back_ranks(), 2);
    let after_first = board.export_squares();
    assert_eq!(board.crown_back_ranks(), 0);
    assert_eq!(board.export_squares(), after_first);
    assert_eq!(board.piece_at(sq(29)), Some((Color::White, Piece::King)));
    assert_eq!(board.piece_at(sq(2)), Some((Color::Black, Piece::King)));
}

#[test]
fn test_kings_are_not_recrowned() {
    let mut board = BoardBuilder::new()
        .piece(sq(32), Color::White, Piece::King)
        .build();
    assert_eq!(board.crown_back_ranks(), 0);
}

#[test]
fn test_opponent_piece_cannot_be_moved() {
    let mut board = Board::new();
    // Square 21 holds a black man but white is to move.
    let err = board.apply_move(sq(21), sq(17)).unwrap_err();
    assert!(matches!(err, MoveError::NotLegal { .. }));
}
