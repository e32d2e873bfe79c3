//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `coords.rs` - Coordinate mapping round trips and coverage
//! - `movegen.rs` - Step/jump enumeration and capture priority
//! - `apply.rs` - Move application, promotion and jump chains
//! - `status.rs` - Terminal-state classification
//! - `import_export.rs` - Square-array import/export
//! - `proptest.rs` - Property-based tests

mod apply;
mod status;

use super::SquareIdx;

/// Shorthand for a known-good square index in test positions.
pub(crate) fn sq(n: u8) -> SquareIdx {
    SquareIdx::new(n).unwrap()
}

#[cfg(feature = "serde")]
mod serde_round_trip {
    use super::sq;
    use crate::board::{Color, GameStatus, Move, MoveRecord};

    #[test]
    fn test_move_json_round_trip() {
        let mv = Move::Jump {
            from: sq(1),
            to: sq(10),
        };
        let json = serde_json::to_string(&mv).unwrap();
        assert_eq!(serde_json::from_str::<Move>(&json).unwrap(), mv);
    }

    #[test]
    fn test_record_json_round_trip() {
        let record = MoveRecord::JumpChain {
            from: sq(1),
            landings: vec![sq(10), sq(19)],
        };
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(serde_json::from_str::<MoveRecord>(&json).unwrap(), record);
    }

    #[test]
    fn test_status_json_round_trip() {
        let status = GameStatus::Ongoing(Color::Black);
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(serde_json::from_str::<GameStatus>(&json).unwrap(), status);
    }
}
