//! Move application: the one-hop state machine.
//!
//! Each call to [`Board::apply_move`] performs exactly one step or one jump,
//! crowns any man that reached its back rank, and then either hands the turn
//! to the opponent or holds it for a forced continuation jump.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::error::MoveError;
use super::state::Cell;
use super::types::{Color, Move, MoveRecord, Piece, Square, SquareIdx};
use super::Board;

/// Whether an applied move was a quiet step or a capture.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Step,
    Jump,
}

/// Where the state machine landed after one hop.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TurnStatus {
    /// The same side must continue jumping with the same piece
    MidChain,
    /// The turn has passed to the opponent
    TurnComplete,
}

/// Result of a successful [`Board::apply_move`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct MoveOutcome {
    pub kind: MoveKind,
    pub status: TurnStatus,
}

impl Board {
    /// Apply one hop for the side to move.
    ///
    /// The pair must be in the current legal set or the call fails with
    /// [`MoveError::NotLegal`] and the board is left unmodified. On success
    /// the history is updated (chained jumps extend the record in place)
    /// and the returned status says whether the turn passed.
    pub fn apply_move(&mut self, from: SquareIdx, to: SquareIdx) -> Result<MoveOutcome, MoveError> {
        let Some(mv) = self.legal_moves().find(from, to) else {
            return Err(MoveError::NotLegal { from, to });
        };

        let continuing = self.chain.is_some();
        let kind = match mv {
            Move::Step { .. } => {
                self.step_piece(from, to);
                MoveKind::Step
            }
            Move::Jump { .. } => {
                self.jump_piece(from, to);
                MoveKind::Jump
            }
        };
        let crowned = self.crown_back_ranks();

        if continuing {
            match self.history.last_mut() {
                Some(record) => record.extend(to),
                None => unreachable!("mid-chain with empty history"),
            }
        } else {
            self.history.push(match kind {
                MoveKind::Step => MoveRecord::Step { from, to },
                MoveKind::Jump => MoveRecord::Jump { from, to },
            });
        }

        // A freshly crowned king may not keep jumping this turn.
        let status = if kind == MoveKind::Jump && crowned == 0 && self.has_jump_from(to) {
            self.chain = Some(to);
            TurnStatus::MidChain
        } else {
            self.turn = self.turn.opponent();
            self.chain = None;
            TurnStatus::TurnComplete
        };

        #[cfg(feature = "logging")]
        log::debug!("applied {mv}, crowned {crowned}, status {status:?}");

        Ok(MoveOutcome { kind, status })
    }

    /// Slide a piece one diagonal square onto an empty cell.
    fn step_piece(&mut self, from: SquareIdx, to: SquareIdx) {
        assert!(self.is_empty(to), "step destination {to} is occupied");
        let mover = self.cell(from);
        self.set_cell(from, Cell::Empty);
        self.set_cell(to, mover);
    }

    /// Jump a piece two diagonal squares, removing the piece in between.
    ///
    /// Midpoint and destination conditions were established by move
    /// generation; their violation means the enumerator and applier have
    /// drifted apart, which is a defect, so they are asserted fatally.
    fn jump_piece(&mut self, from: SquareIdx, to: SquareIdx) {
        let (a, c) = (from.to_square(), to.to_square());
        let mid = SquareIdx::from_square(Square(
            (a.row() + c.row()) / 2,
            (a.col() + c.col()) / 2,
        ));

        let mover = self.cell(from);
        let Cell::Occupied(color, _) = mover else {
            unreachable!("jump source {from} holds no piece")
        };
        match self.cell(mid) {
            Cell::Occupied(mid_color, _) => assert!(
                mid_color == color.opponent(),
                "jumped piece on {mid} is not an opponent"
            ),
            _ => panic!("no piece to capture on {mid}"),
        }
        assert!(self.is_empty(to), "jump landing {to} is occupied");

        self.set_cell(from, Cell::Empty);
        self.set_cell(mid, Cell::Empty);
        self.set_cell(to, mover);
    }

    /// Crown men standing on their promotion rank, in place.
    ///
    /// Scans both back ranks after every move; re-running it is a no-op.
    /// Returns how many men were crowned.
    pub(crate) fn crown_back_ranks(&mut self) -> usize {
        let mut crowned = 0;
        for side in Color::BOTH {
            for sq in SquareIdx::all().filter(|sq| sq.to_square().row() == side.crown_row()) {
                if self.cell(sq) == Cell::Occupied(side, Piece::Man) {
                    self.set_cell(sq, Cell::Occupied(side, Piece::King));
                    crowned += 1;
                }
            }
        }
        crowned
    }
}
