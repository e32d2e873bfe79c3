//! Legal move enumeration.
//!
//! Candidates are generated per occupied square and filtered by the
//! capture-priority rule: if any jump exists anywhere for the side to move,
//! steps are excluded entirely. Mid-chain, only jumps from the continuing
//! piece are offered and the direction restriction on men is lifted.

use super::types::{Color, Move, MoveList, Square, SquareIdx};
use super::Board;

impl Board {
    /// Legal moves for the side to move, honoring any pending jump chain.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        self.moves_for(self.turn, self.chain)
    }

    /// Legal moves for `side`, optionally scoped to a continuation square.
    ///
    /// With `continuation` set, only jumps from that square are returned
    /// (the mid-chain sub-turn rule); the square is expected to hold the
    /// piece that just jumped.
    #[must_use]
    pub fn moves_for(&self, side: Color, continuation: Option<SquareIdx>) -> MoveList {
        let mut jumps = MoveList::new();
        if let Some(from) = continuation {
            self.jumps_from(from, true, &mut jumps);
            return jumps;
        }

        let mut steps = MoveList::new();
        for from in SquareIdx::all() {
            match self.piece_at(from) {
                Some((color, _)) if color == side => {
                    self.jumps_from(from, false, &mut jumps);
                    self.steps_from(from, &mut steps);
                }
                _ => {}
            }
        }

        // Jumps are mandatory: any capture anywhere rules out all steps.
        if jumps.is_empty() {
            steps
        } else {
            jumps
        }
    }

    /// Push the step candidates for the piece on `from`.
    ///
    /// Men step one row forward only; kings step both ways. Empty squares
    /// only; out-of-range neighbors are silently discarded.
    pub(crate) fn steps_from(&self, from: SquareIdx, out: &mut MoveList) {
        let Some((color, piece)) = self.piece_at(from) else {
            return;
        };
        let sq = from.to_square();
        let (r, c) = (sq.row() as isize, sq.col() as isize);

        let (rows, nrows) = if piece.is_king() {
            ([r + 1, r - 1], 2)
        } else {
            ([r + color.forward(), 0], 1)
        };

        for &tr in &rows[..nrows] {
            for dc in [-1isize, 1] {
                let tc = c + dc;
                if (0..8).contains(&tr) && (0..8).contains(&tc) {
                    let to = SquareIdx::from_square(Square(tr as usize, tc as usize));
                    if self.is_empty(to) {
                        out.push(Move::Step { from, to });
                    }
                }
            }
        }
    }

    /// Push the single-hop jump candidates for the piece on `from`.
    ///
    /// `any_direction` lifts the forward-only restriction on men, which is
    /// the rule mid-chain. A jump needs an opposing piece on the midpoint
    /// and an empty landing square.
    pub(crate) fn jumps_from(&self, from: SquareIdx, any_direction: bool, out: &mut MoveList) {
        let Some((color, piece)) = self.piece_at(from) else {
            return;
        };
        let sq = from.to_square();
        let (r, c) = (sq.row() as isize, sq.col() as isize);

        let (rows, nrows) = if piece.is_king() || any_direction {
            ([r + 2, r - 2], 2)
        } else {
            ([r + 2 * color.forward(), 0], 1)
        };

        for &tr in &rows[..nrows] {
            for dc in [-2isize, 2] {
                let tc = c + dc;
                if !(0..8).contains(&tr) || !(0..8).contains(&tc) {
                    continue;
                }
                let to = SquareIdx::from_square(Square(tr as usize, tc as usize));
                let mid = SquareIdx::from_square(Square(
                    ((r + tr) / 2) as usize,
                    ((c + tc) / 2) as usize,
                ));
                if !self.is_empty(to) {
                    continue;
                }
                if let Some((mid_color, _)) = self.piece_at(mid) {
                    if mid_color == color.opponent() {
                        out.push(Move::Jump { from, to });
                    }
                }
            }
        }
    }

    /// True if the piece on `from` has any jump, in any direction.
    /// This is the chain-entry check and the chain-continuation check.
    pub(crate) fn has_jump_from(&self, from: SquareIdx) -> bool {
        let mut jumps = MoveList::new();
        self.jumps_from(from, true, &mut jumps);
        !jumps.is_empty()
    }
}
