//! Move types, the move list and history records.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::square::SquareIdx;

/// A single candidate hop: either a quiet step or one capturing jump.
///
/// A multi-jump turn is a sequence of `Jump` hops applied one at a time;
/// the chained whole is recorded as a [`MoveRecord::JumpChain`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Move {
    /// Non-capturing one-square diagonal move
    Step { from: SquareIdx, to: SquareIdx },
    /// Two-square diagonal move capturing the piece in between
    Jump { from: SquareIdx, to: SquareIdx },
}

impl Move {
    /// Source square
    #[inline]
    #[must_use]
    pub const fn from(self) -> SquareIdx {
        match self {
            Move::Step { from, .. } | Move::Jump { from, .. } => from,
        }
    }

    /// Destination square
    #[inline]
    #[must_use]
    pub const fn to(self) -> SquareIdx {
        match self {
            Move::Step { to, .. } | Move::Jump { to, .. } => to,
        }
    }

    /// Returns true for capturing moves
    #[inline]
    #[must_use]
    pub const fn is_jump(self) -> bool {
        matches!(self, Move::Jump { .. })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Step { from, to } => write!(f, "{from}-{to}"),
            Move::Jump { from, to } => write!(f, "{from}x{to}"),
        }
    }
}

// Worst case over all importable positions: every playable square holds a
// king with at most 4 diagonal directions, so 32 * 4 bounds either the step
// or the jump list.
pub(crate) const MAX_MOVES: usize = 128;

// Filler for unused MoveList slots, never observable through the API.
const EMPTY_MOVE: Move = Move::Step {
    from: SquareIdx::FIRST,
    to: SquareIdx::FIRST,
};

/// List of moves with fixed-size backing array.
#[derive(Clone, Debug)]
pub struct MoveList {
    moves: [Move; MAX_MOVES],
    len: usize,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: [EMPTY_MOVE; MAX_MOVES],
            len: 0,
        }
    }

    pub(crate) fn push(&mut self, mv: Move) {
        self.moves[self.len] = mv;
        self.len += 1;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        if idx < self.len {
            Some(self.moves[idx])
        } else {
            None
        }
    }

    #[must_use]
    pub fn first(&self) -> Option<Move> {
        self.get(0)
    }

    /// Membership test for the legality precondition
    #[must_use]
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// Find the move with the given endpoints, if any
    #[must_use]
    pub fn find(&self, from: SquareIdx, to: SquareIdx) -> Option<Move> {
        self.iter()
            .copied()
            .find(|m| m.from() == from && m.to() == to)
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl Default for MoveList {
    fn default() -> Self {
        MoveList::new()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    list: MoveList,
    idx: usize,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        if self.idx < self.list.len {
            let mv = self.list.moves[self.idx];
            self.idx += 1;
            Some(mv)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.list.len - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter { list: self, idx: 0 }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        assert!(
            idx < self.len,
            "MoveList index {} out of bounds (len {})",
            idx,
            self.len
        );
        &self.moves[idx]
    }
}

/// One entry of the append-only move history.
///
/// A completed multi-jump occupies a single record: the first continuation
/// upgrades a `Jump` to a `JumpChain`, and each further hop appends one
/// landing square.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveRecord {
    Step {
        from: SquareIdx,
        to: SquareIdx,
    },
    Jump {
        from: SquareIdx,
        to: SquareIdx,
    },
    JumpChain {
        from: SquareIdx,
        landings: Vec<SquareIdx>,
    },
}

impl MoveRecord {
    /// Append a continuation landing. Steps never chain.
    pub(crate) fn extend(&mut self, landing: SquareIdx) {
        match self {
            MoveRecord::Jump { from, to } => {
                *self = MoveRecord::JumpChain {
                    from: *from,
                    landings: vec![*to, landing],
                };
            }
            MoveRecord::JumpChain { landings, .. } => landings.push(landing),
            MoveRecord::Step { .. } => unreachable!("steps cannot chain"),
        }
    }

    /// Square the moving piece ended on
    #[must_use]
    pub fn last_landing(&self) -> SquareIdx {
        match self {
            MoveRecord::Step { to, .. } | MoveRecord::Jump { to, .. } => *to,
            MoveRecord::JumpChain { landings, .. } => {
                *landings.last().expect("chain has at least one landing")
            }
        }
    }
}

impl fmt::Display for MoveRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRecord::Step { from, to } => write!(f, "{from}-{to}"),
            MoveRecord::Jump { from, to } => write!(f, "{from}x{to}"),
            MoveRecord::JumpChain { from, landings } => {
                write!(f, "{from}")?;
                for landing in landings {
                    write!(f, "x{landing}")?;
                }
                Ok(())
            }
        }
    }
}
