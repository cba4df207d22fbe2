//! Move containers used in Checkmate engine.
//!
//! The underlying type of MoveList may change at any time during
//! pre-1.0 development, so a MoveList type alias makes changes easy.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::coretypes::{Move, MAX_MOVES};

/// MoveList is a container that can hold at most `MAX_MOVES`, more than any placement of pieces allows.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

/// A board as it was before `move_` was played on it.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Snapshot {
    pub board: Board,
    pub move_: Move,
}

/// Every snapshot of a game, oldest first. Games have no length limit, so this lives on the heap.
pub type MoveHistory = Vec<Snapshot>;

/// Returns the moves of a MoveList separated by spaces.
/// Display cannot be implemented on external types.
pub fn display(moves: &MoveList) -> String {
    moves
        .iter()
        .map(Move::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
