//! Move-tree node counts.
//!
//! Counting the leaves of the legal move tree exercises validation, move
//! execution and undo together, and the counts for the start position are
//! well known. [Perft](https://www.chessprogramming.org/Perft)

use std::iter::Sum;
use std::ops::AddAssign;
use std::sync::{Arc, Mutex};
use std::thread;

use crate::coretypes::Move;
use crate::game::Game;
use crate::movelist::MoveList;

/// Leaf positions reached at the requested ply.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct PerftInfo {
    pub nodes: u64,
}

impl AddAssign for PerftInfo {
    fn add_assign(&mut self, rhs: Self) {
        self.nodes += rhs.nodes;
    }
}

impl Sum for PerftInfo {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        PerftInfo {
            nodes: iter.map(|info| info.nodes).sum(),
        }
    }
}

/// Count the paths of exactly `ply` legal moves from `game`.
/// Games that end earlier contribute nothing. `game` itself is never changed;
/// each worker thread plays on its own clone.
pub fn perft(game: &Game, ply: u8, threads: usize) -> PerftInfo {
    // Guard easy to calculate inputs.
    if ply == 0 {
        // Ever only 1 position at 0 ply.
        return PerftInfo { nodes: 1 };
    } else if ply <= 2 || threads <= 1 {
        // Simple enough to not require threads, or single threaded.
        return perft_recurse(&mut game.clone(), ply);
    }
    debug_assert!(ply > 2);
    debug_assert!(threads > 1);

    let legal_moves = game.legal_moves();
    // Guard no moves to search.
    if legal_moves.is_empty() {
        return PerftInfo::default();
    }

    let legal_moves = Arc::new(Mutex::new(legal_moves));

    // Each worker returns what it counted, the total is summed on join.
    let handles: Vec<_> = (0..threads)
        .map(|_| {
            let game = game.clone();
            let legal_moves = Arc::clone(&legal_moves);
            thread::spawn(move || perft_executor(game, ply, legal_moves))
        })
        .collect();

    handles
        .into_iter()
        .map(|handle| handle.join().unwrap_or_else(|panic| std::panic::resume_unwind(panic)))
        .sum()
}

/// perft_executor works by stealing one move at a time from given moves list and running perft on that move.
/// When there are no moves left to steal, this function returns the data it has collected.
/// params:
/// game - game to evaluate moves on.
/// ply - ply of provided game. Must be greater than 1.
/// moves - synchronous access to list of moves to steal from. Moves must be valid for given game.
fn perft_executor(mut game: Game, ply: u8, moves: Arc<Mutex<MoveList>>) -> PerftInfo {
    debug_assert!(ply > 1);
    let mut perft_info = PerftInfo::default();

    while let Some(move_) = steal(&moves) {
        game.do_move(move_);
        perft_info += perft_recurse(&mut game, ply - 1);
        undo_played(&mut game);
    }

    perft_info
}

/// Pop one move, recovering the list if another worker panicked while holding it.
fn steal(moves: &Mutex<MoveList>) -> Option<Move> {
    moves
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner())
        .pop()
}

/// Takes back a move this module just played. Its snapshot must be on the history.
fn undo_played(game: &mut Game) {
    let undone = game.undo();
    debug_assert!(undone.is_ok(), "perft undo without history: {undone:?}");
}

/// Ply must be non-zero.
fn perft_recurse(game: &mut Game, ply: u8) -> PerftInfo {
    debug_assert_ne!(ply, 0);
    let legal_moves = game.legal_moves();

    if ply == 1 {
        // If we reach the depth before the end,
        // return the count of legal moves.
        PerftInfo {
            nodes: legal_moves.len() as u64,
        }
    } else {
        let mut perft_info = PerftInfo::default();
        for legal_move in legal_moves {
            game.do_move(legal_move);
            perft_info += perft_recurse(game, ply - 1);
            undo_played(game);
        }
        perft_info
    }
}
