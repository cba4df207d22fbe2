//! Random-move player.
//!
//! Proposes random coordinates until one is a valid move for the player to
//! move. It only uses the public surface of [`Game`], the same one a human
//! front end uses.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::coretypes::{CoordKind, Move};
use crate::game::Game;

/// RandomPlayer picks moves for whichever player is to move.
///
/// Default values:
///
/// * `rng`: seeded from system entropy
/// * `max_attempts`: 10_000
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    rng: StdRng,
    max_attempts: usize,
}

impl RandomPlayer {
    pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

    /// Create a new RandomPlayer seeded from system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Create a RandomPlayer whose choices are reproducible.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            max_attempts: Self::DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Set how many random coordinates are proposed before choosing
    /// from the full list of legal moves instead.
    pub fn max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Returns a random coordinate pair inside the game's board.
    fn propose(&mut self, game: &Game) -> Move {
        let rows = game.rows() as CoordKind;
        let cols = game.cols() as CoordKind;
        Move::new(
            self.rng.gen_range(0..rows),
            self.rng.gen_range(0..cols),
            self.rng.gen_range(0..rows),
            self.rng.gen_range(0..cols),
        )
    }

    /// Choose a valid move for the player to move, or None if the game is complete.
    pub fn choose_move(&mut self, game: &Game) -> Option<Move> {
        if game.is_complete() {
            return None;
        }

        for attempt in 0..self.max_attempts {
            let move_ = self.propose(game);
            if game.is_valid_move(move_) {
                debug!(%move_, attempt, "random proposal accepted");
                return Some(move_);
            }
        }

        debug!(max_attempts = self.max_attempts, "proposals exhausted, choosing from legal moves");
        let legal_moves = game.legal_moves();
        legal_moves.choose(&mut self.rng).copied()
    }

    /// Choose a move and play it on `game`. Returns the move played.
    pub fn play(&mut self, game: &mut Game) -> Option<Move> {
        let move_ = self.choose_move(game)?;
        game.do_move(move_);
        Some(move_)
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}
