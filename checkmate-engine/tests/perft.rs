//! Performance Test (perft)
//!
//! Node counts from the start position. Castling and en passant cannot occur
//! within four plies, so the published counts apply unchanged.
//! [Perft Results](https://www.chessprogramming.org/Perft_Results)

use std::thread::available_parallelism;

use checkmate_engine::coretypes::{PieceKind::*, Player::*};
use checkmate_engine::perft::*;
use checkmate_engine::*;

const ONE_THREAD: usize = 1;

fn cpu_threads() -> usize {
    available_parallelism()
        .map(|inner| inner.get())
        .unwrap_or(1)
}

/// Run single and multithreaded perft `expected_nodes.len()` times.
/// The index of each expected_node value is its ply.
#[inline(always)]
fn perft_tester(game: &Game, expected_nodes: Vec<u64>) {
    for (ply, expected_node) in expected_nodes.into_iter().enumerate() {
        let single_thread_result = perft(game, ply as u8, ONE_THREAD);
        let multi_thread_result = perft(game, ply as u8, cpu_threads());

        println!("perft({ply}): {single_thread_result:?}");
        assert_eq!(single_thread_result.nodes, expected_node);
        assert_eq!(single_thread_result, multi_thread_result);
    }
}

#[test]
fn perft_starting_position() {
    perft_tester(&Game::new(), vec![1, 20, 400, 8_902]);
}

#[test]
#[ignore]
fn perft_starting_position_expensive() {
    let ply4 = perft(&Game::new(), 4, cpu_threads());
    println!("perft(4): {:?}", ply4);
    assert_eq!(ply4.nodes, 197_281);
}

#[test]
fn perft_leaves_game_untouched() {
    let game = Game::new();
    perft(&game, 3, cpu_threads());
    assert_eq!(game, Game::new());
}

#[test]
fn perft_kings_and_pawn() {
    // White: Ke1, pawn e2. Black: Ke8.
    let mut game = Game::empty();
    game.set_piece(7, 4, Some(Piece::new(White, King))).unwrap();
    game.set_piece(6, 4, Some(Piece::new(White, Pawn))).unwrap();
    game.set_piece(0, 4, Some(Piece::new(Black, King))).unwrap();

    // King: d1 d2 f1 f2. Pawn: e3 e4.
    assert_eq!(perft(&game, 1, ONE_THREAD).nodes, 6);
    // Black king always has all 5 squares: nothing White plays reaches rank 7.
    assert_eq!(perft(&game, 2, ONE_THREAD).nodes, 30);
    assert_eq!(
        perft(&game, 3, ONE_THREAD),
        perft(&game, 3, cpu_threads())
    );
}
