//! Undo
//!
//! Tests that undo walks the full history back to the initial position,
//! restoring both the board and the player to move.

use checkmate_engine::coretypes::{PieceKind::*, Player::*};
use checkmate_engine::error::ErrorKind;
use checkmate_engine::*;

#[test]
fn undo_single_move() {
    let mut game = Game::new();
    let before = game.clone();
    let move_ = Move::new(6, 3, 4, 3);

    game.do_move(move_);
    assert_ne!(game, before);
    assert_eq!(game.undo().unwrap(), move_);
    assert_eq!(game, before);
    assert_eq!(game.current_player(), White);
}

#[test]
fn undo_walks_back_every_move() {
    let mut game = Game::new();
    let mut ai = RandomPlayer::with_seed(2024);
    let mut positions = vec![game.clone()];
    let mut played = Vec::new();

    for _ in 0..20 {
        match ai.play(&mut game) {
            Some(move_) => {
                played.push(move_);
                positions.push(game.clone());
            }
            None => break,
        }
    }
    assert_eq!(game.history_len(), played.len());

    // Pop positions in reverse; each undo must land exactly on the previous one.
    positions.pop();
    while let Some(expected) = positions.pop() {
        let undone = game.undo().unwrap();
        assert_eq!(Some(undone), played.pop());
        assert_eq!(game, expected);
    }
    assert_eq!(game, Game::new());
    assert_eq!(game.undo().unwrap_err().kind(), ErrorKind::UndoUnavailable);
}

#[test]
fn undo_restores_captured_piece() {
    let mut game = Game::new();
    for move_ in [Move::new(6, 4, 4, 4), Move::new(1, 3, 3, 3)] {
        assert!(game.do_legal_move(move_).is_valid());
    }
    let capture = Move::new(4, 4, 3, 3);
    assert!(game.do_legal_move(capture).is_valid());
    assert_eq!(game.piece_at(3, 3), Some(Piece::new(White, Pawn)));

    game.undo().unwrap();
    assert_eq!(game.piece_at(3, 3), Some(Piece::new(Black, Pawn)));
    assert_eq!(game.piece_at(4, 4), Some(Piece::new(White, Pawn)));
    assert_eq!(game.current_player(), White);
}

#[test]
fn undo_reverses_promotion() {
    let mut game = Game::empty();
    game.set_piece(7, 7, Some(Piece::new(White, King))).unwrap();
    game.set_piece(0, 7, Some(Piece::new(Black, King))).unwrap();
    game.set_piece(1, 0, Some(Piece::new(White, Pawn))).unwrap();

    game.do_move(Move::new(1, 0, 0, 0));
    assert_eq!(game.piece_at(0, 0), Some(Piece::new(White, Queen)));

    game.undo().unwrap();
    assert_eq!(game.piece_at(1, 0), Some(Piece::new(White, Pawn)));
    assert_eq!(game.piece_at(0, 0), None);
}

#[test]
fn undo_empty_history_fails() {
    let mut game = Game::new();
    let err = game.undo().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UndoUnavailable);
    assert_eq!(game, Game::new());
}
