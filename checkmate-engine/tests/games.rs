//! Games
//!
//! Short complete games played from the start position through the public
//! move interface, ending in checkmate.

use checkmate_engine::coretypes::Player::*;
use checkmate_engine::*;

/// Plays every move with validation, asserting each one is accepted.
#[inline(always)]
fn play_all(game: &mut Game, moves: &[&str]) {
    for notation in moves {
        let move_: Move = notation.parse().unwrap();
        assert!(!game.is_complete(), "game ended before {notation}");
        assert_eq!(game.do_legal_move(move_), MoveValidity::Valid, "{notation}");
    }
}

#[test]
fn scholars_mate() {
    let mut game = Game::new();
    play_all(
        &mut game,
        &["e2e4", "e7e5", "d1h5", "b7b6", "f1c4", "a7a6", "h5f7"],
    );

    assert!(game.in_check(Black));
    assert!(game.is_complete());
    assert_eq!(game.status(), GameStatus::Checkmate { winner: White });
    assert_eq!(game.history_len(), 7);
    assert_eq!(game.last_move(), Some(Move::new(3, 7, 1, 5)));
}

#[test]
fn fools_mate() {
    let mut game = Game::new();
    play_all(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);

    assert!(game.in_check(White));
    assert!(game.is_complete());
    assert_eq!(game.status(), GameStatus::Checkmate { winner: Black });
}

#[test]
fn numeric_notation_matches_algebraic() {
    let mut algebraic = Game::new();
    let mut numeric = Game::new();

    play_all(&mut algebraic, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    play_all(&mut numeric, &["6 5 5 5", "1 4 3 4", "6 6 4 6", "0 3 4 7"]);
    assert_eq!(algebraic, numeric);
}

#[test]
fn moves_after_mate_are_ignored() {
    let mut game = Game::new();
    play_all(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    let mated = game.clone();

    // King step that would be legal geometry, but the game is over.
    game.do_move(Move::new(7, 4, 6, 5));
    assert_eq!(game, mated);
    assert!(game.legal_moves().is_empty());
}

#[test]
fn queen_diagonal_mate() {
    let mut game = Game::new();
    play_all(&mut game, &["e2e4", "f7f6", "d2d4", "g7g5", "d1h5"]);

    assert!(game.in_check(Black));
    assert_eq!(game.status(), GameStatus::Checkmate { winner: White });
}

#[test]
fn check_must_be_answered() {
    let mut game = Game::new();
    play_all(&mut game, &["e2e4", "f7f6", "d1h5"]);

    assert!(game.in_check(Black));
    assert!(!game.is_complete());
    // A developing move ignores the check.
    assert_eq!(game.do_legal_move(Move::new(0, 1, 2, 2)), MoveValidity::MovingIntoCheck);
    assert_eq!(game.current_player(), Black);

    // Pawn interposes on g6.
    play_all(&mut game, &["g7g6"]);
    assert!(!game.in_check(Black));
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn random_games_only_play_valid_moves() {
    for seed in 0..4 {
        let mut game = Game::new();
        let mut ai = RandomPlayer::with_seed(seed);

        for _ in 0..60 {
            let move_ = match ai.choose_move(&game) {
                Some(move_) => move_,
                None => {
                    assert!(game.is_complete());
                    break;
                }
            };
            assert_eq!(game.do_legal_move(move_), MoveValidity::Valid);
        }
    }
}

#[test]
fn valid_moves_never_leave_mover_in_check() {
    for seed in 0..6 {
        let mut game = Game::new();
        let mut ai = RandomPlayer::with_seed(seed);

        for _ in 0..80 {
            let mover = game.current_player();
            for move_ in game.legal_moves() {
                assert!(game.is_valid_move(move_));
                let mut after = game.clone();
                after.do_move(move_);
                assert!(!after.in_check(mover), "seed {seed}: {move_} leaves {mover} in check");
            }
            if ai.play(&mut game).is_none() {
                break;
            }
        }
    }
}
