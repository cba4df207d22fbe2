//! Text front end: play the checkmate rules engine against a random-move opponent.

mod config;

use std::io::{self, Write};

use checkmate_engine::movelist;
use checkmate_engine::{Game, GameStatus, Move, Player, RandomPlayer};
use tracing::{info, warn};

use crate::config::CliConfig;

enum InputKind {
    Exit,
    Newgame,
    Help,
    Error,
    Undo,
    Moves,
    GameMove(Move),
}

impl From<&str> for InputKind {
    fn from(s: &str) -> Self {
        let maybe_move: Result<Move, _> = s.trim().parse();
        if let Ok(move_) = maybe_move {
            Self::GameMove(move_)
        } else {
            match s {
                "exit" => Self::Exit,
                "newgame" | "ng" => Self::Newgame,
                "help" => Self::Help,
                "undo" => Self::Undo,
                "moves" => Self::Moves,
                _ => Self::Error,
            }
        }
    }
}

/// Prints the outcome of a finished game. Returns false if the game is still going.
fn announce_result(game: &Game, human: Player) -> bool {
    match game.status() {
        GameStatus::InProgress => return false,
        GameStatus::Checkmate { winner } if winner == human => {
            println!("{game}");
            println!("Congrats!! You won by CHECKMATE.");
        }
        GameStatus::Checkmate { winner } => {
            println!("{game}");
            println!("{winner} wins by CHECKMATE. Better luck next time.");
        }
        GameStatus::Stalemate => {
            println!("{game}");
            println!("The game is DRAWN via STALEMATE.");
        }
    }
    info!(status = ?game.status(), moves = game.history_len(), "game over");
    true
}

/// Lets the computer play if it is its turn. Returns true if the game ended.
fn computer_turn(game: &mut Game, ai: &mut RandomPlayer, human: Player) -> bool {
    if game.current_player() == human {
        return false;
    }
    match ai.play(game) {
        Some(move_) => {
            println!("Computer played move {move_}.");
            if game.in_check(human) {
                println!("You are in CHECK.");
            }
            announce_result(game, human)
        }
        None => announce_result(game, human),
    }
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "checkmate=info,checkmate_engine=warn".into()),
        )
        .with_writer(io::stderr)
        .init();

    let config = CliConfig::from_env();
    info!(?config, "starting");
    println!("Checkmate CLI 0.1.0\n");
    println!("You play {}. Type help for commands.", config.human);

    let human = config.human;
    let mut ai = config.opponent();
    let mut input = String::new();
    let mut game = Game::new();

    loop {
        if computer_turn(&mut game, &mut ai, human) {
            println!("Starting new game...");
            game = Game::new();
            continue;
        }

        // Wait for user input.
        println!("{game}");
        print!("> ");
        io::stdout().flush()?;
        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        let input_kind: InputKind = input.trim().into();

        match input_kind {
            InputKind::Exit => break,
            InputKind::Newgame => {
                game = Game::new();
                println!("Starting new game...");
            }
            InputKind::Help => {
                println!("Commands:");
                println!("newgame | ng => Begin a new game.");
                println!("undo => Undo the position to return to your last move.");
                println!("moves => List every legal move.");
                println!("help => Print this help text.");
                println!("exit => end CLI.");
                println!("\nTo make a move, enter a move in algebraic coordinate form,");
                println!("or as four numbers: from row, from col, to row, to col.");
                println!("Examples: e2e4 or 6 4 4 4 -> Move piece on E2 to E4.");
            }
            InputKind::Undo => {
                // Undo both computer's move and player's last move.
                for _ in 0..2 {
                    match game.undo() {
                        Ok(move_) => println!("Undo move {move_}."),
                        Err(err) => {
                            warn!(%err, "nothing left to undo");
                            break;
                        }
                    }
                }
            }
            InputKind::Moves => {
                println!("{}", movelist::display(&game.legal_moves()));
            }
            InputKind::Error => {
                println!("Invalid command: {}", input.trim());
            }
            InputKind::GameMove(move_) => {
                let validity = game.do_legal_move(move_);
                if !validity.is_valid() {
                    println!("{validity} No action taken.");
                    continue;
                }
                info!(%move_, "human move");

                if announce_result(&game, human) {
                    println!("Starting new game...");
                    game = Game::new();
                }
            }
        }
    }
    Ok(())
}
