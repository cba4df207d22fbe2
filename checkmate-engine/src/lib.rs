//! Rules engine for standard chess.
//!
//! [`Game`] owns the board, the player to move and the move history. It
//! validates moves against each piece's geometry and against leaving one's
//! own king in check, plays and undoes moves, promotes pawns, and detects
//! when the player to move has no legal move left.
//!
//! Castling, en passant and draw rules other than stalemate are not part of
//! these rules.

pub mod ai;
pub mod board;
pub mod coretypes;
pub mod error;
pub mod game;
pub mod movelist;
pub mod perft;
mod pieces;

pub use ai::RandomPlayer;
pub use board::Board;
pub use coretypes::{Move, MoveValidity, Piece, PieceKind, Player};
pub use game::{Game, GameStatus};
