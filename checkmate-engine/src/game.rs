//! Game structure: board, side to move, and the history needed to undo.
//!
//! Every move that changes the board should pass through [`Game::validate`]:
//! 1. the origin must hold a piece of the player to move,
//! 2. the piece's geometry must allow the move,
//! 3. the move, simulated on a copy of the board, must not leave the mover's king attacked.

use std::fmt::{self, Display};

use tracing::{debug, trace};

use crate::board::Board;
use crate::coretypes::{CoordKind, Move, MoveValidity, Piece, PieceKind, Player};
use crate::error::{self, ErrorKind};
use crate::movelist::{MoveHistory, MoveList, Snapshot};

/// Finer grained view of a game's state than [`Game::is_complete`].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    InProgress,
    /// The side to move has no legal move and is in check.
    Checkmate { winner: Player },
    /// The side to move has no legal move and is not in check.
    Stalemate,
}

/// Game contains information for an in progress game:
/// The current board, whose turn it is, and every board that came before
/// paired with the move played from it.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Game {
    board: Board,
    player: Player,
    history: MoveHistory,
}

impl Game {
    /// Create a new game in the standard chess start position, White to move.
    pub fn new() -> Self {
        Self::from(Board::start_position())
    }

    /// Create a game with no pieces, White to move.
    /// Pieces can be added with [`Game::set_piece`].
    pub fn empty() -> Self {
        Self::from(Board::new())
    }

    /// Const getters.
    pub fn current_player(&self) -> Player {
        self.player
    }
    pub fn rows(&self) -> usize {
        Board::ROWS
    }
    pub fn cols(&self) -> usize {
        Board::COLS
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn history_len(&self) -> usize {
        self.history.len()
    }
    pub fn last_move(&self) -> Option<Move> {
        self.history.last().map(|snapshot| snapshot.move_)
    }

    /// Hand the turn to `player`. Used when setting up positions.
    pub fn set_current_player(&mut self, player: Player) {
        self.player = player;
    }

    /// Place a piece on, or clear, a cell.
    pub fn set_piece(
        &mut self,
        row: CoordKind,
        col: CoordKind,
        piece: Option<Piece>,
    ) -> error::Result<()> {
        self.board.set(row, col, piece)
    }

    /// Returns the piece on a cell, or None if empty or off the board.
    pub fn piece_at(&self, row: CoordKind, col: CoordKind) -> Option<Piece> {
        self.board.get(row, col)
    }

    /// Decide whether the player to move may play `move_`.
    pub fn validate(&self, move_: Move) -> MoveValidity {
        let piece = match self.board.get(move_.from_row, move_.from_col) {
            Some(piece) if piece.player() == self.player => piece,
            _ => {
                trace!(%move_, "no piece of the player to move on origin");
                return MoveValidity::Invalid;
            }
        };

        if !piece.is_legal_geometry(move_, &self.board) {
            trace!(%move_, kind = %piece.kind(), "illegal geometry");
            return MoveValidity::Invalid;
        }

        let simulated = self.board.with_move(move_);
        if simulated.in_check(self.player) {
            trace!(%move_, "leaves own king in check");
            return MoveValidity::MovingIntoCheck;
        }

        MoveValidity::Valid
    }

    /// Returns true if the player to move may play `move_`.
    pub fn is_valid_move(&self, move_: Move) -> bool {
        self.validate(move_).is_valid()
    }

    /// Returns true if `player`'s king is attacked on the current board.
    pub fn in_check(&self, player: Player) -> bool {
        self.board.in_check(player)
    }

    /// Candidate moves from every cell of the player to move to every cell of the board,
    /// in row-major origin then row-major destination order.
    fn candidate_moves(&self) -> impl Iterator<Item = Move> + '_ {
        let rows = Board::ROWS as CoordKind;
        let cols = Board::COLS as CoordKind;

        self.board
            .pieces()
            .filter(move |&(_, _, piece)| piece.player() == self.player)
            .flat_map(move |(from_row, from_col, _)| {
                (0..rows).flat_map(move |to_row| {
                    (0..cols).map(move |to_col| Move::new(from_row, from_col, to_row, to_col))
                })
            })
    }

    /// Returns every legal move for the player to move.
    pub fn legal_moves(&self) -> MoveList {
        let mut legal_moves = MoveList::new();
        legal_moves.extend(
            self.candidate_moves()
                .filter(|&move_| self.is_valid_move(move_)),
        );
        legal_moves
    }

    /// Returns true as soon as any legal move is found for the player to move.
    pub fn has_legal_move(&self) -> bool {
        self.candidate_moves().any(|move_| self.is_valid_move(move_))
    }

    /// Returns true if the player to move has no legal move.
    /// Checkmate and stalemate both complete a game, use [`Game::status`]
    /// or [`Game::in_check`] to tell them apart.
    pub fn is_complete(&self) -> bool {
        !self.has_legal_move()
    }

    pub fn status(&self) -> GameStatus {
        if self.has_legal_move() {
            GameStatus::InProgress
        } else if self.in_check(self.player) {
            GameStatus::Checkmate {
                winner: self.player.next(),
            }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Apply a move to self, in place.
    /// `do_move` does not check if the move is legal, it executes it while
    /// assuming legality; validate first with [`Game::validate`] or use
    /// [`Game::do_legal_move`]. Playing an illegal move leaves the game in a
    /// state the rules never produce.
    ///
    /// Does nothing if the game is already complete.
    /// A pawn arriving on its promotion row becomes a queen.
    pub fn do_move(&mut self, move_: Move) {
        if self.is_complete() {
            debug!(%move_, "game complete, move ignored");
            return;
        }

        self.history.push(Snapshot {
            board: self.board,
            move_,
        });
        self.board.relocate(move_);
        self.promote(move_);

        debug!(%move_, player = %self.player, "move played");
        self.player = self.player.next();
    }

    /// Replace a pawn that just reached its farthest row with a queen of the same player.
    fn promote(&mut self, move_: Move) {
        let (to_row, to_col) = move_.to();
        if let Some(piece) = self.board.get(to_row, to_col) {
            if piece.kind() == PieceKind::Pawn && to_row == piece.player().promotion_row() {
                let queen = Piece::new(piece.player(), PieceKind::Queen);
                // Destination came from the move that was just relocated, so it is on the board.
                if self.board.set(to_row, to_col, Some(queen)).is_ok() {
                    debug!(%move_, player = %piece.player(), "pawn promoted to queen");
                }
            }
        }
    }

    /// Validate `move_` and play it only if it is valid.
    /// Returns the result of validation.
    pub fn do_legal_move(&mut self, move_: Move) -> MoveValidity {
        let validity = self.validate(move_);
        if validity.is_valid() {
            self.do_move(move_);
        }
        validity
    }

    /// Restore the board from before the last played move and return that move.
    /// The turn goes back to the player who played it.
    pub fn undo(&mut self) -> error::Result<Move> {
        let snapshot = self.history.pop().ok_or(ErrorKind::UndoUnavailable)?;

        self.board = snapshot.board;
        self.player = self.player.next();

        debug!(move_ = %snapshot.move_, "move undone");
        Ok(snapshot.move_)
    }
}

/// Defaults to standard chess start position.
impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

/// Convert a board to a Game with no past moves, White to move.
impl From<Board> for Game {
    fn from(board: Board) -> Self {
        Self {
            board,
            player: Player::White,
            history: MoveHistory::new(),
        }
    }
}

/// Displays pretty-printed board and the player to move.
impl Display for Game {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}{} to move", self.board, self.player)
    }
}
