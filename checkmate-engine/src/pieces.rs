//! Per-piece movement geometry.
//!
//! A geometry predicate decides whether a move's shape, path and destination
//! occupancy are legal for the moving piece. Turn order and check are not
//! considered here; that is the job of [`Game::validate`](crate::Game::validate).

use crate::board::Board;
use crate::coretypes::{CoordKind, Move, Piece, PieceKind};

impl Piece {
    /// Returns true if `move_` is a legal shape for this piece on `board`.
    /// The board is only read.
    pub fn is_legal_geometry(&self, move_: Move, board: &Board) -> bool {
        if !self.passes_baseline(move_, board) {
            return false;
        }

        match self.kind {
            PieceKind::Pawn => self.pawn_geometry(move_, board),
            PieceKind::Knight => knight_geometry(move_),
            PieceKind::Bishop => bishop_geometry(move_, board),
            PieceKind::Rook => rook_geometry(move_, board),
            PieceKind::Queen => rook_geometry(move_, board) || bishop_geometry(move_, board),
            PieceKind::King => king_geometry(move_),
        }
    }

    /// Checks shared by every piece kind:
    /// * destination is on the board,
    /// * destination differs from origin,
    /// * self is the piece standing on the origin,
    /// * destination does not hold a piece of the same player.
    fn passes_baseline(&self, move_: Move, board: &Board) -> bool {
        let (to_row, to_col) = move_.to();

        board.contains(to_row, to_col)
            && move_.from() != move_.to()
            && board.get(move_.from_row, move_.from_col) == Some(*self)
            && board
                .get(to_row, to_col)
                .map_or(true, |target| target.player() != self.player)
    }

    fn pawn_geometry(&self, move_: Move, board: &Board) -> bool {
        let forward = self.player.forward();
        let (d_row, d_col) = move_.delta();
        let target = board.get(move_.to_row, move_.to_col);

        match (d_row, d_col.abs()) {
            // Single push.
            (d, 0) if d == forward => target.is_none(),
            // Double push from home row, both squares empty.
            (d, 0) if d == 2 * forward && move_.from_row == self.player.pawn_home_row() => {
                target.is_none()
                    && board
                        .get(move_.from_row + forward, move_.from_col)
                        .is_none()
            }
            // Diagonal capture. Baseline already rejected same-player targets.
            (d, 1) if d == forward => target.is_some(),
            _ => false,
        }
    }
}

fn knight_geometry(move_: Move) -> bool {
    let (d_row, d_col) = move_.delta();
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}

fn king_geometry(move_: Move) -> bool {
    let (d_row, d_col) = move_.delta();
    d_row.abs() <= 1 && d_col.abs() <= 1
}

fn bishop_geometry(move_: Move, board: &Board) -> bool {
    let (d_row, d_col) = move_.delta();
    d_row.abs() == d_col.abs() && path_is_clear(move_, board)
}

fn rook_geometry(move_: Move, board: &Board) -> bool {
    let (d_row, d_col) = move_.delta();
    (d_row == 0 || d_col == 0) && path_is_clear(move_, board)
}

/// Returns true if every cell strictly between from and to is empty.
/// Move must be a straight line or a diagonal.
fn path_is_clear(move_: Move, board: &Board) -> bool {
    let (d_row, d_col) = move_.delta();
    let step_row: CoordKind = d_row.signum();
    let step_col: CoordKind = d_col.signum();
    let distance = d_row.abs().max(d_col.abs());

    (1..distance).all(|i| {
        board
            .get(move_.from_row + i * step_row, move_.from_col + i * step_col)
            .is_none()
    })
}
