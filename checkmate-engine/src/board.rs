//! A [mailbox](https://www.chessprogramming.org/Mailbox) style chess board.
//!
//! The board is an 8x8 grid where each cell may contain a chess piece or be
//! empty. Boards are `Copy`, so a snapshot for history or for simulating a
//! move is just a copy of the value.

use std::fmt::{self, Display};

use crate::coretypes::{
    on_board, CoordKind, Move, Piece, PieceKind, Player, NUM_COLS, NUM_ROWS,
};
use crate::error::{self, ErrorKind};

/// Classic 8x8 square board, indexed by (row, col).
/// Row 0 is Black's back row and row 7 is White's back row.
/// Column 0 is the a-file.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Board {
    cells: [[Option<Piece>; NUM_COLS]; NUM_ROWS],
}

impl Board {
    pub const ROWS: usize = NUM_ROWS;
    pub const COLS: usize = NUM_COLS;

    /// Creates an empty Board, where all cells are None.
    pub fn new() -> Self {
        Board {
            cells: [[None; Self::COLS]; Self::ROWS],
        }
    }

    /// Create Board with pieces arranged in starting chess position.
    pub fn start_position() -> Self {
        use PieceKind::*;
        const BACK_ROW: [PieceKind; NUM_COLS] =
            [Rook, Knight, Bishop, Queen, King, Bishop, Knight, Rook];
        let mut board = Self::new();

        for (col, kind) in BACK_ROW.into_iter().enumerate() {
            board.cells[0][col] = Some(Piece::new(Player::Black, kind));
            board.cells[1][col] = Some(Piece::new(Player::Black, Pawn));
            board.cells[6][col] = Some(Piece::new(Player::White, Pawn));
            board.cells[7][col] = Some(Piece::new(Player::White, kind));
        }

        board
    }

    /// Returns true if (row, col) names a cell of this board.
    pub const fn contains(&self, row: CoordKind, col: CoordKind) -> bool {
        on_board(row, col)
    }

    /// Returns the piece on (row, col), or None if the cell is empty or off the board.
    pub fn get(&self, row: CoordKind, col: CoordKind) -> Option<Piece> {
        if self.contains(row, col) {
            self.cells[row as usize][col as usize]
        } else {
            None
        }
    }

    /// Places a piece on, or clears, the cell at (row, col).
    pub fn set(&mut self, row: CoordKind, col: CoordKind, piece: Option<Piece>) -> error::Result<()> {
        if !self.contains(row, col) {
            return Err((ErrorKind::OutOfBounds, format!("({row}, {col})")).into());
        }
        self.cells[row as usize][col as usize] = piece;
        Ok(())
    }

    /// Moves whatever is on the from cell onto the to cell and clears the from cell.
    /// No rules are applied. Does nothing if either cell is off the board.
    pub fn relocate(&mut self, move_: Move) {
        let (from_row, from_col) = move_.from();
        let (to_row, to_col) = move_.to();
        if !self.contains(from_row, from_col) || !self.contains(to_row, to_col) {
            return;
        }
        let piece = self.cells[from_row as usize][from_col as usize].take();
        self.cells[to_row as usize][to_col as usize] = piece;
    }

    /// Returns a copy of self with `move_` relocated.
    pub fn with_move(&self, move_: Move) -> Self {
        let mut board = *self;
        board.relocate(move_);
        board
    }

    /// Iterator over all occupied cells as (row, col, piece) in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (CoordKind, CoordKind, Piece)> + '_ {
        self.cells.iter().enumerate().flat_map(|(row, cells)| {
            cells.iter().enumerate().filter_map(move |(col, cell)| {
                cell.map(|piece| (row as CoordKind, col as CoordKind, piece))
            })
        })
    }

    /// Returns the first cell in row-major order holding `player`'s king.
    pub fn king_square(&self, player: Player) -> Option<(CoordKind, CoordKind)> {
        let king = Piece::new(player, PieceKind::King);
        self.pieces()
            .find(|&(_, _, piece)| piece == king)
            .map(|(row, col, _)| (row, col))
    }

    /// Returns true if `player`'s king can be reached by any opposing piece's geometry.
    /// Turn order is ignored, so this works on simulated boards.
    /// A board without a king for `player` is never in check.
    pub fn in_check(&self, player: Player) -> bool {
        let (king_row, king_col) = match self.king_square(player) {
            Some(square) => square,
            None => return false,
        };

        self.pieces()
            .filter(|&(_, _, piece)| piece.player() != player)
            .any(|(row, col, piece)| {
                let attack = Move::new(row, col, king_row, king_col);
                piece.is_legal_geometry(attack, self)
            })
    }

    /// Returns pretty-printed chess board representation of Self.
    /// The chess board has borders and file/rank indicators.
    pub fn pretty(&self) -> String {
        const ROW_SEP: &str = "+---+---+---+---+---+---+---+---+\n";
        let mut pretty = String::with_capacity(626);

        pretty.push_str(ROW_SEP);
        for (row, cells) in self.cells.iter().enumerate() {
            pretty.push_str("| ");

            for cell in cells {
                pretty.push(match cell {
                    Some(piece) => char::from(*piece),
                    None => ' ',
                });
                pretty.push_str(" | ");
            }
            pretty.push_str(&(Self::ROWS - row).to_string());
            pretty.push('\n');
            pretty.push_str(ROW_SEP);
        }
        pretty.push_str("  a   b   c   d   e   f   g   h\n");

        pretty
    }
}

/// Default value is that of a standard starting chess position.
impl Default for Board {
    fn default() -> Self {
        Board::start_position()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
