//! The fundamental and simple types of `checkmate_engine`.

use std::convert::TryFrom;
use std::fmt::{self, Display, Write};
use std::ops::Not;
use std::str::FromStr;

use crate::error::{self, ErrorKind};

///////////////
// Constants //
///////////////
pub const NUM_ROWS: usize = 8;
pub const NUM_COLS: usize = 8;
pub const NUM_SQUARES: usize = NUM_ROWS * NUM_COLS;

// Upper bound on legal moves for any placement of pieces, reachable or not.
// A destination can only be entered by the nearest piece on each of its
// 8 rays, or by a knight on one of 8 cells.
pub const MAX_MOVES: usize = NUM_SQUARES * 16;

/////////////////////////
// Data and Structures //
/////////////////////////

/// Type alias for a single row or column coordinate.
/// Signed so that moves may point off the board and be rejected later.
pub type CoordKind = i8;

/// Player owning pieces, and whose turn it is.
/// Row 0 is Black's back row, row 7 is White's.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Player {
    White,
    Black,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A chess piece. Pieces are never changed after construction;
/// promotion replaces the piece on a square instead.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Piece {
    pub(crate) player: Player,
    pub(crate) kind: PieceKind,
}

/// Move
/// A from-square and to-square pair in (row, col) coordinates.
/// Nothing is checked at construction, legality is decided later by a `Game`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Move {
    pub from_row: CoordKind,
    pub from_col: CoordKind,
    pub to_row: CoordKind,
    pub to_col: CoordKind,
}

/// Outcome of validating a single move.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MoveValidity {
    Valid,
    Invalid,
    MovingIntoCheck,
    /// Never produced: a move that stays in check is reported as `MovingIntoCheck`.
    StayingInCheck,
}

//////////////////////
/// Implementations //
//////////////////////

/// Returns true if (row, col) lies on an 8x8 board.
pub(crate) const fn on_board(row: CoordKind, col: CoordKind) -> bool {
    row >= 0 && (row as usize) < NUM_ROWS && col >= 0 && (col as usize) < NUM_COLS
}

impl Player {
    /// The other player.
    pub const fn next(&self) -> Self {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    /// Row delta of a single pawn step.
    pub const fn forward(&self) -> CoordKind {
        match self {
            Player::White => -1,
            Player::Black => 1,
        }
    }

    /// Row pawns start on, and the only row a double step is allowed from.
    pub const fn pawn_home_row(&self) -> CoordKind {
        match self {
            Player::White => 6,
            Player::Black => 1,
        }
    }

    /// Farthest row for this player's pawns.
    pub const fn promotion_row(&self) -> CoordKind {
        match self {
            Player::White => 0,
            Player::Black => 7,
        }
    }

    pub const fn to_char(&self) -> char {
        match self {
            Player::White => 'w',
            Player::Black => 'b',
        }
    }
}

impl Not for Player {
    type Output = Self;
    fn not(self) -> Self::Output {
        self.next()
    }
}

impl TryFrom<char> for Player {
    type Error = error::Error;
    fn try_from(ch: char) -> error::Result<Self> {
        match ch {
            'w' => Ok(Player::White),
            'b' => Ok(Player::Black),
            _ => Err((ErrorKind::ParsePlayerMalformed, "char is not w|b").into()),
        }
    }
}

impl FromStr for Player {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "w" | "white" => Ok(Player::White),
            "b" | "black" => Ok(Player::Black),
            _ => Err((ErrorKind::ParsePlayerMalformed, s).into()),
        }
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Player::White => f.write_str("White"),
            Player::Black => f.write_str("Black"),
        }
    }
}

impl PieceKind {
    /// Glyph of this kind, as for a white piece.
    pub const fn to_char(&self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Type name of this kind.
    pub const fn name(&self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

impl Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Piece {
    pub const fn new(player: Player, kind: PieceKind) -> Self {
        Piece { player, kind }
    }
    /// Immutable Getters.
    pub const fn player(&self) -> Player {
        self.player
    }
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Uppercase for White, lowercase for Black.
    pub const fn to_char(&self) -> char {
        match self.player {
            Player::White => self.kind.to_char(),
            Player::Black => self.kind.to_char().to_ascii_lowercase(),
        }
    }
}

impl From<Piece> for char {
    fn from(piece: Piece) -> Self {
        piece.to_char()
    }
}

impl TryFrom<char> for Piece {
    type Error = error::Error;
    fn try_from(value: char) -> error::Result<Self> {
        let player = match value.is_ascii_uppercase() {
            true => Player::White,
            false => Player::Black,
        };
        let kind = match value.to_ascii_uppercase() {
            'P' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            _ => {
                return Err((
                    ErrorKind::InvalidPieceType,
                    format!("{value:?} is not in PNBRQKpnbrqk"),
                )
                    .into())
            }
        };
        Ok(Piece { player, kind })
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_char(char::from(*self))
    }
}

impl Move {
    pub const fn new(
        from_row: CoordKind,
        from_col: CoordKind,
        to_row: CoordKind,
        to_col: CoordKind,
    ) -> Self {
        Self {
            from_row,
            from_col,
            to_row,
            to_col,
        }
    }

    pub const fn from(&self) -> (CoordKind, CoordKind) {
        (self.from_row, self.from_col)
    }

    pub const fn to(&self) -> (CoordKind, CoordKind) {
        (self.to_row, self.to_col)
    }

    /// Signed (row, col) distance travelled.
    /// Both squares must be on the board, so each component lies in -7..=7.
    pub(crate) const fn delta(&self) -> (CoordKind, CoordKind) {
        (self.to_row - self.from_row, self.to_col - self.from_col)
    }

    /// Parses a coordinate such as `e2` into (row, col).
    fn parse_square(file: char, rank: char) -> Option<(CoordKind, CoordKind)> {
        let col = match file {
            'a'..='h' => file as u8 - b'a',
            _ => return None,
        };
        let rank = match rank {
            '1'..='8' => rank as u8 - b'1',
            _ => return None,
        };
        Some((NUM_ROWS as CoordKind - 1 - rank as CoordKind, col as CoordKind))
    }

    fn write_square(f: &mut fmt::Formatter, row: CoordKind, col: CoordKind) -> fmt::Result {
        f.write_char((b'a' + col as u8) as char)?;
        f.write_char((b'1' + (NUM_ROWS as CoordKind - 1 - row) as u8) as char)
    }
}

/// Displays as coordinate algebraic, `e2e4`, when both squares are on the board.
impl Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if on_board(self.from_row, self.from_col) && on_board(self.to_row, self.to_col) {
            Move::write_square(f, self.from_row, self.from_col)?;
            Move::write_square(f, self.to_row, self.to_col)
        } else {
            write!(
                f,
                "({},{})->({},{})",
                self.from_row, self.from_col, self.to_row, self.to_col
            )
        }
    }
}

/// Move ::= <file><rank><file><rank> | <row> <col> <row> <col>
impl FromStr for Move {
    type Err = error::Error;
    fn from_str(s: &str) -> error::Result<Self> {
        let s = s.trim();

        let numbers: Vec<&str> = s.split_whitespace().collect();
        if numbers.len() == 4 {
            let mut coords = [0 as CoordKind; 4];
            for (coord, number) in coords.iter_mut().zip(numbers) {
                *coord = number
                    .parse()
                    .map_err(|_| (ErrorKind::ParseMoveMalformed, number))?;
            }
            return Ok(Move::new(coords[0], coords[1], coords[2], coords[3]));
        }

        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 4 {
            return Err((ErrorKind::ParseMoveMalformed, "expected e2e4 or 4 integers").into());
        }
        let (from_row, from_col) = Move::parse_square(chars[0], chars[1])
            .ok_or((ErrorKind::ParseMoveMalformed, "from square"))?;
        let (to_row, to_col) = Move::parse_square(chars[2], chars[3])
            .ok_or((ErrorKind::ParseMoveMalformed, "to square"))?;

        Ok(Move::new(from_row, from_col, to_row, to_col))
    }
}

impl MoveValidity {
    pub const fn is_valid(&self) -> bool {
        matches!(self, MoveValidity::Valid)
    }
}

impl Display for MoveValidity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            MoveValidity::Valid => "Valid move.",
            MoveValidity::Invalid => "Invalid move.",
            MoveValidity::MovingIntoCheck => "Invalid -- cannot move into check.",
            MoveValidity::StayingInCheck => "Invalid -- must move out of check.",
        })
    }
}
