//! Checkmate Engine error type.
//!
//! Errors are reserved for caller misuse: bad coordinates, bad piece values,
//! and undo with nothing to undo. An illegal move is never an error, it is
//! reported through [`MoveValidity`](crate::coretypes::MoveValidity).

use std::error;
use std::fmt::{self, Display};
use std::result;

/// Checkmate Engine generic result type.
pub type Result<T> = result::Result<T, Error>;

/// A list specifying general errors for Checkmate engine.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A row or column lies outside of the board.
    OutOfBounds,
    /// A value that does not describe a chess piece was given where one was expected.
    InvalidPieceType,
    /// Undo was requested but no move has been played.
    UndoUnavailable,

    /// Move parse string malformed.
    ParseMoveMalformed,
    /// Player parse string malformed.
    ParsePlayerMalformed,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::OutOfBounds => "out of bounds",
            ErrorKind::InvalidPieceType => "invalid piece type",
            ErrorKind::UndoUnavailable => "undo unavailable",

            ErrorKind::ParseMoveMalformed => "parse move malformed",
            ErrorKind::ParsePlayerMalformed => "parse player malformed",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The primary and general error type for the Checkmate Engine.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Error {
    Simple(ErrorKind),
    Message(ErrorKind, String),
}

impl Error {
    /// Returns the kind of this error, without any attached message.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Simple(error_kind) | Error::Message(error_kind, _) => *error_kind,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Simple(error_kind) => {
                write!(f, "{error_kind}")
            }
            Error::Message(error_kind, string) => {
                write!(f, "{error_kind}: {string}")
            }
        }
    }
}

impl error::Error for Error {}

impl From<ErrorKind> for Error {
    fn from(error_kind: ErrorKind) -> Self {
        Self::Simple(error_kind)
    }
}

impl<S: ToString> From<(ErrorKind, S)> for Error {
    fn from((error_kind, stringable): (ErrorKind, S)) -> Self {
        Self::Message(error_kind, stringable.to_string())
    }
}
