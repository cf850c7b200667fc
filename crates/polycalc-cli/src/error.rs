//! Error types for the calculator.

use thiserror::Error;

/// Why a line could not be read as a polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The line ended inside a polynomial.
    #[error("unexpected end of input at column {0}")]
    UnexpectedEnd(usize),

    /// A byte that does not fit the grammar.
    #[error("unexpected {found:?} at column {pos}")]
    Unexpected {
        /// Zero-based byte offset.
        pos: usize,
        /// The offending byte.
        found: char,
    },

    /// A coefficient outside `i64` or an exponent outside `0..=i32::MAX`.
    #[error("number out of range at column {0}")]
    OutOfRange(usize),
}

/// A calculator error, reported to the user together with the line number.
///
/// The `Display` text is the exact message printed after `ERROR <line>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Fewer polynomials on the stack than the command needs.
    #[error("STACK UNDERFLOW")]
    StackUnderflow,

    /// The line is not a well-formed polynomial.
    #[error("WRONG POLY")]
    WrongPoly,

    /// Unknown command, or an argument given to a command that takes none.
    #[error("WRONG COMMAND")]
    WrongCommand,

    /// Missing or malformed `DEG_BY` variable index.
    #[error("DEG BY WRONG VARIABLE")]
    DegByWrongVariable,

    /// Missing or malformed `AT` value.
    #[error("AT WRONG VALUE")]
    AtWrongValue,

    /// Missing or malformed `COMPOSE` count.
    #[error("COMPOSE WRONG PARAMETER")]
    ComposeWrongParameter,
}

impl From<ParseError> for CalcError {
    fn from(_: ParseError) -> Self {
        Self::WrongPoly
    }
}

/// A failure that aborts a whole calculator run.
#[derive(Debug, Error)]
pub enum ReplError {
    /// Reading input or writing output failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
