//! # polycalc-cli
//!
//! A stack-machine calculator over [`polycalc_poly::Poly`].
//!
//! Input is read line by line:
//! - a line starting with `#` is a comment, an empty line is skipped
//! - a line starting with a letter is a command acting on the stack
//! - any other line is a polynomial pushed onto the stack
//!
//! Results go to the output sink; errors are reported as
//! `ERROR <line> <message>` on the error sink and never stop the run.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod command;
pub mod error;
pub mod parse;
pub mod repl;
pub mod stack;

pub use command::{parse_command, Command};
pub use error::{CalcError, ParseError, ReplError};
pub use parse::parse_poly;
pub use repl::Calculator;
pub use stack::{PolyStack, Reply};
