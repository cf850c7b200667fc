//! Calculator commands.

use std::str::FromStr;

use polycalc_poly::Coeff;

use crate::error::CalcError;

/// A stack-machine instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Push the zero polynomial.
    Zero,
    /// Print whether the top is a constant.
    IsCoeff,
    /// Print whether the top is zero.
    IsZero,
    /// Push a copy of the top.
    Clone,
    /// Replace the two top polynomials by their sum.
    Add,
    /// Replace the two top polynomials by their product.
    Mul,
    /// Negate the top in place.
    Neg,
    /// Replace the two top polynomials by `top - second`.
    Sub,
    /// Print whether the two top polynomials are equal.
    IsEq,
    /// Print the total degree of the top.
    Deg,
    /// Print the degree of the top in the variable at the given depth.
    DegBy(u64),
    /// Replace the top by its value at the given point.
    At(Coeff),
    /// Print the top.
    Print,
    /// Drop the top.
    Pop,
    /// Replace the top and the `k` polynomials below it by their composition.
    Compose(u64),
}

impl Command {
    /// Number of polynomials the command needs on the stack.
    #[must_use]
    pub fn required_height(self) -> u64 {
        match self {
            Self::Zero => 0,
            Self::IsCoeff
            | Self::IsZero
            | Self::Clone
            | Self::Neg
            | Self::Deg
            | Self::DegBy(_)
            | Self::At(_)
            | Self::Print
            | Self::Pop => 1,
            Self::Add | Self::Mul | Self::Sub | Self::IsEq => 2,
            Self::Compose(k) => k.saturating_add(1),
        }
    }
}

/// Parses a command line (without its newline).
///
/// A command without an argument must be the whole line. `DEG_BY`, `AT` and
/// `COMPOSE` take exactly one space followed by a decimal number.
///
/// # Errors
///
/// Returns [`CalcError::WrongCommand`] for an unknown name, and the
/// command-specific error for a missing or malformed argument.
pub fn parse_command(line: &[u8]) -> Result<Command, CalcError> {
    let name_len = line
        .iter()
        .position(u8::is_ascii_whitespace)
        .unwrap_or(line.len());
    let (name, rest) = line.split_at(name_len);

    let command = match name {
        b"ZERO" => Command::Zero,
        b"IS_COEFF" => Command::IsCoeff,
        b"IS_ZERO" => Command::IsZero,
        b"CLONE" => Command::Clone,
        b"ADD" => Command::Add,
        b"MUL" => Command::Mul,
        b"NEG" => Command::Neg,
        b"SUB" => Command::Sub,
        b"IS_EQ" => Command::IsEq,
        b"DEG" => Command::Deg,
        b"PRINT" => Command::Print,
        b"POP" => Command::Pop,
        b"DEG_BY" => {
            return argument(rest)
                .map(Command::DegBy)
                .ok_or(CalcError::DegByWrongVariable)
        }
        b"AT" => return argument(rest).map(Command::At).ok_or(CalcError::AtWrongValue),
        b"COMPOSE" => {
            return argument(rest)
                .map(Command::Compose)
                .ok_or(CalcError::ComposeWrongParameter)
        }
        _ => return Err(CalcError::WrongCommand),
    };

    if rest.is_empty() {
        Ok(command)
    } else {
        Err(CalcError::WrongCommand)
    }
}

/// Reads `" <number>"` spanning the rest of the line.
fn argument<T: FromStr>(rest: &[u8]) -> Option<T> {
    let digits = rest.strip_prefix(b" ")?;

    // `FromStr` for integers also accepts a leading '+'
    if !digits
        .first()
        .is_some_and(|&b| b.is_ascii_digit() || b == b'-')
    {
        return None;
    }

    std::str::from_utf8(digits).ok()?.parse().ok()
}
