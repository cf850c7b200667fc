//! The polynomial stack and command execution.

use std::fmt;

use polycalc_poly::{Exp, Poly};
use tracing::trace;

use crate::command::Command;
use crate::error::CalcError;

/// What a command asks to be printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reply<'a> {
    /// Nothing to print.
    Silent,
    /// A predicate result, printed as `1` or `0`.
    Flag(bool),
    /// A degree, printed as an integer.
    Degree(Exp),
    /// A polynomial in its textual form.
    Poly(&'a Poly),
}

impl fmt::Display for Reply<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Silent => Ok(()),
            Self::Flag(flag) => write!(f, "{}", u8::from(*flag)),
            Self::Degree(deg) => write!(f, "{deg}"),
            Self::Poly(poly) => write!(f, "{poly}"),
        }
    }
}

/// A stack of polynomials, top last.
#[derive(Clone, Debug, Default)]
pub struct PolyStack {
    polys: Vec<Poly>,
}

impl PolyStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of polynomials on the stack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.polys.len()
    }

    /// Returns true if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.polys.is_empty()
    }

    /// Returns the top polynomial.
    #[must_use]
    pub fn top(&self) -> Option<&Poly> {
        self.polys.last()
    }

    /// Pushes a polynomial.
    pub fn push(&mut self, poly: Poly) {
        self.polys.push(poly);
    }

    fn pop(&mut self) -> Result<Poly, CalcError> {
        self.polys.pop().ok_or(CalcError::StackUnderflow)
    }

    fn peek(&self) -> Result<&Poly, CalcError> {
        self.polys.last().ok_or(CalcError::StackUnderflow)
    }

    fn top_mut(&mut self) -> Result<&mut Poly, CalcError> {
        self.polys.last_mut().ok_or(CalcError::StackUnderflow)
    }

    fn top_two(&self) -> Result<(&Poly, &Poly), CalcError> {
        match self.polys.as_slice() {
            [.., second, top] => Ok((top, second)),
            _ => Err(CalcError::StackUnderflow),
        }
    }

    /// Executes one command.
    ///
    /// The stack height is checked before anything is popped, so a failed
    /// command leaves the stack unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::StackUnderflow`] if the stack holds fewer
    /// polynomials than the command needs.
    pub fn execute(&mut self, command: Command) -> Result<Reply<'_>, CalcError> {
        let height = u64::try_from(self.polys.len()).unwrap_or(u64::MAX);
        if height < command.required_height() {
            return Err(CalcError::StackUnderflow);
        }

        trace!(?command, height, "executing");

        match command {
            Command::Zero => self.push(Poly::zero()),
            Command::IsCoeff => return Ok(Reply::Flag(self.peek()?.is_coeff())),
            Command::IsZero => return Ok(Reply::Flag(self.peek()?.is_zero())),
            Command::Clone => {
                let copy = self.peek()?.clone();
                self.push(copy);
            }
            Command::Add => {
                let top = self.pop()?;
                let second = self.pop()?;
                self.push(top.incorporate(second));
            }
            Command::Mul => {
                let top = self.pop()?;
                let second = self.pop()?;
                self.push(top.mul(&second));
            }
            Command::Neg => self.top_mut()?.neg_in_place(),
            Command::Sub => {
                let mut top = self.pop()?;
                let second = self.pop()?;
                top -= &second;
                self.push(top);
            }
            Command::IsEq => {
                let (top, second) = self.top_two()?;
                return Ok(Reply::Flag(top == second));
            }
            Command::Deg => return Ok(Reply::Degree(self.peek()?.degree())),
            Command::DegBy(idx) => {
                // no polynomial nests deeper than usize::MAX variables
                let idx = usize::try_from(idx).unwrap_or(usize::MAX);
                return Ok(Reply::Degree(self.peek()?.degree_by(idx)));
            }
            Command::At(x) => {
                let top = self.top_mut()?;
                *top = top.at(x);
            }
            Command::Print => {
                return Ok(Reply::Poly(self.peek()?));
            }
            Command::Pop => {
                self.pop()?;
            }
            Command::Compose(k) => {
                let p = self.pop()?;
                let k = usize::try_from(k).map_err(|_| CalcError::StackUnderflow)?;
                // bottom to top: the polynomial just below p substitutes for x_{k-1}
                let substitutes = self.polys.split_off(self.polys.len() - k);
                self.push(p.compose(&substitutes));
            }
        }

        Ok(Reply::Silent)
    }
}
