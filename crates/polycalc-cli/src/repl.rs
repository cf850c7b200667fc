//! Line-oriented driver for the calculator.

use std::io::{BufRead, Write};

use tracing::debug;

use crate::command::parse_command;
use crate::error::{CalcError, ReplError};
use crate::parse::parse_poly;
use crate::stack::{PolyStack, Reply};

const COMMENT_MARKER: u8 = b'#';

/// Reads lines, runs them against a [`PolyStack`] and reports results.
#[derive(Clone, Debug, Default)]
pub struct Calculator {
    stack: PolyStack,
}

impl Calculator {
    /// Creates a calculator with an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the stack.
    #[must_use]
    pub fn stack(&self) -> &PolyStack {
        &self.stack
    }

    /// Processes one line without its terminating newline.
    ///
    /// # Errors
    ///
    /// Returns the [`CalcError`] to report for this line. The stack is left
    /// unchanged on error.
    pub fn process_line(&mut self, line: &[u8]) -> Result<Reply<'_>, CalcError> {
        match line.first() {
            None | Some(&COMMENT_MARKER) => Ok(Reply::Silent),
            Some(first) if first.is_ascii_alphabetic() => {
                let command = parse_command(line)?;
                self.stack.execute(command)
            }
            Some(_) => {
                self.stack.push(parse_poly(line)?);
                Ok(Reply::Silent)
            }
        }
    }

    /// Runs every line of `input`.
    ///
    /// Replies are written to `out`, one per line. Errors are written to
    /// `err` as `ERROR <line> <message>` with lines numbered from 1, and do
    /// not stop the run.
    ///
    /// # Errors
    ///
    /// Returns [`ReplError::Io`] if reading or writing fails.
    pub fn run<R, W, E>(&mut self, mut input: R, out: &mut W, err: &mut E) -> Result<(), ReplError>
    where
        R: BufRead,
        W: Write,
        E: Write,
    {
        let mut line = Vec::new();
        let mut number: usize = 0;

        loop {
            line.clear();
            if input.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            number += 1;

            let text = line.strip_suffix(b"\n").unwrap_or(&line);
            match self.process_line(text) {
                Ok(Reply::Silent) => {}
                Ok(reply) => writeln!(out, "{reply}")?,
                Err(e) => {
                    debug!(line = number, error = %e, "rejected line");
                    writeln!(err, "ERROR {number} {e}")?;
                }
            }
        }

        debug!(lines = number, height = self.stack.len(), "input exhausted");
        out.flush()?;
        err.flush()?;
        Ok(())
    }
}
