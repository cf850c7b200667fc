//! Recursive-descent parser for the textual polynomial form.
//!
//! ```text
//! poly  ::= coeff | mono { "+" mono }
//! mono  ::= "(" poly "," exp ")"
//! coeff ::= ["-"] digit+        within i64
//! exp   ::= digit+              within 0..=i32::MAX
//! ```
//!
//! Spaces are allowed around `+` and nowhere else, which is exactly what
//! `Display for Poly` produces.

use polycalc_poly::{Coeff, Exp, Mono, Poly};

use crate::error::ParseError;

/// Parses a whole line (without its newline) as a polynomial.
///
/// # Errors
///
/// Returns a [`ParseError`] if the line does not match the grammar, a number
/// is out of range, or input is left over after the polynomial.
pub fn parse_poly(line: &[u8]) -> Result<Poly, ParseError> {
    let mut parser = Parser { input: line, pos: 0 };
    let poly = parser.parse_poly()?;

    match parser.current() {
        None => Ok(poly),
        Some(byte) => Err(parser.unexpected(byte)),
    }
}

struct Parser<'a> {
    input: &'a [u8],
    pos: usize,
}

impl Parser<'_> {
    fn current(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos += 1;
    }

    fn unexpected(&self, byte: u8) -> ParseError {
        ParseError::Unexpected {
            pos: self.pos,
            found: char::from(byte),
        }
    }

    fn expect(&mut self, want: u8) -> Result<(), ParseError> {
        match self.current() {
            Some(byte) if byte == want => {
                self.advance();
                Ok(())
            }
            Some(byte) => Err(self.unexpected(byte)),
            None => Err(ParseError::UnexpectedEnd(self.pos)),
        }
    }

    fn skip_spaces(&mut self) {
        while self.current() == Some(b' ') {
            self.advance();
        }
    }

    fn parse_poly(&mut self) -> Result<Poly, ParseError> {
        match self.current() {
            Some(b'(') => self.parse_mono_list(),
            Some(b'-' | b'0'..=b'9') => self.parse_coeff().map(Poly::from_coeff),
            Some(byte) => Err(self.unexpected(byte)),
            None => Err(ParseError::UnexpectedEnd(self.pos)),
        }
    }

    fn parse_mono_list(&mut self) -> Result<Poly, ParseError> {
        let mut monos = vec![self.parse_mono()?];

        loop {
            let before = self.pos;
            self.skip_spaces();
            if self.current() != Some(b'+') {
                // spaces not followed by '+' belong to whoever comes next
                self.pos = before;
                break;
            }
            self.advance();
            self.skip_spaces();
            monos.push(self.parse_mono()?);
        }

        Ok(Poly::from_monos(monos))
    }

    fn parse_mono(&mut self) -> Result<Mono, ParseError> {
        self.expect(b'(')?;
        let poly = self.parse_poly()?;
        self.expect(b',')?;
        let exp = self.parse_exp()?;
        self.expect(b')')?;
        Ok(Mono::new(poly, exp))
    }

    fn parse_coeff(&mut self) -> Result<Coeff, ParseError> {
        let start = self.pos;
        let negative = self.current() == Some(b'-');
        if negative {
            self.advance();
        }

        // accumulate towards the sign so that i64::MIN is reachable
        let mut value: Coeff = 0;
        self.parse_digits(|digit| {
            let digit = Coeff::from(digit);
            value = value.checked_mul(10).and_then(|v| {
                if negative {
                    v.checked_sub(digit)
                } else {
                    v.checked_add(digit)
                }
            })?;
            Some(())
        })
        .map_err(|e| match e {
            ParseError::OutOfRange(_) => ParseError::OutOfRange(start),
            other => other,
        })?;

        Ok(value)
    }

    fn parse_exp(&mut self) -> Result<Exp, ParseError> {
        let start = self.pos;
        let mut value: Exp = 0;
        self.parse_digits(|digit| {
            value = value
                .checked_mul(10)
                .and_then(|v| v.checked_add(Exp::from(digit)))?;
            Some(())
        })
        .map_err(|e| match e {
            ParseError::OutOfRange(_) => ParseError::OutOfRange(start),
            other => other,
        })?;

        Ok(value)
    }

    /// Feeds one or more decimal digits to `push`, which returns `None` on
    /// overflow.
    fn parse_digits(&mut self, mut push: impl FnMut(u8) -> Option<()>) -> Result<(), ParseError> {
        let start = self.pos;

        while let Some(byte @ b'0'..=b'9') = self.current() {
            push(byte - b'0').ok_or(ParseError::OutOfRange(start))?;
            self.advance();
        }

        if self.pos == start {
            return match self.current() {
                Some(byte) => Err(self.unexpected(byte)),
                None => Err(ParseError::UnexpectedEnd(self.pos)),
            };
        }

        Ok(())
    }
}
