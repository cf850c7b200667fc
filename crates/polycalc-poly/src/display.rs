//! Textual form of polynomials.
//!
//! A constant prints as its integer. A monomial prints as `(coeff,exp)` and a
//! monomial list joins its monomials with ` + `, highest exponent first:
//!
//! ```
//! use polycalc_poly::{Mono, Poly};
//!
//! let p: Poly = [Mono::new(Poly::from_coeff(1), 2), Mono::new(Poly::from_coeff(-3), 0)]
//!     .into_iter()
//!     .collect();
//! assert_eq!(p.to_string(), "(1,2) + (-3,0)");
//! ```
//!
//! The output is accepted back by the calculator's parser.

use std::fmt;

use crate::mono::Mono;
use crate::poly::{Poly, Repr};

impl fmt::Display for Mono {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.poly(), self.exp())
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Repr::Coeff(c) => write!(f, "{c}"),
            Repr::Monos(monos) => {
                for (i, m) in monos.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" + ")?;
                    }
                    write!(f, "{m}")?;
                }
                Ok(())
            }
        }
    }
}
