//! Monomials of the recursive representation.
//!
//! A monomial `p * x_i^n` pairs a coefficient polynomial `p` (a polynomial in
//! `x_{i+1}` and deeper variables) with an exponent `n` of the variable at the
//! current nesting depth.

use std::cmp::Ordering;

use crate::poly::{Coeff, Exp, Poly};

/// Adds two non-negative exponents modulo `2^31`.
///
/// Overflowing sums wrap back into `0..=Exp::MAX`, so a product of valid
/// monomials is always a valid monomial.
#[must_use]
pub(crate) const fn add_exp(a: Exp, b: Exp) -> Exp {
    a.wrapping_add(b) & Exp::MAX
}

/// A monomial `poly * x^exp`.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Mono {
    poly: Poly,
    exp: Exp,
}

impl Mono {
    /// Creates the monomial `poly * x^exp`, taking ownership of `poly`.
    ///
    /// # Panics
    ///
    /// Panics if `exp` is negative.
    #[must_use]
    pub fn new(poly: Poly, exp: Exp) -> Self {
        assert!(exp >= 0, "monomial exponent must be non-negative, got {exp}");
        Self { poly, exp }
    }

    /// Wraps a constant as `c * x^0` so it can be merged into a monomial list.
    #[must_use]
    pub(crate) const fn pseudo_coeff(c: Coeff) -> Self {
        Self {
            poly: Poly::from_coeff(c),
            exp: 0,
        }
    }

    /// Returns the exponent.
    #[must_use]
    pub fn exp(&self) -> Exp {
        self.exp
    }

    /// Returns the coefficient polynomial.
    #[must_use]
    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    pub(crate) fn poly_mut(&mut self) -> &mut Poly {
        &mut self.poly
    }

    /// Consumes the monomial, returning its coefficient.
    #[must_use]
    pub fn into_poly(self) -> Poly {
        self.poly
    }

    /// Consumes the monomial, returning `(coefficient, exponent)`.
    #[must_use]
    pub fn into_parts(self) -> (Poly, Exp) {
        (self.poly, self.exp)
    }

    /// Multiplies two monomials: exponents add (modulo `2^31`),
    /// coefficients multiply.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        Self {
            poly: self.poly.mul(&other.poly),
            exp: add_exp(self.exp, other.exp),
        }
    }

    /// Compares two monomials by exponent only.
    #[must_use]
    pub fn cmp_exp(&self, other: &Self) -> Ordering {
        self.exp.cmp(&other.exp)
    }
}
