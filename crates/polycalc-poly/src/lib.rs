//! # polycalc-poly
//!
//! Sparse multivariate polynomials over `i64` with a recursive representation.
//!
//! A polynomial is either a constant or a list of monomials `p * x_i^n` sorted
//! by decreasing exponent, where each coefficient `p` is itself a polynomial in
//! the next variable `x_{i+1}`. Variables are named only by their nesting depth.
//!
//! This crate provides:
//! - The canonical representation ([`Poly`], [`Mono`])
//! - Borrowing (`+=`) and owning (`+=+`, [`Poly::incorporate`]) merges
//! - Addition, subtraction, negation and two multiplication strategies
//! - Evaluation, exponentiation and composition with an optional [`PowerTable`]
//!
//! ## Algorithm Selection
//!
//! Multiplication picks its strategy from the operand sizes (see [`tuning`]):
//! - Two single monomials: ordered insertion of the product
//! - Otherwise: collect all products, sort once, fold equal exponents
//!
//! Arithmetic on coefficients and exponents wraps on overflow.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod arith;
pub mod display;
pub mod eval;
pub mod merge;
pub mod mono;
pub mod poly;
pub mod tuning;

#[cfg(test)]
mod proptests;

pub use eval::{pow_coeff, PowerTable};
pub use mono::Mono;
pub use poly::{Coeff, Exp, Poly};
pub use tuning::MulStrategy;
