//! Algorithm selection thresholds.
//!
//! The thresholds only pick between algorithms with identical results; they
//! never change what an operation computes.

use crate::poly::Exp;

/// Bulk multiplication threshold.
///
/// When either operand has at least this many monomials, products are
/// collected and sorted once instead of being inserted one by one.
pub const MUL_BULK_MIN_TERMS: usize = 2;

/// Exponent above which [`Poly::pow`](crate::Poly::pow) and
/// [`PowerTable`](crate::PowerTable) force bulk multiplication for every
/// squaring step.
///
/// With [`MUL_BULK_MIN_TERMS`] at 2 the default selection already picks bulk
/// for every base this forces, so the override only takes effect once that
/// threshold is raised.
pub const POW_BULK_MIN_EXP: Exp = 3000;

/// Minimum number of outer monomials for which
/// [`Poly::compose`](crate::Poly::compose) precomputes a power table of the
/// substitute.
pub const COMPOSE_TABLE_MIN_TERMS: usize = 3;

/// How the monomial products of a multiplication are combined.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum MulStrategy {
    /// Insert each product into the result as it is produced.
    Insertion,
    /// Collect every product, then sort once and fold equal exponents.
    Bulk,
}

impl MulStrategy {
    /// Picks a strategy from the outer monomial counts of the operands.
    #[must_use]
    pub fn select(lhs_terms: usize, rhs_terms: usize) -> Self {
        if lhs_terms.max(rhs_terms) >= MUL_BULK_MIN_TERMS {
            Self::Bulk
        } else {
            Self::Insertion
        }
    }

    /// Returns the strategy to force while raising a polynomial with `terms`
    /// outer monomials to the power `n`, or `None` to keep the default.
    #[must_use]
    pub fn for_power(terms: usize, n: Exp) -> Option<Self> {
        (n > POW_BULK_MIN_EXP && terms >= 2).then_some(Self::Bulk)
    }
}
