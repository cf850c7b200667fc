//! Ring operations on [`Poly`].
//!
//! Addition comes in two flavours mirroring the merge engine:
//!
//! - `p += &q` ([`AddAssign<&Poly>`]) borrows `q` and clones what it needs
//! - `p += q` ([`AddAssign<Poly>`]) and [`Poly::incorporate`] consume `q` and
//!   move its monomials into the result
//!
//! The binary operations (`add`, `sub`, `mul`, ...) never consume their inputs.

use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use tracing::trace;

use crate::merge::{insert, merge_add, merge_incorporate, wrap_coeff};
use crate::mono::{add_exp, Mono};
use crate::poly::{Coeff, Exp, Poly, Repr};
use crate::tuning::MulStrategy;

impl Poly {
    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut sum = self.clone();
        sum += other;
        sum
    }

    /// Adds `other` into `self`, consuming both (`self +=+ other`).
    ///
    /// No monomial of either operand is copied; use this when both sides are
    /// disposable intermediates.
    #[must_use]
    pub fn incorporate(self, other: Self) -> Self {
        match (self.0, other.0) {
            (Repr::Coeff(a), Repr::Coeff(b)) => Self::from_coeff(a.wrapping_add(b)),
            (Repr::Coeff(c), Repr::Monos(mut monos)) | (Repr::Monos(mut monos), Repr::Coeff(c)) => {
                if c != 0 {
                    insert(&mut monos, Mono::pseudo_coeff(c));
                }
                Self::collapse(monos)
            }
            (Repr::Monos(lhs), Repr::Monos(rhs)) => Self::collapse(merge_incorporate(lhs, rhs)),
        }
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn neg(&self) -> Self {
        self.scale(-1)
    }

    /// Negates a polynomial in place.
    pub fn neg_in_place(&mut self) {
        self.scale_in_place(-1);
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let mut diff = other.neg();
        diff += self;
        diff
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: Coeff) -> Self {
        if c == 0 {
            return Self::zero();
        }

        let mut scaled = self.clone();
        scaled.scale_in_place(c);
        scaled
    }

    /// Multiplies by a scalar in place.
    ///
    /// Monomials whose coefficient wraps to zero are dropped.
    pub fn scale_in_place(&mut self, c: Coeff) {
        match &mut self.0 {
            Repr::Coeff(a) => *a = a.wrapping_mul(c),
            Repr::Monos(monos) => {
                monos.retain_mut(|m| {
                    m.poly_mut().scale_in_place(c);
                    !m.poly().is_zero()
                });
                self.normalize();
            }
        }
    }

    /// Multiplies two polynomials.
    ///
    /// A constant operand takes the scalar path; otherwise the strategy is
    /// chosen by [`MulStrategy::select`].
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let strategy = MulStrategy::select(self.len(), other.len());
        self.mul_with(other, strategy)
    }

    /// Multiplies two polynomials with an explicit strategy for combining the
    /// monomial products.
    #[must_use]
    pub fn mul_with(&self, other: &Self, strategy: MulStrategy) -> Self {
        match (&self.0, &other.0) {
            (Repr::Coeff(c), _) => other.scale(*c),
            (_, Repr::Coeff(c)) => self.scale(*c),
            (Repr::Monos(lhs), Repr::Monos(rhs)) => {
                trace!(?strategy, lhs = lhs.len(), rhs = rhs.len(), "multiplying");
                match strategy {
                    MulStrategy::Insertion => mul_by_insertion(lhs, rhs),
                    MulStrategy::Bulk => mul_bulk(lhs, rhs),
                }
            }
        }
    }

    /// Returns the total degree, or -1 for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Exp {
        match &self.0 {
            Repr::Coeff(c) => coeff_degree(*c),
            Repr::Monos(monos) => monos
                .iter()
                .map(|m| add_exp(m.exp(), m.poly().degree()))
                .max()
                .unwrap_or(-1),
        }
    }

    /// Returns the degree in the variable at nesting depth `idx`, or -1 for
    /// the zero polynomial.
    ///
    /// A non-zero constant has degree 0 in every variable.
    ///
    /// # Note
    ///
    /// Only the zero polynomial reports -1. A non-zero polynomial that does
    /// not nest as deep as `idx` reports 0, because its innermost
    /// coefficients are non-zero constants: `x_0^2 + 1` has degree 0 in
    /// `x_5`.
    #[must_use]
    pub fn degree_by(&self, idx: usize) -> Exp {
        match &self.0 {
            Repr::Coeff(c) => coeff_degree(*c),
            // sorted, so the head carries the largest exponent
            Repr::Monos(monos) if idx == 0 => monos[0].exp(),
            Repr::Monos(monos) => monos
                .iter()
                .map(|m| m.poly().degree_by(idx - 1))
                .max()
                .unwrap_or(-1),
        }
    }
}

fn coeff_degree(c: Coeff) -> Exp {
    if c == 0 {
        -1
    } else {
        0
    }
}

/// Multiplies by inserting every non-zero product into the growing result.
fn mul_by_insertion(lhs: &[Mono], rhs: &[Mono]) -> Poly {
    let mut product = Vec::new();

    for m in lhs {
        for t in rhs {
            let mt = m.mul(t);
            if !mt.poly().is_zero() {
                insert(&mut product, mt);
            }
        }
    }

    Poly::collapse(product)
}

/// Multiplies by collecting all products first and building the result with a
/// single sort.
fn mul_bulk(lhs: &[Mono], rhs: &[Mono]) -> Poly {
    let mut products = Vec::with_capacity(lhs.len() * rhs.len());

    for m in lhs {
        for t in rhs {
            let mt = m.mul(t);
            if !mt.poly().is_zero() {
                products.push(mt);
            }
        }
    }

    Poly::from_monos(products)
}

impl AddAssign<&Poly> for Poly {
    /// `self += rhs`, cloning from `rhs` only what must be linked in.
    fn add_assign(&mut self, rhs: &Poly) {
        *self = match (std::mem::take(self).0, &rhs.0) {
            (Repr::Coeff(a), Repr::Coeff(b)) => Poly::from_coeff(a.wrapping_add(*b)),
            (lhs, Repr::Coeff(0)) => Poly(lhs),
            (Repr::Coeff(a), Repr::Monos(r)) => Poly::collapse(merge_add(wrap_coeff(a), r)),
            (Repr::Monos(mut lhs), Repr::Coeff(b)) => {
                insert(&mut lhs, Mono::pseudo_coeff(*b));
                Poly::collapse(lhs)
            }
            (Repr::Monos(l), Repr::Monos(r)) => Poly::collapse(merge_add(l, r)),
        };
    }
}

impl AddAssign<Poly> for Poly {
    /// `self +=+ rhs`, see [`Poly::incorporate`].
    fn add_assign(&mut self, rhs: Poly) {
        *self = std::mem::take(self).incorporate(rhs);
    }
}

impl SubAssign<&Poly> for Poly {
    fn sub_assign(&mut self, rhs: &Poly) {
        *self = std::mem::take(self).incorporate(rhs.neg());
    }
}

impl MulAssign<&Poly> for Poly {
    fn mul_assign(&mut self, rhs: &Poly) {
        *self = Poly::mul(self, rhs);
    }
}

impl Add for &Poly {
    type Output = Poly;

    fn add(self, rhs: Self) -> Poly {
        Poly::add(self, rhs)
    }
}

impl Sub for &Poly {
    type Output = Poly;

    fn sub(self, rhs: Self) -> Poly {
        Poly::sub(self, rhs)
    }
}

impl Mul for &Poly {
    type Output = Poly;

    fn mul(self, rhs: Self) -> Poly {
        Poly::mul(self, rhs)
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        Poly::neg(self)
    }
}

impl std::iter::Sum for Poly {
    fn sum<I: Iterator<Item = Poly>>(iter: I) -> Self {
        iter.fold(Poly::zero(), Poly::incorporate)
    }
}
