//! The recursive polynomial type.
//!
//! A [`Poly`] is either a constant or a non-empty list of monomials in the
//! outermost variable. Every public operation returns values in canonical form:
//!
//! 1. monomials are sorted by strictly decreasing exponent,
//! 2. no monomial has a zero coefficient,
//! 3. a single `c * x^0` monomial with constant `c` (a *pseudo-coefficient*)
//!    is always collapsed into the constant `c`, and an empty list into `0`.
//!
//! Because the form is canonical, structural equality is polynomial equality.

use crate::merge;
use crate::mono::Mono;

/// Coefficient type. Arithmetic wraps on overflow.
pub type Coeff = i64;

/// Exponent type. Exponents are never negative.
pub type Exp = i32;

/// A sparse multivariate polynomial.
///
/// Cloning makes a full deep copy; two live polynomials never share
/// monomials. Dropping a polynomial drops every nested coefficient.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Poly(pub(crate) Repr);

/// The two representation cases of a [`Poly`].
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub(crate) enum Repr {
    /// A constant polynomial.
    Coeff(Coeff),
    /// Monomials sorted by decreasing exponent; never empty, never a
    /// pseudo-coefficient.
    Monos(Vec<Mono>),
}

impl Poly {
    /// Creates a constant polynomial.
    #[must_use]
    pub const fn from_coeff(c: Coeff) -> Self {
        Self(Repr::Coeff(c))
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self::from_coeff(0)
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub const fn one() -> Self {
        Self::from_coeff(1)
    }

    /// Creates the polynomial `x_i` for the variable at nesting depth `i`.
    #[must_use]
    pub fn var(i: usize) -> Self {
        (0..i).fold(Self(Repr::Monos(vec![Mono::new(Self::one(), 1)])), |inner, _| {
            Self(Repr::Monos(vec![Mono::new(inner, 0)]))
        })
    }

    /// Sums an owned vector of monomials into a polynomial.
    ///
    /// The monomials may come in any order and may repeat exponents; they are
    /// sorted once and equal exponents are folded together. Zero monomials
    /// are dropped. An empty vector gives the zero polynomial.
    #[must_use]
    pub fn from_monos(mut monos: Vec<Mono>) -> Self {
        monos.sort_unstable_by(|a, b| b.exp().cmp(&a.exp()));

        let mut folded: Vec<Mono> = Vec::with_capacity(monos.len());
        for mono in monos {
            if mono.poly().is_zero() {
                continue;
            }

            match folded.last_mut() {
                Some(last) if last.exp() == mono.exp() => {
                    *last.poly_mut() += mono.into_poly();
                    if last.poly().is_zero() {
                        folded.pop();
                    }
                }
                _ => folded.push(mono),
            }
        }

        Self::collapse(folded)
    }

    /// Sums a borrowed slice of monomials, deep-copying each of them.
    #[must_use]
    pub fn from_mono_slice(monos: &[Mono]) -> Self {
        Self::from_monos(monos.to_vec())
    }

    /// Returns true if this is a constant polynomial.
    #[must_use]
    pub fn is_coeff(&self) -> bool {
        matches!(self.0, Repr::Coeff(_))
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        matches!(self.0, Repr::Coeff(0))
    }

    /// Returns the value of a constant polynomial.
    #[must_use]
    pub fn as_coeff(&self) -> Option<Coeff> {
        match self.0 {
            Repr::Coeff(c) => Some(c),
            Repr::Monos(_) => None,
        }
    }

    /// Returns the monomials, highest exponent first. Empty for constants.
    #[must_use]
    pub fn monos(&self) -> &[Mono] {
        match &self.0 {
            Repr::Coeff(_) => &[],
            Repr::Monos(monos) => monos,
        }
    }

    /// Number of monomials in the outermost variable (0 for constants).
    #[must_use]
    pub fn len(&self) -> usize {
        self.monos().len()
    }

    /// Returns true if there are no monomials, i.e. the polynomial is constant.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.is_coeff()
    }

    /// Builds a polynomial from a sorted, zero-free monomial vector,
    /// collapsing the degenerate shapes into constants.
    pub(crate) fn collapse(monos: Vec<Mono>) -> Self {
        if monos.is_empty() {
            return Self::zero();
        }

        if merge::is_pseudo_coeff(&monos) {
            return Self::from_coeff(monos[0].poly().as_coeff().unwrap_or_default());
        }

        Self(Repr::Monos(monos))
    }

    /// Restores canonical form after the monomial list was edited in place.
    pub(crate) fn normalize(&mut self) {
        if let Repr::Monos(monos) = &mut self.0 {
            *self = Self::collapse(std::mem::take(monos));
        }
    }

    /// Checks every representation invariant, recursively.
    #[cfg(test)]
    pub(crate) fn is_canonical(&self) -> bool {
        match &self.0 {
            Repr::Coeff(_) => true,
            Repr::Monos(monos) => {
                !monos.is_empty()
                    && !merge::is_pseudo_coeff(monos)
                    && monos.windows(2).all(|w| w[0].exp() > w[1].exp())
                    && monos
                        .iter()
                        .all(|m| m.exp() >= 0 && !m.poly().is_zero() && m.poly().is_canonical())
            }
        }
    }
}

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Coeff> for Poly {
    fn from(c: Coeff) -> Self {
        Self::from_coeff(c)
    }
}

impl From<Mono> for Poly {
    fn from(mono: Mono) -> Self {
        Self::from_monos(vec![mono])
    }
}

impl FromIterator<Mono> for Poly {
    fn from_iter<I: IntoIterator<Item = Mono>>(iter: I) -> Self {
        Self::from_monos(iter.into_iter().collect())
    }
}
