//! Evaluation, exponentiation and composition.
//!
//! All three are built on iterative square-and-multiply. Composition can
//! additionally precompute a [`PowerTable`] of the substitute when the same
//! substitute is raised to many different exponents.

use smallvec::SmallVec;
use tracing::trace;

use crate::poly::{Coeff, Exp, Poly, Repr};
use crate::tuning::{MulStrategy, COMPOSE_TABLE_MIN_TERMS};

/// Raises a constant to a non-negative power with wrapping arithmetic.
///
/// # Panics
///
/// Panics if `exp` is negative.
#[must_use]
pub fn pow_coeff(base: Coeff, exp: Exp) -> Coeff {
    assert!(exp >= 0, "exponent must be non-negative, got {exp}");

    let mut result: Coeff = 1;
    let mut base = base;
    let mut exp = exp;

    while exp > 0 {
        if exp & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        base = base.wrapping_mul(base);
        exp >>= 1;
    }

    result
}

/// Multiplies with `forced` if set, otherwise with the default strategy.
fn power_mul(a: &Poly, b: &Poly, forced: Option<MulStrategy>) -> Poly {
    match forced {
        Some(strategy) => a.mul_with(b, strategy),
        None => a.mul(b),
    }
}

/// Number of significant bits of a non-negative exponent.
fn bit_len(n: Exp) -> usize {
    (Exp::BITS - n.leading_zeros()) as usize
}

impl Poly {
    /// Substitutes `x` for the outermost variable.
    ///
    /// The result is a polynomial in the remaining variables, each moved one
    /// nesting level out.
    #[must_use]
    pub fn at(&self, x: Coeff) -> Self {
        let Repr::Monos(monos) = &self.0 else {
            return self.clone();
        };

        let mut value = Self::zero();
        for m in monos {
            value += m.poly().scale(pow_coeff(x, m.exp()));
        }
        value
    }

    /// Raises the polynomial to a non-negative power by repeated squaring.
    ///
    /// `p.pow(0)` is one for every `p`, including zero.
    ///
    /// # Panics
    ///
    /// Panics if `n` is negative.
    #[must_use]
    pub fn pow(&self, n: Exp) -> Self {
        assert!(n >= 0, "exponent must be non-negative, got {n}");

        if let Some(c) = self.as_coeff() {
            return Self::from_coeff(pow_coeff(c, n));
        }
        if n == 0 {
            return Self::one();
        }

        let forced = MulStrategy::for_power(self.len(), n);
        let mul = |a: &Self, b: &Self| power_mul(a, b, forced);

        let mut result = Self::one();
        let mut base = self.clone();
        let mut exp = n;

        loop {
            if exp & 1 == 1 {
                result = mul(&result, &base);
            }
            exp >>= 1;
            if exp == 0 {
                break;
            }
            base = mul(&base, &base);
        }

        result
    }

    /// Substitutes `substitutes[i]` for the variable at nesting depth `i`.
    ///
    /// Variables nested deeper than `substitutes.len()` are replaced by zero,
    /// so an empty slice maps every non-constant polynomial to zero.
    #[must_use]
    pub fn compose(&self, substitutes: &[Self]) -> Self {
        let Repr::Monos(monos) = &self.0 else {
            return self.clone();
        };
        let Some((head, rest)) = substitutes.split_first() else {
            return Self::zero();
        };

        let table = (monos.len() >= COMPOSE_TABLE_MIN_TERMS && !head.is_coeff())
            .then(|| PowerTable::new(head, self.degree_by(0)));

        let mut total = Self::zero();
        for m in monos {
            let inner = m.poly().compose(rest);
            if inner.is_zero() {
                continue;
            }

            let power = match &table {
                Some(table) => table.get(m.exp()),
                None => head.pow(m.exp()),
            };
            total += power.mul(&inner);
        }
        total
    }
}

/// Successive squarings `base^1, base^2, base^4, ...` of a polynomial.
///
/// Answers `base^n` for any `n` below `2^len()` with one multiplication per
/// set bit of `n` and no further squaring.
#[derive(Clone, Debug)]
pub struct PowerTable {
    powers: SmallVec<[Poly; 8]>,
    forced: Option<MulStrategy>,
}

impl PowerTable {
    /// Builds the table for every exponent up to `max_exp`.
    ///
    /// Squarings and lookups multiply the way [`Poly::pow`] would for
    /// `base^max_exp`.
    ///
    /// # Panics
    ///
    /// Panics if `max_exp` is negative.
    #[must_use]
    pub fn new(base: &Poly, max_exp: Exp) -> Self {
        assert!(max_exp >= 0, "exponent must be non-negative, got {max_exp}");

        let forced = MulStrategy::for_power(base.len(), max_exp);
        let bits = bit_len(max_exp);
        let mut powers: SmallVec<[Poly; 8]> = SmallVec::with_capacity(bits);
        if bits > 0 {
            powers.push(base.clone());
        }
        for bit in 1..bits {
            let prev = &powers[bit - 1];
            let squared = power_mul(prev, prev, forced);
            trace!(bit, terms = squared.len(), "power table squaring");
            powers.push(squared);
        }

        Self { powers, forced }
    }

    /// Number of stored squarings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.powers.len()
    }

    /// Returns true if the table only answers `base^0`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.powers.is_empty()
    }

    /// Returns `base^n`.
    ///
    /// # Panics
    ///
    /// Panics if `n` is negative or needs more bits than the table holds.
    #[must_use]
    pub fn get(&self, n: Exp) -> Poly {
        assert!(n >= 0, "exponent must be non-negative, got {n}");
        assert!(
            bit_len(n) <= self.powers.len(),
            "exponent {n} is beyond the power table"
        );

        let mut result = Poly::one();
        for (bit, power) in self.powers.iter().enumerate() {
            if (n >> bit) & 1 == 1 {
                result = power_mul(&result, power, self.forced);
            }
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mono::Mono;

    fn c(v: Coeff) -> Poly {
        Poly::from_coeff(v)
    }

    fn uni(terms: &[(Coeff, Exp)]) -> Poly {
        terms.iter().map(|&(v, e)| Mono::new(c(v), e)).collect()
    }

    #[test]
    fn test_pow_coeff() {
        assert_eq!(pow_coeff(2, 10), 1024);
        assert_eq!(pow_coeff(-3, 3), -27);
        assert_eq!(pow_coeff(7, 0), 1);
        assert_eq!(pow_coeff(0, 0), 1);
        assert_eq!(pow_coeff(0, 5), 0);
        // 2^64 wraps to zero
        assert_eq!(pow_coeff(2, 64), 0);
        assert_eq!(pow_coeff(-1, 1_000_001), -1);
    }

    #[test]
    #[should_panic(expected = "non-negative")]
    fn test_pow_coeff_negative_exponent() {
        let _ = pow_coeff(2, -1);
    }

    #[test]
    fn test_at_univariate() {
        // (x^2 + 1)(3) = 10
        let p = uni(&[(1, 2), (1, 0)]);
        assert_eq!(p.at(3), c(10));
        assert_eq!(p.at(0), c(1));
        assert_eq!(c(5).at(7), c(5));
    }

    #[test]
    fn test_at_shifts_variables() {
        // (x_0 * x_1 + 2)(x_0 = 3) = 3 * x_0 + 2
        let x = Poly::var(0);
        let y = Poly::var(1);
        let p = x.mul(&y).add(&c(2));

        let value = p.at(3);
        assert_eq!(value, uni(&[(3, 1), (2, 0)]));
        assert!(value.is_canonical());
    }

    #[test]
    fn test_at_cancels() {
        // x - 2 vanishes at 2
        assert!(uni(&[(1, 1), (-2, 0)]).at(2).is_zero());
    }

    #[test]
    fn test_pow() {
        let xp1 = uni(&[(1, 1), (1, 0)]);

        assert_eq!(xp1.pow(0), Poly::one());
        assert_eq!(xp1.pow(1), xp1);
        assert_eq!(xp1.pow(3), uni(&[(1, 3), (3, 2), (3, 1), (1, 0)]));
        assert_eq!(xp1.pow(5), xp1.pow(2).mul(&xp1.pow(3)));

        assert_eq!(c(3).pow(4), c(81));
        assert_eq!(Poly::zero().pow(0), Poly::one());
        assert!(Poly::zero().pow(2).is_zero());
    }

    #[test]
    fn test_pow_single_monomial_large_exponent() {
        let p = Poly::var(0).pow(5000);
        assert_eq!(p, uni(&[(1, 5000)]));
    }

    #[test]
    fn test_power_table() {
        let base = uni(&[(1, 1), (-1, 0)]);
        let table = PowerTable::new(&base, 13);

        assert_eq!(table.len(), 4);
        assert_eq!(table.get(0), Poly::one());
        for n in [1, 2, 5, 8, 13, 15] {
            assert_eq!(table.get(n), base.pow(n));
        }

        let empty = PowerTable::new(&base, 0);
        assert!(empty.is_empty());
        assert_eq!(empty.get(0), Poly::one());
    }

    #[test]
    fn test_power_table_large_exponent() {
        // (x + 2)^n keeps at most 64 terms: 2^j wraps to zero for j >= 64
        let base = uni(&[(1, 1), (2, 0)]);
        let table = PowerTable::new(&base, 4000);

        assert_eq!(table.forced, Some(MulStrategy::Bulk));
        assert_eq!(table.len(), 12);
        assert_eq!(table.get(4000), base.pow(4000));
        assert_eq!(table.get(3001).degree(), 3001);

        assert_eq!(PowerTable::new(&base, 13).forced, None);
    }

    #[test]
    #[should_panic(expected = "beyond the power table")]
    fn test_power_table_out_of_range() {
        let table = PowerTable::new(&Poly::var(0), 7);
        let _ = table.get(8);
    }

    #[test]
    fn test_compose_constant_substitute() {
        // x^3 + x + 1 at x = 2, through the power table path
        let p = uni(&[(1, 3), (1, 1), (1, 0)]);
        assert_eq!(p.compose(&[c(2)]), c(11));
    }

    #[test]
    fn test_compose_polynomial_substitute() {
        // x^2 + 1 with x -> x + 1 is x^2 + 2x + 2
        let p = uni(&[(1, 2), (1, 0)]);
        let q = uni(&[(1, 1), (1, 0)]);
        assert_eq!(p.compose(&[q.clone()]), uni(&[(1, 2), (2, 1), (2, 0)]));

        // three monomials take the table path; the result must not change
        let p = uni(&[(1, 4), (1, 2), (1, 0)]);
        let reference = q.pow(4).add(&q.pow(2)).add(&c(1));
        assert_eq!(p.compose(&[q]), reference);
    }

    #[test]
    fn test_compose_missing_substitutes_are_zero() {
        let x = Poly::var(0);
        let y = Poly::var(1);
        let p = x.add(&y);

        assert_eq!(p.compose(&[c(2), c(5)]), c(7));
        assert_eq!(p.compose(&[c(2)]), c(2));
        assert!(p.compose(&[]).is_zero());
        assert_eq!(c(4).compose(&[]), c(4));
    }

    #[test]
    fn test_compose_swaps_variables() {
        let x = Poly::var(0);
        let y = Poly::var(1);
        let p = x.sub(&y);

        let swapped = p.compose(&[y.clone(), x.clone()]);
        assert_eq!(swapped, y.sub(&x));
        assert!(swapped.is_canonical());
    }
}
