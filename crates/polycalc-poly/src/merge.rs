//! Merging of sorted monomial lists.
//!
//! All lists here are sorted by strictly decreasing exponent and contain no
//! zero monomials. Two merges are provided:
//!
//! - [`merge_add`]: `lhs += rhs` where `rhs` is only borrowed, so monomials
//!   taken from it are cloned.
//! - [`merge_incorporate`]: `lhs +=+ rhs` where both lists are consumed and
//!   their monomials are moved into the result without copying.
//!
//! Results may be empty or a pseudo-coefficient; callers collapse them with
//! `Poly::collapse`.

use std::cmp::Ordering;

use crate::mono::Mono;
use crate::poly::Coeff;

/// Returns true if `monos` is a lone constant wrapped as `c * x^0`.
#[must_use]
pub fn is_pseudo_coeff(monos: &[Mono]) -> bool {
    matches!(monos, [m] if m.exp() == 0 && m.poly().is_coeff())
}

/// Wraps a constant as a monomial list so it can be merged with a non-constant.
/// Zero wraps to the empty list.
#[must_use]
pub fn wrap_coeff(c: Coeff) -> Vec<Mono> {
    if c == 0 {
        Vec::new()
    } else {
        vec![Mono::pseudo_coeff(c)]
    }
}

/// Computes `lhs += rhs`, leaving `rhs` untouched.
///
/// Monomials of `lhs` are moved into the result; monomials of `rhs` with an
/// exponent missing from `lhs` are cloned. Equal exponents are summed with the
/// borrowing compound add and dropped if they cancel.
#[must_use]
pub fn merge_add(lhs: Vec<Mono>, rhs: &[Mono]) -> Vec<Mono> {
    let mut result = Vec::with_capacity(lhs.len() + rhs.len());
    let mut left = lhs.into_iter().peekable();
    let mut right = rhs.iter().peekable();

    loop {
        let order = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.cmp_exp(r),
            _ => break,
        };

        match order {
            Ordering::Greater => result.extend(left.next()),
            Ordering::Less => result.extend(right.next().cloned()),
            Ordering::Equal => {
                if let (Some(mut l), Some(r)) = (left.next(), right.next()) {
                    *l.poly_mut() += r.poly();
                    if !l.poly().is_zero() {
                        result.push(l);
                    }
                }
            }
        }
    }

    result.extend(left);
    result.extend(right.cloned());
    result
}

/// Computes `lhs +=+ rhs`, consuming both lists.
///
/// Structurally the same walk as [`merge_add`], but monomials from `rhs` are
/// moved instead of cloned and equal exponents are incorporated.
#[must_use]
pub fn merge_incorporate(lhs: Vec<Mono>, rhs: Vec<Mono>) -> Vec<Mono> {
    if lhs.is_empty() {
        return rhs;
    }
    if rhs.is_empty() {
        return lhs;
    }

    let mut result = Vec::with_capacity(lhs.len() + rhs.len());
    let mut left = lhs.into_iter().peekable();
    let mut right = rhs.into_iter().peekable();

    loop {
        let order = match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => l.cmp_exp(r),
            _ => break,
        };

        match order {
            Ordering::Greater => result.extend(left.next()),
            Ordering::Less => result.extend(right.next()),
            Ordering::Equal => {
                if let (Some(mut l), Some(r)) = (left.next(), right.next()) {
                    *l.poly_mut() += r.into_poly();
                    if !l.poly().is_zero() {
                        result.push(l);
                    }
                }
            }
        }
    }

    result.extend(left);
    result.extend(right);
    result
}

/// Inserts a single non-zero monomial into a sorted list.
///
/// If a monomial of equal exponent exists the two are summed in place, and
/// the slot is removed when the sum is zero.
pub fn insert(list: &mut Vec<Mono>, mono: Mono) {
    debug_assert!(!mono.poly().is_zero());

    // The list is descending, so compare the probe against each element.
    match list.binary_search_by(|m| mono.cmp_exp(m)) {
        Ok(i) => {
            *list[i].poly_mut() += mono.into_poly();
            if list[i].poly().is_zero() {
                list.remove(i);
            }
        }
        Err(i) => list.insert(i, mono),
    }
}
