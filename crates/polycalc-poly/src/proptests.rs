//! Property-based tests for polynomial arithmetic.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::mono::Mono;
    use crate::poly::{Coeff, Exp, Poly};
    use crate::tuning::MulStrategy;
    use crate::PowerTable;

    // Strategy for generating small integer coefficients
    fn small_coeff() -> impl Strategy<Value = Coeff> {
        -20i64..20i64
    }

    // Strategy for generating nested polynomials, at most three variables deep
    fn small_poly() -> impl Strategy<Value = Poly> {
        small_coeff()
            .prop_map(Poly::from_coeff)
            .prop_recursive(3, 24, 4, |inner| {
                proptest::collection::vec((inner, 0..5 as Exp), 0..4).prop_map(|terms| {
                    terms
                        .into_iter()
                        .map(|(p, e)| Mono::new(p, e))
                        .collect::<Poly>()
                })
            })
    }

    // Strategy for generating polynomials in at most two variables with few
    // monomials, for the exponentiation-heavy properties
    fn shallow_poly() -> impl Strategy<Value = Poly> {
        small_coeff()
            .prop_map(Poly::from_coeff)
            .prop_recursive(2, 6, 3, |inner| {
                proptest::collection::vec((inner, 0..4 as Exp), 0..3).prop_map(|terms| {
                    terms
                        .into_iter()
                        .map(|(p, e)| Mono::new(p, e))
                        .collect::<Poly>()
                })
            })
    }

    // Strategy for generating non-constant polynomials
    fn nonconst_poly() -> impl Strategy<Value = Poly> {
        (shallow_poly(), 1..4 as Exp)
            .prop_map(|(p, e)| p.add(&Poly::var(0).pow(e)))
            .prop_filter("polynomial must be non-constant", |p| !p.is_coeff())
    }

    // Composition by plain repeated squaring, without a power table
    fn compose_by_pow(p: &Poly, substitutes: &[Poly]) -> Poly {
        if p.is_coeff() {
            return p.clone();
        }
        let Some((head, rest)) = substitutes.split_first() else {
            return Poly::zero();
        };

        p.monos()
            .iter()
            .map(|m| head.pow(m.exp()).mul(&compose_by_pow(m.poly(), rest)))
            .sum()
    }

    proptest! {
        // Ring axioms

        #[test]
        fn poly_add_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.add(&b), b.add(&a));
        }

        #[test]
        fn poly_add_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.add(&b).add(&c), a.add(&b.add(&c)));
        }

        #[test]
        fn poly_mul_commutative(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.mul(&b), b.mul(&a));
        }

        #[test]
        fn poly_mul_associative(a in small_poly(), b in small_poly(), c in small_poly()) {
            prop_assert_eq!(a.mul(&b).mul(&c), a.mul(&b.mul(&c)));
        }

        #[test]
        fn poly_distributive(a in small_poly(), b in small_poly(), c in small_poly()) {
            // a * (b + c) = a * b + a * c
            let left = a.mul(&b.add(&c));
            let right = a.mul(&b).add(&a.mul(&c));
            prop_assert_eq!(left, right);
        }

        #[test]
        fn poly_add_identity(a in small_poly()) {
            let zero = Poly::zero();
            prop_assert_eq!(a.add(&zero), a.clone());
            prop_assert_eq!(zero.add(&a), a);
        }

        #[test]
        fn poly_mul_identity(a in small_poly()) {
            let one = Poly::one();
            prop_assert_eq!(a.mul(&one), a.clone());
            prop_assert_eq!(one.mul(&a), a);
        }

        #[test]
        fn poly_mul_zero(a in small_poly()) {
            let zero = Poly::zero();
            prop_assert!(a.mul(&zero).is_zero());
            prop_assert!(zero.mul(&a).is_zero());
        }

        #[test]
        fn poly_additive_inverse(a in small_poly()) {
            prop_assert!(a.add(&a.neg()).is_zero());
            prop_assert!(a.sub(&a).is_zero());
        }

        // Both addition families agree

        #[test]
        fn poly_incorporate_matches_add(a in small_poly(), b in small_poly()) {
            let sum = a.add(&b);
            prop_assert_eq!(a.clone().incorporate(b.clone()), sum.clone());

            let mut by_value = a;
            by_value += b;
            prop_assert_eq!(by_value, sum);
        }

        #[test]
        fn poly_sub_is_add_neg(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(a.sub(&b), a.add(&b.neg()));
        }

        // Degree properties

        #[test]
        fn poly_mul_degree(a in small_poly(), b in small_poly()) {
            // deg(a * b) = deg(a) + deg(b) for non-zero polynomials
            prop_assume!(!a.is_zero() && !b.is_zero());
            prop_assert_eq!(a.mul(&b).degree(), a.degree() + b.degree());
        }

        #[test]
        fn poly_add_degree_bound(a in small_poly(), b in small_poly()) {
            prop_assert!(a.add(&b).degree() <= a.degree().max(b.degree()));
        }

        #[test]
        fn poly_degree_by_bounded_by_degree(a in small_poly(), idx in 0usize..5) {
            prop_assert!(a.degree_by(idx) <= a.degree());
        }

        // Canonical form

        #[test]
        fn poly_results_are_canonical(a in small_poly(), b in small_poly(), x in -5i64..5) {
            prop_assert!(a.is_canonical());
            prop_assert!(a.add(&b).is_canonical());
            prop_assert!(a.sub(&b).is_canonical());
            prop_assert!(a.mul(&b).is_canonical());
            prop_assert!(a.at(x).is_canonical());
            prop_assert!(a.scale(x).is_canonical());
        }

        #[test]
        fn poly_canonical_idempotent(a in small_poly()) {
            // rebuilding from its own monomials changes nothing
            if !a.is_coeff() {
                prop_assert_eq!(Poly::from_mono_slice(a.monos()), a);
            }
        }

        // Multiplication strategies

        #[test]
        fn poly_mul_strategies_agree(a in small_poly(), b in small_poly()) {
            prop_assert_eq!(
                a.mul_with(&b, MulStrategy::Insertion),
                a.mul_with(&b, MulStrategy::Bulk)
            );
        }

        // Evaluation

        #[test]
        fn poly_at_additive(a in small_poly(), b in small_poly(), x in -5i64..5) {
            prop_assert_eq!(a.add(&b).at(x), a.at(x).add(&b.at(x)));
        }

        #[test]
        fn poly_at_multiplicative(a in small_poly(), b in small_poly(), x in -5i64..5) {
            prop_assert_eq!(a.mul(&b).at(x), a.at(x).mul(&b.at(x)));
        }

        // Exponentiation

        #[test]
        fn poly_pow_consistency(a in nonconst_poly()) {
            prop_assert_eq!(a.pow(3), a.mul(&a).mul(&a));
        }

        #[test]
        fn poly_power_table_matches_pow(a in nonconst_poly(), n in 0..8 as Exp) {
            let table = PowerTable::new(&a, 7);
            prop_assert_eq!(table.get(n), a.pow(n));
        }

        // Composition

        #[test]
        fn poly_compose_matches_repeated_squaring(
            a in small_poly(),
            subs in proptest::collection::vec(shallow_poly(), 0..4),
        ) {
            prop_assert_eq!(a.compose(&subs), compose_by_pow(&a, &subs));
        }

        #[test]
        fn poly_compose_identity(a in small_poly()) {
            let vars: Vec<Poly> = (0..4).map(Poly::var).collect();
            prop_assert_eq!(a.compose(&vars), a);
        }
    }
}
