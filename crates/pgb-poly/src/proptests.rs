//! Property-based tests for polynomial operations.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::polynomial::Polynomial;
    use pgb_core::{Exponent, TermMonoid, TermOrdering};
    use pgb_rings::{CoeffField, PrimeField};

    const P: u64 = 101;

    fn ordering() -> impl Strategy<Value = TermOrdering> {
        prop_oneof![
            Just(TermOrdering::Lex),
            Just(TermOrdering::DegLex),
            Just(TermOrdering::DegRevLex),
        ]
    }

    // Raw monomials in two indeterminates; repeated terms are merged later
    fn raw_monomials() -> impl Strategy<Value = Vec<(i64, Vec<Exponent>)>> {
        proptest::collection::vec(
            (-500i64..500, proptest::collection::vec(0u16..5, 2)),
            1..8,
        )
    }

    fn build<'m>(
        monoid: &'m TermMonoid,
        field: &PrimeField,
        raw: &[(i64, Vec<Exponent>)],
    ) -> Polynomial<'m, i64> {
        let monomials = raw
            .iter()
            .map(|(c, e)| (*c, monoid.create_element(e).unwrap()))
            .collect();
        Polynomial::from_monomials_purified(monomials, field).unwrap()
    }

    proptest! {
        #[test]
        fn order_is_descending(o in ordering(), raw in raw_monomials()) {
            let monoid = TermMonoid::new(2);
            let field = PrimeField::new(P).unwrap();
            let mut p = build(&monoid, &field, &raw);
            p.order(o);
            for w in p.terms().windows(2) {
                prop_assert_eq!(o.compare(w[0], w[1]), std::cmp::Ordering::Greater);
            }
        }

        #[test]
        fn mul_keeps_order(
            o in ordering(),
            raw in raw_monomials(),
            t in proptest::collection::vec(0u16..4, 2)
        ) {
            let monoid = TermMonoid::new(2);
            let field = PrimeField::new(P).unwrap();
            let mut p = build(&monoid, &field, &raw);
            p.order(o);
            let product = p.mul(monoid.create_element(&t).unwrap()).unwrap();

            let mut resorted = product.clone();
            resorted.order(o);
            prop_assert_eq!(resorted, product);
        }

        #[test]
        fn normalize_makes_monic(o in ordering(), raw in raw_monomials()) {
            let monoid = TermMonoid::new(2);
            let field = PrimeField::new(P).unwrap();
            let mut p = build(&monoid, &field, &raw);
            prop_assume!(!p.is_empty());
            p.order(o);

            let before = p.coeffs().to_vec();
            let inv = field.inv(&before[0]).unwrap();
            p.normalize(&field).unwrap();

            prop_assert_eq!(p.leading_coefficient().unwrap(), &field.one());
            for (new, old) in p.coeffs().iter().zip(&before) {
                prop_assert_eq!(*new, field.mul(old, &inv));
            }
        }
    }
}
