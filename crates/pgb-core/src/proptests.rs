//! Property-based tests for term arithmetic and orderings.

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use proptest::prelude::*;

    use crate::exponent::Exponent;
    use crate::monoid::TermMonoid;
    use crate::ordering::TermOrdering;

    const ARITY: usize = 3;

    // Strategy for small exponent vectors in three indeterminates
    fn exponents() -> impl Strategy<Value = Vec<Exponent>> {
        proptest::collection::vec(0u16..6, ARITY)
    }

    fn ordering() -> impl Strategy<Value = TermOrdering> {
        prop_oneof![
            Just(TermOrdering::Lex),
            Just(TermOrdering::DegLex),
            Just(TermOrdering::DegRevLex),
        ]
    }

    proptest! {
        // Ordering axioms

        #[test]
        fn ordering_antisymmetric(o in ordering(), a in exponents(), b in exponents()) {
            let monoid = TermMonoid::new(ARITY);
            let a = monoid.create_element(&a).unwrap();
            let b = monoid.create_element(&b).unwrap();
            prop_assert_eq!(o.compare(a, b), o.compare(b, a).reverse());
        }

        #[test]
        fn ordering_equal_iff_identical(o in ordering(), a in exponents(), b in exponents()) {
            let monoid = TermMonoid::new(ARITY);
            let a = monoid.create_element(&a).unwrap();
            let b = monoid.create_element(&b).unwrap();
            prop_assert_eq!(o.compare(a, b) == Ordering::Equal, a == b);
        }

        #[test]
        fn ordering_transitive(
            o in ordering(),
            a in exponents(),
            b in exponents(),
            c in exponents()
        ) {
            let monoid = TermMonoid::new(ARITY);
            let mut terms = [
                monoid.create_element(&a).unwrap(),
                monoid.create_element(&b).unwrap(),
                monoid.create_element(&c).unwrap(),
            ];
            terms.sort_by(|&x, &y| o.compare(x, y));
            prop_assert_ne!(o.compare(terms[0], terms[1]), Ordering::Greater);
            prop_assert_ne!(o.compare(terms[1], terms[2]), Ordering::Greater);
            prop_assert_ne!(o.compare(terms[0], terms[2]), Ordering::Greater);
        }

        #[test]
        fn ordering_compatible_with_multiplication(
            o in ordering(),
            a in exponents(),
            b in exponents(),
            c in exponents()
        ) {
            let monoid = TermMonoid::new(ARITY);
            let a = monoid.create_element(&a).unwrap();
            let b = monoid.create_element(&b).unwrap();
            let c = monoid.create_element(&c).unwrap();
            prop_assert_eq!(
                o.compare(a, b),
                o.compare(a.mul(c).unwrap(), b.mul(c).unwrap())
            );
        }

        #[test]
        fn one_is_minimal(o in ordering(), a in exponents()) {
            let monoid = TermMonoid::new(ARITY);
            let a = monoid.create_element(&a).unwrap();
            prop_assert_ne!(o.compare(a, monoid.one()), Ordering::Less);
        }

        // Arithmetic

        #[test]
        fn division_inverts_multiplication(a in exponents(), b in exponents()) {
            let monoid = TermMonoid::new(ARITY);
            let a = monoid.create_element(&a).unwrap();
            let b = monoid.create_element(&b).unwrap();
            let ab = a.mul(b).unwrap();
            prop_assert!(ab.is_divisible_by(b).unwrap());
            prop_assert_eq!(ab.div(b).unwrap(), a);
            if a.is_divisible_by(b).unwrap() {
                prop_assert_eq!(a.div(b).unwrap().mul(b).unwrap(), a);
            } else {
                prop_assert!(a.div(b).is_err());
            }
        }

        #[test]
        fn lcm_is_componentwise_max(a in exponents(), b in exponents()) {
            let monoid = TermMonoid::new(ARITY);
            let ta = monoid.create_element(&a).unwrap();
            let tb = monoid.create_element(&b).unwrap();
            let lcm = ta.lcm(tb).unwrap();
            for i in 0..ARITY {
                prop_assert_eq!(lcm.exponent(i), Some(a[i].max(b[i])));
            }
            prop_assert!(lcm.is_divisible_by(ta).unwrap());
            prop_assert!(lcm.is_divisible_by(tb).unwrap());
            prop_assert_eq!(lcm.mul(ta.gcd(tb).unwrap()).unwrap(), ta.mul(tb).unwrap());
        }

        #[test]
        fn divisibility_is_componentwise(a in exponents(), b in exponents()) {
            let monoid = TermMonoid::new(ARITY);
            let ta = monoid.create_element(&a).unwrap();
            let tb = monoid.create_element(&b).unwrap();
            let expected = a.iter().zip(&b).all(|(x, y)| x >= y);
            prop_assert_eq!(ta.is_divisible_by(tb).unwrap(), expected);
        }
    }
}
