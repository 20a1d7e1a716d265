//! Exponent vectors and their canonical, interned form.
//!
//! The arithmetic here works on raw exponent slices. Results are plain
//! vectors which the monoid then routes through its registry, so nothing in
//! this module ever hands out a canonical monomial directly.

use std::hash::{BuildHasher, BuildHasherDefault, Hash, Hasher};

use rustc_hash::FxHasher;
use smallvec::SmallVec;

use crate::error::{Result, TermError};

/// Exponent of a single indeterminate.
pub type Exponent = u16;

/// Total degree of a term; wide enough for any sum of exponents.
pub type Degree = u32;

/// Per-indeterminate exponents of one monomial.
///
/// Inline storage covers the common case of a handful of indeterminates.
pub type ExponentVector = SmallVec<[Exponent; 8]>;

/// Sum of all exponents.
#[must_use]
pub fn degree_of(exps: &[Exponent]) -> Degree {
    exps.iter().map(|&e| Degree::from(e)).sum()
}

/// Content hash of an exponent vector.
///
/// Deterministic across runs and threads, so equal vectors always hash to
/// the same value no matter which monoid computes it.
#[must_use]
pub fn hash_of(exps: &[Exponent]) -> u64 {
    let mut hasher = BuildHasherDefault::<FxHasher>::default().build_hasher();
    exps.hash(&mut hasher);
    hasher.finish()
}

/// Componentwise sum.
pub fn mul(a: &[Exponent], b: &[Exponent]) -> Result<ExponentVector> {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .enumerate()
        .map(|(index, (&x, &y))| {
            x.checked_add(y)
                .ok_or(TermError::ExponentOverflow { index })
        })
        .collect()
}

/// Componentwise difference; requires `a >= b` in every component.
pub fn div(a: &[Exponent], b: &[Exponent]) -> Result<ExponentVector> {
    debug_assert_eq!(a.len(), b.len());
    a.iter()
        .zip(b)
        .enumerate()
        .map(|(index, (&x, &y))| {
            x.checked_sub(y)
                .ok_or(TermError::NegativeExponent { index })
        })
        .collect()
}

/// Componentwise maximum.
#[must_use]
pub fn lcm(a: &[Exponent], b: &[Exponent]) -> ExponentVector {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| x.max(y)).collect()
}

/// Componentwise minimum.
#[must_use]
pub fn gcd(a: &[Exponent], b: &[Exponent]) -> ExponentVector {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).map(|(&x, &y)| x.min(y)).collect()
}

/// Returns true if `b` divides `a`, i.e. `a >= b` componentwise.
#[must_use]
pub fn divides(b: &[Exponent], a: &[Exponent]) -> bool {
    debug_assert_eq!(a.len(), b.len());
    a.iter().zip(b).all(|(&x, &y)| x >= y)
}

/// An exponent vector together with its precomputed degree and hash.
///
/// Owned by exactly one [`TermMonoid`](crate::TermMonoid) and never mutated
/// after it has been interned.
#[derive(Clone, Debug)]
pub struct CanonicalMonomial {
    exponents: ExponentVector,
    degree: Degree,
    hash: u64,
}

impl CanonicalMonomial {
    /// Wraps an exponent vector, computing its degree and hash.
    #[must_use]
    pub fn new(exponents: ExponentVector) -> Self {
        let degree = degree_of(&exponents);
        let hash = hash_of(&exponents);
        Self {
            exponents,
            degree,
            hash,
        }
    }

    /// The exponents.
    #[must_use]
    pub fn exponents(&self) -> &[Exponent] {
        &self.exponents
    }

    /// The total degree.
    #[must_use]
    pub fn degree(&self) -> Degree {
        self.degree
    }

    /// The content hash.
    #[must_use]
    pub fn content_hash(&self) -> u64 {
        self.hash
    }
}

// Equality and hashing go through the exponents only; the cached fields are
// functions of them. Hashing writes the precomputed value so registry lookups
// never rehash the vector.
impl PartialEq for CanonicalMonomial {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.exponents == other.exponents
    }
}

impl Eq for CanonicalMonomial {}

impl Hash for CanonicalMonomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn test_mul_and_div() {
        let a: ExponentVector = smallvec![1, 2, 0];
        let b: ExponentVector = smallvec![2, 0, 1];

        let product = mul(&a, &b).unwrap();
        assert_eq!(product.as_slice(), &[3, 2, 1]);
        assert_eq!(div(&product, &b).unwrap(), a);

        // x can't be divided by x^2
        assert_eq!(
            div(&[1, 0, 0], &[2, 0, 0]),
            Err(TermError::NegativeExponent { index: 0 })
        );
    }

    #[test]
    fn test_overflow_is_reported() {
        assert_eq!(
            mul(&[0, Exponent::MAX], &[0, 1]),
            Err(TermError::ExponentOverflow { index: 1 })
        );
    }

    #[test]
    fn test_lcm_gcd_divides() {
        let a = [2, 1, 0];
        let b = [1, 3, 0];

        assert_eq!(lcm(&a, &b).as_slice(), &[2, 3, 0]);
        assert_eq!(gcd(&a, &b).as_slice(), &[1, 1, 0]);
        assert!(divides(&[1, 1, 0], &a));
        assert!(!divides(&b, &a));
    }

    #[test]
    fn test_canonical_monomial_caches() {
        let m = CanonicalMonomial::new(smallvec![3, 0, 4]);
        assert_eq!(m.degree(), 7);
        assert_eq!(m.content_hash(), hash_of(&[3, 0, 4]));
        assert_eq!(m, CanonicalMonomial::new(smallvec![3, 0, 4]));
        assert_ne!(m, CanonicalMonomial::new(smallvec![4, 0, 3]));
    }
}
