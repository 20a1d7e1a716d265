//! Term handles.
//!
//! A [`Term`] is a monoid reference plus a 32-bit index into its canonical
//! table. It is `Copy`, and two terms are equal exactly when they are the
//! same canonical monomial of the same monoid.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::error::Result;
use crate::exponent::{Degree, Exponent, ExponentVector};
use crate::monoid::TermMonoid;

/// Index of a canonical monomial inside its monoid.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TermId(u32);

impl TermId {
    /// The identity term of every monoid.
    pub const ONE: Self = Self(0);

    /// Creates an id from a raw index.
    ///
    /// This is primarily for internal use by the monoid.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for TermId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A canonical monomial, referenced through its owning [`TermMonoid`].
///
/// Binary operations require both operands to come from the same monoid and
/// report [`TermError::MonoidMismatch`](crate::TermError::MonoidMismatch)
/// otherwise.
#[derive(Clone, Copy)]
pub struct Term<'m> {
    monoid: &'m TermMonoid,
    id: TermId,
}

impl<'m> Term<'m> {
    pub(crate) fn new(monoid: &'m TermMonoid, id: TermId) -> Self {
        Self { monoid, id }
    }

    /// The owning monoid.
    #[must_use]
    pub fn monoid(self) -> &'m TermMonoid {
        self.monoid
    }

    /// The canonical index.
    #[must_use]
    pub fn id(self) -> TermId {
        self.id
    }

    /// Number of indeterminates.
    #[must_use]
    pub fn arity(self) -> usize {
        self.monoid.arity()
    }

    /// Exponent of indeterminate `index`, or `None` past the end.
    #[must_use]
    pub fn exponent(self, index: usize) -> Option<Exponent> {
        self.monoid
            .with_monomial(self.id, |m| m.exponents().get(index).copied())
    }

    /// A copy of all exponents.
    #[must_use]
    pub fn exponents(self) -> ExponentVector {
        self.monoid.exponents_of(self.id)
    }

    /// Total degree.
    #[must_use]
    pub fn degree(self) -> Degree {
        self.monoid.with_monomial(self.id, |m| m.degree())
    }

    /// Content hash of the exponent vector.
    ///
    /// Unlike the `Hash` impl this does not depend on interning order.
    #[must_use]
    pub fn content_hash(self) -> u64 {
        self.monoid.with_monomial(self.id, |m| m.content_hash())
    }

    /// Returns true for the identity term.
    #[must_use]
    pub fn is_one(self) -> bool {
        self.id == TermId::ONE
    }

    /// Returns true if `other` divides `self`.
    pub fn is_divisible_by(self, other: Term<'_>) -> Result<bool> {
        self.monoid.is_divisible(self, other)
    }

    /// `self * other`.
    pub fn mul(self, other: Term<'m>) -> Result<Term<'m>> {
        self.monoid.mul(self, other)
    }

    /// `self / other`.
    pub fn div(self, other: Term<'m>) -> Result<Term<'m>> {
        self.monoid.div(self, other)
    }

    /// Least common multiple.
    pub fn lcm(self, other: Term<'m>) -> Result<Term<'m>> {
        self.monoid.lcm(self, other)
    }

    /// Greatest common divisor.
    pub fn gcd(self, other: Term<'m>) -> Result<Term<'m>> {
        self.monoid.gcd(self, other)
    }

    /// `self * x_index`.
    pub fn increment(self, index: usize) -> Result<Term<'m>> {
        self.monoid.increment(self, index)
    }

    /// `self / x_index`.
    pub fn decrement(self, index: usize) -> Result<Term<'m>> {
        self.monoid.decrement(self, index)
    }
}

impl PartialEq for Term<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && std::ptr::eq(self.monoid, other.monoid)
    }
}

impl Eq for Term<'_> {}

impl Hash for Term<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Display for Term<'_> {
    /// Renders `x[1]^2*x[3]`, with indeterminates counted from 1 and `1` for
    /// the identity.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let exponents = self.exponents();
        let mut first = true;
        for (i, &e) in exponents.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if !first {
                write!(f, "*")?;
            }
            first = false;
            if e == 1 {
                write!(f, "x[{}]", i + 1)?;
            } else {
                write!(f, "x[{}]^{}", i + 1, e)?;
            }
        }
        if first {
            write!(f, "1")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Term<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Term({:?}: {})", self.id, self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_size() {
        // A reference plus a 32-bit index.
        assert!(std::mem::size_of::<Term<'_>>() <= 16);
        assert_eq!(std::mem::size_of::<TermId>(), 4);
    }

    #[test]
    fn test_accessors() {
        let monoid = TermMonoid::new(3);
        let t = monoid.create_element(&[3, 0, 4]).unwrap();

        assert_eq!(t.exponent(0), Some(3));
        assert_eq!(t.exponent(2), Some(4));
        assert_eq!(t.exponent(3), None);
        assert_eq!(t.exponents().as_slice(), &[3, 0, 4]);
        assert_eq!(t.degree(), 7);
        assert_eq!(t.arity(), 3);
        assert!(!t.is_one());
    }

    #[test]
    fn test_division_inverts_multiplication() {
        let monoid = TermMonoid::new(3);
        let a = monoid.create_element(&[3, 2, 1]).unwrap();
        let b = monoid.create_element(&[1, 1, 0]).unwrap();

        assert!(a.is_divisible_by(b).unwrap());
        let q = a.div(b).unwrap();
        assert_eq!(q.exponents().as_slice(), &[2, 1, 1]);
        assert_eq!(q.mul(b).unwrap(), a);

        assert!(!b.is_divisible_by(a).unwrap());
        assert!(b.div(a).is_err());
    }

    #[test]
    fn test_lcm_and_gcd() {
        let monoid = TermMonoid::new(2);
        let a = monoid.create_element(&[2, 1]).unwrap();
        let b = monoid.create_element(&[1, 3]).unwrap();

        let lcm = a.lcm(b).unwrap();
        assert_eq!(lcm.exponents().as_slice(), &[2, 3]);
        assert!(lcm.is_divisible_by(a).unwrap());
        assert!(lcm.is_divisible_by(b).unwrap());

        assert_eq!(a.gcd(b).unwrap().exponents().as_slice(), &[1, 1]);
    }

    #[test]
    fn test_display() {
        let monoid = TermMonoid::new(3);
        assert_eq!(monoid.create_element(&[2, 0, 1]).unwrap().to_string(), "x[1]^2*x[3]");
        assert_eq!(monoid.create_element(&[0, 1, 0]).unwrap().to_string(), "x[2]");
        assert_eq!(monoid.one().to_string(), "1");
    }

    #[test]
    fn test_content_hash_is_interning_independent() {
        let m1 = TermMonoid::new(2);
        let m2 = TermMonoid::new(2);
        m2.create_element(&[9, 9]).unwrap();

        let a = m1.create_element(&[1, 2]).unwrap();
        let b = m2.create_element(&[1, 2]).unwrap();
        assert_eq!(a.content_hash(), b.content_hash());
        assert_ne!(a.id(), b.id());
    }
}
