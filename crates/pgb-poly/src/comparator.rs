//! Comparators over polynomials and monomials.
//!
//! Both compare by term only. Two polynomials with the same leading term are
//! "equal" to [`PolynomialComparator`] even when their tails differ, so it is
//! a proxy for selecting and sorting, not a total order on polynomials.

use std::cmp::Ordering;

use pgb_core::TermOrdering;

use crate::error::Result;
use crate::polynomial::{Monomial, Polynomial};

/// Compares polynomials by their leading terms.
#[derive(Clone, Copy, Debug)]
pub struct PolynomialComparator {
    /// The ordering used for the comparison.
    pub ordering: TermOrdering,
    /// Compare with "greater than" instead.
    pub greater: bool,
}

impl PolynomialComparator {
    /// Creates a comparator.
    #[must_use]
    pub fn new(ordering: TermOrdering, greater: bool) -> Self {
        Self { ordering, greater }
    }

    /// Three-way comparison of the leading terms, in the comparator's
    /// direction. Both polynomials must be non-empty and ordered.
    pub fn compare<C: Clone>(&self, a: &Polynomial<'_, C>, b: &Polynomial<'_, C>) -> Result<Ordering> {
        let (lhs, rhs) = (a.leading_term()?, b.leading_term()?);
        Ok(if self.greater {
            self.ordering.compare(rhs, lhs)
        } else {
            self.ordering.compare(lhs, rhs)
        })
    }

    /// Returns true if `a` sorts before `b`.
    pub fn less<C: Clone>(&self, a: &Polynomial<'_, C>, b: &Polynomial<'_, C>) -> Result<bool> {
        Ok(self.compare(a, b)? == Ordering::Less)
    }

    /// Sorts `polys` by leading term.
    ///
    /// Every polynomial is checked up front, so on error the slice is left
    /// untouched.
    pub fn sort<C: Clone>(&self, polys: &mut [Polynomial<'_, C>]) -> Result<()> {
        for p in polys.iter() {
            p.leading_term()?;
        }
        polys.sort_by(|a, b| self.compare(a, b).unwrap_or(Ordering::Equal));
        Ok(())
    }
}

/// Compares monomials by their terms.
#[derive(Clone, Copy, Debug)]
pub struct MonomialComparator {
    /// The ordering used for the comparison.
    pub ordering: TermOrdering,
}

impl MonomialComparator {
    /// Creates a comparator.
    #[must_use]
    pub fn new(ordering: TermOrdering) -> Self {
        Self { ordering }
    }

    /// Three-way comparison of the terms.
    #[must_use]
    pub fn compare<C>(&self, a: &Monomial<'_, C>, b: &Monomial<'_, C>) -> Ordering {
        self.ordering.compare(a.1, b.1)
    }

    /// Returns true if the term of `a` is smaller than the term of `b`.
    #[must_use]
    pub fn less<C>(&self, a: &Monomial<'_, C>, b: &Monomial<'_, C>) -> bool {
        self.compare(a, b) == Ordering::Less
    }
}
