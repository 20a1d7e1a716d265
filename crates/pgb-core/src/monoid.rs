//! The term monoid: canonical storage for all monomials of one computation.
//!
//! Every exponent vector is interned exactly once. Terms are 32-bit indices
//! into the monoid's table, so equality and hashing of terms never look at
//! exponents. The table only grows; it is released together with the monoid.

use std::hash::BuildHasherDefault;
use std::time::{Duration, Instant};

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;
use parking_lot::RwLock;
use rayon::prelude::*;
use rustc_hash::FxHasher;
use smallvec::smallvec;
use tracing::{debug, trace};

use crate::error::{Result, TermError};
use crate::exponent::{self, CanonicalMonomial, Exponent, ExponentVector};
use crate::term::{Term, TermId};

type FxBuild = BuildHasherDefault<FxHasher>;

/// Interning table shared by all callers of one monoid.
#[derive(Debug, Default)]
struct Registry {
    /// Canonical monomials, indexed by [`TermId`].
    monomials: Vec<CanonicalMonomial>,
    /// Maps content to the index of its canonical representative.
    index: HashMap<CanonicalMonomial, TermId, FxBuild>,
}

/// Owner of all canonical monomials in a fixed number of indeterminates.
///
/// `create_element` may be called concurrently from any number of threads;
/// equal exponent vectors always resolve to the same [`Term`]. Racing inserts
/// of one vector are collapsed under the write lock: the first writer wins and
/// every other caller observes its entry.
#[derive(Debug)]
pub struct TermMonoid {
    arity: usize,
    registry: RwLock<Registry>,
}

/// Result of [`TermMonoid::mul_all_terms`].
#[derive(Clone, Debug)]
pub struct MulAllTerms<'m> {
    /// Products in the order of the input terms.
    pub terms: Vec<Term<'m>>,
    /// Wall time spent on the multiplication.
    pub elapsed: Duration,
}

impl TermMonoid {
    /// Creates a monoid over `arity` indeterminates.
    ///
    /// The identity term is interned up front and always has index 0.
    #[must_use]
    pub fn new(arity: usize) -> Self {
        let one = CanonicalMonomial::new(smallvec![0; arity]);
        let mut registry = Registry::default();
        registry.index.insert(one.clone(), TermId::ONE);
        registry.monomials.push(one);
        Self {
            arity,
            registry: RwLock::new(registry),
        }
    }

    /// Number of indeterminates.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.arity
    }

    /// Number of canonical monomials interned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.registry.read().monomials.len()
    }

    /// Always false: the identity is interned on construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.registry.read().monomials.is_empty()
    }

    /// Returns the canonical term for `exponents`, interning it if needed.
    pub fn create_element(&self, exponents: &[Exponent]) -> Result<Term<'_>> {
        if exponents.len() != self.arity {
            return Err(TermError::ArityMismatch {
                expected: self.arity,
                found: exponents.len(),
            });
        }
        self.intern(ExponentVector::from_slice(exponents))
    }

    /// The multiplicative identity (all exponents zero).
    #[must_use]
    pub fn one(&self) -> Term<'_> {
        Term::new(self, TermId::ONE)
    }

    /// The term `x_index`.
    pub fn variable(&self, index: usize) -> Result<Term<'_>> {
        self.check_index(index)?;
        let mut exponents: ExponentVector = smallvec![0; self.arity];
        exponents[index] = 1;
        self.intern(exponents)
    }

    /// Product of two terms.
    pub fn mul<'m>(&'m self, a: Term<'m>, b: Term<'m>) -> Result<Term<'m>> {
        self.check_owner(a)?;
        self.check_owner(b)?;
        if b.id() == TermId::ONE {
            return Ok(a);
        }
        if a.id() == TermId::ONE {
            return Ok(b);
        }
        let product = self.with_pair(a.id(), b.id(), |x, y| {
            exponent::mul(x.exponents(), y.exponents())
        })?;
        self.intern(product)
    }

    /// Quotient `a / b`; fails unless `b` divides `a`.
    pub fn div<'m>(&'m self, a: Term<'m>, b: Term<'m>) -> Result<Term<'m>> {
        self.check_owner(a)?;
        self.check_owner(b)?;
        if b.id() == TermId::ONE {
            return Ok(a);
        }
        let quotient = self.with_pair(a.id(), b.id(), |x, y| {
            exponent::div(x.exponents(), y.exponents())
        })?;
        self.intern(quotient)
    }

    /// Least common multiple (componentwise maximum).
    pub fn lcm<'m>(&'m self, a: Term<'m>, b: Term<'m>) -> Result<Term<'m>> {
        self.check_owner(a)?;
        self.check_owner(b)?;
        if a == b {
            return Ok(a);
        }
        let lcm = self.with_pair(a.id(), b.id(), |x, y| {
            exponent::lcm(x.exponents(), y.exponents())
        });
        self.intern(lcm)
    }

    /// Greatest common divisor (componentwise minimum).
    pub fn gcd<'m>(&'m self, a: Term<'m>, b: Term<'m>) -> Result<Term<'m>> {
        self.check_owner(a)?;
        self.check_owner(b)?;
        if a == b {
            return Ok(a);
        }
        let gcd = self.with_pair(a.id(), b.id(), |x, y| {
            exponent::gcd(x.exponents(), y.exponents())
        });
        self.intern(gcd)
    }

    /// Returns true if `b` divides `a`.
    pub fn is_divisible(&self, a: Term<'_>, b: Term<'_>) -> Result<bool> {
        self.check_owner(a)?;
        self.check_owner(b)?;
        if a == b || b.id() == TermId::ONE {
            return Ok(true);
        }
        Ok(self.with_pair(a.id(), b.id(), |x, y| {
            y.degree() <= x.degree() && exponent::divides(y.exponents(), x.exponents())
        }))
    }

    /// `t * x_index`.
    pub fn increment<'m>(&'m self, t: Term<'m>, index: usize) -> Result<Term<'m>> {
        self.check_owner(t)?;
        self.check_index(index)?;
        let mut exponents = self.exponents_of(t.id());
        exponents[index] = exponents[index]
            .checked_add(1)
            .ok_or(TermError::ExponentOverflow { index })?;
        self.intern(exponents)
    }

    /// `t / x_index`; fails if `x_index` does not divide `t`.
    pub fn decrement<'m>(&'m self, t: Term<'m>, index: usize) -> Result<Term<'m>> {
        self.check_owner(t)?;
        self.check_index(index)?;
        let mut exponents = self.exponents_of(t.id());
        exponents[index] = exponents[index]
            .checked_sub(1)
            .ok_or(TermError::NegativeExponent { index })?;
        self.intern(exponents)
    }

    /// Multiplies every term of `terms` by `factor` in parallel.
    ///
    /// The input is split into at most `workers` contiguous partitions that
    /// are processed independently on the rayon pool. Products come back in
    /// input order. A worker count of zero is treated as one.
    pub fn mul_all_terms<'m>(
        &'m self,
        terms: &[Term<'m>],
        factor: Term<'m>,
        workers: usize,
    ) -> Result<MulAllTerms<'m>> {
        self.check_owner(factor)?;
        let start = Instant::now();

        let workers = workers.max(1);
        let chunk = terms.len().div_ceil(workers).max(1);
        let partitions: Vec<Vec<Term<'m>>> = terms
            .par_chunks(chunk)
            .map(|part| {
                part.iter()
                    .map(|&t| self.mul(t, factor))
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<_>>()?;

        let products: Vec<Term<'m>> = partitions.into_iter().flatten().collect();
        let elapsed = start.elapsed();
        debug!(
            terms = products.len(),
            workers,
            elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX),
            "multiplied term list"
        );

        Ok(MulAllTerms {
            terms: products,
            elapsed,
        })
    }

    /// Runs `f` on the canonical monomial behind `id`.
    pub(crate) fn with_monomial<R>(&self, id: TermId, f: impl FnOnce(&CanonicalMonomial) -> R) -> R {
        let registry = self.registry.read();
        f(&registry.monomials[id.index()])
    }

    /// Runs `f` on two canonical monomials under a single read lock.
    pub(crate) fn with_pair<R>(
        &self,
        a: TermId,
        b: TermId,
        f: impl FnOnce(&CanonicalMonomial, &CanonicalMonomial) -> R,
    ) -> R {
        let registry = self.registry.read();
        f(&registry.monomials[a.index()], &registry.monomials[b.index()])
    }

    pub(crate) fn exponents_of(&self, id: TermId) -> ExponentVector {
        self.with_monomial(id, |m| ExponentVector::from_slice(m.exponents()))
    }

    fn check_owner(&self, t: Term<'_>) -> Result<()> {
        if std::ptr::eq(t.monoid(), self) {
            Ok(())
        } else {
            Err(TermError::MonoidMismatch)
        }
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.arity {
            Ok(())
        } else {
            Err(TermError::IndexOutOfRange {
                index,
                arity: self.arity,
            })
        }
    }

    /// Looks up or inserts the canonical monomial for `exponents`.
    fn intern(&self, exponents: ExponentVector) -> Result<Term<'_>> {
        debug_assert_eq!(exponents.len(), self.arity);
        let candidate = CanonicalMonomial::new(exponents);

        if let Some(&id) = self.registry.read().index.get(&candidate) {
            return Ok(Term::new(self, id));
        }

        let mut guard = self.registry.write();
        let Registry { monomials, index } = &mut *guard;
        let id = match index.entry(candidate) {
            // Another thread interned it between our read and write lock.
            Entry::Occupied(entry) => *entry.get(),
            Entry::Vacant(entry) => {
                let slot = monomials.len();
                let id = next_id(slot)?;
                monomials.push(entry.key().clone());
                trace!(id = slot, degree = entry.key().degree(), "interned monomial");
                *entry.insert(id)
            }
        };
        Ok(Term::new(self, id))
    }
}

/// The id for table slot `slot`, if it still fits into a [`TermId`].
fn next_id(slot: usize) -> Result<TermId> {
    u32::try_from(slot)
        .map(TermId::new)
        .map_err(|_| TermError::CapacityExceeded)
}
