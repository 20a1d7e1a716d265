//! Memoized simplifications of `t * f`.
//!
//! During matrix construction the same product of a term and a basis
//! polynomial is reduced over and over. The cache records the reduced result
//! once, keyed first by the polynomial and then by the multiplying term.
//! Nothing is evicted; the cache lives for one basis computation.

use std::hash::Hash;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use pgb_core::Term;
use pgb_poly::Polynomial;
use rustc_hash::FxHashMap;
use tracing::{debug, trace};

/// Simplifications recorded for one base polynomial, by multiplier.
type Multiples<'m, C> = RwLock<FxHashMap<Term<'m>, Polynomial<'m, C>>>;

/// Hit/miss counters and sizes of a [`SimplifyCache`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Searches that found a recorded simplification.
    pub hits: usize,
    /// Searches that found nothing.
    pub misses: usize,
    /// Number of distinct base polynomials.
    pub bases: usize,
    /// Number of recorded simplifications.
    pub entries: usize,
}

/// A concurrent two-level map `(f, t) -> simplification of t * f`.
///
/// Both [`search`](Self::search) and [`insert`](Self::insert) take `&self`
/// and may run on any number of threads. When several threads record the same
/// key, the first one wins and later values are dropped; all of them are
/// equal as polynomials, so which one survives does not matter.
pub struct SimplifyCache<'m, C> {
    bases: RwLock<FxHashMap<Polynomial<'m, C>, Arc<Multiples<'m, C>>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl<'m, C: Clone + Eq + Hash> SimplifyCache<'m, C> {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bases: RwLock::new(FxHashMap::default()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }

    /// Returns the recorded simplification of `t * f`, if any.
    ///
    /// A miss is a normal outcome and is distinct from a recorded zero
    /// polynomial.
    pub fn search(&self, t: Term<'m>, f: &Polynomial<'m, C>) -> Option<Polynomial<'m, C>> {
        let found = self
            .multiples(f)
            .and_then(|multiples| multiples.read().get(&t).cloned());

        let counter = if found.is_some() { &self.hits } else { &self.misses };
        counter.fetch_add(1, Ordering::Relaxed);
        found
    }

    /// Records that `t * f` simplifies to `result`.
    ///
    /// Returns false if a simplification was already recorded for the key, in
    /// which case the existing one is kept.
    pub fn insert(&self, t: Term<'m>, f: &Polynomial<'m, C>, result: Polynomial<'m, C>) -> bool {
        let multiples = match self.multiples(f) {
            Some(multiples) => multiples,
            None => Arc::clone(
                self.bases
                    .write()
                    .entry(f.clone())
                    .or_insert_with(|| Arc::new(RwLock::new(FxHashMap::default()))),
            ),
        };

        let mut multiples = multiples.write();
        if multiples.contains_key(&t) {
            trace!(term = %t, "simplification already recorded");
            return false;
        }
        multiples.insert(t, result);
        true
    }

    /// Number of recorded simplifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bases
            .read()
            .values()
            .map(|multiples| multiples.read().len())
            .sum()
    }

    /// Returns true if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of distinct base polynomials.
    #[must_use]
    pub fn num_bases(&self) -> usize {
        self.bases.read().len()
    }

    /// Current counters and sizes.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let stats = CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            bases: self.num_bases(),
            entries: self.len(),
        };
        debug!(
            hits = stats.hits,
            misses = stats.misses,
            bases = stats.bases,
            entries = stats.entries,
            "simplify cache"
        );
        stats
    }

    fn multiples(&self, f: &Polynomial<'m, C>) -> Option<Arc<Multiples<'m, C>>> {
        self.bases.read().get(f).cloned()
    }
}

impl<C: Clone + Eq + Hash> Default for SimplifyCache<'_, C> {
    fn default() -> Self {
        Self::new()
    }
}
