//! Term orderings.
//!
//! The family is closed: lexicographic, degree-lexicographic and degree
//! reverse lexicographic. All three are total orders compatible with
//! multiplication, i.e. `a < b` implies `a*c < b*c`.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{Result, TermError};
use crate::exponent::CanonicalMonomial;
use crate::term::Term;

/// A term ordering, selected once per computation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum TermOrdering {
    /// Lexicographic order.
    ///
    /// The first differing exponent, scanning from `x[1]`, decides.
    #[serde(alias = "lex")]
    Lex,

    /// Degree lexicographic order.
    ///
    /// Total degree first, ties broken by [`TermOrdering::Lex`].
    #[serde(alias = "deglex")]
    DegLex,

    /// Degree reverse lexicographic order.
    ///
    /// Total degree first; ties are broken at the last differing exponent,
    /// where the smaller exponent ranks higher.
    #[default]
    #[serde(alias = "degrevlex")]
    DegRevLex,
}

impl TermOrdering {
    /// All orderings.
    pub const ALL: [Self; 3] = [Self::Lex, Self::DegLex, Self::DegRevLex];

    /// Compares two terms of the same monoid.
    ///
    /// # Panics
    ///
    /// Panics if the terms belong to different monoids. Use
    /// [`try_compare`](Self::try_compare) when that is not known in advance.
    #[must_use]
    pub fn compare(&self, a: Term<'_>, b: Term<'_>) -> Ordering {
        assert!(
            std::ptr::eq(a.monoid(), b.monoid()),
            "comparing terms of different monoids"
        );
        self.compare_unchecked(a, b)
    }

    /// Compares two terms, failing if they belong to different monoids.
    pub fn try_compare(&self, a: Term<'_>, b: Term<'_>) -> Result<Ordering> {
        if !std::ptr::eq(a.monoid(), b.monoid()) {
            return Err(TermError::MonoidMismatch);
        }
        Ok(self.compare_unchecked(a, b))
    }

    fn compare_unchecked(&self, a: Term<'_>, b: Term<'_>) -> Ordering {
        if a == b {
            return Ordering::Equal;
        }
        a.monoid()
            .with_pair(a.id(), b.id(), |x, y| self.compare_canonical(x, y))
    }

    /// Compares two canonical monomials.
    #[must_use]
    pub fn compare_canonical(&self, a: &CanonicalMonomial, b: &CanonicalMonomial) -> Ordering {
        match self {
            TermOrdering::Lex => cmp_lex(a, b),
            TermOrdering::DegLex => a.degree().cmp(&b.degree()).then_with(|| cmp_lex(a, b)),
            TermOrdering::DegRevLex => a
                .degree()
                .cmp(&b.degree())
                .then_with(|| cmp_revlex(a, b)),
        }
    }

    /// Stable name, used for configuration and diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            TermOrdering::Lex => "Lex",
            TermOrdering::DegLex => "DegLex",
            TermOrdering::DegRevLex => "DegRevLex",
        }
    }
}

fn cmp_lex(a: &CanonicalMonomial, b: &CanonicalMonomial) -> Ordering {
    a.exponents().cmp(b.exponents())
}

fn cmp_revlex(a: &CanonicalMonomial, b: &CanonicalMonomial) -> Ordering {
    for (x, y) in a.exponents().iter().zip(b.exponents()).rev() {
        match y.cmp(x) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}

impl fmt::Display for TermOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// An unrecognized ordering name.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown term ordering `{0}`")]
pub struct ParseOrderingError(pub String);

impl FromStr for TermOrdering {
    type Err = ParseOrderingError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        TermOrdering::ALL
            .into_iter()
            .find(|o| o.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseOrderingError(s.to_string()))
    }
}

/// A "less than" predicate over terms, optionally inverted.
#[derive(Clone, Copy, Debug)]
pub struct TermComparator {
    /// The ordering used for the comparison.
    pub ordering: TermOrdering,
    /// Compare with "greater than" instead.
    pub greater: bool,
}

impl TermComparator {
    /// Creates a comparator.
    #[must_use]
    pub fn new(ordering: TermOrdering, greater: bool) -> Self {
        Self { ordering, greater }
    }

    /// Returns true if `a` sorts before `b`.
    #[must_use]
    pub fn less(&self, a: Term<'_>, b: Term<'_>) -> bool {
        self.compare(a, b) == Ordering::Less
    }

    /// Three-way comparison in the comparator's direction, for `sort_by`.
    #[must_use]
    pub fn compare(&self, a: Term<'_>, b: Term<'_>) -> Ordering {
        if self.greater {
            self.ordering.compare(b, a)
        } else {
            self.ordering.compare(a, b)
        }
    }
}
