//! Errors raised by term arithmetic.

use thiserror::Error;

/// An invalid operation on terms.
///
/// Every variant is a precondition violation detected before any canonical
/// state is touched, so the owning monoid stays consistent after an error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum TermError {
    /// The operands belong to different term monoids.
    #[error("terms belong to different monoids")]
    MonoidMismatch,

    /// Division would produce a negative exponent.
    #[error("division leaves a negative exponent for indeterminate {index}")]
    NegativeExponent {
        /// The offending indeterminate.
        index: usize,
    },

    /// An exponent no longer fits into [`Exponent`](crate::Exponent).
    #[error("exponent of indeterminate {index} overflows")]
    ExponentOverflow {
        /// The offending indeterminate.
        index: usize,
    },

    /// An exponent vector of the wrong length was handed to a monoid.
    #[error("expected {expected} exponents, found {found}")]
    ArityMismatch {
        /// Number of indeterminates of the monoid.
        expected: usize,
        /// Length of the supplied vector.
        found: usize,
    },

    /// An indeterminate index past the end of the exponent vector.
    #[error("indeterminate {index} is out of range for {arity} indeterminates")]
    IndexOutOfRange {
        /// The requested indeterminate.
        index: usize,
        /// Number of indeterminates of the monoid.
        arity: usize,
    },

    /// The monoid already holds as many monomials as a term id can address.
    #[error("term monoid capacity exceeded")]
    CapacityExceeded,
}

/// Result alias for term operations.
pub type Result<T> = std::result::Result<T, TermError>;
