//! Errors raised by polynomial operations.

use pgb_core::TermError;
use pgb_rings::FieldError;
use thiserror::Error;

/// Errors that can occur while manipulating polynomials.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// A term operation failed, e.g. terms of different monoids were combined.
    #[error("invalid term operation: {0}")]
    InvalidTermOperation(#[from] TermError),

    /// The operation is not defined for the polynomial in its current state.
    #[error("undefined operation: {0}")]
    UndefinedOperation(&'static str),

    /// The coefficient field rejected a coefficient.
    #[error(transparent)]
    CoefficientOutOfField(#[from] FieldError),
}

/// Result alias for polynomial operations.
pub type Result<T> = std::result::Result<T, PolyError>;
