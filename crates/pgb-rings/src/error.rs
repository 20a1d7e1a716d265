//! Errors raised by coefficient fields.

use thiserror::Error;

/// A coefficient that a field cannot represent or operate on.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FieldError {
    /// A raw value has no representative in the field.
    #[error("coefficient {value} is not representable in a field of characteristic {characteristic}")]
    CoefficientOutOfField {
        /// The raw value, rendered.
        value: String,
        /// Characteristic of the field.
        characteristic: u64,
    },

    /// The requested characteristic does not define a supported field.
    #[error("invalid field characteristic {0}")]
    InvalidCharacteristic(u64),

    /// The element has no multiplicative inverse.
    #[error("{0} is not invertible")]
    NotInvertible(String),
}

/// Result alias for field operations.
pub type Result<T> = std::result::Result<T, FieldError>;
