//! # pgb-rings
//!
//! Coefficient fields for the parallel Gröbner basis engine.
//!
//! This crate provides:
//! - The `CoeffField` contract consumed by the polynomial layer
//! - `PrimeField`, the field Z/pZ with a characteristic chosen at run time

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod prime_field;
pub mod traits;

pub use error::{FieldError, Result};
pub use prime_field::PrimeField;
pub use traits::CoeffField;
