//! # pgb-core
//!
//! Term layer of the parallel Gröbner basis engine.
//!
//! This crate provides:
//! - A term monoid that hash-conses exponent vectors, safe for concurrent use
//! - `Copy` term handles with O(1) identity equality and hashing
//! - The Lex, DegLex and DegRevLex term orderings
//!
//! ## Design Principles
//!
//! - **Arena storage**: canonical monomials live in one table per monoid and are
//!   released with it
//! - **Hash-consing**: every exponent vector is stored exactly once
//! - **Index handles**: terms are 32-bit indices plus a monoid reference

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod exponent;
pub mod monoid;
pub mod ordering;
pub mod term;

#[cfg(test)]
mod proptests;

pub use error::{Result, TermError};
pub use exponent::{CanonicalMonomial, Degree, Exponent, ExponentVector};
pub use monoid::{MulAllTerms, TermMonoid};
pub use ordering::{ParseOrderingError, TermComparator, TermOrdering};
pub use term::{Term, TermId};
