//! # pgb-poly
//!
//! Polynomials for the parallel Gröbner basis engine.
//!
//! This crate provides:
//! - `Polynomial`, parallel coefficient/term sequences with a sugar degree
//! - Field normalization and coefficient reduction through `CoeffField`
//! - Leading-term comparators for polynomials and monomials
//!
//! Polynomials are mutated by one owner at a time; sharing happens through
//! the term monoid and the simplify cache, not through a polynomial.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod comparator;
pub mod error;
pub mod polynomial;

#[cfg(test)]
mod proptests;

pub use comparator::{MonomialComparator, PolynomialComparator};
pub use error::{PolyError, Result};
pub use polynomial::{display_list, Monomial, Polynomial};
