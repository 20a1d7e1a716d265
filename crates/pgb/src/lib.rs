//! # pgb
//!
//! Algebraic core of a parallel F4-style Gröbner basis engine.
//!
//! The layers, leaf-first:
//!
//! - **Terms** (`pgb-core`): hash-consed monomials, term handles, orderings
//! - **Rings** (`pgb-rings`): the coefficient field contract, prime fields
//! - **Polynomials** (`pgb-poly`): ordering, normalization, term multiplication
//! - **F4** (`pgb-f4`): the simplify cache and run configuration
//!
//! ## Quick Start
//!
//! ```rust
//! use pgb::prelude::*;
//!
//! let config = F4Config::default().with_characteristic(7);
//! let field = config.field().unwrap();
//! let monoid = TermMonoid::new(2);
//!
//! let x = monoid.variable(0).unwrap();
//! let y = monoid.variable(1).unwrap();
//! let mut f = Polynomial::from_monomials(vec![(3i64, x.mul(x).unwrap()), (1, y)]);
//! config.prepare(&field, &mut f).unwrap();
//! assert_eq!(f.to_string(), "x[1]^2 + 5*x[2]");
//!
//! let cache = SimplifyCache::new();
//! cache.insert(y, &f, f.mul(y).unwrap());
//! assert!(cache.search(y, &f).is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use pgb_core as core;
pub use pgb_f4 as f4;
pub use pgb_poly as poly;
pub use pgb_rings as rings;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use pgb_core::{Term, TermComparator, TermError, TermMonoid, TermOrdering};
    pub use pgb_f4::{F4Config, SimplifyCache};
    pub use pgb_poly::{Monomial, PolyError, Polynomial, PolynomialComparator};
    pub use pgb_rings::{CoeffField, FieldError, PrimeField};
}
