//! # pgb-f4
//!
//! Reduction-phase support for the F4-style basis computation.
//!
//! This crate provides:
//! - `SimplifyCache`, a concurrent memo of reduced `term * polynomial` products
//! - `F4Config`, the per-computation settings (ordering, field, workers)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod simplify;

pub use config::F4Config;
pub use simplify::{CacheStats, SimplifyCache};
