//! The coefficient field contract.
//!
//! Fields are values rather than types: the characteristic is chosen at run
//! time and every operation takes the field explicitly. There is no global
//! "current field".

use std::fmt::{Debug, Display};
use std::hash::Hash;

use num_traits::Zero;

use crate::error::Result;

/// A field whose elements are stored as plain coefficients.
///
/// Arithmetic methods expect canonical representatives, i.e. values returned
/// by [`CoeffField::bring_in`] or by other field operations. The field's zero
/// must coincide with `Self::Coeff::zero()`, which is what lets polynomials
/// test for zero without a field at hand.
pub trait CoeffField: Debug + Send + Sync {
    /// Coefficient representation.
    type Coeff: Clone + Eq + Hash + Debug + Display + Zero + Send + Sync;

    /// The characteristic.
    fn characteristic(&self) -> u64;

    /// The additive identity.
    fn zero(&self) -> Self::Coeff {
        Self::Coeff::zero()
    }

    /// The multiplicative identity.
    fn one(&self) -> Self::Coeff;

    /// Returns true if `a` is the additive identity.
    fn is_zero(&self, a: &Self::Coeff) -> bool {
        a.is_zero()
    }

    /// `a + b`.
    fn add(&self, a: &Self::Coeff, b: &Self::Coeff) -> Self::Coeff;

    /// `a - b`.
    fn sub(&self, a: &Self::Coeff, b: &Self::Coeff) -> Self::Coeff;

    /// `a * b`.
    fn mul(&self, a: &Self::Coeff, b: &Self::Coeff) -> Self::Coeff;

    /// `-a`.
    fn neg(&self, a: &Self::Coeff) -> Self::Coeff {
        self.sub(&self.zero(), a)
    }

    /// Multiplicative inverse; fails for zero.
    fn inv(&self, a: &Self::Coeff) -> Result<Self::Coeff>;

    /// Maps a raw value to its canonical representative.
    fn bring_in(&self, raw: &Self::Coeff) -> Result<Self::Coeff>;

    /// Returns true if `a` already is a canonical representative.
    fn contains(&self, a: &Self::Coeff) -> bool;
}
