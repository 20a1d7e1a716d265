//! The prime field Z/pZ with a run-time characteristic.

use crate::error::{FieldError, Result};
use crate::traits::CoeffField;

/// Largest supported characteristic; keeps products of representatives
/// comfortably inside `i64`.
pub const MAX_CHARACTERISTIC: u64 = (1 << 31) - 1;

/// The field Z/pZ for a prime `p`.
///
/// Coefficients are `i64` and canonical representatives lie in `0..p`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct PrimeField {
    p: u64,
}

impl PrimeField {
    /// Creates the field of characteristic `p`.
    ///
    /// Fails unless `p` is a prime not exceeding [`MAX_CHARACTERISTIC`].
    pub fn new(p: u64) -> Result<Self> {
        if p > MAX_CHARACTERISTIC || !is_prime(p) {
            return Err(FieldError::InvalidCharacteristic(p));
        }
        Ok(Self { p })
    }

    fn modulus(&self) -> i64 {
        self.p as i64
    }

    fn reduce(&self, value: i128) -> i64 {
        // The result lies in 0..p, which fits in i64.
        value.rem_euclid(i128::from(self.modulus())) as i64
    }
}

fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut d = 3;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 2;
    }
    true
}

impl CoeffField for PrimeField {
    type Coeff = i64;

    fn characteristic(&self) -> u64 {
        self.p
    }

    fn one(&self) -> i64 {
        1
    }

    fn add(&self, a: &i64, b: &i64) -> i64 {
        self.reduce(i128::from(*a) + i128::from(*b))
    }

    fn sub(&self, a: &i64, b: &i64) -> i64 {
        self.reduce(i128::from(*a) - i128::from(*b))
    }

    fn mul(&self, a: &i64, b: &i64) -> i64 {
        self.reduce(i128::from(*a) * i128::from(*b))
    }

    fn inv(&self, a: &i64) -> Result<i64> {
        let a = self.reduce(i128::from(*a));
        if a == 0 {
            return Err(FieldError::NotInvertible(a.to_string()));
        }

        // Extended Euclidean algorithm
        let mut t = 0i64;
        let mut new_t = 1i64;
        let mut r = self.modulus();
        let mut new_r = a;

        while new_r != 0 {
            let quotient = r / new_r;
            (t, new_t) = (new_t, t - quotient * new_t);
            (r, new_r) = (new_r, r - quotient * new_r);
        }

        Ok(self.reduce(i128::from(t)))
    }

    fn bring_in(&self, raw: &i64) -> Result<i64> {
        Ok(self.reduce(i128::from(*raw)))
    }

    fn contains(&self, a: &i64) -> bool {
        (0..self.modulus()).contains(a)
    }
}
