//! Configuration of one basis computation.

use pgb_core::TermOrdering;
use pgb_poly::Polynomial;
use pgb_rings::{CoeffField, FieldError, PrimeField};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Default characteristic of the coefficient field.
pub const DEFAULT_CHARACTERISTIC: u64 = 32003;

/// Settings fixed for the duration of one computation.
///
/// The ordering and field are handed to every operation explicitly; nothing
/// here is installed globally.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct F4Config {
    /// Term ordering used to pick leading terms.
    pub ordering: TermOrdering,
    /// Characteristic of the prime coefficient field.
    pub characteristic: u64,
    /// Upper bound on parallel partitions for bulk term multiplication.
    pub workers: usize,
    /// Whether input polynomials are made monic when brought into the field.
    pub normalize_on_bring_in: bool,
}

impl Default for F4Config {
    fn default() -> Self {
        Self {
            ordering: TermOrdering::default(),
            characteristic: DEFAULT_CHARACTERISTIC,
            workers: rayon::current_num_threads().max(1),
            normalize_on_bring_in: true,
        }
    }
}

impl F4Config {
    /// Sets the term ordering.
    #[must_use]
    pub fn with_ordering(mut self, ordering: TermOrdering) -> Self {
        self.ordering = ordering;
        self
    }

    /// Sets the field characteristic.
    #[must_use]
    pub fn with_characteristic(mut self, characteristic: u64) -> Self {
        self.characteristic = characteristic;
        self
    }

    /// Sets the worker bound; zero is raised to one.
    #[must_use]
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Builds the coefficient field, validating the characteristic.
    pub fn field(&self) -> Result<PrimeField, FieldError> {
        let field = PrimeField::new(self.characteristic)?;
        debug!(
            ordering = %self.ordering,
            characteristic = self.characteristic,
            workers = self.workers,
            "configured computation"
        );
        Ok(field)
    }

    /// Readies an input polynomial: sorts it under the configured ordering and
    /// brings its coefficients into `field`.
    ///
    /// On error the polynomial keeps its raw coefficients, sorted.
    pub fn prepare<F: CoeffField>(
        &self,
        field: &F,
        poly: &mut Polynomial<'_, F::Coeff>,
    ) -> pgb_poly::Result<()> {
        poly.order(self.ordering);
        poly.bring_in(field, self.normalize_on_bring_in)
    }
}
