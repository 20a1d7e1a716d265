//! Polynomials as parallel coefficient and term sequences.
//!
//! A polynomial knows neither its field nor its ordering. Callers bring it
//! into a field with [`Polynomial::bring_in`] and sort it with
//! [`Polynomial::order`], which lets both be chosen at run time. Only the
//! number of indeterminates is fixed, through the monoid of its terms.

use std::fmt;
use std::hash::{Hash, Hasher};

use num_traits::{One, Zero};
use pgb_core::{Degree, MulAllTerms, Term, TermOrdering};
use pgb_rings::CoeffField;
use rustc_hash::FxHashMap;
use tracing::trace;

use crate::error::{PolyError, Result};

/// A coefficient paired with a term, e.g. `3*x[1]^2*x[2]`.
pub type Monomial<'m, C> = (C, Term<'m>);

/// A polynomial with a sugar degree.
///
/// The coefficient at position `i` belongs to the term at position `i`.
/// After [`order`](Self::order) the leading term sits at index 0 and the
/// remaining terms descend.
///
/// Producers must keep the leading coefficient nonzero while a nonzero tail
/// remains: [`is_zero`](Self::is_zero) only inspects index 0.
#[derive(Clone, Debug)]
pub struct Polynomial<'m, C> {
    coeffs: Vec<C>,
    terms: Vec<Term<'m>>,
    /// Sugar degree (for selection heuristics).
    sugar: Degree,
    /// The ordering the terms are currently sorted by, if any.
    ordered_by: Option<TermOrdering>,
}

impl<'m, C: Clone> Polynomial<'m, C> {
    /// Creates an empty polynomial with sugar degree `sugar`.
    #[must_use]
    pub fn new(sugar: Degree) -> Self {
        Self {
            coeffs: Vec::new(),
            terms: Vec::new(),
            sugar,
            ordered_by: None,
        }
    }

    /// The zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Creates a polynomial from parallel coefficient and term vectors.
    ///
    /// The sugar degree is the largest total degree among the terms.
    pub fn from_parts(coeffs: Vec<C>, terms: Vec<Term<'m>>) -> Result<Self> {
        if coeffs.len() != terms.len() {
            return Err(PolyError::UndefinedOperation(
                "coefficient and term counts differ",
            ));
        }
        let sugar = max_degree(&terms);
        Ok(Self {
            coeffs,
            terms,
            sugar,
            ordered_by: None,
        })
    }

    /// Creates a polynomial from a list of monomials, keeping their order.
    #[must_use]
    pub fn from_monomials(monomials: Vec<Monomial<'m, C>>) -> Self {
        let (coeffs, terms): (Vec<_>, Vec<_>) = monomials.into_iter().unzip();
        let sugar = max_degree(&terms);
        Self {
            coeffs,
            terms,
            sugar,
            ordered_by: None,
        }
    }

    /// Creates a polynomial from monomials, merging repeated terms.
    ///
    /// Every coefficient is first brought into `field`. Coefficients of equal
    /// terms are then added and terms whose coefficients cancel are dropped.
    /// Surviving terms keep the position of their first occurrence.
    pub fn from_monomials_purified<F>(monomials: Vec<Monomial<'m, C>>, field: &F) -> Result<Self>
    where
        F: CoeffField<Coeff = C>,
    {
        let mut position: FxHashMap<Term<'m>, usize> = FxHashMap::default();
        let mut merged: Vec<Monomial<'m, C>> = Vec::with_capacity(monomials.len());

        for (c, t) in monomials {
            let c = field.bring_in(&c)?;
            match position.get(&t) {
                Some(&i) => merged[i].0 = field.add(&merged[i].0, &c),
                None => {
                    position.insert(t, merged.len());
                    merged.push((c, t));
                }
            }
        }
        merged.retain(|(c, _)| !field.is_zero(c));

        Ok(Self::from_monomials(merged))
    }

    /// The polynomial `1*t`.
    #[must_use]
    pub fn from_term(t: Term<'m>) -> Self
    where
        C: One,
    {
        Self {
            coeffs: vec![C::one()],
            terms: vec![t],
            sugar: t.degree(),
            ordered_by: None,
        }
    }

    /// Number of monomials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// Returns true if there are no monomials.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns true for the zero polynomial.
    ///
    /// This is true iff the polynomial is empty or its coefficient at index 0
    /// is zero. A zero leading coefficient followed by a nonzero tail is a
    /// malformed polynomial which this test also reports as zero.
    #[must_use]
    pub fn is_zero(&self) -> bool
    where
        C: Zero,
    {
        self.coeffs.first().map_or(true, Zero::is_zero)
    }

    /// The monomial at position `i`.
    #[must_use]
    pub fn monomial(&self, i: usize) -> Option<Monomial<'m, C>> {
        Some((self.coeffs.get(i)?.clone(), *self.terms.get(i)?))
    }

    /// The coefficient at position `i`.
    #[must_use]
    pub fn coeff(&self, i: usize) -> Option<&C> {
        self.coeffs.get(i)
    }

    /// The term at position `i`.
    #[must_use]
    pub fn term(&self, i: usize) -> Option<Term<'m>> {
        self.terms.get(i).copied()
    }

    /// All coefficients in stored order.
    #[must_use]
    pub fn coeffs(&self) -> &[C] {
        &self.coeffs
    }

    /// All terms in stored order.
    #[must_use]
    pub fn terms(&self) -> &[Term<'m>] {
        &self.terms
    }

    /// A copy of the terms.
    #[must_use]
    pub fn support(&self) -> Vec<Term<'m>> {
        self.terms.clone()
    }

    /// Iterates over `(coefficient, term)` pairs in stored order.
    pub fn iter(&self) -> impl Iterator<Item = (&C, Term<'m>)> + '_ {
        self.coeffs.iter().zip(self.terms.iter().copied())
    }

    /// Appends a monomial without reordering.
    pub fn push(&mut self, c: C, t: Term<'m>) {
        self.coeffs.push(c);
        self.terms.push(t);
        self.ordered_by = None;
    }

    /// Appends a monomial without reordering.
    pub fn push_monomial(&mut self, (c, t): Monomial<'m, C>) {
        self.push(c, t);
    }

    /// The sugar degree.
    #[must_use]
    pub fn sugar(&self) -> Degree {
        self.sugar
    }

    /// Sets the sugar degree.
    pub fn set_sugar(&mut self, sugar: Degree) {
        self.sugar = sugar;
    }

    /// The ordering last applied with [`order`](Self::order), if the terms
    /// have not been disturbed since.
    #[must_use]
    pub fn ordering(&self) -> Option<TermOrdering> {
        self.ordered_by
    }

    /// Sorts the monomials so that terms descend under `ordering`.
    ///
    /// The terms must be pairwise distinct; a polynomial with a repeated term
    /// is malformed and its resulting order is unspecified.
    pub fn order(&mut self, ordering: TermOrdering) {
        let coeffs = std::mem::take(&mut self.coeffs);
        let terms = std::mem::take(&mut self.terms);
        let mut pairs: Vec<Monomial<'m, C>> = coeffs.into_iter().zip(terms).collect();

        pairs.sort_by(|a, b| ordering.compare(b.1, a.1));
        debug_assert!(
            pairs.windows(2).all(|w| w[0].1 != w[1].1),
            "polynomial contains a repeated term"
        );

        let (coeffs, terms): (Vec<C>, Vec<Term<'m>>) = pairs.into_iter().unzip();
        self.coeffs = coeffs;
        self.terms = terms;
        self.ordered_by = Some(ordering);
        trace!(terms = self.terms.len(), %ordering, "ordered polynomial");
    }

    /// The leading term; requires a non-empty, ordered polynomial.
    pub fn leading_term(&self) -> Result<Term<'m>> {
        self.check_leading()?;
        Ok(self.terms[0])
    }

    /// The leading coefficient; requires a non-empty, ordered polynomial.
    pub fn leading_coefficient(&self) -> Result<&C> {
        self.check_leading()?;
        Ok(&self.coeffs[0])
    }

    /// Least common multiple of the leading terms of `self` and `other`.
    pub fn lcm_of_leading_terms(&self, other: &Self) -> Result<Term<'m>> {
        Ok(self.leading_term()?.lcm(other.leading_term()?)?)
    }

    /// Scales the polynomial so that the coefficient at index 0 becomes one.
    ///
    /// Every coefficient is multiplied by the inverse of the current leading
    /// coefficient. Fails if that coefficient is zero or missing.
    pub fn normalize<F>(&mut self, field: &F) -> Result<()>
    where
        F: CoeffField<Coeff = C>,
    {
        let inv = leading_inverse(&self.coeffs, field)?;
        self.scale(&inv, field);
        Ok(())
    }

    /// Multiplies every coefficient by `l` in `field`.
    ///
    /// The coefficients must already be representatives of `field`.
    pub fn scale<F>(&mut self, l: &C, field: &F)
    where
        F: CoeffField<Coeff = C>,
    {
        for c in &mut self.coeffs {
            *c = field.mul(c, l);
        }
    }

    /// Replaces every coefficient by its representative in `field`, then
    /// normalizes if asked to.
    ///
    /// On error the polynomial is left unchanged.
    pub fn bring_in<F>(&mut self, field: &F, normalize: bool) -> Result<()>
    where
        F: CoeffField<Coeff = C>,
    {
        let mut coeffs = self
            .coeffs
            .iter()
            .map(|c| field.bring_in(c))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        if normalize {
            let inv = leading_inverse(&coeffs, field)?;
            for c in &mut coeffs {
                *c = field.mul(c, &inv);
            }
        }
        self.coeffs = coeffs;
        Ok(())
    }

    /// Returns `self * t`.
    ///
    /// Multiplying every term by the same term preserves their relative order
    /// under any term ordering, so an ordered polynomial stays ordered.
    pub fn mul(&self, t: Term<'m>) -> Result<Self> {
        let mut product = self.clone();
        product.mul_by(t)?;
        Ok(product)
    }

    /// Replaces `self` by `self * t`. On error `self` is left unchanged.
    pub fn mul_by(&mut self, t: Term<'m>) -> Result<()> {
        let terms = self
            .terms
            .iter()
            .map(|&s| s.mul(t))
            .collect::<pgb_core::Result<Vec<_>>>()?;
        self.terms = terms;
        self.sugar += t.degree();
        Ok(())
    }

    /// Multiplies the support by `t` on up to `workers` threads.
    ///
    /// Coefficients are not touched; the products are returned in the
    /// polynomial's stored order together with the elapsed time.
    pub fn mul_all_terms(&self, t: Term<'m>, workers: usize) -> Result<MulAllTerms<'m>> {
        Ok(t.monoid().mul_all_terms(&self.terms, t, workers)?)
    }

    fn check_leading(&self) -> Result<()> {
        if self.terms.is_empty() {
            return Err(PolyError::UndefinedOperation(
                "leading term of the empty polynomial",
            ));
        }
        if self.ordered_by.is_none() {
            return Err(PolyError::UndefinedOperation(
                "leading term of an unordered polynomial",
            ));
        }
        Ok(())
    }
}

/// Inverse of the coefficient at index 0, which must be nonzero.
fn leading_inverse<C, F>(coeffs: &[C], field: &F) -> Result<C>
where
    F: CoeffField<Coeff = C>,
{
    match coeffs.first() {
        Some(lc) if !field.is_zero(lc) => Ok(field.inv(lc)?),
        Some(_) => Err(PolyError::UndefinedOperation(
            "normalizing a polynomial with zero leading coefficient",
        )),
        None => Err(PolyError::UndefinedOperation(
            "normalizing the empty polynomial",
        )),
    }
}

fn max_degree(terms: &[Term<'_>]) -> Degree {
    terms.iter().map(|t| t.degree()).max().unwrap_or(0)
}

// Equality is content equality in stored order. Sugar and ordering state are
// bookkeeping and do not take part.
impl<C: PartialEq> PartialEq for Polynomial<'_, C> {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms && self.coeffs == other.coeffs
    }
}

impl<C: Eq> Eq for Polynomial<'_, C> {}

impl<C: Hash> Hash for Polynomial<'_, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.terms.hash(state);
        self.coeffs.hash(state);
    }
}

impl<C: fmt::Display + One + PartialEq> fmt::Display for Polynomial<'_, C> {
    /// Renders the monomials in stored order, e.g. `3*x[1]^2 - x[2] + 5`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.coeffs.is_empty() {
            return write!(f, "0");
        }
        for (i, (c, t)) in self.coeffs.iter().zip(&self.terms).enumerate() {
            let rendered = c.to_string();
            let (negative, magnitude) = match rendered.strip_prefix('-') {
                Some(rest) => (true, rest),
                None => (false, rendered.as_str()),
            };
            match (i, negative) {
                (0, true) => write!(f, "-")?,
                (0, false) => {}
                (_, true) => write!(f, " - ")?,
                (_, false) => write!(f, " + ")?,
            }
            if t.is_one() {
                write!(f, "{magnitude}")?;
            } else if c.is_one() || magnitude == "1" {
                write!(f, "{t}")?;
            } else {
                write!(f, "{magnitude}*{t}")?;
            }
        }
        Ok(())
    }
}

/// Renders a list of polynomials as `[p0, p1, ...]`.
#[must_use]
pub fn display_list<C>(polys: &[Polynomial<'_, C>]) -> String
where
    C: Clone + fmt::Display + One + PartialEq,
{
    let parts: Vec<String> = polys.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}
