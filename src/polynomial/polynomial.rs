// src/polynomial/polynomial.rs

use std::collections::btree_map::{self, Entry};
use std::collections::BTreeMap;
use std::iter::{self, Product, Sum};
use std::ops::Mul;
use log::{debug, trace};
use num::{One, Zero};
use crate::polynomial::coefficient::Coefficient;

/// A sparse univariate polynomial.
///
/// Terms are kept in a map from exponent to coefficient, ascending by
/// exponent. A zero coefficient is never stored, so the zero polynomial is
/// the empty map and equality is plain map equality.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<T> {
    pub(crate) terms: BTreeMap<usize, T>,
}

impl<T> Default for Polynomial<T> {
    fn default() -> Self {
        Polynomial {
            terms: BTreeMap::new(),
        }
    }
}

impl<T> Polynomial<T> {
    /// The zero polynomial.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Number of non-zero terms. This is not the degree.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Highest exponent with a non-zero coefficient, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.terms.keys().next_back().copied()
    }

    pub fn leading_term(&self) -> Option<(usize, &T)> {
        self.terms.iter().next_back().map(|(&exponent, coefficient)| (exponent, coefficient))
    }

    /// Iterate over `(exponent, coefficient)` pairs, lowest exponent first.
    pub fn terms(&self) -> Terms<'_, T> {
        Terms {
            inner: self.terms.iter(),
        }
    }
}

impl<T: Coefficient> Polynomial<T> {
    /// Build a polynomial from `(exponent, coefficient)` pairs.
    ///
    /// Zero coefficients are dropped and repeated exponents are summed.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (usize, T)>,
    {
        let mut polynomial = Polynomial::zero();
        for (exponent, coefficient) in terms {
            polynomial.add_term(exponent, coefficient);
        }
        polynomial
    }

    /// A degree-0 polynomial. A zero value gives the zero polynomial.
    pub fn constant(value: T) -> Self {
        Self::from_terms(iter::once((0, value)))
    }

    pub fn one() -> Self {
        Self::constant(T::one())
    }

    /// The placeholder variable `x`, for building polynomials as expressions.
    pub fn x() -> Self {
        Self::linear_term(T::one())
    }

    pub fn linear_term(coefficient: T) -> Self {
        Self::monomial(coefficient, 1)
    }

    pub fn monomial(coefficient: T, exponent: usize) -> Self {
        Self::from_terms(iter::once((exponent, coefficient)))
    }

    /// The monic polynomial with the given roots, the product of `(x - r)`.
    pub fn from_roots(roots: &[T]) -> Self {
        debug!("Building polynomial from {} roots", roots.len());
        roots
            .iter()
            .map(|root| Self::x() - Self::constant(root.clone()))
            .product()
    }

    pub fn product(polys: &[Polynomial<T>]) -> Self {
        polys.iter().product()
    }

    /// Stored coefficient for `exponent`, zero when the term is absent.
    pub fn coefficient(&self, exponent: usize) -> T {
        self.terms.get(&exponent).cloned().unwrap_or_else(T::zero)
    }

    /// Accumulate into the term at `exponent`, dropping it if it cancels to zero.
    pub(crate) fn add_term(&mut self, exponent: usize, coefficient: T) {
        if coefficient.is_zero() {
            return;
        }
        match self.terms.entry(exponent) {
            Entry::Vacant(entry) => {
                entry.insert(coefficient);
            }
            Entry::Occupied(mut entry) => {
                let sum = entry.get().clone() + coefficient;
                if sum.is_zero() {
                    entry.remove();
                } else {
                    *entry.get_mut() = sum;
                }
            }
        }
    }

    pub fn differentiate(&self) -> Self {
        let mut derivative = Polynomial::zero();
        for (&exponent, coefficient) in self.terms.range(1..) {
            derivative.add_term(exponent - 1, coefficient.scale_by_exponent(exponent));
        }
        trace!("Differentiated {} terms into {} terms", self.len(), derivative.len());
        derivative
    }

    /// Evaluate at `point`, which may be of a wider type than the coefficients.
    ///
    /// Terms are visited in ascending order while a running power of `point`
    /// moves forward one factor at a time, so each power is built once.
    pub fn evaluate<U>(&self, point: &U) -> U
    where
        U: Clone + Zero + Mul<Output = U> + From<T>,
    {
        let mut result = U::zero();
        let mut power = point.clone();
        let mut reached = 1;

        for (&exponent, coefficient) in &self.terms {
            let coefficient = U::from(coefficient.clone());
            if exponent == 0 {
                result = result + coefficient;
                continue;
            }
            while reached < exponent {
                power = power * point.clone();
                reached += 1;
            }
            result = result + coefficient * power.clone();
        }

        result
    }

    pub fn square(&self) -> Self {
        self * self
    }

    /// Raise to a non-negative power by repeated squaring. `p.pow(0)` is one.
    pub fn pow(&self, exponent: u32) -> Self {
        let mut result = Polynomial::one();
        let mut base = self.clone();
        let mut remaining = exponent;

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = &result * &base;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.square();
            }
        }

        trace!("Raised {}-term polynomial to power {}: {} terms", self.len(), exponent, result.len());
        result
    }
}

/// Iterator over the terms of a [`Polynomial`], ascending by exponent.
#[derive(Clone, Debug)]
pub struct Terms<'a, T> {
    inner: btree_map::Iter<'a, usize, T>,
}

impl<'a, T> Iterator for Terms<'a, T> {
    type Item = (usize, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(&exponent, coefficient)| (exponent, coefficient))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a, T> DoubleEndedIterator for Terms<'a, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(&exponent, coefficient)| (exponent, coefficient))
    }
}

impl<'a, T> ExactSizeIterator for Terms<'a, T> {}

impl<T: Coefficient> From<BTreeMap<usize, T>> for Polynomial<T> {
    fn from(terms: BTreeMap<usize, T>) -> Self {
        Polynomial::from_terms(terms)
    }
}

impl<T: Coefficient> From<T> for Polynomial<T> {
    fn from(value: T) -> Self {
        Polynomial::constant(value)
    }
}

impl<T: Coefficient> FromIterator<(usize, T)> for Polynomial<T> {
    fn from_iter<I: IntoIterator<Item = (usize, T)>>(terms: I) -> Self {
        Polynomial::from_terms(terms)
    }
}

impl<T: Coefficient> Zero for Polynomial<T> {
    fn zero() -> Self {
        Self::default()
    }

    fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }
}

impl<T: Coefficient> One for Polynomial<T> {
    fn one() -> Self {
        Polynomial::constant(T::one())
    }
}

impl<T: Coefficient> Sum for Polynomial<T> {
    fn sum<I: Iterator<Item = Self>>(polys: I) -> Self {
        polys.fold(Polynomial::zero(), |acc, poly| acc + poly)
    }
}

impl<'a, T: Coefficient> Sum<&'a Polynomial<T>> for Polynomial<T> {
    fn sum<I: Iterator<Item = &'a Polynomial<T>>>(polys: I) -> Self {
        polys.fold(Polynomial::zero(), |acc, poly| acc + poly)
    }
}

impl<T: Coefficient> Product for Polynomial<T> {
    fn product<I: Iterator<Item = Self>>(polys: I) -> Self {
        polys.fold(Polynomial::one(), |acc, poly| acc * poly)
    }
}

impl<'a, T: Coefficient> Product<&'a Polynomial<T>> for Polynomial<T> {
    fn product<I: Iterator<Item = &'a Polynomial<T>>>(polys: I) -> Self {
        polys.fold(Polynomial::one(), |acc, poly| acc * poly)
    }
}
