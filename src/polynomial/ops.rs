// src/polynomial/ops.rs
//
// Operator overloads. Every operator returns a new polynomial; borrowed
// operands are cloned where the result needs ownership of their terms.

use std::ops::{Add, Mul, Neg, Sub};
use log::trace;
use num::complex::Complex;
use num::rational::Ratio;
use num::BigInt;
use crate::polynomial::coefficient::Coefficient;
use crate::polynomial::polynomial::Polynomial;

impl<'b, T: Coefficient> Add<&'b Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(mut self, other: &'b Polynomial<T>) -> Polynomial<T> {
        for (&exponent, coefficient) in &other.terms {
            self.add_term(exponent, coefficient.clone());
        }
        self
    }
}

impl<T: Coefficient> Add for Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(mut self, other: Polynomial<T>) -> Polynomial<T> {
        for (exponent, coefficient) in other.terms {
            self.add_term(exponent, coefficient);
        }
        self
    }
}

impl<'a, 'b, T: Coefficient> Add<&'b Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, other: &'b Polynomial<T>) -> Polynomial<T> {
        self.clone() + other
    }
}

impl<'a, T: Coefficient> Add<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn add(self, other: Polynomial<T>) -> Polynomial<T> {
        self.clone() + other
    }
}

impl<T: Coefficient> Neg for Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(mut self) -> Polynomial<T> {
        // Negation cannot produce a zero, so no filtering is needed.
        for coefficient in self.terms.values_mut() {
            let value = std::mem::replace(coefficient, T::zero());
            *coefficient = -value;
        }
        self
    }
}

impl<'a, T: Coefficient> Neg for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn neg(self) -> Polynomial<T> {
        -self.clone()
    }
}

// Subtraction is always `left + (-right)`.
macro_rules! impl_sub_via_neg {
    ($(($lhs:ty, $rhs:ty)),*) => {$(
        impl<'a, 'b, T: Coefficient> Sub<$rhs> for $lhs {
            type Output = Polynomial<T>;

            fn sub(self, other: $rhs) -> Polynomial<T> {
                self + (-other)
            }
        }
    )*};
}

impl_sub_via_neg!(
    (Polynomial<T>, Polynomial<T>),
    (Polynomial<T>, &'b Polynomial<T>),
    (&'a Polynomial<T>, Polynomial<T>),
    (&'a Polynomial<T>, &'b Polynomial<T>)
);

/// # Panics
///
/// Panics if the degree of the product does not fit in a `usize`.
impl<'a, 'b, T: Coefficient> Mul<&'b Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, other: &'b Polynomial<T>) -> Polynomial<T> {
        let mut product = Polynomial::zero();
        for (&left_exponent, left) in &self.terms {
            for (&right_exponent, right) in &other.terms {
                let exponent = left_exponent.checked_add(right_exponent).unwrap_or_else(|| {
                    panic!("exponent overflow: x^{} * x^{}", left_exponent, right_exponent)
                });
                product.add_term(exponent, left.clone() * right.clone());
            }
        }
        trace!("Multiplied {}-term by {}-term polynomial: {} terms", self.len(), other.len(), product.len());
        product
    }
}

impl<T: Coefficient> Mul for Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, other: Polynomial<T>) -> Polynomial<T> {
        &self * &other
    }
}

impl<'b, T: Coefficient> Mul<&'b Polynomial<T>> for Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, other: &'b Polynomial<T>) -> Polynomial<T> {
        &self * other
    }
}

impl<'a, T: Coefficient> Mul<Polynomial<T>> for &'a Polynomial<T> {
    type Output = Polynomial<T>;

    fn mul(self, other: Polynomial<T>) -> Polynomial<T> {
        self * &other
    }
}

// Polynomial op coefficient: the coefficient is promoted to a constant term.
macro_rules! impl_scalar_rhs {
    ($(($lhs:ty, $trait:ident, $method:ident)),*) => {$(
        impl<'a, T: Coefficient> $trait<T> for $lhs {
            type Output = Polynomial<T>;

            fn $method(self, scalar: T) -> Polynomial<T> {
                self.$method(Polynomial::constant(scalar))
            }
        }
    )*};
}

impl_scalar_rhs!(
    (Polynomial<T>, Add, add),
    (&'a Polynomial<T>, Add, add),
    (Polynomial<T>, Sub, sub),
    (&'a Polynomial<T>, Sub, sub),
    (Polynomial<T>, Mul, mul),
    (&'a Polynomial<T>, Mul, mul)
);

// Coefficient op polynomial. Coherence rules out a blanket impl over `T`,
// so each coefficient type gets its own.
macro_rules! impl_scalar_lhs {
    ($([$($generic:ident),*] $scalar:ty),* $(,)?) => {$(
        impl<$($generic),*> Add<Polynomial<$scalar>> for $scalar
        where
            $scalar: Coefficient,
        {
            type Output = Polynomial<$scalar>;

            fn add(self, polynomial: Polynomial<$scalar>) -> Polynomial<$scalar> {
                Polynomial::constant(self) + polynomial
            }
        }

        impl<'a, $($generic),*> Add<&'a Polynomial<$scalar>> for $scalar
        where
            $scalar: Coefficient,
        {
            type Output = Polynomial<$scalar>;

            fn add(self, polynomial: &'a Polynomial<$scalar>) -> Polynomial<$scalar> {
                Polynomial::constant(self) + polynomial
            }
        }

        impl<$($generic),*> Sub<Polynomial<$scalar>> for $scalar
        where
            $scalar: Coefficient,
        {
            type Output = Polynomial<$scalar>;

            fn sub(self, polynomial: Polynomial<$scalar>) -> Polynomial<$scalar> {
                Polynomial::constant(self) - polynomial
            }
        }

        impl<'a, $($generic),*> Sub<&'a Polynomial<$scalar>> for $scalar
        where
            $scalar: Coefficient,
        {
            type Output = Polynomial<$scalar>;

            fn sub(self, polynomial: &'a Polynomial<$scalar>) -> Polynomial<$scalar> {
                Polynomial::constant(self) - polynomial
            }
        }

        impl<$($generic),*> Mul<Polynomial<$scalar>> for $scalar
        where
            $scalar: Coefficient,
        {
            type Output = Polynomial<$scalar>;

            fn mul(self, polynomial: Polynomial<$scalar>) -> Polynomial<$scalar> {
                Polynomial::constant(self) * polynomial
            }
        }

        impl<'a, $($generic),*> Mul<&'a Polynomial<$scalar>> for $scalar
        where
            $scalar: Coefficient,
        {
            type Output = Polynomial<$scalar>;

            fn mul(self, polynomial: &'a Polynomial<$scalar>) -> Polynomial<$scalar> {
                Polynomial::constant(self) * polynomial
            }
        }
    )*};
}

impl_scalar_lhs!(
    [] i8,
    [] i16,
    [] i32,
    [] i64,
    [] i128,
    [] isize,
    [] f32,
    [] f64,
    [] BigInt,
    [T] Ratio<T>,
    [T] Complex<T>,
);
