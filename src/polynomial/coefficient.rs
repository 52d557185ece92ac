// src/polynomial/coefficient.rs

use std::fmt::Display;
use std::ops::{Add, Mul, Neg};
use num::complex::Complex;
use num::rational::Ratio;
use num::{BigInt, Integer, Num, One, Signed, Zero};

/// Numeric capabilities a polynomial coefficient has to provide.
///
/// Arithmetic comes from the operator traits. The sign queries are only
/// consulted when a polynomial is printed: types without a natural order
/// keep the defaults and are always rendered behind a `+` separator.
///
/// Implementations:
/// - `i8`, `i16`, `i32`, `i64`, `i128`, `isize`: sign and absolute value by comparison with zero
/// - `f32`, `f64`: same, with native multiplication for exponent scaling
/// - `BigInt` and `Ratio<T>` over signed integers
/// - `Complex<T>`: always treated as non-negative
pub trait Coefficient:
    Clone +
    PartialEq +
    Display +
    Zero +
    One +
    Add<Output = Self> +
    Neg<Output = Self> +
    Mul<Output = Self>
{
    /// Whether the value prints behind a `-` separator.
    fn is_negative_sign(&self) -> bool {
        false
    }

    /// The value printed after the separator.
    fn display_magnitude(&self) -> Self {
        self.clone()
    }

    /// Multiply by a non-negative integer, as needed for differentiation.
    ///
    /// The default uses double-and-add, so it only relies on `+`.
    fn scale_by_exponent(&self, exponent: usize) -> Self {
        let mut result = Self::zero();
        let mut addend = self.clone();
        let mut remaining = exponent;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result + addend.clone();
            }
            remaining >>= 1;
            if remaining > 0 {
                addend = addend.clone() + addend;
            }
        }
        result
    }
}

macro_rules! impl_signed_integer_coefficient {
    ($($t:ty),*) => {$(
        impl Coefficient for $t {
            fn is_negative_sign(&self) -> bool {
                Signed::is_negative(self)
            }

            fn display_magnitude(&self) -> Self {
                Signed::abs(self)
            }
        }
    )*};
}

impl_signed_integer_coefficient!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_coefficient {
    ($($t:ty),*) => {$(
        impl Coefficient for $t {
            fn is_negative_sign(&self) -> bool {
                *self < 0.0
            }

            fn display_magnitude(&self) -> Self {
                self.abs()
            }

            // Exponents past the mantissa width (2^24 for f32, 2^53 for f64) round.
            fn scale_by_exponent(&self, exponent: usize) -> Self {
                *self * exponent as $t
            }
        }
    )*};
}

impl_float_coefficient!(f32, f64);

impl Coefficient for BigInt {
    fn is_negative_sign(&self) -> bool {
        Signed::is_negative(self)
    }

    fn display_magnitude(&self) -> Self {
        Signed::abs(self)
    }

    fn scale_by_exponent(&self, exponent: usize) -> Self {
        self * BigInt::from(exponent)
    }
}

impl<T> Coefficient for Ratio<T>
where
    T: Clone + Integer + Signed + Display,
{
    fn is_negative_sign(&self) -> bool {
        Signed::is_negative(self)
    }

    fn display_magnitude(&self) -> Self {
        Signed::abs(self)
    }
}

// No total order on the complex plane, so the sign defaults apply.
impl<T> Coefficient for Complex<T>
where
    T: Clone + Num + Neg<Output = T> + PartialOrd + Display,
{
}
