// src/polynomial/display.rs

use std::fmt::{self, Display, Formatter, Write};
use crate::polynomial::coefficient::Coefficient;
use crate::polynomial::polynomial::Polynomial;

impl<T: Coefficient> Polynomial<T> {
    /// Write the polynomial in algebraic form, highest exponent first.
    ///
    /// The leading coefficient is written as-is; every later term is joined
    /// with `" + "` or `" - "` followed by its magnitude. The zero polynomial
    /// is written as the zero of `T`.
    pub fn print<W: Write + ?Sized>(&self, sink: &mut W, variable: &str) -> fmt::Result {
        let mut terms = self.terms.iter().rev();

        let Some((&exponent, coefficient)) = terms.next() else {
            return write!(sink, "{}", T::zero());
        };
        write!(sink, "{}", coefficient)?;
        write_power(sink, variable, exponent)?;

        for (&exponent, coefficient) in terms {
            if coefficient.is_negative_sign() {
                write!(sink, " - {}", coefficient.display_magnitude())?;
            } else {
                write!(sink, " + {}", coefficient)?;
            }
            write_power(sink, variable, exponent)?;
        }

        Ok(())
    }

    /// Displays with a variable name other than `x`.
    pub fn with_variable<'a>(&'a self, variable: &'a str) -> PolynomialDisplay<'a, T> {
        PolynomialDisplay {
            polynomial: self,
            variable,
        }
    }
}

fn write_power<W: Write + ?Sized>(sink: &mut W, variable: &str, exponent: usize) -> fmt::Result {
    if exponent >= 1 {
        sink.write_str(variable)?;
    }
    if exponent >= 2 {
        write!(sink, "^{}", exponent)?;
    }
    Ok(())
}

impl<T: Coefficient> Display for Polynomial<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.print(f, "x")
    }
}

/// Display adaptor returned by [`Polynomial::with_variable`].
#[derive(Clone, Copy, Debug)]
pub struct PolynomialDisplay<'a, T> {
    polynomial: &'a Polynomial<T>,
    variable: &'a str,
}

impl<'a, T: Coefficient> Display for PolynomialDisplay<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.polynomial.print(f, self.variable)
    }
}
