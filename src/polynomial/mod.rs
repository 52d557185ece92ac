// src/polynomial/mod.rs

pub mod coefficient;
pub mod display;
pub mod ops;
pub mod polynomial;
pub mod serialization;

pub use coefficient::Coefficient;
pub use display::PolynomialDisplay;
pub use polynomial::{Polynomial, Terms};
