// src/lib.rs

pub mod config;
pub mod polynomial;

pub use polynomial::{Coefficient, Polynomial};
