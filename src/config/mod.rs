// src/config/mod.rs

pub mod poly_config;

// Re-export main types for convenience
pub use poly_config::{DemoConfig, PolyConfig};
