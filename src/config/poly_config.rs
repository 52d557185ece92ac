// src/config/poly_config.rs

use serde::{Deserialize, Serialize};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;

/// Settings for the demonstration binary
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PolyConfig {
    /// Variable name used when printing polynomials
    pub variable_name: String,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Demonstration parameters
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Point at which the demo polynomial is evaluated (default: 3.0)
    pub evaluation_point: f64,

    /// How many successive derivatives to print (default: 4)
    pub max_derivative_order: usize,
}

impl Default for PolyConfig {
    fn default() -> Self {
        PolyConfig {
            variable_name: "x".to_string(),
            log_level: "info".to_string(),
            demo: DemoConfig::default(),
        }
    }
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            evaluation_point: 3.0,
            max_derivative_order: 4,
        }
    }
}

impl PolyConfig {
    /// Load configuration with precedence: defaults → config file → env vars
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("sparse_poly.toml").exists() {
            builder = builder.add_source(File::with_name("sparse_poly.toml"));
        } else if Path::new("sparse_poly.yaml").exists() {
            builder = builder.add_source(File::with_name("sparse_poly.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let builder = Self::defaults()?.add_source(File::from(path));
        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("variable_name", "x")?
            .set_default("log_level", "info")?
            .set_default("demo.evaluation_point", 3.0)?
            .set_default("demo.max_derivative_order", 4)
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables, e.g. SPARSE_POLY_DEMO__EVALUATION_POINT
        let builder = builder.add_source(
            Environment::with_prefix("SPARSE_POLY")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
