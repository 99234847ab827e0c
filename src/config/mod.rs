//! Configuration for variant-engine.
//!
//! This module provides:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for the breadcrumb and strip pickers
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust
//! use variant_engine::config::{AppConfig, ConfigPreset, Validatable};
//!
//! let config = AppConfig::from_preset(ConfigPreset::Strip);
//! assert!(config.analysis.multiple_only);
//!
//! let config = AppConfig::builder()
//!     .extra_dimension("theme")
//!     .max_value_length(20)
//!     .build();
//! assert!(config.is_valid());
//! ```
//!
//! # Configuration File
//!
//! Place a `.variant-engine.yaml` file in your project root or
//! `~/.config/variant-engine/`:
//!
//! ```yaml
//! analysis:
//!   extra_dimensions: [theme]
//!   multiple_only: true
//! display:
//!   include_key: true
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::ConfigPreset;
pub use types::{AnalysisConfig, AppConfig, AppConfigBuilder, DisplayConfig, OutputConfig};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError,
};

/// JSON Schema for the `.variant-engine.yaml` format, for editor validation
/// and autocompletion.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
