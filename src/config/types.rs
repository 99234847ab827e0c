//! Configuration types for variant-engine.
//!
//! Provides structured configuration for analysis, value display and report
//! output.

use crate::analysis::AnalyzerOptions;
use crate::dimensions::{
    DimensionRegistry, KnownDimension, DEFAULT_DIMENSIONS, DISCOVERY_SKIP_KEYS,
};
use crate::format::{FormatOptions, DEFAULT_MAX_VALUE_LENGTH};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Top-level configuration, loaded from a config file and layered with CLI
/// arguments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Dimension discovery settings
    pub analysis: AnalysisConfig,
    /// Value display settings
    pub display: DisplayConfig,
    /// Report output settings
    pub output: OutputConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Analyzer options described by this config.
    ///
    /// `extra_dimensions` are appended to the defaults, so they always appear
    /// in effective dimension lists.
    #[must_use]
    pub fn analyzer_options(&self) -> AnalyzerOptions {
        let mut default_dimensions = self.analysis.default_dimensions.clone();
        for extra in &self.analysis.extra_dimensions {
            if !default_dimensions.contains(extra) {
                default_dimensions.push(extra.clone());
            }
        }

        AnalyzerOptions {
            default_dimensions,
            skip_keys: self.analysis.skip_keys.clone(),
            auto_discover: self.analysis.auto_discover,
            multiple_only: self.analysis.multiple_only,
            registry: DimensionRegistry::with_known(self.analysis.known_dimensions.iter().copied()),
        }
    }

    /// Display options described by this config.
    #[must_use]
    pub const fn format_options(&self) -> FormatOptions {
        FormatOptions {
            max_length: self.display.max_value_length,
            include_key: self.display.include_key,
        }
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Replace the default dimensions.
    pub fn default_dimensions<I, S>(mut self, dimensions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.analysis.default_dimensions = dimensions.into_iter().map(Into::into).collect();
        self
    }

    /// Add a dimension that is always analyzed.
    pub fn extra_dimension(mut self, dimension: impl Into<String>) -> Self {
        self.config.analysis.extra_dimensions.push(dimension.into());
        self
    }

    /// Add a key that is never discovered.
    pub fn skip_key(mut self, key: impl Into<String>) -> Self {
        self.config.analysis.skip_keys.push(key.into());
        self
    }

    /// Enable or disable auto-discovery.
    pub const fn auto_discover(mut self, enabled: bool) -> Self {
        self.config.analysis.auto_discover = enabled;
        self
    }

    /// Keep only dimensions with more than one value.
    pub const fn multiple_only(mut self, enabled: bool) -> Self {
        self.config.analysis.multiple_only = enabled;
        self
    }

    /// Set the truncation length for displayed values.
    pub const fn max_value_length(mut self, length: usize) -> Self {
        self.config.display.max_value_length = length;
        self
    }

    /// Prefix custom dimension values with their key.
    pub const fn include_key(mut self, enabled: bool) -> Self {
        self.config.display.include_key = enabled;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Pretty-print JSON output.
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.config.output.pretty = pretty;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section Configurations
// ============================================================================

/// Dimension discovery settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Dimensions every analysis starts from
    pub default_dimensions: Vec<String>,
    /// Dimensions appended to the defaults
    pub extra_dimensions: Vec<String>,
    /// Metadata keys never discovered as custom dimensions
    pub skip_keys: Vec<String>,
    /// Known dimensions considered during discovery
    pub known_dimensions: Vec<KnownDimension>,
    /// Discover dimensions from variant metadata
    pub auto_discover: bool,
    /// Report only dimensions with more than one value
    pub multiple_only: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            default_dimensions: DEFAULT_DIMENSIONS.iter().map(ToString::to_string).collect(),
            extra_dimensions: Vec::new(),
            skip_keys: DISCOVERY_SKIP_KEYS.iter().map(ToString::to_string).collect(),
            known_dimensions: KnownDimension::ALL.to_vec(),
            auto_discover: true,
            multiple_only: false,
        }
    }
}

/// Value display settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DisplayConfig {
    /// Longest displayed value before truncation with `…`
    pub max_value_length: usize,
    /// Prefix custom dimension values with their key, e.g. `retina: 2`
    pub include_key: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_value_length: DEFAULT_MAX_VALUE_LENGTH,
            include_key: false,
        }
    }
}

/// Report output settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (stdout when unset)
    pub file: Option<PathBuf>,
    /// Pretty-print JSON
    pub pretty: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .extra_dimension("theme")
            .multiple_only(true)
            .max_value_length(20)
            .output_format(ReportFormat::Json)
            .build();

        assert_eq!(config.analysis.extra_dimensions, vec!["theme"]);
        assert!(config.analysis.multiple_only);
        assert_eq!(config.display.max_value_length, 20);
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_analyzer_options_append_extras_once() {
        let config = AppConfig::builder()
            .extra_dimension("theme")
            .extra_dimension("browser")
            .build();
        let options = config.analyzer_options();
        assert_eq!(options.default_dimensions, vec!["viewport", "browser", "theme"]);
        assert!(options.auto_discover);
    }

    #[test]
    fn test_known_dimensions_restrict_registry() {
        let mut config = AppConfig::default();
        config.analysis.known_dimensions = vec![KnownDimension::Theme];
        let options = config.analyzer_options();
        assert!(options.registry.is_registered("theme"));
        assert!(!options.registry.is_registered("locale"));
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("display:\n  include_key: true\n").expect("yaml");
        assert!(config.display.include_key);
        assert_eq!(config.display.max_value_length, DEFAULT_MAX_VALUE_LENGTH);
        assert_eq!(config.analysis, AnalysisConfig::default());
    }
}
