//! Named configuration presets.
//!
//! The presets mirror the two ways a variant picker is usually shown: a
//! breadcrumb that lists every dimension with labelled values, and a compact
//! strip that only offers the dimensions a user can actually switch.

use super::types::{AnalysisConfig, AppConfig, DisplayConfig, OutputConfig};

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Defaults with auto-discovery
    Default,
    /// Every discovered dimension, custom values prefixed with their key
    Breadcrumb,
    /// Only the default dimensions, and only when they vary
    Strip,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Breadcrumb => "breadcrumb",
            Self::Strip => "strip",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "breadcrumb" | "full" => Some(Self::Breadcrumb),
            "strip" | "compact" => Some(Self::Strip),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Default and discovered dimensions with plain values",
            Self::Breadcrumb => "All dimensions, custom values labelled with their key",
            Self::Strip => "Viewport and browser only, hidden unless they vary",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Breadcrumb, Self::Strip]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Breadcrumb => Self::breadcrumb_preset(),
            ConfigPreset::Strip => Self::strip_preset(),
        }
    }

    /// Breadcrumb preset: discover everything and label custom values.
    #[must_use]
    pub fn breadcrumb_preset() -> Self {
        Self {
            analysis: AnalysisConfig::default(),
            display: DisplayConfig {
                include_key: true,
                ..DisplayConfig::default()
            },
            output: OutputConfig::default(),
        }
    }

    /// Strip preset: no discovery, single-valued dimensions dropped.
    #[must_use]
    pub fn strip_preset() -> Self {
        Self {
            analysis: AnalysisConfig {
                auto_discover: false,
                multiple_only: true,
                ..AnalysisConfig::default()
            },
            display: DisplayConfig::default(),
            output: OutputConfig::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
        assert_eq!(ConfigPreset::from_name("COMPACT"), Some(ConfigPreset::Strip));
        assert_eq!(ConfigPreset::from_name("nope"), None);
    }

    #[test]
    fn test_strip_preset() {
        let config = AppConfig::from_preset(ConfigPreset::Strip);
        assert!(!config.analysis.auto_discover);
        assert!(config.analysis.multiple_only);
        assert!(!config.display.include_key);
    }

    #[test]
    fn test_breadcrumb_preset() {
        let config = AppConfig::from_preset(ConfigPreset::Breadcrumb);
        assert!(config.analysis.auto_discover);
        assert!(config.display.include_key);
    }
}
