//! Dimension registry.
//!
//! A dimension is a named axis of variation among variants. The six
//! [`KnownDimension`]s carry a registered label, value formatter,
//! comparator, icon rule and monospace hint. Any other key is a custom
//! dimension and gets the fallback: a title-cased label, identity formatting
//! and lexicographic ordering.

mod icons;
mod sorting;

pub use icons::{BrowserFamily, DimensionIcon, ViewportClass, MOBILE_MAX_WIDTH, TABLET_MAX_WIDTH};
pub use sorting::{fallback_cmp, natural_cmp, theme_cmp, viewport_area, viewport_cmp};

use crate::format::title_case;
use crate::model::ScalarValue;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;

/// Dimensions every analysis starts from.
pub const DEFAULT_DIMENSIONS: &[&str] = &["viewport", "browser"];

/// Keys never auto-discovered as custom dimensions.
pub const DISCOVERY_SKIP_KEYS: &[&str] = &[
    "browser",
    "viewport",
    "viewportWidth",
    "viewportHeight",
    "device",
    "url",
    "selector",
    "width",
    "height",
];

/// A dimension with a registered configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum KnownDimension {
    Viewport,
    Browser,
    Theme,
    Locale,
    Device,
    Orientation,
}

impl KnownDimension {
    /// Registration order. Discovery visits known dimensions in this order.
    pub const ALL: [Self; 6] = [
        Self::Viewport,
        Self::Browser,
        Self::Theme,
        Self::Locale,
        Self::Device,
        Self::Orientation,
    ];

    /// Metadata key of this dimension.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Viewport => "viewport",
            Self::Browser => "browser",
            Self::Theme => "theme",
            Self::Locale => "locale",
            Self::Device => "device",
            Self::Orientation => "orientation",
        }
    }

    /// Look up a known dimension by key. Keys are case-sensitive.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.key() == key)
    }

    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Viewport => "Size",
            Self::Browser => "Browser",
            Self::Theme => "Theme",
            Self::Locale => "Locale",
            Self::Device => "Device",
            Self::Orientation => "Orientation",
        }
    }

    /// Whether values render in a monospace face.
    #[must_use]
    pub const fn is_mono(self) -> bool {
        matches!(self, Self::Viewport)
    }

    /// Apply the registered formatter, without truncation.
    #[must_use]
    pub fn format(self, value: &ScalarValue) -> String {
        let text = value.to_string();
        match self {
            Self::Viewport => text.replacen('x', "×", 1),
            Self::Browser | Self::Theme | Self::Orientation => capitalize(&text),
            Self::Locale => text.to_uppercase(),
            Self::Device => text,
        }
    }

    /// Registered comparator.
    #[must_use]
    pub fn compare(self, a: &ScalarValue, b: &ScalarValue) -> Ordering {
        let (a, b) = (a.to_string(), b.to_string());
        match self {
            Self::Viewport => viewport_cmp(&a, &b),
            Self::Theme => theme_cmp(&a, &b),
            Self::Browser | Self::Locale | Self::Device | Self::Orientation => natural_cmp(&a, &b),
        }
    }

    /// Icon for a value of this dimension.
    #[must_use]
    pub fn icon(self, value: &ScalarValue) -> DimensionIcon {
        match self {
            Self::Viewport => ViewportClass::from_viewport(&value.to_string()).icon(),
            Self::Browser => DimensionIcon::Browser(BrowserFamily::from_name(&value.to_string())),
            Self::Theme => {
                if value.to_string().eq_ignore_ascii_case("dark") {
                    DimensionIcon::Moon
                } else {
                    DimensionIcon::Sun
                }
            }
            Self::Locale => DimensionIcon::Language,
            Self::Device | Self::Orientation => DimensionIcon::Mobile,
        }
    }
}

impl fmt::Display for KnownDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolved configuration for any dimension key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DimensionConfig<'a> {
    Known(KnownDimension),
    Custom(&'a str),
}

impl<'a> DimensionConfig<'a> {
    /// Configuration for a key: the registered one, or the custom fallback.
    #[must_use]
    pub fn for_key(key: &'a str) -> Self {
        KnownDimension::from_key(key).map_or(Self::Custom(key), Self::Known)
    }

    /// Metadata key.
    #[must_use]
    pub const fn key(&self) -> &str {
        match self {
            Self::Known(known) => known.key(),
            Self::Custom(key) => *key,
        }
    }

    /// Whether this is a custom dimension.
    #[must_use]
    pub const fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Display label; custom keys are title-cased.
    #[must_use]
    pub fn label(&self) -> Cow<'static, str> {
        match self {
            Self::Known(known) => Cow::Borrowed(known.label()),
            Self::Custom(key) => Cow::Owned(title_case(key)),
        }
    }

    /// Whether values render in a monospace face.
    #[must_use]
    pub const fn is_mono(&self) -> bool {
        match self {
            Self::Known(known) => known.is_mono(),
            Self::Custom(_) => false,
        }
    }

    /// Format a value without truncation.
    #[must_use]
    pub fn format(&self, value: &ScalarValue) -> String {
        match self {
            Self::Known(known) => known.format(value),
            Self::Custom(_) => value.to_string(),
        }
    }

    /// Compare two values of this dimension.
    #[must_use]
    pub fn compare(&self, a: &ScalarValue, b: &ScalarValue) -> Ordering {
        match self {
            Self::Known(known) => known.compare(a, b),
            Self::Custom(_) => fallback_cmp(a, b),
        }
    }

    /// Icon for a value.
    #[must_use]
    pub fn icon(&self, value: &ScalarValue) -> DimensionIcon {
        match self {
            Self::Known(known) => known.icon(value),
            Self::Custom(_) => DimensionIcon::Tag,
        }
    }

    /// Stable-sort values with this dimension's comparator.
    pub fn sort(&self, values: &mut [ScalarValue]) {
        values.sort_by(|a, b| self.compare(a, b));
    }
}

/// The table of known dimensions, in registration order.
///
/// The default registry holds all of [`KnownDimension::ALL`]. A narrower
/// registry limits which known dimensions auto-discovery considers.
/// Explicitly requested keys are analyzed regardless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DimensionRegistry {
    known: Vec<KnownDimension>,
}

impl Default for DimensionRegistry {
    fn default() -> Self {
        Self {
            known: KnownDimension::ALL.to_vec(),
        }
    }
}

impl DimensionRegistry {
    /// Registry limited to the given known dimensions, kept in registration order.
    pub fn with_known(dimensions: impl IntoIterator<Item = KnownDimension>) -> Self {
        let selected: Vec<KnownDimension> = dimensions.into_iter().collect();
        Self {
            known: KnownDimension::ALL
                .into_iter()
                .filter(|d| selected.contains(d))
                .collect(),
        }
    }

    /// Known dimensions in registration order.
    pub fn known(&self) -> impl Iterator<Item = KnownDimension> + '_ {
        self.known.iter().copied()
    }

    /// Whether a key is registered.
    #[must_use]
    pub fn is_registered(&self, key: &str) -> bool {
        self.known.iter().any(|d| d.key() == key)
    }

    /// Configuration for a key.
    #[must_use]
    pub fn config<'a>(&self, key: &'a str) -> DimensionConfig<'a> {
        DimensionConfig::for_key(key)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
