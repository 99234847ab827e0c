//! Display formatting for dimension values and labels.

use crate::dimensions::DimensionConfig;
use crate::model::{NormalizedVariant, ScalarValue, VariantRecord};
use crate::normalize::{dimension_value, normalize};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// Default maximum display length, in characters, including the ellipsis.
pub const DEFAULT_MAX_VALUE_LENGTH: usize = 14;

/// Rendered for a missing value.
pub const NONE_LABEL: &str = "none";

const ELLIPSIS: char = '…';

static UPPERCASE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([A-Z])").expect("static regex"));

/// Options for [`format_value_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Longest rendered value before truncation kicks in
    pub max_length: usize,
    /// Prefix custom dimension values with their lower-cased label
    pub include_key: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_VALUE_LENGTH,
            include_key: false,
        }
    }
}

/// Format a dimension value for display with default options.
///
/// ```
/// use variant_engine::format::format_value;
/// use variant_engine::model::ScalarValue;
///
/// assert_eq!(format_value("viewport", Some(&ScalarValue::from("1280x720"))), "1280×720");
/// assert_eq!(format_value("retina", None), "none");
/// ```
#[must_use]
pub fn format_value(dimension: &str, value: Option<&ScalarValue>) -> String {
    format_value_with(dimension, value, &FormatOptions::default())
}

/// Format a dimension value: registered formatter or identity, then
/// truncation, then the optional `"{label}: "` prefix for custom dimensions.
#[must_use]
pub fn format_value_with(
    dimension: &str,
    value: Option<&ScalarValue>,
    options: &FormatOptions,
) -> String {
    let config = DimensionConfig::for_key(dimension);
    let formatted = value.map_or_else(|| NONE_LABEL.to_string(), |v| config.format(v));
    finish(&config, &formatted, options)
}

/// Format an arbitrary JSON value. Objects and arrays render as compact JSON.
#[must_use]
pub fn format_json_value(
    dimension: &str,
    value: &serde_json::Value,
    options: &FormatOptions,
) -> String {
    if let Some(scalar) = ScalarValue::from_json(value) {
        return format_value_with(dimension, Some(&scalar), options);
    }
    let config = DimensionConfig::for_key(dimension);
    let formatted = match value {
        serde_json::Value::Null => NONE_LABEL.to_string(),
        other => other.to_string(),
    };
    finish(&config, &formatted, options)
}

fn finish(config: &DimensionConfig<'_>, formatted: &str, options: &FormatOptions) -> String {
    let truncated = truncate(formatted, options.max_length);
    if options.include_key && config.is_custom() {
        format!("{}: {truncated}", config.label().to_lowercase())
    } else {
        truncated
    }
}

/// Truncate to at most `max_length` characters, ending with `…` when cut.
#[must_use]
pub fn truncate(text: &str, max_length: usize) -> String {
    if text.chars().count() <= max_length {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_length.saturating_sub(1)).collect();
    out.push(ELLIPSIS);
    out
}

/// Display label of a dimension.
#[must_use]
pub fn label(dimension: &str) -> String {
    DimensionConfig::for_key(dimension).label().into_owned()
}

/// `camelCase` to `Title Case`: a space before every capital, first letter
/// upper-cased.
#[must_use]
pub fn title_case(key: &str) -> String {
    let spaced = UPPERCASE.replace_all(key, " $1");
    let mut chars = spaced.chars();
    let capitalized: String = chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    });
    capitalized.trim().to_string()
}

/// `"1280×720"` for a record with a resolvable viewport.
#[must_use]
pub fn viewport_display(record: &VariantRecord) -> Option<String> {
    let flat = normalize(record);
    dimension_value(&flat, "viewport").map(|v| v.to_string().replacen('x', "×", 1))
}

/// Distinct values of `key` across variants, as strings, sorted.
pub fn unique_property_values<'a, I>(variants: I, key: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a NormalizedVariant>,
{
    variants
        .into_iter()
        .filter_map(|variant| variant.value(key))
        .map(ToString::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
