//! Metadata normalization.
//!
//! Flattens a [`VariantRecord`] into a single [`FlatMetadata`] namespace.
//! Dimension data can live in three places on a record; when the same key
//! appears in more than one, the direct field wins over `metadata.<key>`,
//! which wins over `metadata.properties.<key>`.
//!
//! The viewport is synthesized as `"{width}x{height}"`, with
//! `viewportWidth`/`viewportHeight` aliases, from the first source that
//! yields both sizes:
//!
//! 1. `viewport_width` / `viewport_height` (or their camelCase spellings)
//! 2. `width` / `height`
//! 3. a parseable direct `viewport` string
//! 4. a parseable `metadata.viewport`
//! 5. a parseable `metadata.properties.viewport`
//!
//! A viewport string that does not parse is kept verbatim, without aliases.

use crate::model::{is_reserved_field, FlatMetadata, ScalarValue, VariantRecord};
use indexmap::IndexMap;

/// Keys handled explicitly and excluded from the generic merge.
pub const CORE_KEYS: &[&str] = &[
    "browser",
    "device",
    "viewport",
    "viewportWidth",
    "viewportHeight",
    "properties",
];

/// Flatten a record into a dimension map.
///
/// Pure and infallible. Output key order: `browser`, `device`, the viewport
/// keys, then merged attributes, metadata and properties in first-seen order.
#[must_use]
pub fn normalize(record: &VariantRecord) -> FlatMetadata {
    let mut flat = FlatMetadata::new();

    if let Some(browser) = first_text(record.browser.as_deref(), record, "browser") {
        flat.insert_if_absent("browser", ScalarValue::from(browser));
    }
    if let Some(device) = first_text(record.device.as_deref(), record, "device") {
        flat.insert_if_absent("device", ScalarValue::from(device));
    }

    match resolve_viewport(record) {
        Some(Viewport::Sized(width, height)) => {
            flat.insert_if_absent("viewport", ScalarValue::from(format!("{width}x{height}")));
            flat.insert_if_absent("viewportWidth", ScalarValue::from(width));
            flat.insert_if_absent("viewportHeight", ScalarValue::from(height));
        }
        Some(Viewport::Raw(raw)) => {
            flat.insert_if_absent("viewport", ScalarValue::from(raw));
        }
        None => {}
    }

    for source in [
        &record.attributes,
        &record.metadata.values,
        &record.metadata.properties,
    ] {
        merge_generic(&mut flat, source);
    }

    flat
}

/// Normalize an untrusted JSON value. Non-objects yield an empty map.
#[must_use]
pub fn normalize_value(value: &serde_json::Value) -> FlatMetadata {
    normalize(&VariantRecord::from_value(value))
}

/// Value of `dimension` on a normalized variant.
///
/// This is the one accessor the analyzer, resolver and summary read through.
#[must_use]
pub fn dimension_value<'a>(flat: &'a FlatMetadata, dimension: &str) -> Option<&'a ScalarValue> {
    flat.get(dimension).filter(|v| v.is_present())
}

/// Parse a `"WxH"` string. Accepts `x`, `X` or `×` as the separator.
///
/// Both sides must be positive integers.
///
/// ```
/// use variant_engine::normalize::parse_viewport;
///
/// assert_eq!(parse_viewport("1280x720"), Some((1280, 720)));
/// assert_eq!(parse_viewport("375×812"), Some((375, 812)));
/// assert_eq!(parse_viewport("desktop"), None);
/// ```
#[must_use]
pub fn parse_viewport(text: &str) -> Option<(u32, u32)> {
    let mut parts = text.trim().split(['x', 'X', '×']);
    let width = parts.next()?.trim().parse::<u32>().ok()?;
    let height = parts.next()?.trim().parse::<u32>().ok()?;
    if parts.next().is_some() || width == 0 || height == 0 {
        return None;
    }
    Some((width, height))
}

enum Viewport {
    Sized(u32, u32),
    Raw(String),
}

fn resolve_viewport(record: &VariantRecord) -> Option<Viewport> {
    if let (Some(w), Some(h)) = (record.viewport_width, record.viewport_height) {
        return Some(Viewport::Sized(w, h));
    }
    if let (Some(w), Some(h)) = (record.width, record.height) {
        return Some(Viewport::Sized(w, h));
    }

    let candidates = [
        record.viewport.as_deref(),
        nested_text(&record.metadata.values, "viewport"),
        nested_text(&record.metadata.properties, "viewport"),
    ];
    let mut raw = None;
    for text in candidates.into_iter().flatten().filter(|s| !s.is_empty()) {
        if let Some((w, h)) = parse_viewport(text) {
            return Some(Viewport::Sized(w, h));
        }
        raw.get_or_insert(text);
    }
    raw.map(|text| Viewport::Raw(text.to_string()))
}

fn first_text<'a>(direct: Option<&'a str>, record: &'a VariantRecord, key: &str) -> Option<&'a str> {
    direct
        .filter(|s| !s.is_empty())
        .or_else(|| nested_text(&record.metadata.values, key))
        .or_else(|| nested_text(&record.metadata.properties, key))
}

fn nested_text<'a>(map: &'a IndexMap<String, ScalarValue>, key: &str) -> Option<&'a str> {
    map.get(key)
        .and_then(ScalarValue::as_str)
        .filter(|s| !s.is_empty())
}

// Reserved boundary fields stay out of the flat map so that feeding the map
// back through `normalize_value` reproduces it.
fn merge_generic(flat: &mut FlatMetadata, source: &IndexMap<String, ScalarValue>) {
    for (key, value) in source {
        if CORE_KEYS.contains(&key.as_str()) || is_reserved_field(key) {
            continue;
        }
        flat.insert_if_absent(key.as_str(), value.clone());
    }
}
