//! Typed variant records built once at the input boundary.
//!
//! Screenshot and comparison records arrive in several shapes: dimension data
//! may live in direct fields, in a `metadata` object, or in a nested
//! `metadata.properties` object. [`VariantRecord::from_value`] sniffs that
//! shape exactly once and produces a typed record; everything downstream works
//! on the typed form.

use super::ScalarValue;
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Top-level fields with a typed slot on [`VariantRecord`].
const STRUCTURAL_FIELDS: &[&str] = &[
    "id",
    "browser",
    "device",
    "viewport",
    "viewport_width",
    "viewport_height",
    "viewportWidth",
    "viewportHeight",
    "width",
    "height",
    "metadata",
    "properties",
];

/// Record-level fields that describe the capture result rather than a
/// dimension of variation.
const RECORD_FIELDS: &[&str] = &[
    "name",
    "status",
    "result",
    "approval_status",
    "approvalStatus",
    "diff_percentage",
    "diffPercentage",
    "diff_pixels",
    "diffPixels",
    "threshold",
    "baseline_url",
    "current_url",
    "diff_url",
    "image_url",
    "created_at",
    "createdAt",
    "updated_at",
    "updatedAt",
];

/// Whether the record boundary consumes `key` itself instead of keeping it
/// as a dimension.
#[must_use]
pub fn is_reserved_field(key: &str) -> bool {
    STRUCTURAL_FIELDS.contains(&key) || RECORD_FIELDS.contains(&key)
}

/// Identity of a variant within its working set.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum VariantId {
    /// Numeric identifier
    Number(i64),
    /// String identifier
    Text(String),
}

impl VariantId {
    /// Convert a JSON id. Accepts integers and non-empty strings.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Option<Self> {
        match value {
            serde_json::Value::Number(n) => n.as_i64().map(Self::Number),
            serde_json::Value::String(s) if !s.is_empty() => Some(Self::Text(s.clone())),
            _ => None,
        }
    }

    /// Whether this id renders as `text`. Used to match ids typed on a command line.
    #[must_use]
    pub fn matches_str(&self, text: &str) -> bool {
        match self {
            Self::Number(n) => text.trim().parse::<i64>().is_ok_and(|t| t == *n),
            Self::Text(s) => s == text,
        }
    }
}

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for VariantId {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for VariantId {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

impl From<i32> for VariantId {
    fn from(n: i32) -> Self {
        Self::Number(i64::from(n))
    }
}

/// Dimension data nested under a record's `metadata` field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordMetadata {
    /// Scalar entries of `metadata` (excluding `properties`)
    pub values: IndexMap<String, ScalarValue>,
    /// Scalar entries of `metadata.properties`
    pub properties: IndexMap<String, ScalarValue>,
}

/// One captured screenshot instance with its dimension data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariantRecord {
    /// Identity within the working set
    pub id: Option<VariantId>,
    /// Direct browser field
    pub browser: Option<String>,
    /// Direct device field
    pub device: Option<String>,
    /// Direct `"WxH"` viewport string
    pub viewport: Option<String>,
    /// `viewport_width` (or `viewportWidth`)
    pub viewport_width: Option<u32>,
    /// `viewport_height` (or `viewportHeight`)
    pub viewport_height: Option<u32>,
    /// Alternate `width` field
    pub width: Option<u32>,
    /// Alternate `height` field
    pub height: Option<u32>,
    /// Other direct scalar fields, in document order
    pub attributes: IndexMap<String, ScalarValue>,
    /// Nested metadata
    pub metadata: RecordMetadata,
}

impl VariantRecord {
    /// Create an empty record with an id.
    pub fn new(id: impl Into<VariantId>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Build a record from an untrusted JSON value.
    ///
    /// Never fails: non-object input produces an empty record, and fields of
    /// the wrong type are dropped.
    #[must_use]
    pub fn from_value(value: &serde_json::Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let mut record = Self {
            id: obj.get("id").and_then(VariantId::from_json),
            browser: obj.get("browser").and_then(non_empty_str),
            device: obj.get("device").and_then(non_empty_str),
            viewport: obj.get("viewport").and_then(non_empty_str),
            viewport_width: pixel_field(obj, "viewport_width", "viewportWidth"),
            viewport_height: pixel_field(obj, "viewport_height", "viewportHeight"),
            width: obj.get("width").and_then(pixels),
            height: obj.get("height").and_then(pixels),
            ..Self::default()
        };

        for (key, value) in obj {
            if is_reserved_field(key) {
                continue;
            }
            if let Some(scalar) = ScalarValue::from_json(value) {
                record.attributes.insert(key.clone(), scalar);
            }
        }

        if let Some(metadata) = obj.get("metadata").and_then(serde_json::Value::as_object) {
            for (key, value) in metadata {
                if key == "properties" {
                    continue;
                }
                if let Some(scalar) = ScalarValue::from_json(value) {
                    record.metadata.values.insert(key.clone(), scalar);
                }
            }
            if let Some(properties) = metadata
                .get("properties")
                .and_then(serde_json::Value::as_object)
            {
                for (key, value) in properties {
                    if let Some(scalar) = ScalarValue::from_json(value) {
                        record.metadata.properties.insert(key.clone(), scalar);
                    }
                }
            }
        }

        record
    }

    /// Set the direct browser field.
    #[must_use]
    pub fn with_browser(mut self, browser: impl Into<String>) -> Self {
        self.browser = Some(browser.into());
        self
    }

    /// Set the direct device field.
    #[must_use]
    pub fn with_device(mut self, device: impl Into<String>) -> Self {
        self.device = Some(device.into());
        self
    }

    /// Set `viewport_width` and `viewport_height`.
    #[must_use]
    pub fn with_viewport(mut self, width: u32, height: u32) -> Self {
        self.viewport_width = Some(width);
        self.viewport_height = Some(height);
        self
    }

    /// Set the direct `"WxH"` viewport string.
    #[must_use]
    pub fn with_viewport_str(mut self, viewport: impl Into<String>) -> Self {
        self.viewport = Some(viewport.into());
        self
    }

    /// Add a direct scalar field.
    #[must_use]
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Add a `metadata` entry.
    #[must_use]
    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.metadata.values.insert(key.into(), value.into());
        self
    }

    /// Add a `metadata.properties` entry.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.metadata.properties.insert(key.into(), value.into());
        self
    }
}

impl<'de> Deserialize<'de> for VariantRecord {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(Self::from_value(&value))
    }
}

fn non_empty_str(value: &serde_json::Value) -> Option<String> {
    value
        .as_str()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn pixels(value: &serde_json::Value) -> Option<u32> {
    ScalarValue::from_json(value).and_then(|v| v.as_pixels())
}

fn pixel_field(
    obj: &serde_json::Map<String, serde_json::Value>,
    snake: &str,
    camel: &str,
) -> Option<u32> {
    obj.get(snake)
        .and_then(pixels)
        .or_else(|| obj.get(camel).and_then(pixels))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_non_object() {
        assert_eq!(VariantRecord::from_value(&json!(null)), VariantRecord::default());
        assert_eq!(VariantRecord::from_value(&json!("x")), VariantRecord::default());
        assert_eq!(VariantRecord::from_value(&json!([1])), VariantRecord::default());
    }

    #[test]
    fn test_from_value_typed_slots() {
        let record = VariantRecord::from_value(&json!({
            "id": 7,
            "browser": "chrome",
            "viewport_width": 1280,
            "viewportHeight": "720",
            "status": "failed",
            "diff_percentage": 2.5,
            "theme": "dark",
            "metadata": {
                "locale": "en-US",
                "nested": {"ignored": true},
                "properties": {"os": "macos"}
            }
        }));

        assert_eq!(record.id, Some(VariantId::Number(7)));
        assert_eq!(record.browser.as_deref(), Some("chrome"));
        assert_eq!(record.viewport_width, Some(1280));
        assert_eq!(record.viewport_height, Some(720));
        assert_eq!(record.attributes.len(), 1);
        assert_eq!(record.attributes.get("theme"), Some(&ScalarValue::from("dark")));
        assert_eq!(
            record.metadata.values.get("locale"),
            Some(&ScalarValue::from("en-US"))
        );
        assert!(!record.metadata.values.contains_key("nested"));
        assert_eq!(
            record.metadata.properties.get("os"),
            Some(&ScalarValue::from("macos"))
        );
    }

    #[test]
    fn test_properties_must_be_object() {
        let record = VariantRecord::from_value(&json!({
            "metadata": {"properties": "not-an-object", "theme": "light"}
        }));
        assert!(record.metadata.properties.is_empty());
        assert_eq!(record.metadata.values.len(), 1);
    }

    #[test]
    fn test_zero_sizes_dropped() {
        let record = VariantRecord::from_value(&json!({"width": 0, "height": 600}));
        assert_eq!(record.width, None);
        assert_eq!(record.height, Some(600));
    }

    #[test]
    fn test_reserved_fields() {
        for key in ["id", "width", "metadata", "status", "diffPercentage"] {
            assert!(is_reserved_field(key), "{key}");
        }
        assert!(!is_reserved_field("theme"));
        assert!(!is_reserved_field("url"));
    }

    #[test]
    fn test_variant_id_matches_str() {
        assert!(VariantId::Number(12).matches_str("12"));
        assert!(!VariantId::Number(12).matches_str("abc"));
        assert!(VariantId::from("cmp-1").matches_str("cmp-1"));
    }

    #[test]
    fn test_deserialize_is_lenient() {
        let records: Vec<VariantRecord> =
            serde_json::from_str(r#"[{"id": "a", "browser": 5}, 42]"#).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].browser, None);
        assert_eq!(records[1], VariantRecord::default());
    }
}
