//! Flattened per-variant metadata.

use super::{ScalarValue, VariantId, VariantRecord};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Flat mapping of dimension key to scalar value for one variant.
///
/// Keys keep insertion order, which is the order dimension discovery sees
/// them in. Values are never null, never objects and never empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FlatMetadata(IndexMap<String, ScalarValue>);

impl FlatMetadata {
    /// Create an empty map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&ScalarValue> {
        self.0.get(key)
    }

    /// Whether the key is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Insert a value unless the key is already set or the value is absent.
    ///
    /// Returns true when the value was stored.
    pub fn insert_if_absent(&mut self, key: impl Into<String>, value: ScalarValue) -> bool {
        if !value.is_present() {
            return false;
        }
        let key = key.into();
        if self.0.contains_key(&key) {
            return false;
        }
        self.0.insert(key, value);
        true
    }

    /// Iterate entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Rebuild a record whose normalization yields this map again.
    ///
    /// `browser`, `device` and the viewport keys go back to their typed slots;
    /// everything else becomes a direct attribute.
    #[must_use]
    pub fn to_record(&self, id: Option<VariantId>) -> VariantRecord {
        let mut record = VariantRecord {
            id,
            ..VariantRecord::default()
        };
        for (key, value) in &self.0 {
            match key.as_str() {
                "browser" => record.browser = Some(value.to_string()),
                "device" => record.device = Some(value.to_string()),
                "viewport" => record.viewport = Some(value.to_string()),
                "viewportWidth" => record.viewport_width = value.as_pixels(),
                "viewportHeight" => record.viewport_height = value.as_pixels(),
                _ => {
                    record.attributes.insert(key.clone(), value.clone());
                }
            }
        }
        record
    }
}

impl FromIterator<(String, ScalarValue)> for FlatMetadata {
    fn from_iter<I: IntoIterator<Item = (String, ScalarValue)>>(iter: I) -> Self {
        let mut flat = Self::new();
        for (key, value) in iter {
            flat.insert_if_absent(key, value);
        }
        flat
    }
}

/// A variant paired with its flattened metadata, normalized once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedVariant {
    /// Identity within the working set
    pub id: Option<VariantId>,
    /// Position in the input list
    pub position: usize,
    /// Flattened dimension data
    pub metadata: FlatMetadata,
}

impl NormalizedVariant {
    /// Value for a dimension, via the normalizer's accessor.
    #[must_use]
    pub fn value(&self, dimension: &str) -> Option<&ScalarValue> {
        crate::normalize::dimension_value(&self.metadata, dimension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_if_absent_keeps_first() {
        let mut flat = FlatMetadata::new();
        assert!(flat.insert_if_absent("theme", ScalarValue::from("dark")));
        assert!(!flat.insert_if_absent("theme", ScalarValue::from("light")));
        assert_eq!(flat.get("theme"), Some(&ScalarValue::from("dark")));
    }

    #[test]
    fn test_insert_if_absent_skips_empty_text() {
        let mut flat = FlatMetadata::new();
        assert!(!flat.insert_if_absent("locale", ScalarValue::from("")));
        assert!(flat.is_empty());
    }

    #[test]
    fn test_to_record_routes_core_keys() {
        let flat: FlatMetadata = [
            ("browser".to_string(), ScalarValue::from("firefox")),
            ("viewport".to_string(), ScalarValue::from("375x812")),
            ("viewportWidth".to_string(), ScalarValue::from(375)),
            ("viewportHeight".to_string(), ScalarValue::from(812)),
            ("theme".to_string(), ScalarValue::from("dark")),
        ]
        .into_iter()
        .collect();

        let record = flat.to_record(Some(VariantId::from("v1")));
        assert_eq!(record.browser.as_deref(), Some("firefox"));
        assert_eq!(record.viewport_width, Some(375));
        assert_eq!(record.viewport_height, Some(812));
        assert_eq!(record.attributes.len(), 1);
    }
}
