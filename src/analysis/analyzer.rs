//! Dimension discovery and value analysis.

use crate::dimensions::{DimensionConfig, DimensionRegistry, DEFAULT_DIMENSIONS, DISCOVERY_SKIP_KEYS};
use crate::model::{ScalarValue, VariantSet};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;
use std::collections::HashSet;

/// Distinct values observed for one dimension, sorted for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionValues {
    /// Distinct values, ordered by the dimension's comparator
    pub values: Vec<ScalarValue>,
    /// At least two distinct values were observed
    pub has_multiple: bool,
}

impl DimensionValues {
    fn from_values(dimension: &str, mut values: Vec<ScalarValue>) -> Self {
        DimensionConfig::for_key(dimension).sort(&mut values);
        Self {
            has_multiple: values.len() > 1,
            values,
        }
    }

    /// Number of distinct values.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no values were observed. Never true for an analyzed dimension.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Result of analyzing a variant set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DimensionReport {
    /// Defaults, then explicit extras, then discovered dimensions
    pub effective_dimensions: Vec<String>,
    /// Per-dimension values, in effective-dimension order. Dimensions no
    /// variant has a value for are omitted.
    pub analysis: IndexMap<String, DimensionValues>,
}

impl DimensionReport {
    /// Values for a dimension, if it was observed.
    #[must_use]
    pub fn get(&self, dimension: &str) -> Option<&DimensionValues> {
        self.analysis.get(dimension)
    }

    /// Dimensions with two or more distinct values.
    pub fn varying(&self) -> impl Iterator<Item = &str> {
        self.analysis
            .iter()
            .filter(|(_, values)| values.has_multiple)
            .map(|(key, _)| key.as_str())
    }

    /// Whether nothing was observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.analysis.is_empty()
    }
}

/// Analyzer knobs.
#[derive(Debug, Clone)]
pub struct AnalyzerOptions {
    /// Dimensions every analysis starts from
    pub default_dimensions: Vec<String>,
    /// Keys never discovered as custom dimensions
    pub skip_keys: Vec<String>,
    /// Discover known and custom dimensions from the data
    pub auto_discover: bool,
    /// Keep only dimensions with 2+ values, and nothing for a single variant
    pub multiple_only: bool,
    /// Known dimensions considered during discovery
    pub registry: DimensionRegistry,
}

impl Default for AnalyzerOptions {
    fn default() -> Self {
        Self {
            default_dimensions: DEFAULT_DIMENSIONS.iter().map(ToString::to_string).collect(),
            skip_keys: DISCOVERY_SKIP_KEYS.iter().map(ToString::to_string).collect(),
            auto_discover: true,
            multiple_only: false,
            registry: DimensionRegistry::default(),
        }
    }
}

/// Discovers which dimensions vary across a variant set.
#[derive(Debug, Clone, Default)]
pub struct DimensionAnalyzer {
    options: AnalyzerOptions,
}

impl DimensionAnalyzer {
    /// Create an analyzer with the given options.
    #[must_use]
    pub const fn new(options: AnalyzerOptions) -> Self {
        Self { options }
    }

    /// Options in effect.
    #[must_use]
    pub const fn options(&self) -> &AnalyzerOptions {
        &self.options
    }

    /// Ordered dimension list for a set.
    ///
    /// Defaults come first, then `explicit` keys in caller order, then
    /// (with auto-discovery) known dimensions that have a value on some
    /// variant in registration order, then remaining metadata keys in the
    /// order they are first seen across the set. No key appears twice.
    pub fn effective_dimensions<S: AsRef<str>>(&self, set: &VariantSet, explicit: &[S]) -> Vec<String> {
        let mut dims: IndexSet<String> = self.options.default_dimensions.iter().cloned().collect();
        dims.extend(explicit.iter().map(|key| key.as_ref().to_string()));

        if self.options.auto_discover {
            for known in self.options.registry.known() {
                if !dims.contains(known.key()) && set.iter().any(|v| v.value(known.key()).is_some()) {
                    dims.insert(known.key().to_string());
                }
            }

            for variant in set {
                for key in variant.metadata.keys() {
                    if dims.contains(key) || self.options.skip_keys.iter().any(|s| s == key) {
                        continue;
                    }
                    dims.insert(key.to_string());
                }
            }
        }

        dims.into_iter().collect()
    }

    /// Analyze a set: effective dimensions plus sorted distinct values.
    pub fn analyze<S: AsRef<str>>(&self, set: &VariantSet, explicit: &[S]) -> DimensionReport {
        let effective_dimensions = self.effective_dimensions(set, explicit);

        if self.options.multiple_only && set.len() <= 1 {
            tracing::debug!(variants = set.len(), "single variant, nothing to choose between");
            return DimensionReport {
                effective_dimensions,
                analysis: IndexMap::new(),
            };
        }

        let mut analysis = IndexMap::new();
        for dimension in &effective_dimensions {
            let values = distinct_values(set, dimension);
            if values.is_empty() {
                continue;
            }
            let values = DimensionValues::from_values(dimension, values);
            if self.options.multiple_only && !values.has_multiple {
                continue;
            }
            analysis.insert(dimension.clone(), values);
        }

        tracing::debug!(
            variants = set.len(),
            effective = effective_dimensions.len(),
            analyzed = analysis.len(),
            "analyzed variant dimensions"
        );

        DimensionReport {
            effective_dimensions,
            analysis,
        }
    }
}

/// Distinct present values in first-seen order.
fn distinct_values(set: &VariantSet, dimension: &str) -> Vec<ScalarValue> {
    let mut seen = HashSet::new();
    set.iter()
        .filter_map(|variant| variant.value(dimension))
        .filter(|value| seen.insert(*value))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VariantRecord;

    fn set() -> VariantSet {
        VariantSet::build(&[
            VariantRecord::new("a")
                .with_browser("chrome")
                .with_viewport(1920, 1080)
                .with_metadata("theme", "dark")
                .with_property("colorScheme", "high"),
            VariantRecord::new("b")
                .with_browser("firefox")
                .with_viewport(1920, 1080)
                .with_metadata("theme", "light")
                .with_attribute("url", "https://example.test/"),
            VariantRecord::new("c")
                .with_browser("chrome")
                .with_viewport(375, 812)
                .with_metadata("locale", "de-DE"),
        ])
    }

    #[test]
    fn test_effective_dimension_order() {
        let dims = DimensionAnalyzer::default().effective_dimensions(&set(), &["region", "browser"]);
        assert_eq!(
            dims,
            vec!["viewport", "browser", "region", "theme", "locale", "colorScheme"]
        );
    }

    #[test]
    fn test_skip_list_excludes_url() {
        let dims = DimensionAnalyzer::default().effective_dimensions(&set(), &[] as &[&str]);
        assert!(!dims.iter().any(|d| d == "url" || d == "viewportWidth"));
    }

    #[test]
    fn test_explicit_dimension_without_values_is_omitted() {
        let report = DimensionAnalyzer::default().analyze(&set(), &["region"]);
        assert!(report.effective_dimensions.iter().any(|d| d == "region"));
        assert!(report.get("region").is_none());
    }

    #[test]
    fn test_values_sorted_and_flagged() {
        let report = DimensionAnalyzer::default().analyze(&set(), &[] as &[&str]);

        let viewport = report.get("viewport").expect("viewport analyzed");
        assert_eq!(
            viewport.values,
            vec![ScalarValue::from("1920x1080"), ScalarValue::from("375x812")]
        );
        assert!(viewport.has_multiple);

        let theme = report.get("theme").expect("theme analyzed");
        assert_eq!(theme.values[0], ScalarValue::from("light"));

        let locale = report.get("locale").expect("locale analyzed");
        assert!(!locale.has_multiple);

        let varying: Vec<&str> = report.varying().collect();
        assert_eq!(varying, vec!["viewport", "browser", "theme"]);
    }

    #[test]
    fn test_multiple_only_mode() {
        let analyzer = DimensionAnalyzer::new(AnalyzerOptions {
            multiple_only: true,
            ..AnalyzerOptions::default()
        });
        let report = analyzer.analyze(&set(), &[] as &[&str]);
        let keys: Vec<&str> = report.analysis.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["viewport", "browser", "theme"]);

        let single = VariantSet::build(&[VariantRecord::new("x").with_browser("chrome")]);
        assert!(analyzer.analyze(&single, &[] as &[&str]).is_empty());
    }

    #[test]
    fn test_auto_discover_off() {
        let analyzer = DimensionAnalyzer::new(AnalyzerOptions {
            auto_discover: false,
            ..AnalyzerOptions::default()
        });
        let report = analyzer.analyze(&set(), &["theme"]);
        assert_eq!(report.effective_dimensions, vec!["viewport", "browser", "theme"]);
    }

    #[test]
    fn test_empty_set() {
        let report = DimensionAnalyzer::default().analyze(&VariantSet::build(&[]), &[] as &[&str]);
        assert_eq!(report.effective_dimensions, vec!["viewport", "browser"]);
        assert!(report.is_empty());
    }
}
