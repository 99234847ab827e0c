//! End-to-end tests of the engine over a realistic comparison document.
//!
//! The fixture mixes every record shape: direct fields, `metadata`,
//! `metadata.properties`, `width`/`height`, and viewport strings.

use variant_engine::analysis::{AnalysisCache, DimensionAnalyzer, VariantSummary};
use variant_engine::format::{format_value, format_value_with, FormatOptions};
use variant_engine::matching::{resolve, BestMatchResolver, Selection, SelectionChange};
use variant_engine::model::{ScalarValue, VariantId, VariantRecord, VariantSet};
use variant_engine::normalize::normalize;
use variant_engine::parsers::parse_variants;
use variant_engine::reports::{render, ReportFormat, SummaryReport};
use std::path::{Path, PathBuf};

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn comparisons() -> VariantSet {
    let records = parse_variants(&fixture_path("comparisons.json")).expect("fixture parses");
    VariantSet::build(&records)
}

fn text(value: &str) -> ScalarValue {
    ScalarValue::from(value)
}

fn texts(values: &[&str]) -> Vec<ScalarValue> {
    values.iter().map(|v| text(v)).collect()
}

// ============================================================================
// Normalization
// ============================================================================

mod normalization {
    use super::*;

    #[test]
    fn direct_browser_beats_metadata() {
        let set = comparisons();
        let variant = set.find_by_str("104").expect("variant 104");
        assert_eq!(variant.value("browser"), Some(&text("firefox")));
    }

    #[test]
    fn viewport_synthesized_from_every_source() {
        let set = comparisons();
        let viewports: Vec<String> = set
            .iter()
            .map(|v| v.value("viewport").map(ToString::to_string).unwrap_or_default())
            .collect();
        assert_eq!(
            viewports,
            ["1920x1080", "1920x1080", "375x812", "1280x720", "1920x1080"]
        );
        let last = set.find_by_str("105").expect("variant 105");
        assert_eq!(last.value("viewportWidth"), Some(&ScalarValue::from(1920)));
    }

    #[test]
    fn record_fields_are_dropped() {
        let set = comparisons();
        let variant = set.find_by_str("102").expect("variant 102");
        assert!(variant.metadata.get("status").is_none());
        assert!(variant.metadata.get("diff_percentage").is_none());
        assert!(variant.metadata.get("name").is_none());
        assert!(variant.metadata.get("url").is_some());
    }

    #[test]
    fn normalizing_twice_is_stable() {
        let set = comparisons();
        for variant in &set {
            let again = normalize(&variant.metadata.to_record(variant.id.clone()));
            assert_eq!(again, variant.metadata);
        }
    }

    #[test]
    fn yaml_document_loads() {
        let records = parse_variants(&fixture_path("screenshots.yaml")).expect("yaml parses");
        let set = VariantSet::build(&records);
        assert_eq!(set.len(), 2);
        assert_eq!(set.variants()[1].id, Some(VariantId::from("home-dark")));
        assert_eq!(set.variants()[1].value("theme"), Some(&text("dark")));
    }
}

// ============================================================================
// Dimension analysis
// ============================================================================

mod analysis {
    use super::*;

    #[test]
    fn effective_dimensions_order() {
        let set = comparisons();
        let dims = DimensionAnalyzer::default().effective_dimensions(&set, &[] as &[&str]);
        assert_eq!(
            dims,
            ["viewport", "browser", "theme", "locale", "device", "retina"]
        );
    }

    #[test]
    fn explicit_dimensions_follow_defaults() {
        let set = comparisons();
        let dims = DimensionAnalyzer::default().effective_dimensions(&set, &["orientation", "browser"]);
        assert_eq!(&dims[..3], ["viewport", "browser", "orientation"]);
    }

    #[test]
    fn values_are_sorted_per_dimension() {
        let set = comparisons();
        let report = DimensionAnalyzer::default().analyze(&set, &[] as &[&str]);

        let viewport = report.get("viewport").expect("viewport");
        assert_eq!(viewport.values, texts(&["1920x1080", "1280x720", "375x812"]));
        assert!(viewport.has_multiple);

        let theme = report.get("theme").expect("theme");
        assert_eq!(theme.values, texts(&["light", "dark"]));

        let locale = report.get("locale").expect("locale");
        assert_eq!(locale.values, texts(&["de-DE", "en-US"]));

        let device = report.get("device").expect("device");
        assert_eq!(device.values, texts(&["iPhone 13"]));
        assert!(!device.has_multiple);

        let retina = report.get("retina").expect("retina");
        assert_eq!(retina.values, vec![ScalarValue::from(true)]);
    }

    #[test]
    fn mixed_custom_values_sort_by_text() {
        let records: Vec<VariantRecord> = (0..60_i32)
            .map(|n| {
                let record = VariantRecord::new(n);
                if n % 2 == 0 {
                    record.with_metadata("build", n)
                } else {
                    record.with_metadata("build", format!("{}a", n * 7 % 113))
                }
            })
            .collect();
        let set = VariantSet::build(&records);

        let report = DimensionAnalyzer::default().analyze(&set, &[] as &[&str]);
        let build = report.get("build").expect("build");
        assert_eq!(build.values.len(), 60);

        let rendered: Vec<String> = build.values.iter().map(ToString::to_string).collect();
        let mut expected = rendered.clone();
        expected.sort();
        assert_eq!(rendered, expected);
        assert_eq!(rendered[..3], ["0", "10", "103a"]);
    }

    #[test]
    fn has_multiple_matches_value_count() {
        let set = comparisons();
        let report = DimensionAnalyzer::default().analyze(&set, &[] as &[&str]);
        for (_, values) in &report.analysis {
            assert_eq!(values.has_multiple, values.values.len() > 1);
        }
        let varying: Vec<&str> = report.varying().collect();
        assert_eq!(varying, ["viewport", "browser", "theme", "locale"]);
    }

    #[test]
    fn cache_hits_on_identical_content() {
        let mut cache = AnalysisCache::new(DimensionAnalyzer::default());
        let first = cache.analyze(&comparisons(), &[] as &[&str]).clone();
        let second = cache.analyze(&comparisons(), &[] as &[&str]).clone();
        assert_eq!(first, second);

        let stats = cache.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
    }
}

// ============================================================================
// Best-match resolution
// ============================================================================

mod resolution {
    use super::*;

    fn dims() -> Vec<String> {
        DimensionAnalyzer::default().effective_dimensions(&comparisons(), &[] as &[&str])
    }

    #[test]
    fn switching_browser_keeps_everything_else() {
        let set = comparisons();
        let current = set.find_by_str("101");
        let chosen = resolve(&set, "browser", &text("firefox"), current, &dims());
        assert_eq!(chosen.and_then(|v| v.id.clone()), Some(VariantId::from(102)));
    }

    #[test]
    fn switching_theme_prefers_most_preserved() {
        let set = comparisons();
        let current = set.find_by_str("101");
        let chosen = resolve(&set, "theme", &text("dark"), current, &dims());
        assert_eq!(chosen.and_then(|v| v.id.clone()), Some(VariantId::from(105)));
    }

    #[test]
    fn unknown_value_is_no_match() {
        let set = comparisons();
        let chosen = resolve(&set, "browser", &text("safari"), set.find_by_str("101"), &dims());
        assert!(chosen.is_none());
    }

    #[test]
    fn selection_follows_a_sequence_of_changes() {
        let set = comparisons();
        let dims = dims();
        let mut selection = Selection::new(Some(VariantId::from(101)));

        let steps = [
            ("theme", "dark", 105),
            ("viewport", "375x812", 103),
            ("browser", "firefox", 102),
        ];
        for (dimension, value, expected) in steps {
            let best = selection.apply(
                &BestMatchResolver,
                &set,
                &SelectionChange::new(dimension, value),
                &dims,
            );
            assert!(best.is_some(), "{dimension}={value}");
            assert_eq!(selection.current(), Some(&VariantId::from(expected)));
        }
    }
}

// ============================================================================
// Formatting and summary
// ============================================================================

mod display {
    use super::*;

    #[test]
    fn long_values_are_truncated() {
        let formatted = format_value("locale", Some(&text("en-US-extended-region-code")));
        assert!(formatted.ends_with('…'));
        assert_eq!(formatted.chars().count(), 14);
    }

    #[test]
    fn include_key_prefixes_custom_dimensions() {
        let options = FormatOptions {
            include_key: true,
            ..FormatOptions::default()
        };
        assert_eq!(
            format_value_with("retina", Some(&ScalarValue::from(true)), &options),
            "retina: true"
        );
        assert_eq!(
            format_value_with("browser", Some(&text("chrome")), &options),
            "Chrome"
        );
    }

    #[test]
    fn summary_of_single_variant_has_no_count_pill() {
        let set = VariantSet::build(&[VariantRecord::new(1).with_browser("edge")]);
        let pills = VariantSummary::from_set(&set).pills();
        assert_eq!(pills.len(), 1);
        assert_eq!(pills[0].label, "edge");
    }

    #[test]
    fn summary_rendering() {
        let report = SummaryReport::new(&comparisons());
        let rendered = render(&report, ReportFormat::Summary, false).expect("render");
        insta::assert_snapshot!(rendered.trim_end(), @r"
        [stack] 5 variants
        [browser:chrome browser:firefox] chrome, firefox
        [desktop] 3 viewports
        [mobile] iPhone 13
        [moon sun] light, dark
        [language] 2 locales
        ");
    }
}
