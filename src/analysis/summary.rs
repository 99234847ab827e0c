//! Aggregate "pill" summary of a variant group.

use crate::dimensions::{BrowserFamily, DimensionConfig, DimensionIcon, ViewportClass};
use crate::model::VariantSet;
use serde::Serialize;

/// Extra dimensions summarized after browsers, viewports and devices.
pub const SUMMARY_PROPERTIES: &[&str] = &["theme", "locale", "os", "orientation"];

/// One aggregate label of a variant group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pill {
    /// Dimension key, or `variants` for the count pill
    pub dimension: String,
    /// Display text
    pub label: String,
    /// Underlying values
    pub values: Vec<String>,
    /// Icons to show, in order
    pub icons: Vec<DimensionIcon>,
}

impl Pill {
    fn new(dimension: &str, label: String, values: &[String], icons: Vec<DimensionIcon>) -> Self {
        Self {
            dimension: dimension.to_string(),
            label,
            values: values.to_vec(),
            icons,
        }
    }
}

/// Distinct values of the summarized dimensions of a group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct VariantSummary {
    pub total_variants: usize,
    pub browsers: Vec<String>,
    pub viewports: Vec<String>,
    pub devices: Vec<String>,
    pub theme: Vec<String>,
    pub locale: Vec<String>,
    pub os: Vec<String>,
    pub orientation: Vec<String>,
}

impl VariantSummary {
    /// Collect distinct values per summarized dimension, sorted with each
    /// dimension's comparator.
    #[must_use]
    pub fn from_set(set: &VariantSet) -> Self {
        let collect = |key: &str| -> Vec<String> {
            let mut values = Vec::new();
            for value in set.iter().filter_map(|v| v.value(key)) {
                if !values.contains(value) {
                    values.push(value.clone());
                }
            }
            DimensionConfig::for_key(key).sort(&mut values);
            values.iter().map(ToString::to_string).collect()
        };

        Self {
            total_variants: set.len(),
            browsers: collect("browser"),
            viewports: collect("viewport"),
            devices: collect("device"),
            theme: collect(SUMMARY_PROPERTIES[0]),
            locale: collect(SUMMARY_PROPERTIES[1]),
            os: collect(SUMMARY_PROPERTIES[2]),
            orientation: collect(SUMMARY_PROPERTIES[3]),
        }
    }

    /// Pills in display order. Empty dimensions produce no pill.
    #[must_use]
    pub fn pills(&self) -> Vec<Pill> {
        let mut pills = Vec::new();

        if self.total_variants > 1 {
            pills.push(Pill::new(
                "variants",
                count_label(self.total_variants, "variant"),
                &[],
                vec![DimensionIcon::Stack],
            ));
        }

        if !self.browsers.is_empty() {
            let icons = self
                .browsers
                .iter()
                .map(|b| DimensionIcon::Browser(BrowserFamily::from_name(b)))
                .collect();
            pills.push(Pill::new("browser", self.browsers.join(", "), &self.browsers, icons));
        }

        if self.viewports.len() > 1 {
            pills.push(Pill::new(
                "viewport",
                count_label(self.viewports.len(), "viewport"),
                &self.viewports,
                vec![viewport_icon(&self.viewports)],
            ));
        }

        if !self.devices.is_empty() {
            pills.push(Pill::new(
                "device",
                single_or(&self.devices, || count_label(self.devices.len(), "device")),
                &self.devices,
                vec![DimensionIcon::Mobile],
            ));
        }

        if !self.theme.is_empty() {
            pills.push(Pill::new(
                "theme",
                self.theme.join(", "),
                &self.theme,
                theme_icons(&self.theme),
            ));
        }

        if !self.locale.is_empty() {
            pills.push(Pill::new(
                "locale",
                single_or(&self.locale, || count_label(self.locale.len(), "locale")),
                &self.locale,
                vec![DimensionIcon::Language],
            ));
        }

        if !self.os.is_empty() {
            pills.push(Pill::new("os", self.os.join(", "), &self.os, Vec::new()));
        }

        if !self.orientation.is_empty() {
            pills.push(Pill::new(
                "orientation",
                self.orientation.join(", "),
                &self.orientation,
                Vec::new(),
            ));
        }

        pills
    }
}

fn count_label(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("1 {noun}")
    } else {
        format!("{count} {noun}s")
    }
}

fn single_or(values: &[String], many: impl FnOnce() -> String) -> String {
    match values {
        [only] => only.clone(),
        _ => many(),
    }
}

/// One size class when every viewport shares it, desktop for a mix.
fn viewport_icon(viewports: &[String]) -> DimensionIcon {
    let mut classes = viewports.iter().map(|v| ViewportClass::from_viewport(v));
    match classes.next() {
        Some(first) if classes.all(|c| c == first) => first.icon(),
        _ => DimensionIcon::Desktop,
    }
}

fn theme_icons(themes: &[String]) -> Vec<DimensionIcon> {
    let has = |name: &str| themes.iter().any(|t| t.eq_ignore_ascii_case(name));
    match (has("dark"), has("light")) {
        (true, true) => vec![DimensionIcon::Moon, DimensionIcon::Sun],
        (true, false) => vec![DimensionIcon::Moon],
        _ => vec![DimensionIcon::Sun],
    }
}
