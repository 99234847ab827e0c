//! Serializable report views.

use crate::analysis::{DimensionReport, Pill, VariantSummary};
use crate::dimensions::{DimensionConfig, DimensionIcon};
use crate::format::{format_value_with, FormatOptions};
use crate::matching::{BestMatch, SelectionChange};
use crate::model::{FlatMetadata, NormalizedVariant, ScalarValue, VariantId, VariantSet};
use serde::Serialize;

/// One selectable value of a dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueEntry {
    pub value: ScalarValue,
    pub display: String,
    pub icon: DimensionIcon,
}

/// One analyzed dimension, ready to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DimensionEntry {
    pub key: String,
    pub label: String,
    pub monospace: bool,
    pub has_multiple: bool,
    pub values: Vec<ValueEntry>,
}

/// Output of `analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalysisReport {
    pub variants: usize,
    pub fingerprint: String,
    pub effective_dimensions: Vec<String>,
    pub dimensions: Vec<DimensionEntry>,
}

impl AnalysisReport {
    /// Attach labels, display strings and icons to an analysis.
    #[must_use]
    pub fn new(set: &VariantSet, report: &DimensionReport, options: &FormatOptions) -> Self {
        let dimensions = report
            .analysis
            .iter()
            .map(|(key, values)| {
                let config = DimensionConfig::for_key(key);
                DimensionEntry {
                    key: key.clone(),
                    label: config.label().into_owned(),
                    monospace: config.is_mono(),
                    has_multiple: values.has_multiple,
                    values: values
                        .values
                        .iter()
                        .map(|value| ValueEntry {
                            value: value.clone(),
                            display: format_value_with(key, Some(value), options),
                            icon: config.icon(value),
                        })
                        .collect(),
                }
            })
            .collect();

        Self {
            variants: set.len(),
            fingerprint: format!("{:016x}", set.fingerprint()),
            effective_dimensions: report.effective_dimensions.clone(),
            dimensions,
        }
    }
}

/// The variant chosen by `resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchEntry {
    pub id: Option<VariantId>,
    pub index: usize,
    pub score: usize,
    pub matched: Vec<String>,
    pub mismatched: Vec<String>,
    pub metadata: FlatMetadata,
}

impl From<&BestMatch<'_>> for MatchEntry {
    fn from(best: &BestMatch<'_>) -> Self {
        Self {
            id: best.variant.id.clone(),
            index: best.index,
            score: best.score,
            matched: best.matched.clone(),
            mismatched: best.mismatched.clone(),
            metadata: best.variant.metadata.clone(),
        }
    }
}

/// Output of `resolve`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveReport {
    pub dimension: String,
    pub value: ScalarValue,
    pub current: Option<VariantId>,
    pub dimensions: Vec<String>,
    pub result: Option<MatchEntry>,
    /// Include the kept/changed breakdown in the summary rendering
    #[serde(skip)]
    pub explain: bool,
}

impl ResolveReport {
    /// Build from a change request and the resolver outcome.
    #[must_use]
    pub fn new(
        change: &SelectionChange,
        current: Option<&VariantId>,
        dimensions: &[String],
        best: Option<&BestMatch<'_>>,
        explain: bool,
    ) -> Self {
        Self {
            dimension: change.dimension.clone(),
            value: change.value.clone(),
            current: current.cloned(),
            dimensions: dimensions.to_vec(),
            result: best.map(MatchEntry::from),
            explain,
        }
    }
}

/// Output of `normalize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizeReport {
    pub variants: Vec<NormalizedVariant>,
}

impl NormalizeReport {
    #[must_use]
    pub fn new(set: &VariantSet) -> Self {
        Self {
            variants: set.variants().to_vec(),
        }
    }
}

/// Output of `summary`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryReport {
    pub summary: VariantSummary,
    pub pills: Vec<Pill>,
}

impl SummaryReport {
    #[must_use]
    pub fn new(set: &VariantSet) -> Self {
        let summary = VariantSummary::from_set(set);
        let pills = summary.pills();
        Self { summary, pills }
    }
}
