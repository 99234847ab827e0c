//! Dimension analysis over variant sets.
//!
//! - [`DimensionAnalyzer`] works out the effective dimension list and the
//!   sorted distinct values of each dimension.
//! - [`AnalysisCache`] memoizes analyzer output by content.
//! - [`VariantSummary`] aggregates a group into display pills.

mod analyzer;
mod cache;
mod summary;

pub use analyzer::{AnalyzerOptions, DimensionAnalyzer, DimensionReport, DimensionValues};
pub use cache::{AnalysisCache, CacheStats};
pub use summary::{Pill, VariantSummary, SUMMARY_PROPERTIES};

use crate::model::{VariantRecord, VariantSet};

/// Analyze records with default options.
///
/// ```
/// use variant_engine::analysis::analyze;
/// use variant_engine::model::VariantRecord;
///
/// let report = analyze(
///     &[
///         VariantRecord::new("a").with_browser("chrome"),
///         VariantRecord::new("b").with_browser("firefox"),
///     ],
///     &[] as &[&str],
/// );
/// assert!(report.get("browser").is_some_and(|v| v.has_multiple));
/// ```
pub fn analyze<S: AsRef<str>>(records: &[VariantRecord], explicit: &[S]) -> DimensionReport {
    DimensionAnalyzer::default().analyze(&VariantSet::build(records), explicit)
}
