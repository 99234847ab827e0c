//! Analyze command handler.
//!
//! Implements the `analyze` subcommand: effective dimensions and their
//! distinct values for a variant document.

use crate::analysis::DimensionAnalyzer;
use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_variant_set, output_report};
use crate::reports::AnalysisReport;
use anyhow::Result;
use std::path::Path;

/// Run the analyze command, returning the desired exit code.
pub fn run_analyze(
    path: &Path,
    dimensions: &[String],
    config: &AppConfig,
    quiet: bool,
) -> Result<i32> {
    let set = load_variant_set(path, quiet)?;
    let analyzer = DimensionAnalyzer::new(config.analyzer_options());
    let analysis = analyzer.analyze(&set, dimensions);

    if !quiet {
        tracing::info!(
            "{} of {} dimensions vary",
            analysis.varying().count(),
            analysis.effective_dimensions.len()
        );
    }

    let report = AnalysisReport::new(&set, &analysis, &config.format_options());
    output_report(&report, &config.output, quiet)?;
    Ok(exit_codes::SUCCESS)
}
