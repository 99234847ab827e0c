//! Summary command handler.
//!
//! Implements the `summary` subcommand: the pill row describing what a group
//! of variants covers.

use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_variant_set, output_report};
use crate::reports::SummaryReport;
use anyhow::Result;
use std::path::Path;

/// Run the summary command, returning the desired exit code.
pub fn run_summary(path: &Path, config: &AppConfig, quiet: bool) -> Result<i32> {
    let set = load_variant_set(path, quiet)?;
    let report = SummaryReport::new(&set);
    tracing::debug!(pills = report.pills.len(), "built variant summary");
    output_report(&report, &config.output, quiet)?;
    Ok(exit_codes::SUCCESS)
}
