//! Normalize command handler.

use crate::config::AppConfig;
use crate::pipeline::{exit_codes, load_variant_set, output_report};
use crate::reports::NormalizeReport;
use anyhow::Result;
use std::path::Path;

/// Print the flat metadata of every variant.
pub fn run_normalize(path: &Path, config: &AppConfig, quiet: bool) -> Result<i32> {
    let set = load_variant_set(path, quiet)?;
    output_report(&NormalizeReport::new(&set), &config.output, quiet)?;
    Ok(exit_codes::SUCCESS)
}
