//! Resolve command handler.
//!
//! Implements the `resolve` subcommand: pick the variant to show after one
//! dimension changes, keeping as much of the current selection as possible.

use crate::analysis::DimensionAnalyzer;
use crate::config::AppConfig;
use crate::matching::{BestMatchResolver, Selection, SelectionChange};
use crate::model::{ScalarValue, VariantSet};
use crate::pipeline::{exit_codes, load_variant_set, output_report};
use crate::reports::ResolveReport;
use anyhow::{bail, Result};
use std::path::PathBuf;

/// Arguments of the `resolve` subcommand.
#[derive(Debug, Clone, Default)]
pub struct ResolveArgs {
    /// Variant document
    pub path: PathBuf,
    /// Dimension being changed
    pub dimension: String,
    /// New value, as typed
    pub value: String,
    /// Id of the currently selected variant
    pub current: Option<String>,
    /// Dimensions to compare; the effective dimensions when unset
    pub dimensions: Option<Vec<String>>,
    /// Include kept/changed dimensions in the summary
    pub explain: bool,
}

/// Run the resolve command, returning the desired exit code.
///
/// Returns [`exit_codes::NO_MATCH`] when no variant carries the value.
#[allow(clippy::needless_pass_by_value)]
pub fn run_resolve(args: ResolveArgs, config: &AppConfig, quiet: bool) -> Result<i32> {
    let set = load_variant_set(&args.path, quiet)?;

    let mut selection = Selection::default();
    if let Some(raw) = &args.current {
        let Some(variant) = set.find_by_str(raw) else {
            bail!("No variant with id '{raw}' in {}", args.path.display());
        };
        if let Some(id) = &variant.id {
            selection.select(id.clone());
        }
    }

    let dimensions = match &args.dimensions {
        Some(dims) => dims.clone(),
        None => DimensionAnalyzer::new(config.analyzer_options())
            .effective_dimensions(&set, &[args.dimension.as_str()]),
    };

    let change = SelectionChange::new(
        args.dimension.as_str(),
        cli_value(&set, &args.dimension, &args.value),
    );
    let previous = selection.current().cloned();
    let best = selection.apply(&BestMatchResolver, &set, &change, &dimensions);

    let exit_code = if best.is_some() {
        exit_codes::SUCCESS
    } else {
        if !quiet {
            tracing::warn!(
                "No variant has {} = {}",
                change.dimension,
                change.value
            );
        }
        exit_codes::NO_MATCH
    };

    let report = ResolveReport::new(
        &change,
        previous.as_ref(),
        &dimensions,
        best.as_ref(),
        args.explain,
    );
    output_report(&report, &config.output, quiet)?;
    Ok(exit_code)
}

/// Interpret a value typed on the command line.
///
/// The first value of `dimension` in the set whose text form equals `raw`
/// wins, so `--value 2` selects a numeric `2` when the data has one and the
/// string `"2"` otherwise.
#[must_use]
pub fn cli_value(set: &VariantSet, dimension: &str, raw: &str) -> ScalarValue {
    set.iter()
        .filter_map(|variant| variant.value(dimension))
        .find(|value| value.to_string() == raw)
        .cloned()
        .unwrap_or_else(|| ScalarValue::from(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VariantRecord;

    #[test]
    fn test_cli_value_prefers_data_kind() {
        let set = VariantSet::build(&[
            VariantRecord::new(1).with_attribute("scale", 2),
            VariantRecord::new(2).with_attribute("retina", true),
        ]);
        assert_eq!(cli_value(&set, "scale", "2"), ScalarValue::from(2));
        assert_eq!(cli_value(&set, "retina", "true"), ScalarValue::from(true));
        assert_eq!(cli_value(&set, "scale", "3"), ScalarValue::from("3"));
    }
}
