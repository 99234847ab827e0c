//! Summary rendering for shell output.
//!
//! Compact, human-readable text for terminal usage. Columns are padded by
//! display width so `×` and non-Latin values line up.

use super::{
    AnalysisReport, NormalizeReport, Report, ReportError, ResolveReport, SummaryReport,
};
use crate::model::VariantId;
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

const RULE_WIDTH: usize = 40;

fn rule() -> String {
    "─".repeat(RULE_WIDTH)
}

/// Pad `text` with spaces to `width` display columns.
fn pad(text: &str, width: usize) -> String {
    let used = UnicodeWidthStr::width(text);
    let mut out = text.to_string();
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}

fn id_text(id: Option<&VariantId>, index: usize) -> String {
    id.map_or_else(|| format!("#{index}"), ToString::to_string)
}

impl Report for AnalysisReport {
    fn render_summary(&self) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "Variant Dimensions")?;
        writeln!(out, "{}", rule())?;
        writeln!(
            out,
            "Variants: {}  Fingerprint: {}",
            self.variants, self.fingerprint
        )?;
        writeln!(
            out,
            "Dimensions: {}",
            if self.effective_dimensions.is_empty() {
                "(none)".to_string()
            } else {
                self.effective_dimensions.join(", ")
            }
        )?;

        if self.dimensions.is_empty() {
            writeln!(out)?;
            writeln!(out, "No varying dimensions.")?;
            return Ok(out);
        }

        let label_width = self
            .dimensions
            .iter()
            .map(|d| UnicodeWidthStr::width(d.label.as_str()))
            .max()
            .unwrap_or(0);

        writeln!(out)?;
        for dimension in &self.dimensions {
            let marker = if dimension.has_multiple { '*' } else { ' ' };
            let values: Vec<&str> = dimension.values.iter().map(|v| v.display.as_str()).collect();
            writeln!(
                out,
                "{marker} {}  {}",
                pad(&dimension.label, label_width),
                values.join(" | ")
            )?;
        }
        Ok(out)
    }
}

impl Report for ResolveReport {
    fn render_summary(&self) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "Resolve {} = {}", self.dimension, self.value)?;
        writeln!(out, "{}", rule())?;
        writeln!(
            out,
            "Current: {}",
            self.current
                .as_ref()
                .map_or_else(|| "(none)".to_string(), ToString::to_string)
        )?;

        let Some(found) = &self.result else {
            writeln!(out, "NO MATCH")?;
            return Ok(out);
        };

        let compared = found.matched.len() + found.mismatched.len();
        writeln!(
            out,
            "MATCH {} (preserves {} of {compared} dimensions)",
            id_text(found.id.as_ref(), found.index),
            found.score
        )?;

        if self.explain {
            if !found.matched.is_empty() {
                writeln!(out, "  kept:    {}", found.matched.join(", "))?;
            }
            if !found.mismatched.is_empty() {
                writeln!(out, "  changed: {}", found.mismatched.join(", "))?;
            }
        }
        Ok(out)
    }
}

impl Report for NormalizeReport {
    fn render_summary(&self) -> Result<String, ReportError> {
        let mut out = String::new();
        writeln!(out, "Normalized Variants ({})", self.variants.len())?;
        writeln!(out, "{}", rule())?;

        for variant in &self.variants {
            writeln!(out, "{}", id_text(variant.id.as_ref(), variant.position))?;
            let key_width = variant
                .metadata
                .keys()
                .map(UnicodeWidthStr::width)
                .max()
                .unwrap_or(0);
            for (key, value) in variant.metadata.iter() {
                writeln!(out, "  {}  {value}", pad(key, key_width))?;
            }
        }
        Ok(out)
    }
}

impl Report for SummaryReport {
    fn render_summary(&self) -> Result<String, ReportError> {
        let mut out = String::new();
        if self.pills.is_empty() {
            writeln!(out, "(no variants)")?;
            return Ok(out);
        }
        for pill in &self.pills {
            let icons: Vec<String> = pill.icons.iter().map(ToString::to_string).collect();
            if icons.is_empty() {
                writeln!(out, "[{}]", pill.label)?;
            } else {
                writeln!(out, "[{}] {}", icons.join(" "), pill.label)?;
            }
        }
        Ok(out)
    }
}
