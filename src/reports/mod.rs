//! Report rendering for CLI output.
//!
//! Every report is a serializable view type. JSON and YAML come straight
//! from serde; the summary format is a compact human-readable rendering
//! implemented per report.

mod summary;
mod types;

pub use types::{
    AnalysisReport, DimensionEntry, MatchEntry, NormalizeReport, ResolveReport, SummaryReport,
    ValueEntry,
};

use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Output format for reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Structured JSON output
    Json,
    /// YAML output
    #[value(alias = "yml")]
    Yaml,
    /// Brief human-readable output
    #[default]
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

impl From<serde_yaml::Error> for ReportError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// A report that can be rendered in every [`ReportFormat`].
pub trait Report: Serialize {
    /// Render the human-readable summary.
    fn render_summary(&self) -> Result<String, ReportError>;
}

/// Render a report in the requested format.
pub fn render<R: Report>(report: &R, format: ReportFormat, pretty: bool) -> Result<String, ReportError> {
    match format {
        ReportFormat::Json if pretty => Ok(serde_json::to_string_pretty(report)?),
        ReportFormat::Json => Ok(serde_json::to_string(report)?),
        ReportFormat::Yaml => Ok(serde_yaml::to_string(report)?),
        ReportFormat::Summary => report.render_summary(),
    }
}
