//! **Dimension analysis and best-match resolution for screenshot variant sets.**
//!
//! A visual-testing run captures the same screen many times: different
//! browsers, viewports, themes, locales, devices. Each capture is a
//! *variant*. `variant-engine` answers the questions a variant picker has to
//! answer:
//!
//! - Which dimensions actually vary across this group, and what are their
//!   values, in a sensible display order?
//! - When the user switches one dimension, which variant should be shown so
//!   that as much of the current selection as possible is kept?
//! - How should a group be summarized in a compact row of pills?
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: typed [`VariantRecord`]s built once from raw JSON, their
//!   flattened [`FlatMetadata`], and the [`VariantSet`] working set.
//! - **[`normalize`]**: folds direct fields, `metadata` and
//!   `metadata.properties` into one flat map with fixed precedence.
//! - **[`dimensions`]**: the registry of known dimensions with their labels,
//!   formatters, comparators and icon rules.
//! - **[`analysis`]**: the [`DimensionAnalyzer`], a caller-owned
//!   [`AnalysisCache`], and the pill [`VariantSummary`].
//! - **[`matching`]**: the [`BestMatchResolver`] and the [`Selection`] it
//!   drives.
//! - **[`format`]**: display helpers for values and labels.
//! - **[`parsers`]**, **[`reports`]**, **[`pipeline`]**, **[`config`]**:
//!   document loading, output rendering and configuration for the CLI.
//!
//! ## Getting Started
//!
//! ```
//! use variant_engine::{DimensionAnalyzer, VariantRecord, VariantSet};
//!
//! let set = VariantSet::build(&[
//!     VariantRecord::new(1).with_browser("chrome").with_viewport(1920, 1080),
//!     VariantRecord::new(2).with_browser("firefox").with_viewport(1920, 1080),
//! ]);
//!
//! let report = DimensionAnalyzer::default().analyze(&set, &[] as &[&str]);
//! let browser = report.get("browser").unwrap();
//! assert!(browser.has_multiple);
//! assert!(!report.get("viewport").unwrap().has_multiple);
//! ```
//!
//! ### Switching one dimension
//!
//! ```
//! use variant_engine::{BestMatchResolver, Selection, SelectionChange, VariantRecord, VariantSet};
//!
//! let set = VariantSet::build(&[
//!     VariantRecord::new("a").with_browser("chrome").with_metadata("theme", "dark"),
//!     VariantRecord::new("b").with_browser("firefox").with_metadata("theme", "light"),
//!     VariantRecord::new("c").with_browser("firefox").with_metadata("theme", "dark"),
//! ]);
//! let dimensions = vec!["browser".to_string(), "theme".to_string()];
//!
//! let mut selection = Selection::new(Some("a".into()));
//! let change = SelectionChange::new("browser", "firefox");
//! let best = selection.apply(&BestMatchResolver, &set, &change, &dimensions);
//! assert_eq!(best.map(|b| b.score), Some(1));
//! assert_eq!(selection.current().map(ToString::to_string).as_deref(), Some("c"));
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions,
    clippy::cast_precision_loss
)]

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dimensions;
pub mod error;
pub mod format;
pub mod matching;
pub mod model;
pub mod normalize;
pub mod parsers;
pub mod pipeline;
pub mod reports;
pub mod utils;

// Re-export main types for convenience
pub use analysis::{
    analyze, AnalysisCache, AnalyzerOptions, DimensionAnalyzer, DimensionReport, DimensionValues,
    Pill, VariantSummary,
};
pub use config::{AppConfig, AppConfigBuilder, ConfigError, ConfigPreset, Validatable};
pub use dimensions::{DimensionConfig, DimensionIcon, DimensionRegistry, KnownDimension};
pub use error::{ErrorContext, OptionContext, Result, VariantError};
pub use format::{format_value, FormatOptions};
pub use matching::{resolve, BestMatch, BestMatchResolver, Selection, SelectionChange, VariantMatcher};
pub use model::{
    FlatMetadata, NormalizedVariant, ScalarValue, VariantId, VariantRecord, VariantSet,
};
pub use normalize::normalize;
pub use parsers::{parse_variants, parse_variants_str, DocumentFormat};
pub use reports::{ReportFormat, Report};
