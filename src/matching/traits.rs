//! Trait definitions for best-match strategies.

use crate::model::{NormalizedVariant, ScalarValue, VariantSet};
use serde::Serialize;
use std::fmt;

/// A request to switch one dimension to a new value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChange {
    /// Dimension being changed
    pub dimension: String,
    /// Value the user picked
    pub value: ScalarValue,
}

impl SelectionChange {
    /// Create a change request.
    pub fn new(dimension: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        Self {
            dimension: dimension.into(),
            value: value.into(),
        }
    }
}

/// The variant chosen for a [`SelectionChange`], with its score breakdown.
#[derive(Debug, Clone, Serialize)]
#[must_use]
pub struct BestMatch<'a> {
    /// Chosen variant
    pub variant: &'a NormalizedVariant,
    /// Position in the set
    pub index: usize,
    /// Number of preserved dimensions
    pub score: usize,
    /// Dimensions whose value was preserved
    pub matched: Vec<String>,
    /// Dimensions whose value differs from the current variant
    pub mismatched: Vec<String>,
}

impl BestMatch<'_> {
    /// One-line summary.
    #[must_use]
    pub fn summary(&self) -> String {
        let id = self
            .variant
            .id
            .as_ref()
            .map_or_else(|| format!("#{}", self.index), ToString::to_string);
        let compared = self.matched.len() + self.mismatched.len();
        format!(
            "MATCH {id} (preserves {} of {compared} dimensions)",
            self.score
        )
    }

    /// Multi-line explanation listing kept and changed dimensions.
    #[must_use]
    pub fn detailed(&self) -> String {
        let mut lines = vec![self.summary()];
        if !self.matched.is_empty() {
            lines.push(format!("  kept:    {}", self.matched.join(", ")));
        }
        if !self.mismatched.is_empty() {
            lines.push(format!("  changed: {}", self.mismatched.join(", ")));
        }
        lines.join("\n")
    }
}

impl fmt::Display for BestMatch<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.summary())
    }
}

/// Strategy for picking a variant when one dimension changes.
///
/// ```ignore
/// use variant_engine::matching::{BestMatchResolver, SelectionChange, VariantMatcher};
///
/// let change = SelectionChange::new("browser", "firefox");
/// let best = BestMatchResolver.find_best_match(&set, &change, current, &dimensions);
/// ```
pub trait VariantMatcher {
    /// Pick the candidate for `change`, comparing against `current` over
    /// `dimensions`. `None` when no variant has the requested value.
    fn find_best_match<'a>(
        &self,
        set: &'a VariantSet,
        change: &SelectionChange,
        current: Option<&NormalizedVariant>,
        dimensions: &[String],
    ) -> Option<BestMatch<'a>>;

    /// Name for logging.
    fn name(&self) -> &'static str {
        "VariantMatcher"
    }
}
