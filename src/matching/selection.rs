//! Current-selection holder.

use super::{BestMatch, SelectionChange, VariantMatcher};
use crate::model::{NormalizedVariant, VariantId, VariantSet};

/// The currently selected variant id.
///
/// Applying a change moves the selection to the resolved variant; when
/// nothing matches, the selection stays where it was.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    current: Option<VariantId>,
}

impl Selection {
    /// Start from an optional selected id.
    #[must_use]
    pub const fn new(current: Option<VariantId>) -> Self {
        Self { current }
    }

    /// Selected id, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&VariantId> {
        self.current.as_ref()
    }

    /// The selected variant within `set`, if it is still present.
    #[must_use]
    pub fn current_variant<'a>(&self, set: &'a VariantSet) -> Option<&'a NormalizedVariant> {
        self.current.as_ref().and_then(|id| set.find(id))
    }

    /// Select a variant directly.
    pub fn select(&mut self, id: VariantId) {
        self.current = Some(id);
    }

    /// Resolve `change` against the current selection and move to the result.
    ///
    /// Returns the match, or `None` (selection unchanged) when no variant
    /// carries the requested value. A matched variant without an id cannot be
    /// selected and also leaves the selection unchanged, but is still returned.
    pub fn apply<'a, M: VariantMatcher>(
        &mut self,
        matcher: &M,
        set: &'a VariantSet,
        change: &SelectionChange,
        dimensions: &[String],
    ) -> Option<BestMatch<'a>> {
        let current = self.current_variant(set);
        let best = matcher.find_best_match(set, change, current, dimensions)?;
        if let Some(id) = &best.variant.id {
            self.current = Some(id.clone());
        }
        Some(best)
    }
}
