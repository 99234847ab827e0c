//! Best-match resolution.
//!
//! When the user picks a new value for one dimension, the resolver chooses
//! among the variants carrying that value the one that keeps as many of the
//! other currently selected values as possible.

use super::{BestMatch, SelectionChange, VariantMatcher};
use crate::model::{NormalizedVariant, ScalarValue, VariantSet};

/// Preserve-the-most-dimensions matcher.
///
/// Scoring counts, for each dimension other than the changed one, whether the
/// candidate's value equals the current variant's. Two absent values are
/// equal. Without a current variant nothing matches, so the first candidate
/// wins. Only a strictly higher score replaces the leader, so ties go to the
/// earliest candidate.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestMatchResolver;

impl VariantMatcher for BestMatchResolver {
    fn find_best_match<'a>(
        &self,
        set: &'a VariantSet,
        change: &SelectionChange,
        current: Option<&NormalizedVariant>,
        dimensions: &[String],
    ) -> Option<BestMatch<'a>> {
        let mut best: Option<BestMatch<'a>> = None;

        for (index, candidate) in set.iter().enumerate() {
            if candidate.value(&change.dimension) != Some(&change.value) {
                continue;
            }

            let (matched, mismatched) =
                compare_dimensions(candidate, current, dimensions, &change.dimension);
            let score = matched.len();
            if best.as_ref().is_some_and(|b| score <= b.score) {
                continue;
            }
            best = Some(BestMatch {
                variant: candidate,
                index,
                score,
                matched,
                mismatched,
            });
        }

        match &best {
            Some(found) => tracing::debug!(
                dimension = %change.dimension,
                value = %change.value,
                index = found.index,
                score = found.score,
                "resolved best match"
            ),
            None => tracing::debug!(
                dimension = %change.dimension,
                value = %change.value,
                "no variant carries the requested value"
            ),
        }

        best
    }

    fn name(&self) -> &'static str {
        "BestMatchResolver"
    }
}

fn compare_dimensions(
    candidate: &NormalizedVariant,
    current: Option<&NormalizedVariant>,
    dimensions: &[String],
    changed: &str,
) -> (Vec<String>, Vec<String>) {
    let mut matched = Vec::new();
    let mut mismatched = Vec::new();
    for dimension in dimensions.iter().filter(|d| d.as_str() != changed) {
        let preserved =
            current.is_some_and(|cur| cur.value(dimension) == candidate.value(dimension));
        if preserved {
            matched.push(dimension.clone());
        } else {
            mismatched.push(dimension.clone());
        }
    }
    (matched, mismatched)
}

/// Resolve the variant to select after `changed_dimension` becomes `new_value`.
///
/// ```
/// use variant_engine::matching::resolve;
/// use variant_engine::model::{ScalarValue, VariantRecord, VariantSet};
///
/// let set = VariantSet::build(&[
///     VariantRecord::new(1).with_viewport_str("1920x1080").with_browser("chrome"),
///     VariantRecord::new(2).with_viewport_str("1920x1080").with_browser("firefox"),
///     VariantRecord::new(3).with_viewport_str("375x812").with_browser("chrome"),
/// ]);
/// let current = set.variants().first();
/// let chosen = resolve(&set, "browser", &ScalarValue::from("firefox"), current, &["viewport", "browser"]);
/// assert_eq!(chosen.map(|v| v.position), Some(1));
/// ```
#[must_use]
pub fn resolve<'a, S: AsRef<str>>(
    set: &'a VariantSet,
    changed_dimension: &str,
    new_value: &ScalarValue,
    current: Option<&NormalizedVariant>,
    all_dimensions: &[S],
) -> Option<&'a NormalizedVariant> {
    let change = SelectionChange::new(changed_dimension, new_value.clone());
    let dimensions: Vec<String> = all_dimensions
        .iter()
        .map(|d| d.as_ref().to_string())
        .collect();
    BestMatchResolver
        .find_best_match(set, &change, current, &dimensions)
        .map(|best| best.variant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::VariantRecord;

    fn dims(keys: &[&str]) -> Vec<String> {
        keys.iter().map(ToString::to_string).collect()
    }

    fn set() -> VariantSet {
        VariantSet::build(&[
            VariantRecord::new(1)
                .with_viewport(1920, 1080)
                .with_browser("chrome")
                .with_metadata("theme", "light"),
            VariantRecord::new(2)
                .with_viewport(375, 812)
                .with_browser("firefox")
                .with_metadata("theme", "light"),
            VariantRecord::new(3)
                .with_viewport(1920, 1080)
                .with_browser("firefox")
                .with_metadata("theme", "dark"),
            VariantRecord::new(4)
                .with_viewport(1920, 1080)
                .with_browser("firefox")
                .with_metadata("theme", "light"),
        ])
    }

    #[test]
    fn test_prefers_most_preserved_dimensions() {
        let set = set();
        let current = set.variants().first();
        let best = BestMatchResolver
            .find_best_match(
                &set,
                &SelectionChange::new("browser", "firefox"),
                current,
                &dims(&["viewport", "browser", "theme"]),
            )
            .expect("match");
        assert_eq!(best.index, 3);
        assert_eq!(best.score, 2);
        assert_eq!(best.matched, dims(&["viewport", "theme"]));
        assert!(best.mismatched.is_empty());
    }

    #[test]
    fn test_tie_goes_to_first_candidate() {
        let set = set();
        let current = set.variants().first();
        let chosen = resolve(
            &set,
            "browser",
            &ScalarValue::from("firefox"),
            current,
            &["browser"],
        );
        assert_eq!(chosen.map(|v| v.position), Some(1));
    }

    #[test]
    fn test_no_candidate_is_none() {
        let set = set();
        let chosen = resolve(
            &set,
            "browser",
            &ScalarValue::from("safari"),
            set.variants().first(),
            &["viewport", "browser"],
        );
        assert!(chosen.is_none());
    }

    #[test]
    fn test_without_current_first_candidate_wins() {
        let set = set();
        let best = BestMatchResolver
            .find_best_match(
                &set,
                &SelectionChange::new("theme", "light"),
                None,
                &dims(&["viewport", "browser", "theme"]),
            )
            .expect("match");
        assert_eq!(best.index, 0);
        assert_eq!(best.score, 0);
        assert_eq!(best.mismatched, dims(&["viewport", "browser"]));
    }

    #[test]
    fn test_absent_values_count_as_equal() {
        let set = VariantSet::build(&[
            VariantRecord::new("a").with_browser("chrome"),
            VariantRecord::new("b")
                .with_browser("firefox")
                .with_metadata("locale", "fr"),
            VariantRecord::new("c").with_browser("firefox"),
        ]);
        let chosen = resolve(
            &set,
            "browser",
            &ScalarValue::from("firefox"),
            set.variants().first(),
            &["browser", "locale"],
        );
        assert_eq!(chosen.map(|v| v.position), Some(2));
    }

    #[test]
    fn test_value_kinds_are_strict() {
        let set = VariantSet::build(&[
            VariantRecord::new("a").with_attribute("scale", 2),
            VariantRecord::new("b").with_attribute("scale", "2"),
        ]);
        let chosen = resolve(&set, "scale", &ScalarValue::from("2"), None, &["scale"]);
        assert_eq!(chosen.map(|v| v.position), Some(1));
    }

    #[test]
    fn test_explanation_text() {
        let set = set();
        let best = BestMatchResolver
            .find_best_match(
                &set,
                &SelectionChange::new("viewport", "375x812"),
                set.variants().first(),
                &dims(&["viewport", "browser", "theme"]),
            )
            .expect("match");
        assert_eq!(best.summary(), "MATCH 2 (preserves 1 of 2 dimensions)");
        assert!(best.detailed().contains("changed: browser"));
    }
}
