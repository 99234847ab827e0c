//! Value comparators for dimension sorting.
//!
//! All comparators are total orders suitable for a stable `sort_by`.

use crate::model::ScalarValue;
use crate::normalize::parse_viewport;
use std::cmp::Ordering;

/// Case-insensitive alphabetical order, lowercase first on ties.
#[must_use]
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

/// Pixel area of a `"WxH"` string; zero when it does not parse.
#[must_use]
pub fn viewport_area(viewport: &str) -> u64 {
    parse_viewport(viewport).map_or(0, |(w, h)| u64::from(w) * u64::from(h))
}

/// Largest viewport first.
#[must_use]
pub fn viewport_cmp(a: &str, b: &str) -> Ordering {
    viewport_area(b).cmp(&viewport_area(a))
}

/// `light` first, then alphabetical.
#[must_use]
pub fn theme_cmp(a: &str, b: &str) -> Ordering {
    match (a == "light", b == "light") {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => natural_cmp(a, b),
    }
}

/// Order for dimensions without a registered comparator.
///
/// Lexicographic by display text, so `10` sorts before `9`. Values that
/// render alike (`"2"` and `2`) are ordered text, number, bool.
#[must_use]
pub fn fallback_cmp(a: &ScalarValue, b: &ScalarValue) -> Ordering {
    a.to_string()
        .cmp(&b.to_string())
        .then_with(|| kind_rank(a).cmp(&kind_rank(b)))
}

const fn kind_rank(value: &ScalarValue) -> u8 {
    match value {
        ScalarValue::Text(_) => 0,
        ScalarValue::Number(_) => 1,
        ScalarValue::Bool(_) => 2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sorted(mut values: Vec<&str>, cmp: fn(&str, &str) -> Ordering) -> Vec<&str> {
        values.sort_by(|a, b| cmp(a, b));
        values
    }

    #[test]
    fn test_viewport_descending_area() {
        assert_eq!(
            sorted(vec!["375x812", "1920x1080", "1280x720"], viewport_cmp),
            vec!["1920x1080", "1280x720", "375x812"]
        );
    }

    #[test]
    fn test_unparseable_viewport_sorts_last() {
        assert_eq!(
            sorted(vec!["desktop", "375x812"], viewport_cmp),
            vec!["375x812", "desktop"]
        );
    }

    #[test]
    fn test_theme_light_first() {
        assert_eq!(
            sorted(vec!["dark", "sepia", "light", "contrast"], theme_cmp),
            vec!["light", "contrast", "dark", "sepia"]
        );
    }

    #[test]
    fn test_natural_case_insensitive() {
        assert_eq!(
            sorted(vec!["Safari", "chrome", "Edge"], natural_cmp),
            vec!["chrome", "Edge", "Safari"]
        );
        assert_eq!(natural_cmp("a", "A"), Ordering::Less);
    }

    #[test]
    fn test_fallback_lexicographic() {
        let mut values = vec![
            ScalarValue::from(9),
            ScalarValue::from(10),
            ScalarValue::from(100),
        ];
        values.sort_by(fallback_cmp);
        assert_eq!(
            values,
            vec![
                ScalarValue::from(10),
                ScalarValue::from(100),
                ScalarValue::from(9)
            ]
        );
    }

    #[test]
    fn test_fallback_mixed_kinds() {
        let mut values = vec![
            ScalarValue::from(true),
            ScalarValue::from(2),
            ScalarValue::from("true"),
            ScalarValue::from("2"),
            ScalarValue::from("1a"),
        ];
        values.sort_by(fallback_cmp);
        assert_eq!(
            values,
            vec![
                ScalarValue::from("1a"),
                ScalarValue::from("2"),
                ScalarValue::from(2),
                ScalarValue::from("true"),
                ScalarValue::from(true),
            ]
        );
        assert_eq!(
            fallback_cmp(&ScalarValue::from(2), &ScalarValue::Number(2.0)),
            Ordering::Equal
        );
    }
}
