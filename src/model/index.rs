//! Normalized variant sets.
//!
//! [`VariantSet`] normalizes every record once and keeps a content
//! fingerprint, so repeated analysis and resolution calls on the same set
//! avoid re-flattening metadata and can be memoized by content.
//!
//! # Example
//!
//! ```
//! use variant_engine::model::{VariantRecord, VariantSet};
//!
//! let set = VariantSet::build(&[
//!     VariantRecord::new("a").with_browser("chrome").with_viewport(1280, 720),
//!     VariantRecord::new("b").with_browser("firefox").with_viewport(1280, 720),
//! ]);
//!
//! let b = set.find_by_str("b").expect("variant b");
//! assert_eq!(b.value("browser").map(ToString::to_string).as_deref(), Some("firefox"));
//! ```

use super::{NormalizedVariant, ScalarValue, VariantId, VariantRecord};
use crate::normalize::normalize;
use crate::utils::content_hash;

/// An ordered list of normalized variants plus its content fingerprint.
#[derive(Debug, Clone)]
#[must_use]
pub struct VariantSet {
    variants: Vec<NormalizedVariant>,
    fingerprint: u64,
}

impl VariantSet {
    /// Normalize every record, preserving input order.
    ///
    /// This is an O(n · k) operation where k is the number of keys per record.
    pub fn build(records: &[VariantRecord]) -> Self {
        let variants: Vec<NormalizedVariant> = records
            .iter()
            .enumerate()
            .map(|(position, record)| NormalizedVariant {
                id: record.id.clone(),
                position,
                metadata: normalize(record),
            })
            .collect();
        let fingerprint = fingerprint(&variants);
        tracing::debug!(
            variants = variants.len(),
            fingerprint = format_args!("{fingerprint:016x}"),
            "built variant set"
        );
        Self {
            variants,
            fingerprint,
        }
    }

    /// Variants in input order.
    #[must_use]
    pub fn variants(&self) -> &[NormalizedVariant] {
        &self.variants
    }

    /// Content fingerprint of ids and flattened metadata.
    #[must_use]
    pub const fn fingerprint(&self) -> u64 {
        self.fingerprint
    }

    /// Number of variants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variants.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Iterate variants in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, NormalizedVariant> {
        self.variants.iter()
    }

    /// Find a variant by id.
    #[must_use]
    pub fn find(&self, id: &VariantId) -> Option<&NormalizedVariant> {
        self.variants.iter().find(|v| v.id.as_ref() == Some(id))
    }

    /// Find a variant whose id renders as `text`.
    #[must_use]
    pub fn find_by_str(&self, text: &str) -> Option<&NormalizedVariant> {
        self.variants
            .iter()
            .find(|v| v.id.as_ref().is_some_and(|id| id.matches_str(text)))
    }
}

impl<'a> IntoIterator for &'a VariantSet {
    type Item = &'a NormalizedVariant;
    type IntoIter = std::slice::Iter<'a, NormalizedVariant>;

    fn into_iter(self) -> Self::IntoIter {
        self.variants.iter()
    }
}

/// Hash ids and metadata with explicit separators and type tags so that
/// `"1"` and `1` never collide.
fn fingerprint(variants: &[NormalizedVariant]) -> u64 {
    let mut buf = Vec::new();
    for variant in variants {
        match &variant.id {
            Some(VariantId::Number(n)) => buf.extend_from_slice(format!("#n{n}").as_bytes()),
            Some(VariantId::Text(s)) => buf.extend_from_slice(format!("#s{s}").as_bytes()),
            None => buf.extend_from_slice(b"#-"),
        }
        for (key, value) in variant.metadata.iter() {
            buf.push(0x1f);
            buf.extend_from_slice(key.as_bytes());
            buf.push(0x1e);
            let tag = match value {
                ScalarValue::Text(_) => b's',
                ScalarValue::Number(_) => b'n',
                ScalarValue::Bool(_) => b'b',
            };
            buf.push(tag);
            buf.extend_from_slice(value.to_string().as_bytes());
        }
        buf.push(0x1d);
    }
    content_hash(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<VariantRecord> {
        vec![
            VariantRecord::new("a").with_browser("chrome"),
            VariantRecord::new("b").with_browser("firefox"),
        ]
    }

    #[test]
    fn test_build_preserves_order_and_positions() {
        let set = VariantSet::build(&records());
        assert_eq!(set.len(), 2);
        assert_eq!(set.variants()[1].position, 1);
        assert_eq!(set.variants()[1].id, Some(VariantId::from("b")));
    }

    #[test]
    fn test_fingerprint_is_content_based() {
        let a = VariantSet::build(&records());
        let b = VariantSet::build(&records());
        assert_eq!(a.fingerprint(), b.fingerprint());

        let mut changed = records();
        changed[1] = VariantRecord::new("b").with_browser("safari");
        let c = VariantSet::build(&changed);
        assert_ne!(a.fingerprint(), c.fingerprint());
    }

    #[test]
    fn test_fingerprint_distinguishes_value_kinds() {
        let text = VariantSet::build(&[VariantRecord::new("a").with_attribute("retina", "2")]);
        let number = VariantSet::build(&[VariantRecord::new("a").with_attribute("retina", 2)]);
        assert_ne!(text.fingerprint(), number.fingerprint());
    }

    #[test]
    fn test_find() {
        let set = VariantSet::build(&records());
        assert!(set.find(&VariantId::from("a")).is_some());
        assert!(set.find(&VariantId::from("z")).is_none());
        assert!(set.find_by_str("b").is_some());
    }
}
