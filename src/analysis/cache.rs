//! Memoized dimension analysis.
//!
//! Rendering code tends to re-analyze the same variant set many times.
//! [`AnalysisCache`] keys results on the set's content fingerprint and the
//! explicit dimension list, so identical inputs are analyzed once.

use super::{DimensionAnalyzer, DimensionReport};
use crate::model::{NormalizedVariant, VariantSet};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

/// Entries kept before the cache starts over.
pub const DEFAULT_MAX_ENTRIES: usize = 64;

/// Cache hit/miss counters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

type CacheKey = (u64, Vec<String>);

#[derive(Debug)]
struct CachedReport {
    variants: Vec<NormalizedVariant>,
    report: DimensionReport,
}

impl CachedReport {
    fn build<S: AsRef<str>>(analyzer: &DimensionAnalyzer, set: &VariantSet, explicit: &[S]) -> Self {
        Self {
            variants: set.variants().to_vec(),
            report: analyzer.analyze(set, explicit),
        }
    }
}

/// Caller-owned memo of analyzer results.
///
/// Entries are keyed by fingerprint and explicit dimensions, and a hit is
/// only served when the stored variants equal the queried ones. Once
/// `max_entries` is reached the cache is emptied before the next insert.
#[derive(Debug)]
pub struct AnalysisCache {
    analyzer: DimensionAnalyzer,
    entries: HashMap<CacheKey, CachedReport>,
    max_entries: usize,
    hits: u64,
    misses: u64,
}

impl Default for AnalysisCache {
    fn default() -> Self {
        Self::new(DimensionAnalyzer::default())
    }
}

impl AnalysisCache {
    /// Create a cache around an analyzer.
    #[must_use]
    pub fn new(analyzer: DimensionAnalyzer) -> Self {
        Self {
            analyzer,
            entries: HashMap::new(),
            max_entries: DEFAULT_MAX_ENTRIES,
            hits: 0,
            misses: 0,
        }
    }

    /// Set the entry limit (at least one).
    #[must_use]
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = max_entries.max(1);
        self
    }

    /// Return the cached report for this input, analyzing on a miss.
    pub fn analyze<S: AsRef<str>>(&mut self, set: &VariantSet, explicit: &[S]) -> &DimensionReport {
        let key: CacheKey = (
            set.fingerprint(),
            explicit.iter().map(|s| s.as_ref().to_string()).collect(),
        );

        if self.entries.len() >= self.max_entries && !self.entries.contains_key(&key) {
            self.entries.clear();
        }

        let fingerprint = key.0;
        match self.entries.entry(key) {
            Entry::Occupied(entry) if entry.get().variants.as_slice() == set.variants() => {
                self.hits += 1;
                &entry.into_mut().report
            }
            Entry::Occupied(mut entry) => {
                self.misses += 1;
                tracing::debug!(
                    fingerprint = format_args!("{fingerprint:016x}"),
                    "analysis cache collision"
                );
                entry.insert(CachedReport::build(&self.analyzer, set, explicit));
                &entry.into_mut().report
            }
            Entry::Vacant(entry) => {
                self.misses += 1;
                tracing::debug!(
                    fingerprint = format_args!("{fingerprint:016x}"),
                    "analysis cache miss"
                );
                &entry
                    .insert(CachedReport::build(&self.analyzer, set, explicit))
                    .report
            }
        }
    }

    /// Drop every cached report.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Current counters.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.entries.len(),
        }
    }
}
