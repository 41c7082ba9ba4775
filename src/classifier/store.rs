//! The frequency store: the whole learned state of the classifier.

use std::collections::BTreeMap;

use ahash::AHashMap;

use crate::error::{BayesError, Result};

/// Stem and category counters accumulated from training documents.
///
/// Category-keyed maps are ordered so that categories are always enumerated
/// in the same order. Counters only ever grow.
///
/// For a store built by training (or from a consistent initial state):
/// - `stem_total(s)` equals the sum of `stem_count(c, s)` over all categories;
/// - a category has stem counts iff it has a document count.
///
/// Caller-supplied state is taken as is; [`validate`](Self::validate) checks
/// these rules on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyStore {
    stem_totals: AHashMap<String, u64>,
    stem_counts_by_category: BTreeMap<String, AHashMap<String, u64>>,
    document_counts_by_category: BTreeMap<String, u64>,
}

fn increment(counts: &mut AHashMap<String, u64>, key: &str) {
    match counts.get_mut(key) {
        Some(count) => *count += 1,
        None => {
            counts.insert(key.to_string(), 1);
        }
    }
}

impl FrequencyStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from previously accumulated counters, without validation.
    pub fn from_parts<T, C, S, D>(
        stem_totals: T,
        stem_counts_by_category: C,
        document_counts_by_category: D,
    ) -> Self
    where
        T: IntoIterator<Item = (String, u64)>,
        C: IntoIterator<Item = (String, S)>,
        S: IntoIterator<Item = (String, u64)>,
        D: IntoIterator<Item = (String, u64)>,
    {
        FrequencyStore {
            stem_totals: stem_totals.into_iter().collect(),
            stem_counts_by_category: stem_counts_by_category
                .into_iter()
                .map(|(category, stems)| (category, stems.into_iter().collect()))
                .collect(),
            document_counts_by_category: document_counts_by_category.into_iter().collect(),
        }
    }

    /// Split the store into its three mappings.
    #[allow(clippy::type_complexity)]
    pub fn into_parts(
        self,
    ) -> (
        AHashMap<String, u64>,
        BTreeMap<String, AHashMap<String, u64>>,
        BTreeMap<String, u64>,
    ) {
        (
            self.stem_totals,
            self.stem_counts_by_category,
            self.document_counts_by_category,
        )
    }

    /// Count one occurrence of `stem` under `category`.
    ///
    /// Creates the category's stem map on first use. The document counter is
    /// bumped separately with [`bump_document_count`](Self::bump_document_count).
    pub fn record(&mut self, category: &str, stem: &str) {
        increment(&mut self.stem_totals, stem);

        let category_stems = match self.stem_counts_by_category.get_mut(category) {
            Some(stems) => stems,
            None => self
                .stem_counts_by_category
                .entry(category.to_string())
                .or_default(),
        };
        increment(category_stems, stem);
    }

    /// Bump the document counter of `category`, creating it at zero first.
    pub fn bump_document_count(&mut self, category: &str) {
        match self.document_counts_by_category.get_mut(category) {
            Some(count) => *count += 1,
            None => {
                self.document_counts_by_category
                    .insert(category.to_string(), 1);
            }
        }
    }

    /// Occurrences of `stem` across every category (0 if never seen).
    pub fn stem_total(&self, stem: &str) -> u64 {
        self.stem_totals.get(stem).copied().unwrap_or(0)
    }

    /// Occurrences of `stem` under `category` (0 if never seen there).
    pub fn stem_count(&self, category: &str, stem: &str) -> u64 {
        self.stem_counts_by_category
            .get(category)
            .and_then(|stems| stems.get(stem))
            .copied()
            .unwrap_or(0)
    }

    /// Document counter of `category` (0 if unknown).
    pub fn document_count(&self, category: &str) -> u64 {
        self.document_counts_by_category
            .get(category)
            .copied()
            .unwrap_or(0)
    }

    /// Sum of every category's document counter, computed on each call.
    pub fn total_document_count(&self) -> u64 {
        self.document_counts_by_category.values().sum()
    }

    /// Known categories in ascending order.
    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.document_counts_by_category.keys().map(String::as_str)
    }

    /// Number of known categories.
    pub fn category_count(&self) -> usize {
        self.document_counts_by_category.len()
    }

    /// Number of distinct stems seen in training.
    pub fn vocabulary_size(&self) -> usize {
        self.stem_totals.len()
    }

    /// Stem counters of one category.
    pub fn category_stems(&self, category: &str) -> Option<&AHashMap<String, u64>> {
        self.stem_counts_by_category.get(category)
    }

    /// Total stem counters.
    pub fn stem_totals(&self) -> &AHashMap<String, u64> {
        &self.stem_totals
    }

    /// Document counters by category.
    pub fn document_counts(&self) -> &BTreeMap<String, u64> {
        &self.document_counts_by_category
    }

    /// True when nothing has been trained.
    pub fn is_empty(&self) -> bool {
        self.stem_totals.is_empty()
            && self.stem_counts_by_category.is_empty()
            && self.document_counts_by_category.is_empty()
    }

    /// Check the store's consistency rules.
    ///
    /// Fails with [`BayesError::InvalidState`] on the first violation found.
    pub fn validate(&self) -> Result<()> {
        for category in self.stem_counts_by_category.keys() {
            if !self.document_counts_by_category.contains_key(category) {
                return Err(BayesError::invalid_state(format!(
                    "category '{category}' has stem counts but no document count"
                )));
            }
        }
        for category in self.document_counts_by_category.keys() {
            if !self.stem_counts_by_category.contains_key(category) {
                return Err(BayesError::invalid_state(format!(
                    "category '{category}' has a document count but no stem counts"
                )));
            }
        }

        let mut summed: AHashMap<&str, u64> = AHashMap::new();
        for stems in self.stem_counts_by_category.values() {
            for (stem, count) in stems {
                *summed.entry(stem.as_str()).or_insert(0) += count;
            }
        }

        for (stem, count) in &summed {
            let total = self.stem_total(stem);
            if total != *count {
                return Err(BayesError::invalid_state(format!(
                    "stem '{stem}' totals {total} but categories sum to {count}"
                )));
            }
        }
        for (stem, total) in &self.stem_totals {
            if *total > 0 && !summed.contains_key(stem.as_str()) {
                return Err(BayesError::invalid_state(format!(
                    "stem '{stem}' totals {total} but no category contains it"
                )));
            }
        }

        Ok(())
    }
}
