//! Catalogue store
//!
//! Explicitly-owned holder for the current record collection. The store is
//! replaced wholesale on each load; readers hold `Arc` snapshots and never
//! observe a partially updated catalogue.

use std::sync::{Arc, RwLock};

use itertools::Itertools;

use crate::sheet::CanonicalRecord;

#[derive(Default)]
pub struct CatalogueStore {
    inner: RwLock<Arc<Vec<CanonicalRecord>>>,
}

impl CatalogueStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current catalogue snapshot.
    pub fn snapshot(&self) -> Arc<Vec<CanonicalRecord>> {
        self.inner.read().unwrap().clone()
    }

    /// Swap in a freshly loaded catalogue. The only mutator.
    pub fn replace(&self, records: Vec<CanonicalRecord>) {
        *self.inner.write().unwrap() = Arc::new(records);
    }
}

/// Distinct, non-empty category labels in selector order.
///
/// Deduplication is case-sensitive; ordering folds case first with the
/// original label as tie-break, which matches a locale-aware compare for
/// this catalogue's labels.
pub fn categories(records: &[CanonicalRecord]) -> Vec<String> {
    records
        .iter()
        .map(|record| record.category.as_str())
        .filter(|category| !category.is_empty())
        .unique()
        .sorted_by(|a, b| {
            a.to_lowercase()
                .cmp(&b.to_lowercase())
                .then_with(|| a.cmp(b))
        })
        .map(ToOwned::to_owned)
        .collect()
}
