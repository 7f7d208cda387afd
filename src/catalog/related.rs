// src/catalog/related.rs

//! Related-record scoring.
//!
//! score = |themes(source) ∩ themes(candidate)| + (same category ? bonus : 0)
//!
//! Candidates scoring zero are dropped. Ranking uses a stable sort, so equal
//! scores keep insertion order and results are deterministic.

use crate::catalog::CatalogStore;
use crate::models::{CatalogConfig, ContentRecord};

/// Scoring weights and default result size for related lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RelatedPolicy {
    pub category_bonus: usize,
    pub default_limit: usize,
}

impl Default for RelatedPolicy {
    fn default() -> Self {
        Self {
            category_bonus: 2,
            default_limit: 3,
        }
    }
}

impl From<&CatalogConfig> for RelatedPolicy {
    fn from(config: &CatalogConfig) -> Self {
        Self {
            category_bonus: config.category_bonus,
            default_limit: config.related_limit,
        }
    }
}

impl RelatedPolicy {
    /// Score `candidate` against `source`, both given by insertion position.
    pub fn score(&self, store: &CatalogStore, source: usize, candidate: usize) -> usize {
        let shared = store
            .theme_set(source)
            .intersection(store.theme_set(candidate))
            .count();

        let records = store.records();
        if records[source].category == records[candidate].category {
            shared + self.category_bonus
        } else {
            shared
        }
    }

    /// Top `limit` records related to the record at `source`, best first.
    pub fn rank<'a>(
        &self,
        store: &'a CatalogStore,
        source: usize,
        limit: usize,
    ) -> Vec<&'a ContentRecord> {
        if limit == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(usize, usize)> = (0..store.len())
            .filter(|&pos| pos != source)
            .map(|pos| (pos, self.score(store, source, pos)))
            .filter(|&(_, score)| score > 0)
            .collect();

        // Stable: ties stay in insertion order
        scored.sort_by(|a, b| b.1.cmp(&a.1));

        let records = store.records();
        scored
            .into_iter()
            .take(limit)
            .map(|(pos, _)| &records[pos])
            .collect()
    }
}
