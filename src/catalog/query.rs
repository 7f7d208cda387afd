// src/catalog/query.rs

//! Query handle over a loaded store.

use std::sync::Arc;

use crate::catalog::index::{IndexBuilder, IndexConfig, KeywordIndex, tokenize};
use crate::catalog::{CatalogStore, RelatedPolicy, normalize_theme};
use crate::error::{AppError, Result};
use crate::models::{Category, ContentRecord};
use crate::storage::RecordSource;

/// Shared, read-only catalog.
///
/// Cloning is cheap; every clone reads the same store without locking.
#[derive(Debug, Clone)]
pub struct Catalog {
    store: Arc<CatalogStore>,
    index: Arc<KeywordIndex>,
    index_config: IndexConfig,
    policy: RelatedPolicy,
}

impl Catalog {
    /// Wrap a loaded store and build its keyword index.
    pub fn new(store: CatalogStore, policy: RelatedPolicy) -> Self {
        let index_config = IndexConfig::default();
        let mut builder = IndexBuilder::with_config(index_config);
        builder.add_records(store.iter());

        Self {
            store: Arc::new(store),
            index: Arc::new(builder.build()),
            index_config,
            policy,
        }
    }

    /// Read records from `source` once and build the catalog.
    pub async fn from_source<S>(source: &S, policy: RelatedPolicy) -> Result<Self>
    where
        S: RecordSource + ?Sized,
    {
        let records = source.load_records().await?;
        let store = CatalogStore::load(records)?;
        log::info!(
            "Loaded {} records from {}",
            store.len(),
            source.describe()
        );
        Ok(Self::new(store, policy))
    }

    /// Record with the given id, or `NotFound`.
    pub fn get_by_id(&self, id: &str) -> Result<&ContentRecord> {
        self.store.get(id)
    }

    /// Up to `limit` records sharing themes or category with `id`, best first.
    pub fn get_related(&self, id: &str, limit: usize) -> Result<Vec<&ContentRecord>> {
        let position = self
            .store
            .position(id)
            .ok_or_else(|| AppError::not_found(id))?;
        Ok(self.policy.rank(&self.store, position, limit))
    }

    /// [`get_related`](Self::get_related) with the policy's default limit.
    pub fn related(&self, id: &str) -> Result<Vec<&ContentRecord>> {
        self.get_related(id, self.policy.default_limit)
    }

    /// Every record, in insertion order.
    pub fn list_all(&self) -> &[ContentRecord] {
        self.store.records()
    }

    pub fn list_by_category(&self, category: Category) -> Vec<&ContentRecord> {
        self.store.iter().filter(|r| r.category == category).collect()
    }

    /// Records tagged with `theme`, compared case-insensitively.
    pub fn find_by_theme(&self, theme: &str) -> Vec<&ContentRecord> {
        let needle = normalize_theme(theme);
        self.store
            .iter()
            .enumerate()
            .filter(|(pos, _)| self.store.theme_set(*pos).contains(&needle))
            .map(|(_, r)| r)
            .collect()
    }

    /// Records whose title, description or themes contain every query keyword.
    pub fn search(&self, text: &str) -> Vec<&ContentRecord> {
        let tokens = tokenize(text, &self.index_config);
        let hits = self.index.matching(&tokens);
        if hits.is_empty() {
            return Vec::new();
        }
        self.store
            .iter()
            .filter(|r| hits.contains(r.id.as_str()))
            .collect()
    }

    pub fn store(&self) -> &CatalogStore {
        &self.store
    }

    pub fn index(&self) -> &KeywordIndex {
        &self.index
    }

    pub fn policy(&self) -> RelatedPolicy {
        self.policy
    }
}
