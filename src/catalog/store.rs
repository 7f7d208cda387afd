// src/catalog/store.rs

//! Immutable in-memory record store.
//!
//! Built once from a sequence of records and read-only afterwards. Lookup by
//! id is O(1); iteration follows insertion order, which is also the tie-break
//! order for related-record ranking.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use sha2::{Digest, Sha256};

use crate::error::{AppError, Result};
use crate::models::ContentRecord;

static SLUG: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").ok());

/// Whether `id` is a lowercase, hyphen-separated slug.
pub fn is_valid_slug(id: &str) -> bool {
    SLUG.as_ref().is_some_and(|re| re.is_match(id))
}

/// Normalize a theme for matching. Display keeps the original text.
pub fn normalize_theme(theme: &str) -> String {
    theme.trim().to_lowercase()
}

/// Check the parts of a record that serde cannot express.
///
/// Errors name the record by id, or by index when the id itself is malformed.
fn check_record(position: usize, record: &ContentRecord) -> Result<()> {
    if !is_valid_slug(&record.id) {
        return Err(AppError::schema(
            format!("index {position}"),
            format!("id '{}' is not a valid slug", record.id),
        ));
    }
    let label = format!("id \"{}\"", record.id);
    if record.title.trim().is_empty() {
        return Err(AppError::schema(label, "title is blank"));
    }
    if let Some(i) = record.themes.iter().position(|t| t.trim().is_empty()) {
        return Err(AppError::schema(label, format!("theme {i} is blank")));
    }
    Ok(())
}

/// Write-once collection of content records.
#[derive(Debug)]
pub struct CatalogStore {
    records: Vec<ContentRecord>,
    positions: HashMap<String, usize>,
    /// Normalized theme set per record, parallel to `records`
    themes: Vec<HashSet<String>>,
    fingerprint: String,
    loaded_at: DateTime<Utc>,
}

impl CatalogStore {
    /// Build a store, failing on the first malformed record or duplicate id.
    pub fn load(records: Vec<ContentRecord>) -> Result<Self> {
        let mut positions: HashMap<String, usize> = HashMap::with_capacity(records.len());
        let mut themes: Vec<HashSet<String>> = Vec::with_capacity(records.len());
        let mut hasher = Sha256::new();

        for (position, record) in records.iter().enumerate() {
            check_record(position, record)?;

            if let Some(&first) = positions.get(&record.id) {
                return Err(AppError::DuplicateId {
                    id: record.id.clone(),
                    first,
                    second: position,
                });
            }
            positions.insert(record.id.clone(), position);

            themes.push(record.themes.iter().map(|t| normalize_theme(t)).collect());
            hasher.update(serde_json::to_vec(record)?);
        }

        log::debug!("Catalog store loaded with {} records", records.len());

        Ok(Self {
            records,
            positions,
            themes,
            fingerprint: hex::encode(hasher.finalize()),
            loaded_at: Utc::now(),
        })
    }

    /// Exact lookup by id.
    pub fn get(&self, id: &str) -> Result<&ContentRecord> {
        self.position(id)
            .map(|pos| &self.records[pos])
            .ok_or_else(|| AppError::not_found(id))
    }

    /// Insertion index of a record.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[ContentRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &ContentRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Normalized theme set of the record at `position`.
    pub(crate) fn theme_set(&self, position: usize) -> &HashSet<String> {
        &self.themes[position]
    }

    /// SHA-256 over the serialized records, in order.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn loaded_at(&self) -> DateTime<Utc> {
        self.loaded_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn record(id: &str) -> ContentRecord {
        ContentRecord::new(id, Category::Prayer, "Title")
    }

    #[test]
    fn test_slug_validation() {
        assert!(is_valid_slug("lords-prayer"));
        assert!(is_valid_slug("psalm-23"));
        assert!(!is_valid_slug("Lords-Prayer"));
        assert!(!is_valid_slug("double--dash"));
        assert!(!is_valid_slug("-leading"));
        assert!(!is_valid_slug(""));
    }

    #[test]
    fn test_load_and_get() {
        let store = CatalogStore::load(vec![record("a"), record("b")]).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get("b").unwrap().id, "b");
        assert_eq!(store.position("b"), Some(1));
        assert!(store.get("zzz").unwrap_err().is_not_found());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = CatalogStore::load(vec![record("a"), record("b"), record("a")]).unwrap_err();
        match err {
            AppError::DuplicateId { id, first, second } => {
                assert_eq!(id, "a");
                assert_eq!(first, 0);
                assert_eq!(second, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_malformed_id_reported_by_index() {
        let err = CatalogStore::load(vec![record("ok"), record("Not A Slug")]).unwrap_err();
        match err {
            AppError::Schema { record, .. } => assert_eq!(record, "index 1"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_blank_theme_reported_by_id() {
        let bad = record("bad").with_themes(["grace", "  "]);
        let err = CatalogStore::load(vec![bad]).unwrap_err();
        match err {
            AppError::Schema { record, message } => {
                assert_eq!(record, "id \"bad\"");
                assert!(message.contains("theme 1"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_themes_normalized_for_matching() {
        let store = CatalogStore::load(vec![record("a").with_themes([" Worship", "PRAISE"])]).unwrap();
        let themes = store.theme_set(0);
        assert!(themes.contains("worship"));
        assert!(themes.contains("praise"));
        // Display order and casing untouched
        assert_eq!(store.get("a").unwrap().themes, vec![" Worship", "PRAISE"]);
    }

    #[test]
    fn test_fingerprint_tracks_content() {
        let one = CatalogStore::load(vec![record("a")]).unwrap();
        let same = CatalogStore::load(vec![record("a")]).unwrap();
        let other = CatalogStore::load(vec![record("b")]).unwrap();
        assert_eq!(one.fingerprint(), same.fingerprint());
        assert_ne!(one.fingerprint(), other.fingerprint());
        assert_eq!(one.fingerprint().len(), 64);
    }

    #[test]
    fn test_empty_store() {
        let store = CatalogStore::load(vec![]).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.iter().count(), 0);
    }
}
