//! Local filesystem record source.
//!
//! Reads a JSON array of records once. Each element is decoded on its own so
//! a schema violation names the offending record: by `id` when it carries a
//! usable slug, by array index otherwise.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tokio::io::AsyncWriteExt;

use crate::catalog::is_valid_slug;
use crate::error::{AppError, Result};
use crate::models::ContentRecord;
use crate::storage::RecordSource;

/// JSON file record source.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Label used in schema errors for the element at `index`.
fn record_label(index: usize, value: &Value) -> String {
    match value.get("id").and_then(Value::as_str) {
        Some(id) if is_valid_slug(id) => format!("id \"{id}\""),
        _ => format!("index {index}"),
    }
}

/// Decode a JSON document into records, failing on the first bad element.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<ContentRecord>> {
    let root: Value = serde_json::from_slice(bytes)?;
    let Value::Array(items) = root else {
        return Err(AppError::schema(
            "root",
            "expected a JSON array of records",
        ));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            let label = record_label(index, &value);
            serde_json::from_value(value).map_err(|e| AppError::schema(label, e))
        })
        .collect()
}

#[async_trait]
impl RecordSource for JsonFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn load_records(&self) -> Result<Vec<ContentRecord>> {
        log::debug!("Reading records from {}", self.path.display());
        let bytes = tokio::fs::read(&self.path).await?;
        parse_records(&bytes)
    }
}

/// Ensure parent directory exists.
async fn ensure_dir(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }
    Ok(())
}

/// Write bytes atomically (write to temp, then rename).
pub async fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_dir(path).await?;

    let tmp = path.with_extension("tmp");
    let mut file = tokio::fs::File::create(&tmp).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    drop(file);

    tokio::fs::rename(&tmp, path).await?;
    Ok(())
}

/// Write pretty-printed JSON atomically.
pub async fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let bytes = serde_json::to_vec_pretty(value)?;
    write_bytes(path, &bytes).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_parse_records() {
        let json = br#"[
            {"id": "lords-prayer", "category": "prayer", "title": "The Lord's Prayer",
             "themes": ["petition", "kingdom"]},
            {"id": "genesis-1", "category": "creation", "title": "In the Beginning"}
        ]"#;
        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].category, Category::Prayer);
        assert_eq!(records[0].themes, vec!["petition", "kingdom"]);
        assert!(records[1].themes.is_empty());
    }

    #[test]
    fn test_schema_error_names_id() {
        let json = br#"[
            {"id": "ok", "category": "prayer", "title": "Fine"},
            {"id": "broken", "category": "prayer", "title": "Bad", "themes": null}
        ]"#;
        match parse_records(json).unwrap_err() {
            AppError::Schema { record, .. } => assert_eq!(record, "id \"broken\""),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_schema_error_falls_back_to_index() {
        let json = br#"[
            {"id": "ok", "category": "prayer", "title": "Fine"},
            {"id": 42, "category": "prayer", "title": "Numeric id"}
        ]"#;
        match parse_records(json).unwrap_err() {
            AppError::Schema { record, .. } => assert_eq!(record, "index 1"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_array_root_rejected() {
        let err = parse_records(br#"{"id": "x"}"#).unwrap_err();
        assert!(matches!(err, AppError::Schema { .. }));
    }

    #[tokio::test]
    async fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.json");
        std::fs::write(
            &path,
            r#"[{"id": "psalm-23", "category": "worship", "title": "Psalm 23"}]"#,
        )
        .unwrap();

        let source = JsonFileSource::new(&path);
        let records = source.load_records().await.unwrap();
        assert_eq!(records[0].id, "psalm-23");
    }

    #[tokio::test]
    async fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = JsonFileSource::new(dir.path().join("nope.json"));
        assert!(matches!(
            source.load_records().await.unwrap_err(),
            AppError::Io(_)
        ));
    }

    #[tokio::test]
    async fn test_write_json_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out/nested/index.json");
        write_json(&path, &vec!["a", "b"]).await.unwrap();

        let written: Vec<String> =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(written, vec!["a", "b"]);
        assert!(!path.with_extension("tmp").exists());
    }
}
