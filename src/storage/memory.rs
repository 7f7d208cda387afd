//! In-process record source for literal content arrays.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ContentRecord;
use crate::storage::RecordSource;

/// Records defined in code.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<ContentRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<ContentRecord>) -> Self {
        Self { records }
    }
}

impl From<Vec<ContentRecord>> for StaticSource {
    fn from(records: Vec<ContentRecord>) -> Self {
        Self::new(records)
    }
}

#[async_trait]
impl RecordSource for StaticSource {
    fn describe(&self) -> String {
        format!("static ({} records)", self.records.len())
    }

    async fn load_records(&self) -> Result<Vec<ContentRecord>> {
        Ok(self.records.clone())
    }
}
