//! Record sources for the catalog.
//!
//! Records are read exactly once, before the catalog is published to readers.
//! A failed read aborts startup; there is no partial catalog.
//!
//! ## Storage Layout
//!
//! ```text
//! storage/
//! ├── config.toml           # Catalog configuration
//! ├── catalog.json          # Content records (JSON array)
//! └── index.json            # Exported keyword index
//! ```

pub mod local;
pub mod memory;

use async_trait::async_trait;

use crate::error::Result;
use crate::models::ContentRecord;

// Re-export for convenience
pub use local::JsonFileSource;
pub use memory::StaticSource;

/// Trait for record source backends.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Human-readable origin, used in log output.
    fn describe(&self) -> String;

    /// Read every record, in source order.
    async fn load_records(&self) -> Result<Vec<ContentRecord>>;
}
