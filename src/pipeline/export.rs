// src/pipeline/export.rs

use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::storage::local::write_json;
use crate::utils::log;

/// Write the catalog's keyword index as JSON.
pub async fn run_export_index(catalog: &Catalog, output: &Path) -> Result<()> {
    let index = catalog.index();
    write_json(output, index).await?;

    log::success(&format!(
        "Keyword index: {} tokens over {} records written to {}",
        index.token_count,
        index.record_count,
        output.display()
    ));
    Ok(())
}
