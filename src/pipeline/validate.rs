// src/pipeline/validate.rs

use std::path::Path;

use crate::config::load_all;
use crate::error::Result;
use crate::utils::log;

/// Validate configuration and record data using `load_all`.
pub async fn run_validate(base_path: &Path) -> Result<()> {
    log::header("Validating catalog");

    match load_all(base_path).await {
        Ok((config, catalog)) => {
            log::success("Configuration OK");
            log::sub_item(&format!(
                "records file: {}",
                config.records_path(base_path).display()
            ));
            log::sub_item(&format!("related limit: {}", config.catalog.related_limit));
            log::sub_item(&format!("category bonus: {}", config.catalog.category_bonus));
            log::sub_item(&format!(
                "navigation entries: {}",
                config.navigation.items.len()
            ));

            log::success("Records OK");
            log::sub_item(&format!("records: {}", catalog.store().len()));
            log::sub_item(&format!("keywords: {}", catalog.index().token_count));
            Ok(())
        }
        Err(e) => {
            log::error(&format!("Validation failed: {e}"));
            Err(e)
        }
    }
}
