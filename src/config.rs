// src/config.rs

//! Configuration and catalog loading utilities.
//!
//! Configuration is forgiving (missing or broken files fall back to defaults);
//! the catalog is not: any load error aborts before a catalog exists.

use std::path::Path;

use crate::catalog::{Catalog, RelatedPolicy};
use crate::error::{AppError, Result};
use crate::models::Config;
use crate::storage::JsonFileSource;

/// Load configuration from `{base_path}/config.toml`, falling back to defaults.
pub fn load_config(base_path: &Path) -> Config {
    Config::load_or_default(base_path.join("config.toml"))
}

/// Load the catalog described by `config`, resolving paths against `base_path`.
pub async fn load_catalog(config: &Config, base_path: &Path) -> Result<Catalog> {
    let source = JsonFileSource::new(config.records_path(base_path));
    Catalog::from_source(&source, RelatedPolicy::from(&config.catalog)).await
}

/// Load and validate both config and catalog.
pub async fn load_all(base_path: &Path) -> Result<(Config, Catalog)> {
    let config = load_config(base_path);
    config
        .validate()
        .map_err(|e| AppError::config(format!("Invalid configuration: {e}")))?;

    let catalog = load_catalog(&config, base_path).await?;
    Ok((config, catalog))
}
