//! Application configuration structures.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};
use crate::nav::NavItem;

/// Root application configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Record source and relation settings
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Console output settings
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Header navigation menu
    #[serde(default)]
    pub navigation: NavConfig,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.catalog.records_file.as_os_str().is_empty() {
            return Err(AppError::validation("catalog.records_file is empty"));
        }
        if self.catalog.related_limit == 0 {
            return Err(AppError::validation("catalog.related_limit must be > 0"));
        }
        if self.catalog.category_bonus == 0 {
            return Err(AppError::validation("catalog.category_bonus must be > 0"));
        }
        for locale in &self.navigation.locales {
            if locale.is_empty() || locale.contains('/') {
                return Err(AppError::validation(format!(
                    "navigation.locales contains invalid entry '{locale}'"
                )));
            }
        }
        validate_nav_items(&self.navigation.items)
    }

    /// Resolve the records file against a base directory.
    pub fn records_path(&self, base: &Path) -> PathBuf {
        base.join(&self.catalog.records_file)
    }
}

fn validate_nav_items(items: &[NavItem]) -> Result<()> {
    for item in items {
        if !item.href.starts_with('/') {
            return Err(AppError::validation(format!(
                "navigation item '{}' has non-absolute href '{}'",
                item.label, item.href
            )));
        }
        validate_nav_items(&item.children)?;
    }
    Ok(())
}

/// Record source and relation scoring settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON records file, relative to the storage directory
    #[serde(default = "defaults::records_file")]
    pub records_file: PathBuf,

    /// Default number of related records returned
    #[serde(default = "defaults::related_limit")]
    pub related_limit: usize,

    /// Score added when two records share a category
    #[serde(default = "defaults::category_bonus")]
    pub category_bonus: usize,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            records_file: defaults::records_file(),
            related_limit: defaults::related_limit(),
            category_bonus: defaults::category_bonus(),
        }
    }
}

/// Console output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// One of "debug", "info", "warn", "error"
    #[serde(default = "defaults::log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: defaults::log_level(),
        }
    }
}

/// Header navigation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    /// Locale prefixes stripped from paths before matching (e.g. "en" in "/en/theology")
    #[serde(default = "defaults::locales")]
    pub locales: Vec<String>,

    /// Top-level menu entries
    #[serde(default = "defaults::nav_items")]
    pub items: Vec<NavItem>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            locales: defaults::locales(),
            items: defaults::nav_items(),
        }
    }
}

mod defaults {
    use std::path::PathBuf;

    use crate::nav::NavItem;

    // Catalog defaults
    pub fn records_file() -> PathBuf {
        PathBuf::from("catalog.json")
    }
    pub fn related_limit() -> usize {
        3
    }
    pub fn category_bonus() -> usize {
        2
    }

    // Logging defaults
    pub fn log_level() -> String {
        "info".into()
    }

    // Navigation defaults
    pub fn locales() -> Vec<String> {
        vec!["en".into(), "es".into(), "fr".into(), "de".into()]
    }

    pub fn nav_items() -> Vec<NavItem> {
        vec![
            NavItem::new("Home", "/"),
            NavItem::new("Denominations", "/denominations"),
            NavItem::new("Theology", "/theology").with_children(vec![
                NavItem::new("Salvation", "/theology/salvation"),
                NavItem::new("Trinity", "/theology/trinity"),
                NavItem::new("Prophecy", "/theology/prophecy"),
            ]),
            NavItem::new("Scripture", "/scripture").with_children(vec![
                NavItem::new("Bible", "/scripture/bible"),
                NavItem::new("Cross-Text Connections", "/scripture/connections"),
            ]),
            NavItem::new("Sermons", "/sermons"),
            NavItem::new("Culture", "/culture"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validate_default_config_ok() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn validate_rejects_zero_related_limit() {
        let mut config = Config::default();
        config.catalog.related_limit = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_relative_nav_href() {
        let mut config = Config::default();
        config.navigation.items[2]
            .children
            .push(NavItem::new("Grace", "theology/grace"));
        assert!(config.validate().is_err());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [catalog]
            related_limit = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.catalog.related_limit, 5);
        assert_eq!(config.catalog.category_bonus, 2);
        assert_eq!(config.catalog.records_file, PathBuf::from("catalog.json"));
        assert_eq!(config.logging.level, "info");
        assert!(!config.navigation.items.is_empty());
    }

    #[test]
    fn load_or_default_falls_back() {
        let config = Config::load_or_default("/definitely/not/here.toml");
        assert_eq!(config.catalog.related_limit, 3);
    }
}
