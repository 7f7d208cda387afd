// src/models/record.rs

//! Content record and category types.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AppError;
use crate::models::Body;

/// Closed set of topical categories used to group records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Creation,
    Covenant,
    Messianic,
    Prayer,
    Prophecy,
    Salvation,
    Wisdom,
    Worship,
    Ethics,
    Denomination,
    Sermon,
    Culture,
}

impl Category {
    /// Every category, in declaration order.
    pub const ALL: [Category; 12] = [
        Category::Creation,
        Category::Covenant,
        Category::Messianic,
        Category::Prayer,
        Category::Prophecy,
        Category::Salvation,
        Category::Wisdom,
        Category::Worship,
        Category::Ethics,
        Category::Denomination,
        Category::Sermon,
        Category::Culture,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Creation => "creation",
            Category::Covenant => "covenant",
            Category::Messianic => "messianic",
            Category::Prayer => "prayer",
            Category::Prophecy => "prophecy",
            Category::Salvation => "salvation",
            Category::Wisdom => "wisdom",
            Category::Worship => "worship",
            Category::Ethics => "ethics",
            Category::Denomination => "denomination",
            Category::Sermon => "sermon",
            Category::Culture => "culture",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == needle)
            .ok_or_else(|| AppError::validation(format!("Unknown category: {s}")))
    }
}

/// One topical unit of catalog content (a doctrine, a connection, a sermon...).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContentRecord {
    /// Unique, stable slug
    pub id: String,

    /// Grouping tag used for relation lookups
    pub category: Category,

    /// Display title
    pub title: String,

    /// Short display description
    #[serde(default)]
    pub description: String,

    /// Free-text tags, kept in display order
    #[serde(default)]
    pub themes: Vec<String>,

    /// Page-specific payload
    #[serde(default)]
    pub body: Body,
}

impl ContentRecord {
    /// Create a record with no description, themes or body.
    pub fn new(id: impl Into<String>, category: Category, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            description: String::new(),
            themes: Vec::new(),
            body: Body::Empty,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_themes<I, S>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.themes = themes.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_body(mut self, body: Body) -> Self {
        self.body = body;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_round_trips_through_str() {
        for category in Category::ALL {
            assert_eq!(category.as_str().parse::<Category>().unwrap(), category);
        }
        assert_eq!(" Prayer ".parse::<Category>().unwrap(), Category::Prayer);
        assert!("astrology".parse::<Category>().is_err());
    }

    #[test]
    fn test_missing_themes_default_to_empty() {
        let json = r#"{"id": "grace", "category": "salvation", "title": "Grace"}"#;
        let record: ContentRecord = serde_json::from_str(json).unwrap();
        assert!(record.themes.is_empty());
        assert_eq!(record.body, Body::Empty);
    }

    #[test]
    fn test_null_themes_rejected() {
        let json = r#"{"id": "grace", "category": "salvation", "title": "Grace", "themes": null}"#;
        assert!(serde_json::from_str::<ContentRecord>(json).is_err());
    }

    #[test]
    fn test_unknown_category_rejected() {
        let json = r#"{"id": "stars", "category": "astrology", "title": "Stars"}"#;
        assert!(serde_json::from_str::<ContentRecord>(json).is_err());
    }
}
