// src/nav.rs

//! Header navigation helpers.
//!
//! Active-link highlighting is a pure function of the current route and the
//! link target; nothing here holds per-request state.
//!
//! ```text
//! current: /en/theology/salvation?tab=2
//!   link "/"                      -> inactive (root matches only itself)
//!   link "/theology"              -> active   (segment prefix)
//!   link "/theology/salvation"    -> active   (exact)
//!   link "/theo"                  -> inactive (not a segment boundary)
//! ```

use serde::{Deserialize, Serialize};

use crate::models::NavConfig;

/// One entry in the header menu.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavItem>,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(mut self, children: Vec<NavItem>) -> Self {
        self.children = children;
        self
    }
}

/// Split a route into path segments, dropping query, fragment, empty
/// segments and a leading locale segment.
fn segments<'a>(path: &'a str, locales: &[String]) -> Vec<&'a str> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    let mut parts: Vec<&str> = path[..end].split('/').filter(|s| !s.is_empty()).collect();
    if let Some(first) = parts.first() {
        if locales.iter().any(|l| l == first) {
            parts.remove(0);
        }
    }
    parts
}

/// Whether `link_path` should be highlighted while viewing `current_path`.
pub fn is_active(current_path: &str, link_path: &str) -> bool {
    is_active_localized(current_path, link_path, &[])
}

/// Like [`is_active`], but strips a leading segment found in `locales` from
/// both paths first.
pub fn is_active_localized(current_path: &str, link_path: &str, locales: &[String]) -> bool {
    let current = segments(current_path, locales);
    let link = segments(link_path, locales);

    if link.is_empty() {
        return current.is_empty();
    }
    current.len() >= link.len() && current[..link.len()] == link[..]
}

/// Static header menu resolved against the current route.
#[derive(Debug, Clone)]
pub struct NavMenu {
    items: Vec<NavItem>,
    locales: Vec<String>,
}

impl NavMenu {
    pub fn new(items: Vec<NavItem>, locales: Vec<String>) -> Self {
        Self { items, locales }
    }

    pub fn from_config(config: &NavConfig) -> Self {
        Self::new(config.items.clone(), config.locales.clone())
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Menu entries from the top level down to the deepest active entry.
    ///
    /// When several siblings are active, the most specific href wins.
    pub fn active_trail(&self, current_path: &str) -> Vec<&NavItem> {
        let mut trail = Vec::new();
        let mut level = self.items.as_slice();

        loop {
            let best = level
                .iter()
                .filter(|item| is_active_localized(current_path, &item.href, &self.locales))
                .max_by_key(|item| segments(&item.href, &self.locales).len());

            match best {
                Some(item) => {
                    trail.push(item);
                    level = item.children.as_slice();
                }
                None => break,
            }
        }

        trail
    }
}
