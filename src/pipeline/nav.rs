// src/pipeline/nav.rs

use crate::models::Config;
use crate::nav::NavMenu;
use crate::utils::log;

/// Print the active menu trail for `path`.
pub fn run_nav(config: &Config, path: &str) {
    let menu = NavMenu::from_config(&config.navigation);
    let trail = menu.active_trail(path);

    if trail.is_empty() {
        log::info(&format!("No active menu entry for {path}"));
        return;
    }

    let labels: Vec<&str> = trail.iter().map(|item| item.label.as_str()).collect();
    log::info(&format!("{path}: {}", labels.join(" > ")));
    for item in trail {
        log::sub_item(&format!("{} -> {}", item.label, item.href));
    }
}
