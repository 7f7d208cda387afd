// src/utils/log.rs

//! Console report formatting for CLI output.
//!
//! Diagnostics go through the `log` facade; this module only renders the
//! human-facing reports (`info`, `validate`, query results) with timestamps.

use std::sync::OnceLock;

use chrono::Local;

use crate::models::ContentRecord;

/// Report verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

impl Level {
    fn as_str(&self) -> &'static str {
        match self {
            Level::Debug => "DEBUG",
            Level::Info => "INFO",
            Level::Warn => "WARN",
            Level::Error => "ERROR",
        }
    }

    /// Parse a level name; unknown names mean `Info`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "debug" => Level::Debug,
            "warn" | "warning" => Level::Warn,
            "error" => Level::Error,
            _ => Level::Info,
        }
    }
}

static LEVEL: OnceLock<Level> = OnceLock::new();

/// Set the report level once; later calls are ignored.
pub fn init(level: &str) {
    let _ = LEVEL.set(Level::parse(level));
}

fn enabled(level: Level) -> bool {
    level >= LEVEL.get().copied().unwrap_or(Level::Info)
}

fn line(level: Level, message: &str) -> String {
    let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
    format!("[{}] [{}] {}", timestamp, level.as_str(), message)
}

fn emit(level: Level, message: &str) {
    if !enabled(level) {
        return;
    }
    if level >= Level::Warn {
        eprintln!("{}", line(level, message));
    } else {
        println!("{}", line(level, message));
    }
}

pub fn info(message: &str) {
    emit(Level::Info, message);
}

pub fn error(message: &str) {
    emit(Level::Error, message);
}

/// Info line prefixed with a check mark.
pub fn success(message: &str) {
    emit(Level::Info, &format!("✓ {message}"));
}

/// Boxed section title.
pub fn header(title: &str) {
    let border = "═".repeat(60);
    emit(Level::Info, &border);
    emit(Level::Info, &format!("  {title}"));
    emit(Level::Info, &border);
}

/// Indented detail line.
pub fn sub_item(message: &str) {
    emit(Level::Info, &format!("    {message}"));
}

/// Titled key/value block.
pub fn summary(title: &str, items: &[(&str, String)]) {
    emit(Level::Info, &format!("[SUMMARY] {title}"));
    for (key, value) in items {
        sub_item(&format!("{key}: {value}"));
    }
}

/// One-line listing of a record: `id [category] title`.
pub fn record(record: &ContentRecord) {
    sub_item(&format_record(record));
}

pub fn format_record(record: &ContentRecord) -> String {
    format!("{} [{}] {}", record.id, record.category, record.title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_level_ordering() {
        assert!(Level::Debug < Level::Info);
        assert!(Level::Info < Level::Warn);
        assert!(Level::Warn < Level::Error);
    }

    #[test]
    fn test_level_parse() {
        assert_eq!(Level::parse("debug"), Level::Debug);
        assert_eq!(Level::parse(" WARNING "), Level::Warn);
        assert_eq!(Level::parse("unknown"), Level::Info);
    }

    #[test]
    fn test_format_record() {
        let record = ContentRecord::new("psalm-23", Category::Worship, "The Lord is my Shepherd");
        assert_eq!(
            format_record(&record),
            "psalm-23 [worship] The Lord is my Shepherd"
        );
    }
}
