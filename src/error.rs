// src/error.rs

//! Unified error handling for the catalog.

use std::fmt;

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, AppError>;

/// Unified application error type.
#[derive(Error, Debug)]
pub enum AppError {
    /// Requested record id is not in the store
    #[error("Record not found: {id}")]
    NotFound { id: String },

    /// Two records share an id at load time
    #[error("Duplicate record id '{id}' at positions {first} and {second}")]
    DuplicateId {
        id: String,
        first: usize,
        second: usize,
    },

    /// A loaded record does not match the expected shape
    #[error("Schema error in record {record}: {message}")]
    Schema { record: String, message: String },

    /// I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing failed
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),
}

impl AppError {
    /// Create a not-found error for the given id.
    pub fn not_found(id: impl Into<String>) -> Self {
        Self::NotFound { id: id.into() }
    }

    /// Create a schema error. `record` identifies the offending entry.
    pub fn schema(record: impl Into<String>, message: impl fmt::Display) -> Self {
        Self::Schema {
            record: record.into(),
            message: message.to_string(),
        }
    }

    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// True for the recoverable "no such record" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_is_recoverable() {
        let err = AppError::not_found("missing-slug");
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Record not found: missing-slug");
    }

    #[test]
    fn test_schema_message_names_record() {
        let err = AppError::schema("index 4", "missing field `title`");
        assert!(!err.is_not_found());
        assert_eq!(
            err.to_string(),
            "Schema error in record index 4: missing field `title`"
        );
    }
}
