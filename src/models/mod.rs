// src/models/mod.rs

//! Domain models for the catalog.
//!
//! This module contains the record types loaded into the store and the
//! application configuration.

mod body;
mod config;
mod record;

// Re-export all public types
pub use body::{Body, DoctrinePoint, Institution, Passage, ScriptureReference, Section};
pub use config::{CatalogConfig, Config, LoggingConfig, NavConfig};
pub use record::{Category, ContentRecord};
