// src/lib.rs

//! Static content catalog library
//!
//! Typed topical records (doctrines, scripture connections, sermons...) loaded
//! once, then queried by id, by relation, by category, theme or keyword.

pub mod catalog;
pub mod config;
pub mod error;
pub mod models;
pub mod nav;
pub mod pipeline;
pub mod storage;
pub mod utils;
