//! Pipeline entry points for CLI operations.
//!
//! - `run_validate`: Load config and records, report what was found
//! - `run_info`, `run_get`, `run_related`, `run_list`, `run_search`: Query a loaded catalog
//! - `run_export_index`: Write the keyword index to disk
//! - `run_nav`: Resolve the active navigation trail for a route

pub mod export;
pub mod nav;
pub mod query;
pub mod validate;

pub use export::run_export_index;
pub use nav::run_nav;
pub use query::{run_get, run_info, run_list, run_related, run_search};
pub use validate::run_validate;
