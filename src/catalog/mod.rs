//! Static content catalog.
//!
//! - `store`: write-once record collection with O(1) id lookup
//! - `related`: theme/category overlap scoring for "related topics"
//! - `index`: keyword index backing search
//! - `query`: the shared [`Catalog`] handle pages query against

pub mod index;
pub mod query;
pub mod related;
pub mod store;

pub use index::{IndexBuilder, IndexConfig, KeywordIndex, build_index};
pub use query::Catalog;
pub use related::RelatedPolicy;
pub use store::{CatalogStore, is_valid_slug, normalize_theme};
