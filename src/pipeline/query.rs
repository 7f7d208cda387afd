// src/pipeline/query.rs

//! CLI entry points that read from a loaded catalog.

use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::error::Result;
use crate::models::{Category, ContentRecord};
use crate::utils::log;

/// Print a summary of the loaded catalog.
pub fn run_info(catalog: &Catalog) {
    let store = catalog.store();

    let mut by_category: BTreeMap<Category, usize> = BTreeMap::new();
    for record in store.iter() {
        *by_category.entry(record.category).or_default() += 1;
    }

    log::summary(
        "Catalog",
        &[
            ("records", store.len().to_string()),
            ("keywords", catalog.index().token_count.to_string()),
            ("fingerprint", store.fingerprint().to_string()),
            ("loaded at", store.loaded_at().to_rfc3339()),
        ],
    );

    let counts: Vec<(&str, String)> = by_category
        .iter()
        .map(|(category, count)| (category.as_str(), count.to_string()))
        .collect();
    log::summary("Categories", &counts);
}

/// Print one record as JSON.
pub fn run_get(catalog: &Catalog, id: &str) -> Result<()> {
    match catalog.get_by_id(id) {
        Ok(record) => {
            println!("{}", serde_json::to_string_pretty(record)?);
            Ok(())
        }
        Err(e) => {
            if e.is_not_found() {
                log::error(&format!("No record with id '{id}'"));
            }
            Err(e)
        }
    }
}

/// Print records related to `id`.
pub fn run_related(catalog: &Catalog, id: &str, limit: Option<usize>) -> Result<()> {
    let limit = limit.unwrap_or(catalog.policy().default_limit);
    let related = catalog.get_related(id, limit)?;

    log::info(&format!("{} related to '{id}'", related.len()));
    print_records(&related);
    Ok(())
}

/// Print all records, optionally restricted to one category.
pub fn run_list(catalog: &Catalog, category: Option<Category>) {
    let records: Vec<&ContentRecord> = match category {
        Some(category) => catalog.list_by_category(category),
        None => catalog.list_all().iter().collect(),
    };

    log::info(&format!("{} records", records.len()));
    print_records(&records);
}

/// Print records matching a keyword query.
pub fn run_search(catalog: &Catalog, query: &str) {
    let hits = catalog.search(query);
    log::info(&format!("{} matches for \"{query}\"", hits.len()));
    print_records(&hits);
}

fn print_records(records: &[&ContentRecord]) {
    for record in records {
        log::record(record);
    }
}
