//! Keyword index for catalog search.
//!
//! Builds a static inverted index mapping keywords to record ids. It backs
//! [`Catalog::search`](crate::catalog::Catalog::search) and can be exported
//! as `index.json` for client-side search.
//!
//! > Example: `{"covenant": ["abrahamic-covenant", "new-covenant"], "psalms": ["psalm-23"]}`

use std::collections::{BTreeMap, BTreeSet, HashSet};

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::models::ContentRecord;

/// Configuration for index generation.
#[derive(Debug, Clone, Copy)]
pub struct IndexConfig {
    /// Minimum token length in characters (default: 2)
    pub min_token_length: usize,
    /// Maximum distinct tokens per record (default: 64)
    pub max_tokens_per_record: usize,
    /// Include themes alongside title and description
    pub index_themes: bool,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            min_token_length: 2,
            max_tokens_per_record: 64,
            index_themes: true,
        }
    }
}

/// Inverted index for keyword search.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct KeywordIndex {
    /// Version for cache busting
    pub version: u32,
    /// Total number of indexed records
    pub record_count: usize,
    /// Total number of unique tokens
    pub token_count: usize,
    /// keyword -> sorted record ids
    pub index: BTreeMap<String, Vec<String>>,
}

impl KeywordIndex {
    /// Ids of records containing every token. Empty when `tokens` is empty.
    pub fn matching(&self, tokens: &[String]) -> HashSet<&str> {
        let mut lists = tokens.iter().map(|t| self.index.get(t));

        let mut result: HashSet<&str> = match lists.next() {
            Some(Some(ids)) => ids.iter().map(String::as_str).collect(),
            _ => return HashSet::new(),
        };

        for ids in lists {
            match ids {
                Some(ids) => {
                    let next: HashSet<&str> = ids.iter().map(String::as_str).collect();
                    result.retain(|id| next.contains(id));
                }
                None => return HashSet::new(),
            }
        }

        result
    }
}

/// Builder for constructing a keyword index.
pub struct IndexBuilder {
    config: IndexConfig,
    index: BTreeMap<String, BTreeSet<String>>,
    record_count: usize,
}

impl IndexBuilder {
    pub fn new() -> Self {
        Self::with_config(IndexConfig::default())
    }

    pub fn with_config(config: IndexConfig) -> Self {
        Self {
            config,
            index: BTreeMap::new(),
            record_count: 0,
        }
    }

    /// Add a record to the index.
    pub fn add_record(&mut self, record: &ContentRecord) {
        self.record_count += 1;

        let mut tokens = tokenize(&record.title, &self.config);
        tokens.extend(tokenize(&record.description, &self.config));
        if self.config.index_themes {
            for theme in &record.themes {
                tokens.extend(tokenize(theme, &self.config));
            }
        }

        let mut seen = HashSet::new();
        tokens.retain(|t| seen.insert(t.clone()));
        tokens.truncate(self.config.max_tokens_per_record);

        for token in tokens {
            self.index.entry(token).or_default().insert(record.id.clone());
        }
    }

    pub fn add_records<'a>(&mut self, records: impl IntoIterator<Item = &'a ContentRecord>) {
        for record in records {
            self.add_record(record);
        }
    }

    /// Build the final keyword index.
    pub fn build(self) -> KeywordIndex {
        let token_count = self.index.len();
        let index = self
            .index
            .into_iter()
            .map(|(k, v)| (k, v.into_iter().collect()))
            .collect();

        KeywordIndex {
            version: 1,
            record_count: self.record_count,
            token_count,
            index,
        }
    }
}

impl Default for IndexBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Split text into normalized keywords.
pub fn tokenize(text: &str, config: &IndexConfig) -> Vec<String> {
    text.to_lowercase()
        .unicode_words()
        .filter(|word| word.chars().count() >= config.min_token_length)
        .filter(|word| !is_stopword(word))
        .map(String::from)
        .collect()
}

fn is_stopword(word: &str) -> bool {
    const STOPWORDS: &[&str] = &[
        "the", "a", "an", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had",
        "do", "does", "did", "will", "would", "could", "should", "may", "might", "can", "must",
        "shall", "of", "to", "in", "for", "on", "with", "at", "by", "from", "as", "or", "and",
        "but", "if", "then", "so", "than", "this", "that", "its", "it", "into", "about",
    ];
    STOPWORDS.contains(&word)
}

/// Build a keyword index from records.
pub fn build_index<'a>(records: impl IntoIterator<Item = &'a ContentRecord>) -> KeywordIndex {
    let mut builder = IndexBuilder::new();
    builder.add_records(records);
    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    fn sample(id: &str, title: &str, themes: &[&str]) -> ContentRecord {
        ContentRecord::new(id, Category::Covenant, title)
            .with_description("A study of the covenant")
            .with_themes(themes.iter().copied())
    }

    #[test]
    fn test_build_index() {
        let records = vec![
            sample("abrahamic", "Abrahamic Covenant", &["promise"]),
            sample("mosaic", "Mosaic Law", &["torah"]),
            sample("new", "New Covenant", &["promise", "grace"]),
        ];
        let index = build_index(&records);

        assert_eq!(index.record_count, 3);
        assert!(index.token_count > 0);

        let promise = index.index.get("promise").unwrap();
        assert_eq!(promise, &vec!["abrahamic".to_string(), "new".to_string()]);

        // description is shared by all three
        assert_eq!(index.index.get("study").unwrap().len(), 3);
    }

    #[test]
    fn test_stopwords_and_short_tokens() {
        let tokens = tokenize("The Sermon on a Mount", &IndexConfig::default());
        assert_eq!(tokens, vec!["sermon", "mount"]);
    }

    #[test]
    fn test_token_cap_counts_distinct() {
        let config = IndexConfig {
            max_tokens_per_record: 2,
            ..IndexConfig::default()
        };
        let mut builder = IndexBuilder::with_config(config);
        builder.add_record(&ContentRecord::new("r", Category::Wisdom, "grace grace mercy peace"));
        let index = builder.build();
        assert!(index.index.contains_key("grace"));
        assert!(index.index.contains_key("mercy"));
        assert!(!index.index.contains_key("peace"));
    }

    #[test]
    fn test_matching_intersects() {
        let records = vec![
            sample("abrahamic", "Abrahamic Covenant", &["promise"]),
            sample("new", "New Covenant", &["grace"]),
        ];
        let index = build_index(&records);

        let hits = index.matching(&["covenant".into(), "grace".into()]);
        assert_eq!(hits.into_iter().collect::<Vec<_>>(), vec!["new"]);
        assert!(index.matching(&["covenant".into(), "missing".into()]).is_empty());
        assert!(index.matching(&[]).is_empty());
    }
}
