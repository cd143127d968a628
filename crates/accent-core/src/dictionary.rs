use crate::types::{Entry, WordType};

/// Dictionary lookup operations
pub trait Dictionary: Send + Sync {
    /// Ranked lookup, optionally restricted to one word type
    fn look_up(&self, query: &str, word_type: Option<WordType>) -> Vec<Entry>;

    /// Search dictionary with options
    fn search(&self, query: &str, options: &SearchOptions) -> Vec<Entry>;

    /// Get entry by its stable id
    fn get_by_id(&self, id: &str) -> Option<&Entry>;

    /// Get dictionary metadata
    fn metadata(&self) -> DictionaryMetadata;
}

#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub word_type: Option<WordType>,
    pub max_results: Option<usize>,
    /// Also match reading/alternate forms after headwords
    pub include_readings: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            word_type: None,
            max_results: None,
            include_readings: true,
        }
    }
}

impl SearchOptions {
    pub fn with_word_type(word_type: Option<WordType>) -> Self {
        Self {
            word_type,
            ..Self::default()
        }
    }
}

/// How an entry matched a query, best first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchType {
    Exact,
    Prefix,
    ReadingExact,
    ReadingPrefix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryMetadata {
    pub name: String,
    pub version: u32,
    pub language: String,
    pub entry_count: usize,
}
