use std::collections::HashSet;

use accent_core::dictionary::{Dictionary, DictionaryMetadata, MatchType, SearchOptions};
use accent_core::preprocess::normalize_key;
use accent_core::{Entry, WordType};

use crate::lexicon::{KeyIndex, Lexicon, TypeIndex, reading_key};

impl Lexicon {
    /// Ranked lookup: exact headword, headword prefix, exact reading, reading
    /// prefix. Without a filter, groups follow `WordType::ALL`.
    pub fn look_up(&self, query: &str, word_type: Option<WordType>) -> Vec<Entry> {
        self.search(query, &SearchOptions::with_word_type(word_type))
    }

    pub fn search(&self, query: &str, options: &SearchOptions) -> Vec<Entry> {
        self.ranked(query, options)
            .into_iter()
            .map(|(_, entry)| entry.clone())
            .collect()
    }

    /// Matches with the tier each entry was found at. Word-type groups come
    /// first; tiers rank entries inside a group.
    pub fn ranked(&self, query: &str, options: &SearchOptions) -> Vec<(MatchType, &Entry)> {
        let key = normalize_key(query);
        if key.is_empty() {
            return Vec::new();
        }
        let reading = reading_key(query);

        let word_types = match options.word_type {
            Some(word_type) => vec![word_type],
            None => WordType::ALL.to_vec(),
        };

        let mut results = Vec::new();
        for word_type in word_types {
            let Some(group) = self.group(word_type) else {
                continue;
            };
            for (tier, pos) in rank_group(group, &key, &reading, options.include_readings) {
                results.push((tier, self.entry_at(pos)));
            }
        }

        if let Some(max) = options.max_results {
            results.truncate(max);
        }

        tracing::debug!("Lookup {:?} matched {} entries", query, results.len());
        results
    }
}

fn rank_group(
    group: &TypeIndex,
    key: &str,
    reading: &str,
    include_readings: bool,
) -> Vec<(MatchType, usize)> {
    let mut tiers = vec![
        (MatchType::Exact, exact(&group.headwords, key)),
        (MatchType::Prefix, prefix(&group.headwords, key)),
    ];
    if include_readings {
        tiers.push((MatchType::ReadingExact, exact(&group.readings, reading)));
        tiers.push((MatchType::ReadingPrefix, prefix(&group.readings, reading)));
    }

    let mut seen = HashSet::new();
    let mut ranked = Vec::new();
    for (tier, mut positions) in tiers {
        // Dataset order breaks ties inside a tier
        positions.sort_unstable();
        positions.dedup();
        for pos in positions {
            if seen.insert(pos) {
                ranked.push((tier, pos));
            }
        }
    }

    ranked
}

fn exact(index: &KeyIndex, key: &str) -> Vec<usize> {
    index.get(key).cloned().unwrap_or_default()
}

fn prefix(index: &KeyIndex, key: &str) -> Vec<usize> {
    index
        .range(key.to_string()..)
        .take_while(|(candidate, _)| candidate.starts_with(key))
        .filter(|(candidate, _)| candidate.as_str() != key)
        .flat_map(|(_, positions)| positions.iter().copied())
        .collect()
}

impl Dictionary for Lexicon {
    fn look_up(&self, query: &str, word_type: Option<WordType>) -> Vec<Entry> {
        Lexicon::look_up(self, query, word_type)
    }

    fn search(&self, query: &str, options: &SearchOptions) -> Vec<Entry> {
        Lexicon::search(self, query, options)
    }

    fn get_by_id(&self, id: &str) -> Option<&Entry> {
        self.get(id)
    }

    fn metadata(&self) -> DictionaryMetadata {
        DictionaryMetadata {
            name: "accent-dict".to_string(),
            version: self.version(),
            language: "ja".to_string(),
            entry_count: self.len(),
        }
    }
}
