use std::collections::{BTreeMap, HashMap, HashSet};
use std::io;
use std::path::Path;

use accent_config::dictionary::DictionaryConfig;
use accent_core::preprocess::normalize_key;
use accent_core::{Entry, Error, Pronunciation, Result, WordType};
use accent_lang_japanese::PitchPattern;
use accent_lang_japanese::kana::to_hiragana;

use crate::loaders::LexiconFile;

/// Normalized key -> entry positions, in dataset order
pub(crate) type KeyIndex = BTreeMap<String, Vec<usize>>;

/// Indices for one word type
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct TypeIndex {
    /// Headword and written (kanji) forms
    pub headwords: KeyIndex,
    /// Readings, folded to hiragana
    pub readings: KeyIndex,
}

/// Immutable, indexed snapshot of a dataset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    version: u32,
    entries: Vec<Entry>,
    ids: HashMap<String, usize>,
    groups: BTreeMap<WordType, TypeIndex>,
}

impl Lexicon {
    /// Load `<assets_root>/lexicon.json`
    pub fn load(assets_root: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(assets_root, &DictionaryConfig::default())
    }

    pub fn load_with(assets_root: impl AsRef<Path>, config: &DictionaryConfig) -> Result<Self> {
        let root = assets_root.as_ref();
        if !root.is_dir() {
            return Err(Error::AssetsMissing(root.to_path_buf()));
        }

        let path = root.join(&config.file_name);
        tracing::info!("Loading lexicon from {}", path.display());

        let json = match std::fs::read_to_string(&path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::AssetsMissing(path));
            }
            Err(e) if e.kind() == io::ErrorKind::InvalidData => {
                return Err(Error::CorruptData(format!("lexicon is not UTF-8: {e}")));
            }
            Err(e) => return Err(e.into()),
        };

        let lexicon = Self::from_json_with(&json, config.index_readings)?;
        tracing::info!("Loaded {} lexicon entries", lexicon.len());
        Ok(lexicon)
    }

    /// Build from an in-memory dataset, indexing readings
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_json_with(json, true)
    }

    fn from_json_with(json: &str, index_readings: bool) -> Result<Self> {
        let file = LexiconFile::from_json(json)?;
        Self::build(file.version, file.entries, index_readings)
    }

    fn build(version: u32, entries: Vec<Entry>, index_readings: bool) -> Result<Self> {
        let mut ids = HashMap::with_capacity(entries.len());
        let mut groups: BTreeMap<WordType, TypeIndex> = BTreeMap::new();

        for (pos, entry) in entries.iter().enumerate() {
            validate_entry(pos, entry)?;

            if ids.insert(entry.id.clone(), pos).is_some() {
                return Err(Error::CorruptData(format!(
                    "duplicate entry id {:?}",
                    entry.id
                )));
            }

            let group = groups.entry(entry.word_type).or_default();
            push_key(&mut group.headwords, normalize_key(&entry.head), pos);
            if let Some(kanji) = &entry.kanji {
                push_key(&mut group.headwords, normalize_key(kanji), pos);
            }

            if index_readings {
                for reading in &entry.readings {
                    push_key(&mut group.readings, reading_key(reading), pos);
                }
            }
        }

        for (word_type, group) in &groups {
            tracing::debug!(
                "Indexed {} headword keys and {} reading keys for {}",
                group.headwords.len(),
                group.readings.len(),
                word_type
            );
        }

        Ok(Self {
            version,
            entries,
            ids,
            groups,
        })
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in dataset order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.ids.get(id).map(|&pos| &self.entries[pos])
    }

    /// Entries of one word type, in dataset order
    pub fn entries_of(&self, word_type: WordType) -> impl Iterator<Item = &Entry> {
        self.entries
            .iter()
            .filter(move |entry| entry.word_type == word_type)
    }

    /// Re-resolve a persisted `entry.id + "_" + pron.id` reference
    pub fn resolve_ref(&self, ref_id: &str) -> Option<(&Entry, &Pronunciation)> {
        // Entry ids may contain '_' themselves, so try every split point
        ref_id.rmatch_indices('_').find_map(|(split, _)| {
            let entry = self.get(&ref_id[..split])?;
            let pron = entry.pronunciation(&ref_id[split + 1..])?;
            Some((entry, pron))
        })
    }

    pub(crate) fn group(&self, word_type: WordType) -> Option<&TypeIndex> {
        self.groups.get(&word_type)
    }

    pub(crate) fn entry_at(&self, pos: usize) -> &Entry {
        &self.entries[pos]
    }
}

/// Index key for a reading or reading query
pub(crate) fn reading_key(text: &str) -> String {
    to_hiragana(&normalize_key(text))
}

fn push_key(index: &mut KeyIndex, key: String, pos: usize) {
    if key.is_empty() {
        return;
    }
    let positions = index.entry(key).or_default();
    if positions.last() != Some(&pos) {
        positions.push(pos);
    }
}

fn validate_entry(pos: usize, entry: &Entry) -> Result<()> {
    if entry.id.trim().is_empty() {
        return Err(Error::CorruptData(format!(
            "entry at position {pos} has an empty id"
        )));
    }
    if normalize_key(&entry.head).is_empty() {
        return Err(Error::CorruptData(format!(
            "entry {:?} has an empty headword",
            entry.id
        )));
    }
    if entry.pron.is_empty() {
        return Err(Error::CorruptData(format!(
            "entry {:?} has no pronunciations",
            entry.id
        )));
    }

    let mut pron_ids = HashSet::new();
    for pron in &entry.pron {
        if pron.id.trim().is_empty() {
            return Err(Error::CorruptData(format!(
                "entry {:?} has a pronunciation with an empty id",
                entry.id
            )));
        }
        if !pron_ids.insert(pron.id.as_str()) {
            return Err(Error::CorruptData(format!(
                "entry {:?} repeats pronunciation id {:?}",
                entry.id, pron.id
            )));
        }
        if let Err(e) = PitchPattern::parse(&pron.accent) {
            return Err(Error::CorruptData(format!(
                "entry {:?} pronunciation {:?}: {e}",
                entry.id, pron.id
            )));
        }
        if pron.sound_file.as_deref().is_some_and(|f| f.trim().is_empty()) {
            return Err(Error::CorruptData(format!(
                "entry {:?} pronunciation {:?} has an empty sound file",
                entry.id, pron.id
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lexicon(entries: &str) -> Result<Lexicon> {
        Lexicon::from_json(&format!(r#"{{"version": 1, "entries": [{entries}]}}"#))
    }

    fn corrupt(entries: &str) -> bool {
        matches!(lexicon(entries), Err(Error::CorruptData(_)))
    }

    #[test]
    fn indexes_heads_kanji_and_readings() {
        let lex = lexicon(
            r#"{"id": "E1", "head": "はし", "kanji": "橋", "readings": ["ハシ"],
                "pron": [{"id": "P1", "accent": "2"}]}"#,
        )
        .unwrap();

        let group = lex.group(WordType::Headword).unwrap();
        assert_eq!(group.headwords.get("はし"), Some(&vec![0]));
        assert_eq!(group.headwords.get("橋"), Some(&vec![0]));
        assert_eq!(group.readings.get("はし"), Some(&vec![0]));
        assert!(lex.group(WordType::Counter).is_none());
    }

    #[test]
    fn same_key_twice_is_indexed_once() {
        let lex = lexicon(
            r#"{"id": "E1", "head": "橋", "kanji": "橋", "pron": [{"id": "P1", "accent": "2"}]}"#,
        )
        .unwrap();
        let group = lex.group(WordType::Headword).unwrap();
        assert_eq!(group.headwords.get("橋"), Some(&vec![0]));
    }

    #[test]
    fn structural_errors_are_corrupt_data() {
        assert!(corrupt(r#"{"id": "", "head": "橋", "pron": [{"id": "P1", "accent": "2"}]}"#));
        assert!(corrupt(r#"{"id": "E1", "head": " ", "pron": [{"id": "P1", "accent": "2"}]}"#));
        assert!(corrupt(r#"{"id": "E1", "head": "橋", "pron": []}"#));
        assert!(corrupt(
            r#"{"id": "E1", "head": "橋", "pron": [{"id": "P1", "accent": "2"}, {"id": "P1", "accent": "1"}]}"#
        ));
        assert!(corrupt(r#"{"id": "E1", "head": "橋", "pron": [{"id": "P1", "accent": "3/2"}]}"#));
        assert!(corrupt(
            r#"{"id": "E1", "head": "橋", "pron": [{"id": "P1", "accent": "2", "sound_file": ""}]}"#
        ));
        assert!(corrupt(
            r#"{"id": "E1", "head": "橋", "pron": [{"id": "P1", "accent": "2"}]},
               {"id": "E1", "head": "箸", "pron": [{"id": "P1", "accent": "1"}]}"#
        ));
    }

    #[test]
    fn resolves_composite_refs() {
        let lex = lexicon(
            r#"{"id": "E_1", "head": "橋", "pron": [{"id": "P1", "accent": "2"}, {"id": "P2", "accent": "0/2"}]}"#,
        )
        .unwrap();

        let (entry, pron) = lex.resolve_ref("E_1_P2").unwrap();
        assert_eq!(entry.id, "E_1");
        assert_eq!(pron.accent, "0/2");
        assert!(lex.resolve_ref("E_1_P3").is_none());
        assert!(lex.resolve_ref("E1").is_none());
    }

    #[test]
    fn entries_of_keeps_order() {
        let lex = lexicon(
            r#"{"id": "C1", "head": "本", "type": "counter", "pron": [{"id": "P1", "accent": "1"}]},
               {"id": "H1", "head": "橋", "pron": [{"id": "P1", "accent": "2"}]},
               {"id": "C2", "head": "枚", "type": "numeral", "pron": [{"id": "P1", "accent": "1"}]}"#,
        )
        .unwrap();

        let counters: Vec<&str> = lex
            .entries_of(WordType::Counter)
            .map(|e| e.id.as_str())
            .collect();
        assert_eq!(counters, vec!["C1", "C2"]);
        assert_eq!(lex.get("H1").map(|e| e.head.as_str()), Some("橋"));
        assert_eq!(lex.len(), 3);
    }
}
