use std::io::{self, Write};

use accent_dictionary::{Entry, SearchOptions, WordType};
use accent_lang_japanese::PitchPattern;
use anyhow::Result;

use crate::state::AppState;

pub fn handle_lookup(
    state: &AppState,
    query: &str,
    word_type: Option<WordType>,
    limit: Option<usize>,
    json: bool,
) -> Result<()> {
    let lexicon = state.load_lexicon()?;

    let options = SearchOptions {
        word_type,
        max_results: limit,
        ..SearchOptions::default()
    };
    let entries = lexicon.search(query, &options);
    tracing::debug!("Lookup {:?}: {} entries", query, entries.len());

    let mut stdout = io::stdout().lock();
    write_entries(&mut stdout, &entries, json)
}

pub(crate) fn write_entries(out: &mut impl Write, entries: &[Entry], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, entries)?;
        writeln!(out)?;
        return Ok(());
    }

    if entries.is_empty() {
        writeln!(out, "No entries found")?;
        return Ok(());
    }

    for entry in entries {
        writeln!(out, "{} [{}] {}", entry.written_form(), entry.word_type, entry.id)?;
        for pron in &entry.pron {
            let pattern = PitchPattern::parse(&pron.accent)?;
            writeln!(
                out,
                "  {}\t{}\t{}\t{}",
                entry.ref_id(pron),
                pron.accent,
                pattern.type_name(),
                pron.sound_file.as_deref().unwrap_or("-")
            )?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use accent_dictionary::Pronunciation;

    use super::*;

    fn entries() -> Vec<Entry> {
        vec![Entry {
            id: "E1".to_string(),
            head: "橋".to_string(),
            kanji: None,
            word_type: WordType::Headword,
            readings: vec!["はし".to_string()],
            pron: vec![
                Pronunciation {
                    id: "P1".to_string(),
                    accent: "2".to_string(),
                    sound_file: Some("s1.ogg".to_string()),
                },
                Pronunciation {
                    id: "P2".to_string(),
                    accent: "0/2".to_string(),
                    sound_file: None,
                },
            ],
        }]
    }

    #[test]
    fn text_listing() {
        let mut out = Vec::new();
        write_entries(&mut out, &entries(), false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "橋 [headword] E1\n  E1_P1\t2\tOdaka (Tail-high)\ts1.ogg\n  E1_P2\t0/2\tHeiban (Flat)\t-\n"
        );
    }

    #[test]
    fn json_listing_round_trips() {
        let mut out = Vec::new();
        write_entries(&mut out, &entries(), true).unwrap();
        let parsed: Vec<Entry> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, entries());
    }

    #[test]
    fn empty_listing() {
        let mut out = Vec::new();
        write_entries(&mut out, &[], false).unwrap();
        assert_eq!(out, b"No entries found\n");
    }
}
