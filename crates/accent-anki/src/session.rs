use std::sync::Arc;

use accent_config::Config;
use accent_dictionary::{AudioStore, Entry, Lexicon, WordType};
use accent_lang_japanese::{PitchPattern, PitchStyle, render_svg};
use anyhow::{Context, Result};

use crate::media::{MediaFile, pitch_file_name, sound_tag};
use crate::note::NoteUpdate;

/// Everything the host needs after the user picks a pronunciation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub update: NoteUpdate,
    /// Pitch diagram first, then the recording if there is one
    pub media: Vec<MediaFile>,
}

/// Lookup context for one editor. The host creates it when the editor opens
/// and drops it when the editor closes; nothing here is process-wide.
pub struct LookupSession {
    lexicon: Arc<Lexicon>,
    audio: AudioStore,
    style: PitchStyle,
    vocab: String,
}

impl LookupSession {
    /// Load the dataset named by `config`
    pub fn open(config: &Config) -> Result<Self> {
        let lexicon = Lexicon::load_with(&config.assets_root, &config.dictionary)
            .with_context(|| format!("Failed to load lexicon from {}", config.assets_root.display()))?;
        let audio = AudioStore::open_with(&config.assets_root, &config.dictionary)
            .context("Failed to open audio assets")?;

        Ok(Self::with_lexicon(
            Arc::new(lexicon),
            audio,
            PitchStyle::from(&config.render),
        ))
    }

    /// Share an already loaded lexicon between editors
    pub fn with_lexicon(lexicon: Arc<Lexicon>, audio: AudioStore, style: PitchStyle) -> Self {
        Self {
            lexicon,
            audio,
            style,
            vocab: String::new(),
        }
    }

    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    pub fn vocab(&self) -> &str {
        &self.vocab
    }

    /// Track the editor's query text; true when it changed
    pub fn update_vocab(&mut self, text: &str) -> bool {
        if self.vocab == text {
            return false;
        }
        tracing::debug!("Vocab changed: {:?} -> {:?}", self.vocab, text);
        self.vocab = text.to_string();
        true
    }

    /// Entries to offer for the current vocab
    pub fn candidates(&self, word_type: Option<WordType>) -> Vec<Entry> {
        self.lexicon.look_up(&self.vocab, word_type)
    }

    pub fn select(&self, entry_id: &str, pron_id: &str) -> Result<Selection> {
        let entry = self
            .lexicon
            .get(entry_id)
            .with_context(|| format!("Unknown entry {entry_id:?}"))?;
        let pron = entry
            .pronunciation(pron_id)
            .with_context(|| format!("Entry {entry_id:?} has no pronunciation {pron_id:?}"))?;

        let pattern = PitchPattern::parse(&pron.accent)?;
        let mut media = vec![MediaFile {
            name: pitch_file_name(&pron.accent),
            data: render_svg(&pattern, &self.style).into_bytes(),
        }];

        let mut update = NoteUpdate::for_pronunciation(entry, pron);
        if let Some(sound_file) = &pron.sound_file {
            match self.audio.get_named(sound_file) {
                Ok((name, data)) => {
                    // Extensionless ids resolve to a stored file with an extension
                    update.audio = sound_tag(&name);
                    media.push(MediaFile { name, data });
                }
                Err(e) if e.is_recoverable() => {
                    tracing::warn!("No recording for {}: {}", update.dict, e);
                    update.audio.clear();
                }
                Err(e) => return Err(e.into()),
            }
        }

        Ok(Selection { update, media })
    }

    /// Select by a persisted `entry_pron` reference
    pub fn select_ref(&self, ref_id: &str) -> Result<Selection> {
        let (entry, pron) = self
            .lexicon
            .resolve_ref(ref_id)
            .with_context(|| format!("Unknown reference {ref_id:?}"))?;
        self.select(&entry.id, &pron.id)
    }
}
