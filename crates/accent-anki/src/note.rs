use accent_dictionary::{Entry, Pronunciation};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::media::{image_tag, pitch_file_name, sound_tag};

pub const DICT_FIELD: &str = "dict";
pub const VOC_FIELD: &str = "voc";
/// Older note types name the vocabulary field "kanji"
pub const LEGACY_VOC_FIELD: &str = "kanji";
pub const PITCH_FIELD: &str = "pitch";
pub const AUDIO_FIELD: &str = "audio";

/// Field positions of the note layout, resolved once per note type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteSchema {
    pub dict: usize,
    pub voc: usize,
    pub pitch: usize,
    pub audio: usize,
}

impl NoteSchema {
    /// Resolve from the note type's field names, in field order
    pub fn resolve<S: AsRef<str>>(field_names: &[S]) -> Result<Self> {
        let find = |names: &[&str]| -> Result<usize> {
            field_names
                .iter()
                .position(|field| names.contains(&field.as_ref()))
                .with_context(|| format!("Note type has no {:?} field", names[0]))
        };

        Ok(Self {
            dict: find(&[DICT_FIELD])?,
            voc: find(&[VOC_FIELD, LEGACY_VOC_FIELD])?,
            pitch: find(&[PITCH_FIELD])?,
            audio: find(&[AUDIO_FIELD])?,
        })
    }

    /// Text the user typed into the dict field
    pub fn vocab<'a>(&self, fields: &'a [String]) -> Option<&'a str> {
        fields.get(self.dict).map(|field| field.as_str())
    }

    fn max_index(&self) -> usize {
        self.dict.max(self.voc).max(self.pitch).max(self.audio)
    }
}

/// Field values written for a chosen pronunciation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteUpdate {
    /// Composite `entry_pron` reference
    pub dict: String,
    pub voc: String,
    pub pitch: String,
    /// Empty when the pronunciation has no recording
    pub audio: String,
}

impl NoteUpdate {
    pub fn for_pronunciation(entry: &Entry, pron: &Pronunciation) -> Self {
        Self {
            dict: entry.ref_id(pron),
            voc: entry.written_form().to_string(),
            pitch: image_tag(&pitch_file_name(&pron.accent)),
            audio: pron
                .sound_file
                .as_deref()
                .map(sound_tag)
                .unwrap_or_default(),
        }
    }

    /// Write the values into a note's fields
    pub fn apply(&self, schema: &NoteSchema, fields: &mut [String]) -> Result<()> {
        if schema.max_index() >= fields.len() {
            anyhow::bail!(
                "Note has {} fields but the schema needs {}",
                fields.len(),
                schema.max_index() + 1
            );
        }

        fields[schema.dict] = self.dict.clone();
        fields[schema.voc] = self.voc.clone();
        fields[schema.pitch] = self.pitch.clone();
        fields[schema.audio] = self.audio.clone();
        Ok(())
    }
}
