use accent_core::{Entry, Error, Result};
use serde::{Deserialize, Serialize};

/// Dataset schema version this loader understands
pub const FORMAT_VERSION: u32 = 1;

/// On-disk lexicon file
#[derive(Debug, Serialize, Deserialize)]
pub struct LexiconFile {
    pub version: u32,
    pub entries: Vec<Entry>,
}

impl LexiconFile {
    /// Parse the dataset; structural checks beyond the schema happen in `Lexicon`
    pub fn from_json(json: &str) -> Result<Self> {
        let file: LexiconFile = serde_json::from_str(json)
            .map_err(|e| Error::CorruptData(format!("invalid lexicon JSON: {e}")))?;

        if file.version != FORMAT_VERSION {
            return Err(Error::CorruptData(format!(
                "unsupported lexicon version {} (expected {FORMAT_VERSION})",
                file.version
            )));
        }

        Ok(file)
    }
}
