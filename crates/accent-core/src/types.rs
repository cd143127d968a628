use std::fmt;

use serde::{Deserialize, Serialize};

/// Lexicon category an entry is filed under
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordType {
    #[default]
    Headword,
    Compound,
    #[serde(alias = "numeral", alias = "josushi")]
    Counter,
}

impl WordType {
    /// Group order used when results span several types
    pub const ALL: [WordType; 3] = [WordType::Headword, WordType::Compound, WordType::Counter];

    pub fn as_str(&self) -> &'static str {
        match self {
            WordType::Headword => "headword",
            WordType::Compound => "compound",
            WordType::Counter => "counter",
        }
    }
}

impl fmt::Display for WordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for WordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "headword" => Ok(WordType::Headword),
            "compound" => Ok(WordType::Compound),
            "counter" | "numeral" | "josushi" => Ok(WordType::Counter),
            other => Err(format!("unknown word type: {other}")),
        }
    }
}

/// One recorded reading of an entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub id: String,
    /// Pitch-accent pattern, e.g. "2", "0/3" or "ハシ＼"
    pub accent: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sound_file: Option<String>,
}

/// Vocabulary entry as returned to the host
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub id: String,
    pub head: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kanji: Option<String>,
    #[serde(rename = "type", default)]
    pub word_type: WordType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub readings: Vec<String>,
    /// Display priority order
    pub pron: Vec<Pronunciation>,
}

impl Entry {
    /// Reference persisted by hosts: `entry.id + "_" + pron.id`
    pub fn ref_id(&self, pron: &Pronunciation) -> String {
        format!("{}_{}", self.id, pron.id)
    }

    pub fn pronunciation(&self, pron_id: &str) -> Option<&Pronunciation> {
        self.pron.iter().find(|p| p.id == pron_id)
    }

    /// Written form for the host's vocabulary field
    pub fn written_form(&self) -> &str {
        self.kanji.as_deref().unwrap_or(&self.head)
    }
}
