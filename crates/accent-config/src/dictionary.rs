use serde::{Deserialize, Serialize};

fn default_file_name() -> String {
    "lexicon.json".to_string()
}

fn default_audio_dir() -> String {
    "audio".to_string()
}

fn default_audio_ext() -> String {
    "aac".to_string()
}

fn default_index_readings() -> bool {
    true
}

/// On-disk layout of a dataset under the assets root
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Lexicon data file, relative to the assets root
    #[serde(default = "default_file_name")]
    pub file_name: String,
    /// Audio subtree, relative to the assets root
    #[serde(default = "default_audio_dir")]
    pub audio_dir: String,
    /// Extension tried when an audio id is given without one
    #[serde(default = "default_audio_ext")]
    pub default_audio_ext: String,
    #[serde(default = "default_index_readings")]
    pub index_readings: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            audio_dir: default_audio_dir(),
            default_audio_ext: default_audio_ext(),
            index_readings: default_index_readings(),
        }
    }
}
