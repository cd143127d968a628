use std::env;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::log::LogConfig;
use self::render::RenderConfig;

pub mod dictionary;
pub mod log;
pub mod render;

fn default_assets_root() -> PathBuf {
    PathBuf::from("assets")
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Directory holding the lexicon file and the audio subtree
    #[serde(default = "default_assets_root")]
    pub assets_root: PathBuf,
    pub dictionary: DictionaryConfig,
    pub render: RenderConfig,
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            assets_root: default_assets_root(),
            dictionary: DictionaryConfig::default(),
            render: RenderConfig::default(),
            log: LogConfig::default(),
        }
    }
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        let assets_root = env::var("ACCENT_ASSETS_ROOT")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_assets_root());

        Config {
            assets_root,
            dictionary: DictionaryConfig::default(),
            render: RenderConfig::new(),
            log: LogConfig::new(),
        }
    }

    /// Load from a JSON file; missing sections fall back to defaults
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|source| ConfigError::Parse {
            path: path.display().to_string(),
            source,
        })
    }

    pub fn lexicon_path(&self) -> PathBuf {
        self.assets_root.join(&self.dictionary.file_name)
    }

    pub fn audio_path(&self) -> PathBuf {
        self.assets_root.join(&self.dictionary.audio_dir)
    }
}
