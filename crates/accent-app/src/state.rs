use std::path::{Path, PathBuf};

use accent_config::Config;
use accent_dictionary::{AudioStore, Lexicon};
use accent_lang_japanese::PitchStyle;
use anyhow::{Context, Result};

pub struct AppState {
    pub config: Config,
}

impl AppState {
    /// Config file (or env defaults), then command-line overrides
    pub fn new(config_path: Option<&Path>, assets_root: Option<PathBuf>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Config::from_json_file(path)?,
            None => Config::new(),
        };

        if let Some(assets_root) = assets_root {
            config.assets_root = assets_root;
        }

        Ok(Self { config })
    }

    pub fn load_lexicon(&self) -> Result<Lexicon> {
        Lexicon::load_with(&self.config.assets_root, &self.config.dictionary).with_context(|| {
            format!(
                "Failed to load lexicon {}",
                self.config.lexicon_path().display()
            )
        })
    }

    pub fn audio_store(&self) -> Result<AudioStore> {
        AudioStore::open_with(&self.config.assets_root, &self.config.dictionary).with_context(
            || {
                format!(
                    "Failed to open audio assets in {}",
                    self.config.audio_path().display()
                )
            },
        )
    }

    pub fn pitch_style(&self) -> PitchStyle {
        PitchStyle::from(&self.config.render)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn assets_flag_overrides_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"assets_root": "/from/file", "render": {{"color": "red"}}}}"#).unwrap();

        let state = AppState::new(Some(file.path()), None).unwrap();
        assert_eq!(state.config.assets_root, PathBuf::from("/from/file"));
        assert_eq!(state.pitch_style().color, "red");

        let state = AppState::new(Some(file.path()), Some(PathBuf::from("/from/flag"))).unwrap();
        assert_eq!(state.config.assets_root, PathBuf::from("/from/flag"));
    }

    #[test]
    fn missing_assets_are_reported() {
        let state = AppState::new(None, Some(PathBuf::from("/definitely/not/here"))).unwrap();
        let err = state.load_lexicon().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to load lexicon /definitely/not/here/lexicon.json"
        );
        let err = state.audio_store().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to open audio assets in /definitely/not/here/audio"
        );
    }
}
