use std::path::{Path, PathBuf};

use accent_config::dictionary::DictionaryConfig;
use accent_core::{Error, Result};

/// Read-only view of the audio subtree under an assets root
#[derive(Debug, Clone)]
pub struct AudioStore {
    dir: PathBuf,
    default_ext: String,
}

impl AudioStore {
    pub fn open(assets_root: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(assets_root, &DictionaryConfig::default())
    }

    pub fn open_with(assets_root: impl AsRef<Path>, config: &DictionaryConfig) -> Result<Self> {
        let root = assets_root.as_ref();
        if !root.is_dir() {
            return Err(Error::AssetsMissing(root.to_path_buf()));
        }

        Ok(Self {
            dir: root.join(&config.audio_dir),
            default_ext: config.default_audio_ext.clone(),
        })
    }

    /// Exact stored bytes of `sound_file_id`
    pub fn get(&self, sound_file_id: &str) -> Result<Vec<u8>> {
        self.get_named(sound_file_id).map(|(_, bytes)| bytes)
    }

    /// Stored file name and bytes; the name carries the default extension
    /// when the id was stored without one
    pub fn get_named(&self, sound_file_id: &str) -> Result<(String, Vec<u8>)> {
        let path = self
            .locate(sound_file_id)
            .ok_or_else(|| Error::AssetNotFound(sound_file_id.to_string()))?;

        let name = path
            .file_name()
            .and_then(|name| name.to_str())
            .map(str::to_string)
            .ok_or_else(|| Error::AssetNotFound(sound_file_id.to_string()))?;

        let bytes = std::fs::read(&path)?;
        tracing::debug!("Read {} bytes from {}", bytes.len(), path.display());
        Ok((name, bytes))
    }

    pub fn contains(&self, sound_file_id: &str) -> bool {
        self.locate(sound_file_id).is_some()
    }

    /// Sorted file names in the audio directory
    pub fn ids(&self) -> Result<Vec<String>> {
        if !self.dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for item in std::fs::read_dir(&self.dir)? {
            let item = item?;
            if !item.file_type()?.is_file() {
                continue;
            }
            match item.file_name().into_string() {
                Ok(name) if !name.starts_with('.') => ids.push(name),
                Ok(_) => {}
                Err(name) => tracing::warn!("Skipping non UTF-8 audio file {:?}", name),
            }
        }
        ids.sort();

        Ok(ids)
    }

    fn locate(&self, sound_file_id: &str) -> Option<PathBuf> {
        if !is_plain_file_name(sound_file_id) {
            return None;
        }

        let path = self.dir.join(sound_file_id);
        if path.is_file() {
            return Some(path);
        }

        // Ids are sometimes stored without their extension
        if Path::new(sound_file_id).extension().is_none() && !self.default_ext.is_empty() {
            let path = self
                .dir
                .join(format!("{sound_file_id}.{}", self.default_ext));
            if path.is_file() {
                return Some(path);
            }
        }

        None
    }
}

/// A bare file name that cannot escape the audio directory
fn is_plain_file_name(id: &str) -> bool {
    !id.is_empty() && id != "." && id != ".." && !id.contains(['/', '\\', '\0'])
}
