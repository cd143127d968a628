use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Assets root (or a file the dataset layout requires) does not exist
    #[error("Assets missing: {}", .0.display())]
    AssetsMissing(PathBuf),

    /// Dataset failed to parse or validate; no partial index is kept
    #[error("Corrupt dictionary data: {0}")]
    CorruptData(String),

    #[error("Invalid pitch pattern {pattern:?}: {reason}")]
    InvalidPattern { pattern: String, reason: String },

    #[error("Asset not found: {0}")]
    AssetNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn invalid_pattern(pattern: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPattern {
            pattern: pattern.to_string(),
            reason: reason.into(),
        }
    }

    /// Whether the host can carry on without the requested item
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Error::AssetNotFound(_))
    }
}
