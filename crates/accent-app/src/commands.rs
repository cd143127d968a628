pub mod audio;
pub mod lookup;
pub mod pitch;

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};

pub use audio::{handle_audio_get, handle_audio_list};
pub use lookup::handle_lookup;
pub use pitch::{handle_name, handle_pitch};

/// Write to `output` if given, stdout otherwise
pub(crate) fn emit(output: Option<&Path>, bytes: &[u8]) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!("Wrote {} bytes to {}", bytes.len(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
