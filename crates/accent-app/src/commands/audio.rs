use std::path::Path;

use anyhow::{Context, Result};

use super::emit;
use crate::state::AppState;

pub fn handle_audio_list(state: &AppState) -> Result<()> {
    let store = state.audio_store()?;
    for id in store.ids()? {
        println!("{id}");
    }
    Ok(())
}

pub fn handle_audio_get(state: &AppState, id: &str, output: Option<&Path>) -> Result<()> {
    if output.is_none() && atty::is(atty::Stream::Stdout) {
        anyhow::bail!("Refusing to write audio to a terminal; pass --output or redirect stdout");
    }

    let store = state.audio_store()?;
    let bytes = store
        .get(id)
        .with_context(|| format!("Failed to read audio {id:?}"))?;

    emit(output, &bytes)
}
