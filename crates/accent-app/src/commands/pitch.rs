use std::path::Path;

use accent_anki::pitch_file_name;
use accent_lang_japanese::{PitchPattern, render_svg};
use anyhow::Result;

use super::emit;
use crate::state::AppState;

pub fn handle_pitch(state: &AppState, pattern: &str, output: Option<&Path>) -> Result<()> {
    let parsed = PitchPattern::parse(pattern)?;
    tracing::debug!("{} -> {}", pattern, parsed.type_name());

    let svg = render_svg(&parsed, &state.pitch_style());
    emit(output, svg.as_bytes())
}

pub fn handle_name(pattern: &str) -> Result<()> {
    // Same parse as `pitch`, so a name is only printed for renderable patterns
    PitchPattern::parse(pattern)?;
    println!("{}", pitch_file_name(pattern));
    Ok(())
}
