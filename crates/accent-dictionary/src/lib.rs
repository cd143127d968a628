pub mod audio;
pub mod lexicon;
pub mod loaders;
pub mod lookup;

#[cfg(test)]
mod tests;

use std::path::Path;

pub use accent_core::dictionary::{Dictionary, MatchType, SearchOptions};
pub use accent_core::{Entry, Error, Pronunciation, Result, WordType};
pub use accent_lang_japanese::gen_pitch_svg;
pub use audio::AudioStore;
pub use lexicon::Lexicon;

/// Load the lexicon under `assets_root`
pub fn load(assets_root: impl AsRef<Path>) -> Result<Lexicon> {
    Lexicon::load(assets_root)
}

/// Load the lexicon under `assets_root` and search it.
///
/// Loads on every call; hosts that query repeatedly should keep a
/// [`Lexicon`] from [`load`] instead.
pub fn look_up(
    assets_root: impl AsRef<Path>,
    query: &str,
    word_type: Option<WordType>,
) -> Result<Vec<Entry>> {
    let lexicon = Lexicon::load(assets_root)?;
    Ok(lexicon.look_up(query, word_type))
}

/// Raw bytes of an audio asset under `assets_root`
pub fn get_sound(assets_root: impl AsRef<Path>, sound_file_id: &str) -> Result<Vec<u8>> {
    AudioStore::open(assets_root)?.get(sound_file_id)
}
