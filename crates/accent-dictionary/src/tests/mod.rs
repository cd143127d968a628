mod audio_tests;

use std::fs;

use tempfile::TempDir;

/// Lexicon holding the single entry the host scenario is written against
pub(crate) const HASHI: &str = r#"{
    "version": 1,
    "entries": [
        {"id": "E1", "head": "橋", "type": "headword",
         "pron": [{"id": "P1", "accent": "2", "sound_file": "s1.ogg"}]}
    ]
}"#;

/// Small mixed dataset: headwords, a compound and a counter
pub(crate) const MIXED: &str = r#"{
    "version": 1,
    "entries": [
        {"id": "E1", "head": "橋", "readings": ["はし"],
         "pron": [{"id": "P1", "accent": "2", "sound_file": "s1.ogg"}]},
        {"id": "E2", "head": "箸", "readings": ["はし"],
         "pron": [{"id": "P1", "accent": "1", "sound_file": "s2.ogg"},
                  {"id": "P2", "accent": "ハ＼シ"}]},
        {"id": "E3", "head": "石橋", "type": "compound", "readings": ["いしばし"],
         "pron": [{"id": "P1", "accent": "0/4", "sound_file": "20170630130152"}]},
        {"id": "E4", "head": "本", "type": "counter", "readings": ["ほん"],
         "pron": [{"id": "P1", "accent": "1"}]}
    ]
}"#;

/// Assets root with `lexicon.json` and the given audio files
pub(crate) fn assets(lexicon: &str, audio: &[(&str, &[u8])]) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("lexicon.json"), lexicon).unwrap();

    let audio_dir = dir.path().join("audio");
    fs::create_dir(&audio_dir).unwrap();
    for (name, bytes) in audio {
        fs::write(audio_dir.join(name), bytes).unwrap();
    }

    dir
}
