use accent_config::dictionary::DictionaryConfig;

use super::{MIXED, assets};
use crate::{AudioStore, Error, get_sound};

const OGG: &[u8] = b"OggS\x00\x02fake-ogg-payload";
const AAC: &[u8] = &[0xff, 0xf1, 0x50, 0x80, 0x00, 0x1f, 0xfc];

#[test]
fn test_existing_ids_return_exact_bytes() {
    let root = assets(MIXED, &[("s1.ogg", OGG), ("20170630130152.aac", AAC)]);

    assert_eq!(get_sound(root.path(), "s1.ogg").unwrap(), OGG);
    assert_eq!(get_sound(root.path(), "20170630130152.aac").unwrap(), AAC);
}

#[test]
fn test_extensionless_id_uses_default_extension() {
    let root = assets(MIXED, &[("20170630130152.aac", AAC)]);
    assert_eq!(get_sound(root.path(), "20170630130152").unwrap(), AAC);
}

#[test]
fn test_resolved_name_carries_default_extension() {
    let root = assets(MIXED, &[("s1.ogg", OGG), ("20170630130152.aac", AAC)]);
    let store = AudioStore::open(root.path()).unwrap();

    let (name, bytes) = store.get_named("20170630130152").unwrap();
    assert_eq!(name, "20170630130152.aac");
    assert_eq!(bytes, AAC);

    let (name, _) = store.get_named("s1.ogg").unwrap();
    assert_eq!(name, "s1.ogg");
}

#[test]
fn test_unknown_ids_are_not_found() {
    let root = assets(MIXED, &[("s1.ogg", OGG)]);

    for id in ["s2.ogg", "s1", "", "..", "../lexicon.json", "audio/s1.ogg"] {
        match get_sound(root.path(), id) {
            Err(Error::AssetNotFound(missing)) => assert_eq!(missing, id),
            other => panic!("expected AssetNotFound for {id:?}, got {other:?}"),
        }
    }
}

#[test]
fn test_missing_root_is_assets_missing() {
    let result = get_sound("/definitely/not/an/assets/root", "s1.ogg");
    assert!(matches!(result, Err(Error::AssetsMissing(_))));
}

#[test]
fn test_listing_is_sorted_and_read_only() {
    let root = assets(MIXED, &[("s2.ogg", OGG), ("s1.ogg", OGG), (".DS_Store", &b"x"[..])]);
    let store = AudioStore::open(root.path()).unwrap();

    assert_eq!(store.ids().unwrap(), vec!["s1.ogg", "s2.ogg"]);
    assert!(store.contains("s1.ogg"));
    assert!(!store.contains("s3.ogg"));

    store.get("s1.ogg").unwrap();
    assert_eq!(store.ids().unwrap().len(), 2);
}

#[test]
fn test_root_without_audio_dir() {
    let root = tempfile::tempdir().unwrap();
    let config = DictionaryConfig {
        audio_dir: "sounds".to_string(),
        ..DictionaryConfig::default()
    };
    let store = AudioStore::open_with(root.path(), &config).unwrap();

    assert!(store.ids().unwrap().is_empty());
    assert!(matches!(store.get("s1.ogg"), Err(Error::AssetNotFound(_))));
}
