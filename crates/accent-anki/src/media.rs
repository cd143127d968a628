use data_encoding::BASE32_NOPAD;
use serde::{Deserialize, Serialize};

/// File the host should write into its media folder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// Filesystem-safe name for arbitrary text: base32 of its UTF-8 bytes, unpadded
pub fn encode_name(text: &str) -> String {
    BASE32_NOPAD.encode(text.as_bytes())
}

/// Media file name of the diagram for `accent_pattern`
pub fn pitch_file_name(accent_pattern: &str) -> String {
    format!("{}.svg", encode_name(accent_pattern))
}

pub fn sound_tag(file_name: &str) -> String {
    format!("[sound:{file_name}]")
}

pub fn image_tag(file_name: &str) -> String {
    format!("<img src=\"{file_name}\">")
}
