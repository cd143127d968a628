pub mod json;

pub use json::{FORMAT_VERSION, LexiconFile};
