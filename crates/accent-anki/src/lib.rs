pub mod media;
pub mod note;
pub mod session;

pub use media::{MediaFile, encode_name, image_tag, pitch_file_name, sound_tag};
pub use note::{NoteSchema, NoteUpdate};
pub use session::{LookupSession, Selection};
