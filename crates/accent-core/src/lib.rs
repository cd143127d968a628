pub mod dictionary;
pub mod error;
pub mod preprocess;
pub mod types;

pub use error::{Error, Result};
pub use types::{Entry, Pronunciation, WordType};
