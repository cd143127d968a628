pub mod diagram;
pub mod kana;
pub mod pitch_accent;

pub use diagram::{PitchStyle, gen_pitch_svg, render_svg};
pub use pitch_accent::{PatternType, PitchPattern};
