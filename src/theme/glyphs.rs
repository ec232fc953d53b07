//! Nerd Font glyphs used across the UI.

pub const SEP_RIGHT: &str = "\u{e0b0}";
pub const LOGO: &str = "\u{f0e7}";
pub const FOLDER: &str = "\u{f07b}";
pub const TERMINAL: &str = "\u{f120}";
pub const DOT: &str = "\u{25cf}";
pub const SELECTED: &str = "\u{258c}";
