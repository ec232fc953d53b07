//! Fixed decoration palettes and identifier generation for new buttons.

use rand::{distributions::Alphanumeric, seq::SliceRandom, Rng};

pub const EMOJIS: &[&str] = &[
    "🚀", "⚡", "🔥", "✨", "🎯", "🎨", "🔨", "⚙️", "🛠️", "📦", //
    "🎉", "💡", "🌟", "🎪", "🎭", "🎮", "🎲", "🎸", "🎺", "🎼", //
    "🏃", "🚴", "🏋️", "🤸", "🧘", "🕺", "💃", "🧗", "🏊", "🚣", //
    "🌈", "🌸", "🌺", "🌻", "🌼", "🌷", "🌹", "🍀", "🌿", "🍃", //
    "⭐", "🌙", "☀️", "🌤️", "⛅", "🌦️", "🌧️", "⛈️", "🌩️", "🌨️",
];

/// Color tokens. The theme maps each token to a concrete accent color.
pub const COLORS: &[&str] = &[
    "charts.red",
    "charts.blue",
    "charts.green",
    "charts.yellow",
    "charts.orange",
    "charts.purple",
    "terminal.ansiCyan",
    "terminal.ansiMagenta",
    "terminal.ansiGreen",
    "terminal.ansiYellow",
];

const ID_PREFIX: &str = "button";
const ID_SUFFIX_LEN: usize = 9;

fn pick<R: Rng + ?Sized>(rng: &mut R, palette: &[&str]) -> String {
    // Both palettes are non-empty constants.
    palette.choose(rng).copied().unwrap_or_default().to_string()
}

pub fn random_emoji<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, EMOJIS)
}

pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> String {
    pick(rng, COLORS)
}

/// `button-<unix millis>-<lowercase base36 suffix>`
pub fn generate_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    let suffix: String = rng
        .sample_iter(&Alphanumeric)
        .take(ID_SUFFIX_LEN)
        .map(|c| char::from(c).to_ascii_lowercase())
        .collect();
    format!(
        "{ID_PREFIX}-{}-{suffix}",
        chrono::Utc::now().timestamp_millis()
    )
}
