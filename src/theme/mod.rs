use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod glyphs;
pub mod gruvbox;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

/// Concrete colors behind the button color tokens.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accents {
    pub red: Color,
    pub orange: Color,
    pub yellow: Color,
    pub green: Color,
    pub blue: Color,
    pub purple: Color,
    pub cyan: Color,
    pub magenta: Color,
    pub fallback: Color,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub button_title: Style,
    pub button_command: Style,
    pub button_selected: Style,
    pub empty_hint: Style,
    pub accents: Accents,

    pub status_ready: Style,
    pub status_info: Style,
    pub status_warn: Style,
    pub status_error: Style,

    pub header_logo: Style,
    pub header_workspace: Style,
    pub header_session: Style,
    pub header_stats: Style,
    pub header_active: Style,
    pub header_warn: Style,
    pub header_item: Style,
    pub header: Style,

    pub footer_segment_key: Style,
    pub footer_segment_val: Style,
    pub footer_group_name: Style,
    pub footer: Style,

    pub list_selected: Style,
    pub list_item: Style,
    pub dimmed: Style,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
    Gruvbox,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
            PaletteType::Gruvbox => "Gruvbox",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[
            PaletteType::CatppuccinMocha,
            PaletteType::Nord,
            PaletteType::Gruvbox,
        ]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
            PaletteType::Gruvbox => Self::from_palette(&gruvbox::GRUVBOX),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        // Bold dark text on a colored segment
        let badge = |bg: Color| Style::default().bg(bg).fg(p.crust).add_modifier(Modifier::BOLD);

        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            button_title: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            button_command: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            button_selected: Style::default().bg(dim_color(p.blue, 0.25)),
            empty_hint: Style::default().fg(p.overlay1).add_modifier(Modifier::ITALIC),
            accents: Accents {
                red: p.red,
                orange: p.peach,
                yellow: p.yellow,
                green: p.green,
                blue: p.blue,
                purple: p.mauve,
                cyan: p.teal,
                magenta: p.pink,
                fallback: p.overlay1,
            },

            status_ready: badge(p.green),
            status_info: badge(p.blue),
            status_warn: badge(p.yellow),
            status_error: badge(p.red),

            header_logo: badge(p.blue),
            header_workspace: badge(p.surface1).fg(p.text),
            header_session: badge(p.mauve),
            header_stats: Style::default().bg(p.surface0).fg(p.subtext1),
            header_active: badge(p.green),
            header_warn: badge(p.yellow),
            header_item: Style::default().bg(p.surface0).fg(p.text),
            header: Style::default().bg(p.base).fg(p.text),

            footer_segment_key: badge(p.surface0).fg(p.blue),
            footer_segment_val: Style::default().bg(p.base).fg(p.text),
            footer_group_name: Style::default().fg(p.subtext0).add_modifier(Modifier::DIM),
            footer: Style::default().bg(p.crust).fg(p.subtext0),

            list_selected: badge(p.blue),
            list_item: Style::default().fg(p.text),
            dimmed: Style::default().fg(p.overlay0).add_modifier(Modifier::DIM),
        }
    }

    /// Accent for a button color token such as `charts.red` or
    /// `terminal.ansiCyan`. Unknown tokens get a neutral color.
    #[must_use]
    pub fn accent(&self, token: &str) -> Color {
        let a = &self.accents;
        match token {
            "charts.red" | "terminal.ansiRed" => a.red,
            "charts.orange" => a.orange,
            "charts.yellow" | "terminal.ansiYellow" => a.yellow,
            "charts.green" | "terminal.ansiGreen" => a.green,
            "charts.blue" | "terminal.ansiBlue" => a.blue,
            "charts.purple" => a.purple,
            "terminal.ansiCyan" => a.cyan,
            "terminal.ansiMagenta" => a.magenta,
            _ => a.fallback,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
