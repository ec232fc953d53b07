use super::keymap::KeyMap;
use crate::domain::models::{ButtonId, ButtonRecord};
use ratatui::widgets::ListState;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub mod command_palette;
pub mod context_menu;
pub mod dialog;
pub mod error;
pub mod input;
pub mod theme;

// Re-exports
pub use command_palette::CommandPaletteState;
pub use context_menu::ContextMenuState;
pub use dialog::{ConfirmState, PromptPurpose, PromptState, PromptStep};
pub use error::{ErrorSeverity, ErrorState};
pub use input::AppTextArea;
pub use theme::ThemeSelectionState;

pub const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal,         // Navigating the button list
    Prompt,         // Label/command text prompt
    Confirm,        // Yes/no confirmation
    ContextMenu,    // Right-click menu for actions
    Help,           // Showing the help overlay
    CommandPalette, // Fuzzy finder for commands
    ThemeSelection, // Choosing a UI theme
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppState<'a> {
    // --- Connectivity & Status ---
    pub should_quit: bool,
    pub mode: AppMode,
    pub last_error: Option<ErrorState>,
    pub status_message: Option<String>, // "Executing: Build"
    pub status_clear_time: Option<Instant>,
    pub workspace_label: String,
    pub session_label: String,

    // --- Buttons (a copy of the store's list) ---
    pub buttons: Vec<ButtonRecord>,
    pub list_state: ListState,

    // --- Dialogs ---
    pub prompt: Option<PromptState<'a>>,
    pub confirm: Option<ConfirmState>,

    // --- Context Menu ---
    pub context_menu: Option<ContextMenuState>,

    // --- Command Palette ---
    pub command_palette: Option<CommandPaletteState>,

    // --- Theme Selection ---
    pub theme_selection: Option<ThemeSelectionState>,

    // --- Animation ---
    pub frame_count: u64,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub palette_type: crate::theme::PaletteType,
    pub theme: crate::theme::Theme,
}

impl AppState<'_> {
    #[must_use]
    pub fn new(palette_type: crate::theme::PaletteType) -> Self {
        Self {
            palette_type,
            theme: crate::theme::Theme::from_palette_type(palette_type),
            ..Default::default()
        }
    }

    pub fn selected_button(&self) -> Option<&ButtonRecord> {
        self.list_state
            .selected()
            .and_then(|idx| self.buttons.get(idx))
    }

    pub fn button(&self, id: &ButtonId) -> Option<&ButtonRecord> {
        self.buttons.iter().find(|b| b.id == *id)
    }

    /// The explicit target when given, otherwise the selected row.
    pub fn target_button(&self, id: Option<&ButtonId>) -> Option<&ButtonRecord> {
        match id {
            Some(id) => self.button(id),
            None => self.selected_button(),
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_clear_time = Some(Instant::now() + STATUS_TIMEOUT);
    }

    /// Shows `message`, or queues it behind the error already on screen.
    pub fn set_error(&mut self, message: impl Into<String>, severity: ErrorSeverity) {
        match &mut self.last_error {
            Some(shown) => shown.absorb(message.into(), severity),
            None => self.last_error = Some(ErrorState::new(message, severity)),
        }
    }
}

impl Default for AppState<'_> {
    fn default() -> Self {
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            last_error: None,
            status_message: None,
            status_clear_time: None,
            workspace_label: String::new(),
            session_label: String::new(),
            buttons: Vec::new(),
            list_state: ListState::default(),
            prompt: None,
            confirm: None,
            context_menu: None,
            command_palette: None,
            theme_selection: None,
            frame_count: 0,
            keymap: Arc::new(KeyMap::default()),
            palette_type: crate::theme::PaletteType::CatppuccinMocha,
            theme: crate::theme::Theme::default(),
        }
    }
}
