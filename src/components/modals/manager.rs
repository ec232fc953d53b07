use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use super::command_palette::CommandPaletteModal;
use super::confirm::ConfirmModal;
use super::context_menu::ContextMenuModal;
use super::error::ErrorModal;
use super::help::HelpModal;
use super::helpers::dim_area;
use super::text_input::PromptModal;
use super::theme_selection::ThemeSelectionModal;

pub struct ModalManager<'a, 'b> {
    pub theme: &'a Theme,
    pub app_state: &'a AppState<'b>,
}

impl Widget for ModalManager<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let state = self.app_state;

        // --- Visual Dimming ---
        // The context menu floats over the list without dimming it
        let is_modal_active = !matches!(state.mode, AppMode::Normal | AppMode::ContextMenu)
            || state.last_error.is_some();
        if is_modal_active {
            dim_area(buf, area);
        }

        match state.mode {
            AppMode::Help => HelpModal { theme: self.theme }.render(area, buf),
            AppMode::Prompt => {
                if let Some(prompt) = &state.prompt {
                    PromptModal {
                        theme: self.theme,
                        prompt,
                    }
                    .render(area, buf);
                }
            }
            AppMode::Confirm => {
                if let Some(confirm) = &state.confirm {
                    ConfirmModal {
                        theme: self.theme,
                        state: confirm,
                    }
                    .render(area, buf);
                }
            }
            AppMode::ContextMenu => {
                if let Some(menu) = &state.context_menu {
                    let title = state
                        .button(&menu.button_id)
                        .map_or("", |b| b.label.as_str());
                    ContextMenuModal {
                        theme: self.theme,
                        state: menu,
                        title,
                    }
                    .render(area, buf);
                }
            }
            AppMode::CommandPalette => {
                if let Some(cp) = &state.command_palette {
                    CommandPaletteModal {
                        theme: self.theme,
                        state: cp,
                    }
                    .render(area, buf);
                }
            }
            AppMode::ThemeSelection => {
                if let Some(ts) = &state.theme_selection {
                    ThemeSelectionModal {
                        theme: self.theme,
                        state: ts,
                        current: state.palette_type,
                    }
                    .render(area, buf);
                }
            }
            AppMode::Normal => {}
        }

        // --- Error Modal (always on top) ---
        if let Some(err) = &state.last_error {
            ErrorModal {
                theme: self.theme,
                error: err,
            }
            .render(area, buf);
        }
    }
}
