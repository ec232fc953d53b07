use crate::app::{
    action::{Action, UpdateResult},
    command::Command,
    command_palette::get_commands,
    reducer,
    state::{AppMode, AppState, CommandPaletteState, ContextMenuState, ThemeSelectionState},
};
use crate::theme::{PaletteType, Theme};
use crossterm::event::KeyCode;

pub fn update(state: &mut AppState, action: &Action) -> UpdateResult {
    match action {
        Action::EnterCommandMode => {
            state.mode = AppMode::CommandPalette;
            state.command_palette = Some(CommandPaletteState::open());
            UpdateResult::Handled(None)
        }
        Action::CancelMode => {
            state.mode = AppMode::Normal;
            state.prompt = None;
            state.confirm = None;
            state.command_palette = None;
            state.last_error = None;
            state.context_menu = None;
            state.theme_selection = None;
            UpdateResult::Handled(None)
        }
        Action::DismissError => {
            state.last_error = None;
            UpdateResult::Handled(None)
        }
        Action::ToggleHelp => {
            state.mode = if state.mode == AppMode::Help {
                AppMode::Normal
            } else {
                AppMode::Help
            };
            UpdateResult::Handled(None)
        }
        Action::EnterThemeSelection => {
            state.mode = AppMode::ThemeSelection;
            state.theme_selection = Some(ThemeSelectionState::starting_at(state.palette_type));
            UpdateResult::Handled(None)
        }
        Action::TextAreaInput(key) => {
            if let Some(prompt) = &mut state.prompt {
                prompt.text_area.input(*key);
                prompt.validation = None;
            } else if let Some(cp) = &mut state.command_palette {
                match key.code {
                    KeyCode::Char(c) => cp.push(c),
                    KeyCode::Backspace => cp.pop(),
                    _ => {}
                }
            }
            UpdateResult::Handled(None)
        }
        Action::CommandPaletteNext => {
            if let Some(cp) = &mut state.command_palette {
                if !cp.matches.is_empty() {
                    cp.selected_index = (cp.selected_index + 1) % cp.matches.len();
                }
            }
            UpdateResult::Handled(None)
        }
        Action::CommandPalettePrev => {
            if let Some(cp) = &mut state.command_palette {
                if !cp.matches.is_empty() {
                    cp.selected_index = cp
                        .selected_index
                        .checked_sub(1)
                        .unwrap_or(cp.matches.len() - 1);
                }
            }
            UpdateResult::Handled(None)
        }
        Action::CommandPaletteSelect => {
            if state.mode == AppMode::ThemeSelection {
                let palette = state
                    .theme_selection
                    .as_ref()
                    .and_then(|ts| ts.themes.get(ts.selected_index).copied());
                return UpdateResult::Handled(palette.and_then(|p| apply_theme(state, p)));
            }

            let selected = state.command_palette.take().and_then(|cp| {
                cp.matches
                    .get(cp.selected_index)
                    .and_then(|&idx| get_commands().into_iter().nth(idx))
            });
            state.mode = AppMode::Normal;
            match selected {
                Some(cmd) => UpdateResult::Handled(reducer::update(state, cmd.action)),
                None => UpdateResult::Handled(None),
            }
        }
        Action::SelectThemeNext => {
            if let Some(ts) = &mut state.theme_selection {
                ts.selected_index = (ts.selected_index + 1) % ts.themes.len();
            }
            UpdateResult::Handled(None)
        }
        Action::SelectThemePrev => {
            if let Some(ts) = &mut state.theme_selection {
                ts.selected_index = ts
                    .selected_index
                    .checked_sub(1)
                    .unwrap_or(ts.themes.len() - 1);
            }
            UpdateResult::Handled(None)
        }
        Action::OpenContextMenu(button_id, pos) => {
            let target = state
                .target_button(button_id.as_ref())
                .map(|button| button.id.clone());
            if let Some(id) = target {
                if let Some(idx) = state.buttons.iter().position(|b| b.id == id) {
                    state.list_state.select(Some(idx));
                }
                state.context_menu = Some(ContextMenuState::for_button(id, *pos));
                state.mode = AppMode::ContextMenu;
            }
            UpdateResult::Handled(None)
        }
        Action::SelectContextMenuAction(idx) => {
            let chosen = state
                .context_menu
                .take()
                .and_then(|menu| menu.actions.into_iter().nth(*idx))
                .map(|(_, action)| action);
            state.mode = AppMode::Normal;
            match chosen {
                Some(action) => UpdateResult::Handled(reducer::update(state, action)),
                None => UpdateResult::Handled(None),
            }
        }
        Action::SelectContextMenuNext => {
            if let Some(menu) = &mut state.context_menu {
                menu.selected_index = (menu.selected_index + 1) % menu.actions.len();
            }
            UpdateResult::Handled(None)
        }
        Action::SelectContextMenuPrev => {
            if let Some(menu) = &mut state.context_menu {
                menu.selected_index = menu
                    .selected_index
                    .checked_sub(1)
                    .unwrap_or(menu.actions.len() - 1);
            }
            UpdateResult::Handled(None)
        }
        Action::CloseContextMenu => {
            state.context_menu = None;
            state.mode = AppMode::Normal;
            UpdateResult::Handled(None)
        }
        _ => UpdateResult::NotHandled,
    }
}

fn apply_theme(state: &mut AppState, palette: PaletteType) -> Option<Command> {
    state.palette_type = palette;
    state.theme = Theme::from_palette_type(palette);
    state.theme_selection = None;
    state.mode = AppMode::Normal;
    Some(Command::SaveTheme(palette))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::PromptState;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn handled(result: UpdateResult) -> Option<Command> {
        match result {
            UpdateResult::Handled(cmd) => cmd,
            UpdateResult::NotHandled => panic!("not handled"),
        }
    }

    #[test]
    fn test_cancel_closes_every_dialog() {
        let mut state = AppState::default();
        state.mode = AppMode::Prompt;
        state.prompt = Some(PromptState::add());
        state.set_error("boom", crate::app::state::ErrorSeverity::Error);

        handled(update(&mut state, &Action::CancelMode));
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.prompt.is_none());
        assert!(state.last_error.is_none());
    }

    #[test]
    fn test_typing_clears_validation() {
        let mut state = AppState::default();
        let mut prompt = PromptState::add();
        prompt.validation = Some("Label cannot be empty".into());
        state.prompt = Some(prompt);

        let key = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        handled(update(&mut state, &Action::TextAreaInput(key)));
        let prompt = state.prompt.as_ref().unwrap();
        assert_eq!(prompt.text_area.text(), "x");
        assert!(prompt.validation.is_none());
    }

    #[test]
    fn test_palette_runs_selected_command() {
        let mut state = AppState::default();
        handled(update(&mut state, &Action::EnterCommandMode));
        for c in "add".chars() {
            let key = KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE);
            handled(update(&mut state, &Action::TextAreaInput(key)));
        }
        handled(update(&mut state, &Action::CommandPaletteSelect));
        assert_eq!(state.mode, AppMode::Prompt);
        assert!(state.command_palette.is_none());
    }

    #[test]
    fn test_theme_selection_saves_choice() {
        let mut state = AppState::default();
        handled(update(&mut state, &Action::EnterThemeSelection));
        handled(update(&mut state, &Action::SelectThemeNext));
        let cmd = handled(update(&mut state, &Action::CommandPaletteSelect));

        assert_eq!(cmd, Some(Command::SaveTheme(PaletteType::Nord)));
        assert_eq!(state.palette_type, PaletteType::Nord);
        assert_eq!(state.mode, AppMode::Normal);
    }

    #[test]
    fn test_context_menu_needs_a_button() {
        let mut state = AppState::default();
        handled(update(&mut state, &Action::OpenContextMenu(None, (3, 4))));
        assert_eq!(state.mode, AppMode::Normal);
        assert!(state.context_menu.is_none());
    }
}
