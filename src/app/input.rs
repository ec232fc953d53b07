use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::components::button_list::{resolve_clicked_row, ROW_HEIGHT};
use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState<'_>,
    terminal_size: Size,
) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);

    let key = match event {
        Event::Resize(w, h) => return Some(Action::Resize(w, h)),
        Event::Mouse(mouse) => return map_mouse(mouse, app_state, area),
        Event::Key(key) if key.kind != KeyEventKind::Release => key,
        _ => return None,
    };

    // The error modal sits on top of everything else
    if app_state.last_error.is_some() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::DismissError),
            _ => None,
        };
    }

    match app_state.mode {
        AppMode::Normal => match key.code {
            KeyCode::Char('m') => app_state.selected_button().map(|button| {
                let row = app_state.list_state.selected().unwrap_or(0);
                let offset = app_state.list_state.offset();
                let list = ui::list_area(area);
                let rows_down = u16::try_from(row.saturating_sub(offset)).unwrap_or(u16::MAX);
                let y = list
                    .y
                    .saturating_add(rows_down.saturating_mul(ROW_HEIGHT))
                    .saturating_add(1)
                    .min(list.bottom().saturating_sub(1));
                Action::OpenContextMenu(Some(button.id.clone()), (list.x + 4, y))
            }),
            _ => app_state.keymap.get_action(key, app_state.mode),
        },
        AppMode::Prompt => match key.code {
            KeyCode::Esc => Some(Action::CancelMode),
            KeyCode::Enter => app_state
                .prompt
                .as_ref()
                .map(|prompt| Action::SubmitPrompt(prompt.text_area.text())),
            _ => Some(Action::TextAreaInput(key)),
        },
        AppMode::Confirm => match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => Some(Action::ConfirmAccept),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => Some(Action::ConfirmReject),
            _ => None,
        },
        AppMode::ContextMenu => match key.code {
            KeyCode::Esc => Some(Action::CloseContextMenu),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectContextMenuNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectContextMenuPrev),
            KeyCode::Enter => app_state
                .context_menu
                .as_ref()
                .map(|menu| Action::SelectContextMenuAction(menu.selected_index)),
            _ => None,
        },
        AppMode::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('q' | '?') => Some(Action::ToggleHelp),
            _ => None,
        },
        AppMode::CommandPalette => match key.code {
            KeyCode::Esc => Some(Action::CancelMode),
            KeyCode::Enter => Some(Action::CommandPaletteSelect),
            KeyCode::Up => Some(Action::CommandPalettePrev),
            KeyCode::Down | KeyCode::Tab => Some(Action::CommandPaletteNext),
            KeyCode::Char('p') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::CommandPalettePrev)
            }
            KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::CommandPaletteNext)
            }
            _ => Some(Action::TextAreaInput(key)),
        },
        AppMode::ThemeSelection => match key.code {
            KeyCode::Esc => Some(Action::CancelMode),
            KeyCode::Char('j') | KeyCode::Down => Some(Action::SelectThemeNext),
            KeyCode::Char('k') | KeyCode::Up => Some(Action::SelectThemePrev),
            KeyCode::Enter => Some(Action::CommandPaletteSelect),
            _ => None,
        },
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState<'_>, area: Rect) -> Option<Action> {
    if app_state.last_error.is_some() {
        return None;
    }

    match app_state.mode {
        AppMode::Normal => {
            let list = ui::list_area(area);
            let inside = mouse.column >= list.x
                && mouse.column < list.right()
                && mouse.row >= list.y
                && mouse.row < list.bottom();

            match mouse.kind {
                MouseEventKind::ScrollUp => Some(Action::SelectPrev),
                MouseEventKind::ScrollDown => Some(Action::SelectNext),
                MouseEventKind::Down(button @ (MouseButton::Left | MouseButton::Right))
                    if inside =>
                {
                    let idx = resolve_clicked_row(
                        app_state.list_state.offset(),
                        mouse.row - list.y,
                        app_state.buttons.len(),
                    )?;
                    if button == MouseButton::Left {
                        Some(Action::ExecuteButtonAt(idx))
                    } else {
                        let id = app_state.buttons.get(idx)?.id.clone();
                        Some(Action::OpenContextMenu(
                            Some(id),
                            (mouse.column, mouse.row),
                        ))
                    }
                }
                _ => None,
            }
        }
        AppMode::ContextMenu => match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                let Some(menu) = &app_state.context_menu else {
                    return Some(Action::CloseContextMenu);
                };
                let menu_area = menu.calculate_rect(area);
                if mouse.column >= menu_area.x
                    && mouse.column < menu_area.right()
                    && mouse.row > menu_area.y
                    && mouse.row < menu_area.bottom().saturating_sub(1)
                {
                    // Content starts below the top border
                    let clicked_idx = (mouse.row - (menu_area.y + 1)) as usize;
                    Some(Action::SelectContextMenuAction(clicked_idx))
                } else {
                    Some(Action::CloseContextMenu)
                }
            }
            MouseEventKind::Down(_) => Some(Action::CloseContextMenu),
            _ => None,
        },
        _ => None,
    }
}
