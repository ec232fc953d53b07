use super::super::action::Action;
use crate::domain::models::ButtonId;
use ratatui::layout::Rect;

#[derive(Debug, Clone, PartialEq)]
pub struct ContextMenuState {
    pub button_id: ButtonId,
    pub x: u16,
    pub y: u16,
    pub selected_index: usize,
    pub actions: Vec<(String, Action)>,
}

impl ContextMenuState {
    #[must_use]
    pub fn for_button(button_id: ButtonId, (x, y): (u16, u16)) -> Self {
        let actions = vec![
            ("Run".to_string(), Action::ExecuteButton(Some(button_id.clone()))),
            ("Edit".to_string(), Action::EditButtonIntent(Some(button_id.clone()))),
            ("Delete".to_string(), Action::DeleteButtonIntent(Some(button_id.clone()))),
        ];
        Self {
            button_id,
            x,
            y,
            selected_index: 0,
            actions,
        }
    }

    #[must_use]
    pub fn calculate_rect(&self, terminal_area: Rect) -> Rect {
        let longest_action = self
            .actions
            .iter()
            .map(|(name, _)| name.len())
            .max()
            .unwrap_or(0) as u16;
        let menu_width = (longest_action + 6).min(terminal_area.width);
        let menu_height = (self.actions.len() as u16 + 2).min(terminal_area.height);

        let mut x = self.x;
        let mut y = self.y;

        if x + menu_width > terminal_area.width {
            x = terminal_area.width.saturating_sub(menu_width);
        }

        if y + menu_height > terminal_area.height {
            y = y.saturating_sub(menu_height);
        }

        Rect::new(x, y, menu_width, menu_height)
    }
}
