use crate::app::state::ContextMenuState;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use super::helpers::{draw_drop_shadow, titled_block};

/// Key that does the same thing from the list.
fn shortcut(name: &str) -> &'static str {
    match name {
        "Run" => "\u{23ce}",
        "Edit" => "e",
        "Delete" => "d",
        _ => "",
    }
}

pub struct ContextMenuModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a ContextMenuState,
    /// Label of the button the menu acts on.
    pub title: &'a str,
}

impl Widget for ContextMenuModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let menu_area = self.state.calculate_rect(area);
        if menu_area.width < 3 || menu_area.height < 3 {
            return;
        }

        draw_drop_shadow(buf, menu_area, area);
        Clear.render(menu_area, buf);

        let title = format!(" {} ", self.title);
        let block = titled_block(
            &title,
            self.theme.header_item,
            self.theme.border_focus,
        );
        let inner = block.inner(menu_area);
        block.render(menu_area, buf);

        let key_width = inner.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = self
            .state
            .actions
            .iter()
            .map(|(name, _)| {
                let key = shortcut(name);
                let pad = key_width.saturating_sub(name.chars().count() + key.chars().count());
                ListItem::new(Line::from(vec![
                    Span::styled(name.as_str(), self.theme.list_item),
                    Span::raw(" ".repeat(pad)),
                    Span::styled(key, self.theme.dimmed),
                ]))
            })
            .collect();

        let mut list_state = ListState::default().with_selected(Some(self.state.selected_index));
        StatefulWidget::render(
            List::new(items)
                .highlight_style(self.theme.list_selected)
                .highlight_symbol(glyphs::SELECTED),
            inner,
            buf,
            &mut list_state,
        );
    }
}
