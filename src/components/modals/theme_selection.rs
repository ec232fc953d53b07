use crate::app::state::ThemeSelectionState;
use crate::theme::{glyphs, PaletteType, Theme};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, StatefulWidget, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow, titled_block};

pub struct ThemeSelectionModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a ThemeSelectionState,
    pub current: PaletteType,
}

impl ThemeSelectionModal<'_> {
    /// Name followed by the button accents as they look in that theme.
    fn row(&self, palette: PaletteType) -> ListItem<'static> {
        let a = Theme::from_palette_type(palette).accents;
        let mut spans = vec![Span::styled(format!("{:<20}", palette.label()), self.theme.list_item)];
        spans.extend(
            [a.red, a.orange, a.yellow, a.green, a.blue, a.purple, a.cyan, a.magenta]
                .into_iter()
                .map(|color| Span::styled(glyphs::DOT, Style::default().fg(color))),
        );
        if palette == self.current {
            spans.push(Span::styled("  current", self.theme.dimmed));
        }
        ListItem::new(Line::from(spans))
    }
}

impl Widget for ThemeSelectionModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = self.state.themes.len() as u16 + 2;
        let modal_area = centered_rect_fixed_height(50, height, area);
        if modal_area.width < 3 || modal_area.height < 3 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = titled_block(" THEME ", self.theme.header_active, self.theme.border_focus);
        let items: Vec<ListItem> = self.state.themes.iter().map(|p| self.row(*p)).collect();

        let mut list_state = ListState::default().with_selected(Some(self.state.selected_index));
        StatefulWidget::render(
            List::new(items)
                .block(block)
                .highlight_style(self.theme.list_selected)
                .highlight_symbol(glyphs::SELECTED),
            modal_area,
            buf,
            &mut list_state,
        );
    }
}
