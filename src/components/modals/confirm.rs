use crate::app::state::ConfirmState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow, titled_block};

pub struct ConfirmModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a ConfirmState,
}

impl Widget for ConfirmModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect_fixed_height(50, 6, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = titled_block(" DELETE BUTTON ", self.theme.header_warn, self.theme.header_warn);

        let text = vec![
            Line::from(""),
            Line::from(Span::styled(self.state.question(), self.theme.list_item)),
            Line::from(""),
            Line::from(vec![
                Span::styled(" y ", self.theme.status_error),
                Span::raw(" delete   "),
                Span::styled(" n ", self.theme.footer_segment_key),
                Span::raw(" keep "),
            ]),
        ];

        Paragraph::new(text)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(modal_area, buf);
    }
}
