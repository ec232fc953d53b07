use crate::app::state::PromptState;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Clear, Widget},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow, titled_block};

pub struct PromptModal<'a, 'b> {
    pub theme: &'a Theme,
    pub prompt: &'a PromptState<'b>,
}

impl Widget for PromptModal<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect_fixed_height(60, 7, area);
        if modal_area.width == 0 || modal_area.height == 0 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let block = titled_block(
            self.prompt.title(),
            self.theme.header_active,
            self.theme.border_focus,
        );
        let inner_area = block.inner(modal_area);
        block.render(modal_area, buf);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Prompt
                Constraint::Length(1), // Input
                Constraint::Length(1), // Separator
                Constraint::Length(1), // Validation / hint
                Constraint::Min(0),
            ])
            .split(inner_area);

        let step = Line::from(vec![
            Span::styled(" > ", self.theme.footer_segment_key),
            Span::styled(format!(" {}", self.prompt.prompt()), self.theme.list_item),
        ]);
        buf.set_line(rows[0].x, rows[0].y, &step, rows[0].width);

        let input_area = Rect {
            x: rows[1].x + 1,
            width: rows[1].width.saturating_sub(2),
            ..rows[1]
        };
        if self.prompt.text_area.text().is_empty() {
            buf.set_string(
                input_area.x,
                input_area.y,
                self.prompt.placeholder(),
                self.theme.dimmed,
            );
        } else if input_area.width > 0 {
            Widget::render(&self.prompt.text_area, input_area, buf);
        }

        let separator = "\u{2500}".repeat(rows[2].width as usize);
        buf.set_string(rows[2].x, rows[2].y, separator, self.theme.border);

        let hint = match &self.prompt.validation {
            Some(message) => Line::from(Span::styled(
                format!(" {message} "),
                self.theme.status_error,
            )),
            None => Line::from(vec![
                Span::styled(" Enter", self.theme.footer_segment_key),
                Span::styled(" accept  ", self.theme.list_item),
                Span::styled("Esc", self.theme.footer_segment_key),
                Span::styled(" cancel", self.theme.list_item),
            ]),
        };
        buf.set_line(rows[3].x, rows[3].y, &hint, rows[3].width);
    }
}
