use crate::app::state::{ErrorSeverity, ErrorState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{BorderType, Clear, Paragraph, Widget, Wrap},
};

use super::helpers::{centered_rect_fixed_height, draw_drop_shadow, titled_block};

pub struct ErrorModal<'a> {
    pub theme: &'a Theme,
    pub error: &'a ErrorState,
}

impl ErrorModal<'_> {
    fn heading(&self) -> (&'static str, Style) {
        match self.error.severity {
            ErrorSeverity::Info => ("INFO", self.theme.header_item),
            ErrorSeverity::Warning => ("WARNING", self.theme.header_warn),
            ErrorSeverity::Error => ("ERROR", self.theme.status_error),
            ErrorSeverity::Critical => ("CRITICAL", self.theme.status_error),
        }
    }

    fn body(&self, accent: Style) -> Vec<Line<'_>> {
        let mut lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                self.error.message.as_str(),
                self.theme.footer_segment_val,
            )),
            Line::from(Span::styled(
                self.error.timestamp.format("at %H:%M:%S").to_string(),
                self.theme.dimmed,
            )),
        ];
        lines.extend(self.error.followups.iter().map(|more| {
            Line::from(Span::styled(more.as_str(), self.theme.footer_segment_val))
        }));

        if !self.error.suggestions.is_empty() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled("Suggestions:", accent)));
            lines.extend(self.error.suggestions.iter().map(|tip| {
                Line::from(vec![
                    Span::styled("\u{2022} ", accent),
                    Span::styled(tip.as_str(), self.theme.list_item),
                ])
            }));
        }
        lines
    }
}

impl Widget for ErrorModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Borders, blank, message, time, queued messages, plus "Suggestions:" and one row each
        let tips = self.error.suggestions.len() as u16;
        let height = 6
            + self.error.followups.len() as u16
            + if tips > 0 { tips + 2 } else { 0 };
        let modal_area = centered_rect_fixed_height(60, height, area);
        if modal_area.width < 3 || modal_area.height < 3 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let (heading, accent) = self.heading();
        let block = titled_block(heading, accent, accent)
            .border_type(BorderType::Double)
            .title_bottom(
                Line::from(vec![
                    Span::raw(" "),
                    Span::styled("Esc", self.theme.footer_segment_key),
                    Span::raw(" / "),
                    Span::styled("Enter", self.theme.footer_segment_key),
                    Span::raw(" dismiss "),
                ])
                .right_aligned(),
            );

        Paragraph::new(self.body(accent))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .block(block)
            .render(modal_area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_message_and_suggestions() {
        let theme = Theme::default();
        let error = ErrorState::new(
            "No workspace folder open. Cannot save script buttons.",
            ErrorSeverity::Warning,
        );
        let area = Rect::new(0, 0, 120, 30);
        let mut buf = Buffer::empty(area);
        ErrorModal {
            theme: &theme,
            error: &error,
        }
        .render(area, &mut buf);

        let text: String = buf.content().iter().map(|c| c.symbol()).collect();
        assert!(text.contains("WARNING"));
        assert!(text.contains("No workspace folder open."));
        assert!(text.contains("Suggestions:"));
    }
}
