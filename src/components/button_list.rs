use crate::domain::models::ButtonRecord;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

/// Title line plus command line.
pub const ROW_HEIGHT: u16 = 2;

pub struct ButtonList<'a> {
    pub buttons: &'a [ButtonRecord],
    pub theme: &'a Theme,
}

impl StatefulWidget for ButtonList<'_> {
    type State = ListState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut Self::State) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.buttons.is_empty() {
            let hint = vec![
                Line::from(""),
                Line::from(Span::styled("No script buttons yet.", self.theme.empty_hint)),
                Line::from(vec![
                    Span::styled("Press ", self.theme.empty_hint),
                    Span::styled(" a ", self.theme.footer_segment_key),
                    Span::styled(" to add one.", self.theme.empty_hint),
                ]),
            ];
            Paragraph::new(hint)
                .alignment(Alignment::Center)
                .render(area, buf);
            return;
        }

        let items: Vec<ListItem> = self
            .buttons
            .iter()
            .map(|button| {
                let accent = Style::default().fg(self.theme.accent(&button.color));
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(format!(" {} ", glyphs::DOT), accent),
                        Span::styled(button.title(), self.theme.button_title),
                    ]),
                    Line::from(vec![
                        Span::raw("   "),
                        Span::styled(button.command.as_str(), self.theme.button_command),
                    ]),
                ])
            })
            .collect();

        let list = List::new(items)
            .highlight_style(self.theme.button_selected)
            .highlight_symbol(glyphs::SELECTED);
        StatefulWidget::render(list, area, buf, state);
    }
}

/// Maps a row inside the list area to a button index.
#[must_use]
pub fn resolve_clicked_row(offset: usize, clicked_row: u16, len: usize) -> Option<usize> {
    let idx = offset + usize::from(clicked_row / ROW_HEIGHT);
    (idx < len).then_some(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::ButtonId;

    fn buttons() -> Vec<ButtonRecord> {
        ["Build", "Test"]
            .iter()
            .map(|label| ButtonRecord {
                id: ButtonId::from(*label),
                label: (*label).to_string(),
                command: format!("cargo {}", label.to_lowercase()),
                emoji: "🔨".to_string(),
                color: "charts.orange".to_string(),
            })
            .collect()
    }

    fn row_text(buf: &Buffer, y: u16) -> String {
        (0..buf.area.width)
            .map(|x| buf[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_resolve_clicked_row() {
        assert_eq!(resolve_clicked_row(0, 0, 2), Some(0));
        assert_eq!(resolve_clicked_row(0, 1, 2), Some(0));
        assert_eq!(resolve_clicked_row(0, 2, 2), Some(1));
        assert_eq!(resolve_clicked_row(0, 4, 2), None);
        assert_eq!(resolve_clicked_row(3, 0, 5), Some(3));
    }

    #[test]
    fn test_renders_title_and_command() {
        let theme = Theme::default();
        let buttons = buttons();
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        let mut state = ListState::default().with_selected(Some(0));

        ButtonList {
            buttons: &buttons,
            theme: &theme,
        }
        .render(area, &mut buf, &mut state);

        assert!(row_text(&buf, 0).contains("Build"));
        assert!(row_text(&buf, 1).contains("cargo build"));
        assert!(row_text(&buf, 2).contains("Test"));
        assert!(row_text(&buf, 3).contains("cargo test"));
    }

    #[test]
    fn test_empty_state_hint() {
        let theme = Theme::default();
        let area = Rect::new(0, 0, 40, 4);
        let mut buf = Buffer::empty(area);
        ButtonList {
            buttons: &[],
            theme: &theme,
        }
        .render(area, &mut buf, &mut ListState::default());

        assert!(row_text(&buf, 1).contains("No script buttons yet."));
    }
}
