use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Cell, Clear, Row, Table, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow, titled_block};

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation",
        &[
            (" j / \u{2193}", "Select next button"),
            (" k / \u{2191}", "Select previous button"),
            (" g / G", "First / last button"),
            (" Scroll", "Move the selection"),
        ],
    ),
    (
        "Buttons",
        &[
            (" Enter / Click", "Run the command in the terminal"),
            (" a", "Add a button"),
            (" e", "Edit the selected button"),
            (" d / Del", "Delete the selected button"),
            (" m / Right click", "Run / Edit / Delete menu"),
            (" r", "Refresh the list"),
        ],
    ),
    (
        "General",
        &[
            (" :", "Command palette"),
            (" T", "Choose a theme"),
            (" ?", "Show this help"),
            (" Esc", "Close modal / Clear errors"),
            (" q", "Quit"),
        ],
    ),
];

pub struct HelpModal<'a> {
    pub theme: &'a Theme,
}

impl Widget for HelpModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let help_area = centered_rect(70, 80, area);
        if help_area.width == 0 || help_area.height == 0 {
            return;
        }
        draw_drop_shadow(buf, help_area, area);
        Clear.render(help_area, buf);

        let block = titled_block(
            " HELP - KEYBINDINGS ",
            self.theme.header_active,
            self.theme.border_focus,
        );

        let mut rows = Vec::new();
        for (i, (category, bindings)) in SECTIONS.iter().enumerate() {
            if i > 0 {
                rows.push(Row::new(vec![Cell::from(""), Cell::from("")]));
            }
            rows.push(Row::new(vec![
                Cell::from(Span::styled(*category, self.theme.header_item)),
                Cell::from(""),
            ]));
            for (key, desc) in *bindings {
                rows.push(Row::new(vec![
                    Cell::from(Span::styled(*key, self.theme.footer_segment_key)),
                    Cell::from(Span::styled(*desc, self.theme.list_item)),
                ]));
            }
        }

        Table::new(rows, [Constraint::Percentage(30), Constraint::Percentage(70)])
            .block(block)
            .render(help_area, buf);
    }
}
