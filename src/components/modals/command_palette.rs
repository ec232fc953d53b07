use crate::app::command_palette::get_commands;
use crate::app::state::CommandPaletteState;
use crate::theme::{glyphs, Theme};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Paragraph, StatefulWidget, Widget},
};

use super::helpers::{centered_rect, draw_drop_shadow, titled_block};

const NAME_WIDTH: usize = 14;

pub struct CommandPaletteModal<'a> {
    pub theme: &'a Theme,
    pub state: &'a CommandPaletteState,
}

impl CommandPaletteModal<'_> {
    fn query_line(&self) -> Line<'_> {
        let mut spans = vec![Span::styled(" : ", self.theme.footer_segment_key), Span::raw(" ")];
        if self.state.query.is_empty() {
            spans.push(Span::styled("type to filter commands", self.theme.dimmed));
        } else {
            spans.push(Span::styled(self.state.query.as_str(), self.theme.footer_segment_val));
            spans.push(Span::styled(
                "_",
                self.theme.footer_segment_val.add_modifier(Modifier::SLOW_BLINK),
            ));
        }
        Line::from(spans)
    }
}

impl Widget for CommandPaletteModal<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let modal_area = centered_rect(60, 40, area);
        if modal_area.width < 4 || modal_area.height < 4 {
            return;
        }

        draw_drop_shadow(buf, modal_area, area);
        Clear.render(modal_area, buf);

        let title = format!(" COMMANDS {}/{} ", self.state.matches.len(), get_commands().len());
        let block = titled_block(
            &title,
            self.theme.header_active,
            self.theme.border_focus,
        );
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let [query_area, rule_area, results_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .areas(inner);

        Paragraph::new(self.query_line()).render(query_area, buf);
        buf.set_string(
            rule_area.x,
            rule_area.y,
            "\u{2500}".repeat(rule_area.width as usize),
            self.theme.border,
        );

        if self.state.matches.is_empty() {
            Paragraph::new(Span::styled("  Nothing matches.", self.theme.dimmed))
                .render(results_area, buf);
            return;
        }

        let commands = get_commands();
        let items: Vec<ListItem> = self
            .state
            .matches
            .iter()
            .filter_map(|&idx| commands.get(idx))
            .map(|cmd| {
                ListItem::new(Line::from(vec![
                    Span::styled(format!("{:<NAME_WIDTH$}", cmd.name), self.theme.list_item),
                    Span::styled(cmd.description, self.theme.dimmed),
                ]))
            })
            .collect();

        // Stateful so a long result list scrolls with the selection
        let mut list_state = ListState::default().with_selected(Some(self.state.selected_index));
        StatefulWidget::render(
            List::new(items)
                .highlight_style(self.theme.list_selected)
                .highlight_symbol(glyphs::SELECTED),
            results_area,
            buf,
            &mut list_state,
        );
    }
}
