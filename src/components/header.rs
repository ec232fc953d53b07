use crate::app::state::AppState;
use crate::theme::{glyphs, Theme};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct Header<'a, 'b> {
    pub state: &'a AppState<'b>,
    pub theme: &'a Theme,
}

impl Widget for Header<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Segment background colors for separator transitions
        let logo_bg = self.theme.header_logo.bg.unwrap_or(Color::Reset);
        let workspace_bg = self.theme.header_workspace.bg.unwrap_or(Color::Reset);
        let session_bg = self.theme.header_session.bg.unwrap_or(Color::Reset);
        let stats_bg = self.theme.header_stats.bg.unwrap_or(Color::Reset);
        let base_bg = self.theme.header.bg.unwrap_or(Color::Reset);

        let workspace = if self.state.workspace_label.is_empty() {
            "no workspace"
        } else {
            self.state.workspace_label.as_str()
        };
        let count = self.state.buttons.len();
        let stats = format!(
            " {count} button{} ",
            if count == 1 { "" } else { "s" }
        );

        let spans = vec![
            Span::styled(
                format!(" {} SCRIPT BUTTONS ", glyphs::LOGO),
                self.theme.header_logo,
            ),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(logo_bg).bg(workspace_bg)),
            Span::styled(
                format!(" {} {workspace} ", glyphs::FOLDER),
                self.theme.header_workspace,
            ),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(workspace_bg).bg(session_bg)),
            Span::styled(
                format!(" {} {} ", glyphs::TERMINAL, self.state.session_label),
                self.theme.header_session,
            ),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(session_bg).bg(stats_bg)),
            Span::styled(stats, self.theme.header_stats),
            Span::styled(glyphs::SEP_RIGHT, Style::default().fg(stats_bg).bg(base_bg)),
            // Fill rest of line
            Span::styled(" ".repeat(area.width as usize), self.theme.header),
        ];

        Paragraph::new(Line::from(spans))
            .style(self.theme.header)
            .render(area, buf);
    }
}
