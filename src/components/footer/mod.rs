mod groups;

use crate::app::state::{AppState, ErrorSeverity};
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct FooterItem {
    pub key: &'static str,
    pub desc: &'static str,
    pub highlighted: bool,
}

pub struct FooterGroup {
    pub name: &'static str,
    pub items: Vec<FooterItem>,
}

pub struct Footer<'a, 'b> {
    pub state: &'a AppState<'b>,
    pub theme: &'a Theme,
}

impl Footer<'_, '_> {
    fn status(&self) -> Span<'static> {
        let theme = self.theme;
        match (&self.state.last_error, &self.state.status_message) {
            (Some(err), _) => {
                let style = if err.severity >= ErrorSeverity::Error {
                    theme.status_error
                } else {
                    theme.status_warn
                };
                if err.followups.is_empty() {
                    Span::styled(format!(" {} ", err.message), style)
                } else {
                    Span::styled(
                        format!(" {} (+{} more) ", err.message, err.followups.len()),
                        style,
                    )
                }
            }
            (None, Some(msg)) => Span::styled(format!(" {msg} "), theme.status_info),
            (None, None) => Span::styled(" READY ", theme.status_ready),
        }
    }

    fn item_spans(&self, item: &FooterItem) -> [Span<'static>; 3] {
        let (key_style, desc_style) = if item.highlighted {
            (
                self.theme.header_active,
                self.theme.header_active.add_modifier(Modifier::DIM),
            )
        } else {
            (self.theme.footer_segment_key, self.theme.footer_segment_val)
        };
        [
            Span::styled(format!(" {} ", item.key), key_style),
            Span::styled(format!(" {} ", item.desc), desc_style),
            Span::raw(" "),
        ]
    }
}

impl Widget for Footer<'_, '_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let budget = usize::from(area.width.saturating_sub(2));
        let mut spans = vec![self.status(), Span::raw("  ")];
        let mut used: usize = spans.iter().map(Span::width).sum();
        let show_names = area.width > 100;

        // Hints are dropped from the end, whole items at a time
        'groups: for group in groups::get_groups(self.state) {
            if show_names {
                let name = Span::styled(format!("{}: ", group.name), self.theme.footer_group_name);
                if used + name.width() >= budget {
                    break;
                }
                used += name.width();
                spans.push(name);
            }
            for item in &group.items {
                let parts = self.item_spans(item);
                let width: usize = parts.iter().map(Span::width).sum();
                if used + width > budget {
                    break 'groups;
                }
                used += width;
                spans.extend(parts);
            }
            spans.push(Span::raw(" "));
            used += 1;
        }

        Paragraph::new(Line::from(spans))
            .style(self.theme.footer)
            .render(area, buf);
    }
}
