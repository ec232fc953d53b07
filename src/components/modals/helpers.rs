use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
};

/// Fades everything already drawn in `area` behind an open dialog.
pub fn dim_area(buf: &mut Buffer, area: Rect) {
    buf.set_style(
        area.intersection(buf.area),
        Style::default().add_modifier(Modifier::DIM),
    );
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    center(
        r,
        Constraint::Percentage(percent_x.min(100)),
        Constraint::Percentage(percent_y.min(100)),
    )
}

pub fn centered_rect_fixed_height(percent_x: u16, height: u16, r: Rect) -> Rect {
    center(
        r,
        Constraint::Percentage(percent_x.min(100)),
        Constraint::Length(height.min(r.height)),
    )
}

fn center(r: Rect, horizontal: Constraint, vertical: Constraint) -> Rect {
    let [row] = Layout::vertical([vertical]).flex(Flex::Center).areas(r);
    let [cell] = Layout::horizontal([horizontal]).flex(Flex::Center).areas(row);
    cell
}

/// One cell down and right of `area`, clipped to the screen.
pub fn draw_drop_shadow(buf: &mut Buffer, area: Rect, terminal_area: Rect) {
    let shadow = area
        .offset(ratatui::layout::Offset { x: 1, y: 1 })
        .intersection(terminal_area);
    for pos in shadow.positions() {
        buf[pos].set_symbol(" ").set_style(Style::default().bg(Color::Black));
    }
}

/// Rounded, focused block with a padded title, shared by the dialogs.
pub fn titled_block<'a>(title: &'a str, title_style: Style, border_style: Style) -> Block<'a> {
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(title, title_style),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed_height() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect_fixed_height(60, 7, area);
        assert_eq!(rect.height, 7);
        assert_eq!(rect.width, 60);
        assert!((16..=17).contains(&rect.y));
    }

    #[test]
    fn test_shadow_is_clipped_to_terminal() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        draw_drop_shadow(&mut buf, Rect::new(5, 2, 5, 3), area);
        assert_eq!(buf[(9, 4)].bg, Color::Black);
        assert_ne!(buf[(5, 2)].bg, Color::Black);
    }
}
