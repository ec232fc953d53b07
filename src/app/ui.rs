use crate::app::state::{AppMode, AppState};
use crate::components::{button_list::ButtonList, footer::Footer, header::Header, modals::ModalManager};
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

pub struct AppLayout {
    pub header: Rect,
    pub body: Rect,
    pub footer: Rect,
}

pub fn get_layout(area: Rect) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Footer
        ])
        .split(area);

    AppLayout {
        header: main[0],
        body: main[1],
        footer: main[2],
    }
}

fn list_block<'a>(theme: &Theme, focused: bool, count: usize) -> Block<'a> {
    let (border, title_style) = if focused {
        (theme.border_focus, theme.header_active)
    } else {
        (theme.border, theme.header_item)
    };
    Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(" SCRIPT BUTTONS ", title_style),
            Span::raw(" "),
        ]))
        .title_bottom(Line::from(vec![
            Span::raw(" "),
            Span::styled(format!("{count}"), theme.footer_segment_key),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
}

/// Where the button rows are drawn, for mapping mouse clicks.
pub fn list_area(area: Rect) -> Rect {
    Block::default()
        .borders(Borders::ALL)
        .inner(get_layout(area).body)
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area());

    // --- Header ---
    f.render_widget(
        Header {
            state: app_state,
            theme: &app_state.theme,
        },
        layout.header,
    );

    // --- Button List ---
    let block = list_block(
        &app_state.theme,
        app_state.mode == AppMode::Normal,
        app_state.buttons.len(),
    );
    let inner = block.inner(layout.body);
    f.render_widget(block, layout.body);
    f.render_stateful_widget(
        ButtonList {
            buttons: &app_state.buttons,
            theme: &app_state.theme,
        },
        inner,
        &mut app_state.list_state,
    );

    // --- Footer ---
    f.render_widget(
        Footer {
            state: app_state,
            theme: &app_state.theme,
        },
        layout.footer,
    );

    // --- Modals ---
    f.render_widget(
        ModalManager {
            theme: &app_state.theme,
            app_state,
        },
        f.area(),
    );
}
