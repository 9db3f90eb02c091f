use crate::app::{App, Focus, InputMode};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};
use unicode_width::UnicodeWidthStr;

/// Free-text search input.
pub fn render_search(app: &App, frame: &mut Frame, area: Rect) {
    let editing = app.input_mode == InputMode::Search;
    let style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let label = if editing {
        " Search (Enter/Esc to finish): "
    } else {
        " Search (/): "
    };

    let search_bar = Paragraph::new(format!("{}{}", label, app.catalog.query))
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(style)
                .title(" Search "),
        );
    frame.render_widget(search_bar, area);

    if editing {
        let cursor_x = area.x + 1 + (label.width() + app.catalog.query.width()) as u16;
        frame.set_cursor_position((cursor_x.min(area.right().saturating_sub(2)), area.y + 1));
    }
}

/// One chip per category option; the active filter is highlighted and the
/// chip cursor is underlined while the bar has focus.
pub fn render_chips(app: &App, frame: &mut Frame, area: Rect) {
    let focused = app.focus == Focus::Filters;

    let mut spans = Vec::with_capacity(app.category_options.len() * 2);
    for (i, option) in app.category_options.iter().enumerate() {
        let mut style = if *option == app.catalog.category {
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        if focused && i == app.chip_cursor {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        spans.push(Span::styled(format!(" {} ", option.label()), style));
        spans.push(Span::raw(" "));
    }

    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let chips = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Categories (Tab) "),
        );
    frame.render_widget(chips, area);
}
