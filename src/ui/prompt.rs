use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use unicode_width::UnicodeWidthStr;

/// Path entry for importing a collection file.
pub fn render_import(buffer: &str, frame: &mut Frame) {
    let area = super::centered_box(60, 7, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Import Recipes ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    let prompt = Paragraph::new("Path to a JSON recipe file:").alignment(Alignment::Left);
    frame.render_widget(prompt, chunks[0]);

    let field = Paragraph::new(format!("> {}", buffer)).style(Style::default().fg(Color::Cyan));
    frame.render_widget(field, chunks[2]);

    let help = Paragraph::new("Enter: Import | Esc: Cancel")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[3]);

    let cursor_x = chunks[2].x + 2 + buffer.width() as u16;
    frame.set_cursor_position((cursor_x.min(chunks[2].right().saturating_sub(1)), chunks[2].y));
}

/// Blocking message; any key dismisses it.
pub fn render_alert(message: &str, frame: &mut Frame) {
    let area = super::centered_box(60, 7, frame.area());
    frame.render_widget(Clear, area);

    let alert = Paragraph::new(message)
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red))
                .title_bottom(
                    Line::from(" Press any key ").style(Style::default().fg(Color::DarkGray)),
                ),
        );
    frame.render_widget(alert, area);
}
