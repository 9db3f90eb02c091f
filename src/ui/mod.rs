mod detail;
mod filters;
mod grid;
mod help;
mod prompt;

use crate::app::{App, ImportState, InputMode};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

/// Top-level render: main screen, then whichever overlays are open.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Layout: header(1) + search(3) + categories(3) + grid(min) + status(1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(app, frame, chunks[0]);
    filters::render_search(app, frame, chunks[1]);
    filters::render_chips(app, frame, chunks[2]);
    grid::render(app, frame, chunks[3]);
    render_status(app, frame, chunks[4]);

    if let Some(detail) = &app.detail {
        detail::render(detail, frame);
    }
    if app.input_mode == InputMode::ImportPath {
        prompt::render_import(&app.import_buffer, frame);
    }
    if let Some(message) = &app.alert {
        prompt::render_alert(message, frame);
    }
    if app.show_help {
        help::render(frame);
    }
}

fn render_header(app: &App, frame: &mut Frame, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(8)])
        .split(area);

    let header = Line::from(vec![
        Span::styled(
            " Recipe Browser",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "   [{} shown / {} total]",
                app.visible.len(),
                app.catalog.recipes().len()
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(header), chunks[0]);

    let year = Paragraph::new(format!("© {} ", app.year))
        .style(Style::default().fg(Color::DarkGray))
        .alignment(ratatui::layout::Alignment::Right);
    frame.render_widget(year, chunks[1]);
}

fn render_status(app: &App, frame: &mut Frame, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(" Enter", key_style),
        Span::raw(" Open  "),
        Span::styled("/", key_style),
        Span::raw(" Search  "),
        Span::styled("Tab", key_style),
        Span::raw(" Categories  "),
        Span::styled("e", key_style),
        Span::raw(" Export  "),
        Span::styled("i", key_style),
        Span::raw(" Import  "),
        Span::styled("?", key_style),
        Span::raw(" Help  "),
        Span::styled("q", key_style),
        Span::raw(" Quit  "),
    ];
    if app.import_state == ImportState::Importing {
        spans.push(Span::styled("[importing] ", Style::default().fg(Color::Yellow)));
    }
    spans.push(Span::styled(
        app.status_msg.as_str(),
        Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Create a centered rectangle using percentage of parent area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);

    horizontal[1]
}

/// Centered rectangle with a fixed height in rows.
fn centered_box(percent_x: u16, height: u16, area: Rect) -> Rect {
    let height = height.min(area.height);
    let y = area.y + (area.height - height) / 2;
    let band = Rect {
        x: area.x,
        y,
        width: area.width,
        height,
    };
    centered_rect(percent_x, 100, band)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::Action;
    use crate::messages::CatalogMessage;
    use crate::recipe::sample;
    use ratatui::{Terminal, backend::TestBackend};
    use std::path::PathBuf;

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn app_with(recipes: Vec<crate::recipe::Recipe>) -> App {
        let mut app = App::new(PathBuf::from("."));
        app.update_layout(100, 40);
        app.apply_message(CatalogMessage::Loaded(Ok(recipes)));
        app
    }

    #[test]
    fn test_main_screen_shows_cards_chips_and_count() {
        let mut soup = sample("1", "Mercimek", &["Corba"]);
        soup.images = vec!["mercimek.jpg".into()];
        let app = app_with(vec![soup, sample("2", "Pilav", &["Ana Yemek"])]);

        let out = screen(&app);
        assert!(out.contains("Recipe Browser"));
        assert!(out.contains("[2 shown / 2 total]"));
        assert!(out.contains(" All "));
        assert!(out.contains(" Ana Yemek "));
        assert!(out.contains("mercimek.jpg"));
        assert!(out.contains("Pilav"));
        assert_eq!(out.matches("View recipe").count(), 2);
        assert_eq!(out.matches('▣').count(), 1);
    }

    #[test]
    fn test_detail_overlay_without_images_shows_indicator() {
        let mut app = app_with(vec![sample("1", "Ayran", &["Icecek"])]);
        app.dispatch(Action::OpenDetail("1".to_string()));

        let out = screen(&app);
        assert!(out.contains("No image"));
        assert!(out.contains("Ingredients"));
        assert!(!out.contains("Nutrition"));
    }

    #[test]
    fn test_failed_load_still_renders() {
        let mut app = App::new(PathBuf::from("."));
        app.apply_message(CatalogMessage::Loaded(Err(
            crate::error::CatalogError::NotArray,
        )));

        let out = screen(&app);
        assert!(out.contains("[0 shown / 0 total]"));
        assert!(out.contains("No recipes to show"));
    }

    #[test]
    fn test_alert_overlay_renders_message() {
        let mut app = app_with(Vec::new());
        app.alert = Some("Invalid JSON format. An array was expected.".to_string());
        let out = screen(&app);
        assert!(out.contains("Invalid JSON format."));
    }

    #[test]
    fn test_centered_box_fits_area() {
        let area = Rect::new(0, 0, 100, 40);
        let inner = centered_box(60, 7, area);
        assert_eq!(inner.height, 7);
        assert_eq!(inner.y, 16);
        assert!(inner.width <= 60);
    }
}
