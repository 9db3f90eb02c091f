use crate::app::DetailOverlay;
use crate::recipe::Recipe;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub const NO_IMAGE: &str = "No image";

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

fn label(text: &str) -> Span<'static> {
    Span::styled(text.to_string(), Style::default().fg(Color::DarkGray))
}

fn numbered(items: &[String]) -> Vec<Line<'static>> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Line::from(vec![
                Span::styled(format!(" {:>2}. ", i + 1), Style::default().fg(Color::DarkGray)),
                Span::raw(item.clone()),
            ])
        })
        .collect()
}

/// Title, description, times, servings and the image carousel.
pub fn summary_lines(detail: &DetailOverlay) -> Vec<Line<'static>> {
    let recipe = &detail.recipe;
    let mut lines = vec![
        Line::from(Span::styled(
            recipe.title.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            recipe.description_text().to_string(),
            Style::default().fg(Color::Gray),
        )),
        Line::from(""),
        Line::from(vec![
            label("Prep: "),
            Span::raw(format!("{} min", recipe.prep_minutes())),
            Span::raw("   "),
            label("Cook: "),
            Span::raw(format!("{} min", recipe.cook_minutes())),
            Span::raw("   "),
            label("Serves: "),
            Span::raw(
                recipe
                    .servings
                    .as_ref()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "-".to_string()),
            ),
        ]),
        Line::from(""),
    ];

    match detail.primary_image() {
        Some(image) => {
            lines.push(Line::from(vec![
                label("Image: "),
                Span::styled(
                    image.to_string(),
                    Style::default()
                        .fg(Color::Blue)
                        .add_modifier(Modifier::UNDERLINED),
                ),
            ]));

            let mut strip = vec![label("Thumbnails: ")];
            for i in 0..recipe.images.len() {
                let style = if i == detail.active_image {
                    Style::default()
                        .bg(Color::Yellow)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                strip.push(Span::styled(format!(" {} ", i + 1), style));
                strip.push(Span::raw(" "));
            }
            lines.push(Line::from(strip));
        }
        None => {
            lines.push(Line::from(Span::styled(
                NO_IMAGE,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )));
        }
    }

    lines
}

/// Ingredients, steps and, when present, nutrition facts.
pub fn body_lines(recipe: &Recipe) -> Vec<Line<'static>> {
    let mut lines = vec![heading("Ingredients")];
    lines.extend(numbered(&recipe.ingredients));
    lines.push(Line::from(""));
    lines.push(heading("Steps"));
    lines.extend(numbered(&recipe.steps));

    if let Some(n) = &recipe.nutrition {
        lines.push(Line::from(""));
        lines.push(heading("Nutrition"));
        lines.push(Line::from(format!(
            " Calories {} kcal. Protein {} g. Fat {} g. Carbs {} g.",
            n.calories, n.protein, n.fat, n.carbs
        )));
    }

    lines
}

pub fn render(detail: &DetailOverlay, frame: &mut Frame) {
    let area = super::centered_rect(85, 85, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Recipe ")
        .title_bottom(
            Line::from(" ←/→ or 1-9 Image   ↑/↓ Scroll   Esc Close ")
                .style(Style::default().fg(Color::DarkGray)),
        );
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(inner);

    let summary = Paragraph::new(summary_lines(detail)).wrap(Wrap { trim: false });
    frame.render_widget(summary, columns[0]);

    let body = Paragraph::new(body_lines(&detail.recipe))
        .wrap(Wrap { trim: false })
        .scroll((detail.scroll, 0))
        .block(
            Block::default()
                .borders(Borders::LEFT)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(body, columns[1]);
}
