use crate::app::{App, CARD_HEIGHT, Focus, LoadState};
use crate::recipe::Recipe;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Text content of one grid card.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCard<'a> {
    pub title: &'a str,
    /// Primary image; cards without images get no image line at all.
    pub image: Option<&'a str>,
    pub description: &'a str,
    pub tags: &'a [String],
    pub total_time: f64,
}

impl<'a> RecipeCard<'a> {
    pub fn new(recipe: &'a Recipe) -> Self {
        Self {
            title: &recipe.title,
            image: recipe.primary_image(),
            description: recipe.description_text(),
            tags: &recipe.category,
            total_time: recipe.total_time(),
        }
    }

    /// Body lines for a card whose inner width is `width` columns.
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if let Some(image) = self.image {
            lines.push(Line::from(Span::styled(
                truncate_str(&format!("▣ {}", image), width),
                Style::default().fg(Color::DarkGray),
            )));
        }

        lines.push(Line::from(Span::styled(
            truncate_str(self.description, width),
            Style::default().fg(Color::Gray),
        )));

        let tags = self
            .tags
            .iter()
            .map(|t| format!("[{}]", t))
            .collect::<Vec<_>>()
            .join(" ");
        lines.push(Line::from(Span::styled(
            truncate_str(&tags, width),
            Style::default().fg(Color::Magenta),
        )));

        lines.push(Line::from(vec![
            Span::styled(
                "▸ View recipe",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("   {} min", self.total_time),
                Style::default().fg(Color::Yellow),
            ),
        ]));

        lines
    }
}

pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let border_style = if app.focus == Focus::Grid {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let position = if app.visible.is_empty() {
        " 0 of 0 ".to_string()
    } else {
        format!(" {} of {} ", app.grid_selected + 1, app.visible.len())
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(" Recipes ")
        .title_bottom(Line::from(position).alignment(Alignment::Right));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.visible.is_empty() {
        let msg = match app.load_state {
            LoadState::Loading => "Loading recipes...",
            LoadState::Loaded | LoadState::LoadFailed => "No recipes to show",
        };
        let empty = Paragraph::new(msg)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    }

    let cols = app.grid_columns.max(1);
    let rows = ((inner.height / CARD_HEIGHT) as usize).max(1);
    let first_row = (app.grid_selected / cols + 1).saturating_sub(rows);
    let first = first_row * cols;
    let card_width = inner.width / cols as u16;

    for (index, recipe) in app
        .visible_recipes()
        .enumerate()
        .skip(first)
        .take(rows * cols)
    {
        let slot = index - first;
        let row = (slot / cols) as u16;
        let col = (slot % cols) as u16;
        let top = row * CARD_HEIGHT;
        let rect = Rect {
            x: inner.x + col * card_width,
            y: inner.y + top,
            width: card_width,
            height: CARD_HEIGHT.min(inner.height.saturating_sub(top)),
        };
        if rect.height < 3 {
            continue;
        }
        render_card(frame, rect, &RecipeCard::new(recipe), index == app.grid_selected);
    }
}

fn render_card(frame: &mut Frame, area: Rect, card: &RecipeCard, selected: bool) {
    let (border_style, title_style) = if selected {
        (
            Style::default().fg(Color::Yellow),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (
            Style::default().fg(Color::DarkGray),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
    };

    let width = area.width.saturating_sub(2) as usize;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(Span::styled(
            format!(" {} ", truncate_str(card.title, width.saturating_sub(2))),
            title_style,
        ));

    frame.render_widget(Paragraph::new(card.lines(width)).block(block), area);
}

/// Truncate a string to `max_width` display columns, adding "…" if truncated.
pub fn truncate_str(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        used += w;
        result.push(c);
    }
    result.push('…');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::sample;

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_card_without_image_has_no_image_line() {
        let recipe = sample("1", "Pilav", &["Ana Yemek"]);
        let card = RecipeCard::new(&recipe);
        assert_eq!(card.image, None);

        let lines = card.lines(40);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| !line_text(l).contains('▣')));
    }

    #[test]
    fn test_card_shows_primary_image_tags_and_total_time() {
        let mut recipe = sample("1", "Pilav", &["Ana Yemek", "Pratik"]);
        recipe.images = vec!["pilav.jpg".into(), "pilav-2.jpg".into()];
        recipe.prep_time = Some(5.into());
        recipe.cook_time = Some(20.into());

        let lines: Vec<String> = RecipeCard::new(&recipe).lines(40).iter().map(line_text).collect();
        assert_eq!(lines[0], "▣ pilav.jpg");
        assert_eq!(lines[2], "[Ana Yemek] [Pratik]");
        assert!(lines[3].contains("View recipe"));
        assert!(lines[3].ends_with("25 min"));
    }

    #[test]
    fn test_card_shows_fractional_total_time() {
        let mut recipe = sample("1", "Çay", &[]);
        recipe.prep_time = serde_json::Number::from_f64(2.5);
        let lines: Vec<String> = RecipeCard::new(&recipe).lines(40).iter().map(line_text).collect();
        assert!(lines.last().unwrap().ends_with("2.5 min"));
    }

    #[test]
    fn test_truncate_str() {
        assert_eq!(truncate_str("Mercimek", 20), "Mercimek");
        assert_eq!(truncate_str("Mercimek Çorbası", 8), "Mercime…");
        assert_eq!(truncate_str("abc", 0), "");
    }

    #[test]
    fn test_truncate_str_wide_chars() {
        let truncated = truncate_str("寿司寿司寿司", 5);
        assert!(truncated.width() <= 5);
        assert!(truncated.ends_with('…'));
    }
}
