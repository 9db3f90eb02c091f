use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

fn section(title: &'static str) -> Line<'static> {
    Line::from(vec![Span::styled(
        title,
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    )])
}

fn binding(keys: &'static str, what: &'static str) -> Line<'static> {
    Line::from(vec![
        Span::styled(keys, Style::default().fg(Color::Yellow)),
        Span::raw(what),
    ])
}

pub fn render(frame: &mut Frame) {
    let area = super::centered_rect(70, 70, frame.area());

    frame.render_widget(Clear, area);

    let help_text = vec![
        Line::from(""),
        section("  Global"),
        binding("    ?         ", "Toggle this help"),
        binding("    q         ", "Quit application"),
        binding("    /         ", "Search (filters as you type)"),
        binding("    e         ", "Export collection to recipes.json"),
        binding("    i         ", "Import collection from a file"),
        Line::from(""),
        section("  Recipe Grid"),
        binding("    ←↑↓→/hjkl ", "Move between cards"),
        binding("    g/G       ", "Jump to first/last card"),
        binding("    Enter     ", "Open recipe"),
        binding("    Tab       ", "Focus category bar"),
        binding("    Esc       ", "Clear search"),
        Line::from(""),
        section("  Category Bar"),
        binding("    ←/→       ", "Move between categories"),
        binding("    Enter     ", "Apply category"),
        binding("    Tab/Esc   ", "Back to grid"),
        Line::from(""),
        section("  Recipe Detail"),
        binding("    ←/→ 1-9   ", "Switch image"),
        binding("    ↑/↓       ", "Scroll ingredients and steps"),
        binding("    Esc/q     ", "Close"),
        Line::from(""),
    ];

    let help = Paragraph::new(help_text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help: Keybindings ")
                .title_bottom(Line::from(" Press any key to close ").style(Style::default().fg(Color::DarkGray))),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(help, area);
}
