//! Help overlay
//!
//! Shows keyboard shortcuts. Any key closes it.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Render the help overlay
pub fn render(frame: &mut Frame) {
    let area = centered_rect(50, 60, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let lines = vec![
        Line::from(Span::styled(
            "Friend List",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )),
        Line::from(""),
        key_line("j/k, ↑/↓", "Move cursor"),
        key_line("Enter, s", "Select friend / close split form"),
        key_line("a, n", "Open/close the add-friend form"),
        Line::from(""),
        Line::from(Span::styled(
            "Forms",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )),
        Line::from(""),
        key_line("Tab", "Next field"),
        key_line("Space", "Switch who pays"),
        key_line("Enter", "Submit"),
        key_line("Esc", "Close form"),
        Line::from(""),
        key_line("q", "Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "Press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Format a key/description pair
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:<12}", key),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(description.to_string(), Style::default().fg(Color::White)),
    ])
}
