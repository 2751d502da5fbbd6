//! Status bar view
//!
//! Shows the friend count, the net total across all friends, any transient
//! status message, and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let friend_count = app.ledger.friends().len();
    let net = app.ledger.net_total();

    let mut spans = vec![Span::styled(
        format!(" {} friends", friend_count),
        Style::default().fg(Color::White),
    )];

    // Net total: positive means the user is owed money overall
    let net_color = if net.is_negative() {
        Color::Red
    } else if net.is_positive() {
        Color::Green
    } else {
        Color::DarkGray
    };

    spans.push(Span::raw(" │ "));
    spans.push(Span::styled("Net: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        net.format_with_symbol(&app.settings.currency_symbol),
        Style::default().fg(net_color).add_modifier(Modifier::BOLD),
    ));

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = " q:Quit  ?:Help  a:Add  Enter:Select ";

    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let line = Line::from(spans);
    frame.render_widget(Paragraph::new(line), area);
}
