//! Friend detail panel
//!
//! Shows the friend under the list cursor: name, avatar image URL, and the
//! balance message. When the roster is empty it shows a getting-started
//! hint instead.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;

use super::friend_list::balance_color;

/// Render the detail panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let Some(friend) = app
        .ledger
        .friends()
        .get(app.cursor_index)
        .cloned()
    else {
        let text = Paragraph::new("Add a friend to start splitting bills.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    };

    let lines = vec![
        Line::from(Span::styled(
            friend.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            friend.image.clone(),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(
            friend.balance_message(&app.settings.currency_symbol),
            Style::default().fg(balance_color(&friend)),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", Style::default().fg(Color::Yellow)),
            Span::raw(" Split a bill  "),
            Span::styled("[a]", Style::default().fg(Color::Yellow)),
            Span::raw(" Add friend"),
        ]),
    ];

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
