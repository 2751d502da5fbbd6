//! Friend list sidebar
//!
//! Shows the roster in insertion order with each friend's balance message,
//! colored by sign. The list cursor is independent of the ledger
//! selection; the selected friend (split form open) is marked.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::models::Friend;
use crate::tui::app::App;
use crate::tui::layout::SidebarLayout;

/// Render the sidebar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = SidebarLayout::new(area);

    render_header(frame, layout.header);
    render_friends(frame, app, layout.friends);
}

/// Render sidebar header
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Splitpal ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let version = Paragraph::new(concat!("v", env!("CARGO_PKG_VERSION")))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(version, area);
}

/// Render the friend list
fn render_friends(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Friends ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let friends = app.ledger.friends();

    if friends.is_empty() {
        let text = Paragraph::new("No friends yet - press 'a' to add one")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let selected_id = app.ledger.selected_id();
    let currency = &app.settings.currency_symbol;

    let items: Vec<ListItem> = friends
        .iter()
        .map(|friend| {
            let is_selected = selected_id == Some(friend.id);
            let marker = if is_selected { "▶" } else { " " };

            let name_style = if is_selected {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let name_line = Line::from(vec![
                Span::styled(format!("{} ", marker), name_style),
                Span::styled(friend.name.clone(), name_style),
            ]);

            let message_line = Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    friend.balance_message(currency),
                    Style::default().fg(balance_color(friend)),
                ),
            ]);

            ListItem::new(vec![name_line, message_line])
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = ListState::default();
    state.select(Some(app.cursor_index.min(friends.len().saturating_sub(1))));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Color for a friend's balance message, selected by sign
pub fn balance_color(friend: &Friend) -> Color {
    if friend.balance.is_negative() {
        Color::Red
    } else if friend.balance.is_positive() {
        Color::Green
    } else {
        Color::DarkGray
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Balance, FriendId};

    fn friend_with(balance: i64) -> Friend {
        Friend::with_balance(
            FriendId::from_u128(1),
            "Clark",
            "https://i.pravatar.cc/48",
            Balance::from_units(balance),
        )
    }

    #[test]
    fn test_balance_color_by_sign() {
        assert_eq!(balance_color(&friend_with(-7)), Color::Red);
        assert_eq!(balance_color(&friend_with(20)), Color::Green);
        assert_eq!(balance_color(&friend_with(0)), Color::DarkGray);
    }
}
