//! Add-friend dialog
//!
//! Modal form for adding a friend to the roster. The image field starts
//! out as the avatar placeholder base URL; the ledger appends the fresh
//! friend id to it as a cache-busting query parameter on submit. An empty
//! field refuses the submission silently, leaving the form open.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ledger::Action;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::input::TextInput;

/// Which field is currently focused in the add-friend form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AddFriendField {
    #[default]
    Name,
    Image,
}

impl AddFriendField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Image,
            Self::Image => Self::Name,
        }
    }
}

/// State for the add-friend form dialog
#[derive(Debug, Clone)]
pub struct AddFriendFormState {
    /// Currently focused field
    pub focused_field: AddFriendField,

    /// Friend name input
    pub name_input: TextInput,

    /// Image URL input, pre-filled with the avatar base URL
    pub image_input: TextInput,

    /// Default image URL the form resets to
    default_image: String,
}

impl AddFriendFormState {
    /// Create a new form state with the image field pre-filled
    pub fn new(avatar_base_url: &str) -> Self {
        Self {
            focused_field: AddFriendField::Name,
            name_input: TextInput::new().label("Friend name").placeholder("Name"),
            image_input: TextInput::new()
                .label("Image URL")
                .content(avatar_base_url),
            default_image: avatar_base_url.to_string(),
        }
    }

    /// Move to the other field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// The text input for the focused field
    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            AddFriendField::Name => &mut self.name_input,
            AddFriendField::Image => &mut self.image_input,
        }
    }

    /// Whether both fields hold a non-empty raw value
    pub fn is_valid(&self) -> bool {
        !self.name_input.is_empty() && !self.image_input.is_empty()
    }

    /// Reset both fields to their defaults
    pub fn reset(&mut self) {
        self.name_input.clear();
        self.image_input = TextInput::new()
            .label("Image URL")
            .content(self.default_image.clone());
        self.focused_field = AddFriendField::Name;
    }
}

/// Render the add-friend dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(55, 35, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Friend ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    // Inner area for content
    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Image URL
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    // Extract values to avoid borrow conflicts
    let form = &app.add_friend_form;
    let name_value = form.name_input.value().to_string();
    let name_cursor = form.name_input.cursor;
    let name_placeholder = form.name_input.placeholder.clone();
    let image_value = form.image_input.value().to_string();
    let image_cursor = form.image_input.cursor;
    let focused = form.focused_field;

    render_text_field(
        frame,
        chunks[0],
        "Friend name",
        &name_value,
        focused == AddFriendField::Name,
        name_cursor,
        &name_placeholder,
    );

    render_text_field(
        frame,
        chunks[1],
        "Image URL",
        &image_value,
        focused == AddFriendField::Image,
        image_cursor,
        "",
    );

    // Render buttons/hints
    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Add  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}

/// Render a text field with a right-aligned label and cursor
fn render_text_field(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    focused: bool,
    cursor: usize,
    placeholder: &str,
) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let label_span = Span::styled(format!("{:>12}: ", label), label_style);

    let value_style = if focused {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Yellow)
    };

    let display_value = if value.is_empty() && !focused {
        placeholder.to_string()
    } else {
        value.to_string()
    };

    let mut spans = vec![label_span];

    if focused {
        // Clamp to a char boundary; the cursor is a byte offset
        let mut cursor_pos = cursor.min(display_value.len());
        while !display_value.is_char_boundary(cursor_pos) {
            cursor_pos -= 1;
        }
        let (before, after) = display_value.split_at(cursor_pos);

        spans.push(Span::styled(before.to_string(), value_style));

        let cursor_char = after.chars().next().unwrap_or(' ');
        spans.push(Span::styled(
            cursor_char.to_string(),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ));

        let rest = &after[cursor_char.len_utf8().min(after.len())..];
        if !rest.is_empty() {
            spans.push(Span::styled(rest.to_string(), value_style));
        }
    } else {
        spans.push(Span::styled(display_value, value_style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Handle key input for the add-friend dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::KeyCode;

    match key.code {
        KeyCode::Esc => {
            app.toggle_add_form();
            return true;
        }

        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            // Two fields, so next and prev coincide
            app.add_friend_form.next_field();
            return true;
        }

        KeyCode::Enter => {
            submit_friend(app);
            return true;
        }

        KeyCode::Backspace => {
            app.add_friend_form.focused_input().backspace();
            return true;
        }

        KeyCode::Delete => {
            app.add_friend_form.focused_input().delete();
            return true;
        }

        KeyCode::Left => {
            app.add_friend_form.focused_input().move_left();
            return true;
        }

        KeyCode::Right => {
            app.add_friend_form.focused_input().move_right();
            return true;
        }

        KeyCode::Home => {
            app.add_friend_form.focused_input().move_start();
            return true;
        }

        KeyCode::End => {
            app.add_friend_form.focused_input().move_end();
            return true;
        }

        KeyCode::Char(c) => {
            app.add_friend_form.focused_input().insert(c);
            return true;
        }

        _ => {}
    }

    false
}

/// Add the friend if the form is valid; otherwise leave the form open untouched
fn submit_friend(app: &mut App) {
    if !app.add_friend_form.is_valid() {
        return;
    }

    let name = app.add_friend_form.name_input.value().to_string();
    let image = app.add_friend_form.image_input.value().to_string();

    app.ledger.dispatch(Action::AddFriend {
        name: name.clone(),
        image,
    });
    app.add_friend_form.reset();
    app.set_status(format!("{} added", name));
}

#[cfg(test)]
mod tests {
    use super::*;

    const AVATAR: &str = "https://i.pravatar.cc/48";

    #[test]
    fn test_new_form_prefills_image() {
        let form = AddFriendFormState::new(AVATAR);
        assert_eq!(form.image_input.value(), AVATAR);
        assert!(form.name_input.is_empty());
        assert!(!form.is_valid());
    }

    #[test]
    fn test_valid_requires_both_fields() {
        let mut form = AddFriendFormState::new(AVATAR);
        form.name_input = form.name_input.clone().content("Lois");
        assert!(form.is_valid());

        form.image_input.clear();
        assert!(!form.is_valid());
    }

    #[test]
    fn test_reset_restores_defaults() {
        let mut form = AddFriendFormState::new(AVATAR);
        form.name_input = form.name_input.clone().content("Lois");
        form.image_input.clear();
        form.focused_field = AddFriendField::Image;

        form.reset();

        assert!(form.name_input.is_empty());
        assert_eq!(form.image_input.value(), AVATAR);
        assert_eq!(form.focused_field, AddFriendField::Name);
    }

    #[test]
    fn test_name_accepts_non_ascii() {
        let mut form = AddFriendFormState::new(AVATAR);
        for c in "José".chars() {
            form.focused_input().insert(c);
        }
        form.focused_input().backspace();
        form.focused_input().insert('é');

        assert_eq!(form.name_input.value(), "José");
        assert!(form.is_valid());
    }

    #[test]
    fn test_field_cycle() {
        let mut form = AddFriendFormState::new(AVATAR);
        assert_eq!(form.focused_field, AddFriendField::Name);
        form.next_field();
        assert_eq!(form.focused_field, AddFriendField::Image);
        form.next_field();
        assert_eq!(form.focused_field, AddFriendField::Name);
    }
}
