//! Split-bill dialog
//!
//! Modal form for splitting a bill with the selected friend. Both amount
//! fields are digit-only; "your expense" is clamped at entry time so it
//! can never exceed the bill, and the friend's share is derived and
//! read-only. Submission with an empty or zero field is refused silently:
//! the form simply stays open with its values intact.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ledger::Action;
use crate::models::Balance;
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::input::TextInput;

/// Who covers the bill
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Payer {
    #[default]
    User,
    Friend,
}

impl Payer {
    /// Flip to the other payer
    pub fn toggle(self) -> Self {
        match self {
            Self::User => Self::Friend,
            Self::Friend => Self::User,
        }
    }
}

/// Which field is currently focused in the split-bill form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SplitField {
    #[default]
    Bill,
    YourExpense,
    Payer,
}

impl SplitField {
    /// Get the next field (for Tab navigation)
    pub fn next(self) -> Self {
        match self {
            Self::Bill => Self::YourExpense,
            Self::YourExpense => Self::Payer,
            Self::Payer => Self::Bill,
        }
    }

    /// Get the previous field (for Shift+Tab navigation)
    pub fn prev(self) -> Self {
        match self {
            Self::Bill => Self::Payer,
            Self::YourExpense => Self::Bill,
            Self::Payer => Self::YourExpense,
        }
    }
}

/// State for the split-bill form dialog
#[derive(Debug, Clone)]
pub struct SplitBillFormState {
    /// Currently focused field
    pub focused_field: SplitField,

    /// Bill total input
    pub bill_input: TextInput,

    /// Amount the user personally paid
    pub paid_by_user_input: TextInput,

    /// Who covers the bill
    pub payer: Payer,
}

impl Default for SplitBillFormState {
    fn default() -> Self {
        Self::new()
    }
}

impl SplitBillFormState {
    /// Create a new form state with default values
    pub fn new() -> Self {
        Self {
            focused_field: SplitField::Bill,
            bill_input: TextInput::new().label("Bill value").placeholder("0"),
            paid_by_user_input: TextInput::new().label("Your expense").placeholder("0"),
            payer: Payer::User,
        }
    }

    /// The bill total, if entered
    pub fn bill(&self) -> Option<Balance> {
        Balance::parse(self.bill_input.value()).ok()
    }

    /// The amount the user paid, if entered
    pub fn paid_by_user(&self) -> Option<Balance> {
        Balance::parse(self.paid_by_user_input.value()).ok()
    }

    /// The friend's share, derived from the other two fields
    ///
    /// Present whenever the bill is; an empty "your expense" counts as 0.
    pub fn paid_by_friend(&self) -> Option<Balance> {
        let bill = self.bill()?;
        Some(bill - self.paid_by_user().unwrap_or_default())
    }

    /// Move to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
    }

    /// Move to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
    }

    /// Flip who covers the bill
    pub fn toggle_payer(&mut self) {
        self.payer = self.payer.toggle();
    }

    /// The text input for the focused field, if it has one
    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            SplitField::Bill => Some(&mut self.bill_input),
            SplitField::YourExpense => Some(&mut self.paid_by_user_input),
            SplitField::Payer => None,
        }
    }

    /// Feed a typed character into the focused field
    ///
    /// Amount fields accept digits only. For "your expense" the edit is
    /// applied tentatively first: if the resulting value would exceed the
    /// current bill (an empty bill counts as 0), the keystroke is dropped
    /// and the input keeps its previous value. There is no error signal.
    pub fn enter_char(&mut self, c: char) {
        if !c.is_ascii_digit() {
            return;
        }

        match self.focused_field {
            SplitField::Bill => self.bill_input.insert(c),
            SplitField::YourExpense => {
                let candidate = self.paid_by_user_input.preview_insert(c);
                let bill = self.bill().unwrap_or_default();
                match Balance::parse(&candidate) {
                    Ok(value) if value <= bill => self.paid_by_user_input.insert(c),
                    _ => {}
                }
            }
            SplitField::Payer => {}
        }
    }

    /// The signed delta to apply to the friend's balance, if the form is valid
    ///
    /// Requires both amounts present and non-zero. The delta is always from
    /// the user's perspective: when the user pays, the friend owes their
    /// share (`+paid_by_friend`); when the friend pays, the user owes what
    /// they consumed (`-paid_by_user`).
    pub fn delta(&self) -> Option<Balance> {
        let bill = self.bill().filter(|b| !b.is_zero())?;
        let paid_by_user = self.paid_by_user().filter(|p| !p.is_zero())?;

        match self.payer {
            Payer::User => Some(bill - paid_by_user),
            Payer::Friend => Some(-paid_by_user),
        }
    }
}

/// Render the split-bill dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let Some(friend) = app.ledger.selected_friend() else {
        return;
    };
    let friend_name = friend.name.clone();
    let currency = app.settings.currency_symbol.clone();

    let area = centered_rect(55, 45, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" Split a bill with {} ", friend_name))
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
            Constraint::Length(1), // Bill
            Constraint::Length(1), // Your expense
            Constraint::Length(1), // Friend's expense (derived)
            Constraint::Length(1), // Payer
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Buttons
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    // Extract values to avoid borrow conflicts
    let form = &app.split_bill_form;
    let bill_value = form.bill_input.value().to_string();
    let bill_cursor = form.bill_input.cursor;
    let bill_placeholder = form.bill_input.placeholder.clone();
    let paid_value = form.paid_by_user_input.value().to_string();
    let paid_cursor = form.paid_by_user_input.cursor;
    let paid_placeholder = form.paid_by_user_input.placeholder.clone();
    let focused = form.focused_field;
    let payer = form.payer;
    let derived = form
        .paid_by_friend()
        .map(|b| b.format_with_symbol(&currency))
        .unwrap_or_default();

    render_text_field(
        frame,
        chunks[0],
        "Bill value",
        &bill_value,
        focused == SplitField::Bill,
        bill_cursor,
        &bill_placeholder,
    );

    render_text_field(
        frame,
        chunks[1],
        "Your expense",
        &paid_value,
        focused == SplitField::YourExpense,
        paid_cursor,
        &paid_placeholder,
    );

    // Derived, read-only
    let derived_line = Line::from(vec![
        Span::styled(
            format!("{:>14}: ", format!("{}'s share", friend_name)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(derived, Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(derived_line), chunks[2]);

    render_payer_field(frame, chunks[3], &friend_name, payer, focused == SplitField::Payer);

    // Render buttons/hints
    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Next  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Split bill  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Close"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[5]);
}

/// Render the who-is-paying selector
fn render_payer_field(frame: &mut Frame, area: Rect, friend_name: &str, payer: Payer, focused: bool) {
    let label_style = if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };

    let selected_style = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let unselected_style = Style::default().fg(Color::DarkGray);

    let (user_style, friend_style) = match payer {
        Payer::User => (selected_style, unselected_style),
        Payer::Friend => (unselected_style, selected_style),
    };

    let line = Line::from(vec![
        Span::styled(format!("{:>14}: ", "Who pays"), label_style),
        Span::styled("You", user_style),
        Span::raw(" / "),
        Span::styled(friend_name.to_string(), friend_style),
        if focused {
            Span::styled("  (Space to switch)", Style::default().fg(Color::Yellow))
        } else {
            Span::raw("")
        },
    ]);

    frame.render_widget(Paragraph::new(line), area);
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

    let label_span = Span::styled(format!("{:>14}: ", label), label_style);

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

/// Handle key input for the split-bill dialog
/// Returns true if the key was handled, false otherwise
pub fn handle_key(app: &mut App, key: crossterm::event::KeyEvent) -> bool {
    use crossterm::event::{KeyCode, KeyModifiers};

    match key.code {
        KeyCode::Esc => {
            app.close_split_form();
            return true;
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.split_bill_form.prev_field();
            } else {
                app.split_bill_form.next_field();
            }
            return true;
        }

        KeyCode::BackTab => {
            app.split_bill_form.prev_field();
            return true;
        }

        KeyCode::Down => {
            app.split_bill_form.next_field();
            return true;
        }

        KeyCode::Up => {
            app.split_bill_form.prev_field();
            return true;
        }

        KeyCode::Enter => {
            submit_split(app);
            return true;
        }

        KeyCode::Char(' ') => {
            if app.split_bill_form.focused_field == SplitField::Payer {
                app.split_bill_form.toggle_payer();
                return true;
            }
        }

        KeyCode::Left => {
            if app.split_bill_form.focused_field == SplitField::Payer {
                app.split_bill_form.toggle_payer();
            } else if let Some(input) = app.split_bill_form.focused_input() {
                input.move_left();
            }
            return true;
        }

        KeyCode::Right => {
            if app.split_bill_form.focused_field == SplitField::Payer {
                app.split_bill_form.toggle_payer();
            } else if let Some(input) = app.split_bill_form.focused_input() {
                input.move_right();
            }
            return true;
        }

        KeyCode::Backspace => {
            if let Some(input) = app.split_bill_form.focused_input() {
                input.backspace();
            }
            return true;
        }

        KeyCode::Delete => {
            if let Some(input) = app.split_bill_form.focused_input() {
                input.delete();
            }
            return true;
        }

        KeyCode::Home => {
            if let Some(input) = app.split_bill_form.focused_input() {
                input.move_start();
            }
            return true;
        }

        KeyCode::End => {
            if let Some(input) = app.split_bill_form.focused_input() {
                input.move_end();
            }
            return true;
        }

        KeyCode::Char(c) => {
            app.split_bill_form.enter_char(c);
            return true;
        }

        _ => {}
    }

    false
}

/// Apply the split if the form is valid; otherwise leave the form open untouched
fn submit_split(app: &mut App) {
    let Some(delta) = app.split_bill_form.delta() else {
        return;
    };

    let friend_name = app
        .ledger
        .selected_friend()
        .map(|f| f.name.clone())
        .unwrap_or_default();

    app.ledger.dispatch(Action::ApplySplit(delta));
    app.split_bill_form = SplitBillFormState::new();
    app.set_status(format!("Split recorded with {}", friend_name));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form_with(bill: &str, paid: &str, payer: Payer) -> SplitBillFormState {
        let mut form = SplitBillFormState::new();
        form.bill_input = form.bill_input.clone().content(bill);
        form.paid_by_user_input = form.paid_by_user_input.clone().content(paid);
        form.payer = payer;
        form
    }

    #[test]
    fn test_delta_when_user_pays() {
        let form = form_with("100", "40", Payer::User);
        assert_eq!(form.delta(), Some(Balance::from_units(60)));
    }

    #[test]
    fn test_delta_when_friend_pays() {
        let form = form_with("100", "40", Payer::Friend);
        assert_eq!(form.delta(), Some(Balance::from_units(-40)));
    }

    #[test]
    fn test_delta_requires_both_fields() {
        assert_eq!(form_with("", "40", Payer::User).delta(), None);
        assert_eq!(form_with("100", "", Payer::User).delta(), None);
        assert_eq!(form_with("0", "40", Payer::User).delta(), None);
        assert_eq!(form_with("100", "0", Payer::User).delta(), None);
    }

    #[test]
    fn test_derived_friend_share() {
        let form = form_with("100", "40", Payer::User);
        assert_eq!(form.paid_by_friend(), Some(Balance::from_units(60)));

        // Empty expense counts as zero
        let form = form_with("100", "", Payer::User);
        assert_eq!(form.paid_by_friend(), Some(Balance::from_units(100)));

        // No bill, no derived value
        let form = form_with("", "40", Payer::User);
        assert_eq!(form.paid_by_friend(), None);
    }

    #[test]
    fn test_clamp_rejects_expense_above_bill() {
        let mut form = form_with("100", "40", Payer::User);
        form.focused_field = SplitField::YourExpense;

        // "405" would exceed the bill; keystroke is dropped
        form.enter_char('5');
        assert_eq!(form.paid_by_user_input.value(), "40");
    }

    #[test]
    fn test_clamp_accepts_expense_up_to_bill() {
        let mut form = form_with("100", "10", Payer::User);
        form.focused_field = SplitField::YourExpense;

        form.enter_char('0');
        assert_eq!(form.paid_by_user_input.value(), "100");
    }

    #[test]
    fn test_clamp_with_empty_bill_treats_bill_as_zero() {
        let mut form = SplitBillFormState::new();
        form.focused_field = SplitField::YourExpense;

        form.enter_char('5');
        assert_eq!(form.paid_by_user_input.value(), "");

        form.enter_char('0');
        assert_eq!(form.paid_by_user_input.value(), "0");
    }

    #[test]
    fn test_amount_fields_ignore_non_digits() {
        let mut form = SplitBillFormState::new();
        form.enter_char('a');
        form.enter_char('-');
        form.enter_char('1');
        assert_eq!(form.bill_input.value(), "1");
    }

    #[test]
    fn test_field_cycle() {
        let mut form = SplitBillFormState::new();
        assert_eq!(form.focused_field, SplitField::Bill);
        form.next_field();
        assert_eq!(form.focused_field, SplitField::YourExpense);
        form.next_field();
        assert_eq!(form.focused_field, SplitField::Payer);
        form.next_field();
        assert_eq!(form.focused_field, SplitField::Bill);
        form.prev_field();
        assert_eq!(form.focused_field, SplitField::Payer);
    }

    #[test]
    fn test_payer_toggle() {
        let mut form = SplitBillFormState::new();
        assert_eq!(form.payer, Payer::User);
        form.toggle_payer();
        assert_eq!(form.payer, Payer::Friend);
        form.toggle_payer();
        assert_eq!(form.payer, Payer::User);
    }
}
