//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling
//! events: the ledger itself, the list cursor, the two form states, and
//! transient UI flags. The ledger decides which panel is open; the App
//! only adds presentation concerns on top.

use crate::config::settings::Settings;
use crate::ledger::{Action, Ledger, Panel, RandomIds};
use crate::models::{Balance, FriendId};

use super::dialogs::add_friend::AddFriendFormState;
use super::dialogs::split_bill::SplitBillFormState;

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// The expense ledger
    pub ledger: Ledger,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Cursor position in the friend list (independent of ledger selection)
    pub cursor_index: usize,

    /// Whether the help overlay is shown
    pub show_help: bool,

    /// Status message to display
    pub status_message: Option<String>,

    /// Add-friend form state
    pub add_friend_form: AddFriendFormState,

    /// Split-bill form state
    pub split_bill_form: SplitBillFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance with the ledger seeded from settings
    pub fn new(settings: &'a Settings) -> Self {
        let seeds: Vec<(String, String, Balance)> = settings
            .seed_friends
            .iter()
            .map(|seed| {
                (
                    seed.name.clone(),
                    settings.seed_image(seed),
                    Balance::from_units(seed.balance),
                )
            })
            .collect();

        let ledger = Ledger::seeded(seeds, Box::new(RandomIds));

        Self {
            settings,
            ledger,
            should_quit: false,
            cursor_index: 0,
            show_help: false,
            status_message: None,
            add_friend_form: AddFriendFormState::new(&settings.avatar_base_url),
            split_bill_form: SplitBillFormState::new(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// The friend currently under the list cursor
    pub fn cursor_friend_id(&self) -> Option<FriendId> {
        self.ledger.friends().get(self.cursor_index).map(|f| f.id)
    }

    /// Move the list cursor up
    pub fn move_up(&mut self) {
        if self.cursor_index > 0 {
            self.cursor_index -= 1;
        }
    }

    /// Move the list cursor down
    pub fn move_down(&mut self) {
        let max = self.ledger.friends().len();
        if self.cursor_index + 1 < max {
            self.cursor_index += 1;
        }
    }

    /// Open or close the add-friend form
    pub fn toggle_add_form(&mut self) {
        self.clear_status();
        self.ledger.dispatch(Action::ToggleAddForm);
        if self.ledger.add_form_open() {
            self.add_friend_form = AddFriendFormState::new(&self.settings.avatar_base_url);
        }
    }

    /// Toggle selection of the friend under the cursor
    ///
    /// Opening the split form for a different friend resets the form so
    /// values typed for one split never leak into another.
    pub fn select_under_cursor(&mut self) {
        let Some(id) = self.cursor_friend_id() else {
            return;
        };

        self.clear_status();
        let previous = self.ledger.selected_id();
        self.ledger.dispatch(Action::SelectFriend(id));

        if self.ledger.selected_id() != previous {
            self.split_bill_form = SplitBillFormState::new();
        }
    }

    /// Close the split-bill form, clearing the selection
    pub fn close_split_form(&mut self) {
        if let Panel::SplitBill(id) = self.ledger.panel() {
            self.ledger.dispatch(Action::SelectFriend(id));
            self.split_bill_form = SplitBillFormState::new();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn test_new_app_seeds_ledger_from_settings() {
        let settings = settings();
        let app = App::new(&settings);

        let names: Vec<_> = app
            .ledger
            .friends()
            .iter()
            .map(|f| f.name.as_str())
            .collect();
        assert_eq!(names, ["Clark", "Sarah", "Anthony"]);
        assert_eq!(app.ledger.friends()[0].balance.units(), -7);
        assert_eq!(app.ledger.panel(), Panel::None);
    }

    #[test]
    fn test_cursor_movement_stays_in_bounds() {
        let settings = settings();
        let mut app = App::new(&settings);

        app.move_up();
        assert_eq!(app.cursor_index, 0);

        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.cursor_index, 2);
    }

    #[test]
    fn test_select_under_cursor_toggles() {
        let settings = settings();
        let mut app = App::new(&settings);
        let clark = app.ledger.friends()[0].id;

        app.select_under_cursor();
        assert_eq!(app.ledger.selected_id(), Some(clark));

        app.select_under_cursor();
        assert_eq!(app.ledger.selected_id(), None);
    }

    #[test]
    fn test_switching_selection_resets_split_form() {
        let settings = settings();
        let mut app = App::new(&settings);

        app.select_under_cursor();
        app.split_bill_form.bill_input.insert('9');

        app.cursor_index = 1;
        app.select_under_cursor();

        assert!(app.split_bill_form.bill_input.is_empty());
    }

    #[test]
    fn test_close_split_form_clears_selection() {
        let settings = settings();
        let mut app = App::new(&settings);

        app.select_under_cursor();
        assert!(app.ledger.selected_id().is_some());

        app.close_split_form();
        assert_eq!(app.ledger.selected_id(), None);
    }
}
