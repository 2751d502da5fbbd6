//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! panel state: open forms get the keys first, then the friend list.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use crate::ledger::Panel;

use super::app::App;
use super::dialogs;
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Resize(_, _) => Ok(()),
        Event::Tick => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Help overlay swallows every key
    if app.show_help {
        app.show_help = false;
        return Ok(());
    }

    // Open forms get the keys first
    match app.ledger.panel() {
        Panel::AddFriend => {
            dialogs::add_friend::handle_key(app, key);
            return Ok(());
        }
        Panel::SplitBill(_) => {
            dialogs::split_bill::handle_key(app, key);
            return Ok(());
        }
        Panel::None => {}
    }

    handle_list_key(app, key);
    Ok(())
}

/// Handle keys when no form is open
fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
        }

        // Help
        KeyCode::Char('?') => {
            app.show_help = true;
        }

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => {
            app.move_down();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.move_up();
        }

        // Toggle selection of the friend under the cursor
        KeyCode::Enter | KeyCode::Char('s') => {
            app.select_under_cursor();
        }

        // Open the add-friend form
        KeyCode::Char('a') | KeyCode::Char('n') => {
            app.toggle_add_form();
        }

        _ => {}
    }
}
