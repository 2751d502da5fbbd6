//! TUI views module
//!
//! Contains the friend list sidebar, the detail panel, and the status bar.

pub mod detail;
pub mod friend_list;
pub mod status_bar;

use ratatui::Frame;

use crate::ledger::Panel;

use super::app::App;
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    friend_list::render(frame, app, layout.sidebar);
    detail::render(frame, app, layout.main);
    status_bar::render(frame, app, layout.status_bar);

    // Render the open form, if any, as a modal on top
    match app.ledger.panel() {
        Panel::AddFriend => dialogs::add_friend::render(frame, app),
        Panel::SplitBill(_) => dialogs::split_bill::render(frame, app),
        Panel::None => {}
    }

    if app.show_help {
        dialogs::help::render(frame);
    }
}
