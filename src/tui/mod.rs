//! Terminal User Interface module
//!
//! This module provides the full-screen TUI for splitpal using ratatui.
//! It shows the friend roster with running balances, a detail panel for
//! the highlighted friend, and modal forms for adding friends and
//! splitting bills.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
