//! Dialog modules for the TUI
//!
//! Contains the two modal forms and the help overlay

pub mod add_friend;
pub mod help;
pub mod split_bill;
