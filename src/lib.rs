//! splitpal - Terminal-based bill splitting and shared-expense tracker
//!
//! This library provides the core functionality for splitpal, a small
//! application for keeping track of who owes whom after splitting bills
//! with friends. It keeps a roster of friends with running balances and
//! applies bill splits to them, with either you or the friend covering
//! the bill up front.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (friends, balances, ids)
//! - `ledger`: The expense ledger state machine and its actions
//! - `tui`: The ratatui-based terminal interface
//!
//! # Example
//!
//! ```rust,ignore
//! use splitpal::config::{paths::SplitpalPaths, settings::Settings};
//!
//! let paths = SplitpalPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod config;
pub mod error;
pub mod ledger;
pub mod models;
pub mod tui;

pub use error::SplitpalError;
