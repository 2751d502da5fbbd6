//! Core data models for splitpal
//!
//! This module contains the data structures that represent the
//! bill-splitting domain: friends, balances, and identifiers.

pub mod balance;
pub mod friend;
pub mod ids;

pub use balance::{Balance, BalanceParseError};
pub use friend::Friend;
pub use ids::FriendId;
