//! Friend model
//!
//! A friend is someone the user splits bills with. The balance tracks the
//! net amount owed between the two: positive means the friend owes the
//! user, negative means the user owes the friend.

use serde::{Deserialize, Serialize};

use super::balance::Balance;
use super::ids::FriendId;

/// A friend with a running shared-expense balance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Friend {
    /// Unique identifier, assigned at add-time and never reused
    pub id: FriendId,

    /// Display name, never empty
    pub name: String,

    /// Avatar image URL
    pub image: String,

    /// Net amount owed between the user and this friend
    pub balance: Balance,
}

impl Friend {
    /// Create a new friend with a settled balance
    pub fn new(id: FriendId, name: impl Into<String>, image: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance: Balance::zero(),
        }
    }

    /// Create a friend with a known starting balance (used for seeding)
    pub fn with_balance(
        id: FriendId,
        name: impl Into<String>,
        image: impl Into<String>,
        balance: Balance,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            image: image.into(),
            balance,
        }
    }

    /// The balance message for this friend, selected by sign
    ///
    /// `balance < 0` → "You owe Clark 7€"
    /// `balance > 0` → "Sarah owes you 20€"
    /// `balance == 0` → "You and Anthony are even"
    pub fn balance_message(&self, currency_symbol: &str) -> String {
        if self.balance.is_negative() {
            format!(
                "You owe {} {}",
                self.name,
                self.balance.abs().format_with_symbol(currency_symbol)
            )
        } else if self.balance.is_positive() {
            format!(
                "{} owes you {}",
                self.name,
                self.balance.format_with_symbol(currency_symbol)
            )
        } else {
            format!("You and {} are even", self.name)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn friend_with(balance: i64) -> Friend {
        Friend::with_balance(
            FriendId::from_u128(1),
            "Clark",
            "https://i.pravatar.cc/48",
            Balance::from_units(balance),
        )
    }

    #[test]
    fn test_new_friend_is_settled() {
        let f = Friend::new(FriendId::from_u128(1), "Clark", "https://i.pravatar.cc/48");
        assert!(f.balance.is_zero());
    }

    #[test]
    fn test_message_user_owes() {
        assert_eq!(friend_with(-7).balance_message("€"), "You owe Clark 7€");
    }

    #[test]
    fn test_message_friend_owes() {
        assert_eq!(friend_with(20).balance_message("€"), "Clark owes you 20€");
    }

    #[test]
    fn test_message_even() {
        assert_eq!(friend_with(0).balance_message("€"), "You and Clark are even");
    }
}
