//! The expense ledger state machine
//!
//! Owns the friend roster and the panel state, and applies the four
//! operations the UI can dispatch: toggling the add-friend form, adding a
//! friend, selecting a friend, and applying a bill split. The ledger is
//! pure and synchronous; rendering and input handling live in `tui`.
//!
//! The add-friend form and the split-bill form are mutually exclusive
//! views, so the panel is a tagged union rather than two independent
//! booleans. A state where both forms are open is unrepresentable.

use crate::models::{Balance, Friend, FriendId};

/// Which panel is currently open
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    /// No form open
    #[default]
    None,
    /// The add-friend form is open
    AddFriend,
    /// The split-bill form is open for the given friend
    SplitBill(FriendId),
}

/// An operation dispatched against the ledger
///
/// Every user interaction reduces to one of these; `Ledger::dispatch` is
/// the single entry point, so the ledger behaves as a reducer over its
/// own state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open or close the add-friend form
    ToggleAddForm,
    /// Append a friend with the given name and image URL
    AddFriend { name: String, image: String },
    /// Toggle selection of a friend (opens/closes the split-bill form)
    SelectFriend(FriendId),
    /// Apply a signed delta to the selected friend's balance
    ApplySplit(Balance),
}

/// A source of fresh friend identifiers
///
/// Injected into the ledger so production code can use random UUIDs while
/// tests use a deterministic sequence and assert exact ids.
pub trait IdSource {
    /// Produce a fresh, never-before-issued id
    fn next_id(&mut self) -> FriendId;
}

/// Production id source backed by random UUIDs
#[derive(Debug, Default)]
pub struct RandomIds;

impl IdSource for RandomIds {
    fn next_id(&mut self) -> FriendId {
        FriendId::new()
    }
}

/// Deterministic id source issuing sequential ids
#[derive(Debug)]
pub struct SequentialIds(u128);

impl SequentialIds {
    /// Start issuing ids from the given value
    pub fn starting_at(start: u128) -> Self {
        Self(start)
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&mut self) -> FriendId {
        let id = FriendId::from_u128(self.0);
        self.0 += 1;
        id
    }
}

/// The expense ledger: friend roster plus panel state
pub struct Ledger {
    /// Friends in insertion order; append-only
    friends: Vec<Friend>,

    /// Currently open panel
    panel: Panel,

    /// Identifier source for newly added friends
    ids: Box<dyn IdSource>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new(ids: Box<dyn IdSource>) -> Self {
        Self {
            friends: Vec::new(),
            panel: Panel::None,
            ids,
        }
    }

    /// Create a ledger seeded with an initial roster
    ///
    /// Each `(name, image, balance)` entry gets a fresh id from the id
    /// source, in order.
    pub fn seeded<I, N, U>(seeds: I, mut ids: Box<dyn IdSource>) -> Self
    where
        I: IntoIterator<Item = (N, U, Balance)>,
        N: Into<String>,
        U: Into<String>,
    {
        let friends = seeds
            .into_iter()
            .map(|(name, image, balance)| {
                Friend::with_balance(ids.next_id(), name, image, balance)
            })
            .collect();

        Self {
            friends,
            panel: Panel::None,
            ids,
        }
    }

    /// The friend roster, in insertion order
    pub fn friends(&self) -> &[Friend] {
        &self.friends
    }

    /// The currently open panel
    pub fn panel(&self) -> Panel {
        self.panel
    }

    /// Whether the add-friend form is open
    pub fn add_form_open(&self) -> bool {
        self.panel == Panel::AddFriend
    }

    /// The id of the selected friend, if the split-bill form is open
    pub fn selected_id(&self) -> Option<FriendId> {
        match self.panel {
            Panel::SplitBill(id) => Some(id),
            _ => None,
        }
    }

    /// The selected friend, if the split-bill form is open
    pub fn selected_friend(&self) -> Option<&Friend> {
        let id = self.selected_id()?;
        self.friends.iter().find(|f| f.id == id)
    }

    /// Look up a friend by id
    pub fn friend(&self, id: FriendId) -> Option<&Friend> {
        self.friends.iter().find(|f| f.id == id)
    }

    /// Net total across all friends; positive means the user is owed money
    pub fn net_total(&self) -> Balance {
        self.friends.iter().map(|f| f.balance).sum()
    }

    /// Apply an action to the ledger
    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::ToggleAddForm => self.toggle_add_form(),
            Action::AddFriend { name, image } => {
                self.add_friend(&name, &image);
            }
            Action::SelectFriend(id) => self.select_friend(id),
            Action::ApplySplit(delta) => self.apply_split(delta),
        }
    }

    /// Open or close the add-friend form
    ///
    /// Opening it clears any active selection: the two forms are mutually
    /// exclusive.
    pub fn toggle_add_form(&mut self) {
        self.panel = match self.panel {
            Panel::AddFriend => Panel::None,
            _ => Panel::AddFriend,
        };
    }

    /// Append a friend with a settled balance and close the add-friend form
    ///
    /// A validation guard, not an error path: an empty name or image URL
    /// leaves the ledger unchanged and the form open. The stored image URL
    /// gets the fresh id appended as a query parameter so each friend's
    /// avatar is cache-unique. Returns the new id on success.
    pub fn add_friend(&mut self, name: &str, image: &str) -> Option<FriendId> {
        if name.is_empty() || image.is_empty() {
            return None;
        }

        let id = self.ids.next_id();
        let image = format!("{}?u={}", image, id);
        self.friends.push(Friend::new(id, name, image));
        self.panel = Panel::None;
        Some(id)
    }

    /// Toggle selection of a friend
    ///
    /// Selecting the already-selected friend clears the selection;
    /// selecting any other friend opens the split-bill form for them and
    /// closes the add-friend form. An unknown id is a no-op.
    pub fn select_friend(&mut self, id: FriendId) {
        if self.friend(id).is_none() {
            return;
        }

        self.panel = match self.panel {
            Panel::SplitBill(current) if current == id => Panel::None,
            _ => Panel::SplitBill(id),
        };
    }

    /// Add `delta` to the selected friend's balance and clear the selection
    ///
    /// Calling this with no active selection is a precondition violation;
    /// it is a no-op in release builds.
    pub fn apply_split(&mut self, delta: Balance) {
        let Panel::SplitBill(id) = self.panel else {
            debug_assert!(false, "apply_split with no selected friend");
            return;
        };

        if let Some(friend) = self.friends.iter_mut().find(|f| f.id == id) {
            friend.balance += delta;
        }
        self.panel = Panel::None;
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger")
            .field("friends", &self.friends)
            .field("panel", &self.panel)
            .finish_non_exhaustive()
    }
}
