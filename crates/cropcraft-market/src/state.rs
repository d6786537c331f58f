//! Seams to the external game-state service.
//!
//! The engine never owns or mutates balance, inventory, or stock. It reads
//! them through [`GameStateSource`] and asks for changes through
//! [`GameSink`]. The service applies intents authoritatively and may reject
//! them; the engine's own checks are advisory.
//!
//! [`GameSnapshot`] is the plain-value source. [`LiveState`] is a source that
//! the service pushes updates into between user actions. [`RecordingSink`]
//! captures emitted intents in memory.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use cropcraft_types::{GameSnapshot, Intent, ItemName};

// ---------------------------------------------------------------------------
// Source
// ---------------------------------------------------------------------------

/// Read-only access to the player's state.
pub trait GameStateSource {
    /// Current balance.
    fn balance(&self) -> Decimal;

    /// Current inventory.
    fn inventory(&self) -> BTreeMap<ItemName, Decimal>;

    /// Current stock table.
    fn stock(&self) -> BTreeMap<ItemName, Decimal>;

    /// Whether the session is read-only.
    fn is_read_only(&self) -> bool {
        false
    }

    /// Copy the whole state at once.
    ///
    /// Every check inside a single craft reads from one snapshot, so an
    /// update pushed between two reads can never mix old and new values.
    fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            balance: self.balance(),
            inventory: self.inventory(),
            stock: self.stock(),
            read_only: self.is_read_only(),
        }
    }
}

impl GameStateSource for GameSnapshot {
    fn balance(&self) -> Decimal {
        self.balance
    }

    fn inventory(&self) -> BTreeMap<ItemName, Decimal> {
        self.inventory.clone()
    }

    fn stock(&self) -> BTreeMap<ItemName, Decimal> {
        self.stock.clone()
    }

    fn is_read_only(&self) -> bool {
        self.read_only
    }

    fn snapshot(&self) -> GameSnapshot {
        self.clone()
    }
}

/// A state change pushed in by the game-state service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateUpdate {
    /// New balance.
    Balance(Decimal),
    /// Full replacement inventory.
    Inventory(BTreeMap<ItemName, Decimal>),
    /// Full replacement stock table, e.g. after a resync.
    Stock(BTreeMap<ItemName, Decimal>),
    /// Session entered or left read-only mode.
    ReadOnly(bool),
}

/// The latest known state, kept current by pushed [`StateUpdate`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveState {
    current: GameSnapshot,
    revision: u64,
}

impl LiveState {
    /// Start from an initial snapshot.
    pub const fn new(initial: GameSnapshot) -> Self {
        Self {
            current: initial,
            revision: 0,
        }
    }

    /// Apply one pushed update.
    pub fn apply(&mut self, update: StateUpdate) {
        match update {
            StateUpdate::Balance(balance) => self.current.balance = balance,
            StateUpdate::Inventory(inventory) => self.current.inventory = inventory,
            StateUpdate::Stock(stock) => self.current.stock = stock,
            StateUpdate::ReadOnly(read_only) => self.current.read_only = read_only,
        }
        self.revision = self.revision.saturating_add(1);
    }

    /// Number of updates applied so far.
    pub const fn revision(&self) -> u64 {
        self.revision
    }
}

impl GameStateSource for LiveState {
    fn balance(&self) -> Decimal {
        self.current.balance
    }

    fn inventory(&self) -> BTreeMap<ItemName, Decimal> {
        self.current.inventory.clone()
    }

    fn stock(&self) -> BTreeMap<ItemName, Decimal> {
        self.current.stock.clone()
    }

    fn is_read_only(&self) -> bool {
        self.current.read_only
    }

    fn snapshot(&self) -> GameSnapshot {
        self.current.clone()
    }
}

// ---------------------------------------------------------------------------
// Sink
// ---------------------------------------------------------------------------

/// Where intents go. Sends are fire-and-forget.
pub trait GameSink {
    /// Deliver an intent to the game-state service.
    fn send(&mut self, intent: Intent);

    /// Remember `item` as the player's last crafted shortcut.
    fn remember_shortcut(&mut self, item: &ItemName);
}

/// A sink that keeps everything it receives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingSink {
    /// Intents in the order they were sent.
    pub intents: Vec<Intent>,
    /// The last shortcut assignment, if any.
    pub shortcut: Option<ItemName>,
}

impl RecordingSink {
    /// Create an empty sink.
    pub const fn new() -> Self {
        Self {
            intents: Vec::new(),
            shortcut: None,
        }
    }
}

impl GameSink for RecordingSink {
    fn send(&mut self, intent: Intent) {
        self.intents.push(intent);
    }

    fn remember_shortcut(&mut self, item: &ItemName) {
        self.shortcut = Some(item.clone());
    }
}
