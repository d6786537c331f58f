//! Catalog entries and the read-only game state snapshot.
//!
//! The catalog types describe what can be crafted and at what cost. The
//! [`GameSnapshot`] is the engine's only view of the player's balance,
//! inventory, and the shared stock table; it is owned and mutated by the
//! external game-state service, never by the engine.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::ItemName;

// ---------------------------------------------------------------------------
// Catalog entries
// ---------------------------------------------------------------------------

/// One ingredient line of a recipe: a resource and the amount consumed per
/// unit crafted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Ingredient {
    /// The inventory resource consumed.
    pub item: ItemName,
    /// Amount consumed per crafted unit. Always strictly positive.
    #[ts(as = "String")]
    pub amount: Decimal,
}

/// A catalog entry that can be bought or built from ingredients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct CraftableItem {
    /// Unique catalog key.
    pub name: ItemName,
    /// Balance debited per crafted unit.
    #[ts(as = "String")]
    pub price: Decimal,
    /// Ingredients consumed per crafted unit, in display order.
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    /// Lifetime mint cap. `None` is unlimited; `Some(0)` is permanently
    /// sold out.
    #[serde(default)]
    pub supply: Option<u32>,
    /// Locked items are shown but cannot be crafted.
    #[serde(default)]
    pub disabled: bool,
    /// Display text.
    #[serde(default)]
    pub description: String,
}

impl CraftableItem {
    /// Create an unlocked, unlimited item with no ingredients.
    pub fn new(name: impl Into<ItemName>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
            ingredients: Vec::new(),
            supply: None,
            disabled: false,
            description: String::new(),
        }
    }

    /// Append an ingredient line.
    #[must_use]
    pub fn with_ingredient(mut self, item: impl Into<ItemName>, amount: Decimal) -> Self {
        self.ingredients.push(Ingredient {
            item: item.into(),
            amount,
        });
        self
    }

    /// Set the lifetime supply cap.
    #[must_use]
    pub const fn with_supply(mut self, supply: u32) -> Self {
        self.supply = Some(supply);
        self
    }

    /// Mark the item as locked.
    #[must_use]
    pub const fn locked(mut self) -> Self {
        self.disabled = true;
        self
    }
}

// ---------------------------------------------------------------------------
// Game state snapshot
// ---------------------------------------------------------------------------

/// A consistent copy of the player state the engine evaluates against.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct GameSnapshot {
    /// Player balance.
    #[ts(as = "String")]
    pub balance: Decimal,
    /// Held quantity per resource. Absent resources are held at zero.
    #[serde(default)]
    #[ts(as = "BTreeMap<ItemName, String>")]
    pub inventory: BTreeMap<ItemName, Decimal>,
    /// Remaining restockable stock per item, replicated from the server.
    /// Absent items fall back to the configured stock ceiling.
    #[serde(default)]
    #[ts(as = "BTreeMap<ItemName, String>")]
    pub stock: BTreeMap<ItemName, Decimal>,
    /// Read-only sessions (e.g. visiting another farm) cannot open the shop.
    #[serde(default)]
    pub read_only: bool,
}

impl GameSnapshot {
    /// Create a snapshot with the given balance and nothing else.
    pub fn with_balance(balance: Decimal) -> Self {
        Self {
            balance,
            ..Self::default()
        }
    }

    /// Set the held quantity of a resource.
    #[must_use]
    pub fn holding(mut self, item: impl Into<ItemName>, quantity: Decimal) -> Self {
        self.inventory.insert(item.into(), quantity);
        self
    }

    /// Set the stock table entry of an item.
    #[must_use]
    pub fn stocked(mut self, item: impl Into<ItemName>, remaining: Decimal) -> Self {
        self.stock.insert(item.into(), remaining);
        self
    }

    /// Held quantity of a resource, zero when absent.
    pub fn held(&self, item: &ItemName) -> Decimal {
        self.inventory.get(item).copied().unwrap_or(Decimal::ZERO)
    }
}
