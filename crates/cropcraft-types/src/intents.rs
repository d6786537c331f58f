//! Intents and notifications emitted by the transaction emitter.
//!
//! Intents are requests for the external game-state service, which applies
//! them authoritatively. Notifications are fire-and-forget toast content.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::ItemName;
use crate::quantity;

/// A desired state change, sent to the game-state service.
///
/// Serializes with a `type` tag matching the service's event names:
/// `{"type":"item.crafted","item":"Axe","amount":1}` and `{"type":"SYNC"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
#[serde(tag = "type")]
pub enum Intent {
    /// Craft `amount` units of `item`: debit balance, consume ingredients,
    /// decrement stock.
    #[serde(rename = "item.crafted")]
    ItemCrafted {
        /// The crafted item.
        item: ItemName,
        /// Units crafted.
        amount: u32,
    },
    /// Refresh stock from the authoritative store.
    #[serde(rename = "SYNC")]
    Sync,
}

/// What a notification reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum NotificationKind {
    /// The balance is debited by the craft's total price.
    BalanceDebit,
    /// An ingredient is consumed by the craft.
    IngredientConsumed {
        /// The consumed resource.
        item: ItemName,
    },
}

/// A user-facing delta raised alongside a craft intent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct Notification {
    /// What changed.
    pub kind: NotificationKind,
    /// Exact amount of the change.
    #[ts(as = "String")]
    pub amount: Decimal,
}

impl Notification {
    /// Render the toast text, e.g. `"SFL -$10"` or `"Item Wood -2"`.
    pub fn content(&self, currency_label: &str) -> String {
        let amount = quantity::display(self.amount);
        match &self.kind {
            NotificationKind::BalanceDebit => format!("{currency_label} -${amount}"),
            NotificationKind::IngredientConsumed { item } => format!("Item {item} -{amount}"),
        }
    }
}
