//! Transaction emitter.
//!
//! Turns a confirmed craft or restock into intents for the game-state
//! service. A craft re-checks every precondition against one state snapshot
//! before emitting anything: it either sends exactly one well-formed intent
//! or nothing at all. Notifications are returned to the caller rather than
//! raised directly, so the toast layer stays out of the engine.
//!
//! The emitter never touches balance, inventory, or stock itself.

use std::num::NonZeroU32;

use rust_decimal::Decimal;
use tracing::{debug, info};

use cropcraft_types::{
    CraftableItem, GameSnapshot, Ineligibility, Intent, Notification, NotificationKind, quantity,
};

use crate::config::MarketConfig;
use crate::eligibility::{self, Eligibility};
use crate::selection::{PickerSignal, Selection};
use crate::state::{GameSink, GameStateSource};

/// What a craft attempt produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CraftOutcome {
    /// The intent was sent.
    Crafted {
        /// The intent that was sent.
        intent: Intent,
        /// Balance debit first, then one consumption per ingredient.
        notifications: Vec<Notification>,
    },
    /// Nothing was sent.
    Blocked {
        /// Why, in display order.
        reasons: Vec<Ineligibility>,
    },
}

impl CraftOutcome {
    /// Whether an intent was sent.
    pub const fn is_crafted(&self) -> bool {
        matches!(self, Self::Crafted { .. })
    }

    /// Notifications to display. Empty when blocked.
    pub fn notifications(&self) -> &[Notification] {
        match self {
            Self::Crafted { notifications, .. } => notifications,
            Self::Blocked { .. } => &[],
        }
    }

    /// Blocking reasons. Empty when crafted.
    pub fn reasons(&self) -> &[Ineligibility] {
        match self {
            Self::Crafted { .. } => &[],
            Self::Blocked { reasons } => reasons,
        }
    }
}

/// Builds and dispatches craft and resync intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionEmitter {
    stock_ceiling: Decimal,
    currency_label: String,
}

impl TransactionEmitter {
    /// Create an emitter from the market configuration.
    pub fn new(config: &MarketConfig) -> Self {
        Self {
            stock_ceiling: config.default_stock_ceiling,
            currency_label: config.currency_label.clone(),
        }
    }

    /// Currency prefix for rendering debit notifications.
    pub fn currency_label(&self) -> &str {
        &self.currency_label
    }

    /// Evaluate a craft without emitting anything.
    pub fn evaluate(
        &self,
        item: &CraftableItem,
        quantity: u32,
        snapshot: &GameSnapshot,
    ) -> Eligibility {
        eligibility::evaluate(item, quantity, snapshot, self.stock_ceiling)
    }

    /// Craft `quantity` units of the selected item.
    ///
    /// On success sends one [`Intent::ItemCrafted`], records the item as the
    /// player's shortcut, and returns the debit and consumption
    /// notifications. If any precondition fails, nothing is sent and the
    /// reasons are returned.
    pub fn craft<S, K>(
        &self,
        selection: &Selection,
        quantity: NonZeroU32,
        state: &S,
        sink: &mut K,
    ) -> CraftOutcome
    where
        S: GameStateSource + ?Sized,
        K: GameSink + ?Sized,
    {
        let item = selection.current();
        let snapshot = state.snapshot();
        let eligibility = self.evaluate(item, quantity.get(), &snapshot);

        if !eligibility.can_craft() {
            debug!(
                item = %item.name,
                quantity = quantity.get(),
                reasons = ?eligibility.reasons,
                "Craft blocked"
            );
            return CraftOutcome::Blocked {
                reasons: eligibility.reasons,
            };
        }

        let notifications = craft_notifications(item, quantity.get());
        let intent = Intent::ItemCrafted {
            item: item.name.clone(),
            amount: quantity.get(),
        };

        sink.send(intent.clone());
        sink.remember_shortcut(&item.name);

        info!(
            item = %item.name,
            quantity = quantity.get(),
            debit = ?eligibility.affordability.required_funds,
            "Craft intent emitted"
        );

        CraftOutcome::Crafted {
            intent,
            notifications,
        }
    }

    /// Ask the game-state service to refresh stock, and close the picker.
    ///
    /// Restocking has no preconditions: it does not depend on the balance or
    /// inventory, and an unnecessary resync is harmless.
    #[allow(clippy::unused_self)]
    pub fn restock<K: GameSink + ?Sized>(&self, sink: &mut K) -> PickerSignal {
        sink.send(Intent::Sync);
        info!("Resync intent emitted");
        PickerSignal::Close
    }
}

/// Debit and consumption notifications for `units` of `item`.
///
/// Only reached after eligibility passed, so every amount is representable;
/// an amount that is not would be skipped rather than misreported.
fn craft_notifications(item: &CraftableItem, units: u32) -> Vec<Notification> {
    let debit = quantity::scale(item.price, units).map(|amount| Notification {
        kind: NotificationKind::BalanceDebit,
        amount,
    });
    let consumed = item.ingredients.iter().filter_map(|ingredient| {
        quantity::scale(ingredient.amount, units).map(|amount| Notification {
            kind: NotificationKind::IngredientConsumed {
                item: ingredient.item.clone(),
            },
            amount,
        })
    });
    debit.into_iter().chain(consumed).collect()
}
