//! JSON report shapes printed on stdout.

use rust_decimal::Decimal;
use serde::Serialize;

use cropcraft_market::{CraftOutcome, Eligibility, PickerSignal, RecordingSink};
use cropcraft_types::{Availability, CraftableItem, Intent, ItemName};

/// Eligibility of one catalog item at every offered quantity.
#[derive(Debug, Serialize)]
pub struct ItemReport {
    /// Catalog name.
    pub item: ItemName,
    /// Highest-precedence availability state.
    pub availability: Availability,
    /// Remaining restockable stock.
    pub remaining_stock: Decimal,
    /// Lifetime units left, when capped.
    pub supply_remaining: Option<u32>,
    /// Whether a resync is offered.
    pub can_restock: bool,
    /// One entry per offered quantity.
    pub offers: Vec<OfferReport>,
}

/// Eligibility at a single quantity.
#[derive(Debug, Serialize)]
pub struct OfferReport {
    /// Requested unit count.
    pub quantity: u32,
    /// Whether the craft button is enabled.
    pub can_craft: bool,
    /// Human-readable blocking reasons.
    pub reasons: Vec<String>,
}

impl ItemReport {
    /// Build a report from the evaluations of one item, one per quantity.
    ///
    /// Returns `None` when `evaluations` is empty.
    pub fn new(item: &CraftableItem, evaluations: &[Eligibility]) -> Option<Self> {
        let first = evaluations.first()?;
        Some(Self {
            item: item.name.clone(),
            availability: first.availability(),
            remaining_stock: first.stock.remaining_stock,
            supply_remaining: first.stock.supply_remaining,
            can_restock: first.can_restock(),
            offers: evaluations
                .iter()
                .map(|e| OfferReport {
                    quantity: e.quantity,
                    can_craft: e.can_craft(),
                    reasons: e.reasons.iter().map(ToString::to_string).collect(),
                })
                .collect(),
        })
    }
}

/// What a craft or restock command sent.
#[derive(Debug, Serialize)]
pub struct EmissionReport {
    /// Intents in send order.
    pub intents: Vec<Intent>,
    /// Rendered notification texts.
    pub notifications: Vec<String>,
    /// Human-readable blocking reasons, if the craft was blocked.
    pub reasons: Vec<String>,
    /// Shortcut assignment, if any.
    pub shortcut: Option<ItemName>,
    /// Whether the picker was asked to close.
    pub close_picker: bool,
}

impl EmissionReport {
    /// Report a craft attempt.
    pub fn crafted(outcome: &CraftOutcome, sink: RecordingSink, currency_label: &str) -> Self {
        Self {
            intents: sink.intents,
            notifications: outcome
                .notifications()
                .iter()
                .map(|n| n.content(currency_label))
                .collect(),
            reasons: outcome.reasons().iter().map(ToString::to_string).collect(),
            shortcut: sink.shortcut,
            close_picker: false,
        }
    }

    /// Report a restock and the signal it raised for the picker.
    pub fn restocked(signal: PickerSignal, sink: RecordingSink) -> Self {
        Self {
            intents: sink.intents,
            notifications: Vec::new(),
            reasons: Vec::new(),
            shortcut: sink.shortcut,
            close_picker: signal == PickerSignal::Close,
        }
    }
}
