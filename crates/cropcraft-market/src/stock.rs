//! Stock evaluator.
//!
//! Two independent limits apply to every item:
//!
//! - **Supply** is a lifetime cap carried on the item itself. `Some(0)` means
//!   every unit that will ever exist has been minted. Nothing recovers it.
//! - **Stock** is a server-replicated counter in the stock table. When it
//!   runs out locally, a resync may bring more.
//!
//! The two are reported separately and must stay separate: only local
//! exhaustion offers a resync.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use cropcraft_types::{Availability, CraftableItem, Ineligibility, ItemName, quantity};

/// Stock assumed for an item missing from the stock table.
pub const DEFAULT_STOCK_CEILING: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

/// Remaining stock of `item`: its stock table entry, or `ceiling` if absent.
pub fn stock_of(
    item: &CraftableItem,
    table: &BTreeMap<ItemName, Decimal>,
    ceiling: Decimal,
) -> Decimal {
    table.get(&item.name).copied().unwrap_or(ceiling)
}

/// Result of a stock check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockStatus {
    /// Stock table value, or the ceiling when absent.
    pub remaining_stock: Decimal,
    /// The lifetime supply is exhausted.
    pub sold_out_globally: bool,
    /// Remaining stock is zero or below.
    pub sold_out_locally: bool,
    /// Mirrors the item's `disabled` flag.
    pub locked: bool,
    /// Lifetime units left, when capped and not yet exhausted.
    pub supply_remaining: Option<u32>,
}

impl StockStatus {
    /// The single highest-precedence availability state.
    pub const fn availability(&self) -> Availability {
        if self.sold_out_globally {
            Availability::SoldOutGlobally
        } else if self.locked {
            Availability::Locked
        } else if self.sold_out_locally {
            Availability::SoldOutLocally
        } else {
            Availability::Available
        }
    }

    /// Whether remaining stock covers `requested` units.
    pub fn covers(&self, requested: u32) -> bool {
        quantity::at_least(self.remaining_stock, Decimal::from(requested))
    }

    /// Ineligibility reasons for crafting `requested` units.
    ///
    /// Reports the highest-precedence availability state only, or, for an
    /// available item, an [`Ineligibility::InsufficientStock`] when stock is
    /// positive but below the request.
    pub fn reasons(&self, requested: u32) -> Vec<Ineligibility> {
        match self.availability() {
            Availability::SoldOutGlobally => vec![Ineligibility::SoldOutGlobally],
            Availability::Locked => vec![Ineligibility::Locked],
            Availability::SoldOutLocally => vec![Ineligibility::SoldOutLocally],
            Availability::Available if !self.covers(requested) => {
                vec![Ineligibility::InsufficientStock {
                    remaining: self.remaining_stock,
                    requested,
                }]
            }
            Availability::Available => Vec::new(),
        }
    }
}

/// Evaluate the stock state of `item` against the shared stock table.
pub fn evaluate(
    item: &CraftableItem,
    table: &BTreeMap<ItemName, Decimal>,
    ceiling: Decimal,
) -> StockStatus {
    let remaining_stock = stock_of(item, table, ceiling);
    StockStatus {
        remaining_stock,
        sold_out_globally: item.supply == Some(0),
        sold_out_locally: remaining_stock <= Decimal::ZERO,
        locked: item.disabled,
        supply_remaining: item.supply.filter(|&left| left > 0),
    }
}
