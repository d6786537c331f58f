//! Combined craft eligibility for one item, quantity, and state snapshot.
//!
//! Folds the stock and affordability results into one ordered list of
//! [`Ineligibility`] reasons. The order is the order the presentation layer
//! should surface them in: read-only first, then availability, then stock
//! depth, funds, and finally each short ingredient in recipe order.

use rust_decimal::Decimal;

use cropcraft_types::{Availability, CraftableItem, GameSnapshot, Ineligibility};

use crate::affordability::{self, Affordability};
use crate::stock::{self, StockStatus};

/// Everything known about whether a craft may go ahead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Eligibility {
    /// Requested unit count.
    pub quantity: u32,
    /// Balance and ingredient check.
    pub affordability: Affordability,
    /// Supply, lock, and stock check.
    pub stock: StockStatus,
    /// Every blocking reason, in display order.
    pub reasons: Vec<Ineligibility>,
}

impl Eligibility {
    /// True iff nothing blocks the craft.
    pub fn can_craft(&self) -> bool {
        self.reasons.is_empty()
    }

    /// True iff a resync is the way forward: the item is sold out locally
    /// and neither permanently sold out nor locked.
    pub fn can_restock(&self) -> bool {
        self.stock.availability() == Availability::SoldOutLocally
    }

    /// The highest-precedence availability state.
    pub const fn availability(&self) -> Availability {
        self.stock.availability()
    }
}

/// Evaluate a craft of `quantity` units of `item` against `snapshot`.
pub fn evaluate(
    item: &CraftableItem,
    quantity: u32,
    snapshot: &GameSnapshot,
    stock_ceiling: Decimal,
) -> Eligibility {
    let stock = stock::evaluate(item, &snapshot.stock, stock_ceiling);
    let affordability =
        affordability::evaluate(item, quantity, snapshot.balance, &snapshot.inventory);

    let mut reasons = Vec::new();
    if snapshot.read_only {
        reasons.push(Ineligibility::ReadOnly);
    }
    reasons.extend(stock.reasons(quantity));
    reasons.extend(affordability.reasons());

    Eligibility {
        quantity,
        affordability,
        stock,
        reasons,
    }
}

#[cfg(test)]
mod tests {
    use cropcraft_types::ItemName;

    use super::*;
    use crate::stock::DEFAULT_STOCK_CEILING;

    fn statue() -> CraftableItem {
        CraftableItem::new("Sunflower Statue", Decimal::new(10, 0))
            .with_ingredient("Wood", Decimal::new(2, 0))
    }

    fn rich() -> GameSnapshot {
        GameSnapshot::with_balance(Decimal::new(10, 0)).holding("Wood", Decimal::new(2, 0))
    }

    #[test]
    fn eligible_when_everything_holds() {
        let result = evaluate(&statue(), 1, &rich(), DEFAULT_STOCK_CEILING);
        assert!(result.can_craft());
        assert!(!result.can_restock());
        assert_eq!(result.availability(), Availability::Available);
    }

    #[test]
    fn reasons_follow_display_order() {
        let snapshot = GameSnapshot {
            read_only: true,
            ..GameSnapshot::with_balance(Decimal::ZERO)
        }
        .stocked("Sunflower Statue", Decimal::ZERO);
        let result = evaluate(&statue(), 1, &snapshot, DEFAULT_STOCK_CEILING);
        assert_eq!(
            result.reasons,
            vec![
                Ineligibility::ReadOnly,
                Ineligibility::SoldOutLocally,
                Ineligibility::InsufficientFunds {
                    required: Some(Decimal::new(10, 0)),
                    balance: Decimal::ZERO,
                },
                Ineligibility::InsufficientIngredient {
                    item: ItemName::from("Wood"),
                    required: Some(Decimal::new(2, 0)),
                    held: Decimal::ZERO,
                },
            ]
        );
    }

    #[test]
    fn restock_offered_only_for_local_sell_out() {
        let sold_out = rich().stocked("Sunflower Statue", Decimal::ZERO);
        let local = evaluate(&statue(), 1, &sold_out, DEFAULT_STOCK_CEILING);
        assert!(local.can_restock());
        assert!(!local.can_craft());

        let capped = statue().with_supply(0);
        let global = evaluate(&capped, 1, &sold_out, DEFAULT_STOCK_CEILING);
        assert!(!global.can_restock());

        let locked = statue().locked();
        let locked_result = evaluate(&locked, 1, &sold_out, DEFAULT_STOCK_CEILING);
        assert!(!locked_result.can_restock());
    }

    #[test]
    fn restock_offered_even_when_unaffordable() {
        let broke = GameSnapshot::with_balance(Decimal::ZERO).stocked("Sunflower Statue", Decimal::ZERO);
        let result = evaluate(&statue(), 1, &broke, DEFAULT_STOCK_CEILING);
        assert!(result.can_restock());
    }
}
