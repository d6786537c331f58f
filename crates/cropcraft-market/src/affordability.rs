//! Affordability evaluator.
//!
//! A pure predicate over (item, quantity, balance, inventory): does the player
//! hold enough balance and enough of every ingredient to craft `quantity`
//! units? Nothing is mutated; the same inputs always produce the same result.
//!
//! Every requirement is `per_unit * quantity` computed with
//! [`quantity::scale`], and a resource missing from the inventory is held at
//! zero. A requirement too large to represent is short no matter what is
//! held.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use cropcraft_types::{CraftableItem, Ineligibility, ItemName, quantity};

/// One ingredient the player is short of.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortfall {
    /// The short resource.
    pub item: ItemName,
    /// Total amount the request consumes, `None` when not representable.
    pub required: Option<Decimal>,
    /// Amount currently held.
    pub held: Decimal,
}

/// Result of an affordability check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordability {
    /// Total price of the request (`price * quantity`), `None` when not
    /// representable.
    pub required_funds: Option<Decimal>,
    /// Balance the check ran against.
    pub balance: Decimal,
    /// True iff `balance < price * quantity`, or the product overflows.
    pub insufficient_funds: bool,
    /// Every short ingredient, in recipe order.
    pub shortfalls: Vec<Shortfall>,
}

impl Affordability {
    /// True iff any ingredient is short.
    pub fn insufficient_ingredients(&self) -> bool {
        !self.shortfalls.is_empty()
    }

    /// True iff neither funds nor ingredients are short.
    pub fn is_affordable(&self) -> bool {
        !self.insufficient_funds && self.shortfalls.is_empty()
    }

    /// Whether the named resource is among the shortfalls, for inline
    /// highlighting of a single ingredient line.
    pub fn is_short_of(&self, item: &str) -> bool {
        self.shortfalls.iter().any(|s| s.item.as_str() == item)
    }

    /// Ineligibility reasons, funds first, then ingredients in recipe order.
    pub fn reasons(&self) -> Vec<Ineligibility> {
        let funds = self
            .insufficient_funds
            .then(|| Ineligibility::InsufficientFunds {
                required: self.required_funds,
                balance: self.balance,
            });
        let ingredients = self
            .shortfalls
            .iter()
            .map(|s| Ineligibility::InsufficientIngredient {
                item: s.item.clone(),
                required: s.required,
                held: s.held,
            });
        funds.into_iter().chain(ingredients).collect()
    }
}

/// Evaluate whether `quantity` units of `item` are affordable.
///
/// A quantity of zero requires nothing and reports both flags false.
pub fn evaluate(
    item: &CraftableItem,
    quantity: u32,
    balance: Decimal,
    inventory: &BTreeMap<ItemName, Decimal>,
) -> Affordability {
    if quantity == 0 {
        return Affordability {
            required_funds: Some(Decimal::ZERO),
            balance,
            insufficient_funds: false,
            shortfalls: Vec::new(),
        };
    }

    let required_funds = quantity::scale(item.price, quantity);
    let insufficient_funds = !quantity::covers(balance, required_funds);

    let shortfalls = item
        .ingredients
        .iter()
        .filter_map(|ingredient| {
            let required = quantity::scale(ingredient.amount, quantity);
            let held = inventory
                .get(&ingredient.item)
                .copied()
                .unwrap_or(Decimal::ZERO);
            (!quantity::covers(held, required)).then(|| Shortfall {
                item: ingredient.item.clone(),
                required,
                held,
            })
        })
        .collect();

    Affordability {
        required_funds,
        balance,
        insufficient_funds,
        shortfalls,
    }
}
