//! Exact quantity arithmetic for prices, ingredient amounts, and stock.
//!
//! Every comparison and every bulk scaling in the market engine goes through
//! these helpers. Quantities are [`Decimal`] values, so `0.1 * 3` is exactly
//! `0.3` and an inventory holding `0.3` covers it. No floating point is ever
//! involved.

use rust_decimal::Decimal;

/// Scale a per-unit amount by a requested unit count.
///
/// Returns `None` when the product is not representable. Callers treat that
/// as a requirement no balance or holding can cover, never as a cap.
pub fn scale(amount: Decimal, multiplier: u32) -> Option<Decimal> {
    amount.checked_mul(Decimal::from(multiplier))
}

/// Whether `have` covers a scaled requirement. An unrepresentable
/// requirement is never covered.
pub fn covers(have: Decimal, need: Option<Decimal>) -> bool {
    need.is_some_and(|need| at_least(have, need))
}

/// Whether `have` covers `need`.
pub fn at_least(have: Decimal, need: Decimal) -> bool {
    have >= need
}

/// Whether `a` is strictly below `b`.
pub fn less_than(a: Decimal, b: Decimal) -> bool {
    a < b
}

/// Render an amount without trailing fractional zeros (`2.50 * 2` prints `5`).
pub fn display(amount: Decimal) -> String {
    amount.normalize().to_string()
}
