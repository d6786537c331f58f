//! Enumeration types for the market engine.
//!
//! Ineligibility is data, not an error: every reason a craft is blocked is a
//! variant of [`Ineligibility`] that the presentation layer can render.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::ItemName;
use crate::quantity;

// ---------------------------------------------------------------------------
// Display mode
// ---------------------------------------------------------------------------

/// How a picker presents its craft action.
///
/// The mode only changes which quantities are offered. It never changes the
/// eligibility rules applied to a given quantity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum DisplayMode {
    /// One "Craft" button crafting a single unit.
    #[default]
    Single,
    /// One button per configured bulk quantity ("Craft 1", "Craft 10").
    Bulk,
}

// ---------------------------------------------------------------------------
// Availability
// ---------------------------------------------------------------------------

/// Availability of the selected item, highest precedence first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Availability {
    /// The lifetime supply cap has been fully minted. Permanent; no action
    /// is offered.
    SoldOutGlobally,
    /// The item is locked.
    Locked,
    /// Local stock is exhausted. Recoverable via a resync.
    SoldOutLocally,
    /// None of the above.
    Available,
}

// ---------------------------------------------------------------------------
// Ineligibility
// ---------------------------------------------------------------------------

/// A reason a craft of a given item and quantity cannot go ahead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub enum Ineligibility {
    /// The session is read-only.
    ReadOnly,
    /// The lifetime supply is exhausted.
    SoldOutGlobally,
    /// The item is locked.
    Locked,
    /// Local stock is zero or below.
    SoldOutLocally,
    /// Stock is positive but below the requested quantity.
    InsufficientStock {
        /// Remaining stock.
        #[ts(as = "String")]
        remaining: Decimal,
        /// Requested unit count.
        requested: u32,
    },
    /// The balance does not cover `price * quantity`.
    InsufficientFunds {
        /// Total price of the request, `None` when it is not representable.
        #[ts(as = "Option<String>")]
        required: Option<Decimal>,
        /// Current balance.
        #[ts(as = "String")]
        balance: Decimal,
    },
    /// One ingredient is short for the requested quantity.
    InsufficientIngredient {
        /// The short resource.
        item: ItemName,
        /// Total amount the request consumes, `None` when it is not
        /// representable.
        #[ts(as = "Option<String>")]
        required: Option<Decimal>,
        /// Amount currently held.
        #[ts(as = "String")]
        held: Decimal,
    },
}

impl core::fmt::Display for Ineligibility {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ReadOnly => f.write_str("read-only session"),
            Self::SoldOutGlobally => f.write_str("sold out"),
            Self::Locked => f.write_str("locked"),
            Self::SoldOutLocally => f.write_str("out of stock, sync to restock"),
            Self::InsufficientStock {
                remaining,
                requested,
            } => write!(
                f,
                "only {} in stock, {requested} requested",
                quantity::display(*remaining)
            ),
            Self::InsufficientFunds { required, balance } => write!(
                f,
                "insufficient funds: need {}, have {}",
                display_required(*required),
                quantity::display(*balance)
            ),
            Self::InsufficientIngredient {
                item,
                required,
                held,
            } => write!(
                f,
                "insufficient {item}: need {}, have {}",
                display_required(*required),
                quantity::display(*held)
            ),
        }
    }
}

fn display_required(required: Option<Decimal>) -> String {
    required.map_or_else(|| String::from("more than can be held"), quantity::display)
}
