//! Craft eligibility and transaction engine for the Cropcraft market.
//!
//! Given a catalog of craftable items and a read-only snapshot of the
//! player's balance, inventory, and the shared stock table, this crate
//! decides what can be crafted and at what quantity, and emits the intents
//! that ask the external game-state service to apply a craft or a resync.
//!
//! It performs no I/O beyond loading catalog and config files, never mutates
//! game state, and has no fatal path: a craft that cannot go ahead is
//! reported as [`Ineligibility`](cropcraft_types::Ineligibility) data.
//!
//! # Modules
//!
//! - [`affordability`] -- Balance and ingredient sufficiency ([`Affordability`])
//! - [`stock`] -- Supply cap, lock, and restockable stock ([`StockStatus`])
//! - [`eligibility`] -- Both checks folded into ordered reasons ([`Eligibility`])
//! - [`catalog`] -- Validated, ordered item catalog ([`Catalog`])
//! - [`selection`] -- Per-picker selection and open state ([`Picker`])
//! - [`state`] -- State source and intent sink seams ([`GameStateSource`], [`GameSink`])
//! - [`emitter`] -- Craft and restock intent emission ([`TransactionEmitter`])
//! - [`config`] -- YAML configuration ([`CropcraftConfig`])
//! - [`error`] -- Catalog and picker errors ([`MarketError`])
//!
//! # Usage
//!
//! ```
//! use std::num::NonZeroU32;
//!
//! use cropcraft_market::{Catalog, MarketConfig, Picker, RecordingSink, TransactionEmitter};
//! use cropcraft_types::{CraftableItem, DisplayMode, GameSnapshot, Intent};
//! use rust_decimal::Decimal;
//!
//! let statue = CraftableItem::new("Sunflower Statue", Decimal::new(10, 0))
//!     .with_ingredient("Wood", Decimal::new(2, 0));
//! let catalog = Catalog::new(vec![statue]).ok();
//! let picker = catalog.and_then(|c| Picker::new(c, DisplayMode::Single).ok());
//!
//! let state = GameSnapshot::with_balance(Decimal::new(10, 0))
//!     .holding("Wood", Decimal::new(2, 0));
//! let emitter = TransactionEmitter::new(&MarketConfig::default());
//! let mut sink = RecordingSink::new();
//!
//! if let Some(picker) = picker {
//!     let outcome = emitter.craft(picker.selection(), NonZeroU32::MIN, &state, &mut sink);
//!     assert!(outcome.is_crafted());
//! }
//! assert_eq!(sink.intents.len(), 1);
//! assert!(matches!(sink.intents.first(), Some(Intent::ItemCrafted { amount: 1, .. })));
//! ```

pub mod affordability;
pub mod catalog;
pub mod config;
pub mod eligibility;
pub mod emitter;
pub mod error;
pub mod selection;
pub mod state;
pub mod stock;

// Re-export primary types at crate root.
pub use affordability::{Affordability, Shortfall};
pub use catalog::Catalog;
pub use config::{ConfigError, CropcraftConfig, LoggingConfig, MarketConfig};
pub use eligibility::Eligibility;
pub use emitter::{CraftOutcome, TransactionEmitter};
pub use error::MarketError;
pub use selection::{Picker, PickerSignal, Selection};
pub use state::{GameSink, GameStateSource, LiveState, RecordingSink, StateUpdate};
pub use stock::{DEFAULT_STOCK_CEILING, StockStatus, stock_of};
