//! Shared type definitions for the Cropcraft market engine.
//!
//! This crate is the single source of truth for the shapes exchanged between
//! the engine, the game-state service, and the UI. Types flow downstream to
//! `TypeScript` via `ts-rs`.
//!
//! # Modules
//!
//! - [`ids`] -- The [`ItemName`] key shared by catalog, inventory, and stock
//! - [`quantity`] -- Exact decimal scaling and comparison helpers
//! - [`structs`] -- Catalog entries and the [`GameSnapshot`]
//! - [`enums`] -- Display mode, availability, and ineligibility reasons
//! - [`intents`] -- Intents and notifications emitted by a craft or restock

pub mod enums;
pub mod ids;
pub mod intents;
pub mod quantity;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{Availability, DisplayMode, Ineligibility};
pub use ids::ItemName;
pub use intents::{Intent, Notification, NotificationKind};
pub use structs::{CraftableItem, GameSnapshot, Ingredient};
