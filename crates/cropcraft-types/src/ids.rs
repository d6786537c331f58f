//! Name-keyed identifiers for catalog items and inventory holdings.
//!
//! Crafted items and the resources they consume share one namespace: an item
//! crafted today lands in the same inventory its ingredients were drawn from,
//! and can itself be an ingredient tomorrow. A single [`ItemName`] newtype
//! therefore keys the catalog, the inventory, and the stock table.

use core::borrow::Borrow;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Unique name of a catalog item or inventory resource (e.g. `"Sunflower Seed"`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ItemName(pub String);

impl ItemName {
    /// Create a name from anything string-like.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Borrow the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemName {
    fn from(name: &str) -> Self {
        Self(name.to_owned())
    }
}

impl From<String> for ItemName {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl Borrow<str> for ItemName {
    fn borrow(&self) -> &str {
        &self.0
    }
}
