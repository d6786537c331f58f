//! Selection and picker state.
//!
//! A [`Picker`] is one instance of the item chooser. It owns its own
//! [`Selection`] (there is no shared or global selection), a display mode,
//! and whether it is currently open.

use std::num::NonZeroU32;

use cropcraft_types::{CraftableItem, DisplayMode};

use crate::catalog::Catalog;
use crate::config::MarketConfig;
use crate::error::MarketError;
use crate::state::GameStateSource;

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// The item currently chosen from an offered catalog.
///
/// Starts at the first catalog entry and is never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    offered: Catalog,
    current: CraftableItem,
}

impl Selection {
    /// Select the first entry of `offered`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::EmptyCatalog`] if `offered` has no entries.
    pub fn new(offered: Catalog) -> Result<Self, MarketError> {
        let current = offered.first().cloned().ok_or(MarketError::EmptyCatalog)?;
        Ok(Self { offered, current })
    }

    /// Replace the selection with the named item.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::UnknownItem`] if the name is not in the
    /// offered catalog. The current selection is left unchanged.
    pub fn select(&mut self, name: &str) -> Result<&CraftableItem, MarketError> {
        let item = self
            .offered
            .get(name)
            .cloned()
            .ok_or_else(|| MarketError::UnknownItem(name.into()))?;
        self.current = item;
        Ok(&self.current)
    }

    /// The active item.
    pub const fn current(&self) -> &CraftableItem {
        &self.current
    }

    /// Whether the named item is the active one.
    pub fn is_selected(&self, name: &str) -> bool {
        self.current.name.as_str() == name
    }

    /// The catalog this selection picks from.
    pub const fn offered(&self) -> &Catalog {
        &self.offered
    }
}

// ---------------------------------------------------------------------------
// Picker
// ---------------------------------------------------------------------------

/// A request from the engine to the picker that hosts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerSignal {
    /// Close the picker.
    Close,
}

/// One item chooser: its selection, display mode, and open state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picker {
    selection: Selection,
    mode: DisplayMode,
    open: bool,
}

impl Picker {
    /// Create a closed picker over `offered`.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::EmptyCatalog`] if `offered` has no entries.
    pub fn new(offered: Catalog, mode: DisplayMode) -> Result<Self, MarketError> {
        Ok(Self {
            selection: Selection::new(offered)?,
            mode,
            open: false,
        })
    }

    /// Open the picker. Refused, returning `false`, in a read-only session.
    pub fn open<S: GameStateSource + ?Sized>(&mut self, state: &S) -> bool {
        if state.is_read_only() {
            return false;
        }
        self.open = true;
        true
    }

    /// Close the picker. The selection is kept.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// Apply a signal raised by the engine.
    pub const fn handle(&mut self, signal: PickerSignal) {
        match signal {
            PickerSignal::Close => self.close(),
        }
    }

    /// Whether the picker is open.
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// The picker's display mode.
    pub const fn mode(&self) -> DisplayMode {
        self.mode
    }

    /// The picker's selection.
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Mutable access for user picks.
    pub const fn selection_mut(&mut self) -> &mut Selection {
        &mut self.selection
    }

    /// Quantities the craft action is offered at.
    ///
    /// `Single` offers one unit; `Bulk` offers the configured quantities.
    pub fn offered_quantities(&self, config: &MarketConfig) -> Vec<NonZeroU32> {
        match self.mode {
            DisplayMode::Single => vec![NonZeroU32::MIN],
            DisplayMode::Bulk => config
                .bulk_quantities
                .iter()
                .filter_map(|&q| NonZeroU32::new(q))
                .collect(),
        }
    }
}
