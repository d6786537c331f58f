//! The craftable item catalog.
//!
//! A [`Catalog`] is an ordered, non-empty, validated list of
//! [`CraftableItem`]s. Order matters: the first entry is what a picker
//! selects when it opens. Catalogs are loaded from YAML:
//!
//! ```yaml
//! items:
//!   - name: Sunflower Statue
//!     price: "10"
//!     ingredients:
//!       - item: Wood
//!         amount: "2"
//!     supply: 100
//! ```
//!
//! Amounts are written as strings so they parse exactly.

use std::collections::BTreeSet;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use cropcraft_types::{CraftableItem, ItemName};

use crate::error::MarketError;

/// On-disk shape of a catalog file.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    items: Vec<CraftableItem>,
}

/// An ordered set of craftable items, keyed by unique name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CraftableItem>,
}

impl Catalog {
    /// Build a catalog, validating every entry.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::EmptyCatalog`] for an empty list, and the
    /// matching [`MarketError`] variant for duplicate names, duplicate
    /// ingredients, non-positive ingredient amounts, or negative prices.
    pub fn new(items: Vec<CraftableItem>) -> Result<Self, MarketError> {
        if items.is_empty() {
            return Err(MarketError::EmptyCatalog);
        }

        let mut names = BTreeSet::new();
        for item in &items {
            if !names.insert(&item.name) {
                return Err(MarketError::DuplicateItem(item.name.clone()));
            }
            validate_item(item)?;
        }

        Ok(Self { items })
    }

    /// Parse and validate a catalog from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Yaml`] for malformed YAML, or any validation
    /// error from [`Catalog::new`].
    pub fn parse(yaml: &str) -> Result<Self, MarketError> {
        let file: CatalogFile = serde_yml::from_str(yaml)?;
        Self::new(file.items)
    }

    /// Load and validate a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::Io`] if the file cannot be read, or any error
    /// from [`Catalog::parse`].
    pub fn from_file(path: &Path) -> Result<Self, MarketError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Restrict the catalog to the named items, in the order given.
    ///
    /// This is the offered subset a picker is created with.
    ///
    /// # Errors
    ///
    /// Returns [`MarketError::UnknownItem`] for a name not in this catalog,
    /// or [`MarketError::EmptyCatalog`] / [`MarketError::DuplicateItem`] if
    /// the requested list is empty or repeats a name.
    pub fn subset(&self, names: &[ItemName]) -> Result<Self, MarketError> {
        let items = names
            .iter()
            .map(|name| {
                self.get(name.as_str())
                    .cloned()
                    .ok_or_else(|| MarketError::UnknownItem(name.clone()))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(items)
    }

    /// Look up an item by name.
    pub fn get(&self, name: &str) -> Option<&CraftableItem> {
        self.items.iter().find(|item| item.name.as_str() == name)
    }

    /// Whether the catalog holds an item with this name.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// The first entry, if any. Always `Some` for a validated catalog.
    pub fn first(&self) -> Option<&CraftableItem> {
        self.items.first()
    }

    /// Iterate over the items in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &CraftableItem> {
        self.items.iter()
    }

    /// Number of items.
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog is empty. Never true for a validated catalog.
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn validate_item(item: &CraftableItem) -> Result<(), MarketError> {
    if item.price < Decimal::ZERO {
        return Err(MarketError::NegativePrice {
            item: item.name.clone(),
            price: item.price,
        });
    }

    let mut seen = BTreeSet::new();
    for ingredient in &item.ingredients {
        if !seen.insert(&ingredient.item) {
            return Err(MarketError::DuplicateIngredient {
                item: item.name.clone(),
                ingredient: ingredient.item.clone(),
            });
        }
        if ingredient.amount <= Decimal::ZERO {
            return Err(MarketError::NonPositiveIngredient {
                item: item.name.clone(),
                ingredient: ingredient.item.clone(),
                amount: ingredient.amount,
            });
        }
    }

    Ok(())
}
