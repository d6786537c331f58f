//! Error types for the cropcraft-market crate.
//!
//! These cover malformed catalogs and invalid picker operations. A craft
//! that is merely not allowed is never an error: it is reported as
//! [`Ineligibility`](cropcraft_types::Ineligibility) data.

use rust_decimal::Decimal;

use cropcraft_types::ItemName;

/// Errors that can occur while building catalogs and pickers.
#[derive(Debug, thiserror::Error)]
pub enum MarketError {
    /// A catalog or picker was created with no items.
    #[error("catalog is empty")]
    EmptyCatalog,

    /// Two catalog entries share a name.
    #[error("duplicate catalog item: {0}")]
    DuplicateItem(ItemName),

    /// An item lists the same ingredient twice.
    #[error("item {item} lists ingredient {ingredient} more than once")]
    DuplicateIngredient {
        /// The offending item.
        item: ItemName,
        /// The repeated ingredient.
        ingredient: ItemName,
    },

    /// An ingredient amount is zero or negative.
    #[error("item {item} requires a non-positive amount {amount} of {ingredient}")]
    NonPositiveIngredient {
        /// The offending item.
        item: ItemName,
        /// The ingredient with the bad amount.
        ingredient: ItemName,
        /// The rejected amount.
        amount: Decimal,
    },

    /// An item has a negative price.
    #[error("item {item} has negative price {price}")]
    NegativePrice {
        /// The offending item.
        item: ItemName,
        /// The rejected price.
        price: Decimal,
    },

    /// A name does not belong to the catalog it was looked up in.
    #[error("unknown item: {0}")]
    UnknownItem(ItemName),

    /// Failed to read a catalog file from disk.
    #[error("failed to read catalog file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse catalog YAML.
    #[error("failed to parse catalog YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },
}

impl From<serde_yml::Error> for MarketError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}
