//! Error types for the `cropcraft` binary.
//!
//! [`CliError`] wraps every failure mode of loading inputs and writing the
//! report, so `main` can propagate with `?`.

/// Top-level error for the `cropcraft` binary.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: cropcraft_market::ConfigError,
    },

    /// Catalog loading or picker construction failed.
    #[error("market error: {source}")]
    Market {
        /// The underlying market error.
        #[from]
        source: cropcraft_market::MarketError,
    },

    /// The state snapshot file could not be read.
    #[error("failed to read state file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// The state snapshot or the report could not be (de)serialized.
    #[error("JSON error: {source}")]
    Json {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
